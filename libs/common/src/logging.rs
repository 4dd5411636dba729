//! Logging setup shared by both addons
//!
//! Installs a stdout layer filtered by `RUST_LOG` plus an optional
//! append-style file layer. Call once at startup and hold the returned
//! guard for the life of the process so the file writer flushes.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global subscriber.
///
/// With a log file the output goes to stdout and the file; without one,
/// stdout only.
pub fn init(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    match log_file {
        Some(path) => {
            let file_dir = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("4Nyan.log");

            let file_appender = tracing_appender::rolling::never(file_dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(non_blocking),
                )
                .init();

            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}
