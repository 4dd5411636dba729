use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

mod error;
mod handlers;
mod router;

use common::config::ServerConfig;
use common::directory::StdoutPresenter;
use common::error::ConfigError;

use crate::handlers::Addon;

#[tokio::main]
async fn main() -> Result<()> {
    let log_file = std::env::var_os("BNYAN_LOG_FILE").map(PathBuf::from);
    let _guard = common::logging::init(log_file.as_deref());

    // The host invokes a plugin as `<plugin-base-url> <handle> <query-string>`.
    let args: Vec<String> = std::env::args().collect();
    info!("{:?}", args);

    if args.len() < 4 {
        bail!("usage: video <plugin-base-url> <handle> <query-string>");
    }

    let plugin_url = args[1].clone();
    let handle: i64 = args[2]
        .parse()
        .context("plugin handle must be an integer")?;
    let query = args[3].trim_start_matches('?');

    let config = load_config()?;

    let mut presenter = StdoutPresenter::new(handle);
    let mut addon = Addon::new(&config, plugin_url, &mut presenter);

    addon.run(query).await?;

    Ok(())
}

/// Read the server settings from `BNYAN_CONFIG` (a JSON file) when set,
/// from the environment otherwise.
fn load_config() -> Result<ServerConfig, ConfigError> {
    match std::env::var_os("BNYAN_CONFIG") {
        Some(path) => ServerConfig::from_file(Path::new(&path)),
        None => ServerConfig::from_env(),
    }
}
