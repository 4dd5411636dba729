use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::info;

mod router;

use common::directory::{Presenter, StdoutPresenter};

use crate::router::Action;

fn main() -> Result<()> {
    let log_file = std::env::var_os("BNYAN_LOG_FILE").map(PathBuf::from);
    let _guard = common::logging::init(log_file.as_deref());

    // The host invokes a plugin as `<plugin-base-url> <handle> <query-string>`.
    let args: Vec<String> = std::env::args().collect();
    info!("{:?}", args);

    if args.len() < 4 {
        bail!("usage: image <plugin-base-url> <handle> <query-string>");
    }

    let handle: i64 = args[2]
        .parse()
        .context("plugin handle must be an integer")?;
    let query = args[3].trim_start_matches('?');

    let mut presenter = StdoutPresenter::new(handle);

    if let Some(Action::ShowImage { picture_url }) = Action::from_query(query) {
        info!("Showing image: {}", picture_url);
        presenter.show_picture(&picture_url);
    }

    Ok(())
}
