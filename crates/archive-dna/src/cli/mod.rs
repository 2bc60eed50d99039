pub mod app;
pub mod compare;
pub mod parse;

use crate::cli::app::{App, Commands};
use crate::config::Config;

pub fn run(app: App) -> anyhow::Result<()> {
    let config = Config::load(app.config.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    match app.cmd {
        Commands::Parse(arg) => arg.run(&config),
        Commands::Compare(arg) => arg.run(&config),
    }
}
