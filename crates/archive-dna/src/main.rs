use std::process::ExitCode;

use clap::Parser;

use crate::cli::app::App;

mod cli;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    match cli::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            error::exit_code(&err)
        }
    }
}
