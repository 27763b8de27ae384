#[path = "modules/app.rs"]
mod app;
#[path = "modules/cli.rs"]
mod cli;
#[path = "modules/error.rs"]
mod error;
#[path = "modules/io.rs"]
mod io;

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(error: &dyn Error) {
    eprintln!("Error: {}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("Caused by: {}", cause);
        source = cause.source();
    }
}
