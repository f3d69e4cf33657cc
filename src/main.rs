//! Consign CLI

use std::process::ExitCode;

use clap::Parser;
use consign::{config::load_dotenv, observability::init_logging};

mod cli;

fn main() -> ExitCode {
    load_dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = init_logging(&cli.config.logging) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
