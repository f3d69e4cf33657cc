use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Args;

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct ImportProductsArgs {
    /// File of tab-separated `code name inventory price` lines; stdin when omitted
    #[arg(long, short)]
    file: Option<PathBuf>,
}

pub(crate) fn run(args: &ImportProductsArgs, session: &mut Session) -> Result<(), String> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?,
        None => {
            let mut text = String::new();

            io::stdin()
                .read_to_string(&mut text)
                .map_err(|error| format!("failed to read stdin: {error}"))?;

            text
        }
    };

    let count = session
        .ledger
        .import_products(&text)
        .map_err(|error| format!("failed to import products: {error}"))?;

    println!("imported {count} products");

    Ok(())
}
