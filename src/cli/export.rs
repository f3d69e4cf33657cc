use std::{fs, path::PathBuf};

use clap::{Args, Subcommand};

use super::{
    Session,
    balance::BalanceArgs,
    search::{ClientSearchArgs, ProductSearchArgs},
};

#[derive(Debug, Args)]
pub(crate) struct ExportCommand {
    #[command(subcommand)]
    command: ExportSubcommand,
}

#[derive(Debug, Subcommand)]
enum ExportSubcommand {
    /// Export clients with balances and holdings
    Clients(ExportClientsArgs),

    /// Export the balance view: name, code, balance and holdings
    Balances(ExportBalancesArgs),

    /// Export catalog products with their holders
    Products(ExportProductsArgs),
}

#[derive(Debug, Args)]
struct ExportClientsArgs {
    #[command(flatten)]
    search: ClientSearchArgs,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ExportBalancesArgs {
    #[command(flatten)]
    view: BalanceArgs,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ExportProductsArgs {
    #[command(flatten)]
    search: ProductSearchArgs,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub(crate) fn run(command: ExportCommand, session: &Session) -> Result<(), String> {
    let (csv, output) = match command.command {
        ExportSubcommand::Clients(args) => (
            session
                .ledger
                .export_clients(&args.search.search, &args.search.filters),
            args.output,
        ),
        ExportSubcommand::Balances(args) => (
            session.ledger.export_balances(
                &args.view.search.search,
                &args.view.search.filters,
                args.view.all,
            ),
            args.output,
        ),
        ExportSubcommand::Products(args) => (
            session
                .ledger
                .export_products(&args.search.search, &args.search.filters),
            args.output,
        ),
    };

    let csv = csv.map_err(|error| format!("failed to export: {error}"))?;

    write(&csv, output)
}

fn write(csv: &str, output: Option<PathBuf>) -> Result<(), String> {
    match output {
        Some(path) => fs::write(&path, csv)
            .map_err(|error| format!("failed to write {}: {error}", path.display())),
        None => {
            println!("{csv}");
            Ok(())
        }
    }
}
