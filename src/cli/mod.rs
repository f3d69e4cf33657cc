use clap::{Parser, Subcommand};
use consign::{config::AppConfig, context::Ledger, storage::FileStore};
use rusty_money::iso::Currency;

mod balance;
mod client;
mod export;
mod product;
mod reset;
mod search;

#[derive(Debug, Parser)]
#[command(name = "consign", about = "Consignment shop ledger", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage clients and the products they hold
    Client(client::ClientCommand),

    /// Manage the product catalog
    Product(product::ProductCommand),

    /// Show client balances
    Balance(balance::BalanceArgs),

    /// Export clients or products as CSV
    Export(export::ExportCommand),

    /// Delete every client and product
    Reset(reset::ResetArgs),
}

/// Loaded ledger plus display settings for one command invocation.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) ledger: Ledger<FileStore>,
    pub(crate) currency: &'static Currency,
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), String> {
        let currency = self
            .config
            .display
            .currency()
            .map_err(|error| error.to_string())?;

        let mut session = Session {
            ledger: Ledger::load(self.config.storage.open()),
            currency,
        };

        match self.command {
            Commands::Client(command) => client::run(command, &mut session),
            Commands::Product(command) => product::run(command, &mut session),
            Commands::Balance(args) => {
                balance::run(&args, &session);
                Ok(())
            }
            Commands::Export(command) => export::run(command, &session),
            Commands::Reset(args) => reset::run(&args, &mut session),
        }
    }
}
