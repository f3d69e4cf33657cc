use clap::{Args, Subcommand};

use super::Session;

mod add;
mod edit;
mod import;
mod list;
mod remove;
mod show;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to the catalog
    Add(add::AddProductArgs),

    /// Change a catalog product
    Edit(edit::EditProductArgs),

    /// Delete a catalog product
    Remove(remove::RemoveProductArgs),

    /// List catalog products
    List(list::ListProductsArgs),

    /// Show a product and who holds it
    Show(show::ShowProductArgs),

    /// Bulk-add products from tab-separated lines
    Import(import::ImportProductsArgs),
}

pub(crate) fn run(command: ProductCommand, session: &mut Session) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Add(args) => add::run(args, session),
        ProductSubcommand::Edit(args) => edit::run(&args, session),
        ProductSubcommand::Remove(args) => remove::run(&args, session),
        ProductSubcommand::List(args) => {
            list::run(&args, session);
            Ok(())
        }
        ProductSubcommand::Show(args) => show::run(&args, session),
        ProductSubcommand::Import(args) => import::run(&args, session),
    }
}
