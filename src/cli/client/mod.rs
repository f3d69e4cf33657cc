use clap::{Args, Subcommand};

use super::Session;

mod add;
mod adjust;
mod attach;
mod detach;
mod edit;
mod list;
mod remove;
mod show;

#[derive(Debug, Args)]
pub(crate) struct ClientCommand {
    #[command(subcommand)]
    command: ClientSubcommand,
}

#[derive(Debug, Subcommand)]
enum ClientSubcommand {
    /// Register a new client
    Add(add::AddClientArgs),

    /// Change a client's contact details
    Edit(edit::EditClientArgs),

    /// Delete a client and everything they hold
    Remove(remove::RemoveClientArgs),

    /// List clients
    List(list::ListClientsArgs),

    /// Show a client's details and holdings
    Show(show::ShowClientArgs),

    /// Give a client units of a catalog product
    Attach(attach::AttachProductArgs),

    /// Raise or lower a held quantity
    Adjust(adjust::AdjustQuantityArgs),

    /// Take a held product away from a client
    Detach(detach::DetachProductArgs),
}

pub(crate) fn run(command: ClientCommand, session: &mut Session) -> Result<(), String> {
    match command.command {
        ClientSubcommand::Add(args) => add::run(args, session),
        ClientSubcommand::Edit(args) => edit::run(&args, session),
        ClientSubcommand::Remove(args) => remove::run(&args, session),
        ClientSubcommand::List(args) => {
            list::run(&args, session);
            Ok(())
        }
        ClientSubcommand::Show(args) => show::run(&args, session),
        ClientSubcommand::Attach(args) => attach::run(&args, session),
        ClientSubcommand::Adjust(args) => adjust::run(&args, session),
        ClientSubcommand::Detach(args) => detach::run(&args, session),
    }
}
