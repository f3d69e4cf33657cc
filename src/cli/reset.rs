use clap::Args;

use super::Session;

#[derive(Debug, Args)]
pub(crate) struct ResetArgs {
    /// Confirm deletion of every stored client and product
    #[arg(long)]
    yes: bool,
}

pub(crate) fn run(args: &ResetArgs, session: &mut Session) -> Result<(), String> {
    if !args.yes {
        return Err("refusing to reset without --yes".to_string());
    }

    session.ledger.reset();

    println!("ledger cleared");

    Ok(())
}
