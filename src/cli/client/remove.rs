use clap::Args;
use consign::domain::clients::models::ClientUuid;

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct RemoveClientArgs {
    /// Client id
    #[arg(long)]
    client: ClientUuid,
}

pub(crate) fn run(args: &RemoveClientArgs, session: &mut Session) -> Result<(), String> {
    let client = session
        .ledger
        .remove_client(args.client)
        .map_err(|error| format!("failed to remove client: {error}"))?;

    println!("removed client {} ({})", client.name, client.id);

    Ok(())
}
