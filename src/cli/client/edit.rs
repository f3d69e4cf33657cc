use clap::Args;
use consign::domain::clients::{data::ClientDetails, models::ClientUuid};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct EditClientArgs {
    /// Client id
    #[arg(long)]
    client: ClientUuid,

    /// New name; unchanged when omitted
    #[arg(long)]
    name: Option<String>,

    /// New code; unchanged when omitted
    #[arg(long)]
    code: Option<String>,

    /// New address; unchanged when omitted
    #[arg(long)]
    address: Option<String>,

    /// New phone number; unchanged when omitted
    #[arg(long)]
    phone: Option<String>,
}

pub(crate) fn run(args: &EditClientArgs, session: &mut Session) -> Result<(), String> {
    let current = session
        .ledger
        .clients()
        .get(args.client)
        .map_err(|error| format!("failed to edit client: {error}"))?;

    let details = ClientDetails::new(
        args.name.as_deref().unwrap_or(&current.name),
        args.code.as_deref().unwrap_or(&current.code),
        args.address.as_deref().unwrap_or(&current.address),
        args.phone.as_deref().unwrap_or(&current.phone),
    );

    let client = session
        .ledger
        .edit_client(args.client, details)
        .map_err(|error| format!("failed to edit client: {error}"))?;

    println!("client_id: {}", client.id);
    println!("client_name: {}", client.name);

    Ok(())
}
