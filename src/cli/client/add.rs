use clap::Args;
use consign::domain::clients::data::ClientDetails;

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct AddClientArgs {
    /// Client name
    #[arg(long)]
    name: String,

    /// Client code
    #[arg(long)]
    code: String,

    /// Postal address
    #[arg(long)]
    address: String,

    /// Phone number
    #[arg(long)]
    phone: String,
}

pub(crate) fn run(args: AddClientArgs, session: &mut Session) -> Result<(), String> {
    let client = session
        .ledger
        .add_client(ClientDetails::new(
            args.name,
            args.code,
            args.address,
            args.phone,
        ))
        .map_err(|error| format!("failed to add client: {error}"))?;

    println!("client_id: {}", client.id);
    println!("client_name: {}", client.name);

    Ok(())
}
