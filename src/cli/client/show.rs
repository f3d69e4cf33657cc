use clap::Args;
use consign::{domain::clients::models::ClientUuid, tables::holdings_table};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct ShowClientArgs {
    /// Client id
    #[arg(long)]
    client: ClientUuid,
}

pub(crate) fn run(args: &ShowClientArgs, session: &Session) -> Result<(), String> {
    let client = session
        .ledger
        .clients()
        .get(args.client)
        .map_err(|error| format!("failed to show client: {error}"))?;

    println!("client_id: {}", client.id);
    println!("name: {}", client.name);
    println!("code: {}", client.code);
    println!("address: {}", client.address);
    println!("phone: {}", client.phone);

    if client.products.is_empty() {
        println!("holds no products");
    } else {
        println!("{}", holdings_table(client, session.currency));
    }

    Ok(())
}
