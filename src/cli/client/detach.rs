use clap::Args;
use consign::{
    domain::{clients::models::ClientUuid, products::models::ProductUuid},
    money::format_money,
};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct DetachProductArgs {
    /// Client id
    #[arg(long)]
    client: ClientUuid,

    /// Held product id
    #[arg(long)]
    product: ProductUuid,
}

pub(crate) fn run(args: &DetachProductArgs, session: &mut Session) -> Result<(), String> {
    let client = session
        .ledger
        .detach_product(args.client, args.product)
        .map_err(|error| format!("failed to detach product: {error}"))?;

    println!("balance: {}", format_money(client.balance(), session.currency));

    Ok(())
}
