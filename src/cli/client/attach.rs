use clap::Args;
use consign::{
    domain::{clients::models::ClientUuid, products::models::ProductUuid},
    money::format_money,
};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct AttachProductArgs {
    /// Client id
    #[arg(long)]
    client: ClientUuid,

    /// Catalog product id
    #[arg(long)]
    product: ProductUuid,

    /// Units to attach; merged into an existing holding of the same product
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

pub(crate) fn run(args: &AttachProductArgs, session: &mut Session) -> Result<(), String> {
    let client = session
        .ledger
        .attach_product(args.client, args.product, args.quantity)
        .map_err(|error| format!("failed to attach product: {error}"))?;

    if let Some(entry) = client.held(args.product) {
        println!("{} now holds {} x {}", client.name, entry.quantity, entry.product.name);
    }

    println!("balance: {}", format_money(client.balance(), session.currency));

    Ok(())
}
