use clap::Args;
use consign::{
    domain::{clients::models::ClientUuid, products::models::ProductUuid},
    money::format_money,
};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct AdjustQuantityArgs {
    /// Client id
    #[arg(long)]
    client: ClientUuid,

    /// Held product id
    #[arg(long)]
    product: ProductUuid,

    /// Signed change in quantity; the result never drops below zero
    #[arg(long, allow_hyphen_values = true)]
    delta: i64,
}

pub(crate) fn run(args: &AdjustQuantityArgs, session: &mut Session) -> Result<(), String> {
    let client = session
        .ledger
        .adjust_quantity(args.client, args.product, args.delta)
        .map_err(|error| format!("failed to adjust quantity: {error}"))?;

    match client.held(args.product) {
        Some(entry) => println!("{} now holds {} x {}", client.name, entry.quantity, entry.product.name),
        None => println!("{} does not hold product {}", client.name, args.product),
    }

    println!("balance: {}", format_money(client.balance(), session.currency));

    Ok(())
}
