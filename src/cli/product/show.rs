use clap::Args;
use consign::{domain::products::models::ProductUuid, money::format_money};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Product id
    #[arg(long)]
    product: ProductUuid,
}

pub(crate) fn run(args: &ShowProductArgs, session: &Session) -> Result<(), String> {
    let product = session
        .ledger
        .products()
        .get(args.product)
        .map_err(|error| format!("failed to show product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("code: {}", product.code);
    println!("name: {}", product.name);
    println!("price: {}", format_money(product.price, session.currency));
    println!("inventory: {}", product.inventory);

    for client in session.ledger.clients().holders_of(product.id) {
        if let Some(entry) = client.held(product.id) {
            println!("held_by: {} ({} units)", client.name, entry.quantity);
        }
    }

    Ok(())
}
