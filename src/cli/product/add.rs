use clap::Args;
use consign::{domain::products::data::ProductForm, money::format_money};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct AddProductArgs {
    /// Product code
    #[arg(long)]
    code: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Unit price, e.g. 12.50
    #[arg(long)]
    price: String,

    /// Units in stock
    #[arg(long, default_value = "0")]
    inventory: String,
}

pub(crate) fn run(args: AddProductArgs, session: &mut Session) -> Result<(), String> {
    let product = session
        .ledger
        .add_product(ProductForm::new(
            args.code,
            args.name,
            args.price,
            args.inventory,
        ))
        .map_err(|error| format!("failed to add product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("product_name: {}", product.name);
    println!("price: {}", format_money(product.price, session.currency));

    Ok(())
}
