use clap::Args;
use consign::domain::products::{data::ProductForm, models::ProductUuid};

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct EditProductArgs {
    /// Product id
    #[arg(long)]
    product: ProductUuid,

    /// New code; unchanged when omitted
    #[arg(long)]
    code: Option<String>,

    /// New name; unchanged when omitted
    #[arg(long)]
    name: Option<String>,

    /// New unit price; unchanged when omitted
    #[arg(long)]
    price: Option<String>,

    /// New stock count; unchanged when omitted
    #[arg(long)]
    inventory: Option<String>,
}

pub(crate) fn run(args: &EditProductArgs, session: &mut Session) -> Result<(), String> {
    let current = session
        .ledger
        .products()
        .get(args.product)
        .map_err(|error| format!("failed to edit product: {error}"))?;

    let form = ProductForm::new(
        args.code.as_deref().unwrap_or(&current.code),
        args.name.as_deref().unwrap_or(&current.name),
        args.price.clone().unwrap_or_else(|| current.price.to_string()),
        args.inventory
            .clone()
            .unwrap_or_else(|| current.inventory.to_string()),
    );

    let product = session
        .ledger
        .edit_product(args.product, form)
        .map_err(|error| format!("failed to edit product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("product_name: {}", product.name);

    Ok(())
}
