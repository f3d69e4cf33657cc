use clap::Args;
use consign::domain::products::models::ProductUuid;

use crate::cli::Session;

#[derive(Debug, Args)]
pub(crate) struct RemoveProductArgs {
    /// Product id
    #[arg(long)]
    product: ProductUuid,
}

pub(crate) fn run(args: &RemoveProductArgs, session: &mut Session) -> Result<(), String> {
    let product = session
        .ledger
        .remove_product(args.product)
        .map_err(|error| format!("failed to remove product: {error}"))?;

    println!("removed product {} ({})", product.name, product.id);

    Ok(())
}
