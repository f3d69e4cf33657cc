use clap::Args;
use consign::tables::products_table;

use crate::cli::{Session, search::ProductSearchArgs};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    search: ProductSearchArgs,
}

pub(crate) fn run(args: &ListProductsArgs, session: &Session) {
    let products = session
        .ledger
        .search_products(&args.search.search, &args.search.filters);

    if products.is_empty() {
        println!("no products found");
        return;
    }

    println!("{}", products_table(&products, session.currency));
}
