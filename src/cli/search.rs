use clap::Args;
use consign::domain::search::{ClientFilter, ProductFilter};

#[derive(Debug, Clone, Args)]
pub(crate) struct ClientSearchArgs {
    /// Case-insensitive match against name or code
    #[arg(long, default_value = "")]
    pub(crate) search: String,

    /// Filter tag; repeat to match any of several
    #[arg(long = "filter", value_enum)]
    pub(crate) filters: Vec<ClientFilter>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ProductSearchArgs {
    /// Case-insensitive match against name or code
    #[arg(long, default_value = "")]
    pub(crate) search: String,

    /// Filter tag; repeat to match any of several
    #[arg(long = "filter", value_enum)]
    pub(crate) filters: Vec<ProductFilter>,
}
