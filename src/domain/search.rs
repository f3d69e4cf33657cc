//! Search and filter tags
//!
//! A record matches when its name or code contains the search term
//! (case-insensitively) and, if any filter tags are active, at least one of
//! them accepts it.

use clap::ValueEnum;
use rust_decimal::Decimal;

use crate::domain::{clients::models::Client, products::models::Product};

/// Records that can be matched against a free-text search term.
pub trait Searchable {
    /// Record name
    fn name(&self) -> &str;

    /// Record code
    fn code(&self) -> &str;

    /// Case-insensitive substring match against name or code.
    ///
    /// An empty term matches every record.
    fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        self.name().to_lowercase().contains(&term) || self.code().to_lowercase().contains(&term)
    }
}

/// A named boolean predicate over one record type.
pub trait RecordFilter<T> {
    /// Whether the record passes this filter.
    fn accepts(&self, record: &T) -> bool;
}

/// Filter tags for clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ClientFilter {
    /// Outstanding balance above zero.
    HasBalance,

    /// Outstanding balance of exactly zero.
    NoBalance,
}

/// Filter tags for products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ProductFilter {
    /// At least one unit in shop inventory.
    InStock,

    /// No units in shop inventory.
    OutOfStock,
}

impl Searchable for Client {
    fn name(&self) -> &str {
        &self.name
    }

    fn code(&self) -> &str {
        &self.code
    }
}

impl Searchable for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn code(&self) -> &str {
        &self.code
    }
}

impl RecordFilter<Client> for ClientFilter {
    fn accepts(&self, client: &Client) -> bool {
        match self {
            Self::HasBalance => client.balance() > Decimal::ZERO,
            Self::NoBalance => client.balance().is_zero(),
        }
    }
}

impl RecordFilter<Product> for ProductFilter {
    fn accepts(&self, product: &Product) -> bool {
        match self {
            Self::InStock => product.in_stock(),
            Self::OutOfStock => !product.in_stock(),
        }
    }
}

/// Records matching the search term and any of the active filters, in their
/// original order.
///
/// Filters are OR-combined with each other and AND-combined with the term.
/// With no filters, only the term applies.
pub fn search<'a, T, F>(records: &'a [T], term: &str, filters: &[F]) -> Vec<&'a T>
where
    T: Searchable,
    F: RecordFilter<T>,
{
    records
        .iter()
        .filter(|record| record.matches_term(term))
        .filter(|record| filters.is_empty() || filters.iter().any(|filter| filter.accepts(record)))
        .collect()
}
