//! Product Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Highest unit price the catalog accepts (one billion).
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier, assigned once at creation.
    pub id: ProductUuid,

    /// Shop code; not required to be unique.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units held by the shop, independent of what clients hold.
    pub inventory: u32,
}

impl Product {
    /// Whether the shop has any units left.
    pub fn in_stock(&self) -> bool {
        self.inventory > 0
    }
}
