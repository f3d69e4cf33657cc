//! Client Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::products::models::Product, uuids::TypedUuid};

/// Client UUID
pub type ClientUuid = TypedUuid<Client>;

/// Consignment client and the products they currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Identifier, assigned once at creation.
    pub id: ClientUuid,

    /// Client name
    pub name: String,

    /// Client code
    pub code: String,

    /// Postal address
    pub address: String,

    /// Phone number
    pub phone: String,

    /// Held products, at most one entry per product id.
    #[serde(default)]
    pub products: Vec<ConsignedProduct>,
}

/// A product held by a client.
///
/// The product fields are a copy taken when the product was attached; later
/// catalog edits do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsignedProduct {
    /// Product snapshot
    #[serde(flatten)]
    pub product: Product,

    /// Units the client holds; may be zero.
    pub quantity: u32,

    /// Time of the most recent attach.
    pub purchase_date: Timestamp,
}

impl ConsignedProduct {
    /// Snapshot `product` as held in `quantity` units since `at`.
    pub fn new(product: &Product, quantity: u32, at: Timestamp) -> Self {
        Self {
            product: product.clone(),
            quantity,
            purchase_date: at,
        }
    }

    /// `price * quantity` for this entry, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }
}
