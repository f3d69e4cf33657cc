//! Products Data

use std::{borrow::Cow, str::FromStr};

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::products::models::MAX_PRICE;

/// Raw product form input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ProductForm {
    /// Product code
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,

    /// Product name
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,

    /// Unit price, e.g. `12.50`
    pub price: String,

    /// Units in stock
    pub inventory: String,
}

impl ProductForm {
    /// Build a form, trimming every field.
    pub fn new(
        code: impl AsRef<str>,
        name: impl AsRef<str>,
        price: impl AsRef<str>,
        inventory: impl AsRef<str>,
    ) -> Self {
        Self {
            code: code.as_ref().trim().to_string(),
            name: name.as_ref().trim().to_string(),
            price: price.as_ref().trim().to_string(),
            inventory: inventory.as_ref().trim().to_string(),
        }
    }
}

/// Validated product fields, used for both creation and edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    /// Product code
    pub code: String,

    /// Product name
    pub name: String,

    /// Unit price, positive, two decimals
    pub price: Decimal,

    /// Units in stock
    pub inventory: u32,
}

impl TryFrom<ProductForm> for ProductDetails {
    type Error = ValidationErrors;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        let mut errors = form.validate().err().unwrap_or_else(ValidationErrors::new);

        let price = parse_form_price(&form.price);
        let inventory = parse_form_inventory(&form.inventory);

        if price.is_none() {
            errors.add(
                "price",
                invalid("price", "price must be a positive number up to 1000000000"),
            );
        }

        if inventory.is_none() {
            errors.add(
                "inventory",
                invalid("inventory", "inventory must be a non-negative whole number"),
            );
        }

        match (price, inventory) {
            (Some(price), Some(inventory)) if errors.errors().is_empty() => Ok(Self {
                code: form.code,
                name: form.name,
                price,
                inventory,
            }),
            _ => Err(errors),
        }
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn parse_form_price(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .ok()
        .map(|price| price.round_dp(2))
        .filter(|price| *price > Decimal::ZERO && *price <= MAX_PRICE)
}

fn parse_form_inventory(value: &str) -> Option<u32> {
    value.parse().ok()
}
