//! Bulk product import
//!
//! Parses tab-separated text (as pasted from a spreadsheet) into new catalog
//! products. Each line holds `code, name, inventory, price`; extra trailing
//! fields are ignored. Lines that cannot describe a product are skipped.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::products::models::{MAX_PRICE, Product, ProductUuid};

const CURRENCY_SYMBOLS: [char; 4] = ['$', '£', '€', '¥'];

/// Parse pasted import text into new products, each with a fresh id.
///
/// A line is skipped when it has fewer than three tab-separated fields or when
/// its code or name is blank. Returns an empty `Vec` if no line qualifies.
pub fn parse_products(text: &str) -> Vec<Product> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Product> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

    let [code, name, inventory, rest @ ..] = fields.as_slice() else {
        return None;
    };

    if code.is_empty() || name.is_empty() {
        return None;
    }

    Some(Product {
        id: ProductUuid::new(),
        code: (*code).to_string(),
        name: (*name).to_string(),
        inventory: parse_inventory(inventory),
        price: rest.first().map_or(Decimal::ZERO, |price| clean_price(price)),
    })
}

/// Whole, non-negative unit count; anything else counts as zero.
fn parse_inventory(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}

/// Strip a leading currency symbol and thousands separators, then parse.
///
/// Empty, non-numeric, negative and above-[`MAX_PRICE`] input all yield zero.
pub fn clean_price(value: &str) -> Decimal {
    let value = value.trim();

    if value.is_empty() {
        return Decimal::ZERO;
    }

    let cleaned: String = value
        .trim_start_matches(CURRENCY_SYMBOLS)
        .chars()
        .filter(|c| *c != ',')
        .collect();

    Decimal::from_str(cleaned.trim())
        .or_else(|_err| Decimal::from_scientific(cleaned.trim()))
        .ok()
        .filter(|price| !price.is_sign_negative() && *price <= MAX_PRICE)
        .map_or(Decimal::ZERO, |price| price.round_dp(2))
}
