//! CSV export
//!
//! Renders the current (already searched and filtered) view of clients,
//! balances or products as comma-separated text with a header row. Fields that
//! contain a comma, quote or line break are quoted.

use std::string::FromUtf8Error;

use csv::{Terminator, WriterBuilder};
use thiserror::Error;

use crate::{
    domain::{clients::models::Client, products::models::Product},
    money::format_plain,
};

const CLIENT_HEADERS: [&str; 6] = ["Name", "Code", "Address", "Phone", "Total Balance", "Products"];
const BALANCE_HEADERS: [&str; 4] = ["Name", "Code", "Total Balance", "Products"];
const PRODUCT_HEADERS: [&str; 5] = ["Code", "Name", "Price", "Inventory", "Clients"];

/// Errors raised while rendering CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing a record failed.
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the CSV buffer failed.
    #[error("failed to flush CSV output: {0}")]
    Flush(String),

    /// The rendered bytes were not UTF-8.
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Client rows: contact fields, balance and a `name (quantity)` list of
/// holdings.
///
/// # Errors
///
/// Returns an [`ExportError`] if the CSV writer fails.
pub fn clients_csv(clients: &[&Client]) -> Result<String, ExportError> {
    let rows = clients.iter().map(|client| {
        vec![
            client.name.clone(),
            client.code.clone(),
            client.address.clone(),
            client.phone.clone(),
            format_plain(client.balance()),
            holdings(client),
        ]
    });

    render(&CLIENT_HEADERS, rows)
}

/// Balance rows: name, code, balance and holdings of each client.
///
/// # Errors
///
/// Returns an [`ExportError`] if the CSV writer fails.
pub fn balances_csv(clients: &[&Client]) -> Result<String, ExportError> {
    let rows = clients.iter().map(|client| {
        vec![
            client.name.clone(),
            client.code.clone(),
            format_plain(client.balance()),
            holdings(client),
        ]
    });

    render(&BALANCE_HEADERS, rows)
}

/// Product rows: catalog fields and the names of clients (from `clients`)
/// holding each product.
///
/// # Errors
///
/// Returns an [`ExportError`] if the CSV writer fails.
pub fn products_csv(products: &[&Product], clients: &[Client]) -> Result<String, ExportError> {
    let rows = products.iter().map(|product| {
        let holders = clients
            .iter()
            .filter(|client| client.holds(product.id))
            .map(|client| client.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        vec![
            product.code.clone(),
            product.name.clone(),
            format_plain(product.price),
            product.inventory.to_string(),
            holders,
        ]
    });

    render(&PRODUCT_HEADERS, rows)
}

fn holdings(client: &Client) -> String {
    client
        .products
        .iter()
        .map(|entry| format!("{} ({})", entry.product.name, entry.quantity))
        .collect::<Vec<_>>()
        .join("; ")
}

fn render(
    headers: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(headers)?;

    for row in rows {
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| ExportError::Flush(error.error().to_string()))?;

    let mut text = String::from_utf8(bytes)?;

    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}
