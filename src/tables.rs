//! Table rendering for terminal output

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

use crate::{
    domain::{clients::models::Client, products::models::Product},
    money::format_money,
};

/// One row per client with its current balance.
pub fn clients_table(clients: &[&Client], currency: &'static Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Code", "Phone", "Products", "Balance"]);

    for client in clients {
        builder.push_record([
            client.id.to_string(),
            client.name.clone(),
            client.code.clone(),
            client.phone.clone(),
            client.products.len().to_string(),
            format_money(client.balance(), currency),
        ]);
    }

    render(builder, 4..6)
}

/// One row per catalog product.
pub fn products_table(products: &[&Product], currency: &'static Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Code", "Name", "Price", "Inventory"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.code.clone(),
            product.name.clone(),
            format_money(product.price, currency),
            product.inventory.to_string(),
        ]);
    }

    render(builder, 3..5)
}

/// A client's holdings with line totals and a closing balance row.
pub fn holdings_table(client: &Client, currency: &'static Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Product Id", "Code", "Name", "Price", "Qty", "Total", "Purchased"]);

    for entry in &client.products {
        builder.push_record([
            entry.product.id.to_string(),
            entry.product.code.clone(),
            entry.product.name.clone(),
            format_money(entry.product.price, currency),
            entry.quantity.to_string(),
            format_money(entry.line_total(), currency),
            entry.purchase_date.strftime("%Y-%m-%d").to_string(),
        ]);
    }

    builder.push_record([
        String::new(),
        String::new(),
        "Balance".to_string(),
        String::new(),
        String::new(),
        format_money(client.balance(), currency),
        String::new(),
    ]);

    render(builder, 3..6)
}

/// Sum of the balances of `clients`.
pub fn total_balance(clients: &[&Client]) -> Decimal {
    clients
        .iter()
        .map(|client| client.balance())
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

fn render(builder: Builder, numeric: std::ops::Range<usize>) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    table.to_string()
}
