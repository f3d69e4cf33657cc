//! Client holdings reconciliation
//!
//! Pure transformations of a client's consigned products: balance totals,
//! merge-or-append on attach, and floored quantity adjustment. Every
//! operation takes the client by value and returns the updated snapshot.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    clients::models::{Client, ConsignedProduct},
    products::models::{Product, ProductUuid},
};

/// Outstanding balance of a set of held products.
///
/// Sums `price * quantity` over every entry, zero quantities included. The
/// sum of an empty slice is zero. Totals saturate at [`Decimal::MAX`].
pub fn balance(products: &[ConsignedProduct]) -> Decimal {
    products
        .iter()
        .map(ConsignedProduct::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

impl Client {
    /// Outstanding balance of everything this client holds.
    pub fn balance(&self) -> Decimal {
        balance(&self.products)
    }

    /// Whether the client holds an entry for the product.
    pub fn holds(&self, product: ProductUuid) -> bool {
        self.held(product).is_some()
    }

    /// The held entry for a product, if any.
    pub fn held(&self, product: ProductUuid) -> Option<&ConsignedProduct> {
        self.products.iter().find(|entry| entry.product.id == product)
    }

    /// Attach `quantity` units of `product` at time `at`.
    ///
    /// An existing entry for the same product id has its quantity increased
    /// and its purchase date refreshed; otherwise a snapshot of the product is
    /// appended. The quantity is not checked here.
    #[must_use]
    pub fn attach_product(mut self, product: &Product, quantity: u32, at: Timestamp) -> Self {
        match self
            .products
            .iter_mut()
            .find(|entry| entry.product.id == product.id)
        {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(quantity);
                entry.purchase_date = at;
            }
            None => self
                .products
                .push(ConsignedProduct::new(product, quantity, at)),
        }

        self
    }

    /// Shift a held quantity by `delta`, flooring at zero.
    ///
    /// Unknown product ids leave the client unchanged, and an entry that
    /// reaches zero is kept.
    #[must_use]
    pub fn adjust_quantity(mut self, product: ProductUuid, delta: i64) -> Self {
        if let Some(entry) = self
            .products
            .iter_mut()
            .find(|entry| entry.product.id == product)
        {
            let adjusted = i64::from(entry.quantity).saturating_add(delta);

            entry.quantity = u32::try_from(adjusted.max(0)).unwrap_or(u32::MAX);
        }

        self
    }

    /// Drop the held entry for a product, if present.
    #[must_use]
    pub fn remove_product(mut self, product: ProductUuid) -> Self {
        self.products.retain(|entry| entry.product.id != product);

        self
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::domain::clients::models::ClientUuid;

    fn product(code: &str, price: Decimal) -> Product {
        Product {
            id: ProductUuid::new(),
            code: code.to_string(),
            name: format!("{code} name"),
            price,
            inventory: 5,
        }
    }

    fn client() -> Client {
        Client {
            id: ClientUuid::new(),
            name: "Ana".to_string(),
            code: "C1".to_string(),
            address: "1 Main Street".to_string(),
            phone: "555-0100".to_string(),
            products: Vec::new(),
        }
    }

    #[test]
    fn balance_of_empty_is_zero() {
        assert_eq!(balance(&[]), Decimal::ZERO);
        assert_eq!(client().balance(), Decimal::ZERO);
    }

    #[test]
    fn balance_sums_price_times_quantity_including_zero_quantities() {
        let now = Timestamp::now();
        let entries = [
            ConsignedProduct::new(&product("A", dec!(2.50)), 4, now),
            ConsignedProduct::new(&product("B", dec!(10.00)), 0, now),
            ConsignedProduct::new(&product("C", dec!(0.75)), 3, now),
        ];

        assert_eq!(balance(&entries), dec!(12.25));
    }

    #[test]
    fn balance_is_order_independent() {
        let now = Timestamp::now();
        let mut entries = vec![
            ConsignedProduct::new(&product("A", dec!(1.10)), 3, now),
            ConsignedProduct::new(&product("B", dec!(19.99)), 2, now),
            ConsignedProduct::new(&product("C", dec!(0.01)), 7, now),
            ConsignedProduct::new(&product("D", dec!(1200.50)), 1, now),
        ];

        let expected = balance(&entries);

        for _ in 0..entries.len() {
            entries.rotate_left(1);
            assert_eq!(balance(&entries), expected);
        }

        entries.reverse();
        assert_eq!(balance(&entries), expected);
    }

    #[test]
    fn attaching_same_product_twice_merges_quantities() {
        let widget = product("W", dec!(3.00));
        let first = Timestamp::UNIX_EPOCH;
        let second = Timestamp::now();

        let client = client()
            .attach_product(&widget, 2, first)
            .attach_product(&widget, 5, second);

        assert_eq!(client.products.len(), 1);
        assert_eq!(client.held(widget.id).map(|e| e.quantity), Some(7));
        assert_eq!(client.held(widget.id).map(|e| e.purchase_date), Some(second));
    }

    #[test]
    fn attaching_new_product_appends_snapshot() {
        let widget = product("W", dec!(3.00));
        let gadget = product("G", dec!(4.00));
        let now = Timestamp::now();

        let client = client()
            .attach_product(&widget, 1, now)
            .attach_product(&gadget, 2, now);

        let codes: Vec<&str> = client.products.iter().map(|e| e.product.code.as_str()).collect();

        assert_eq!(codes, ["W", "G"]);
        assert_eq!(client.balance(), dec!(11.00));
    }

    #[test]
    fn attached_copy_ignores_later_catalog_edits() {
        let mut widget = product("W", dec!(3.00));

        let client = client().attach_product(&widget, 1, Timestamp::now());

        widget.price = dec!(99.00);
        widget.name = "Renamed".to_string();

        assert_eq!(client.held(widget.id).map(|e| e.product.price), Some(dec!(3.00)));
        assert_eq!(client.balance(), dec!(3.00));
    }

    #[test]
    fn adjust_quantity_floors_at_zero_and_keeps_entry() {
        let widget = product("W", dec!(3.00));

        let client = client()
            .attach_product(&widget, 2, Timestamp::now())
            .adjust_quantity(widget.id, -1)
            .adjust_quantity(widget.id, -1)
            .adjust_quantity(widget.id, -1)
            .adjust_quantity(widget.id, i64::MIN);

        assert_eq!(client.products.len(), 1);
        assert_eq!(client.held(widget.id).map(|e| e.quantity), Some(0));
    }

    #[test]
    fn adjust_quantity_increments() {
        let widget = product("W", dec!(3.00));

        let client = client()
            .attach_product(&widget, 2, Timestamp::now())
            .adjust_quantity(widget.id, 1);

        assert_eq!(client.held(widget.id).map(|e| e.quantity), Some(3));
    }

    #[test]
    fn adjust_quantity_saturates_at_max() {
        let widget = product("W", dec!(3.00));

        let client = client()
            .attach_product(&widget, 2, Timestamp::now())
            .adjust_quantity(widget.id, i64::MAX);

        assert_eq!(client.held(widget.id).map(|e| e.quantity), Some(u32::MAX));
    }

    #[test]
    fn adjust_quantity_of_unheld_product_is_noop() {
        let before = client().attach_product(&product("W", dec!(1)), 1, Timestamp::now());

        let after = before.clone().adjust_quantity(ProductUuid::new(), 5);

        assert_eq!(after, before);
    }

    #[test]
    fn remove_product_drops_only_that_entry() {
        let widget = product("W", dec!(3.00));
        let gadget = product("G", dec!(4.00));
        let now = Timestamp::now();

        let client = client()
            .attach_product(&widget, 1, now)
            .attach_product(&gadget, 1, now)
            .remove_product(widget.id);

        assert!(!client.holds(widget.id));
        assert!(client.holds(gadget.id));
    }

    #[test]
    fn oversized_totals_saturate_instead_of_overflowing() {
        let huge = product("H", Decimal::MAX);
        let small = product("S", dec!(1));
        let now = Timestamp::now();

        let client = client()
            .attach_product(&huge, 10, now)
            .attach_product(&small, 1, now);

        assert_eq!(client.held(huge.id).map(ConsignedProduct::line_total), Some(Decimal::MAX));
        assert_eq!(client.balance(), Decimal::MAX);
    }
}
