//! Product Catalog

use tracing::debug;

use crate::domain::products::{
    data::ProductDetails,
    errors::ProductsError,
    import::parse_products,
    models::{Product, ProductUuid},
};

/// Ordered collection of catalog products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Wrap an already loaded product list, keeping its order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsError::NotFound`] if no product has the id.
    pub fn get(&self, id: ProductUuid) -> Result<&Product, ProductsError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(ProductsError::NotFound(id))
    }

    /// Append a new product with a freshly generated id.
    pub fn create(&mut self, details: ProductDetails) -> Product {
        let product = Product {
            id: ProductUuid::new(),
            code: details.code,
            name: details.name,
            price: details.price,
            inventory: details.inventory,
        };

        debug!(product_id = %product.id, "product created");

        self.products.push(product.clone());

        product
    }

    /// Replace a product's fields, keeping its id and position.
    ///
    /// Copies already consigned to clients are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsError::NotFound`] if no product has the id.
    pub fn update(
        &mut self,
        id: ProductUuid,
        details: ProductDetails,
    ) -> Result<Product, ProductsError> {
        let product = self
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(ProductsError::NotFound(id))?;

        product.code = details.code;
        product.name = details.name;
        product.price = details.price;
        product.inventory = details.inventory;

        debug!(product_id = %id, "product updated");

        Ok(product.clone())
    }

    /// Remove a product from the catalog.
    ///
    /// Clients holding a copy keep it.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsError::NotFound`] if no product has the id.
    pub fn delete(&mut self, id: ProductUuid) -> Result<Product, ProductsError> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(ProductsError::NotFound(id))?;

        debug!(product_id = %id, "product deleted");

        Ok(self.products.remove(index))
    }

    /// Parse import text and append every valid product, in input order.
    ///
    /// Returns the number of products added, which is zero when no line
    /// qualified.
    pub fn import(&mut self, text: &str) -> usize {
        let imported = parse_products(text);
        let count = imported.len();

        self.products.extend(imported);

        debug!(count, "products imported");

        count
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    fn details(code: &str, name: &str) -> ProductDetails {
        ProductDetails {
            code: code.to_string(),
            name: name.to_string(),
            price: dec!(2.50),
            inventory: 4,
        }
    }

    #[test]
    fn create_appends_with_unique_ids() {
        let mut catalog = ProductCatalog::default();

        let first = catalog.create(details("P1", "Widget"));
        let second = catalog.create(details("P1", "Widget"));

        assert_ne!(first.id, second.id);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products().last(), Some(&second));
    }

    #[test]
    fn update_keeps_id_and_position() -> TestResult {
        let mut catalog = ProductCatalog::default();

        let first = catalog.create(details("P1", "Widget"));
        catalog.create(details("P2", "Gadget"));

        let updated = catalog.update(first.id, details("P1b", "Widget Pro"))?;

        assert_eq!(updated.id, first.id);
        assert_eq!(catalog.products().first().map(|p| p.name.as_str()), Some("Widget Pro"));

        Ok(())
    }

    #[test]
    fn update_unknown_id_returns_not_found() {
        let mut catalog = ProductCatalog::default();

        let result = catalog.update(ProductUuid::new(), details("P1", "Widget"));

        assert!(
            matches!(result, Err(ProductsError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn delete_removes_product() -> TestResult {
        let mut catalog = ProductCatalog::default();

        let product = catalog.create(details("P1", "Widget"));

        let deleted = catalog.delete(product.id)?;

        assert_eq!(deleted, product);
        assert!(catalog.is_empty());
        assert!(matches!(catalog.get(product.id), Err(ProductsError::NotFound(_))));

        Ok(())
    }

    #[test]
    fn import_appends_after_existing_products() {
        let mut catalog = ProductCatalog::default();

        let existing = catalog.create(details("P0", "Existing"));

        let count = catalog.import("P1\tWidget\t10\t$1,200.50\n\tskipped\t1\t1\nP2\tGadget\tabc\t");

        let codes: Vec<&str> = catalog.products().iter().map(|p| p.code.as_str()).collect();

        assert_eq!(count, 2);
        assert_eq!(codes, ["P0", "P1", "P2"]);
        assert!(
            catalog.products().iter().skip(1).all(|p| p.id != existing.id),
            "imported ids must not collide with existing ids"
        );
    }

    #[test]
    fn import_of_nothing_valid_returns_zero() {
        let mut catalog = ProductCatalog::default();

        assert_eq!(catalog.import("garbage\n\n"), 0);
        assert!(catalog.is_empty());
    }
}
