//! Ledger Context
//!
//! Owns the client registry, the product catalog and the storage they are
//! persisted through. Every mutation rewrites the affected collection.

use jiff::Timestamp;
use thiserror::Error;
use tracing::info;

use crate::{
    domain::{
        clients::{
            ClientRegistry, ClientsError,
            data::ClientDetails,
            models::{Client, ClientUuid},
        },
        products::{
            ProductCatalog, ProductsError,
            data::{ProductDetails, ProductForm},
            models::{Product, ProductUuid},
        },
        search::{ClientFilter, ProductFilter, RecordFilter, search},
    },
    export::{self, ExportError},
    storage::{KeyValueStore, LedgerStorage},
};

/// Errors raised by ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Client registry error.
    #[error(transparent)]
    Clients(#[from] ClientsError),

    /// Product catalog error.
    #[error(transparent)]
    Products(#[from] ProductsError),

    /// Rendering an export failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The import text held no usable product line.
    #[error("no products were imported; check that lines are tab-separated code, name, inventory, price")]
    NothingImported,
}

/// In-memory ledger state bound to its storage.
#[derive(Debug)]
pub struct Ledger<S> {
    storage: LedgerStorage<S>,
    clients: ClientRegistry,
    products: ProductCatalog,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Read both collections from storage.
    pub fn load(storage: LedgerStorage<S>) -> Self {
        let clients = ClientRegistry::new(storage.load_clients());
        let products = ProductCatalog::new(storage.load_products());

        Self {
            storage,
            clients,
            products,
        }
    }

    /// Client registry
    pub fn clients(&self) -> &ClientRegistry {
        &self.clients
    }

    /// Product catalog
    pub fn products(&self) -> &ProductCatalog {
        &self.products
    }

    /// Backing storage
    pub fn storage(&self) -> &LedgerStorage<S> {
        &self.storage
    }

    /// Consume the ledger, returning its storage.
    pub fn into_storage(self) -> LedgerStorage<S> {
        self.storage
    }

    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the details fail validation.
    #[tracing::instrument(name = "ledger.add_client", skip_all, err)]
    pub fn add_client(&mut self, details: ClientDetails) -> Result<Client, LedgerError> {
        let client = self.clients.create(details)?;

        info!(client_id = %client.id, "client added");

        self.persist_clients();

        Ok(client)
    }

    /// Replace a client's contact details.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is unknown or the details are invalid.
    #[tracing::instrument(name = "ledger.edit_client", skip(self, details), fields(client_id = %id), err)]
    pub fn edit_client(
        &mut self,
        id: ClientUuid,
        details: ClientDetails,
    ) -> Result<Client, LedgerError> {
        let client = self.clients.update(id, details)?;

        self.persist_clients();

        Ok(client)
    }

    /// Delete a client and its holdings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is unknown.
    #[tracing::instrument(name = "ledger.remove_client", skip(self), fields(client_id = %id), err)]
    pub fn remove_client(&mut self, id: ClientUuid) -> Result<Client, LedgerError> {
        let client = self.clients.delete(id)?;

        info!("client removed");

        self.persist_clients();

        Ok(client)
    }

    /// Validate a product form and add the product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the form fails validation.
    #[tracing::instrument(name = "ledger.add_product", skip_all, err)]
    pub fn add_product(&mut self, form: ProductForm) -> Result<Product, LedgerError> {
        let details = ProductDetails::try_from(form).map_err(ProductsError::from)?;
        let product = self.products.create(details);

        info!(product_id = %product.id, "product added");

        self.persist_products();

        Ok(product)
    }

    /// Validate a product form and replace the product's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the form is invalid.
    #[tracing::instrument(name = "ledger.edit_product", skip(self, form), fields(product_id = %id), err)]
    pub fn edit_product(
        &mut self,
        id: ProductUuid,
        form: ProductForm,
    ) -> Result<Product, LedgerError> {
        let details = ProductDetails::try_from(form).map_err(ProductsError::from)?;
        let product = self.products.update(id, details)?;

        self.persist_products();

        Ok(product)
    }

    /// Delete a product from the catalog; client holdings keep their copies.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown.
    #[tracing::instrument(name = "ledger.remove_product", skip(self), fields(product_id = %id), err)]
    pub fn remove_product(&mut self, id: ProductUuid) -> Result<Product, LedgerError> {
        let product = self.products.delete(id)?;

        info!("product removed");

        self.persist_products();

        Ok(product)
    }

    /// Import tab-separated product lines into the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NothingImported`] when no line qualified.
    #[tracing::instrument(name = "ledger.import_products", skip_all, err)]
    pub fn import_products(&mut self, text: &str) -> Result<usize, LedgerError> {
        let count = self.products.import(text);

        if count == 0 {
            return Err(LedgerError::NothingImported);
        }

        info!(count, "products imported");

        self.persist_products();

        Ok(count)
    }

    /// Attach `quantity` units of a catalog product to a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client or product is unknown or the quantity
    /// is zero.
    #[tracing::instrument(
        name = "ledger.attach_product",
        skip(self),
        fields(client_id = %client, product_id = %product),
        err
    )]
    pub fn attach_product(
        &mut self,
        client: ClientUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Client, LedgerError> {
        let product = self.products.get(product)?.clone();

        let updated = self
            .clients
            .attach_product(client, &product, quantity, Timestamp::now())?;

        info!(quantity, "product attached");

        self.persist_clients();

        Ok(updated)
    }

    /// Shift a held quantity by `delta`, flooring at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is unknown.
    #[tracing::instrument(
        name = "ledger.adjust_quantity",
        skip(self),
        fields(client_id = %client, product_id = %product),
        err
    )]
    pub fn adjust_quantity(
        &mut self,
        client: ClientUuid,
        product: ProductUuid,
        delta: i64,
    ) -> Result<Client, LedgerError> {
        let updated = self.clients.adjust_quantity(client, product, delta)?;

        self.persist_clients();

        Ok(updated)
    }

    /// Remove a held product from a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is unknown.
    #[tracing::instrument(
        name = "ledger.detach_product",
        skip(self),
        fields(client_id = %client, product_id = %product),
        err
    )]
    pub fn detach_product(
        &mut self,
        client: ClientUuid,
        product: ProductUuid,
    ) -> Result<Client, LedgerError> {
        let updated = self.clients.remove_product(client, product)?;

        self.persist_clients();

        Ok(updated)
    }

    /// Clients matching a search term and filters.
    pub fn search_clients(&self, term: &str, filters: &[ClientFilter]) -> Vec<&Client> {
        search(self.clients.clients(), term, filters)
    }

    /// Products matching a search term and filters.
    pub fn search_products(&self, term: &str, filters: &[ProductFilter]) -> Vec<&Product> {
        search(self.products.products(), term, filters)
    }

    /// Clients matching a search term and filters that owe a balance, or
    /// every match when `include_settled` is set.
    pub fn balance_view(
        &self,
        term: &str,
        filters: &[ClientFilter],
        include_settled: bool,
    ) -> Vec<&Client> {
        self.search_clients(term, filters)
            .into_iter()
            .filter(|client| include_settled || ClientFilter::HasBalance.accepts(*client))
            .collect()
    }

    /// CSV of the clients matching a search term and filters.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Export`] if rendering fails.
    pub fn export_clients(
        &self,
        term: &str,
        filters: &[ClientFilter],
    ) -> Result<String, LedgerError> {
        Ok(export::clients_csv(&self.search_clients(term, filters))?)
    }

    /// CSV of the balance view.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Export`] if rendering fails.
    pub fn export_balances(
        &self,
        term: &str,
        filters: &[ClientFilter],
        include_settled: bool,
    ) -> Result<String, LedgerError> {
        Ok(export::balances_csv(&self.balance_view(
            term,
            filters,
            include_settled,
        ))?)
    }

    /// CSV of the products matching a search term and filters.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Export`] if rendering fails.
    pub fn export_products(
        &self,
        term: &str,
        filters: &[ProductFilter],
    ) -> Result<String, LedgerError> {
        Ok(export::products_csv(
            &self.search_products(term, filters),
            self.clients.clients(),
        )?)
    }

    /// Drop every client and product, in memory and in storage.
    #[tracing::instrument(name = "ledger.reset", skip_all)]
    pub fn reset(&mut self) {
        self.clients = ClientRegistry::default();
        self.products = ProductCatalog::default();

        self.storage.clear();

        info!("ledger cleared");
    }

    fn persist_clients(&mut self) {
        self.storage.save_clients(self.clients.clients());
    }

    fn persist_products(&mut self) {
        self.storage.save_products(self.products.products());
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, dec};
    use testresult::TestResult;

    use super::*;
    use crate::storage::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        Ledger::load(LedgerStorage::new(MemoryStore::new(), "test"))
    }

    fn reload(ledger: Ledger<MemoryStore>) -> Ledger<MemoryStore> {
        Ledger::load(ledger.into_storage())
    }

    fn ana() -> ClientDetails {
        ClientDetails::new("Ana", "C-01", "1 Main Street", "555-0100")
    }

    fn widget() -> ProductForm {
        ProductForm::new("P1", "Widget", "12.50", "10")
    }

    #[test]
    fn added_records_survive_reload() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;
        let product = ledger.add_product(widget())?;

        let ledger = reload(ledger);

        assert_eq!(ledger.clients().get(client.id)?, &client);
        assert_eq!(ledger.products().get(product.id)?, &product);

        Ok(())
    }

    #[test]
    fn attach_merges_and_persists() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;
        let product = ledger.add_product(widget())?;

        ledger.attach_product(client.id, product.id, 2)?;
        ledger.attach_product(client.id, product.id, 3)?;

        let ledger = reload(ledger);
        let stored = ledger.clients().get(client.id)?;

        assert_eq!(stored.products.len(), 1);
        assert_eq!(stored.balance(), dec!(62.50));

        Ok(())
    }

    #[test]
    fn attach_unknown_product_is_rejected() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;

        let result = ledger.attach_product(client.id, ProductUuid::new(), 1);

        assert!(
            matches!(
                result,
                Err(LedgerError::Products(ProductsError::NotFound(_)))
            ),
            "expected product NotFound, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn adjust_and_detach_persist() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;
        let widget = ledger.add_product(widget())?;
        let gadget = ledger.add_product(ProductForm::new("P2", "Gadget", "1", "1"))?;

        ledger.attach_product(client.id, widget.id, 1)?;
        ledger.attach_product(client.id, gadget.id, 1)?;
        ledger.adjust_quantity(client.id, widget.id, -5)?;
        ledger.detach_product(client.id, gadget.id)?;

        let ledger = reload(ledger);
        let stored = ledger.clients().get(client.id)?;

        assert_eq!(stored.products.len(), 1);
        assert_eq!(stored.held(widget.id).map(|e| e.quantity), Some(0));

        Ok(())
    }

    #[test]
    fn removing_product_keeps_client_copies() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;
        let product = ledger.add_product(widget())?;

        ledger.attach_product(client.id, product.id, 2)?;
        ledger.remove_product(product.id)?;

        let ledger = reload(ledger);

        assert!(ledger.products().is_empty());
        assert_eq!(ledger.clients().get(client.id)?.balance(), dec!(25.00));

        Ok(())
    }

    #[test]
    fn editing_product_does_not_change_held_copies() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;
        let product = ledger.add_product(widget())?;

        ledger.attach_product(client.id, product.id, 1)?;
        ledger.edit_product(product.id, ProductForm::new("P1", "Widget", "99", "10"))?;

        assert_eq!(ledger.clients().get(client.id)?.balance(), dec!(12.50));

        Ok(())
    }

    #[test]
    fn invalid_product_form_is_rejected_without_persisting() {
        let mut ledger = ledger();

        let result = ledger.add_product(ProductForm::new("", "W", "-1", "x"));

        assert!(
            matches!(result, Err(LedgerError::Products(ProductsError::Validation(_)))),
            "expected Validation, got {result:?}"
        );
        assert!(reload(ledger).products().is_empty());
    }

    #[test]
    fn empty_import_reports_nothing_imported() {
        let mut ledger = ledger();

        let result = ledger.import_products("no tabs here\n");

        assert!(matches!(result, Err(LedgerError::NothingImported)));
    }

    #[test]
    fn import_persists_products() -> TestResult {
        let mut ledger = ledger();

        assert_eq!(ledger.import_products("P1\tWidget\t10\t$1,200.50\nP2\tGadget\tabc\t")?, 2);

        assert_eq!(reload(ledger).products().len(), 2);

        Ok(())
    }

    #[test]
    fn search_and_export_use_current_view() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;
        ledger.add_client(ClientDetails::new("Bea", "C-02", "2 Main Street", "555-0101"))?;
        let product = ledger.add_product(widget())?;

        ledger.attach_product(client.id, product.id, 1)?;

        let with_balance = ledger.search_clients("", &[ClientFilter::HasBalance]);

        assert_eq!(with_balance.len(), 1);

        let csv = ledger.export_clients("", &[ClientFilter::HasBalance])?;

        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("Widget (1)"));

        let products_csv = ledger.export_products("wid", &[])?;

        assert!(products_csv.ends_with("P1,Widget,12.50,10,Ana"));

        Ok(())
    }

    #[test]
    fn balance_view_hides_settled_clients_unless_asked() -> TestResult {
        let mut ledger = ledger();

        let ana = ledger.add_client(ana())?;
        ledger.add_client(ClientDetails::new("Bea", "C-02", "2 Main Street", "555-0101"))?;
        let product = ledger.add_product(widget())?;

        ledger.attach_product(ana.id, product.id, 2)?;

        assert_eq!(ledger.balance_view("", &[], false).len(), 1);
        assert_eq!(ledger.balance_view("", &[], true).len(), 2);
        assert_eq!(ledger.balance_view("bea", &[], true).len(), 1);

        assert_eq!(
            ledger.export_balances("", &[], false)?,
            "Name,Code,Total Balance,Products\nAna,C-01,25.00,Widget (2)"
        );
        assert_eq!(
            ledger.export_balances("", &[ClientFilter::NoBalance], true)?,
            "Name,Code,Total Balance,Products\nBea,C-02,0.00,"
        );

        Ok(())
    }

    #[test]
    fn oversized_import_price_cannot_break_balances() -> TestResult {
        let mut ledger = ledger();

        let client = ledger.add_client(ana())?;
        ledger.import_products("P1\tHuge\t1\t1e28")?;

        let [product] = ledger.products().products() else {
            unreachable!("one line was imported");
        };
        let product = product.id;

        ledger.attach_product(client.id, product, 10)?;

        let ledger = reload(ledger);

        assert_eq!(ledger.clients().get(client.id)?.balance(), Decimal::ZERO);
        assert!(ledger.export_clients("", &[])?.contains("Ana"));

        Ok(())
    }

    #[test]
    fn reset_clears_memory_and_storage() -> TestResult {
        let mut ledger = ledger();

        ledger.add_client(ana())?;
        ledger.add_product(widget())?;

        ledger.reset();

        assert!(ledger.clients().is_empty());

        let ledger = reload(ledger);

        assert!(ledger.clients().is_empty());
        assert!(ledger.products().is_empty());

        Ok(())
    }
}
