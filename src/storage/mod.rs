//! Ledger persistence
//!
//! Clients and products are stored as two independent JSON arrays under
//! `<namespace>-clients` and `<namespace>-products`. Reads never fail: a
//! missing or unreadable value loads as an empty collection. Writes overwrite
//! the whole collection; a failed write is logged and dropped.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};

use crate::domain::{clients::models::Client, products::models::Product};

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Namespaced access to the persisted client and product collections.
#[derive(Debug)]
pub struct LedgerStorage<S> {
    store: S,
    clients_key: String,
    products_key: String,
}

impl<S: KeyValueStore> LedgerStorage<S> {
    /// Storage for `namespace` backed by `store`.
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            store,
            clients_key: format!("{namespace}-clients"),
            products_key: format!("{namespace}-products"),
        }
    }

    /// Key holding the client collection.
    pub fn clients_key(&self) -> &str {
        &self.clients_key
    }

    /// Key holding the product collection.
    pub fn products_key(&self) -> &str {
        &self.products_key
    }

    /// Load every client, or none if the stored value is absent or invalid.
    pub fn load_clients(&self) -> Vec<Client> {
        load(&self.store, &self.clients_key)
    }

    /// Load every product, or none if the stored value is absent or invalid.
    pub fn load_products(&self) -> Vec<Product> {
        load(&self.store, &self.products_key)
    }

    /// Overwrite the stored client collection.
    ///
    /// Returns whether the write succeeded; failures are logged only.
    pub fn save_clients(&mut self, clients: &[Client]) -> bool {
        save(&mut self.store, &self.clients_key, clients)
    }

    /// Overwrite the stored product collection.
    ///
    /// Returns whether the write succeeded; failures are logged only.
    pub fn save_products(&mut self, products: &[Product]) -> bool {
        save(&mut self.store, &self.products_key, products)
    }

    /// Remove both collections from the store.
    pub fn clear(&mut self) {
        for key in [&self.clients_key, &self.products_key] {
            if let Err(source) = self.store.remove(key) {
                error!(key = %key, error = %source, "failed to clear stored collection");
            }
        }
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn load<S, T>(store: &S, key: &str) -> Vec<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored collection, starting empty");
            return Vec::new();
        }
        Err(source) => {
            warn!(key, error = %source, "failed to read stored collection, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(records) => {
            debug!(key, count = records.len(), "loaded stored collection");
            records
        }
        Err(source) => {
            warn!(key, error = %source, "stored collection is not valid, starting empty");
            Vec::new()
        }
    }
}

fn save<S, T>(store: &mut S, key: &str, records: &[T]) -> bool
where
    S: KeyValueStore,
    T: Serialize,
{
    let encoded = match serde_json::to_string(records) {
        Ok(encoded) => encoded,
        Err(source) => {
            error!(key, error = %source, "failed to encode collection");
            return false;
        }
    };

    match store.set(key, &encoded) {
        Ok(()) => {
            debug!(key, count = records.len(), "saved collection");
            true
        }
        Err(source) => {
            error!(key, error = %source, "failed to save collection");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use jiff::Timestamp;
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::{store::MockKeyValueStore, *};
    use crate::domain::{clients::models::ClientUuid, products::models::ProductUuid};

    fn sample_product(code: &str) -> Product {
        Product {
            id: ProductUuid::new(),
            code: code.to_string(),
            name: format!("{code} name"),
            price: dec!(12.5),
            inventory: 3,
        }
    }

    fn sample_clients() -> Vec<Client> {
        let held = Client {
            id: ClientUuid::new(),
            name: "Ana".to_string(),
            code: "C1".to_string(),
            address: "1 Main Street".to_string(),
            phone: "555-0100".to_string(),
            products: Vec::new(),
        }
        .attach_product(&sample_product("W"), 3, Timestamp::UNIX_EPOCH)
        .attach_product(&sample_product("G"), 1, Timestamp::now());

        let empty = Client {
            id: ClientUuid::new(),
            name: "Bea".to_string(),
            code: "C2".to_string(),
            address: "2 Main Street".to_string(),
            phone: "555-0101".to_string(),
            products: Vec::new(),
        };

        vec![held, empty]
    }

    #[test]
    fn keys_are_namespaced() {
        let storage = LedgerStorage::new(MemoryStore::new(), "newpet");

        assert_eq!(storage.clients_key(), "newpet-clients");
        assert_eq!(storage.products_key(), "newpet-products");
    }

    #[test]
    fn missing_collections_load_empty() {
        let storage = LedgerStorage::new(MemoryStore::new(), "shop");

        assert!(storage.load_clients().is_empty());
        assert!(storage.load_products().is_empty());
    }

    #[test]
    fn clients_round_trip_through_storage() {
        let mut storage = LedgerStorage::new(MemoryStore::new(), "shop");
        let clients = sample_clients();

        assert!(storage.save_clients(&clients));
        assert_eq!(storage.load_clients(), clients);
    }

    #[test]
    fn products_round_trip_through_storage() {
        let mut storage = LedgerStorage::new(MemoryStore::new(), "shop");
        let products = vec![sample_product("A"), sample_product("B")];

        assert!(storage.save_products(&products));
        assert_eq!(storage.load_products(), products);
    }

    #[test]
    fn persisted_shape_uses_flat_camel_case_fields() -> TestResult {
        let mut storage = LedgerStorage::new(MemoryStore::new(), "shop");

        storage.save_clients(&sample_clients());

        let raw = storage.store().get("shop-clients")?.unwrap_or_default();
        let json: serde_json::Value = serde_json::from_str(&raw)?;
        let entry = &json[0]["products"][0];

        assert_eq!(entry["code"], "W");
        assert_eq!(entry["price"], 12.5);
        assert_eq!(entry["quantity"], 3);
        assert_eq!(entry["purchaseDate"], "1970-01-01T00:00:00Z");

        Ok(())
    }

    #[test]
    fn corrupt_collection_loads_empty() -> TestResult {
        let mut store = MemoryStore::new();

        store.set("shop-clients", "{not json")?;
        store.set("shop-products", r#"[{"id": 1}]"#)?;

        let storage = LedgerStorage::new(store, "shop");

        assert!(storage.load_clients().is_empty());
        assert!(storage.load_products().is_empty());

        Ok(())
    }

    #[test]
    fn read_failure_loads_empty() {
        let mut store = MockKeyValueStore::new();

        store.expect_get().returning(|key| {
            Err(StoreError::Io {
                key: key.to_string(),
                source: io::Error::other("disk gone"),
            })
        });

        let storage = LedgerStorage::new(store, "shop");

        assert!(storage.load_clients().is_empty());
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let mut store = MockKeyValueStore::new();

        store
            .expect_set()
            .withf(|key, _| key == "shop-products")
            .times(1)
            .returning(|key, _| {
                Err(StoreError::Io {
                    key: key.to_string(),
                    source: io::Error::other("quota exceeded"),
                })
            });

        let mut storage = LedgerStorage::new(store, "shop");

        assert!(!storage.save_products(&[sample_product("A")]));
    }

    #[test]
    fn clear_removes_both_keys() -> TestResult {
        let mut storage = LedgerStorage::new(MemoryStore::new(), "shop");

        storage.save_clients(&sample_clients());
        storage.save_products(&[sample_product("A")]);

        storage.clear();

        assert_eq!(storage.store().get("shop-clients")?, None);
        assert_eq!(storage.store().get("shop-products")?, None);

        Ok(())
    }
}
