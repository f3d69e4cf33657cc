//! Client Registry

use jiff::Timestamp;
use tracing::debug;
use validator::Validate;

use crate::domain::{
    clients::{
        data::ClientDetails,
        errors::ClientsError,
        models::{Client, ClientUuid},
    },
    products::models::{Product, ProductUuid},
};

/// Ordered collection of clients and their holdings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientRegistry {
    clients: Vec<Client>,
}

impl ClientRegistry {
    /// Wrap an already loaded client list, keeping its order.
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// All clients, in insertion order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Number of clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether there are no clients.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Look up a client by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientsError::NotFound`] if no client has the id.
    pub fn get(&self, id: ClientUuid) -> Result<&Client, ClientsError> {
        self.clients
            .iter()
            .find(|client| client.id == id)
            .ok_or(ClientsError::NotFound(id))
    }

    /// Clients holding an entry for the product, in registry order.
    pub fn holders_of(&self, product: ProductUuid) -> impl Iterator<Item = &Client> {
        self.clients
            .iter()
            .filter(move |client| client.holds(product))
    }

    /// Validate and append a new client with no holdings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientsError::Validation`] if any field is invalid.
    pub fn create(&mut self, details: ClientDetails) -> Result<Client, ClientsError> {
        details.validate()?;

        let client = Client {
            id: ClientUuid::new(),
            name: details.name,
            code: details.code,
            address: details.address,
            phone: details.phone,
            products: Vec::new(),
        };

        debug!(client_id = %client.id, "client created");

        self.clients.push(client.clone());

        Ok(client)
    }

    /// Validate and replace a client's contact fields, keeping id and holdings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientsError::Validation`] if any field is invalid, or
    /// [`ClientsError::NotFound`] if no client has the id.
    pub fn update(&mut self, id: ClientUuid, details: ClientDetails) -> Result<Client, ClientsError> {
        details.validate()?;

        self.replace(id, |client| Client {
            name: details.name,
            code: details.code,
            address: details.address,
            phone: details.phone,
            ..client
        })
    }

    /// Remove a client together with its holdings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientsError::NotFound`] if no client has the id.
    pub fn delete(&mut self, id: ClientUuid) -> Result<Client, ClientsError> {
        let index = self
            .clients
            .iter()
            .position(|client| client.id == id)
            .ok_or(ClientsError::NotFound(id))?;

        debug!(client_id = %id, "client deleted");

        Ok(self.clients.remove(index))
    }

    /// Attach `quantity` units of a product to a client, merging with an
    /// existing entry for the same product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientsError::InvalidQuantity`] for a zero quantity, or
    /// [`ClientsError::NotFound`] if no client has the id.
    pub fn attach_product(
        &mut self,
        id: ClientUuid,
        product: &Product,
        quantity: u32,
        at: Timestamp,
    ) -> Result<Client, ClientsError> {
        if quantity == 0 {
            return Err(ClientsError::InvalidQuantity);
        }

        self.replace(id, |client| client.attach_product(product, quantity, at))
    }

    /// Shift a held quantity by `delta`, flooring at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ClientsError::NotFound`] if no client has the id.
    pub fn adjust_quantity(
        &mut self,
        id: ClientUuid,
        product: ProductUuid,
        delta: i64,
    ) -> Result<Client, ClientsError> {
        self.replace(id, |client| client.adjust_quantity(product, delta))
    }

    /// Drop a held product from a client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientsError::NotFound`] if no client has the id.
    pub fn remove_product(
        &mut self,
        id: ClientUuid,
        product: ProductUuid,
    ) -> Result<Client, ClientsError> {
        self.replace(id, |client| client.remove_product(product))
    }

    fn replace(
        &mut self,
        id: ClientUuid,
        update: impl FnOnce(Client) -> Client,
    ) -> Result<Client, ClientsError> {
        let slot = self
            .clients
            .iter_mut()
            .find(|client| client.id == id)
            .ok_or(ClientsError::NotFound(id))?;

        *slot = update(slot.clone());

        Ok(slot.clone())
    }
}
