//! Clients

pub mod data;
pub mod errors;
pub mod holdings;
pub mod models;
pub mod registry;

pub use errors::ClientsError;
pub use registry::ClientRegistry;
