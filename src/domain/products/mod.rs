//! Products

pub mod catalog;
pub mod data;
pub mod errors;
pub mod import;
pub mod models;

pub use catalog::ProductCatalog;
pub use errors::ProductsError;
