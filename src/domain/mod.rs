//! Consignment Domain Concerns

pub mod clients;
pub mod products;
pub mod search;
