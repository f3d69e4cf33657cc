//! Consign
//!
//! Consign is a ledger for consignment shops: clients, the product catalog,
//! the products each client holds and the balance those holdings add up to.

pub mod config;
pub mod context;
pub mod domain;
pub mod export;
pub mod money;
pub mod observability;
pub mod storage;
pub mod tables;
pub mod uuids;
