//! Clients errors.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::clients::models::ClientUuid;

/// Errors raised by client registry operations.
#[derive(Debug, Error)]
pub enum ClientsError {
    /// No client has this id.
    #[error("client {0} not found")]
    NotFound(ClientUuid),

    /// Attach quantities must be at least one.
    #[error("quantity must be a positive whole number")]
    InvalidQuantity,

    /// The client form failed validation.
    #[error("invalid client: {0}")]
    Validation(#[from] ValidationErrors),
}
