//! Products errors.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::products::models::ProductUuid;

/// Errors raised by catalog operations.
#[derive(Debug, Error)]
pub enum ProductsError {
    /// No catalog product has this id.
    #[error("product {0} not found")]
    NotFound(ProductUuid),

    /// The product form failed validation.
    #[error("invalid product: {0}")]
    Validation(#[from] ValidationErrors),
}
