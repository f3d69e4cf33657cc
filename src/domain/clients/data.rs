//! Clients Data

use validator::Validate;

/// Client contact fields, used for both creation and edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ClientDetails {
    /// Client name
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,

    /// Client code
    #[validate(length(min = 2, message = "code must be at least 2 characters"))]
    pub code: String,

    /// Postal address
    #[validate(length(min = 5, message = "address must be at least 5 characters"))]
    pub address: String,

    /// Phone number
    #[validate(length(min = 5, message = "phone must be at least 5 characters"))]
    pub phone: String,
}

impl ClientDetails {
    /// Build details, trimming every field.
    pub fn new(
        name: impl AsRef<str>,
        code: impl AsRef<str>,
        address: impl AsRef<str>,
        phone: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            code: code.as_ref().trim().to_string(),
            address: address.as_ref().trim().to_string(),
            phone: phone.as_ref().trim().to_string(),
        }
    }
}
