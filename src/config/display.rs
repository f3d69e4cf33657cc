//! Display Config

use clap::Args;
use rusty_money::iso::{self, Currency};
use thiserror::Error;

/// Errors raised while resolving configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The currency code is not a known ISO 4217 code.
    #[error("unknown currency code {0:?} (expected an ISO 4217 code such as USD)")]
    UnknownCurrency(String),
}

/// Money display settings.
#[derive(Debug, Clone, Args)]
pub struct DisplayConfig {
    /// ISO 4217 currency code used to format amounts, e.g. USD, GBP, EUR
    #[arg(long, global = true, env = "CONSIGN_CURRENCY", default_value = "USD")]
    pub currency: String,
}

impl DisplayConfig {
    /// Resolve the configured currency code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] for unknown codes.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        let code = self.currency.trim().to_ascii_uppercase();

        iso::find(&code).ok_or(ConfigError::UnknownCurrency(code))
    }
}
