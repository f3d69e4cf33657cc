//! Runtime configuration
//!
//! Every option can come from the command line or the environment; a `.env`
//! file in the working directory is read first.

use clap::Args;

pub mod display;
pub mod logging;
pub mod storage;

pub use display::{ConfigError, DisplayConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Where and under which namespace the ledger is stored.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Money formatting.
    #[command(flatten)]
    pub display: DisplayConfig,

    /// Log output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Load `.env` into the process environment, if present.
pub fn load_dotenv() {
    // Missing .env is the normal case
    _ = dotenvy::dotenv();
}
