//! Storage Config

use std::path::PathBuf;

use clap::Args;

use crate::storage::{FileStore, LedgerStorage};

/// Ledger storage location.
#[derive(Debug, Clone, Args)]
pub struct StorageConfig {
    /// Directory holding the ledger files
    #[arg(long, global = true, env = "CONSIGN_DATA_DIR", default_value = ".consign")]
    pub data_dir: PathBuf,

    /// Key prefix for the stored collections
    #[arg(long, global = true, env = "CONSIGN_NAMESPACE", default_value = "consign")]
    pub namespace: String,
}

impl StorageConfig {
    /// File-backed storage at the configured location.
    pub fn open(&self) -> LedgerStorage<FileStore> {
        LedgerStorage::new(FileStore::new(&self.data_dir), &self.namespace)
    }
}
