use crate::config::RaffleConfig;
use crate::error::Result;
use crate::storage::{StateStore, Storage};
use crate::types::{Prize, WinnerRecord};
use std::path::Path;
use std::sync::Arc;

pub const DB_FILE: &str = "raffle.db";

/// Entry point for every raffle operation. Owns the store and the
/// configuration each operation reads its keys and settings from.
pub struct Raffle {
    storage: Arc<Storage>,
    config: RaffleConfig,
}

impl Raffle {
    pub fn open(data_dir: &Path, config: RaffleConfig) -> Result<Self> {
        let storage = Arc::new(Storage::new(&data_dir.join(DB_FILE))?);
        Self::with_storage(storage, config)
    }

    pub fn in_memory(config: RaffleConfig) -> Result<Self> {
        Self::with_storage(Arc::new(Storage::in_memory()?), config)
    }

    pub fn with_storage(storage: Arc<Storage>, config: RaffleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { storage, config })
    }

    pub fn config(&self) -> &RaffleConfig {
        &self.config
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub(crate) fn state(&self) -> StateStore<'_> {
        StateStore::new(&self.storage, &self.config.keys)
    }

    pub fn participants(&self) -> Vec<String> {
        self.state().participants()
    }

    pub fn prizes(&self) -> Vec<Prize> {
        self.state().prizes()
    }

    pub fn winners(&self) -> Vec<WinnerRecord> {
        self.state().winners()
    }
}
