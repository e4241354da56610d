use crate::admin::AdminSecret;
use crate::config::StorageKeys;
use crate::error::Result;
use crate::storage::Storage;
use crate::types::{BackgroundImage, Prize, WinnerRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode a stored JSON value, falling back to `T::default()` when the value
/// is missing, `null` or not valid for `T`.
pub fn parse_or_default<T>(raw: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };

    match serde_json::from_str::<Option<T>>(raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Discarding unreadable stored value: {}", e);
            T::default()
        }
    }
}

/// Typed view over the raffle keys in a [`Storage`].
pub struct StateStore<'a> {
    storage: &'a Storage,
    keys: &'a StorageKeys,
}

impl<'a> StateStore<'a> {
    pub fn new(storage: &'a Storage, keys: &'a StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn get<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.storage.get_raw(key) {
            Ok(raw) => parse_or_default(raw.as_deref()),
            Err(e) => {
                tracing::warn!("Failed to read '{}', using default: {}", key, e);
                T::default()
            }
        }
    }

    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.storage.set_raw(key, &json)
    }

    pub fn participants(&self) -> Vec<String> {
        self.get(&self.keys.participants)
    }

    pub fn set_participants(&self, participants: &[String]) -> Result<()> {
        self.set(&self.keys.participants, participants)
    }

    pub fn prizes(&self) -> Vec<Prize> {
        self.get(&self.keys.prizes)
    }

    pub fn set_prizes(&self, prizes: &[Prize]) -> Result<()> {
        self.set(&self.keys.prizes, prizes)
    }

    pub fn winners(&self) -> Vec<WinnerRecord> {
        self.get(&self.keys.winners)
    }

    pub fn set_winners(&self, winners: &[WinnerRecord]) -> Result<()> {
        self.set(&self.keys.winners, winners)
    }

    /// Persist the prize counters and the winners log together.
    pub fn record_win(&self, prizes: &[Prize], winners: &[WinnerRecord]) -> Result<()> {
        self.storage.set_many(&[
            (self.keys.prizes.as_str(), serde_json::to_string(prizes)?),
            (self.keys.winners.as_str(), serde_json::to_string(winners)?),
        ])
    }

    pub fn background(&self) -> Option<BackgroundImage> {
        self.get(&self.keys.background)
    }

    pub fn set_background(&self, image: &BackgroundImage) -> Result<()> {
        self.set(&self.keys.background, image)
    }

    pub fn admin_secret(&self) -> Option<AdminSecret> {
        self.get(&self.keys.admin)
    }

    pub fn set_admin_secret(&self, secret: &AdminSecret) -> Result<()> {
        self.set(&self.keys.admin, secret)
    }
}
