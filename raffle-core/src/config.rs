use crate::error::{RaffleError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RaffleConfig {
    pub keys: StorageKeys,
    /// Admin password used until one is stored with `set_admin_password`.
    pub admin_password: Option<String>,
    pub consolation_award: String,
    /// chrono format string for winner timestamps
    pub time_format: String,
    pub export_prefix: String,
    pub pbkdf2_iterations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub participants: String,
    pub prizes: String,
    pub winners: String,
    pub background: String,
    pub admin: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            participants: "raffle_users".to_string(),
            prizes: "raffle_awards".to_string(),
            winners: "raffle_winners".to_string(),
            background: "raffle_bg".to_string(),
            admin: "raffle_admin_pwd".to_string(),
        }
    }
}

impl StorageKeys {
    pub fn all(&self) -> [&str; 5] {
        [
            self.participants.as_str(),
            self.prizes.as_str(),
            self.winners.as_str(),
            self.background.as_str(),
            self.admin.as_str(),
        ]
    }
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            admin_password: None,
            consolation_award: "一马当先".to_string(),
            time_format: "%Y/%m/%d %H:%M:%S".to_string(),
            export_prefix: "winners".to_string(),
            pbkdf2_iterations: 100_000,
        }
    }
}

impl RaffleConfig {
    /// Load `config.json` from the data directory, falling back to defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            RaffleError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_admin_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = Some(password.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        let keys = self.keys.all();
        if keys.iter().any(|k| k.trim().is_empty()) {
            return Err(RaffleError::config("Storage keys cannot be empty"));
        }

        let unique: HashSet<&str> = keys.iter().copied().collect();
        if unique.len() != keys.len() {
            return Err(RaffleError::config("Storage keys must be distinct"));
        }

        if self.consolation_award.trim().is_empty() {
            return Err(RaffleError::config("Consolation award cannot be empty"));
        }

        if self.time_format.is_empty() {
            return Err(RaffleError::config("Time format cannot be empty"));
        }

        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(RaffleError::config(format!(
                "Invalid time format '{}'",
                self.time_format
            )));
        }

        if self.export_prefix.trim().is_empty() {
            return Err(RaffleError::config("Export prefix cannot be empty"));
        }

        if self.pbkdf2_iterations == 0 {
            return Err(RaffleError::config(
                "PBKDF2 iterations must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = RaffleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.keys.winners, "raffle_winners");
        assert!(config.admin_password.is_none());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let mut config = RaffleConfig::default();
        config.keys.prizes = config.keys.participants.clone();
        assert!(matches!(config.validate(), Err(RaffleError::Config(_))));
    }

    #[test]
    fn test_bad_time_format_rejected() {
        let mut config = RaffleConfig::default();
        config.time_format = "%Y-%".to_string();
        assert!(matches!(config.validate(), Err(RaffleError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = RaffleConfig::load(dir.path()).unwrap();
        assert_eq!(config.export_prefix, "winners");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"admin_password": "s3cret", "keys": {"winners": "lucky"}}"#,
        )
        .unwrap();

        let config = RaffleConfig::load(dir.path()).unwrap();
        assert_eq!(config.admin_password.as_deref(), Some("s3cret"));
        assert_eq!(config.keys.winners, "lucky");
        assert_eq!(config.keys.prizes, "raffle_awards");
    }

    #[test]
    fn test_load_garbage_is_config_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(matches!(
            RaffleConfig::load(dir.path()),
            Err(RaffleError::Config(_))
        ));
    }
}
