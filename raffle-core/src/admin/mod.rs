pub mod secret;

pub use secret::AdminSecret;

use crate::error::{RaffleError, Result};
use crate::raffle::Raffle;

impl Raffle {
    /// Check a candidate against the stored admin record, or the configured
    /// password when nothing is stored.
    pub fn check_password(&self, candidate: &str) -> bool {
        if let Some(stored) = self.state().admin_secret() {
            return match stored.verify(candidate) {
                Ok(matched) => matched,
                Err(e) => {
                    tracing::error!("Stored admin secret unusable: {}", e);
                    false
                }
            };
        }

        match &self.config().admin_password {
            Some(configured) => secret::digest_matches(candidate, configured),
            None => {
                tracing::warn!("No admin password configured, rejecting");
                false
            }
        }
    }

    pub fn require_admin(&self, candidate: &str) -> Result<()> {
        if self.check_password(candidate) {
            Ok(())
        } else {
            tracing::warn!("Admin password rejected");
            Err(RaffleError::Unauthorized)
        }
    }

    pub fn has_admin_password(&self) -> bool {
        self.state().admin_secret().is_some() || self.config().admin_password.is_some()
    }

    /// Store a first admin password when neither storage nor configuration
    /// provides one.
    pub fn initialize_admin_password(&self, password: &str) -> Result<()> {
        if self.has_admin_password() {
            return Err(RaffleError::config("Admin password already set"));
        }

        if password.is_empty() {
            return Err(RaffleError::missing_input("Admin password is empty"));
        }

        let secret = AdminSecret::derive(password, self.config().pbkdf2_iterations);
        self.state().set_admin_secret(&secret)?;

        tracing::info!("Admin password initialized");
        Ok(())
    }

    /// Replace the admin password. The new record survives until a reset.
    pub fn set_admin_password(&self, current: &str, new_password: &str) -> Result<()> {
        self.require_admin(current)?;

        if new_password.is_empty() {
            return Err(RaffleError::missing_input("New admin password is empty"));
        }

        let secret = AdminSecret::derive(new_password, self.config().pbkdf2_iterations);
        self.state().set_admin_secret(&secret)?;

        tracing::info!("Admin password updated");
        Ok(())
    }
}
