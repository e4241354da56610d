use crate::error::{RaffleError, Result};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const SALT_SIZE: usize = 16;
const KEY_SIZE: usize = 32;

/// Salted PBKDF2-HMAC-SHA256 password record, hex encoded for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSecret {
    pub salt: String,
    pub hash: String,
    pub iterations: u32,
}

impl AdminSecret {
    pub fn derive(password: &str, iterations: u32) -> Self {
        let mut salt = [0u8; SALT_SIZE];
        rand::thread_rng().fill_bytes(&mut salt);

        let key = derive_key(password, &salt, iterations);
        Self {
            salt: hex::encode(salt),
            hash: hex::encode(key),
            iterations,
        }
    }

    pub fn verify(&self, candidate: &str) -> Result<bool> {
        let salt = hex::decode(&self.salt)
            .map_err(|e| RaffleError::internal(format!("Corrupt admin salt: {}", e)))?;
        let expected = hex::decode(&self.hash)
            .map_err(|e| RaffleError::internal(format!("Corrupt admin hash: {}", e)))?;

        let key = derive_key(candidate, &salt, self.iterations);
        Ok(constant_time_eq(&key, &expected))
    }
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// Compare two plaintext secrets through their SHA256 digests.
pub fn digest_matches(candidate: &str, expected: &str) -> bool {
    let candidate = Sha256::digest(candidate.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    constant_time_eq(&candidate, &expected)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_and_verify() {
        let secret = AdminSecret::derive("hunter2", 1_000);
        assert_eq!(secret.iterations, 1_000);
        assert!(secret.verify("hunter2").unwrap());
        assert!(!secret.verify("hunter3").unwrap());
        assert!(!secret.verify("").unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let a = AdminSecret::derive("same", 1_000);
        let b = AdminSecret::derive("same", 1_000);
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_corrupt_record() {
        let secret = AdminSecret {
            salt: "zz".to_string(),
            hash: "00".to_string(),
            iterations: 1,
        };
        assert!(secret.verify("anything").is_err());
    }

    #[test]
    fn test_digest_matches() {
        assert!(digest_matches("admin123", "admin123"));
        assert!(!digest_matches("admin12", "admin123"));
    }
}
