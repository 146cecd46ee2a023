//! bcrypt hashing run on the blocking thread pool

use cg_shared::config::SecurityConfig;

use crate::errors::{DomainError, DomainResult};

/// Hashes and checks low-entropy secrets with bcrypt
#[derive(Debug, Clone)]
pub struct SecretHasher {
    cost: u32,
}

impl SecretHasher {
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hash a secret
    pub async fn hash(&self, secret: &str) -> DomainResult<String> {
        let secret = secret.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(secret, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash secret: {}", e)))
    }

    /// Check a secret against a stored hash
    ///
    /// A hash that cannot be parsed counts as a mismatch.
    pub async fn verify(&self, secret: &str, hash: &str) -> DomainResult<bool> {
        let secret = secret.to_string();
        let hash = hash.to_string();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(secret, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?;

        match verified {
            Ok(matches) => Ok(matches),
            Err(error) => {
                tracing::warn!(error = %error, "Stored hash could not be parsed");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> SecretHasher {
        SecretHasher::new(&SecurityConfig::default().with_bcrypt_cost(4))
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = hasher();
        let hash = hasher.hash("0427").await.unwrap();

        assert_ne!(hash, "0427");
        assert!(hasher.verify("0427", &hash).await.unwrap());
        assert!(!hasher.verify("0428", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_garbage_hash_is_mismatch() {
        assert!(!hasher().verify("0427", "not-a-hash").await.unwrap());
    }
}
