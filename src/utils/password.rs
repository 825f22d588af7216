use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::config::PasswordConfig;
use crate::error::{AppError, AppResult};

/// Argon2id hasher with cost parameters fixed at construction.
///
/// Hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`), so
/// verification reads the parameters from the hash and keeps working after
/// the configured cost changes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new(config: &PasswordConfig) -> AppResult<Self> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::Configuration {
                key: "password".to_string(),
                source: anyhow::anyhow!("Invalid Argon2 parameters: {}", e),
            })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// CPU bound; call from `spawn_blocking` on request paths.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal {
                source: anyhow::anyhow!("Failed to hash password: {}", e),
            })
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// A stored value that is not a PHC string never verifies.
    pub fn verify(&self, password: &str, password_hash: &str) -> bool {
        match PasswordHash::new(password_hash) {
            Ok(parsed) => self
                .argon2()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password is not a valid PHC hash");
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(&PasswordConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid test parameters")
}
