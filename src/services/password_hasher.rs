use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("failed to hash password")]
    Hashing,
}

/// Slow salted password hashing (Argon2id). Hashing and verification are
/// CPU-heavy, so both run on the blocking pool.
#[derive(Clone, Default)]
pub struct CredentialHasher;

impl CredentialHasher {
    pub fn new() -> Self {
        CredentialHasher
    }

    /// Produces a fresh salted hash; two calls over the same password give
    /// different outputs.
    pub async fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None).map_err(|_| CredentialError::Hashing)?,
            );
            let salt = SaltString::generate(&mut OsRng);
            let hash = argon2
                .hash_password(password.as_bytes(), &salt)
                .map_err(|_| CredentialError::Hashing)?
                .to_string();
            Ok(hash)
        })
        .await
        .map_err(|_| CredentialError::Hashing)?
    }

    /// `false` on mismatch and on malformed stored hashes alike; a broken
    /// hash must read as "wrong password", not as a server fault.
    pub async fn verify(&self, plain: &str, hashed: &str) -> bool {
        let plain = plain.to_owned();
        let hashed = hashed.to_owned();

        let result = tokio::task::spawn_blocking(move || {
            let parsed = match PasswordHash::new(&hashed) {
                Ok(parsed) => parsed,
                Err(_) => return false,
            };
            Argon2::default()
                .verify_password(plain.as_bytes(), &parsed)
                .is_ok()
        })
        .await;

        result.unwrap_or(false)
    }
}
