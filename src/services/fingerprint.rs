use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use base64::Engine;
use rand::RngCore;
use thiserror::Error;

const NONCE_LEN: usize = 12;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed")]
    Encrypt,
    #[error("ciphertext is malformed")]
    Malformed,
    #[error("integrity tag mismatch")]
    InvalidTag,
}

/// Authenticated reversible encryption for the CSRF nonce carried inside
/// signed tokens (AES-256-GCM, random 96-bit nonce prepended, base64
/// output). The key is process-wide configuration and never rotates at
/// runtime.
#[derive(Clone)]
pub struct FingerprintCipher {
    key: [u8; 32],
}

impl FingerprintCipher {
    pub fn new(key: [u8; 32]) -> Self {
        FingerprintCipher { key }
    }

    /// Output is nondeterministic: the same plaintext encrypts to a
    /// different string every call, so callers must compare by decrypting,
    /// never by re-encrypting.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key));

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CipherError::Encrypt)?;

        let mut combined = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        combined.extend_from_slice(&nonce_bytes);
        combined.extend_from_slice(&ciphertext);

        Ok(B64.encode(combined))
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let combined = B64.decode(ciphertext).map_err(|_| CipherError::Malformed)?;
        if combined.len() < NONCE_LEN {
            return Err(CipherError::Malformed);
        }

        let (nonce_bytes, encrypted) = combined.split_at(NONCE_LEN);
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key));
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = cipher
            .decrypt(nonce, encrypted)
            .map_err(|_| CipherError::InvalidTag)?;

        String::from_utf8(plaintext).map_err(|_| CipherError::Malformed)
    }
}
