use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::TokenClaims;

/// Signing and verification of the compact token format. Signature, `exp`
/// and `nbf` are enforced on decode; everything above the claim level
/// (type, CSRF, fingerprint) belongs to the auth session.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        TokenCodec {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
        }
    }

    pub fn encode(&self, claims: &TokenClaims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
    }

    /// Verifies signature, expiry and not-before, and rejects tokens signed
    /// under a different algorithm.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_nbf = true;
        validation.leeway = 30;

        decode::<TokenClaims>(token, &self.decoding_key, &validation).map(|data| data.claims)
    }

    /// Reads the header without verifying the signature. Detects gross
    /// malformation only; never a trust decision.
    pub fn peek_header(&self, token: &str) -> Result<Header, jsonwebtoken::errors::Error> {
        decode_header(token)
    }
}
