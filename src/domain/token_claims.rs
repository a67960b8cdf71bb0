use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::token_type::TokenType;

/// Full claim set carried by every signed token.
///
/// `csrf` is a fresh nonce per issuance; `fingerprint` is that same nonce
/// encrypted under the process fingerprint key, so the verifier can check
/// a presented CSRF value against the signed token body without any
/// server-side session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: usize,
    pub nbf: usize,
    pub exp: usize,
    pub jti: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub csrf: String,
    pub fingerprint: String,
    #[serde(default)]
    pub fresh: bool,
    /// Caller-supplied extra claims, merged flat into the payload.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub user_claims: Map<String, Value>,
}
