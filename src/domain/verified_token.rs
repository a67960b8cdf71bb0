use super::token_claims::TokenClaims;

/// Result of a successful verification pass; the request's authenticated
/// identity from here on.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub claims: TokenClaims,
}

impl VerifiedToken {
    pub fn subject(&self) -> &str {
        &self.claims.sub
    }

    pub fn is_fresh(&self) -> bool {
        self.claims.fresh
    }
}
