use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{DenylistStore, TokenClaims};

use super::auth_session::DenylistCheck;

/// In-memory denylist: token `jti` mapped to the instant the revocation
/// stops mattering (normally the token's own expiry).
#[derive(Default)]
pub struct HashmapDenylistStore {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl HashmapDenylistStore {
    pub fn new() -> Self {
        HashmapDenylistStore::default()
    }
}

impl DenylistStore for HashmapDenylistStore {
    fn revoke(&self, jti: &str, until: DateTime<Utc>) {
        let now = Utc::now();
        let mut revoked = self.revoked.write();
        // Entries past their horizon are dead weight; drop them on write.
        revoked.retain(|_, expires| *expires > now);
        revoked.insert(jti.to_owned(), until);
    }

    fn is_revoked(&self, jti: &str) -> bool {
        let now = Utc::now();
        self.revoked
            .read()
            .get(jti)
            .is_some_and(|expires| *expires > now)
    }
}

/// Adapts a denylist store into the session's revocation callback.
pub fn denylist_check(store: Arc<dyn DenylistStore>) -> DenylistCheck {
    Arc::new(move |claims: &TokenClaims| store.is_revoked(&claims.jti))
}
