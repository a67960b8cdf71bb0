use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::AuthSession;
use crate::utils::AuthConfig;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type AuthSessionType = Arc<AuthSession>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub auth_session: AuthSessionType,
    pub config: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        auth_session: AuthSessionType,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_store,
            auth_session,
            config,
        }
    }
}
