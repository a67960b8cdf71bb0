use std::sync::Arc;

use tokio::sync::RwLock;

use pulse_auth_service::app_state::AppState;
use pulse_auth_service::domain::DenylistStore;
use pulse_auth_service::services::{denylist_check, AuthSession, HashmapDenylistStore, HashmapUserStore};
use pulse_auth_service::utils::AuthConfig;
use pulse_auth_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(AuthConfig::from_env().expect("Failed to load config"));

    let auth_session = if config.denylist_enabled() {
        let store: Arc<dyn DenylistStore> = Arc::new(HashmapDenylistStore::new());
        Arc::new(AuthSession::with_denylist(
            config.clone(),
            denylist_check(store),
        ))
    } else {
        Arc::new(AuthSession::new(config.clone()).expect("Invalid auth configuration"))
    };

    let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
    let app_state = AppState::new(user_store, auth_session, config);

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
