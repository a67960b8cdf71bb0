use std::sync::{Arc, Mutex};

use reqwest::{Client, Response};
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use pulse_auth_service::app_router;
use pulse_auth_service::app_state::AppState;
use pulse_auth_service::domain::{LoginRequestBody, SignupRequestBody};
use pulse_auth_service::services::{AuthSession, HashmapUserStore};
use pulse_auth_service::utils::config::AuthConfig;
use pulse_auth_service::utils::consts::CSRF_HEADER_NAME;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn test_config() -> Arc<AuthConfig> {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("JWT_SECRET", "api-test-signing-secret-with-enough-length");
    std::env::set_var(
        "FINGERPRINT_KEY_B64",
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
    );
    std::env::set_var("ACCESS_TTL_MINUTES", "10");
    std::env::set_var("REFRESH_TTL_MINUTES", "60");
    std::env::set_var("APP_ENV", "development");
    std::env::set_var("VERIFY_FINGERPRINT", "true");
    std::env::set_var("DENYLIST_ENABLED", "false");

    Arc::new(AuthConfig::from_env().expect("failed to build test config"))
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();
        let auth_session =
            Arc::new(AuthSession::new(config.clone()).expect("failed to build auth session"));
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let app_state = AppState::new(user_store, auth_session, config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));
        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        let http_client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build http client");

        TestApp {
            address,
            http_client,
        }
    }

    pub async fn signup(&self, email: String, password: String) -> Response {
        let body = SignupRequestBody { email, password };

        self.http_client
            .post(format!("{}/signup", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute signup request.")
    }

    pub async fn login(&self, email: String, password: String) -> Response {
        let body = LoginRequestBody { email, password };

        self.http_client
            .post(format!("{}/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    /// Signs up and logs in a fresh user, returning the email and the two
    /// CSRF nonces read from the login response's cookie pair.
    pub async fn signed_in_user(&self) -> SignedInUser {
        let email = get_random_email();
        let password = "Password123!".to_string();

        let response = self.signup(email.clone(), password.clone()).await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self.login(email.clone(), password).await;
        assert_eq!(response.status().as_u16(), 200);

        let access_csrf = cookie_value(&response, "csrf_access_token")
            .expect("login should set the access csrf cookie");
        let refresh_csrf = cookie_value(&response, "csrf_refresh_token")
            .expect("login should set the refresh csrf cookie");

        SignedInUser {
            email,
            access_csrf,
            refresh_csrf,
        }
    }

    pub async fn get_me(&self) -> Response {
        self.http_client
            .get(format!("{}/me", &self.address))
            .send()
            .await
            .expect("Failed to execute me request.")
    }

    pub async fn put_profile(&self, csrf_header: Option<&str>) -> Response {
        let mut request = self.http_client.put(format!("{}/profile", &self.address));
        if let Some(csrf) = csrf_header {
            request = request.header(CSRF_HEADER_NAME, csrf);
        }
        request
            .send()
            .await
            .expect("Failed to execute profile request.")
    }

    pub async fn refresh(&self, csrf_header: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/refresh-token", &self.address));
        if let Some(csrf) = csrf_header {
            request = request.header(CSRF_HEADER_NAME, csrf);
        }
        request
            .send()
            .await
            .expect("Failed to execute refresh request.")
    }

    pub async fn logout(&self, csrf_header: Option<&str>) -> Response {
        let mut request = self.http_client.post(format!("{}/logout", &self.address));
        if let Some(csrf) = csrf_header {
            request = request.header(CSRF_HEADER_NAME, csrf);
        }
        request
            .send()
            .await
            .expect("Failed to execute logout request.")
    }
}

pub struct SignedInUser {
    pub email: String,
    pub access_csrf: String,
    pub refresh_csrf: String,
}

pub fn cookie_value(response: &Response, name: &str) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
