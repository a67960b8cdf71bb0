// Cookie and header names are a fixed wire contract with the frontend;
// changing any of these breaks deployed clients.

pub const ACCESS_COOKIE_NAME: &str = "access_token_cookie";
pub const ACCESS_CSRF_COOKIE_NAME: &str = "csrf_access_token";
pub const REFRESH_COOKIE_NAME: &str = "refresh_token_cookie";
pub const REFRESH_CSRF_COOKIE_NAME: &str = "csrf_refresh_token";

// One header serves both token types; the endpoint decides which pair it
// checks against.
pub const CSRF_HEADER_NAME: &str = "X-CSRF-Token";

/// Fallback transport: a token may arrive in a header named after its
/// cookie, with underscores replaced by hyphens.
pub fn token_header_name(cookie_name: &str) -> String {
    cookie_name.replace('_', "-")
}

pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const FINGERPRINT_KEY_ENV_VAR: &str = "FINGERPRINT_KEY_B64";
    pub const ACCESS_TTL_MINUTES_ENV_VAR: &str = "ACCESS_TTL_MINUTES";
    pub const REFRESH_TTL_MINUTES_ENV_VAR: &str = "REFRESH_TTL_MINUTES";
    pub const APP_ENV_ENV_VAR: &str = "APP_ENV";
    pub const COOKIE_DOMAIN_ENV_VAR: &str = "COOKIE_DOMAIN";
    pub const VERIFY_FINGERPRINT_ENV_VAR: &str = "VERIFY_FINGERPRINT";
    pub const DENYLIST_ENABLED_ENV_VAR: &str = "DENYLIST_ENABLED";
}
