use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use super::config::AuthConfig;

fn build_cookie(
    config: &AuthConfig,
    name: &str,
    value: &str,
    max_age_secs: i64,
    http_only: bool,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name.to_string(), value.to_string()))
        .path(config.cookie_path().to_owned())
        .http_only(http_only)
        .same_site(config.cookie_samesite())
        .secure(config.cookie_secure())
        .max_age(Duration::seconds(max_age_secs));

    if let Some(domain) = config.cookie_domain() {
        builder = builder.domain(domain.to_owned());
    }

    builder.build()
}

/// Signed-token cookie: never readable by client script.
pub fn token_cookie(
    config: &AuthConfig,
    name: &str,
    token: &str,
    max_age_secs: i64,
) -> Cookie<'static> {
    build_cookie(config, name, token, max_age_secs, true)
}

/// CSRF-nonce cookie: the frontend must read this to populate the CSRF
/// header, so it stays script-accessible.
pub fn csrf_cookie(
    config: &AuthConfig,
    name: &str,
    csrf: &str,
    max_age_secs: i64,
) -> Cookie<'static> {
    build_cookie(config, name, csrf, max_age_secs, false)
}

pub fn clear_cookie(config: &AuthConfig, name: &str) -> Cookie<'static> {
    let mut builder = Cookie::build((name.to_owned(), String::new()))
        .path(config.cookie_path().to_owned())
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure())
        .max_age(Duration::seconds(0));

    if let Some(domain) = config.cookie_domain() {
        builder = builder.domain(domain.to_owned());
    }

    builder.build()
}
