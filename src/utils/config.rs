use std::env;

use axum_extra::extract::cookie::SameSite;
use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use dotenvy::dotenv;
use thiserror::Error;

use super::consts::env as env_vars;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Immutable authentication configuration, loaded once at process start.
///
/// Every request handler sees the same values for the lifetime of the
/// process; there is no runtime rotation of key material.
#[derive(Clone)]
pub struct AuthConfig {
    secret_key: String,
    fingerprint_key_32: [u8; 32],
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    environment: Environment,
    cookie_domain: Option<String>,
    cookie_path: String,
    csrf_protect: bool,
    verify_fingerprint: bool,
    denylist_enabled: bool,
}

impl AuthConfig {
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
    pub fn fingerprint_key(&self) -> &[u8; 32] {
        &self.fingerprint_key_32
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn environment(&self) -> Environment {
        self.environment
    }
    pub fn cookie_domain(&self) -> Option<&str> {
        self.cookie_domain.as_deref()
    }
    pub fn cookie_path(&self) -> &str {
        &self.cookie_path
    }
    pub fn csrf_protect(&self) -> bool {
        self.csrf_protect
    }
    pub fn verify_fingerprint(&self) -> bool {
        self.verify_fingerprint
    }
    pub fn denylist_enabled(&self) -> bool {
        self.denylist_enabled
    }

    /// Cookie `secure` attribute: off in development so plain-HTTP local
    /// setups keep working, on everywhere else.
    pub fn cookie_secure(&self) -> bool {
        self.environment == Environment::Production
    }

    /// `SameSite=Lax` in production, `None` in development (the dev
    /// frontend runs on a different origin).
    pub fn cookie_samesite(&self) -> SameSite {
        match self.environment {
            Environment::Production => SameSite::Lax,
            Environment::Development => SameSite::None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let secret_key = req_var(env_vars::JWT_SECRET_ENV_VAR)?;
        if secret_key.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET must not be empty"));
        }

        let fingerprint_key_b64 = req_var(env_vars::FINGERPRINT_KEY_ENV_VAR)?;
        let fingerprint_key_vec = decode_b64_any(&fingerprint_key_b64)
            .map_err(|_| ConfigError::Decode(env_vars::FINGERPRINT_KEY_ENV_VAR))?;
        if fingerprint_key_vec.len() != 32 {
            return Err(ConfigError::WrongLen(
                "FINGERPRINT_KEY_B64 must decode to 32 bytes",
            ));
        }
        let mut fingerprint_key_32 = [0u8; 32];
        fingerprint_key_32.copy_from_slice(&fingerprint_key_vec);

        // Token lifetimes are configured in minutes.
        let access_ttl_seconds = parse_i64(env_vars::ACCESS_TTL_MINUTES_ENV_VAR)? * 60;
        let refresh_ttl_seconds = parse_i64(env_vars::REFRESH_TTL_MINUTES_ENV_VAR)? * 60;

        let environment = match opt_var(env_vars::APP_ENV_ENV_VAR).as_deref() {
            None | Some("development") => Environment::Development,
            Some("production") => Environment::Production,
            Some(_) => return Err(ConfigError::Invalid("APP_ENV")),
        };

        let cookie_domain = opt_var(env_vars::COOKIE_DOMAIN_ENV_VAR);

        // The fingerprint cross-check follows the environment profile
        // unless explicitly pinned.
        let verify_fingerprint = match opt_var(env_vars::VERIFY_FINGERPRINT_ENV_VAR) {
            Some(v) => parse_bool(env_vars::VERIFY_FINGERPRINT_ENV_VAR, &v)?,
            None => environment == Environment::Production,
        };

        let denylist_enabled = match opt_var(env_vars::DENYLIST_ENABLED_ENV_VAR) {
            Some(v) => parse_bool(env_vars::DENYLIST_ENABLED_ENV_VAR, &v)?,
            None => false,
        };

        Ok(Self {
            secret_key,
            fingerprint_key_32,
            access_ttl_seconds,
            refresh_ttl_seconds,
            environment,
            cookie_domain,
            cookie_path: "/".to_string(),
            csrf_protect: true,
            verify_fingerprint,
            denylist_enabled,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
    #[error("{0}")]
    WrongLen(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64(key: &'static str) -> Result<i64, ConfigError> {
    let v = req_var(key)?;
    v.parse::<i64>().map_err(|_| ConfigError::Invalid(key))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::Invalid(key)),
    }
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}
