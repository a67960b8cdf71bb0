use std::sync::Arc;

use axum::http::{HeaderMap, Method};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde_json::{Map, Value};
use subtle::ConstantTimeEq;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{IssuedToken, TokenClaims, TokenType, VerifiedToken};
use crate::errors::AuthError;
use crate::utils::config::{AuthConfig, ConfigError};
use crate::utils::consts::{
    token_header_name, ACCESS_COOKIE_NAME, ACCESS_CSRF_COOKIE_NAME, CSRF_HEADER_NAME,
    REFRESH_COOKIE_NAME, REFRESH_CSRF_COOKIE_NAME,
};
use crate::utils::cookie_helpers::{clear_cookie, csrf_cookie, token_cookie};

use super::fingerprint::{CipherError, FingerprintCipher};
use super::token_codec::TokenCodec;

/// Registered revocation check: `true` means the token is denylisted.
/// At most one callback per session; absent by default.
pub type DenylistCheck = Arc<dyn Fn(&TokenClaims) -> bool + Send + Sync>;

#[derive(Error, Debug)]
pub enum TokenCreateError {
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("failed to encrypt csrf fingerprint: {0}")]
    Fingerprint(#[from] CipherError),

    #[error("token lifetime out of range")]
    InvalidTtl,
}

/// Orchestrates token issuance, cookie lifecycle and per-request
/// verification.
///
/// Construction is the only mutation point; afterwards the session is
/// shared immutably across requests. Token creation returns the CSRF nonce
/// alongside the signed token, so cookie placement never relies on call
/// ordering.
pub struct AuthSession {
    config: Arc<AuthConfig>,
    codec: TokenCodec,
    cipher: FingerprintCipher,
    denylist_check: Option<DenylistCheck>,
}

impl AuthSession {
    /// Builds a session without a revocation callback. Rejects a
    /// configuration that enables the denylist with nothing to consult —
    /// that is a deployment mistake, caught at startup rather than
    /// converted into per-request 401s.
    pub fn new(config: Arc<AuthConfig>) -> Result<Self, ConfigError> {
        if config.denylist_enabled() {
            return Err(ConfigError::Invalid(
                "DENYLIST_ENABLED requires a registered denylist callback",
            ));
        }
        Ok(Self::build(config, None))
    }

    pub fn with_denylist(config: Arc<AuthConfig>, check: DenylistCheck) -> Self {
        Self::build(config, Some(check))
    }

    fn build(config: Arc<AuthConfig>, denylist_check: Option<DenylistCheck>) -> Self {
        let codec = TokenCodec::new(config.secret_key());
        let cipher = FingerprintCipher::new(*config.fingerprint_key());
        AuthSession {
            config,
            codec,
            cipher,
            denylist_check,
        }
    }

    // ---- issuance ----

    /// Mints an access token with a fresh `jti` and a fresh CSRF nonce.
    /// No shipped caller passes `fresh = true` yet; the flag exists for
    /// future short-lived privileged actions.
    pub fn create_access_token(
        &self,
        subject: &str,
        fresh: bool,
        ttl_seconds: Option<i64>,
        user_claims: Option<Map<String, Value>>,
    ) -> Result<IssuedToken, TokenCreateError> {
        let ttl = ttl_seconds.unwrap_or_else(|| self.config.access_ttl_seconds());
        self.create_token(TokenType::Access, subject, fresh, ttl, user_claims)
    }

    pub fn create_refresh_token(
        &self,
        subject: &str,
        ttl_seconds: Option<i64>,
        user_claims: Option<Map<String, Value>>,
    ) -> Result<IssuedToken, TokenCreateError> {
        let ttl = ttl_seconds.unwrap_or_else(|| self.config.refresh_ttl_seconds());
        self.create_token(TokenType::Refresh, subject, false, ttl, user_claims)
    }

    fn create_token(
        &self,
        token_type: TokenType,
        subject: &str,
        fresh: bool,
        ttl_seconds: i64,
        user_claims: Option<Map<String, Value>>,
    ) -> Result<IssuedToken, TokenCreateError> {
        let now = Utc::now();
        let delta =
            chrono::Duration::try_seconds(ttl_seconds).ok_or(TokenCreateError::InvalidTtl)?;
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenCreateError::InvalidTtl)?;

        // Independent nonces per call: concurrent logins by the same
        // subject never share a jti or csrf value.
        let jti = Uuid::new_v4().to_string();
        let csrf = Uuid::new_v4().to_string();
        let fingerprint = self.cipher.encrypt(&csrf)?;

        let claims = TokenClaims {
            sub: subject.to_owned(),
            iat: now.timestamp() as usize,
            nbf: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
            jti,
            token_type,
            csrf: csrf.clone(),
            fingerprint,
            fresh,
            user_claims: user_claims.unwrap_or_default(),
        };

        let token = self.codec.encode(&claims)?;
        Ok(IssuedToken { token, csrf })
    }

    // ---- cookie lifecycle ----

    /// Writes the access-token cookie plus, under CSRF protection, the
    /// script-readable CSRF cookie carrying the nonce from the same
    /// issuance.
    pub fn set_access_cookies(
        &self,
        jar: CookieJar,
        issued: &IssuedToken,
        max_age_secs: Option<i64>,
    ) -> CookieJar {
        self.set_cookies(
            jar,
            issued,
            ACCESS_COOKIE_NAME,
            ACCESS_CSRF_COOKIE_NAME,
            max_age_secs.unwrap_or_else(|| self.config.access_ttl_seconds()),
        )
    }

    pub fn set_refresh_cookies(
        &self,
        jar: CookieJar,
        issued: &IssuedToken,
        max_age_secs: Option<i64>,
    ) -> CookieJar {
        self.set_cookies(
            jar,
            issued,
            REFRESH_COOKIE_NAME,
            REFRESH_CSRF_COOKIE_NAME,
            max_age_secs.unwrap_or_else(|| self.config.refresh_ttl_seconds()),
        )
    }

    fn set_cookies(
        &self,
        jar: CookieJar,
        issued: &IssuedToken,
        token_name: &str,
        csrf_name: &str,
        max_age_secs: i64,
    ) -> CookieJar {
        let jar = jar.add(token_cookie(
            &self.config,
            token_name,
            &issued.token,
            max_age_secs,
        ));
        if self.config.csrf_protect() {
            jar.add(csrf_cookie(&self.config, csrf_name, &issued.csrf, max_age_secs))
        } else {
            jar
        }
    }

    /// Clearing is idempotent: re-clearing an absent cookie just rewrites
    /// the empty marker.
    pub fn unset_access_cookies(&self, jar: CookieJar) -> CookieJar {
        jar.add(clear_cookie(&self.config, ACCESS_COOKIE_NAME))
            .add(clear_cookie(&self.config, ACCESS_CSRF_COOKIE_NAME))
    }

    pub fn unset_refresh_cookies(&self, jar: CookieJar) -> CookieJar {
        jar.add(clear_cookie(&self.config, REFRESH_COOKIE_NAME))
            .add(clear_cookie(&self.config, REFRESH_CSRF_COOKIE_NAME))
    }

    pub fn unset_jwt_cookies(&self, jar: CookieJar) -> CookieJar {
        let jar = self.unset_access_cookies(jar);
        self.unset_refresh_cookies(jar)
    }

    // ---- verification ----

    pub fn access_token_required(
        &self,
        method: &Method,
        jar: &CookieJar,
        headers: &HeaderMap,
    ) -> Result<VerifiedToken, AuthError> {
        self.verify_jwt_in_cookies(TokenType::Access, method, jar, headers, false)
    }

    pub fn fresh_access_token_required(
        &self,
        method: &Method,
        jar: &CookieJar,
        headers: &HeaderMap,
    ) -> Result<VerifiedToken, AuthError> {
        self.verify_jwt_in_cookies(TokenType::Access, method, jar, headers, true)
    }

    pub fn refresh_token_required(
        &self,
        method: &Method,
        jar: &CookieJar,
        headers: &HeaderMap,
    ) -> Result<VerifiedToken, AuthError> {
        self.verify_jwt_in_cookies(TokenType::Refresh, method, jar, headers, false)
    }

    /// The verification state machine. Order matters: presence, CSRF
    /// presence on mutating methods, decode, type, freshness, revocation,
    /// then the CSRF value / fingerprint cross-check.
    pub fn verify_jwt_in_cookies(
        &self,
        expected: TokenType,
        method: &Method,
        jar: &CookieJar,
        headers: &HeaderMap,
        fresh: bool,
    ) -> Result<VerifiedToken, AuthError> {
        let cookie_name = match expected {
            TokenType::Access => ACCESS_COOKIE_NAME,
            TokenType::Refresh => REFRESH_COOKIE_NAME,
        };

        // Cookie first, then the hyphenated header fallback.
        let token = jar
            .get(cookie_name)
            .map(|cookie| cookie.value().to_string())
            .or_else(|| {
                headers
                    .get(token_header_name(cookie_name))
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
            })
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let presented_csrf = headers
            .get(CSRF_HEADER_NAME)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        // Reads are exempt; a cross-site attacker gains nothing from them.
        let mutating = is_state_changing(method);
        if self.config.csrf_protect() && mutating && presented_csrf.is_none() {
            return Err(AuthError::Csrf("Missing CSRF token header"));
        }

        self.codec
            .peek_header(&token)
            .map_err(|_| AuthError::InvalidHeader)?;
        let claims = self.codec.decode(&token).map_err(AuthError::JwtDecode)?;

        if claims.token_type != expected {
            return Err(match expected {
                TokenType::Access => AuthError::AccessTokenRequired,
                TokenType::Refresh => AuthError::RefreshTokenRequired,
            });
        }

        if fresh && !claims.fresh {
            return Err(AuthError::FreshTokenRequired);
        }

        if self.config.denylist_enabled() {
            if let Some(check) = &self.denylist_check {
                if check(&claims) {
                    return Err(AuthError::RevokedToken);
                }
            }
        }

        if self.config.csrf_protect() && mutating {
            let presented =
                presented_csrf.ok_or(AuthError::Csrf("Missing CSRF token header"))?;

            if !constant_time_eq(&presented, &claims.csrf) {
                return Err(AuthError::Csrf("CSRF double submit tokens do not match"));
            }

            // The encrypted copy inside the signed body is nondeterministic
            // ciphertext, so the check decrypts and compares.
            if self.config.verify_fingerprint() {
                let recovered = self
                    .cipher
                    .decrypt(&claims.fingerprint)
                    .map_err(|_| AuthError::Fingerprint)?;
                if !constant_time_eq(&recovered, &presented) {
                    return Err(AuthError::Fingerprint);
                }
            }
        }

        Ok(VerifiedToken { claims })
    }
}

fn is_state_changing(method: &Method) -> bool {
    *method == Method::POST
        || *method == Method::PUT
        || *method == Method::PATCH
        || *method == Method::DELETE
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
