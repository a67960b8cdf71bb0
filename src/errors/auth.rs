use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verification-path failures. Each is a terminal per-request rejection;
/// nothing here is retried, and every variant surfaces as a 401 with a
/// `{status_code, message}` body.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing access or refresh token")]
    MissingToken,

    #[error("{0}")]
    Csrf(&'static str),

    #[error("Token fingerprint does not match CSRF token")]
    Fingerprint,

    #[error("Invalid token: {0}")]
    JwtDecode(#[source] jsonwebtoken::errors::Error),

    #[error("Token header is unreadable")]
    InvalidHeader,

    #[error("Only access tokens are allowed")]
    AccessTokenRequired,

    #[error("Only refresh tokens are allowed")]
    RefreshTokenRequired,

    #[error("Fresh token required")]
    FreshTokenRequired,

    #[error("Token has been revoked")]
    RevokedToken,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthErrorBody {
    pub status_code: u16,
    pub message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::UNAUTHORIZED;
        log::warn!("authentication rejected: {}", self);

        (
            status,
            Json(AuthErrorBody {
                status_code: status.as_u16(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
