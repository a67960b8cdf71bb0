use axum::response::IntoResponse;
use thiserror::Error;

use super::AuthError;

#[derive(Error, Debug)]
pub enum LogoutError {
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for LogoutError {
    fn into_response(self) -> axum::response::Response {
        match self {
            LogoutError::Auth(e) => e.into_response(),
        }
    }
}
