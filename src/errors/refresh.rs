use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::AuthError;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> axum::response::Response {
        match self {
            RefreshError::Auth(e) => e.into_response(),
            RefreshError::InternalServerError => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
