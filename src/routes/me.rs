use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::MeResponse;
use crate::errors::AuthError;

pub async fn me(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthError> {
    let verified = state
        .auth_session
        .access_token_required(&method, &jar, &headers)?;

    Ok((
        StatusCode::OK,
        Json(MeResponse {
            subject: verified.subject().to_owned(),
        }),
    ))
}
