use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::LogoutResponse;
use crate::errors::LogoutError;

pub async fn logout(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, impl IntoResponse), LogoutError> {
    let session = &state.auth_session;
    session.access_token_required(&method, &jar, &headers)?;

    let jar = session.unset_jwt_cookies(jar);

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(LogoutResponse {
                message: "Logged out successfully".to_string(),
            }),
        ),
    ))
}
