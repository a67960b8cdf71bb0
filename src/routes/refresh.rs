use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::RefreshResponse;
use crate::errors::RefreshError;

/// Exchanges a verified refresh token for a brand-new cookie set; both new
/// tokens carry fresh nonces.
pub async fn refresh_token(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, impl IntoResponse), RefreshError> {
    let session = &state.auth_session;
    let verified = session.refresh_token_required(&method, &jar, &headers)?;
    let subject = verified.subject().to_owned();

    let access = session
        .create_access_token(&subject, false, None, None)
        .map_err(|_| RefreshError::InternalServerError)?;
    let refresh = session
        .create_refresh_token(&subject, None, None)
        .map_err(|_| RefreshError::InternalServerError)?;

    let jar = session.set_access_cookies(jar, &access, None);
    let jar = session.set_refresh_cookies(jar, &refresh, None);

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(RefreshResponse {
                message: "Token refreshed successfully".to_string(),
            }),
        ),
    ))
}
