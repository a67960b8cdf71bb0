use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, LoginResponse, Password};
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;
    let user = AuthService::login(state.clone(), email, password).await?;

    let session = &state.auth_session;
    let access = session
        .create_access_token(user.email.as_ref(), false, None, None)
        .map_err(|_| LoginError::InternalServerError)?;
    let refresh = session
        .create_refresh_token(user.email.as_ref(), None, None)
        .map_err(|_| LoginError::InternalServerError)?;

    let jar = session.set_access_cookies(jar, &access, None);
    let jar = session.set_refresh_cookies(jar, &refresh, None);

    log::info!("session cookies issued for {}", user.email.as_ref());

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Logged in successfully".to_string(),
            }),
        ),
    ))
}
