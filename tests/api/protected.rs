use crate::helpers::TestApp;
use pulse_auth_service::domain::MeResponse;
use pulse_auth_service::errors::AuthErrorBody;

#[tokio::test]
async fn get_me_succeeds_with_cookies_only() {
    let app = TestApp::new().await;
    let user = app.signed_in_user().await;

    // No CSRF header at all: reads are exempt.
    let response = app.get_me().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: MeResponse = response.json().await.expect("me response should be json");
    assert_eq!(body.subject, user.email);
}

#[tokio::test]
async fn get_me_without_login_returns_401_body() {
    let app = TestApp::new().await;

    let response = app.get_me().await;
    assert_eq!(response.status().as_u16(), 401);

    let body: AuthErrorBody = response.json().await.expect("error body should be json");
    assert_eq!(body.status_code, 401);
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn put_profile_without_csrf_header_is_rejected() {
    let app = TestApp::new().await;
    let _user = app.signed_in_user().await;

    let response = app.put_profile(None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn put_profile_with_wrong_csrf_header_is_rejected() {
    let app = TestApp::new().await;
    let _user = app.signed_in_user().await;

    let response = app.put_profile(Some("syntactically-fine-but-wrong")).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn put_profile_with_matching_csrf_header_succeeds() {
    let app = TestApp::new().await;
    let user = app.signed_in_user().await;

    let response = app.put_profile(Some(&user.access_csrf)).await;
    assert_eq!(response.status().as_u16(), 200);
}
