use crate::helpers::{cookie_value, TestApp};

#[tokio::test]
async fn refresh_without_csrf_header_is_rejected() {
    let app = TestApp::new().await;
    let _user = app.signed_in_user().await;

    let response = app.refresh(None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn refresh_with_access_csrf_is_rejected() {
    let app = TestApp::new().await;
    let user = app.signed_in_user().await;

    // The access token's nonce does not match the refresh token's.
    let response = app.refresh(Some(&user.access_csrf)).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn refresh_rotates_the_whole_cookie_set() {
    let app = TestApp::new().await;
    let user = app.signed_in_user().await;

    let response = app.refresh(Some(&user.refresh_csrf)).await;
    assert_eq!(response.status().as_u16(), 200);

    let new_access_csrf = cookie_value(&response, "csrf_access_token")
        .expect("refresh should set a new access csrf cookie");
    let new_refresh_csrf = cookie_value(&response, "csrf_refresh_token")
        .expect("refresh should set a new refresh csrf cookie");

    assert_ne!(new_access_csrf, user.access_csrf, "nonces must rotate");
    assert_ne!(new_refresh_csrf, user.refresh_csrf, "nonces must rotate");
    assert!(cookie_value(&response, "access_token_cookie").is_some());
    assert!(cookie_value(&response, "refresh_token_cookie").is_some());

    // The rotated cookie set keeps working for protected calls.
    let response = app.put_profile(Some(&new_access_csrf)).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn refresh_without_login_is_rejected() {
    let app = TestApp::new().await;

    let response = app.refresh(Some("whatever")).await;
    assert_eq!(response.status().as_u16(), 401);
}
