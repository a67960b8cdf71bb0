use crate::helpers::TestApp;

#[tokio::test]
async fn logout_without_csrf_header_is_rejected() {
    let app = TestApp::new().await;
    let _user = app.signed_in_user().await;

    let response = app.logout(None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_clears_the_session_cookies() {
    let app = TestApp::new().await;
    let user = app.signed_in_user().await;

    let response = app.logout(Some(&user.access_csrf)).await;
    assert_eq!(response.status().as_u16(), 200);

    // Every cleared cookie comes back emptied.
    for cookie in response.cookies() {
        assert!(
            cookie.value().is_empty(),
            "cookie {} should be cleared on logout",
            cookie.name()
        );
    }

    // With the cookie jar emptied, protected reads fail again.
    let response = app.get_me().await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_without_login_is_rejected() {
    let app = TestApp::new().await;

    let response = app.logout(Some("whatever")).await;
    assert_eq!(response.status().as_u16(), 401);
}
