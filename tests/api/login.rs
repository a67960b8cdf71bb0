use crate::helpers::{cookie_value, get_random_email, TestApp};

#[tokio::test]
async fn should_return_422_if_malformed_email() {
    let app = TestApp::new().await;

    let response = app
        .login("".to_string(), "Password123!".to_string())
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_401_if_user_not_found() {
    let app = TestApp::new().await;

    let response = app
        .login(get_random_email(), "Password123!".to_string())
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.signup(email.clone(), "Password123!".to_string()).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.login(email, "Different123!".to_string()).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn successful_login_sets_all_four_cookies() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let password = "Password123!".to_string();

    let response = app.signup(email.clone(), password.clone()).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.login(email, password).await;
    assert_eq!(response.status().as_u16(), 200);

    for name in [
        "access_token_cookie",
        "csrf_access_token",
        "refresh_token_cookie",
        "csrf_refresh_token",
    ] {
        let value = cookie_value(&response, name)
            .unwrap_or_else(|| panic!("cookie {name} missing from login response"));
        assert!(!value.is_empty(), "cookie {name} should not be empty");
    }

    // The two token pairs carry independent nonces.
    assert_ne!(
        cookie_value(&response, "csrf_access_token"),
        cookie_value(&response, "csrf_refresh_token"),
    );
}
