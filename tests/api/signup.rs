use crate::helpers::{get_random_email, TestApp};

#[tokio::test]
async fn should_return_201_on_valid_signup() {
    let app = TestApp::new().await;

    let response = app
        .signup(get_random_email(), "Password123!".to_string())
        .await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn should_return_422_if_malformed_email() {
    let app = TestApp::new().await;

    let response = app
        .signup("not-an-email".to_string(), "Password123!".to_string())
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_422_if_weak_password() {
    let app = TestApp::new().await;

    let response = app
        .signup(get_random_email(), "weakpass".to_string())
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_409_on_duplicate_email() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app.signup(email.clone(), "Password123!".to_string()).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.signup(email, "Password123!".to_string()).await;
    assert_eq!(response.status().as_u16(), 409);
}
