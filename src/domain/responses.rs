use serde::{Deserialize, Serialize};

// Success bodies for the auth endpoints. The interesting payload rides in
// the cookies; these acknowledgments exist so every endpoint returns JSON.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Identity echo for protected endpoints: the subject claim of the
/// verified access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeResponse {
    pub subject: String,
}
