use serde::{Deserialize, Serialize};

/// Wire bodies accepted by the credential endpoints. Validation happens in
/// the handlers via `Email::parse` / `Password::parse`; these structs carry
/// the raw strings only.

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupRequestBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
}
