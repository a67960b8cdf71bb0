use super::email::Email;

/// A stored principal. Only the slow hash of the password is kept; the
/// plaintext never outlives the signup/login request that carried it.
#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub email: Email,
    pub password_hash: String,
}

impl User {
    pub fn new(email: Email, password_hash: String) -> Self {
        User {
            email,
            password_hash,
        }
    }
}
