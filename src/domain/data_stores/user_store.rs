use async_trait::async_trait;

use super::UserStoreError;
use crate::domain::{Email, Password, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Hashes the password and stores the user. Fails if the email is
    /// already registered.
    async fn add_user(&mut self, email: Email, password: Password) -> Result<(), UserStoreError>;

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;

    /// Verifies the password against the stored hash and returns the user.
    async fn validate_user(&self, email: &Email, password: &Password)
        -> Result<User, UserStoreError>;
}
