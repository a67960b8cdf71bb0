use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{Email, Password, User, UserStore, UserStoreError};

use super::password_hasher::CredentialHasher;

/// In-memory user store. The platform's real user directory lives behind
/// the same trait in another service; this one backs tests and local runs.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<Email, User>,
    hasher: CredentialHasher,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, email: Email, password: Password) -> Result<(), UserStoreError> {
        if self.users.contains_key(&email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash(password.as_ref())
            .await
            .map_err(|_| UserStoreError::UnexpectedError)?;

        self.users
            .insert(email.clone(), User::new(email, password_hash));
        Ok(())
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let user = self.get_user(email).await?;

        if self
            .hasher
            .verify(password.as_ref(), &user.password_hash)
            .await
        {
            Ok(user)
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }
}
