//! Domain service for user credentials.
//!
//! Handles account creation, password checks, and password changes. Plaintext
//! passwords are never persisted; only a per-user salt and the salted digest.

use thiserror::Error;

/// Errors specific to credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("User with username '{0}' already exists")]
    DuplicateUser(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl From<sea_orm::DbErr> for CredentialError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Unexpected(err.to_string())
    }
}

/// Domain service trait for user credentials.
#[async_trait::async_trait]
pub trait CredentialService: Send + Sync {
    /// Registers a user with a freshly salted password hash.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::DuplicateUser`] if the username is taken.
    async fn create_user(&self, username: &str, password: &str) -> Result<(), CredentialError>;

    /// Checks a password against the stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UserNotFound`] if no such user exists.
    async fn check_password(&self, username: &str, password: &str)
    -> Result<bool, CredentialError>;

    /// Replaces the stored hash, keeping the user's original salt.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UserNotFound`] if no such user exists.
    async fn update_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<(), CredentialError>;
}
