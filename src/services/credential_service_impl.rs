//! `SeaORM` implementation of the `CredentialService` trait.

use crate::db::{Store, is_unique_violation};
use crate::services::credential_service::{CredentialError, CredentialService};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct SeaOrmCredentialService {
    store: Store,
}

impl SeaOrmCredentialService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialService for SeaOrmCredentialService {
    async fn create_user(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        match self.store.create_user(username, password).await {
            Ok(_) => {
                info!("User successfully added to the database: {username}");
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => {
                warn!("Duplicate username: {username}");
                Err(CredentialError::DuplicateUser(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn check_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, CredentialError> {
        let is_valid = self
            .store
            .verify_user_password(username, password)
            .await?
            .ok_or_else(|| CredentialError::UserNotFound(username.to_string()))?;

        if !is_valid {
            info!("Password check failed for user: {username}");
        }

        Ok(is_valid)
    }

    async fn update_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<(), CredentialError> {
        let updated = self
            .store
            .update_user_password(username, new_password)
            .await?;

        if !updated {
            return Err(CredentialError::UserNotFound(username.to_string()));
        }

        info!("Password updated for user: {username}");
        Ok(())
    }
}
