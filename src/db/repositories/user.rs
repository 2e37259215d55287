use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::entities::users;

/// Salt length in raw bytes; stored as twice as many hex characters.
pub const SALT_BYTES: usize = 16;

/// User data returned from repository (without salt or password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Stored secrets for a user, both hex encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub salt: String,
    pub password_hash: String,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn find_model(&self, username: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
    }

    /// Insert a new user with a freshly generated salt.
    ///
    /// Uniqueness is left to the `username` constraint, so a duplicate comes
    /// back as the store's unique-violation error rather than a pre-check.
    pub async fn create(&self, username: &str, password: &str) -> Result<User, DbErr> {
        let salt = generate_salt();
        let password_hash = hash_password(password, &salt);
        let now = chrono::Utc::now().to_rfc3339();

        let active = users::ActiveModel {
            username: Set(username.to_string()),
            salt: Set(salt),
            password_hash: Set(password_hash),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active.insert(&self.conn).await?;
        Ok(User::from(model))
    }

    /// Get user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        Ok(self.find_model(username).await?.map(User::from))
    }

    /// Get the stored salt and hash for a user
    pub async fn get_credentials(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredentials>, DbErr> {
        Ok(self.find_model(username).await?.map(|u| StoredCredentials {
            salt: u.salt,
            password_hash: u.password_hash,
        }))
    }

    /// Verify password for a user.
    ///
    /// Returns `None` when the user does not exist.
    pub async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<bool>, DbErr> {
        let Some(credentials) = self.get_credentials(username).await? else {
            return Ok(None);
        };

        Ok(Some(verify_password(
            password,
            &credentials.salt,
            &credentials.password_hash,
        )))
    }

    /// Rehash with the user's existing salt and overwrite the stored hash.
    ///
    /// Returns `false` when the user does not exist.
    pub async fn update_password(&self, username: &str, new_password: &str) -> Result<bool, DbErr> {
        let Some(user) = self.find_model(username).await? else {
            return Ok(false);
        };

        let new_hash = hash_password(new_password, &user.salt);
        let now = chrono::Utc::now().to_rfc3339();

        let mut active: users::ActiveModel = user.into();
        active.password_hash = Set(new_hash);
        active.updated_at = Set(now);
        active.update(&self.conn).await?;

        Ok(true)
    }
}

/// Generate a random salt (32 character hex string)
#[must_use]
pub fn generate_salt() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; SALT_BYTES] = rng.random();
    hex::encode(bytes)
}

/// SHA-256 over `password || salt`, hex encoded (64 characters).
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute the hash and compare it against `expected_hash` in constant time.
#[must_use]
pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let computed = hash_password(password, salt);
    computed.as_bytes().ct_eq(expected_hash.as_bytes()).into()
}
