//! Domain service for the game catalog.

use thiserror::Error;

use crate::db::Game;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Game with id {0} already exists")]
    DuplicateGame(i64),

    #[error("Game with id {0} not found")]
    GameNotFound(i64),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Adds a game under a caller-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateGame`] if the id is already used.
    async fn create_game(&self, id: i64, name: &str, price: f64) -> Result<(), CatalogError>;

    /// # Errors
    ///
    /// Returns [`CatalogError::GameNotFound`] if no game has that id.
    async fn delete_game(&self, id: i64) -> Result<(), CatalogError>;

    /// Lists every game ordered by id.
    async fn list_games(&self) -> Result<Vec<Game>, CatalogError>;
}
