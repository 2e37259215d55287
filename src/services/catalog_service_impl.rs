//! `SeaORM` implementation of the `CatalogService` trait.

use crate::db::{Game, Store, is_unique_violation};
use crate::services::catalog_service::{CatalogError, CatalogService};
use async_trait::async_trait;
use tracing::{error, info};

pub struct SeaOrmCatalogService {
    store: Store,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn create_game(&self, id: i64, name: &str, price: f64) -> Result<(), CatalogError> {
        let game = Game {
            id,
            name: name.to_string(),
            price,
        };

        match self.store.add_game(&game).await {
            Ok(()) => Ok(()),
            Err(e) if is_unique_violation(&e) => {
                error!("Integrity error with following entry: id {id} name {name} price {price}");
                Err(CatalogError::DuplicateGame(id))
            }
            Err(e) => {
                error!("Database error: {e}");
                Err(e.into())
            }
        }
    }

    async fn delete_game(&self, id: i64) -> Result<(), CatalogError> {
        if !self.store.remove_game(id).await? {
            info!("Game with id {id} not found");
            return Err(CatalogError::GameNotFound(id));
        }

        info!("Game with id {id} deleted successfully");
        Ok(())
    }

    async fn list_games(&self) -> Result<Vec<Game>, CatalogError> {
        let games = self.store.list_games().await?;
        info!("Games retrieved successfully");
        Ok(games)
    }
}
