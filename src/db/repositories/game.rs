use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entities::{games, prelude::*};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
        }
    }
}

pub struct GameRepository {
    conn: DatabaseConnection,
}

impl GameRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a game under its caller-supplied id.
    ///
    /// An existing id surfaces as the store's primary-key violation.
    pub async fn add(&self, game: &Game) -> Result<(), DbErr> {
        let active_model = games::ActiveModel {
            id: Set(game.id),
            name: Set(game.name.clone()),
            price: Set(game.price),
        };

        Games::insert(active_model)
            .exec_without_returning(&self.conn)
            .await?;

        info!("Game added: {} ({})", game.name, game.id);
        Ok(())
    }

    /// Returns `false` when no game had that id.
    pub async fn remove(&self, id: i64) -> Result<bool, DbErr> {
        let result = Games::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_all(&self) -> Result<Vec<Game>, DbErr> {
        let rows = Games::find()
            .order_by_asc(games::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Game::from).collect())
    }
}
