use crate::config::Config;
use crate::db::Store;
use crate::services::{CatalogService, SeaOrmCatalogService};

pub(crate) fn ensure_game_id(id: i64) -> anyhow::Result<()> {
    anyhow::ensure!(id > 0, "Invalid game ID: {id}. ID must be a positive integer");
    Ok(())
}

async fn catalog(config: &Config) -> anyhow::Result<SeaOrmCatalogService> {
    let store = Store::new(&config.general.database_path).await?;
    Ok(SeaOrmCatalogService::new(store))
}

pub async fn cmd_games_list(config: &Config) -> anyhow::Result<()> {
    let games = catalog(config).await?.list_games().await?;

    if games.is_empty() {
        println!("No games in the catalog.");
        println!("Add one with: game-cart games add <id> <name> <price>");
        return Ok(());
    }

    println!("{:<10} {:<40} {:>10}", "ID", "Name", "Price");
    println!("{:-<62}", "");
    for game in &games {
        println!("{:<10} {:<40} {:>10.2}", game.id, game.name, game.price);
    }

    Ok(())
}

pub async fn cmd_games_add(config: &Config, id: i64, name: &str, price: f64) -> anyhow::Result<()> {
    ensure_game_id(id)?;
    if !price.is_finite() || price < 0.0 {
        anyhow::bail!("Price must be a non-negative number");
    }

    catalog(config).await?.create_game(id, name, price).await?;
    println!("✓ Added {name} (id {id})");
    Ok(())
}

pub async fn cmd_games_remove(config: &Config, id: i64) -> anyhow::Result<()> {
    ensure_game_id(id)?;
    catalog(config).await?.delete_game(id).await?;
    println!("✓ Removed game {id}");
    Ok(())
}
