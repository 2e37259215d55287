use super::games::ensure_game_id;
use crate::config::Config;
use crate::state::build_cheapshark_client;

pub async fn cmd_lookup_game(config: &Config, id: i64) -> anyhow::Result<()> {
    ensure_game_id(id)?;
    let client = build_cheapshark_client(&config.cheapshark)?;

    match client.get_game_info(id).await? {
        Some(game) => {
            println!("{}", game.name);
            println!("  ID: {}", game.id);
            println!("  Cheapest price ever: ${}", game.price);
        }
        None => println!("No game found with id {id}"),
    }

    Ok(())
}
