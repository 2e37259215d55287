use crate::config::Config;
use crate::state::build_cheapshark_client;

pub async fn cmd_search_games(config: &Config, keyword: &str) -> anyhow::Result<()> {
    println!("Searching for: {keyword}");

    let client = build_cheapshark_client(&config.cheapshark)?;
    let results = client.search_for_games(keyword).await?;

    if results.is_empty() {
        println!("No games found matching '{keyword}'");
        return Ok(());
    }

    println!();
    println!("Search Results:");
    println!("{:-<60}", "");

    for game in &results {
        println!("• {} | ID: {} | Cheapest: ${}", game.name, game.id, game.price);
    }

    println!();
    println!("For details: game-cart lookup <id>");

    Ok(())
}
