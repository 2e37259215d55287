//! CLI module - Command-line interface for Game Cart
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Game Cart - game catalog and price lookup backend
#[derive(Parser)]
#[command(name = "game-cart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web API server
    #[command(alias = "daemon", alias = "web")]
    Serve,

    /// Search cheapshark.com for games matching a keyword
    #[command(alias = "s")]
    Search {
        /// Search keyword
        #[arg(required = true)]
        keyword: Vec<String>,
    },

    /// Look up a single game on cheapshark.com by its game id
    #[command(alias = "info")]
    Lookup {
        /// cheapshark game id
        id: i64,
    },

    /// Manage the local game catalog
    Games {
        #[command(subcommand)]
        command: GameCommands,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

#[derive(Subcommand)]
pub enum GameCommands {
    /// List all games in the catalog
    #[command(alias = "ls")]
    List,
    /// Add a game to the catalog
    Add {
        /// Game id
        id: i64,
        /// Game name
        name: String,
        /// Game price
        price: f64,
    },
    /// Remove a game from the catalog
    #[command(alias = "rm")]
    Remove {
        /// Game id
        id: i64,
    },
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_keyword_words() {
        let cli = Cli::try_parse_from(["game-cart", "search", "half", "life"]).unwrap();
        match cli.command {
            Some(Commands::Search { keyword }) => assert_eq!(keyword.join(" "), "half life"),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parses_games_add() {
        let cli = Cli::try_parse_from(["game-cart", "games", "add", "1", "Forza Horizon 5", "59.99"])
            .unwrap();
        match cli.command {
            Some(Commands::Games {
                command: GameCommands::Add { id, name, price },
            }) => {
                assert_eq!(id, 1);
                assert_eq!(name, "Forza Horizon 5");
                assert!((price - 59.99).abs() < f64::EPSILON);
            }
            _ => panic!("expected games add command"),
        }
    }

    #[test]
    fn serve_has_daemon_alias() {
        let cli = Cli::try_parse_from(["game-cart", "daemon"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }
}
