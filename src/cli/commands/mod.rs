mod games;
mod lookup;
mod search;

pub use games::{cmd_games_add, cmd_games_list, cmd_games_remove};
pub use lookup::cmd_lookup_game;
pub use search::cmd_search_games;
