pub mod game;
pub mod user;
