//! Core game logic: gravity board, player ids, run scanning and the game
//! state machine for N columns, M rows, P players and K in a row.

mod board;
mod config;
mod player;
pub mod scan;
mod state;
mod status;

pub use board::Board;
pub use config::{
    GameConfig, DEFAULT_COLUMNS, DEFAULT_PLAYER_COUNT, DEFAULT_ROWS, DEFAULT_WINNING_COUNT,
};
pub use player::PlayerId;
pub use scan::{Direction, LeadTracker, Line};
pub use state::{Game, GameState, MoveOutcome};
pub use status::GameStatus;
