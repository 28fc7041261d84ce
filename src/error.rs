use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors reported by the game engine. A rejected call never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("invalid column {column} (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("invalid player index {player} (game has {players} players)")]
    InvalidPlayer { player: usize, players: usize },

    #[error("it's not {player}'s turn, {expected} is to move")]
    NotYourTurn { player: PlayerId, expected: PlayerId },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game hasn't started yet")]
    GameNotStarted,

    #[error("the game is not over yet")]
    GameNotOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Game(#[from] GameError),
}
