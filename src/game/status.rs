use std::fmt;

use super::PlayerId;

/// Caller-facing summary of a game, one variant per informational state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    /// One player holds the longest run
    Leading {
        turn: PlayerId,
        leader: PlayerId,
        count: usize,
    },
    /// Several players share the longest run
    Tied { turn: PlayerId, count: usize },
    Won { winner: PlayerId },
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::NotStarted => {
                write!(f, "The game hasn't started yet. Anyone can take the first turn.")
            }
            GameStatus::Leading {
                turn,
                leader,
                count,
            } => write!(
                f,
                "{}'s turn. {} is leading with {} items in a row.",
                turn, leader, count
            ),
            GameStatus::Tied { turn, count } => write!(
                f,
                "{}'s turn. Multiple players are leading with {} items in a row.",
                turn, count
            ),
            GameStatus::Won { winner } => write!(f, "Game Over. {} is the winner!", winner),
        }
    }
}
