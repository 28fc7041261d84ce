use super::scan::{self, LeadTracker, Line};
use super::{Board, GameConfig, GameStatus, PlayerId};
use crate::error::GameError;

/// Lifecycle of a game. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    InProgress,
    Finished,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub column: usize,
    /// Row where the piece landed (0 is the bottom)
    pub row: usize,
    pub state: GameState,
}

impl MoveOutcome {
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Finished
    }
}

/// A single game: grid, turn order and leading-sequence tracking.
///
/// Every accepted move rescans the whole board in a fixed order (verticals,
/// horizontals, ascending then descending diagonals), updating the lead
/// tracker as it goes and stopping at the first run of `winning_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    board: Board,
    lines: Vec<Line>,
    state: GameState,
    current_player: PlayerId,
    lead: LeadTracker,
    winner: Option<PlayerId>,
}

impl Game {
    /// Create a game with an empty board
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: GameConfig) -> Self {
        Game {
            config,
            board: Board::new(config.columns, config.rows),
            lines: scan::scan_lines(config.columns, config.rows),
            state: GameState::NotStarted,
            current_player: PlayerId(0),
            lead: LeadTracker::new(PlayerId(0)),
            winner: None,
        }
    }

    pub fn with_dimensions(
        columns: usize,
        rows: usize,
        winning_count: usize,
        player_count: usize,
    ) -> Result<Self, GameError> {
        Self::new(GameConfig::new(columns, rows, winning_count, player_count)?)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<PlayerId> {
        self.board.get(column, row)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Drop `player`'s piece into `column`.
    ///
    /// The first move may be played by anyone and fixes the turn order from
    /// there on. A rejected move leaves the game untouched.
    pub fn apply_move(
        &mut self,
        column: usize,
        player: PlayerId,
    ) -> Result<MoveOutcome, GameError> {
        self.check_move(column, player)?;

        let row = self
            .board
            .drop_piece(column, player)
            .ok_or(GameError::ColumnFull(column))?;

        if self.state == GameState::NotStarted {
            log::info!("{} started the game.", player);
            self.state = GameState::InProgress;
            self.current_player = player;
            self.lead = LeadTracker::new(player);
        } else {
            log::debug!("{} is taking their turn.", player);
        }

        match scan::scan(
            &self.board,
            &self.lines,
            self.config.winning_count,
            &mut self.lead,
        ) {
            Some(winner) => {
                log::info!("{} wins with {} in a row.", winner, self.config.winning_count);
                self.winner = Some(winner);
                self.state = GameState::Finished;
            }
            None => {
                self.current_player = player.next(self.config.player_count);
            }
        }

        Ok(MoveOutcome {
            column,
            row,
            state: self.state,
        })
    }

    fn check_move(&self, column: usize, player: PlayerId) -> Result<(), GameError> {
        if self.state == GameState::Finished {
            return Err(GameError::GameAlreadyOver);
        }
        if column >= self.config.columns {
            return Err(GameError::InvalidColumn {
                column,
                columns: self.config.columns,
            });
        }
        if player.index() >= self.config.player_count {
            return Err(GameError::InvalidPlayer {
                player: player.index(),
                players: self.config.player_count,
            });
        }
        if self.state == GameState::InProgress && player != self.current_player {
            return Err(GameError::NotYourTurn {
                player,
                expected: self.current_player,
            });
        }
        if self.board.is_column_full(column) {
            return Err(GameError::ColumnFull(column));
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        match self.state {
            GameState::NotStarted => GameStatus::NotStarted,
            GameState::InProgress if self.lead.tied => GameStatus::Tied {
                turn: self.current_player,
                count: self.lead.count,
            },
            GameState::InProgress => GameStatus::Leading {
                turn: self.current_player,
                leader: self.lead.player,
                count: self.lead.count,
            },
            GameState::Finished => GameStatus::Won {
                // Always set together with `Finished`
                winner: self.winner.unwrap_or(self.lead.player),
            },
        }
    }

    pub fn winning_player(&self) -> Result<PlayerId, GameError> {
        match (self.state, self.winner) {
            (GameState::Finished, Some(winner)) => Ok(winner),
            _ => Err(GameError::GameNotOver),
        }
    }

    pub fn leading_player(&self) -> Result<PlayerId, GameError> {
        self.require_started()?;
        Ok(self.lead.player)
    }

    pub fn leading_count(&self) -> Result<usize, GameError> {
        self.require_started()?;
        Ok(self.lead.count)
    }

    /// Whether another player matched the leader's run length
    pub fn lead_match(&self) -> Result<bool, GameError> {
        self.require_started()?;
        Ok(self.lead.tied)
    }

    /// Player to move, or the winner once the game is finished
    pub fn current_player(&self) -> Result<PlayerId, GameError> {
        self.require_started()?;
        Ok(self.current_player)
    }

    fn require_started(&self) -> Result<(), GameError> {
        if self.state == GameState::NotStarted {
            return Err(GameError::GameNotStarted);
        }
        Ok(())
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.state == GameState::Finished {
            return Vec::new();
        }
        (0..self.config.columns)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// The board is full and nobody won. The game stays in progress.
    pub fn is_draw(&self) -> bool {
        self.state != GameState::Finished && self.board.is_full()
    }

    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }
}

impl Default for Game {
    /// Standard Connect Four: 7 columns, 6 rows, 4 in a row, 2 players
    fn default() -> Self {
        Self::empty(GameConfig::default())
    }
}
