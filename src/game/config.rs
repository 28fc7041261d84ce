use crate::error::GameError;

pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_WINNING_COUNT: usize = 4;
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Board dimensions and rules of a game. The default is standard Connect Four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    /// Pieces in a row needed to win
    pub winning_count: usize,
    pub player_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            winning_count: DEFAULT_WINNING_COUNT,
            player_count: DEFAULT_PLAYER_COUNT,
        }
    }
}

impl GameConfig {
    /// Build a validated configuration.
    pub fn new(
        columns: usize,
        rows: usize,
        winning_count: usize,
        player_count: usize,
    ) -> Result<Self, GameError> {
        let config = GameConfig {
            columns,
            rows,
            winning_count,
            player_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.columns < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "columns must be >= 2 (got {})",
                self.columns
            )));
        }
        if self.rows < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "rows must be >= 2 (got {})",
                self.rows
            )));
        }
        if self.winning_count < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "winning_count must be >= 2 (got {})",
                self.winning_count
            )));
        }
        if self.winning_count > self.columns.min(self.rows) {
            return Err(GameError::InvalidConfiguration(format!(
                "winning_count {} does not fit a {}x{} board",
                self.winning_count, self.columns, self.rows
            )));
        }
        if self.player_count < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "player_count must be >= 2 (got {})",
                self.player_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_connect_four() {
        let config = GameConfig::default();
        assert_eq!((config.columns, config.rows), (7, 6));
        assert_eq!(config.winning_count, 4);
        assert_eq!(config.player_count, 2);
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_minimal_config_is_valid() {
        assert!(GameConfig::new(2, 2, 2, 2).is_ok());
    }

    #[test]
    fn test_rejects_small_board() {
        assert!(matches!(
            GameConfig::new(1, 6, 2, 2),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(7, 1, 2, 2),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_winning_count_out_of_range() {
        assert!(GameConfig::new(7, 6, 1, 2).is_err());
        assert!(GameConfig::new(7, 6, 7, 2).is_err());
        assert!(GameConfig::new(3, 8, 4, 2).is_err());
        assert!(GameConfig::new(7, 6, 6, 2).is_ok());
    }

    #[test]
    fn test_rejects_single_player() {
        assert!(GameConfig::new(7, 6, 4, 1).is_err());
        assert!(GameConfig::new(7, 6, 4, 0).is_err());
    }
}
