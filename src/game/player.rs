use std::fmt;

/// Zero-based player index. Displayed one-based (`Player1`, `Player2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub const fn index(self) -> usize {
        self.0
    }

    /// The player who moves after this one in a game of `player_count`
    pub fn next(self, player_count: usize) -> PlayerId {
        if self.0 + 1 >= player_count {
            PlayerId(0)
        } else {
            PlayerId(self.0 + 1)
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player{}", self.0 + 1)
    }
}
