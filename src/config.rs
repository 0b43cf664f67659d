//! Game setup: board size, player count, turn policy and player colors.

use crate::board::TurnPolicy;
use crate::constants::{DEFAULT_COLS, DEFAULT_PLAYERS, DEFAULT_ROWS, MAX_DIMENSION, MAX_PLAYERS};
use crate::error::ConfigError;
use crate::palette::rainbow_hex_colors;

/// Reject empty boards, no players, and sizes above the limits.
pub fn check_size(rows: usize, cols: usize, n_players: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 || n_players == 0 {
        return Err(ConfigError::InvalidConfiguration {
            rows,
            cols,
            n_players,
        });
    }
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION || n_players > MAX_PLAYERS {
        return Err(ConfigError::TooLarge {
            rows,
            cols,
            n_players,
            max_dimension: MAX_DIMENSION,
            max_players: MAX_PLAYERS,
        });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub n_players: usize,
    pub policy: TurnPolicy,
    /// One display color per player. Not used by the rules.
    pub colors: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_PLAYERS)
    }
}

impl GameConfig {
    /// Lenient policy, rainbow colors.
    ///
    /// No colors are generated above [`MAX_PLAYERS`]; `validate` rejects
    /// such a config before the colors are looked at.
    pub fn new(rows: usize, cols: usize, n_players: usize) -> Self {
        let colors = if n_players <= MAX_PLAYERS {
            rainbow_hex_colors(n_players)
        } else {
            Vec::new()
        };
        Self {
            rows,
            cols,
            n_players,
            policy: TurnPolicy::default(),
            colors,
        }
    }

    pub fn with_policy(mut self, policy: TurnPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(self.rows, self.cols, self.n_players)?;
        if self.colors.len() != self.n_players {
            return Err(ConfigError::ColorCount {
                expected: self.n_players,
                got: self.colors.len(),
            });
        }
        Ok(())
    }
}
