//! Match setup and validation.
//!
//! The engine assumes its inputs are sane; this is where they are checked.

use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_PLAYERS, MAX_SIDE, MIN_PLAYERS, MIN_SIDE};
use crate::error::ConfigError;

/// Who makes the moves for a seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves arrive through [`crate::game::Match::submit_move`].
    Human,
    /// Moves are chosen by the rule-table selector.
    Agent,
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "h" => Ok(PlayerKind::Human),
            "agent" | "a" | "cpu" => Ok(PlayerKind::Agent),
            _ => Err(ConfigError::PlayerKind(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Agent => write!(f, "agent"),
        }
    }
}

/// A validated match setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub rows: usize,
    pub cols: usize,
    pub players: Vec<PlayerKind>,
}

impl MatchConfig {
    pub fn new(rows: usize, cols: usize, players: Vec<PlayerKind>) -> Result<Self, ConfigError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&rows) {
            return Err(ConfigError::Rows {
                got: rows,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&cols) {
            return Err(ConfigError::Cols {
                got: cols,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(ConfigError::PlayerCount {
                got: players.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        Ok(Self {
            rows,
            cols,
            players,
        })
    }
}
