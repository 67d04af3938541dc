//! Rules configuration.
//!
//! The standard game is a 9×9 board with 10 walls per player. Every bound
//! the engine checks (move targets, wall anchors, start cells, goal rows) is
//! derived from `board_size`, so smaller boards work for testing and
//! variants.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Smallest board with a distinct start row, goal row and interior.
pub const MIN_BOARD_SIZE: u8 = 3;
/// Largest supported board.
pub const MAX_BOARD_SIZE: u8 = 25;
/// Largest supported per-player wall supply.
pub const MAX_WALLS_PER_PLAYER: u8 = 64;

/// Board size and wall supply for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Squares per side.
    #[serde(default = "default_board_size")]
    pub board_size: u8,

    /// Walls each player starts with.
    #[serde(default = "default_walls_per_player")]
    pub walls_per_player: u8,
}

fn default_board_size() -> u8 {
    9
}

fn default_walls_per_player() -> u8 {
    10
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            walls_per_player: default_walls_per_player(),
        }
    }
}

impl RulesConfig {
    /// Standard rules with a different board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: u8) -> Self {
        self.board_size = board_size;
        self
    }

    /// Standard rules with a different wall supply.
    #[must_use]
    pub fn with_walls_per_player(mut self, walls: u8) -> Self {
        self.walls_per_player = walls;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                    self.board_size
                ),
            });
        }
        if self.walls_per_player > MAX_WALLS_PER_PLAYER {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "walls_per_player must be at most {MAX_WALLS_PER_PLAYER}, got {}",
                    self.walls_per_player
                ),
            });
        }
        Ok(())
    }
}
