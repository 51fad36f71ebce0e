//! Game configuration.

use crate::game::GameError;
use crate::grid::{GRID_SIZE, MAX_GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Moves allowed before the game is lost
pub const MAX_STEPS: u32 = 15;

/// Board size and step cap for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: i32,
    /// Number of moves before the game is lost
    pub max_steps: u32,
}

impl GameConfig {
    /// Create a validated configuration
    pub fn new(grid_size: i32, max_steps: u32) -> Result<Self, GameError> {
        let config = Self {
            grid_size,
            max_steps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the grid size is within `1..=MAX_GRID_SIZE` and at least one move is allowed
    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(GameError::InvalidGridSize(self.grid_size));
        }
        if self.max_steps < 1 {
            return Err(GameError::InvalidMaxSteps(self.max_steps));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            max_steps: MAX_STEPS,
        }
    }
}
