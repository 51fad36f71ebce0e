//! Game actions that the player (or an agent) can take.
//!
//! This module defines all possible actions in the game and the events
//! that result from those actions.

use crate::grid::{Direction, Position};
use serde::{Deserialize, Serialize};

/// All possible actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Move one cell in a direction (clamped to the grid)
    Move(Direction),
    /// Let the greedy policy take one step toward the food
    GreedyMove,
    /// Start over with a fresh food position
    Reset,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player took a step (possibly bumping into a wall)
    Moved {
        from: Position,
        to: Position,
        was_greedy: bool,
    },

    /// A move was attempted after the game had ended
    MoveIgnored,

    /// The player landed on the food
    FoodReached { steps: u32, all_greedy: bool },

    /// The step cap was hit without reaching the food
    OutOfMoves { steps: u32 },

    /// A new game was started
    GameReset { food: Position },
}
