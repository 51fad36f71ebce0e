//! JSON-lines protocol for driving the game from another front end.

use food_finder_core::{Direction, Evaluation, GameSnapshot, MoveOutcome};
use serde::{Deserialize, Serialize};

/// Messages read from stdin, one per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Move the player one cell
    Move { direction: Direction },

    /// Let the greedy policy take a step
    GreedyMove,

    /// Start a new game
    Reset,

    /// Request the full game state
    GetState,

    /// Request the win/loss evaluation
    Evaluate,
}

/// Messages written to stdout, one per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Full game state
    State { state: GameSnapshot },

    /// Result of a move request
    MoveResult {
        outcome: MoveOutcome,
        state: GameSnapshot,
    },

    /// Win/loss evaluation
    Evaluation { evaluation: Evaluation },

    /// Error occurred
    Error { message: String },
}
