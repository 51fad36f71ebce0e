//! Food Finder - a grid game engine with a greedy-move check
//!
//! The player walks a token from the top-left corner of a square grid toward
//! randomly placed food. Every move is classified as greedy (it strictly
//! reduced the Manhattan distance to the food) or not, and the game ends when
//! the food is reached or the step cap runs out.
//!
//! # Architecture
//!
//! The engine holds no global state: a front end owns a [`GameState`] for the
//! length of a session and calls into it once per user action. It can be
//! compiled to:
//! - Native Rust for the terminal front end
//! - WebAssembly for a browser front end
//!
//! # Modules
//!
//! - [`grid`]: Positions, directions and Manhattan distance
//! - [`config`]: Grid size and step cap
//! - [`game`]: Game state machine
//! - [`actions`]: Actions and the events they produce
//! - [`agent`]: The greedy policy and automated players

pub mod actions;
pub mod agent;
pub mod config;
pub mod game;
pub mod grid;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use agent::{greedy_direction, Agent, AgentStrategy};
pub use config::{GameConfig, MAX_STEPS};
pub use game::{Evaluation, GameError, GameSnapshot, GameState, GameStatus, MoveOutcome};
pub use grid::{distance, Direction, Position, GRID_SIZE, MAX_GRID_SIZE};
