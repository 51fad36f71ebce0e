//! Automated players for Food Finder.
//!
//! This module provides two strategies:
//! - Greedy: Step toward the food along the x axis, then the y axis
//! - Random: Wander in a uniformly random direction

use crate::actions::GameAction;
use crate::game::GameState;
use crate::grid::{Direction, Position};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// The greedy policy: one step that strictly shortens the distance to `to`.
///
/// Closes the horizontal gap first. Returns `None` when already there.
pub fn greedy_direction(from: Position, to: Position) -> Option<Direction> {
    if from.x < to.x {
        Some(Direction::Right)
    } else if from.x > to.x {
        Some(Direction::Left)
    } else if from.y < to.y {
        Some(Direction::Down)
    } else if from.y > to.y {
        Some(Direction::Up)
    } else {
        None
    }
}

/// How an agent picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStrategy {
    Greedy,
    Random,
}

/// An automated player that can decide on actions
pub struct Agent {
    pub strategy: AgentStrategy,
    rng: StdRng,
}

impl Agent {
    pub fn new(strategy: AgentStrategy) -> Self {
        Self {
            strategy,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(strategy: AgentStrategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose the next action, or `None` once the game is over
    pub fn choose_action(&mut self, game: &GameState) -> Option<GameAction> {
        if game.is_finished() {
            return None;
        }

        match self.strategy {
            AgentStrategy::Greedy => Some(GameAction::GreedyMove),
            AgentStrategy::Random => Direction::ALL
                .choose(&mut self.rng)
                .copied()
                .map(GameAction::Move),
        }
    }
}
