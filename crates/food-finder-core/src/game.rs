//! Core game state machine.
//!
//! This module contains the main `GameState` struct and all game logic:
//! player moves, the greedy check, the greedy auto-move, win/loss
//! evaluation and reset.

use crate::actions::{GameAction, GameEvent};
use crate::agent::greedy_direction;
use crate::config::GameConfig;
use crate::grid::{Direction, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised at the engine boundary.
///
/// Reaching the step cap is not an error; it is the `Lost` status.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("Grid size must be between 1 and 100, got {0}")]
    InvalidGridSize(i32),

    #[error("Step limit must be at least 1, got {0}")]
    InvalidMaxSteps(u32),

    #[error("Position {0} is outside the grid")]
    OutOfBounds(Position),
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted
    Ongoing,
    /// The player is on the food
    Won,
    /// The step cap was reached without finding the food
    Lost,
}

impl GameStatus {
    /// Won and Lost are both final until the next reset
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A step was taken and classified
    Moved {
        direction: Direction,
        was_greedy: bool,
        status: GameStatus,
    },
    /// The game was already over; nothing changed
    Ignored { status: GameStatus },
}

impl MoveOutcome {
    pub fn was_greedy(&self) -> bool {
        matches!(self, MoveOutcome::Moved { was_greedy: true, .. })
    }

    pub fn status(&self) -> GameStatus {
        match self {
            MoveOutcome::Moved { status, .. } | MoveOutcome::Ignored { status } => *status,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, MoveOutcome::Ignored { .. })
    }
}

/// Summary returned by [`GameState::evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: GameStatus,
    /// Whether every move was greedy; only set once the food is reached
    pub all_greedy: Option<bool>,
}

/// Read-only view of the game for rendering and serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player: Position,
    pub food: Position,
    pub steps: u32,
    pub max_steps: u32,
    pub grid_size: i32,
    pub greedy_history: Vec<bool>,
    pub status: GameStatus,
    pub all_greedy: Option<bool>,
}

/// The complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    /// Current player location
    player_pos: Position,
    /// Target location, fixed until the next reset
    food_pos: Position,
    /// Moves taken so far, including moves blocked by the edge
    steps: u32,
    /// One entry per move: did it strictly reduce the distance to the food
    greedy_history: Vec<bool>,
    /// Source for food placement
    rng: StdRng,
}

impl GameState {
    /// Create a new game with randomly placed food
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game with the default 10x10 grid and 15-step cap
    pub fn new_standard() -> Self {
        let config = GameConfig::default();
        let mut rng = StdRng::from_entropy();
        let food_pos = Position::random(config.grid_size, &mut rng);
        Self::from_parts(config, food_pos, rng)
    }

    /// Create a game whose food placement is reproducible from `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create a game drawing food positions from the given source
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        let food_pos = Position::random(config.grid_size, &mut rng);
        Ok(Self::from_parts(config, food_pos, rng))
    }

    /// Create a game with the food at a known position.
    ///
    /// Later resets place the food randomly as usual.
    pub fn with_food(config: GameConfig, food: Position) -> Result<Self, GameError> {
        config.validate()?;
        if !food.in_bounds(config.grid_size) {
            return Err(GameError::OutOfBounds(food));
        }
        Ok(Self::from_parts(config, food, StdRng::from_entropy()))
    }

    fn from_parts(config: GameConfig, food_pos: Position, rng: StdRng) -> Self {
        debug!(%food_pos, grid_size = config.grid_size, "new game");
        Self {
            config,
            player_pos: Position::ORIGIN,
            food_pos,
            steps: 0,
            greedy_history: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_pos(&self) -> Position {
        self.player_pos
    }

    pub fn food_pos(&self) -> Position {
        self.food_pos
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn greedy_history(&self) -> &[bool] {
        &self.greedy_history
    }

    /// Moves left before the game is lost
    pub fn remaining_steps(&self) -> u32 {
        self.config.max_steps.saturating_sub(self.steps)
    }

    /// Manhattan distance from the player to the food
    pub fn distance_to_food(&self) -> u32 {
        self.player_pos.distance(&self.food_pos)
    }

    /// Current status; a win takes precedence over the step cap
    pub fn status(&self) -> GameStatus {
        if self.player_pos == self.food_pos {
            GameStatus::Won
        } else if self.steps >= self.config.max_steps {
            GameStatus::Lost
        } else {
            GameStatus::Ongoing
        }
    }

    /// Check if the game is over
    pub fn is_finished(&self) -> bool {
        self.status().is_terminal()
    }

    /// Status plus the "followed the greedy path" flag on a win
    pub fn evaluate(&self) -> Evaluation {
        let status = self.status();
        let all_greedy = (status == GameStatus::Won).then(|| self.all_greedy());
        Evaluation { status, all_greedy }
    }

    fn all_greedy(&self) -> bool {
        self.greedy_history.iter().all(|&greedy| greedy)
    }

    /// Move the player one cell.
    ///
    /// A move into the edge of the grid leaves the player in place but still
    /// uses up a step, and is classified as not greedy.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_finished() {
            debug!(%direction, "move ignored, game is over");
            return MoveOutcome::Ignored {
                status: self.status(),
            };
        }

        let old_dist = self.distance_to_food();
        let candidate = self
            .player_pos
            .step_clamped(direction, self.config.grid_size);
        let was_greedy = candidate.distance(&self.food_pos) < old_dist;

        let status = self.commit_step(candidate, was_greedy);
        MoveOutcome::Moved {
            direction,
            was_greedy,
            status,
        }
    }

    /// Take one step along the greedy policy (x axis first, then y).
    ///
    /// Always recorded as greedy.
    pub fn greedy_move(&mut self) -> MoveOutcome {
        if self.is_finished() {
            debug!("greedy move ignored, game is over");
            return MoveOutcome::Ignored {
                status: self.status(),
            };
        }

        // Not on the food, since the game is not won
        let Some(direction) = greedy_direction(self.player_pos, self.food_pos) else {
            return MoveOutcome::Ignored {
                status: self.status(),
            };
        };

        let next = self.player_pos.offset(direction);
        let status = self.commit_step(next, true);
        MoveOutcome::Moved {
            direction,
            was_greedy: true,
            status,
        }
    }

    fn commit_step(&mut self, next: Position, was_greedy: bool) -> GameStatus {
        debug!(from = %self.player_pos, to = %next, was_greedy, "step");

        self.player_pos = next;
        self.steps += 1;
        self.greedy_history.push(was_greedy);

        let status = self.status();
        match status {
            GameStatus::Won => info!(
                steps = self.steps,
                all_greedy = self.all_greedy(),
                "food reached"
            ),
            GameStatus::Lost => info!(steps = self.steps, "out of moves"),
            GameStatus::Ongoing => {}
        }
        status
    }

    /// Start a new game: player back at the origin, food somewhere new
    pub fn reset(&mut self) {
        self.player_pos = Position::ORIGIN;
        self.food_pos = Position::random(self.config.grid_size, &mut self.rng);
        self.steps = 0;
        self.greedy_history.clear();
        info!(food_pos = %self.food_pos, "game reset");
    }

    /// Get all currently valid actions
    pub fn valid_actions(&self) -> Vec<GameAction> {
        let mut actions = Vec::new();

        if !self.is_finished() {
            actions.extend(Direction::ALL.into_iter().map(GameAction::Move));
            actions.push(GameAction::GreedyMove);
        }

        // Can always start over
        actions.push(GameAction::Reset);
        actions
    }

    /// Apply an action to the game state
    pub fn apply_action(&mut self, action: GameAction) -> Vec<GameEvent> {
        let from = self.player_pos;

        let outcome = match action {
            GameAction::Move(direction) => self.move_player(direction),
            GameAction::GreedyMove => self.greedy_move(),
            GameAction::Reset => {
                self.reset();
                return vec![GameEvent::GameReset {
                    food: self.food_pos,
                }];
            }
        };

        let MoveOutcome::Moved {
            was_greedy, status, ..
        } = outcome
        else {
            return vec![GameEvent::MoveIgnored];
        };

        let mut events = vec![GameEvent::Moved {
            from,
            to: self.player_pos,
            was_greedy,
        }];

        match status {
            GameStatus::Won => events.push(GameEvent::FoodReached {
                steps: self.steps,
                all_greedy: self.all_greedy(),
            }),
            GameStatus::Lost => events.push(GameEvent::OutOfMoves { steps: self.steps }),
            GameStatus::Ongoing => {}
        }

        events
    }

    /// Snapshot of everything a front end needs to draw the game
    pub fn snapshot(&self) -> GameSnapshot {
        let Evaluation { status, all_greedy } = self.evaluate();
        GameSnapshot {
            player: self.player_pos,
            food: self.food_pos,
            steps: self.steps,
            max_steps: self.config.max_steps,
            grid_size: self.config.grid_size,
            greedy_history: self.greedy_history.clone(),
            status,
            all_greedy,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_standard()
    }
}
