//! A single play session: owns the game and turns commands into feedback.

use food_finder_core::{Direction, GameState, MoveOutcome};
use thiserror::Error;

use crate::protocol::{ClientMessage, ServerMessage};
use crate::render;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("The game is over. Press `r` to play again.")]
    GameOver,
}

/// A player command, bound to a key by the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Greedy,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Keys:
  arrows or w / a / s / d   move one cell
  g                         make the greedy move
  r                         start a new game
  h                         show this help
  q or Esc                  leave";

/// Owns the game for the length of a session.
pub struct Session {
    pub game: GameState,
}

impl Session {
    pub fn new(game: GameState) -> Self {
        Self { game }
    }

    /// Run a command, returning the feedback lines to show.
    ///
    /// Moves are refused once the game is over; only restart is accepted.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, SessionError> {
        match command {
            Command::Move(_) | Command::Greedy if self.game.is_finished() => {
                Err(SessionError::GameOver)
            }
            Command::Move(direction) => {
                let outcome = self.game.move_player(direction);
                Ok(render::move_feedback(&outcome)
                    .map(str::to_string)
                    .into_iter()
                    .collect())
            }
            Command::Greedy => {
                let outcome = self.game.greedy_move();
                Ok(match outcome {
                    MoveOutcome::Moved { direction, .. } => {
                        vec![format!("The greedy agent moved {}.", direction)]
                    }
                    MoveOutcome::Ignored { .. } => Vec::new(),
                })
            }
            Command::Reset => {
                self.game.reset();
                Ok(vec!["New game! Find the food.".to_string()])
            }
            Command::Help => Ok(vec![HELP.to_string()]),
            Command::Quit => Ok(vec!["Bye!".to_string()]),
        }
    }

    /// Answer one JSON protocol request.
    pub fn handle_message(&mut self, msg: ClientMessage) -> ServerMessage {
        match msg {
            ClientMessage::Move { direction } => {
                let outcome = self.game.move_player(direction);
                self.move_result(outcome)
            }
            ClientMessage::GreedyMove => {
                let outcome = self.game.greedy_move();
                self.move_result(outcome)
            }
            ClientMessage::Reset => {
                self.game.reset();
                ServerMessage::State {
                    state: self.game.snapshot(),
                }
            }
            ClientMessage::GetState => ServerMessage::State {
                state: self.game.snapshot(),
            },
            ClientMessage::Evaluate => ServerMessage::Evaluation {
                evaluation: self.game.evaluate(),
            },
        }
    }

    fn move_result(&self, outcome: MoveOutcome) -> ServerMessage {
        ServerMessage::MoveResult {
            outcome,
            state: self.game.snapshot(),
        }
    }
}
