//! Text rendering of the board and player feedback.

use food_finder_core::{GameSnapshot, GameStatus, MoveOutcome, Position};

const PLAYER: &str = "P";
const FOOD: &str = "F";
const EMPTY: &str = ".";

/// The `Steps: n/MAX` counter
pub fn header(snapshot: &GameSnapshot) -> String {
    format!("Steps: {}/{}", snapshot.steps, snapshot.max_steps)
}

/// The grid, one row per line
pub fn grid(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();

    for y in 0..snapshot.grid_size {
        let row: Vec<&str> = (0..snapshot.grid_size)
            .map(|x| {
                let cell = Position::new(x, y);
                // Player drawn over food on a win
                if cell == snapshot.player {
                    PLAYER
                } else if cell == snapshot.food {
                    FOOD
                } else {
                    EMPTY
                }
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }

    out
}

/// Step counter followed by the grid
pub fn board(snapshot: &GameSnapshot) -> String {
    format!("{}\n{}", header(snapshot), grid(snapshot))
}

/// Greedy check message for a manual move
pub fn move_feedback(outcome: &MoveOutcome) -> Option<&'static str> {
    match outcome {
        MoveOutcome::Moved {
            was_greedy: true, ..
        } => Some("That was a greedy move."),
        MoveOutcome::Moved { .. } => Some("That was not a greedy move."),
        MoveOutcome::Ignored { .. } => None,
    }
}

/// End-of-game messages; empty while the game is running
pub fn status_lines(snapshot: &GameSnapshot) -> Vec<String> {
    match snapshot.status {
        GameStatus::Won => {
            let path = if snapshot.all_greedy == Some(true) {
                "You followed a greedy path all the way!"
            } else {
                "You reached the goal but deviated from greedy path."
            };
            vec![
                format!("You reached the food in {} steps.", snapshot.steps),
                path.to_string(),
            ]
        }
        GameStatus::Lost => vec!["Out of moves! Try again.".to_string()],
        GameStatus::Ongoing => Vec::new(),
    }
}
