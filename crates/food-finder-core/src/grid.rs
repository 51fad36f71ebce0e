//! Square grid coordinates and movement.
//!
//! This module provides the coordinate types for the game board:
//! - `Position`: A cell on the grid, used for both the player and the food
//! - `Direction`: One of the four orthogonal moves
//!
//! Coordinates follow screen order: `x` grows to the right and `y` grows
//! downward, so `Up` decreases `y`.

use crate::game::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default side length of the square grid
pub const GRID_SIZE: i32 = 10;

/// Largest side length a game may be configured with
pub const MAX_GRID_SIZE: i32 = 100;

/// One of the four directions the player can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the controls are laid out
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (dx, dy) shift for one step in this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Lowercase name, as typed by the player
    pub const fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// Column (increases going right)
    pub x: i32,
    /// Row (increases going down)
    pub y: i32,
}

impl Position {
    /// Top-left corner, where every game starts
    pub const ORIGIN: Position = Position::new(0, 0);

    /// Create a new position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// A uniformly random cell of a `grid_size` x `grid_size` grid
    pub fn random<R: Rng + ?Sized>(grid_size: i32, rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..grid_size), rng.gen_range(0..grid_size))
    }

    /// Whether this position lies on a `grid_size` x `grid_size` grid
    pub fn in_bounds(&self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The neighboring cell in `direction`, ignoring grid bounds
    pub fn offset(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// One step in `direction`, staying put on an axis that would leave the grid
    pub fn step_clamped(&self, direction: Direction, grid_size: i32) -> Position {
        let next = self.offset(direction);
        Position::new(
            if (0..grid_size).contains(&next.x) { next.x } else { self.x },
            if (0..grid_size).contains(&next.y) { next.y } else { self.y },
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan distance between two positions
pub fn distance(a: Position, b: Position) -> u32 {
    a.distance(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(distance(a, b), 7);
        assert_eq!(distance(b, a), 7);
        assert_eq!(distance(b, b), 0);
        assert_eq!(distance(Position::new(9, 0), Position::new(0, 9)), 18);
    }

    #[test]
    fn test_direction_deltas() {
        let p = Position::new(5, 5);
        assert_eq!(p.offset(Direction::Up), Position::new(5, 4));
        assert_eq!(p.offset(Direction::Down), Position::new(5, 6));
        assert_eq!(p.offset(Direction::Left), Position::new(4, 5));
        assert_eq!(p.offset(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_step_clamped_at_edges() {
        assert_eq!(
            Position::ORIGIN.step_clamped(Direction::Left, GRID_SIZE),
            Position::ORIGIN
        );
        assert_eq!(
            Position::ORIGIN.step_clamped(Direction::Up, GRID_SIZE),
            Position::ORIGIN
        );
        let corner = Position::new(9, 9);
        assert_eq!(corner.step_clamped(Direction::Right, GRID_SIZE), corner);
        assert_eq!(corner.step_clamped(Direction::Down, GRID_SIZE), corner);
        assert_eq!(
            corner.step_clamped(Direction::Up, GRID_SIZE),
            Position::new(9, 8)
        );
    }

    #[test]
    fn test_in_bounds() {
        assert!(Position::ORIGIN.in_bounds(GRID_SIZE));
        assert!(Position::new(9, 9).in_bounds(GRID_SIZE));
        assert!(!Position::new(10, 0).in_bounds(GRID_SIZE));
        assert!(!Position::new(0, -1).in_bounds(GRID_SIZE));
    }

    #[test]
    fn test_random_stays_on_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(Position::random(GRID_SIZE, &mut rng).in_bounds(GRID_SIZE));
        }
        for _ in 0..10 {
            assert_eq!(Position::random(1, &mut rng), Position::ORIGIN);
        }
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!(" a ".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("s".parse::<Direction>().unwrap(), Direction::Down);
        assert!(matches!(
            "north".parse::<Direction>(),
            Err(GameError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_direction_display_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }
}
