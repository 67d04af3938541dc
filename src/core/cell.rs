//! Board coordinates and relative directions.
//!
//! ## Cell
//!
//! A square on the board, addressed by `(x, y)`. Coordinates are signed so
//! that off-board requests such as `(-1, 0)` can be represented and rejected
//! as ordinary rule violations instead of failing to parse.
//!
//! ## Direction and Heading
//!
//! Players face each other across the board, so "up" means a different
//! absolute step for each of them. A `Heading` is fixed per seat when the
//! session is created and turns a relative `Direction` into a target cell.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;

/// A board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell offset by `(dx, dy)`. May lie off the board.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub fn distance(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A move direction relative to the player's own side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step for a player facing "forward" (towards increasing `y`).
    const fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection { token: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Which way a player faces. Computed once per seat.
///
/// The starting player faces towards increasing `y`; the other player sits
/// across the board and sees every relative direction mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Started the game at row 0.
    Forward,
    /// Started the game at the far row.
    Mirrored,
}

impl Heading {
    /// Sign applied to every relative step.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Heading::Forward => 1,
            Heading::Mirrored => -1,
        }
    }

    /// The cell reached by stepping once in `direction` from `from`.
    #[must_use]
    pub const fn step(self, from: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.unit();
        from.offset(dx * self.sign(), dy * self.sign())
    }
}
