//! Walls: an anchor corner plus an orientation.
//!
//! The anchor `(x, y)` names the corner shared by the four cells
//! `(x, y)`, `(x + 1, y)`, `(x, y - 1)` and `(x + 1, y - 1)`. A wall runs
//! two cells long through that corner and cuts exactly two edges:
//!
//! ```text
//!   vertical               horizontal
//!   (x,y)   | (x+1,y)      (x,y)     (x+1,y)
//!           |              ---------------
//!   (x,y-1) | (x+1,y-1)    (x,y-1)   (x+1,y-1)
//! ```

use serde::{Deserialize, Serialize};

use super::graph::Edge;
use crate::core::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    #[must_use]
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// A wall placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl Wall {
    #[must_use]
    pub const fn new(anchor: Cell, orientation: Orientation) -> Self {
        Self { anchor, orientation }
    }

    /// Is the anchor inside the placeable interior of a `board_size` board?
    ///
    /// Anchors in the last column or the first row would put the wall off
    /// the board: `x ∈ [0, n-2]`, `y ∈ [1, n-1]`.
    #[must_use]
    pub fn in_bounds(&self, board_size: i32) -> bool {
        let Cell { x, y } = self.anchor;
        (0..board_size - 1).contains(&x) && (1..board_size).contains(&y)
    }

    /// The two edges this wall cuts.
    #[must_use]
    pub fn edges(&self) -> [Edge; 2] {
        let a = self.anchor;
        match self.orientation {
            Orientation::Vertical => [
                Edge::new(a, a.offset(1, 0)),
                Edge::new(a.offset(0, -1), a.offset(1, -1)),
            ],
            Orientation::Horizontal => [
                Edge::new(a, a.offset(0, -1)),
                Edge::new(a.offset(1, 0), a.offset(1, -1)),
            ],
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.orientation.is_vertical() { "vertical" } else { "horizontal" };
        write!(f, "{} wall at {}", kind, self.anchor)
    }
}
