//! Grid graph of open adjacencies.
//!
//! Nodes are the `n × n` cells, fixed at construction. Edges join
//! orthogonally adjacent cells (no diagonals, no wraparound). Walls only ever
//! remove edges; nothing adds them back.
//!
//! The edge set is an `im` persistent set, so cloning a board for a
//! tentative wall check or a snapshot is O(1).

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, EngineError};

/// An undirected edge, stored with its endpoints in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: Cell,
    b: Cell,
}

impl Edge {
    /// Create an edge between two cells, in either order.
    #[must_use]
    pub fn new(a: Cell, b: Cell) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Both endpoints, lowest first.
    #[must_use]
    pub fn endpoints(self) -> (Cell, Cell) {
        (self.a, self.b)
    }

    /// The endpoint opposite `cell`, if `cell` is on this edge.
    #[must_use]
    pub fn other(self, cell: Cell) -> Option<Cell> {
        if cell == self.a {
            Some(self.b)
        } else if cell == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// The board graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i32,
    edges: ImHashSet<Edge>,
}

impl Board {
    /// A fully open board with `size × size` cells.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let size = i32::from(size);
        let mut edges = ImHashSet::new();

        for y in 0..size {
            for x in 0..size {
                let cell = Cell::new(x, y);
                if x + 1 < size {
                    edges.insert(Edge::new(cell, cell.offset(1, 0)));
                }
                if y + 1 < size {
                    edges.insert(Edge::new(cell, cell.offset(0, 1)));
                }
            }
        }

        Self { size, edges }
    }

    /// Squares per side.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Is `cell` on the board?
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    /// Is there an open edge between `a` and `b`?
    #[must_use]
    pub fn has_edge(&self, a: Cell, b: Cell) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Remove the edge between `a` and `b`.
    ///
    /// Fails with `InvalidEdge` if there is no such edge.
    pub fn remove_edge(&mut self, a: Cell, b: Cell) -> Result<(), EngineError> {
        match self.edges.remove(&Edge::new(a, b)) {
            Some(_) => Ok(()),
            None => Err(EngineError::InvalidEdge { a, b }),
        }
    }

    /// Cells joined to `cell` by an open edge.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        [(0, 1), (0, -1), (-1, 0), (1, 0)]
            .into_iter()
            .map(|(dx, dy)| cell.offset(dx, dy))
            .filter(|&next| self.has_edge(cell, next))
            .collect()
    }

    /// Iterate over open edges (unordered).
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// The open edge set.
    #[must_use]
    pub fn edge_set(&self) -> &ImHashSet<Edge> {
        &self.edges
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
