//! Reachability queries over the board graph.
//!
//! Used to validate a candidate wall: the wall is tried on a clone of the
//! board and both players must still reach their goal rows.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::trace;

use super::graph::Board;
use crate::core::Cell;

/// Is any cell on `target_row` reachable from `from` through open edges?
pub fn reaches_row(board: &Board, from: Cell, target_row: i32) -> bool {
    distance_to_row(board, from, target_row).is_some()
}

/// Fewest steps from `from` to any cell on `target_row`, ignoring pawns.
///
/// `None` if the row is unreachable or `from` is off the board.
pub fn distance_to_row(board: &Board, from: Cell, target_row: i32) -> Option<u32> {
    if !board.contains(from) {
        return None;
    }

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back((from, 0u32));

    while let Some((cell, steps)) = queue.pop_front() {
        if cell.y == target_row {
            trace!(%from, target_row, steps, "goal row reachable");
            return Some(steps);
        }
        for next in board.neighbors(cell) {
            if visited.insert(next) {
                queue.push_back((next, steps + 1));
            }
        }
    }

    trace!(%from, target_row, explored = visited.len(), "goal row unreachable");
    None
}
