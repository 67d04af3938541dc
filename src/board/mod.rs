//! Board graph, walls and the connectivity oracle.
//!
//! - `graph`: the grid of open adjacencies, shrinking as walls go up
//! - `wall`: anchor + orientation, and the two edges a wall cuts
//! - `connectivity`: goal-row reachability used to vet candidate walls

pub mod connectivity;
pub mod graph;
pub mod wall;

pub use connectivity::{distance_to_row, reaches_row};
pub use graph::{Board, Edge};
pub use wall::{Orientation, Wall};
