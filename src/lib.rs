//! # quoridor-engine
//!
//! Rules engine for Quoridor: two players race their pawns across a 9×9
//! board while placing walls to slow each other down. A wall is only legal
//! if both players can still reach their goal rows afterwards.
//!
//! ## Design
//!
//! - **Graph board**: cells are nodes, open adjacencies are edges. Walls
//!   remove edges and never put them back.
//!
//! - **Seats, not back-references**: per-player state lives in the session,
//!   keyed by `Seat`. The opponent of a seat is `seat.opponent()`.
//!
//! - **Two error tiers**: rule violations are `Rejection` values; API misuse
//!   is an `EngineError`.
//!
//! - **Rendering is someone else's job**: displays subscribe as `Observer`s
//!   and receive a `Snapshot` after each committed transition.
//!
//! ## Modules
//!
//! - `core`: cells, directions, seats, players, configuration, errors
//! - `board`: board graph, walls, connectivity oracle
//! - `rules`: session, requests/outcomes, observers
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::{Cell, Player, Seat, Session};
//!
//! let pieter = Player::new("Pieter");
//! let rune = Player::new("Rune");
//! let mut game = Session::new(&pieter, &rune)?;
//!
//! assert!(game.request_move(&pieter, "up")?.is_applied());
//! assert!(game.request_move(&rune, (4, 7))?.is_applied());
//! assert!(game.request_wall(&pieter, 4, 3, true)?.is_applied());
//!
//! assert_eq!(game.player(Seat::First).position(), Cell::new(4, 1));
//! assert_eq!(game.player(Seat::First).walls_remaining(), 9);
//! # Ok::<(), quoridor_engine::EngineError>(())
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Cell, Direction, EngineError, Heading, Player, PlayerId, PlayerState, RejectReason, Rejection,
    RulesConfig, Seat, SeatMap,
};

pub use crate::board::{distance_to_row, reaches_row, Board, Edge, Orientation, Wall};

pub use crate::rules::{ActionOutcome, MoveTarget, Observer, Session, Snapshot, Transition};
