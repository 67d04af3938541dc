//! Core engine types: cells, directions, seats, players, configuration, errors.
//!
//! These are the building blocks shared by the board graph and the session.

pub mod cell;
pub mod config;
pub mod error;
pub mod player;

pub use cell::{Cell, Direction, Heading};
pub use config::RulesConfig;
pub use error::{EngineError, RejectReason, Rejection};
pub use player::{Player, PlayerId, PlayerState, Seat, SeatMap};
