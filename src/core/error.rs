//! Error types.
//!
//! Two tiers:
//! - `EngineError`: misuse of the API (bad direction token, wrong-arity
//!   coordinates, one player in both seats, removing a missing edge).
//!   Returned as `Err` and expected to propagate.
//! - `Rejection`: an ordinary rule violation during play. Carried as a value
//!   inside `ActionOutcome::Rejected`; the session is left untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::Cell;

/// Hard failures signalling incorrect use of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("edge {a} - {b} does not exist on the board")]
    InvalidEdge { a: Cell, b: Cell },
    #[error("you can't play against yourself, {name}")]
    SamePlayer { name: String },
    #[error("invalid direction {token:?}: must be one of up, down, left, right")]
    InvalidDirection { token: String },
    #[error("invalid coordinates: expected 2 integers, got {arity}")]
    MalformedCoordinates { arity: usize },
    #[error("invalid rules configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<std::convert::Infallible> for EngineError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Why a move or wall request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The player is not seated in this session.
    NotInGame,
    /// The other player holds the turn.
    NotYourTurn,
    /// Target cell lies outside the board.
    OffBoard,
    /// Target cell is the player's current cell.
    SameCell,
    /// No open edge between the current cell and the target.
    NotConnected,
    /// No walls left in the player's supply.
    OutOfWalls,
    /// Wall anchor outside the placeable interior.
    WallOutOfBounds,
    /// A wall already sits on this anchor.
    WallOccupied,
    /// The wall would overlap a segment of an existing wall.
    WallOverlaps,
    /// The player is mid-jump and must move again.
    Jumping,
    /// The wall would cut a player off from their goal row.
    PathBlocked,
}

/// A refused request: reason code plus a message addressed to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub reason: RejectReason,
    pub message: String,
}

impl Rejection {
    /// Build the rejection for `reason`, addressed to `name`.
    #[must_use]
    pub fn new(reason: RejectReason, name: &str) -> Self {
        let message = match reason {
            RejectReason::NotInGame => format!("{name}, you are currently not playing a game"),
            RejectReason::NotYourTurn => format!("{name}, it's not your turn"),
            RejectReason::OffBoard => format!("{name}, you cannot move off the board"),
            RejectReason::SameCell => format!("{name}, you're already standing on that tile"),
            RejectReason::NotConnected => format!("{name}, those tiles are not (directly) connected"),
            RejectReason::OutOfWalls => format!("{name}, you are out of walls"),
            RejectReason::WallOutOfBounds => format!("{name}, you cannot place a wall outside of the board"),
            RejectReason::WallOccupied => format!("{name}, there's already a wall there"),
            RejectReason::WallOverlaps => format!("{name}, that wall would overlap an existing wall"),
            RejectReason::Jumping => {
                format!("{name}, you can't place a wall since you're jumping over the opponent")
            }
            RejectReason::PathBlocked => format!(
                "{name}, placing a wall there is not allowed, because you would block your opponent and/or yourself"
            ),
        };
        Self { reason, message }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
