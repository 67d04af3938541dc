//! Action requests and their outcomes.
//!
//! A move request names its target either relatively (`"up"`, `Direction`)
//! or absolutely (a `Cell`, a coordinate pair, a two-element slice).
//! Conversions that can fail only do so for malformed input, and those
//! failures are `EngineError`s, not rejections.
//!
//! Every accepted request produces a `Transition`; every refused one a
//! `Rejection`. `ActionOutcome` carries one or the other.

use serde::{Deserialize, Serialize};

use crate::board::Wall;
use crate::core::{Cell, Direction, EngineError, RejectReason, Rejection, Seat};

/// Where a move should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTarget {
    /// One step in a direction relative to the mover's heading.
    Relative(Direction),
    /// A specific cell.
    Absolute(Cell),
}

impl From<Direction> for MoveTarget {
    fn from(direction: Direction) -> Self {
        MoveTarget::Relative(direction)
    }
}

impl From<Cell> for MoveTarget {
    fn from(cell: Cell) -> Self {
        MoveTarget::Absolute(cell)
    }
}

impl From<(i32, i32)> for MoveTarget {
    fn from(coords: (i32, i32)) -> Self {
        MoveTarget::Absolute(coords.into())
    }
}

impl TryFrom<&str> for MoveTarget {
    type Error = EngineError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse().map(MoveTarget::Relative)
    }
}

impl TryFrom<&[i32]> for MoveTarget {
    type Error = EngineError;

    fn try_from(coords: &[i32]) -> Result<Self, Self::Error> {
        match *coords {
            [x, y] => Ok(MoveTarget::Absolute(Cell::new(x, y))),
            _ => Err(EngineError::MalformedCoordinates { arity: coords.len() }),
        }
    }
}

/// A committed state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A pawn moved. `jump` is set when it landed on the opponent and the
    /// mover keeps the turn.
    Moved {
        seat: Seat,
        from: Cell,
        to: Cell,
        jump: bool,
    },
    /// A wall went up and the turn passed.
    WallPlaced {
        seat: Seat,
        wall: Wall,
        walls_remaining: u8,
    },
}

impl Transition {
    /// Seat that acted.
    #[must_use]
    pub fn seat(&self) -> Seat {
        match *self {
            Transition::Moved { seat, .. } | Transition::WallPlaced { seat, .. } => seat,
        }
    }
}

/// Result of a well-formed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Applied(Transition),
    Rejected(Rejection),
}

impl ActionOutcome {
    pub(crate) fn reject(reason: RejectReason, name: &str) -> Self {
        ActionOutcome::Rejected(Rejection::new(reason, name))
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied(_))
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            ActionOutcome::Applied(t) => Some(t),
            ActionOutcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ActionOutcome::Applied(_) => None,
            ActionOutcome::Rejected(r) => Some(r),
        }
    }

    /// Reason code, if rejected.
    #[must_use]
    pub fn reason(&self) -> Option<RejectReason> {
        self.rejection().map(|r| r.reason)
    }
}
