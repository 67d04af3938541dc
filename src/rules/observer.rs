//! Read-only state snapshots and the observer interface.
//!
//! The rules never draw anything. A display (graphical, textual, or a test
//! recorder) subscribes to a session and is handed the committed
//! `Transition` plus a `Snapshot` once per applied action. Rejected
//! requests notify nobody.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::action::Transition;
use crate::board::{Edge, Wall};
use crate::core::{PlayerState, Seat, SeatMap};

/// Everything a display needs to render the board.
///
/// Collections are `im` persistent structures shared with the session, so
/// taking a snapshot does not copy the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board_size: i32,
    pub players: SeatMap<PlayerState>,
    /// Seat holding the turn.
    pub active: Seat,
    /// Walls in placement order.
    pub walls: Vector<Wall>,
    /// Open edges.
    pub edges: ImHashSet<Edge>,
}

impl Snapshot {
    /// The player standing on `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat]
    }
}

/// Receives every committed transition.
pub trait Observer {
    fn on_transition(&mut self, transition: &Transition, snapshot: &Snapshot);
}

impl<F> Observer for F
where
    F: FnMut(&Transition, &Snapshot),
{
    fn on_transition(&mut self, transition: &Transition, snapshot: &Snapshot) {
        self(transition, snapshot);
    }
}
