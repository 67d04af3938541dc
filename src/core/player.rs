//! Players, seats and per-seat turn state.
//!
//! ## Player
//!
//! The identity a host application hands to a session. Its lifetime is
//! managed outside the engine; clones share the same `PlayerId`, which is how
//! a session detects one player being seated twice.
//!
//! ## Seat and SeatMap
//!
//! A session has exactly two seats. `Seat` is the handle every piece of
//! per-player state is keyed by, so the player/opponent/session relationship
//! needs no back-references: the opponent of a seat is `seat.opponent()`.
//!
//! ## PlayerState
//!
//! Everything the rules track for one seat: position, wall supply, turn and
//! jump flags, heading and goal row.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use super::cell::{Cell, Heading};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    fn next() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named player.
///
/// ```
/// use quoridor_engine::core::Player;
///
/// let rune = Player::new("Rune");
/// let same = rune.clone();
/// let other = Player::new("Rune");
///
/// assert_eq!(rune.id(), same.id());
/// assert_ne!(rune.id(), other.id());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    /// Create a player with a fresh identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::next(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One of the two seats at the board.
///
/// `First` is the player who starts, at row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats, in turn order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The seat across the board.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.index() + 1)
    }
}

/// Per-seat storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Transform every entry, keeping the seat association.
    pub fn map<U>(&self, mut f: impl FnMut(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Rule state for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub(crate) name: String,
    pub(crate) position: Cell,
    pub(crate) walls_remaining: u8,
    pub(crate) turn: bool,
    pub(crate) jumping: bool,
    pub(crate) heading: Heading,
    pub(crate) goal_row: i32,
}

impl PlayerState {
    /// Initial state for `seat` on a board of `board_size` squares per side.
    pub(crate) fn seated(seat: Seat, name: &str, board_size: i32, walls: u8) -> Self {
        let far_row = board_size - 1;
        let column = board_size / 2;
        let (row, heading, goal_row) = match seat {
            Seat::First => (0, Heading::Forward, far_row),
            Seat::Second => (far_row, Heading::Mirrored, 0),
        };

        Self {
            name: name.to_string(),
            position: Cell::new(column, row),
            walls_remaining: walls,
            turn: seat == Seat::First,
            jumping: false,
            heading,
            goal_row,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[must_use]
    pub fn walls_remaining(&self) -> u8 {
        self.walls_remaining
    }

    /// Does this seat hold the turn?
    #[must_use]
    pub fn has_turn(&self) -> bool {
        self.turn
    }

    /// Did the last move land on the opponent's cell?
    #[must_use]
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Did this seat start the game?
    #[must_use]
    pub fn started(&self) -> bool {
        self.heading == Heading::Forward
    }

    /// Row this seat is racing towards.
    #[must_use]
    pub fn goal_row(&self) -> i32 {
        self.goal_row
    }

    /// Is the player standing on their goal row?
    #[must_use]
    pub fn at_goal(&self) -> bool {
        self.position.y == self.goal_row
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: pos={}, turn={}, walls={}",
            self.name, self.position, self.turn, self.walls_remaining
        )
    }
}
