//! Game session: the single owner of board, walls and seat state.
//!
//! ## Turn state machine
//!
//! Exactly one seat holds the turn. A move flips it, unless the mover landed
//! on the opponent's cell: then the mover is marked as jumping and keeps the
//! turn for one more move. A wall always flips it. There is no finished
//! state; hosts compare `PlayerState::at_goal` themselves.
//!
//! ## Validation
//!
//! Requests are checked in a fixed order and the first failing check is
//! reported. A rejected request leaves every piece of state untouched and
//! notifies no observer.
//!
//! Moves: seated, turn, on board, not the current cell, open edge.
//!
//! Walls: seated, turn, walls left, anchor in bounds, anchor free, no
//! overlap with an existing wall, not jumping, and finally both players
//! still reach their goal rows once the two edges are gone.

use im::{HashSet as ImHashSet, Vector};
use tracing::{debug, info};

use super::action::{ActionOutcome, MoveTarget, Transition};
use super::observer::{Observer, Snapshot};
use crate::board::{reaches_row, Board, Orientation, Wall};
use crate::core::{
    Cell, EngineError, Player, PlayerId, PlayerState, RejectReason, RulesConfig, Seat, SeatMap,
};

/// A two-player game in progress.
pub struct Session {
    config: RulesConfig,
    board: Board,
    seats: SeatMap<PlayerId>,
    players: SeatMap<PlayerState>,
    walls: Vector<Wall>,
    anchors: ImHashSet<Cell>,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Seat `first` and `second` under the standard rules.
    ///
    /// `first` starts at the bottom row and moves first.
    pub fn new(first: &Player, second: &Player) -> Result<Self, EngineError> {
        Self::with_config(first, second, RulesConfig::default())
    }

    /// Seat two players under a custom rules configuration.
    ///
    /// Fails with `SamePlayer` if both arguments are the same player.
    pub fn with_config(
        first: &Player,
        second: &Player,
        config: RulesConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if first.id() == second.id() {
            return Err(EngineError::SamePlayer {
                name: first.name().to_string(),
            });
        }

        let size = i32::from(config.board_size);
        let seated = move |seat: Seat| match seat {
            Seat::First => first,
            Seat::Second => second,
        };
        let seats = SeatMap::new(|seat| seated(seat).id());
        let players = SeatMap::new(|seat| {
            PlayerState::seated(seat, seated(seat).name(), size, config.walls_per_player)
        });

        info!(
            first = first.name(),
            second = second.name(),
            board_size = config.board_size,
            walls_per_player = config.walls_per_player,
            "session created"
        );

        Ok(Self {
            config,
            board: Board::new(config.board_size),
            seats,
            players,
            walls: Vector::new(),
            anchors: ImHashSet::new(),
            observers: Vec::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State of the player on `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat]
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<PlayerState> {
        &self.players
    }

    /// Walls in placement order.
    #[must_use]
    pub fn walls(&self) -> &Vector<Wall> {
        &self.walls
    }

    /// Is there a wall anchored at `anchor`?
    #[must_use]
    pub fn has_wall_at(&self, anchor: Cell) -> bool {
        self.anchors.contains(&anchor)
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        if self.players[Seat::First].turn {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// Seat occupied by `player`, if they play in this session.
    #[must_use]
    pub fn seat_of(&self, player: &Player) -> Option<Seat> {
        self.seats.iter().find(|(_, &id)| id == player.id()).map(|(seat, _)| seat)
    }

    /// A read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_size: self.board.size(),
            players: self.players.clone(),
            active: self.active_seat(),
            walls: self.walls.clone(),
            edges: self.board.edge_set().clone(),
        }
    }

    /// Register an observer, notified after every committed transition.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Requests ===

    /// Ask to move `player`'s pawn.
    ///
    /// `target` may be a `Direction`, a direction token such as `"up"`, a
    /// `Cell`, an `(x, y)` pair or a two-element slice. Malformed targets are
    /// hard errors; rule violations come back as `ActionOutcome::Rejected`.
    pub fn request_move<T>(&mut self, player: &Player, target: T) -> Result<ActionOutcome, EngineError>
    where
        T: TryInto<MoveTarget>,
        EngineError: From<T::Error>,
    {
        let target = target.try_into()?;

        let Some(seat) = self.seat_of(player) else {
            return Ok(self.rejected(None, player.name(), RejectReason::NotInGame));
        };
        let state = &self.players[seat];
        if !state.turn {
            return Ok(self.rejected(Some(seat), player.name(), RejectReason::NotYourTurn));
        }

        let from = state.position;
        let to = match target {
            MoveTarget::Relative(direction) => state.heading.step(from, direction),
            MoveTarget::Absolute(cell) => cell,
        };

        let reason = if !self.board.contains(to) {
            Some(RejectReason::OffBoard)
        } else if to == from {
            Some(RejectReason::SameCell)
        } else if !self.board.has_edge(from, to) {
            Some(RejectReason::NotConnected)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Ok(self.rejected(Some(seat), player.name(), reason));
        }

        Ok(ActionOutcome::Applied(self.apply_move(seat, to)))
    }

    /// Ask to place a wall for `player` at anchor `(x, y)`.
    pub fn request_wall(
        &mut self,
        player: &Player,
        x: i32,
        y: i32,
        vertical: bool,
    ) -> Result<ActionOutcome, EngineError> {
        let Some(seat) = self.seat_of(player) else {
            return Ok(self.rejected(None, player.name(), RejectReason::NotInGame));
        };
        let wall = Wall::new(Cell::new(x, y), Orientation::from_vertical(vertical));

        if let Some(reason) = self.wall_violation(seat, &wall) {
            return Ok(self.rejected(Some(seat), player.name(), reason));
        }

        let mut tentative = self.board.clone();
        for edge in wall.edges() {
            let (a, b) = edge.endpoints();
            tentative.remove_edge(a, b)?;
        }
        let all_reach_goal = self
            .players
            .iter()
            .all(|(_, p)| reaches_row(&tentative, p.position, p.goal_row));
        if !all_reach_goal {
            return Ok(self.rejected(Some(seat), player.name(), RejectReason::PathBlocked));
        }

        self.board = tentative;
        self.anchors.insert(wall.anchor);
        self.walls.push_back(wall);
        self.players[seat].walls_remaining -= 1;

        Ok(ActionOutcome::Applied(self.apply_wall(seat, wall)))
    }

    // === Transitions ===

    /// First cheap rule a wall breaks, before any path search.
    fn wall_violation(&self, seat: Seat, wall: &Wall) -> Option<RejectReason> {
        let state = &self.players[seat];
        if !state.turn {
            Some(RejectReason::NotYourTurn)
        } else if state.walls_remaining == 0 {
            Some(RejectReason::OutOfWalls)
        } else if !wall.in_bounds(self.board.size()) {
            Some(RejectReason::WallOutOfBounds)
        } else if self.anchors.contains(&wall.anchor) {
            Some(RejectReason::WallOccupied)
        } else if wall.edges().iter().any(|e| !self.board.edge_set().contains(e)) {
            Some(RejectReason::WallOverlaps)
        } else if state.jumping {
            Some(RejectReason::Jumping)
        } else {
            None
        }
    }

    fn apply_move(&mut self, seat: Seat, to: Cell) -> Transition {
        let opponent = seat.opponent();
        let from = self.players[seat].position;
        let jump = self.players[opponent].position == to;

        let mover = &mut self.players[seat];
        mover.position = to;
        mover.jumping = jump;
        if !jump {
            self.pass_turn(seat);
        }

        debug!(%seat, %from, %to, jump, "move applied");
        let transition = Transition::Moved { seat, from, to, jump };
        self.notify(&transition);
        transition
    }

    fn apply_wall(&mut self, seat: Seat, wall: Wall) -> Transition {
        self.pass_turn(seat);

        let walls_remaining = self.players[seat].walls_remaining;
        debug!(%seat, anchor = %wall.anchor, vertical = wall.orientation.is_vertical(), walls_remaining, "wall placed");
        let transition = Transition::WallPlaced {
            seat,
            wall,
            walls_remaining,
        };
        self.notify(&transition);
        transition
    }

    fn pass_turn(&mut self, seat: Seat) {
        self.players[seat].turn = false;
        self.players[seat.opponent()].turn = true;
    }

    fn notify(&mut self, transition: &Transition) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_transition(transition, &snapshot);
        }
    }

    fn rejected(&self, seat: Option<Seat>, name: &str, reason: RejectReason) -> ActionOutcome {
        debug!(?seat, player = name, ?reason, "request rejected");
        ActionOutcome::reject(reason, name)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("players", &self.players)
            .field("walls", &self.walls)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bar = "_".repeat(15);
        writeln!(f, "{bar}Current game status{bar}")?;
        writeln!(f, "walls placed: {}", self.walls.len())?;
        for (_, player) in self.players.iter() {
            writeln!(f, "{player}")?;
        }
        write!(f, "{}", "_".repeat(49))
    }
}
