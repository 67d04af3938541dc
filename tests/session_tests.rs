//! Session integration tests: movement, turn order and the jump rule.
//!
//! Everything here goes through the public request API, the same way a
//! host application drives a game.

use quoridor_engine::{
    ActionOutcome, Cell, Direction, EngineError, Player, RejectReason, RulesConfig, Seat, Session,
    Transition,
};

fn new_game() -> (Session, Player, Player) {
    let pieter = Player::new("Pieter");
    let rune = Player::new("Rune");
    let session = Session::new(&pieter, &rune).unwrap();
    (session, pieter, rune)
}

fn reason(outcome: ActionOutcome) -> Option<RejectReason> {
    outcome.reason()
}

// =============================================================================
// Setup
// =============================================================================

/// Seating assigns start cells, turn and walls.
#[test]
fn test_session_setup() {
    let (session, pieter, rune) = new_game();

    let first = session.player(Seat::First);
    assert_eq!(first.name(), "Pieter");
    assert_eq!(first.position(), Cell::new(4, 0));
    assert!(first.has_turn());
    assert!(first.started());
    assert_eq!(first.walls_remaining(), 10);

    let second = session.player(Seat::Second);
    assert_eq!(second.name(), "Rune");
    assert_eq!(second.position(), Cell::new(4, 8));
    assert!(!second.has_turn());
    assert!(!second.started());

    assert_eq!(session.seat_of(&pieter), Some(Seat::First));
    assert_eq!(session.seat_of(&rune), Some(Seat::Second));
}

/// One player object may not take both seats.
#[test]
fn test_cannot_play_against_yourself() {
    let rune = Player::new("Rune");
    let err = Session::new(&rune, &rune).unwrap_err();
    assert!(matches!(err, EngineError::SamePlayer { .. }));
    assert_eq!(err.to_string(), "you can't play against yourself, Rune");
}

/// Two players with the same name are still different players.
#[test]
fn test_same_name_different_players() {
    let a = Player::new("Rune");
    let b = Player::new("Rune");
    assert!(Session::new(&a, &b).is_ok());
}

/// Sessions are independent.
#[test]
fn test_sessions_do_not_share_state() {
    let a = Player::new("A");
    let b = Player::new("B");
    let mut one = Session::new(&a, &b).unwrap();
    let two = Session::new(&a, &b).unwrap();

    one.request_wall(&a, 4, 3, true).unwrap();

    assert_eq!(one.walls().len(), 1);
    assert!(two.walls().is_empty());
    assert_eq!(two.board().edge_count(), 144);
}

// =============================================================================
// Movement
// =============================================================================

/// A moves up, B moves to an absolute cell, turn alternates.
#[test]
fn test_basic_alternation() {
    let (mut session, pieter, rune) = new_game();

    assert!(session.request_move(&pieter, "up").unwrap().is_applied());
    assert_eq!(session.player(Seat::First).position(), Cell::new(4, 1));
    assert_eq!(session.active_seat(), Seat::Second);

    assert!(session.request_move(&rune, (4, 7)).unwrap().is_applied());
    assert_eq!(session.player(Seat::Second).position(), Cell::new(4, 7));
    assert_eq!(session.active_seat(), Seat::First);
}

/// The second player's directions are mirrored.
#[test]
fn test_mirrored_directions() {
    let (mut session, pieter, rune) = new_game();
    session.request_move(&pieter, Direction::Up).unwrap();

    // "up" for Rune heads towards row 0
    session.request_move(&rune, Direction::Up).unwrap();
    assert_eq!(session.player(Seat::Second).position(), Cell::new(4, 7));

    session.request_move(&pieter, Direction::Left).unwrap();
    assert_eq!(session.player(Seat::First).position(), Cell::new(3, 1));

    // "left" for Rune increases x
    session.request_move(&rune, Direction::Left).unwrap();
    assert_eq!(session.player(Seat::Second).position(), Cell::new(5, 7));
}

/// Moving out of turn is rejected with no state change.
#[test]
fn test_not_your_turn() {
    let (mut session, _, rune) = new_game();
    let before = session.snapshot();

    let outcome = session.request_move(&rune, "up").unwrap();
    assert_eq!(reason(outcome), Some(RejectReason::NotYourTurn));
    assert_eq!(session.snapshot(), before);
}

/// Off-board, same-cell and non-adjacent targets are rejected.
#[test]
fn test_invalid_targets_rejected() {
    let (mut session, pieter, _) = new_game();
    let before = session.snapshot();

    let cases: [(quoridor_engine::MoveTarget, RejectReason); 6] = [
        (Direction::Down.into(), RejectReason::OffBoard),
        ((9, 0).into(), RejectReason::OffBoard),
        ((4, -1).into(), RejectReason::OffBoard),
        ((4, 0).into(), RejectReason::SameCell),
        ((4, 2).into(), RejectReason::NotConnected),
        ((5, 1).into(), RejectReason::NotConnected),
    ];

    for (target, expected) in cases {
        let outcome = session.request_move(&pieter, target).unwrap();
        assert_eq!(reason(outcome), Some(expected), "target {:?}", target);
    }

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.active_seat(), Seat::First);
}

/// Turn is checked before the target.
#[test]
fn test_turn_checked_before_bounds() {
    let (mut session, _, rune) = new_game();
    let outcome = session.request_move(&rune, (20, 20)).unwrap();
    assert_eq!(reason(outcome), Some(RejectReason::NotYourTurn));
}

/// Walls block movement across them.
#[test]
fn test_wall_blocks_move() {
    let (mut session, pieter, rune) = new_game();

    session.request_wall(&pieter, 4, 1, false).unwrap();
    session.request_move(&rune, "up").unwrap();

    let outcome = session.request_move(&pieter, "up").unwrap();
    assert_eq!(reason(outcome), Some(RejectReason::NotConnected));
    assert_eq!(
        outcome_message(&mut session, &pieter),
        "Pieter, those tiles are not (directly) connected"
    );
}

fn outcome_message(session: &mut Session, player: &Player) -> String {
    session
        .request_move(player, "up")
        .unwrap()
        .rejection()
        .map(|r| r.message.clone())
        .unwrap_or_default()
}

/// Invalid direction tokens and wrong-arity coordinates fail hard.
#[test]
fn test_malformed_requests_fail_hard() {
    let (mut session, pieter, _) = new_game();

    let err = session.request_move(&pieter, "forward").unwrap_err();
    assert_eq!(err, EngineError::InvalidDirection { token: "forward".to_string() });

    let coords: &[i32] = &[1, 2, 3];
    let err = session.request_move(&pieter, coords).unwrap_err();
    assert_eq!(err, EngineError::MalformedCoordinates { arity: 3 });

    assert_eq!(session.player(Seat::First).position(), Cell::new(4, 0));
    assert_eq!(session.active_seat(), Seat::First);
}

// =============================================================================
// Jump rule
// =============================================================================

/// Walk Rune down column 4 to (4, 2) while Pieter burns turns on far walls.
fn pieter_at_4_1_rune_at_4_2() -> (Session, Player, Player) {
    let (mut session, pieter, rune) = new_game();

    session.request_move(&pieter, "up").unwrap();
    let far_walls = [(0, 5), (6, 5), (0, 7), (6, 7), (0, 3)];
    for (x, y) in far_walls {
        assert!(session.request_move(&rune, "up").unwrap().is_applied());
        assert!(session.request_wall(&pieter, x, y, false).unwrap().is_applied());
    }
    assert!(session.request_move(&rune, "up").unwrap().is_applied());

    assert_eq!(session.player(Seat::First).position(), Cell::new(4, 1));
    assert_eq!(session.player(Seat::Second).position(), Cell::new(4, 2));
    assert_eq!(session.active_seat(), Seat::First);
    (session, pieter, rune)
}

/// Landing on the opponent keeps the turn and sets the jump flag.
#[test]
fn test_jump_keeps_turn() {
    let (mut session, pieter, rune) = pieter_at_4_1_rune_at_4_2();

    let outcome = session.request_move(&pieter, "up").unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::Applied(Transition::Moved {
            seat: Seat::First,
            from: Cell::new(4, 1),
            to: Cell::new(4, 2),
            jump: true,
        })
    );
    assert!(session.player(Seat::First).is_jumping());
    assert_eq!(session.active_seat(), Seat::First);

    let outcome = session.request_move(&rune, "up").unwrap();
    assert_eq!(reason(outcome), Some(RejectReason::NotYourTurn));
}

/// A jumping player may not place a wall.
#[test]
fn test_jumping_blocks_wall() {
    let (mut session, pieter, _) = pieter_at_4_1_rune_at_4_2();
    session.request_move(&pieter, "up").unwrap();

    let outcome = session.request_wall(&pieter, 2, 7, true).unwrap();
    assert_eq!(reason(outcome), Some(RejectReason::Jumping));
    assert_eq!(session.player(Seat::First).walls_remaining(), 5);
    assert!(!session.has_wall_at(Cell::new(2, 7)));
}

/// Moving on after a jump clears the flag and passes the turn.
#[test]
fn test_jump_continuation() {
    let (mut session, pieter, rune) = pieter_at_4_1_rune_at_4_2();
    session.request_move(&pieter, "up").unwrap();

    let outcome = session.request_move(&pieter, "up").unwrap();
    assert!(outcome.is_applied());
    assert_eq!(session.player(Seat::First).position(), Cell::new(4, 3));
    assert!(!session.player(Seat::First).is_jumping());
    assert_eq!(session.active_seat(), Seat::Second);

    assert!(session.request_move(&rune, "down").unwrap().is_applied());
    assert_eq!(session.player(Seat::Second).position(), Cell::new(4, 3));
    assert!(session.player(Seat::Second).is_jumping());
}

// =============================================================================
// Full game
// =============================================================================

/// Replays a short scripted match, checking every outcome.
#[test]
fn test_scripted_match() {
    let (mut session, pieter, rune) = new_game();

    let mv = |s: &mut Session, p: &Player, t: &str| s.request_move(p, t).unwrap().reason();

    assert_eq!(mv(&mut session, &pieter, "up"), None);
    assert_eq!(session.request_move(&rune, (4, 7)).unwrap().reason(), None);
    assert_eq!(mv(&mut session, &rune, "down"), Some(RejectReason::NotYourTurn));
    assert_eq!(mv(&mut session, &pieter, "right"), None);
    assert_eq!(mv(&mut session, &rune, "down"), None);
    assert_eq!(mv(&mut session, &pieter, "left"), None);
    assert_eq!(mv(&mut session, &rune, "left"), None);
    assert_eq!(
        session.request_wall(&rune, 4, 3, true).unwrap().reason(),
        Some(RejectReason::NotYourTurn)
    );
    assert_eq!(session.request_wall(&pieter, 4, 3, true).unwrap().reason(), None);
    assert_eq!(mv(&mut session, &rune, "down"), Some(RejectReason::OffBoard));
    assert_eq!(mv(&mut session, &rune, "up"), None);
    assert_eq!(mv(&mut session, &pieter, "up"), None);
    assert_eq!(mv(&mut session, &rune, "up"), None);
    assert_eq!(mv(&mut session, &pieter, "right"), Some(RejectReason::NotConnected));

    assert_eq!(session.player(Seat::First).position(), Cell::new(4, 2));
    assert_eq!(session.player(Seat::Second).position(), Cell::new(5, 6));
    assert_eq!(session.player(Seat::First).walls_remaining(), 9);
    assert_eq!(session.player(Seat::Second).walls_remaining(), 10);
}

/// Reaching the goal row is visible to the host; the engine keeps going.
#[test]
fn test_goal_row_visible_on_small_board() {
    let a = Player::new("A");
    let b = Player::new("B");
    let config = RulesConfig::default().with_board_size(3);
    let mut session = Session::with_config(&a, &b, config).unwrap();

    assert_eq!(session.player(Seat::First).position(), Cell::new(1, 0));
    assert_eq!(session.player(Seat::Second).position(), Cell::new(1, 2));

    session.request_move(&a, "left").unwrap();
    session.request_move(&b, "up").unwrap();
    session.request_move(&a, "up").unwrap();
    session.request_move(&b, "up").unwrap();
    assert!(session.player(Seat::Second).at_goal());

    session.request_move(&a, "up").unwrap();
    assert!(session.player(Seat::First).at_goal());
    assert_eq!(session.active_seat(), Seat::Second);
}
