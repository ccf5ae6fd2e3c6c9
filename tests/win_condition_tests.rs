use chessvar::{
    winner_by_captures, CaptureTally, Color, GameState, GameStatus, Piece, PieceKind, Square,
};

fn sq(s: &str) -> Square {
    Square::parse(s).expect("valid square")
}

fn state_with(pieces: &[(&str, PieceKind, Color)], turn: Color) -> GameState {
    let mut state = GameState::new_empty();
    state.turn = turn;
    for &(at, kind, color) in pieces {
        state.board.set(sq(at), Some(Piece::new(kind, color)));
    }
    state.refresh_zobrist();
    state
}

#[test]
fn no_winner_from_empty_tally() {
    assert_eq!(winner_by_captures(&CaptureTally::new()), None);
}

#[test]
fn losing_every_pawn_loses_the_game() {
    // Scenario 3, final step: Black has already lost 7 pawns; White takes
    // the eighth.
    let mut state = state_with(
        &[
            ("a1", PieceKind::Rook, Color::White),
            ("e1", PieceKind::King, Color::White),
            ("a7", PieceKind::Pawn, Color::Black),
            ("e8", PieceKind::King, Color::Black),
        ],
        Color::White,
    );
    for _ in 0..7 {
        state
            .captures
            .record(Piece::new(PieceKind::Pawn, Color::Black));
    }
    assert_eq!(state.status, GameStatus::InProgress);

    assert!(state.try_move(sq("a1"), sq("a7")));
    assert_eq!(state.captures.count(Color::Black, PieceKind::Pawn), 8);
    assert_eq!(state.status, GameStatus::WhiteWon);
    assert!(state.is_terminal());
}

#[test]
fn seven_captured_pawns_do_not_end_the_game() {
    let mut tally = CaptureTally::new();
    for _ in 0..7 {
        tally.record(Piece::new(PieceKind::Pawn, Color::Black));
    }
    assert_eq!(winner_by_captures(&tally), None);
    tally.record(Piece::new(PieceKind::Pawn, Color::Black));
    assert_eq!(winner_by_captures(&tally), Some(Color::White));
}

#[test]
fn one_knight_is_not_enough_both_are() {
    let mut tally = CaptureTally::new();
    tally.record(Piece::new(PieceKind::Knight, Color::White));
    assert_eq!(winner_by_captures(&tally), None);
    tally.record(Piece::new(PieceKind::Knight, Color::White));
    assert_eq!(winner_by_captures(&tally), Some(Color::Black));
}

#[test]
fn queen_capture_is_an_instant_win() {
    // Scenario 6: taking the sole queen decides the game even with nearly
    // all other material still on the board. Played out from the opening:
    // the white queen strays to g4 and the c8 bishop takes it.
    let mut state = GameState::new();
    assert!(state.try_move(sq("e2"), sq("e4")));
    assert!(state.try_move(sq("d7"), sq("d5")));
    assert!(state.try_move(sq("d1"), sq("g4")));
    assert!(state.try_move(sq("c8"), sq("g4")));

    assert_eq!(state.captures.count(Color::White, PieceKind::Queen), 1);
    assert_eq!(state.status, GameStatus::BlackWon);
    assert_eq!(state.board.count(Color::White), 15);
}

#[test]
fn king_capture_wins_too() {
    // No check rule in this variant: the king is simply a capturable piece
    // with a one-deep complement.
    let mut state = state_with(
        &[
            ("h1", PieceKind::King, Color::White),
            ("h8", PieceKind::Rook, Color::Black),
            ("e8", PieceKind::King, Color::Black),
        ],
        Color::Black,
    );
    assert!(state.try_move(sq("h8"), sq("h1")));
    assert_eq!(state.captures.count(Color::White, PieceKind::King), 1);
    assert_eq!(state.status, GameStatus::BlackWon);
}

#[test]
fn terminal_state_accepts_no_further_moves() {
    let mut state = state_with(
        &[
            ("a1", PieceKind::Rook, Color::White),
            ("a8", PieceKind::Queen, Color::Black),
            ("h7", PieceKind::Pawn, Color::Black),
            ("h2", PieceKind::Pawn, Color::White),
        ],
        Color::White,
    );
    assert!(state.try_move(sq("a1"), sq("a8")));
    assert_eq!(state.status, GameStatus::WhiteWon);

    let frozen = state.clone();
    // Neither side gets another move, legal or not
    assert!(!state.try_move(sq("h7"), sq("h6")));
    assert!(!state.try_move(sq("h2"), sq("h3")));
    assert!(!state.try_move(sq("a8"), sq("a1")));
    assert_eq!(frozen.board, state.board);
    assert_eq!(frozen.captures, state.captures);
    assert_eq!(frozen.status, state.status);
    assert!(state.legal_moves().is_empty());
}

#[test]
fn tally_tracks_the_losing_color() {
    let mut state = state_with(
        &[
            ("d4", PieceKind::Rook, Color::White),
            ("d7", PieceKind::Bishop, Color::Black),
            ("c5", PieceKind::Knight, Color::Black),
        ],
        Color::White,
    );
    assert!(state.try_move(sq("d4"), sq("d7")));

    // The bishop was Black's loss, recorded under Black
    assert_eq!(state.captures.count(Color::Black, PieceKind::Bishop), 1);
    assert_eq!(state.captures.count(Color::White, PieceKind::Bishop), 0);
    assert_eq!(state.captures.total(Color::White), 0);

    // Black answers by taking the rook; both tallies now hold one loss
    assert!(state.try_move(sq("c5"), sq("d7")));
    assert_eq!(state.captures.count(Color::White, PieceKind::Rook), 1);
    assert_eq!(state.captures.total(Color::Black), 1);
    assert_eq!(state.captures.total(Color::White), 1);
}
