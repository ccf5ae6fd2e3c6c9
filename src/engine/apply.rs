use crate::engine::outcome::winner_by_captures;
use crate::hash::{z_token_piece, z_token_turn};
use crate::rules;
use crate::state::{GameState, GameStatus, Move};
use crate::types::Color;

/// Apply a move as a pure transform: returns a new GameState on success.
/// Validation order: terminal status, coordinate range, occupied source,
/// turn ownership, friendly destination, piece movement rule. Every
/// rejection leaves the input untouched; `GameState::try_move` folds the
/// diagnostic into its boolean surface.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, String> {
    if state.status != GameStatus::InProgress {
        return Err("Game is already decided".to_string());
    }
    if !mv.from.on_board() || !mv.to.on_board() {
        return Err(format!("Square out of range: {:?} -> {:?}", mv.from, mv.to));
    }
    let Some(piece) = state.board.get(mv.from) else {
        return Err("No piece on the source square".to_string());
    };
    if piece.color != state.turn {
        return Err("Piece does not belong to the side to move".to_string());
    }
    let target = state.board.get(mv.to);
    if target.map_or(false, |t| t.color == piece.color) {
        return Err("Destination holds a friendly piece".to_string());
    }
    if !rules::is_legal(&state.board, piece, mv.from, mv.to) {
        return Err(format!("Illegal {:?} move {} -> {}", piece.kind, mv.from, mv.to));
    }

    // Clone and mutate
    let mut ns = state.clone();

    if let Some(captured) = target {
        // Tally is keyed by the color that lost the piece.
        ns.captures.record(captured);
        ns.zobrist ^= z_token_piece(mv.to, captured);
    }
    ns.board.set(mv.to, Some(piece));
    ns.board.set(mv.from, None);
    ns.zobrist ^= z_token_piece(mv.from, piece) ^ z_token_piece(mv.to, piece);

    // Win evaluation runs before the turn flip; a terminal status is final.
    if let Some(winner) = winner_by_captures(&ns.captures) {
        ns.status = match winner {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        };
    }

    ns.zobrist ^= z_token_turn(ns.turn) ^ z_token_turn(ns.turn.other());
    ns.turn = ns.turn.other();

    Ok(ns)
}
