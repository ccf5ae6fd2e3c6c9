#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod piece;
pub mod board;
pub mod tally;
pub mod rules;
pub mod state;
pub mod hash;

pub mod engine {
    pub mod apply;
    pub mod outcome;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::apply_move;
pub use crate::engine::outcome::winner_by_captures;
pub use crate::hash::{recompute_zobrist, zobrist_key};
pub use crate::piece::{Piece, PieceKind};
pub use crate::state::{is_terminal, legal_moves, GameState, GameStatus, Move};
pub use crate::tally::CaptureTally;
pub use crate::types::{Color, Square};
