use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::engine::apply::apply_move;
use crate::hash::recompute_zobrist;
use crate::rules;
use crate::tally::CaptureTally;
use crate::types::{Color, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    WhiteWon,
    BlackWon,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub captures: CaptureTally,
    pub status: GameStatus,
    /// Cached Zobrist key, maintained incrementally by `apply_move`.
    pub zobrist: u128,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let mut s = Self {
            board: Board::starting_position(),
            turn: Color::White,
            captures: CaptureTally::new(),
            status: GameStatus::InProgress,
            zobrist: 0,
        };
        s.zobrist = recompute_zobrist(&s);
        s
    }

    /// Empty board, White to move. Scenario builder: place pieces through
    /// `board.set`, then call `refresh_zobrist` if the key matters.
    pub fn new_empty() -> Self {
        let mut s = Self {
            board: Board::empty(),
            turn: Color::White,
            captures: CaptureTally::new(),
            status: GameStatus::InProgress,
            zobrist: 0,
        };
        s.zobrist = recompute_zobrist(&s);
        s
    }

    #[inline]
    pub fn refresh_zobrist(&mut self) {
        self.zobrist = recompute_zobrist(self);
    }

    /// Attempt a move: true iff it was applied. On false the state is
    /// untouched; the caller gets no diagnostic beyond the boolean.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        match apply_move(self, Move { from, to }) {
            Ok(ns) => {
                *self = ns;
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Ordered legal moves for the side to move: source cell index
    /// ascending, then destination cell index ascending. Empty once the
    /// game is decided. With no check rule, turn + friendly-fire +
    /// movement geometry is exact legality.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for from_idx in 0..64usize {
            let from = Square::from_index(from_idx);
            let Some(piece) = self.board.get(from) else {
                continue;
            };
            if piece.color != self.turn {
                continue;
            }
            for to_idx in 0..64usize {
                let to = Square::from_index(to_idx);
                if self.board.get(to).map_or(false, |t| t.color == piece.color) {
                    continue;
                }
                if rules::is_legal(&self.board, piece, from, to) {
                    moves.push(Move { from, to });
                }
            }
        }
        moves
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-export minimal surface for callers as free functions to align with the
/// planned API.
#[inline]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
