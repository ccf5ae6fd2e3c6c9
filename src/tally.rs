use crate::piece::{Piece, PieceKind};
use crate::types::Color;

/// Per-color counts of captured piece kinds, keyed by the color that LOST
/// the piece ("material lost by that color"). Counts only ever grow; the
/// win condition is evaluated over this record alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureTally {
    counts: [[u8; 6]; 2],
}

impl CaptureTally {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a captured piece under its own color.
    #[inline]
    pub fn record(&mut self, piece: Piece) {
        self.counts[piece.color.index()][piece.kind.index()] += 1;
    }

    /// How many pieces of `kind` the side `color` has lost.
    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> u8 {
        self.counts[color.index()][kind.index()]
    }

    /// Total pieces lost by `color`.
    #[inline]
    pub fn total(&self, color: Color) -> u8 {
        self.counts[color.index()].iter().sum()
    }
}
