use serde::{Deserialize, Serialize};

use crate::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub fn all() -> [PieceKind; 6] {
        [
            PieceKind::Pawn,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ]
    }

    /// Dense index for per-kind tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Number of pieces of this kind each side starts with. Losing a full
    /// complement of any one kind loses the game.
    #[inline]
    pub fn starting_count(self) -> u8 {
        match self {
            PieceKind::Pawn => 8,
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop => 2,
            PieceKind::Queen | PieceKind::King => 1,
        }
    }
}

/// An occupied cell: kind and color as an explicit tagged pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Display letter, uppercase for White.
    #[inline]
    pub fn symbol(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}
