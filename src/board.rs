use crate::piece::{Piece, PieceKind};
use crate::types::{Color, Square};

/// Back rank layout, col 0 through col 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Cells 0..=63 laid out row-major (row * 8 + col)
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 64] }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position: Black on rows 0..=1, White on rows 6..=7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for col in 0..8u8 {
            let kind = BACK_RANK[col as usize];
            board.set(Square::new(0, col), Some(Piece::new(kind, Color::Black)));
            board.set(
                Square::new(1, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.set(
                Square::new(6, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set(Square::new(7, col), Some(Piece::new(kind, Color::White)));
        }
        board
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Read-only enumeration of occupied squares in cell-index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|p| (Square::from_index(idx), p)))
    }

    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        self.cells
            .iter()
            .filter(|c| c.map_or(false, |p| p.color == color))
            .count() as u8
    }
}
