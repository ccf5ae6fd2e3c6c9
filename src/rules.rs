use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::types::{Color, Square};

/// Movement geometry for each piece kind. Turn ownership and the
/// friendly-fire rejection happen in the apply pipeline; these checks cover
/// the shape of the move and path clearance only, plus the pawn's
/// occupancy-sensitive cases.
pub fn is_legal(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece.color, from, to),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Queen => queen_move(board, from, to),
        PieceKind::King => king_move(from, to),
    }
}

/// Single step onto an empty square; double step only from the starting row
/// with both squares empty; diagonal single step only as a capture.
fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (dir, start_row): (i16, u8) = match color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };
    let dr = i16::from(to.row) - i16::from(from.row);
    let dc = i16::from(to.col) - i16::from(from.col);

    if dc == 0 {
        if dr == dir {
            return board.is_empty(to);
        }
        if dr == 2 * dir && from.row == start_row {
            let mid = Square::new((i16::from(from.row) + dir) as u8, from.col);
            return board.is_empty(mid) && board.is_empty(to);
        }
        return false;
    }

    dc.abs() == 1 && dr == dir && board.get(to).is_some()
}

fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    if from.row != to.row && from.col != to.col {
        return false;
    }
    path_clear(board, from, to)
}

fn knight_move(from: Square, to: Square) -> bool {
    let dr = i16::from(to.row).abs_diff(i16::from(from.row));
    let dc = i16::from(to.col).abs_diff(i16::from(from.col));
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let dr = i16::from(to.row).abs_diff(i16::from(from.row));
    let dc = i16::from(to.col).abs_diff(i16::from(from.col));
    if dr != dc {
        return false;
    }
    path_clear(board, from, to)
}

fn queen_move(board: &Board, from: Square, to: Square) -> bool {
    let dr = i16::from(to.row).abs_diff(i16::from(from.row));
    let dc = i16::from(to.col).abs_diff(i16::from(from.col));
    if from.row == to.row || from.col == to.col || dr == dc {
        return path_clear(board, from, to);
    }
    false
}

/// Non-null move of at most one square in each of row and column.
fn king_move(from: Square, to: Square) -> bool {
    let dr = i16::from(to.row).abs_diff(i16::from(from.row));
    let dc = i16::from(to.col).abs_diff(i16::from(from.col));
    dr.max(dc) == 1
}

/// Shared clearance check for the sliding pieces. Scans the squares
/// strictly between `from` and `to` along the fixed direction; the
/// destination itself is never examined here.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let row_step = (i16::from(to.row) - i16::from(from.row)).signum();
    let col_step = (i16::from(to.col) - i16::from(from.col)).signum();

    let mut row = i16::from(from.row) + row_step;
    let mut col = i16::from(from.col) + col_step;
    while (row, col) != (i16::from(to.row), i16::from(to.col)) {
        if !board.is_empty(Square::new(row as u8, col as u8)) {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}
