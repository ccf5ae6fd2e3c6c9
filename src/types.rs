use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Dense index for per-color tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

/// Board coordinates. Row 0 is the Black back rank, row 7 the White back
/// rank, so White pawns advance toward decreasing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Row-major cell index (row * 8 + col). Caller must ensure `on_board`.
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Self {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        }
    }

    /// Two-character algebraic notation: column = letter - 'a',
    /// row = 8 - rank digit. `"a2"` maps to row 6, col 0.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file) {
            return None;
        }
        let digit = rank.to_digit(10)?;
        if !(1..=8).contains(&digit) {
            return None;
        }
        Some(Self {
            row: (8 - digit) as u8,
            col: (file as u8) - b'a',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}
