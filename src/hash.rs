use crate::piece::Piece;
use crate::state::GameState;
use crate::types::{Color, Square};

/// SplitMix64 PRNG step for stable, fast token generation.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn token128_from_seed(seed: u64) -> u128 {
    // Two rounds to build 128 bits deterministically.
    let lo = splitmix64(seed ^ 0xC0FF_EE00_D15E_CAFE);
    let hi = splitmix64(seed ^ 0xDEAD_BEEF_F00D_FACE ^ lo.rotate_left(17));
    (u128::from(hi) << 64) | u128::from(lo)
}

// Domain tags (arbitrary but fixed)
const DOM_PIECE: u64 = 0x5E1F_8A7D_0000_0001;
const DOM_TURN: u64 = 0x5E1F_8A7D_0000_00C0;

/// Public Zobrist tokens for incremental maintenance

#[inline]
pub fn z_token_piece(sq: Square, piece: Piece) -> u128 {
    let color_bit: u64 = match piece.color {
        Color::White => 0,
        Color::Black => 1,
    };
    let seed = DOM_PIECE
        ^ (sq.index() as u64)
        ^ (color_bit << 8)
        ^ ((piece.kind.index() as u64) << 16);
    token128_from_seed(seed)
}

#[inline]
pub fn z_token_turn(color: Color) -> u128 {
    let color_bit: u64 = match color {
        Color::White => 0,
        Color::Black => 1,
    };
    let seed = DOM_TURN ^ color_bit;
    token128_from_seed(seed)
}

/// Full recomputation from the board and side to move. The capture tally
/// and status carry no tokens of their own: both are derivable from the
/// board given the fixed starting position. Used to initialize states and
/// to validate incremental updates during tests.
#[inline]
pub fn recompute_zobrist(state: &GameState) -> u128 {
    let mut z: u128 = 0;

    for (sq, piece) in state.board.pieces() {
        z ^= z_token_piece(sq, piece);
    }

    z ^= z_token_turn(state.turn);

    z
}

/// Accessor kept for API stability: returns the cached, incrementally
/// maintained key stored in GameState.
#[inline]
pub fn zobrist_key(state: &GameState) -> u128 {
    state.zobrist
}
