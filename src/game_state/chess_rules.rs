//! Canonical chess-rule constants.
//!
//! Board geometry is fixed at 8x8. Home ranks, rook corners and castling
//! transit files are expressed in [`Coordinate`] terms (`x` = rank index,
//! `y` = file index).

use crate::game_state::chess_types::Color;
use crate::game_state::coordinate::Coordinate;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const BOARD_SIZE: usize = 8;

pub const KING_HOME_FILE: i8 = 4;
pub const KINGSIDE_ROOK_FILE: i8 = 7;
pub const QUEENSIDE_ROOK_FILE: i8 = 0;

/// Files the king crosses (and lands on) when castling king side.
pub const KINGSIDE_TRANSIT_FILES: [i8; 2] = [5, 6];
/// Files the king crosses (and lands on) when castling queen side.
pub const QUEENSIDE_TRANSIT_FILES: [i8; 2] = [3, 2];
/// Files that must be empty for queen side castling; includes the b-file.
pub const QUEENSIDE_EMPTY_FILES: [i8; 3] = [3, 2, 1];

#[inline]
pub const fn back_rank(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Coordinate {
    Coordinate::new(back_rank(color), KING_HOME_FILE)
}
