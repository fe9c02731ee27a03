//! King location and attack detection.
//!
//! A square counts as attacked when some piece of the attacking color has a
//! pseudo-legal, non-castling move landing on it. Pawns are the exception:
//! their pushes never attack, and their diagonals attack even empty squares,
//! so they are tested by geometry.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_generator::generate_piece_moves;
use crate::move_generation::legal_moves_pawn::pawn_attacks_square;
use crate::moves::chess_move::ChessMove;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Coordinate> {
    let king = Piece::new(PieceKind::King, color);
    board
        .pieces()
        .find(|(_, piece)| *piece == king)
        .map(|(square, _)| square)
}

/// Square of `color`'s king when it is attacked by the opponent.
#[inline]
pub fn king_in_check(board: &Board, color: Color) -> Option<Coordinate> {
    let king_sq = king_square(board, color)?;
    is_square_attacked(board, king_sq, color.opposite()).then_some(king_sq)
}

pub fn is_square_attacked(board: &Board, square: Coordinate, attacker_color: Color) -> bool {
    let mut scratch = Vec::with_capacity(32);
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(from, piece)| piece_attacks_square(board, from, piece, square, &mut scratch))
}

fn piece_attacks_square(
    board: &Board,
    from: Coordinate,
    piece: Piece,
    target: Coordinate,
    scratch: &mut Vec<ChessMove>,
) -> bool {
    if piece.is_kind(PieceKind::Pawn) {
        return pawn_attacks_square(piece.color, from, target);
    }

    scratch.clear();
    generate_piece_moves(board, from, false, scratch);
    scratch.iter().any(|mv| mv.to == target)
}
