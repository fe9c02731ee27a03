//! Pseudo-legal dispatch and the legality filter.
//!
//! Each candidate is played on a scratch board and rejected if the mover's
//! king is attacked afterwards. Callers go through [`Board::legal_moves`],
//! which memoizes the result per origin square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Pseudo-legal moves of whatever piece stands on `from`, regardless of
/// whose turn it is.
pub(crate) fn generate_piece_moves(
    board: &Board,
    from: Coordinate,
    include_castling: bool,
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, out),
        PieceKind::Knight => generate_knight_moves(board, from, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, out),
        PieceKind::Rook => generate_rook_moves(board, from, out),
        PieceKind::Queen => generate_queen_moves(board, from, out),
        PieceKind::King => generate_king_moves(board, from, include_castling, out),
    }
}

/// Pseudo-legal moves for the side to move from `from`.
pub fn pseudo_legal_moves(board: &Board, from: Coordinate, include_castling: bool) -> Vec<ChessMove> {
    match board.piece_at(from) {
        Some(piece) if piece.color == board.side_to_move() => {
            let mut moves = Vec::with_capacity(28);
            generate_piece_moves(board, from, include_castling, &mut moves);
            moves
        }
        _ => Vec::new(),
    }
}

/// Whether `mv` leaves the mover's king unattacked.
///
/// Capturing the enemy king is always accepted. It cannot arise from a legal
/// position, but search probes rely on it.
pub fn is_move_legal(board: &Board, mv: &ChessMove) -> bool {
    if mv
        .captured_piece
        .is_some_and(|captured| captured.is_kind(PieceKind::King))
    {
        return true;
    }

    let mover = mv.piece_moved.color;
    let next = apply_move(board, mv);
    let king = if mv.piece_moved.is_kind(PieceKind::King) {
        Some(mv.to)
    } else {
        king_square(&next, mover)
    };

    match king {
        Some(king_sq) => !is_square_attacked(&next, king_sq, mover.opposite()),
        None => true,
    }
}

/// Uncached legal moves from `from`; see [`Board::legal_moves`].
pub fn legal_moves_from(board: &Board, from: Coordinate) -> Vec<ChessMove> {
    pseudo_legal_moves(board, from, true)
        .into_iter()
        .filter(|mv| is_move_legal(board, mv))
        .collect()
}
