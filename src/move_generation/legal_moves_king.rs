//! King steps and castling.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_rank, king_home, KINGSIDE_ROOK_FILE, KINGSIDE_TRANSIT_FILES, QUEENSIDE_EMPTY_FILES,
    QUEENSIDE_ROOK_FILE, QUEENSIDE_TRANSIT_FILES,
};
use crate::game_state::chess_types::{kingside_right, queenside_right, Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{generate_step_moves, KING_OFFSETS};
use crate::moves::chess_move::ChessMove;

/// King moves from `from`. Castling is skipped when `include_castling` is
/// false, which attack scans rely on to avoid recursing into each other.
pub fn generate_king_moves(
    board: &Board,
    from: Coordinate,
    include_castling: bool,
    out: &mut Vec<ChessMove>,
) {
    generate_step_moves(board, from, &KING_OFFSETS, out);
    if include_castling {
        generate_castling_moves(board, from, out);
    }
}

fn generate_castling_moves(board: &Board, from: Coordinate, out: &mut Vec<ChessMove>) {
    let Some(king) = board.piece_at(from) else {
        return;
    };
    let color = king.color;
    if from != king_home(color) {
        return;
    }

    let kingside = board.has_castling_right(kingside_right(color));
    let queenside = board.has_castling_right(queenside_right(color));
    if !kingside && !queenside {
        return;
    }

    let enemy = color.opposite();
    if is_square_attacked(board, from, enemy) {
        return;
    }

    let rank = back_rank(color);
    let rook = Some(Piece::new(PieceKind::Rook, color));
    let on_rank = |file: i8| Coordinate::new(rank, file);

    if kingside
        && board.piece_at(on_rank(KINGSIDE_ROOK_FILE)) == rook
        && KINGSIDE_TRANSIT_FILES
            .iter()
            .all(|&file| board.is_square_empty(on_rank(file)))
        && KINGSIDE_TRANSIT_FILES
            .iter()
            .all(|&file| !is_square_attacked(board, on_rank(file), enemy))
    {
        out.push(ChessMove::castle(from, from.offset(0, 2), king));
    }

    if queenside
        && board.piece_at(on_rank(QUEENSIDE_ROOK_FILE)) == rook
        && QUEENSIDE_EMPTY_FILES
            .iter()
            .all(|&file| board.is_square_empty(on_rank(file)))
        && QUEENSIDE_TRANSIT_FILES
            .iter()
            .all(|&file| !is_square_attacked(board, on_rank(file), enemy))
    {
        out.push(ChessMove::castle(from, from.offset(0, -2), king));
    }
}
