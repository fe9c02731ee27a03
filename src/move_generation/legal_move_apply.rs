//! Move execution.
//!
//! Builds the successor position from a copy of the grid; the source board is
//! only read.

use crate::game_state::board::{Board, Squares};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::coordinate::Coordinate;
use crate::moves::chess_move::ChessMove;

/// Home corner of each rook paired with the castling right it guards.
const ROOK_CORNERS: [(Coordinate, CastlingRights); 4] = [
    (Coordinate::new(0, QUEENSIDE_ROOK_FILE), CASTLE_WHITE_QUEENSIDE),
    (Coordinate::new(0, KINGSIDE_ROOK_FILE), CASTLE_WHITE_KINGSIDE),
    (Coordinate::new(7, QUEENSIDE_ROOK_FILE), CASTLE_BLACK_QUEENSIDE),
    (Coordinate::new(7, KINGSIDE_ROOK_FILE), CASTLE_BLACK_KINGSIDE),
];

pub fn apply_move(board: &Board, mv: &ChessMove) -> Board {
    debug_assert_eq!(
        board.piece_at(mv.from),
        Some(mv.piece_moved),
        "move {mv} does not match the piece on its origin square"
    );

    let mover = mv.piece_moved.color;
    let mut squares = *board.squares();

    set_square(&mut squares, mv.from, None);
    set_square(&mut squares, mv.to, Some(mv.promoted_piece.unwrap_or(mv.piece_moved)));

    if mv.was_en_passant {
        set_square(&mut squares, mv.to.offset(-mover.pawn_direction(), 0), None);
    }

    if mv.was_castle {
        move_castling_rook(&mut squares, mv);
    }

    let castling_rights = update_castling_rights(board.castling_rights(), mv);

    let en_passant = if mv.is_double_pawn_push() {
        Some(Coordinate::new((mv.from.x + mv.to.x) / 2, mv.from.y))
    } else {
        None
    };

    let halfmove_clock = if mv.piece_moved.is_kind(PieceKind::Pawn) || mv.is_capture() {
        0
    } else {
        board.halfmove_clock().saturating_add(1)
    };

    let fullmove_number = if board.side_to_move() == Color::Black {
        board.fullmove_number().saturating_add(1)
    } else {
        board.fullmove_number()
    };

    Board::new(
        squares,
        board.side_to_move().opposite(),
        castling_rights,
        en_passant,
        halfmove_clock,
        fullmove_number,
    )
}

#[inline]
fn set_square(squares: &mut Squares, square: Coordinate, piece: Option<Piece>) {
    squares[square.x as usize][square.y as usize] = piece;
}

/// King side puts the rook on the file left of the king, queen side on the right.
fn move_castling_rook(squares: &mut Squares, mv: &ChessMove) {
    let rank = mv.to.x;
    let (rook_from, rook_to) = if mv.to.y > mv.from.y {
        (Coordinate::new(rank, KINGSIDE_ROOK_FILE), mv.to.offset(0, -1))
    } else {
        (Coordinate::new(rank, QUEENSIDE_ROOK_FILE), mv.to.offset(0, 1))
    };

    let rook = squares[rook_from.x as usize][rook_from.y as usize];
    set_square(squares, rook_from, None);
    set_square(squares, rook_to, rook);
}

fn update_castling_rights(mut rights: CastlingRights, mv: &ChessMove) -> CastlingRights {
    if mv.piece_moved.is_kind(PieceKind::King) {
        rights &= !(kingside_right(mv.piece_moved.color) | queenside_right(mv.piece_moved.color));
    }

    // A rook leaving its corner, or anything landing on one, ends that right.
    for (corner, right) in ROOK_CORNERS {
        if mv.from == corner || mv.to == corner {
            rights &= !right;
        }
    }

    rights
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::game_state::coordinate::Coordinate;
    use crate::moves::chess_move::ChessMove;

    fn find(board: &Board, from: Coordinate, to: Coordinate) -> ChessMove {
        *board
            .legal_moves(from)
            .iter()
            .find(|m| m.to == to)
            .expect("move should be legal")
    }

    #[test]
    fn double_step_sets_en_passant_and_clocks() {
        let board = Board::starting_position();
        let next = apply_move(&board, &find(&board, Coordinate::new(1, 4), Coordinate::new(3, 4)));
        assert_eq!(next.en_passant(), Some(Coordinate::new(2, 4)));
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.halfmove_clock(), 0);
        assert_eq!(next.fullmove_number(), 1);

        let knight = find(&next, Coordinate::new(7, 6), Coordinate::new(5, 5));
        let after = apply_move(&next, &knight);
        assert_eq!(after.en_passant(), None);
        assert_eq!(after.halfmove_clock(), 1);
        assert_eq!(after.fullmove_number(), 2);
    }

    #[test]
    fn kingside_castle_moves_rook() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("FEN should parse");
        let next = apply_move(&board, &find(&board, Coordinate::new(0, 4), Coordinate::new(0, 6)));
        assert_eq!(next.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10");
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 7").expect("FEN should parse");
        let next = apply_move(&board, &find(&board, Coordinate::new(7, 4), Coordinate::new(7, 2)));
        assert_eq!(next.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 8");
    }

    #[test]
    fn rook_capture_clears_victims_right() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let next = apply_move(&board, &find(&board, Coordinate::new(0, 7), Coordinate::new(7, 7)));
        assert!(!next.has_castling_right(CASTLE_WHITE_KINGSIDE));
        assert!(!next.has_castling_right(CASTLE_BLACK_KINGSIDE));
        assert!(next.has_castling_right(CASTLE_WHITE_QUEENSIDE));
        assert!(next.has_castling_right(CASTLE_BLACK_QUEENSIDE));
        assert_eq!(next.halfmove_clock(), 0);
    }

    #[test]
    fn en_passant_removes_pawn_behind_target() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let ep = *board
            .legal_moves(Coordinate::new(4, 4))
            .iter()
            .find(|m| m.was_en_passant)
            .expect("en passant should be legal");
        let next = apply_move(&board, &ep);
        assert_eq!(next.piece_at(Coordinate::new(4, 3)), None);
        assert_eq!(
            next.piece_at(Coordinate::new(5, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(next.to_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");
    }

    #[test]
    fn promotion_places_promoted_piece() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let knight_promo = *board
            .legal_moves(Coordinate::new(6, 0))
            .iter()
            .find(|m| m.promoted_piece.map(|p| p.kind) == Some(PieceKind::Knight))
            .expect("knight promotion should exist");
        let next = apply_move(&board, &knight_promo);
        assert_eq!(next.to_fen(), "N3k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }
}
