//! Direction tables and the two generic walkers (sliding rays and fixed steps)
//! shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::coordinate::Coordinate;
use crate::moves::chess_move::ChessMove;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Walks each ray from `from` until the edge or the first piece.
///
/// A same-colored blocker ends the ray before its square; an enemy blocker
/// ends it after emitting the capture.
pub fn generate_sliding_moves(
    board: &Board,
    from: Coordinate,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    for &(dx, dy) in directions {
        let mut to = from.offset(dx, dy);
        while board.is_coordinate_safe(to) {
            match board.piece_at(to) {
                None => out.push(ChessMove::new(from, to, piece, None)),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(ChessMove::new(from, to, piece, Some(blocker)));
                    }
                    break;
                }
            }
            to = to.offset(dx, dy);
        }
    }
}

/// Single-step moves from a fixed offset list (knight, king).
pub fn generate_step_moves(
    board: &Board,
    from: Coordinate,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    for &(dx, dy) in offsets {
        let to = from.offset(dx, dy);
        if !board.is_coordinate_safe(to) {
            continue;
        }
        match board.piece_at(to) {
            Some(target) if target.color == piece.color => {}
            target => out.push(ChessMove::new(from, to, piece, target)),
        }
    }
}
