//! Pawn pushes, captures, en passant and promotion expansion.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_home_rank, promotion_rank};
use crate::game_state::chess_types::{Color, PieceKind, PROMOTION_KINDS};
use crate::game_state::coordinate::Coordinate;
use crate::moves::chess_move::ChessMove;

const CAPTURE_FILE_STEPS: [i8; 2] = [1, -1];

pub fn generate_pawn_moves(board: &Board, from: Coordinate, out: &mut Vec<ChessMove>) {
    let Some(pawn) = board.piece_at(from) else {
        return;
    };
    let color = pawn.color;
    let dir = color.pawn_direction();
    let first = out.len();

    let one_step = from.offset(dir, 0);
    if board.is_square_empty(one_step) {
        out.push(ChessMove::new(from, one_step, pawn, None));

        if from.x == pawn_home_rank(color) {
            let two_step = from.offset(2 * dir, 0);
            if board.is_square_empty(two_step) {
                out.push(ChessMove::new(from, two_step, pawn, None));
            }
        }
    }

    for dy in CAPTURE_FILE_STEPS {
        let to = from.offset(dir, dy);
        if !board.is_coordinate_safe(to) {
            continue;
        }

        match board.piece_at(to) {
            Some(target) if target.color != color => {
                out.push(ChessMove::new(from, to, pawn, Some(target)));
            }
            Some(_) => {}
            None if board.en_passant() == Some(to) => {
                // The double-stepped pawn sits one rank behind the target square.
                let victim_square = to.offset(-dir, 0);
                if let Some(victim) = board.piece_at(victim_square) {
                    if victim.color != color && victim.is_kind(PieceKind::Pawn) {
                        out.push(ChessMove::en_passant(from, to, pawn, victim));
                    }
                }
            }
            None => {}
        }
    }

    expand_promotions(out, first, color);
}

/// Rewrites last-rank moves in `out[first..]` as queen promotions and appends
/// the rook, bishop and knight variants.
fn expand_promotions(out: &mut Vec<ChessMove>, first: usize, color: Color) {
    let generated = out.len();
    for i in first..generated {
        let mv = out[i];
        if mv.to.x != promotion_rank(color) {
            continue;
        }
        out[i] = mv.with_promotion(PROMOTION_KINDS[0]);
        for kind in &PROMOTION_KINDS[1..] {
            out.push(mv.with_promotion(*kind));
        }
    }
}

/// Whether a pawn of `color` on `from` attacks `target` diagonally.
#[inline]
pub fn pawn_attacks_square(color: Color, from: Coordinate, target: Coordinate) -> bool {
    let dir = color.pawn_direction();
    CAPTURE_FILE_STEPS
        .iter()
        .any(|&dy| from.offset(dir, dy) == target)
}
