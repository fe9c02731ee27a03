use crate::game_state::board::Board;
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(board: &Board, from: Coordinate, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(board, from, &ROOK_DIRECTIONS, out);
}
