use crate::game_state::board::Board;
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_shared::{generate_step_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::ChessMove;

pub fn generate_knight_moves(board: &Board, from: Coordinate, out: &mut Vec<ChessMove>) {
    generate_step_moves(board, from, &KNIGHT_OFFSETS, out);
}
