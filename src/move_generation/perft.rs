//! Perft node counting for move-generator validation.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf-move
//! categories the way published perft tables do.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::GameStatus;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in board.all_legal_moves() {
        perft_recurse(board, &mv, depth, 1, &mut total);
    }
    total
}

/// Node count below each root move, in generation order.
pub fn divide(board: &Board, depth: u8) -> Vec<(ChessMove, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    board
        .all_legal_moves()
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(board, &mv, depth, 1, &mut counts);
            debug!(mv = %mv, nodes = counts.nodes, "divide");
            (mv, counts.nodes)
        })
        .collect()
}

fn perft_recurse(
    board: &Board,
    mv: &ChessMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let next = board.apply_move(mv);

    if current_depth == search_depth {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if mv.is_capture() {
            leaf.captures = 1;
        }
        if mv.was_en_passant {
            leaf.en_passant = 1;
        }
        if mv.was_castle {
            leaf.castles = 1;
        }
        if mv.is_promotion() {
            leaf.promotions = 1;
        }
        if next.king_in_check().is_some() {
            leaf.checks = 1;
            if next.game_status() == GameStatus::Checkmate {
                leaf.checkmates = 1;
            }
        }
        counts.merge(leaf);
        return;
    }

    for child in next.all_legal_moves() {
        perft_recurse(&next, &child, search_depth, current_depth + 1, counts);
    }
}
