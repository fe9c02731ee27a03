//! Static position scoring.
//!
//! Search delegates to [`BoardScorer`] so alternate heuristics can be swapped
//! in without touching the search code.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};

/// Score magnitude for a delivered checkmate; adjusted by ply in search.
pub const MATE_SCORE: i32 = 30_000;

pub trait BoardScorer: Send + Sync {
    /// Score from White's point of view: positive favors White.
    fn score(&self, board: &Board) -> i32;
}

/// Plain material count in centipawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        piece.material_value() * 100
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| match piece.color {
                Color::White => Self::piece_value(piece.kind),
                Color::Black => -Self::piece_value(piece.kind),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::game_state::board::Board;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&Board::starting_position()), 0);
    }

    #[test]
    fn missing_black_queen_favors_white() {
        let board = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&board), 900);
    }

    #[test]
    fn sign_flips_with_material_owner() {
        let white_up = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let black_up = Board::from_fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(MaterialScorer.score(&white_up) > 0);
        assert!(MaterialScorer.score(&black_up) < 0);
    }
}
