//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximises, Black minimises, scores come from a [`BoardScorer`].
//! Every node works on its own freshly applied `Board`, so the per-board legal
//! move memo is never shared between siblings.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, MATE_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// White-relative score of the principal line.
    pub score: i32,
    /// `None` at depth 0 or when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    pub nodes: u64,
}

pub struct MinimaxSearch<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    scorer: S,
}

impl MinimaxSearch<MaterialScorer> {
    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig { depth }, MaterialScorer)
    }
}

impl<S: BoardScorer> MinimaxSearch<S> {
    pub fn new(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Best move by minimax; ties resolve to the first move generated.
    pub fn search(&self, board: &Board) -> SearchResult {
        let mut nodes = 0u64;
        let (score, best_move) =
            self.alpha_beta(board, self.config.depth, i32::MIN, i32::MAX, 0, &mut nodes);

        debug!(
            depth = self.config.depth,
            score,
            nodes,
            best = ?best_move.map(|mv| mv.to_long_algebraic()),
            "search finished"
        );

        SearchResult {
            score,
            best_move,
            nodes,
        }
    }

    /// Like [`search`](Self::search), but picks uniformly among all root moves
    /// sharing the best score.
    pub fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> SearchResult {
        let mut nodes = 1u64;
        let moves = board.all_legal_moves();
        if moves.is_empty() || self.config.depth == 0 {
            let score = if moves.is_empty() {
                self.terminal_score(board, 0)
            } else {
                self.scorer.score(board)
            };
            return SearchResult {
                score,
                best_move: None,
                nodes,
            };
        }

        let maximizing = board.side_to_move() == Color::White;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_moves = Vec::new();

        for mv in moves {
            let child = board.apply_move(&mv);
            let (score, _) =
                self.alpha_beta(&child, self.config.depth - 1, i32::MIN, i32::MAX, 1, &mut nodes);
            trace!(mv = %mv, score, "root move scored");

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        let picked = best_moves.as_slice().choose(rng).copied();
        debug!(
            depth = self.config.depth,
            score = best_score,
            candidates = best_moves.len(),
            nodes,
            "random tie-break search finished"
        );

        SearchResult {
            score: best_score,
            best_move: picked,
            nodes,
        }
    }

    fn alpha_beta(
        &self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        ply: i32,
        nodes: &mut u64,
    ) -> (i32, Option<ChessMove>) {
        *nodes += 1;

        if depth == 0 {
            return (self.scorer.score(board), None);
        }

        let moves = board.all_legal_moves();
        if moves.is_empty() {
            return (self.terminal_score(board, ply), None);
        }

        let maximizing = board.side_to_move() == Color::White;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in moves {
            let child = board.apply_move(&mv);
            let (score, _) = self.alpha_beta(&child, depth - 1, alpha, beta, ply + 1, nodes);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if alpha >= beta {
                break;
            }
        }

        (best_score, best_move)
    }

    /// Mate (sooner is larger) or stalemate score for a node without moves.
    fn terminal_score(&self, board: &Board, ply: i32) -> i32 {
        if board.king_in_check().is_none() {
            return 0;
        }
        match board.side_to_move() {
            Color::White => -(MATE_SCORE - ply),
            Color::Black => MATE_SCORE - ply,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{MinimaxSearch, SearchConfig};
    use crate::game_state::board::Board;
    use crate::search::board_scoring::{MaterialScorer, MATE_SCORE};

    #[test]
    fn finds_back_rank_mate() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let result = MinimaxSearch::with_depth(2).search(&board);
        let best = result.best_move.expect("a move should be found");
        assert_eq!(best.to_long_algebraic(), "a1a8");
        assert_eq!(result.score, MATE_SCORE - 1);
    }

    #[test]
    fn grabs_hanging_queen() {
        let board = Board::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("FEN should parse");
        let result = MinimaxSearch::with_depth(1).search(&board);
        assert_eq!(result.best_move.map(|mv| mv.to_long_algebraic()).as_deref(), Some("d2d5"));
        assert_eq!(result.score, 500);
    }

    #[test]
    fn black_minimises() {
        let board = Board::from_fen("4k3/3r4/8/3Q4/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let result = MinimaxSearch::with_depth(1).search(&board);
        assert_eq!(result.best_move.map(|mv| mv.to_long_algebraic()).as_deref(), Some("d7d5"));
        assert_eq!(result.score, -500);
    }

    #[test]
    fn no_move_at_depth_zero_or_terminal_nodes() {
        let board = Board::starting_position();
        let result = MinimaxSearch::new(SearchConfig { depth: 0 }, MaterialScorer).search(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);

        let stalemate = Board::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1").expect("FEN should parse");
        let result = MinimaxSearch::with_depth(3).search(&stalemate);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);

        let mated = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        let result = MinimaxSearch::with_depth(2).search(&mated);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -MATE_SCORE);
    }

    #[test]
    fn seeded_tie_break_is_reproducible() {
        let board = Board::starting_position();
        let search = MinimaxSearch::with_depth(1);

        let first = search.choose_move(&board, &mut StdRng::seed_from_u64(7));
        let second = search.choose_move(&board, &mut StdRng::seed_from_u64(7));
        assert_eq!(first.best_move, second.best_move);

        let picked = first.best_move.expect("start position has moves");
        assert!(board.all_legal_moves().contains(&picked));
        assert_eq!(first.score, 0);
    }

    #[test]
    fn tie_break_still_prefers_winning_capture() {
        let board = Board::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("FEN should parse");
        let result = MinimaxSearch::with_depth(1).choose_move(&board, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.best_move.map(|mv| mv.to_long_algebraic()).as_deref(), Some("d2d5"));
    }
}
