//! Game orchestration: the current board plus the moves that led to it.
//!
//! `Game` is the one mutable object in the engine. Executing a move swaps in
//! the successor board and appends to the history within a single `&mut self`
//! call, so no caller can observe one without the other.

use tracing::debug;

use crate::errors::FenError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameStatus, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::moves::chess_move::ChessMove;
use crate::utils::long_algebraic::{find_legal_move, long_algebraic_to_move};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    move_history: Vec<ChessMove>,
}

impl Game {
    /// New game from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_board(Board::from_fen(fen)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            move_history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    #[inline]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    pub fn legal_moves(&self, square: Coordinate) -> &[ChessMove] {
        self.board.legal_moves(square)
    }

    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        self.board.all_legal_moves()
    }

    /// Plays `mv`, which must come from this game's current legal move list.
    pub fn execute_move(&mut self, mv: ChessMove) {
        debug_assert!(
            self.board.legal_moves(mv.from).contains(&mv),
            "move {mv} is not legal in {}",
            self.board.to_fen()
        );

        let next = self.board.apply_move(&mv);
        self.board = next;
        self.move_history.push(mv);
        debug!(mv = %mv, fen = %self.board.to_fen(), "executed move");
    }

    /// Resolves a UI gesture (origin, destination, optional promotion choice)
    /// to one of the current legal moves.
    pub fn find_move(
        &self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, String> {
        find_legal_move(&self.board, from, to, promotion)
    }

    /// Parses and plays a move such as `e2e4` or `e7e8q`.
    pub fn execute_long_algebraic(&mut self, text: &str) -> Result<ChessMove, String> {
        let mv = long_algebraic_to_move(&self.board, text)?;
        self.execute_move(mv);
        Ok(mv)
    }

    pub fn is_current_player_king_in_check(&self) -> (bool, Coordinate) {
        self.board.is_king_in_check()
    }

    pub fn game_status(&self) -> GameStatus {
        self.board.game_status()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
