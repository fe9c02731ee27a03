//! Immutable board snapshot.
//!
//! A `Board` is never changed after construction: [`Board::apply_move`]
//! returns a fresh board. This is what allows legal moves to be memoized per
//! origin square for the lifetime of the instance, and makes hypothetical
//! "play it and see if the king hangs" checks free of any undo bookkeeping.

use std::fmt;
use std::sync::OnceLock;

use crate::errors::FenError;
use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::coordinate::Coordinate;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_square_attacked, king_in_check, king_square};
use crate::move_generation::legal_move_generator::{legal_moves_from, pseudo_legal_moves};
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_board;

pub type Squares = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Clone)]
pub struct Board {
    squares: Squares,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Coordinate>,
    halfmove_clock: u32,
    fullmove_number: u32,

    // Filled lazily by `legal_moves`; valid forever because the position never changes.
    legal_move_cache: [[OnceLock<Vec<ChessMove>>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Builds a board from an explicit piece grid indexed `[rank][file]`.
    pub fn new(
        squares: Squares,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant: Option<Coordinate>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        Self {
            squares,
            side_to_move,
            castling_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
            legal_move_cache: Default::default(),
        }
    }

    /// A board with no pieces, White to move, no rights.
    pub fn empty() -> Self {
        Self::new([[None; BOARD_SIZE]; BOARD_SIZE], Color::White, 0, None, 0, 1)
    }

    pub fn starting_position() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn squares(&self) -> &Squares {
        &self.squares
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Coordinate> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn is_coordinate_safe(&self, square: Coordinate) -> bool {
        square.is_valid(BOARD_SIZE)
    }

    /// Piece on `square`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Coordinate) -> Option<Piece> {
        if !self.is_coordinate_safe(square) {
            return None;
        }
        self.squares[square.x as usize][square.y as usize]
    }

    /// True for on-board squares without a piece.
    #[inline]
    pub fn is_square_empty(&self, square: Coordinate) -> bool {
        self.is_coordinate_safe(square) && self.squares[square.x as usize][square.y as usize].is_none()
    }

    /// All occupied squares, rank by rank from a1.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(x, rank)| {
            rank.iter().enumerate().filter_map(move |(y, square)| {
                square.map(|piece| (Coordinate::new(x as i8, y as i8), piece))
            })
        })
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        king_square(self, color)
    }

    /// Moves obeying piece movement rules, ignoring self-check.
    ///
    /// Empty for off-board squares, empty squares and the opponent's pieces.
    pub fn pseudo_legal_moves(&self, from: Coordinate) -> Vec<ChessMove> {
        pseudo_legal_moves(self, from, true)
    }

    /// Legal moves of the piece on `from`, memoized for this board.
    pub fn legal_moves(&self, from: Coordinate) -> &[ChessMove] {
        if !self.is_coordinate_safe(from) {
            return &[];
        }
        self.legal_move_cache[from.x as usize][from.y as usize]
            .get_or_init(|| legal_moves_from(self, from))
            .as_slice()
    }

    /// Every legal move for the side to move.
    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        let side = self.side_to_move;
        let origins: Vec<Coordinate> = self
            .pieces()
            .filter(|(_, piece)| piece.color == side)
            .map(|(square, _)| square)
            .collect();

        origins
            .into_iter()
            .flat_map(|square| self.legal_moves(square).iter().copied())
            .collect()
    }

    pub fn has_legal_move(&self) -> bool {
        let side = self.side_to_move;
        self.pieces()
            .filter(|(_, piece)| piece.color == side)
            .any(|(square, _)| !self.legal_moves(square).is_empty())
    }

    /// Returns the position after `mv`. `self` is left untouched.
    #[inline]
    pub fn apply_move(&self, mv: &ChessMove) -> Board {
        apply_move(self, mv)
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Coordinate, by: Color) -> bool {
        is_square_attacked(self, square, by)
    }

    /// Square of the side to move's king if it is attacked.
    #[inline]
    pub fn king_in_check(&self) -> Option<Coordinate> {
        king_in_check(self, self.side_to_move)
    }

    /// `(in_check, king_square)`; the square is [`Coordinate::NONE`] when not in check.
    pub fn is_king_in_check(&self) -> (bool, Coordinate) {
        match self.king_in_check() {
            Some(square) => (true, square),
            None => (false, Coordinate::NONE),
        }
    }

    pub fn game_status(&self) -> GameStatus {
        if self.has_legal_move() {
            GameStatus::Running
        } else if self.king_in_check().is_some() {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("fen", &self.to_fen())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
