//! Error types for input parsing.
//!
//! Only parsing is fallible at runtime. Out-of-bounds or empty-square move
//! queries return empty move lists, and internal invariant violations are
//! treated as programmer errors (`debug_assert!`).

use std::error::Error;
use std::fmt;

/// Failure converting a two-character algebraic square such as `e4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgebraicError {
    WrongLength(String),
    InvalidFile(char),
    InvalidRank(char),
    OffBoard { x: i8, y: i8 },
}

impl fmt::Display for AlgebraicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraicError::WrongLength(s) => write!(f, "invalid algebraic square: {s:?}"),
            AlgebraicError::InvalidFile(c) => write!(f, "invalid algebraic file: {c:?}"),
            AlgebraicError::InvalidRank(c) => write!(f, "invalid algebraic rank: {c:?}"),
            AlgebraicError::OffBoard { x, y } => {
                write!(f, "coordinate ({x}, {y}) is outside the board")
            }
        }
    }
}

impl Error for AlgebraicError {}

/// Reasons a FEN string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    WrongFieldCount(usize),
    WrongRankCount(usize),
    RankTooLong { rank: usize },
    RankTooShort { rank: usize, files: usize },
    InvalidEmptyRun(char),
    InvalidPieceChar(char),
    InvalidSideToMove(String),
    InvalidCastling(String),
    InvalidEnPassant(AlgebraicError),
    InvalidHalfmoveClock(String),
    InvalidFullmoveNumber(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount(n) => write!(f, "FEN must have 6 fields, found {n}"),
            FenError::WrongRankCount(n) => {
                write!(f, "board layout must contain 8 ranks, found {n}")
            }
            FenError::RankTooLong { rank } => {
                write!(f, "FEN rank {rank} has more than 8 files")
            }
            FenError::RankTooShort { rank, files } => {
                write!(f, "FEN rank {rank} has {files} files, expected 8")
            }
            FenError::InvalidEmptyRun(c) => write!(f, "invalid empty-square count {c:?}"),
            FenError::InvalidPieceChar(c) => {
                write!(f, "invalid piece character {c:?} in board layout")
            }
            FenError::InvalidSideToMove(s) => write!(f, "invalid side-to-move field: {s:?}"),
            FenError::InvalidCastling(s) => write!(f, "invalid castling field: {s:?}"),
            FenError::InvalidEnPassant(e) => write!(f, "invalid en-passant field: {e}"),
            FenError::InvalidHalfmoveClock(s) => write!(f, "invalid halfmove clock: {s:?}"),
            FenError::InvalidFullmoveNumber(s) => write!(f, "invalid fullmove number: {s:?}"),
        }
    }
}

impl Error for FenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FenError::InvalidEnPassant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AlgebraicError> for FenError {
    fn from(value: AlgebraicError) -> Self {
        FenError::InvalidEnPassant(value)
    }
}
