//! Grid coordinates.
//!
//! `x` is the rank index (0 = rank 1) and `y` the file index (0 = a-file).
//! Coordinates are allowed to point off the board; callers check
//! [`Coordinate::is_valid`] before indexing.

use std::fmt;

use crate::utils::algebraic::coordinate_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    /// "No such square."
    pub const NONE: Coordinate = Coordinate { x: -1, y: -1 };

    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn is_valid(self, board_size: usize) -> bool {
        self.x >= 0 && (self.x as usize) < board_size && self.y >= 0 && (self.y as usize) < board_size
    }

    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::NONE
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match coordinate_to_algebraic(*self) {
            Ok(square) => f.write_str(&square),
            Err(_) => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
