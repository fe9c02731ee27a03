//! Move record.
//!
//! A `ChessMove` carries everything needed to apply one ply to a board:
//! origin, destination, the moving piece, what (if anything) it captured,
//! the promotion result, and the two special-move flags.

use std::fmt;

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::utils::algebraic::coordinate_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub piece_moved: Piece,
    /// For en passant this is the pawn behind `to`, not the (empty) `to` square.
    pub captured_piece: Option<Piece>,
    /// Always the mover's color when set.
    pub promoted_piece: Option<Piece>,
    pub was_en_passant: bool,
    pub was_castle: bool,
}

impl ChessMove {
    /// A plain move or capture.
    #[inline]
    pub const fn new(
        from: Coordinate,
        to: Coordinate,
        piece_moved: Piece,
        captured_piece: Option<Piece>,
    ) -> Self {
        Self {
            from,
            to,
            piece_moved,
            captured_piece,
            promoted_piece: None,
            was_en_passant: false,
            was_castle: false,
        }
    }

    #[inline]
    pub const fn en_passant(from: Coordinate, to: Coordinate, pawn: Piece, captured: Piece) -> Self {
        Self {
            from,
            to,
            piece_moved: pawn,
            captured_piece: Some(captured),
            promoted_piece: None,
            was_en_passant: true,
            was_castle: false,
        }
    }

    #[inline]
    pub const fn castle(from: Coordinate, to: Coordinate, king: Piece) -> Self {
        Self {
            from,
            to,
            piece_moved: king,
            captured_piece: None,
            promoted_piece: None,
            was_en_passant: false,
            was_castle: true,
        }
    }

    /// Same move, promoting to `kind` in the mover's color.
    #[inline]
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promoted_piece: Some(Piece::new(kind, self.piece_moved.color)),
            ..self
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted_piece.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.is_kind(PieceKind::Pawn) && (self.to.x - self.from.x).abs() == 2
    }

    /// Long algebraic form, e.g. `e2e4` or `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&coordinate_to_algebraic(self.from).unwrap_or_else(|_| "--".to_owned()));
        out.push_str(&coordinate_to_algebraic(self.to).unwrap_or_else(|_| "--".to_owned()));
        if let Some(promoted) = self.promoted_piece {
            out.push(promoted.kind.fen_letter().to_ascii_lowercase());
        }
        out
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::coordinate::Coordinate;

    #[test]
    fn promotion_takes_mover_color() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let mv = ChessMove::new(Coordinate::new(1, 0), Coordinate::new(0, 0), pawn, None)
            .with_promotion(PieceKind::Knight);
        assert_eq!(mv.promoted_piece, Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(mv.to_long_algebraic(), "a2a1n");
    }

    #[test]
    fn double_push_detection() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let push = ChessMove::new(Coordinate::new(1, 4), Coordinate::new(3, 4), pawn, None);
        let single = ChessMove::new(Coordinate::new(1, 4), Coordinate::new(2, 4), pawn, None);
        assert!(push.is_double_pawn_push());
        assert!(!single.is_double_pawn_push());
        assert_eq!(push.to_string(), "e2e4");
    }
}
