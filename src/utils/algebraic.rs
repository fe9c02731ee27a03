//! Conversions between algebraic squares (`e4`) and board coordinates.
//!
//! Reused by the FEN codec (en-passant field), long algebraic move notation
//! and `Display` for [`Coordinate`].

use crate::errors::AlgebraicError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::coordinate::Coordinate;

/// Convert algebraic notation (for example: "e4") to a coordinate.
pub fn algebraic_to_coordinate(square: &str) -> Result<Coordinate, AlgebraicError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(AlgebraicError::WrongLength(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(AlgebraicError::InvalidFile(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(AlgebraicError::InvalidRank(rank as char));
    }

    Ok(Coordinate::new((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert a coordinate to algebraic notation (for example: "e4").
pub fn coordinate_to_algebraic(coordinate: Coordinate) -> Result<String, AlgebraicError> {
    if !coordinate.is_valid(BOARD_SIZE) {
        return Err(AlgebraicError::OffBoard {
            x: coordinate.x,
            y: coordinate.y,
        });
    }

    let file_char = char::from(b'a' + coordinate.y as u8);
    let rank_char = char::from(b'1' + coordinate.x as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_coordinate, coordinate_to_algebraic};
    use crate::errors::AlgebraicError;
    use crate::game_state::coordinate::Coordinate;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_coordinate("a1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(algebraic_to_coordinate("h8"), Ok(Coordinate::new(7, 7)));
        assert_eq!(algebraic_to_coordinate("e4"), Ok(Coordinate::new(3, 4)));
        assert_eq!(coordinate_to_algebraic(Coordinate::new(3, 4)).as_deref(), Ok("e4"));
        assert_eq!(coordinate_to_algebraic(Coordinate::new(5, 1)).as_deref(), Ok("b6"));
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(matches!(
            algebraic_to_coordinate("e"),
            Err(AlgebraicError::WrongLength(_))
        ));
        assert!(matches!(
            algebraic_to_coordinate("e44"),
            Err(AlgebraicError::WrongLength(_))
        ));
        assert_eq!(algebraic_to_coordinate("i4"), Err(AlgebraicError::InvalidFile('i')));
        assert_eq!(algebraic_to_coordinate("e9"), Err(AlgebraicError::InvalidRank('9')));
        assert_eq!(algebraic_to_coordinate("e0"), Err(AlgebraicError::InvalidRank('0')));
        assert_eq!(algebraic_to_coordinate("4e"), Err(AlgebraicError::InvalidFile('4')));
        assert!(coordinate_to_algebraic(Coordinate::NONE).is_err());
    }
}
