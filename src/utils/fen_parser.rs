//! FEN-to-Board parser.
//!
//! Strict by default: all six fields must be present and well formed.
//! [`parse_fen_lenient`] additionally accepts truncated strings (for example a
//! bare piece placement) and fills the missing trailing fields with defaults.

use tracing::debug;

use crate::errors::FenError;
use crate::game_state::board::{Board, Squares};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::game_state::coordinate::Coordinate;
use crate::utils::algebraic::algebraic_to_coordinate;

const FEN_FIELD_COUNT: usize = 6;

/// Defaults for fields 2..=6 when parsing leniently.
const DEFAULT_TRAILING_FIELDS: [&str; 5] = ["w", "-", "-", "0", "1"];

pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != FEN_FIELD_COUNT {
        let err = FenError::WrongFieldCount(fields.len());
        debug!(fen, %err, "rejected FEN");
        return Err(err);
    }

    parse_fields(&fields).inspect_err(|err| debug!(fen, %err, "rejected FEN"))
}

/// Like [`parse_fen`], but missing trailing fields default to `w - - 0 1`.
pub fn parse_fen_lenient(fen: &str) -> Result<Board, FenError> {
    let mut fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.is_empty() || fields.len() > FEN_FIELD_COUNT {
        return Err(FenError::WrongFieldCount(fields.len()));
    }

    let present = fields.len();
    fields.extend_from_slice(&DEFAULT_TRAILING_FIELDS[present - 1..]);
    parse_fields(&fields)
}

fn parse_fields(fields: &[&str]) -> Result<Board, FenError> {
    let squares = parse_board(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castling_rights = parse_castling_rights(fields[2])?;
    let en_passant = parse_en_passant_square(fields[3])?;
    let halfmove_clock = parse_counter(fields[4], 0)
        .ok_or_else(|| FenError::InvalidHalfmoveClock(fields[4].to_owned()))?;
    let fullmove_number = parse_counter(fields[5], 1)
        .ok_or_else(|| FenError::InvalidFullmoveNumber(fields[5].to_owned()))?;

    Ok(Board::new(
        squares,
        side_to_move,
        castling_rights,
        en_passant,
        halfmove_clock,
        fullmove_number,
    ))
}

fn parse_board(board_part: &str) -> Result<Squares, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    let mut squares: Squares = [[None; BOARD_SIZE]; BOARD_SIZE];

    // FEN lists rank 8 first.
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = BOARD_SIZE - 1 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if ch.is_ascii_digit() {
                let step = ch.to_digit(10).unwrap_or(0) as usize;
                if !(1..=BOARD_SIZE).contains(&step) {
                    return Err(FenError::InvalidEmptyRun(ch));
                }
                file += step;
                if file > BOARD_SIZE {
                    return Err(FenError::RankTooLong { rank: board_rank + 1 });
                }
                continue;
            }

            let piece = Piece::from_fen_symbol(ch).ok_or(FenError::InvalidPieceChar(ch))?;
            if file >= BOARD_SIZE {
                return Err(FenError::RankTooLong { rank: board_rank + 1 });
            }

            squares[board_rank][file] = Some(piece);
            file += 1;
        }

        if file != BOARD_SIZE {
            return Err(FenError::RankTooShort {
                rank: board_rank + 1,
                files: file,
            });
        }
    }

    Ok(squares)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let invalid = || FenError::InvalidCastling(castling_part.to_owned());
    if castling_part.is_empty() || castling_part.len() > CASTLING_FEN_ORDER.len() {
        return Err(invalid());
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        let bit = CASTLING_FEN_ORDER
            .iter()
            .find(|(letter, _)| *letter == ch)
            .map(|(_, bit)| *bit)
            .ok_or_else(invalid)?;
        if rights & bit != 0 {
            return Err(invalid());
        }
        rights |= bit;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Coordinate>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_coordinate(en_passant_part)?))
}

/// Non-negative decimal counter no smaller than `min`.
fn parse_counter(text: &str, min: u32) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>().ok().filter(|value| *value >= min)
}

#[cfg(test)]
mod tests {
    use super::{parse_fen, parse_fen_lenient};
    use crate::errors::FenError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::coordinate::Coordinate;

    #[test]
    fn parse_starting_fen() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CASTLE_ALL);
        assert_eq!(board.en_passant(), None);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(board.halfmove_clock(), 0);
        assert_eq!(
            board.piece_at(Coordinate::new(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(Coordinate::new(0, 0)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
    }

    #[test]
    fn parses_en_passant_and_counters() {
        let board = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .expect("FEN should parse");
        assert_eq!(board.en_passant(), Some(Coordinate::new(5, 3)));
        assert_eq!(board.fullmove_number(), 3);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0"),
            Err(FenError::WrongFieldCount(5))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 x"),
            Err(FenError::WrongFieldCount(7))
        );
        assert_eq!(parse_fen(""), Err(FenError::WrongFieldCount(0)));
    }

    #[test]
    fn rejects_bad_placement() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::WrongRankCount(7))
        );
        assert!(matches!(
            parse_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::RankTooLong { rank: 7 })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1"),
            Err(FenError::RankTooShort { rank: 1, files: 7 })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidEmptyRun('9'))
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::RankTooShort { rank: 6, files: 7 })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/7x/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPieceChar('x'))
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/5p3/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::RankTooLong { rank: 6 })
        ));
    }

    #[test]
    fn rejects_bad_side_and_castling() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K2k W - - 0 1"),
            Err(FenError::InvalidSideToMove(_))
        ));
        for castling in ["KK", "KQkqK", "X", "kqKQx"] {
            let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R w {castling} - 0 1");
            assert!(
                matches!(parse_fen(&fen), Err(FenError::InvalidCastling(_))),
                "castling field {castling:?} should be rejected"
            );
        }
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w qK - 0 1").expect("unordered rights parse");
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
    }

    #[test]
    fn rejects_bad_en_passant_and_counters() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1"),
            Err(FenError::InvalidEnPassant(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - x 0 1"),
            Err(FenError::InvalidEnPassant(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - -1 1"),
            Err(FenError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - a 1"),
            Err(FenError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 0"),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1.5"),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
    }

    #[test]
    fn lenient_fills_missing_fields() {
        let board = parse_fen_lenient("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .expect("placement-only FEN should parse leniently");
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), 0);
        assert_eq!(board.fullmove_number(), 1);

        let board = parse_fen_lenient("4k3/8/8/8/8/8/8/4K3 b").expect("two fields should parse");
        assert_eq!(board.side_to_move(), Color::Black);

        assert!(parse_fen_lenient("4k3/8/8/8/8/8/8/4K3 x").is_err());
        assert!(parse_fen_lenient("").is_err());
    }
}
