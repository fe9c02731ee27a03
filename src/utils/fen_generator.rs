use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::coordinate_to_algebraic;

pub fn generate_fen(board: &Board) -> String {
    let placement = generate_board_field(board);
    let side_to_move = match board.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(board.castling_rights());
    let en_passant = board
        .en_passant()
        .and_then(|square| coordinate_to_algebraic(square).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        board.halfmove_clock(),
        board.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();
    let squares = board.squares();

    for rank in (0..board.size()).rev() {
        let mut empty_count = 0u8;

        for square in &squares[rank] {
            match square {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_symbol());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = CASTLING_FEN_ORDER
        .iter()
        .filter(|(_, bit)| rights & bit != 0)
        .map(|(letter, _)| *letter)
        .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    const CANONICAL_FENS: [&str; 7] = [
        STARTING_POSITION_FEN,
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/8/8/8/8/4K2R w K - 37 81",
    ];

    #[test]
    fn round_trip_canonical_fens() {
        for fen in CANONICAL_FENS {
            let parsed = parse_fen(fen).expect("canonical FEN should parse");
            let generated = generate_fen(&parsed);
            assert_eq!(generated, fen);

            let reparsed = parse_fen(&generated).expect("generated FEN should parse");
            assert_eq!(reparsed, parsed);
        }
    }

    #[test]
    fn empty_board_collapses_runs() {
        assert_eq!(generate_fen(&Board::empty()), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn castling_letters_follow_fixed_order() {
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w qkQ - 0 1").expect("FEN should parse");
        assert_eq!(generate_fen(&board), "r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
    }
}
