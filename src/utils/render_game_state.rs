//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the CLI.

use crate::game_state::board::Board;
use crate::game_state::coordinate::Coordinate;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..board.size() as i8).rev() {
        let label = char::from(b'1' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..board.size() as i8 {
            match board.piece_at(Coordinate::new(rank, file)) {
                Some(piece) => out.push(piece.unicode_glyph()),
                None => out.push('·'),
            }

            if file < board.size() as i8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
