//! Long algebraic move text (`e2e4`, `e7e8q`) resolved against a board.
//!
//! Moves are never built from text directly: the text only selects one of the
//! board's legal moves, so the result always carries correct capture and
//! special-move metadata.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinate::Coordinate;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::algebraic_to_coordinate;

/// Picks the legal move `from -> to`, using `promotion` to choose between
/// promotion variants.
pub fn find_legal_move(
    board: &Board,
    from: Coordinate,
    to: Coordinate,
    promotion: Option<PieceKind>,
) -> Result<ChessMove, String> {
    let candidates: Vec<&ChessMove> = board
        .legal_moves(from)
        .iter()
        .filter(|mv| mv.to == to)
        .collect();

    if candidates.is_empty() {
        return Err(format!("No legal move from {from} to {to}"));
    }

    let is_promotion = candidates.iter().any(|mv| mv.is_promotion());
    match (is_promotion, promotion) {
        (true, None) => Err(format!("Move {from}{to} requires a promotion piece")),
        (false, Some(kind)) => Err(format!("Move {from}{to} cannot promote to {kind:?}")),
        (_, wanted) => candidates
            .into_iter()
            .find(|mv| mv.promoted_piece.map(|p| p.kind) == wanted)
            .copied()
            .ok_or_else(|| format!("Move {from}{to} cannot promote to {wanted:?}")),
    }
}

pub fn long_algebraic_to_move(board: &Board, long_algebraic: &str) -> Result<ChessMove, String> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_coordinate(&long_algebraic[0..2]).map_err(|e| e.to_string())?;
    let to = algebraic_to_coordinate(&long_algebraic[2..4]).map_err(|e| e.to_string())?;

    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch)?),
    };

    find_legal_move(board, from, to, promotion)
}

fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    match ch {
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        _ => Err(format!("Invalid promotion piece: {ch}")),
    }
}
