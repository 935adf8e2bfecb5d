//! Long algebraic move text (`e2e4`, `e7e8q`, `e1g1`).
//!
//! Parsing resolves text against a legal move list rather than building a
//! move from scratch, so flags like en passant and castling come from the
//! generator.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

#[inline]
pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

/// Find the legal move named by `long_algebraic`.
///
/// Fails with `InvalidAlgebraic` when the text is malformed and with
/// `IllegalMove` when it names no move in `legal_moves`.
pub fn long_algebraic_to_move(long_algebraic: &str, legal_moves: &[Move]) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.chars().nth(4) {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    legal_moves
        .iter()
        .copied()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion() == promotion)
        .ok_or_else(|| ChessError::IllegalMove {
            mv: text.to_owned(),
        })
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessError::InvalidAlgebraic(format!(
            "invalid promotion piece character: {ch}"
        ))),
    }
}
