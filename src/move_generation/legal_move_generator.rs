//! Full legal move generation pipeline.
//!
//! Dispatches each piece of the side to move to its movement rule, then
//! filters out candidates that leave the mover's king attacked by making and
//! unmaking each one. Pins, discovered checks, double checks, and en-passant
//! discoveries all fall out of the same filter.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::generate_slider_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

/// Pseudo-legal movement rule for one piece kind.
pub type PieceMoveRule = fn(&BoardState, Square, Piece, &mut Vec<Move>);

/// Indexed by [`PieceKind::index`].
pub const PIECE_MOVE_RULES: [PieceMoveRule; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_slider_moves,
    generate_slider_moves,
    generate_slider_moves,
    generate_king_moves,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &BoardState) -> Vec<Move> {
        generate_legal_moves(board)
    }
}

/// Candidate moves for the side to move, in board-scan order.
pub fn generate_pseudo_legal_moves(board: &BoardState, out: &mut Vec<Move>) {
    let side = board.side_to_move;
    for (from, piece) in board.pieces() {
        if piece.color == side {
            PIECE_MOVE_RULES[piece.kind.index()](board, from, piece, out);
        }
    }
}

pub fn generate_legal_moves(board: &BoardState) -> Vec<Move> {
    let mut probe = board.clone();
    generate_legal_moves_in_place(&mut probe)
}

/// Same as [`generate_legal_moves`] but reuses the caller's board for the
/// make/unmake probe. The board is unchanged on return.
pub fn generate_legal_moves_in_place(board: &mut BoardState) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(64);
    generate_pseudo_legal_moves(board, &mut pseudo);

    let side = board.side_to_move;
    pseudo.retain(|&mv| {
        let undo = make_move(board, mv);
        let leaves_king_attacked = is_king_in_check(board, side);
        unmake_move(board, &undo);
        !leaves_king_attacked
    });
    pseudo
}

/// Stops at the first legal move. Used to detect mate and stalemate at
/// search leaves without building the full list.
pub fn has_any_legal_move(board: &mut BoardState) -> bool {
    let mut pseudo = Vec::<Move>::with_capacity(64);
    generate_pseudo_legal_moves(board, &mut pseudo);

    let side = board.side_to_move;
    pseudo.into_iter().any(|mv| {
        let undo = make_move(board, mv);
        let legal = !is_king_in_check(board, side);
        unmake_move(board, &undo);
        legal
    })
}
