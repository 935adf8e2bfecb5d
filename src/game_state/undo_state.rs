use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single history record for `make_move` / `unmake_move`.
///
/// Castling rights, en-passant target, and clocks cannot be recovered from
/// the move alone, so they are snapshotted before the move is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
