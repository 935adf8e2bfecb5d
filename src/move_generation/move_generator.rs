use crate::game_state::board_state::BoardState;
use crate::moves::move_descriptions::Move;

/// Source of legal moves for the side to move.
///
/// Implementations must return moves in a deterministic order so searches
/// and recorded games are reproducible.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &BoardState) -> Vec<Move>;
}
