//! Pawn geometry. Attack reach (diagonals) is kept apart from push reach
//! because a pawn captures where it cannot move and moves where it cannot
//! capture.

use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |file_delta| square.offset(forward, file_delta))
}

/// Square one step ahead, if on the board.
#[inline]
pub fn pawn_push(color: Color, square: Square) -> Option<Square> {
    square.offset(color.forward(), 0)
}
