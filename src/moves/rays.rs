//! Sliding-piece ray directions.

use std::iter::successors;

use crate::game_state::chess_types::{PieceKind, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, -1), (0, 1), (-1, 0)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

/// Ray directions for a slider, empty for non-sliders.
#[inline]
pub const fn slider_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Squares from `square` (exclusive) to the board edge along one direction.
#[inline]
pub fn ray(square: Square, (rank_delta, file_delta): (i8, i8)) -> impl Iterator<Item = Square> {
    successors(square.offset(rank_delta, file_delta), move |sq| {
        sq.offset(rank_delta, file_delta)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_runs_to_the_edge() {
        let squares: Vec<String> = ray(Square::at(0, 0), (1, 1)).map(|sq| sq.to_string()).collect();
        assert_eq!(squares, vec!["b2", "c3", "d4", "e5", "f6", "g7", "h8"]);
        assert_eq!(ray(Square::at(7, 3), (1, 0)).count(), 0);
    }

    #[test]
    fn queen_covers_both_slider_sets() {
        assert_eq!(slider_directions(PieceKind::Queen).len(), 8);
        assert!(slider_directions(PieceKind::Knight).is_empty());
    }
}
