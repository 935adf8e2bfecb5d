use crate::game_state::chess_types::Square;

/// The eight L-shaped `(rank, file)` jumps, in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(rank_delta, file_delta)| square.offset(rank_delta, file_delta))
}
