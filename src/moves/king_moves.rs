use crate::game_state::chess_types::Square;

/// The eight adjacent `(rank, file)` steps, in generation order.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(rank_delta, file_delta)| square.offset(rank_delta, file_delta))
}
