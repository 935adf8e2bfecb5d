use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rays::{ray, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn is_king_in_check(board: &BoardState, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True if any piece of `attacker_color` attacks `square`.
///
/// Works backwards from the target: a piece of kind K attacks `square`
/// exactly when a K standing on `square` would reach it.
pub fn is_square_attacked(board: &BoardState, square: Square, attacker_color: Color) -> bool {
    let is_attacker =
        |sq: Square, kind: PieceKind| board.piece_at(sq) == Some(Piece::new(kind, attacker_color));

    // Pawns attacking `square` sit where a defending pawn on `square` would attack.
    if pawn_attacks(attacker_color.opposite(), square).any(|sq| is_attacker(sq, PieceKind::Pawn)) {
        return true;
    }

    if knight_targets(square).any(|sq| is_attacker(sq, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|sq| is_attacker(sq, PieceKind::King)) {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&dir| {
            ray(square, dir)
                .find_map(|sq| board.piece_at(sq))
                .is_some_and(|piece| {
                    piece.color == attacker_color
                        && (piece.kind == kind || piece.kind == PieceKind::Queen)
                })
        })
    };

    slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop) || slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}
