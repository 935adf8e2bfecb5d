use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, SpecialMove};
use crate::moves::pawn_moves::{pawn_attacks, pawn_push};

pub fn generate_pawn_moves(board: &BoardState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let side = pawn.color;

    if let Some(to) = pawn_push(side, from).filter(|sq| board.is_empty(*sq)) {
        push_with_promotions(from, to, pawn, None, out);

        if from.rank() == side.pawn_start_rank() {
            if let Some(two_step) = pawn_push(side, to).filter(|sq| board.is_empty(*sq)) {
                out.push(Move {
                    special: SpecialMove::DoublePawnPush,
                    ..Move::quiet(from, two_step, pawn)
                });
            }
        }
    }

    for to in pawn_attacks(side, from) {
        if let Some(victim) = board.piece_of(to, side.opposite()) {
            push_with_promotions(from, to, pawn, Some(victim), out);
        } else if board.en_passant_target == Some(to) {
            // The captured pawn sits beside the mover, not on the target.
            let victim = board
                .piece_of(Square::at(from.rank(), to.file()), side.opposite())
                .filter(|piece| piece.kind == PieceKind::Pawn);
            if let Some(victim) = victim {
                out.push(Move {
                    from,
                    to,
                    piece: pawn,
                    captured: Some(victim),
                    special: SpecialMove::EnPassant,
                });
            }
        }
    }
}

fn push_with_promotions(
    from: Square,
    to: Square,
    pawn: Piece,
    captured: Option<Piece>,
    out: &mut Vec<Move>,
) {
    if to.rank() == pawn.color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move {
                from,
                to,
                piece: pawn,
                captured,
                special: SpecialMove::Promotion(kind),
            });
        }
    } else {
        out.push(Move {
            from,
            to,
            piece: pawn,
            captured,
            special: SpecialMove::None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_passant_needs_a_pawn_beside_the_mover() {
        let mut board = BoardState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let e5 = Square::at(4, 4);
        let pawn = Piece::new(PieceKind::Pawn, Color::Light);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, e5, pawn, &mut moves);
        assert!(moves.iter().any(|mv| mv.special == SpecialMove::EnPassant));

        // Target left set with the d5 pawn gone.
        board.set_piece(Square::at(4, 3), None);
        moves.clear();
        generate_pawn_moves(&board, e5, pawn, &mut moves);
        assert!(moves.iter().all(|mv| mv.special != SpecialMove::EnPassant));
    }
}
