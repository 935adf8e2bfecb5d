use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{kingside_path, queenside_path, CastlePath};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, SpecialMove};

pub fn generate_king_moves(board: &BoardState, from: Square, king: Piece, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        match board.piece_at(to) {
            None => out.push(Move::quiet(from, to, king)),
            Some(target) if target.color != king.color => {
                out.push(Move::capture(from, to, king, target))
            }
            Some(_) => {}
        }
    }

    generate_castling_moves(board, from, king, out);
}

fn generate_castling_moves(board: &BoardState, king_from: Square, king: Piece, out: &mut Vec<Move>) {
    let side = king.color;
    let rights = board.castling_rights;
    if !rights.kingside(side) && !rights.queenside(side) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, side.opposite()) {
        return;
    }

    if rights.kingside(side) {
        let path = kingside_path(side);
        if castle_path_is_clear(board, king_from, king, &path) {
            out.push(Move {
                special: SpecialMove::CastleKingside,
                ..Move::quiet(path.king_from, path.king_to, king)
            });
        }
    }

    if rights.queenside(side) {
        let path = queenside_path(side);
        if castle_path_is_clear(board, king_from, king, &path) {
            out.push(Move {
                special: SpecialMove::CastleQueenside,
                ..Move::quiet(path.king_from, path.king_to, king)
            });
        }
    }
}

fn castle_path_is_clear(board: &BoardState, king_from: Square, king: Piece, path: &CastlePath) -> bool {
    let side = king.color;
    let rank = side.home_rank();

    king_from == path.king_from
        && board.piece_at(path.rook_from) == Some(Piece::new(PieceKind::Rook, side))
        && path
            .must_be_empty
            .iter()
            .all(|&file| board.is_empty(Square::at(rank, file)))
        && path
            .king_path
            .iter()
            .all(|&file| !is_square_attacked(board, Square::at(rank, file), side.opposite()))
}
