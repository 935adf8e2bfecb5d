use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &BoardState, from: Square, knight: Piece, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        match board.piece_at(to) {
            None => out.push(Move::quiet(from, to, knight)),
            Some(target) if target.color != knight.color => {
                out.push(Move::capture(from, to, knight, target))
            }
            Some(_) => {}
        }
    }
}
