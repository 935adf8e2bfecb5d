use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::moves::rays::{ray, slider_directions};

/// Bishop, rook, and queen moves. Each ray stops at the first occupied
/// square, which is included only when it holds an enemy piece.
pub fn generate_slider_moves(board: &BoardState, from: Square, slider: Piece, out: &mut Vec<Move>) {
    for &direction in slider_directions(slider.kind) {
        for to in ray(from, direction) {
            match board.piece_at(to) {
                None => out.push(Move::quiet(from, to, slider)),
                Some(target) => {
                    if target.color != slider.color {
                        out.push(Move::capture(from, to, slider, target));
                    }
                    break;
                }
            }
        }
    }
}
