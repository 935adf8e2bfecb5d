//! Canonical chess-rule constants.
//!
//! Starting position and the fixed squares involved in castling.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_FILE: u8 = 4;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

/// Squares touched by one castling move for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must be empty between king and rook.
    pub must_be_empty: &'static [u8],
    /// Files the king crosses or lands on; none may be attacked.
    pub king_path: [u8; 2],
}

pub const fn kingside_path(color: Color) -> CastlePath {
    let rank = color.home_rank();
    CastlePath {
        king_from: Square::at(rank, KING_HOME_FILE),
        king_to: Square::at(rank, 6),
        rook_from: Square::at(rank, KINGSIDE_ROOK_FILE),
        rook_to: Square::at(rank, 5),
        must_be_empty: &[5, 6],
        king_path: [5, 6],
    }
}

pub const fn queenside_path(color: Color) -> CastlePath {
    let rank = color.home_rank();
    CastlePath {
        king_from: Square::at(rank, KING_HOME_FILE),
        king_to: Square::at(rank, 2),
        rook_from: Square::at(rank, QUEENSIDE_ROOK_FILE),
        rook_to: Square::at(rank, 3),
        must_be_empty: &[1, 2, 3],
        king_path: [3, 2],
    }
}
