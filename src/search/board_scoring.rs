//! Pluggable board evaluation.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! `BoardScorer`. Scores are in centipawns from Light's point of view:
//! positive favors Light, negative favors Dark.

use serde::{Deserialize, Serialize};

use crate::game_state::{board_state::BoardState, chess_types::*};

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &BoardState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    /// Pawn 1, minor pieces 3, rook 5, queen 10, scaled to centipawns. The
    /// king is never captured so it carries no material weight.
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 1000,
            PieceKind::King => 0,
        }
    }

    #[inline]
    fn signed(color: Color, value: i32) -> i32 {
        match color {
            Color::Light => value,
            Color::Dark => -value,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &BoardState) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| Self::signed(piece.color, Self::piece_value(piece.kind)))
            .sum()
    }
}

/// Material plus small bonuses for central minor pieces and advanced pawns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// 0 on the rim, 3 on the four central squares.
    #[inline]
    fn centrality(square: Square) -> i32 {
        let rank_distance = (2 * square.rank() as i32 - 7).abs() / 2;
        let file_distance = (2 * square.file() as i32 - 7).abs() / 2;
        3 - rank_distance.max(file_distance)
    }

    fn placement_bonus(square: Square, piece: Piece) -> i32 {
        match piece.kind {
            PieceKind::Knight => 10 * Self::centrality(square),
            PieceKind::Bishop => 5 * Self::centrality(square),
            PieceKind::Pawn => {
                let advanced = (square.rank() as i32 - piece.color.pawn_start_rank() as i32).abs();
                let central_file = if (2..=5).contains(&square.file()) { 2 } else { 1 };
                advanced * 3 * central_file
            }
            _ => 0,
        }
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &BoardState) -> i32 {
        let material = MaterialScorer.score(board);
        let placement: i32 = board
            .pieces()
            .map(|(sq, piece)| MaterialScorer::signed(piece.color, Self::placement_bonus(sq, piece)))
            .sum();
        material + placement
    }
}

/// Scorer selection that can live in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    Material,
    #[default]
    Positional,
}

impl BoardScorer for ScorerKind {
    fn score(&self, board: &BoardState) -> i32 {
        match self {
            ScorerKind::Material => MaterialScorer.score(board),
            ScorerKind::Positional => PositionalScorer.score(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let board = BoardState::new_game();
        assert_eq!(MaterialScorer.score(&board), 0);
        assert_eq!(PositionalScorer.score(&board), 0);
    }

    #[test]
    fn material_is_light_minus_dark() {
        let board = BoardState::from_fen("3qk3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&board), 500 - 1000);
        assert_eq!(ScorerKind::Material.score(&board), -500);
    }

    #[test]
    fn central_knight_beats_rim_knight() {
        let center = BoardState::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let rim = BoardState::from_fen("4k3/8/8/8/N7/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(PositionalScorer.score(&center) > PositionalScorer.score(&rim));
    }

    #[test]
    fn positional_bonuses_mirror_between_colors() {
        let light = BoardState::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let dark = BoardState::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(PositionalScorer.score(&light), -PositionalScorer.score(&dark));
    }
}
