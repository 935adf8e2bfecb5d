//! One-ply greedy engine.
//!
//! Plays every legal move, scores the resulting material from the mover's
//! point of view, and keeps the first strictly-best move. Mate beats any
//! material gain and stalemate scores zero.

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{MATE_SCORE, STALEMATE_SCORE};

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Plum Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState, _params: &GoParams) -> ChessResult<EngineOutput> {
        if game_state.status().is_terminal() {
            return Err(ChessError::GameOver(game_state.status()));
        }

        let mover = game_state.side_to_move();
        let turn = match mover {
            Color::Light => 1,
            Color::Dark => -1,
        };

        let mut probe = game_state.board().clone();
        let mut best = None;
        let mut best_score = i32::MIN;
        let mut nodes = 0u64;

        for &mv in game_state.legal_moves() {
            nodes += 1;
            let undo = make_move(&mut probe, mv);
            let score = if has_any_legal_move(&mut probe) {
                turn * MaterialScorer.score(&probe)
            } else if is_king_in_check(&probe, probe.side_to_move) {
                MATE_SCORE
            } else {
                STALEMATE_SCORE
            };
            unmake_move(&mut probe, &undo);

            if score > best_score {
                best_score = score;
                best = Some(mv);
            }
        }

        debug!(best = ?best.map(|mv| mv.to_string()), score = best_score, "greedy choice");
        Ok(EngineOutput {
            best_move: best,
            score: best.map(|_| turn * best_score),
            nodes,
            info_lines: vec![format!("greedy legal_moves {nodes} score {best_score}")],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choose(fen: &str) -> String {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        GreedyEngine::new()
            .choose_move(&game, &GoParams::default())
            .expect("game is not over")
            .best_move
            .expect("position has legal moves")
            .to_string()
    }

    #[test]
    fn captures_the_most_valuable_piece() {
        assert_eq!(choose("4k3/8/8/1r1q4/8/8/3R4/4K3 w - - 0 1"), "d2d5");
    }

    #[test]
    fn dark_maximizes_its_own_material() {
        assert_eq!(choose("4k3/3r4/8/8/1Q1R4/8/8/4K3 b - - 0 1"), "d7d4");
    }

    #[test]
    fn prefers_mate_over_material() {
        // Kxh1 wins a knight, Ra8 mates.
        assert_eq!(choose("6k1/5ppp/8/8/8/8/8/R5Kn w - - 0 1"), "a1a8");
    }

    #[test]
    fn first_of_equal_moves_wins() {
        let game = GameState::new_game();
        let out = GreedyEngine::new()
            .choose_move(&game, &GoParams::default())
            .expect("game is not over");
        assert_eq!(out.best_move, game.legal_moves().first().copied());
        assert_eq!(out.score, Some(0));
    }

    #[test]
    fn refuses_finished_games() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(matches!(
            GreedyEngine::new().choose_move(&game, &GoParams::default()),
            Err(ChessError::GameOver(_))
        ));
    }
}
