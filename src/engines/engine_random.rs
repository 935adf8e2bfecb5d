//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used for diagnostics, match-harness
//! openings, and as the weakest opponent.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Random"
    }

    fn choose_move(&mut self, game_state: &GameState, _params: &GoParams) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.legal_moves();
        let picked = legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessError::GameOver(game_state.status()))?;

        Ok(EngineOutput {
            best_move: Some(picked),
            score: None,
            nodes: legal_moves.len() as u64,
            info_lines: vec![format!("random legal_moves {}", legal_moves.len())],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let game = GameState::new_game();
        let out = RandomEngine::new()
            .choose_move(&game, &GoParams::default())
            .expect("start position has moves");
        let picked = out.best_move.expect("a move is chosen");
        assert!(game.legal_moves().contains(&picked));
    }

    #[test]
    fn same_seed_same_choices() {
        let game = GameState::new_game();
        let mut a = RandomEngine::with_seed(11);
        let mut b = RandomEngine::with_seed(11);
        for _ in 0..10 {
            let left = a.choose_move(&game, &GoParams::default()).expect("moves exist");
            let right = b.choose_move(&game, &GoParams::default()).expect("moves exist");
            assert_eq!(left.best_move, right.best_move);
        }
    }

    #[test]
    fn no_moves_is_game_over() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(RandomEngine::with_seed(1)
            .choose_move(&game, &GoParams::default())
            .is_err());
    }
}
