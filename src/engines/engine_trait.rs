//! Engine abstraction used by the terminal driver and the match harness.
//!
//! Defines common request parameters and output payloads so different
//! move-selection strategies can be swapped at runtime behind one trait.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub node_limit: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Light-relative score, when the engine computes one.
    pub score: Option<i32>,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for the side to move. Fails with `GameOver` when the
    /// game has already ended.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput>;
}
