//! Configurable minimax engine: depth, pruning, and scorer come from
//! `EngineConfig`, with per-request overrides from `GoParams`.

use std::time::Duration;

use crate::config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::ScorerKind;
use crate::search::minimax::MinimaxSearch;
use crate::search::search_control::SearchControl;

pub struct MinimaxEngine {
    config: EngineConfig,
    search: MinimaxSearch<ScorerKind>,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        let search = MinimaxSearch::new(config.scorer, config.algorithm());
        Self { config, search }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Plum Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        if game_state.status().is_terminal() {
            return Err(ChessError::GameOver(game_state.status()));
        }

        let params = self.config.go_params(params);
        let depth = params.depth.unwrap_or(self.config.depth).max(1);

        let mut control = SearchControl::new();
        if let Some(ms) = params.movetime_ms {
            control = control.with_time_budget(Duration::from_millis(ms));
        }
        if let Some(nodes) = params.node_limit {
            control = control.with_node_limit(nodes);
        }

        let outcome = self.search.search(game_state.board(), depth, &control);

        // A stop before the first root move finished still has to play
        // something legal.
        let best_move = outcome
            .best_move
            .or_else(|| game_state.legal_moves().first().copied());

        Ok(EngineOutput {
            best_move,
            score: outcome.best_move.map(|_| outcome.score),
            nodes: outcome.nodes,
            info_lines: vec![format!(
                "depth {} nodes {} score {} completed {}",
                outcome.depth, outcome.nodes, outcome.score, outcome.completed
            )],
        })
    }
}
