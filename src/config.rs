//! Engine configuration.
//!
//! Loaded from a JSON file or string; every field has a default so a partial
//! file (or `{}`) is valid. Binaries layer CLI flags on top.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engines::engine_trait::GoParams;
use crate::errors::{ChessError, ChessResult};
use crate::search::board_scoring::ScorerKind;
use crate::search::minimax::SearchAlgorithm;

pub const DEFAULT_DEPTH: u8 = 3;
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub depth: u8,
    pub alpha_beta: bool,
    pub movetime_ms: Option<u64>,
    pub node_limit: Option<u64>,
    pub scorer: ScorerKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
            movetime_ms: None,
            node_limit: None,
            scorer: ScorerKind::default(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> ChessResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), depth = config.depth, "loaded engine config");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChessResult<()> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ChessError::Config(format!(
                "depth {} out of range 1..={MAX_DEPTH}",
                self.depth
            )));
        }
        if self.movetime_ms == Some(0) {
            return Err(ChessError::Config("movetime_ms must be positive".to_owned()));
        }
        if self.node_limit == Some(0) {
            return Err(ChessError::Config("node_limit must be positive".to_owned()));
        }
        Ok(())
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::from_alpha_beta(self.alpha_beta)
    }

    /// Request defaults; per-request values in `params` win.
    pub fn go_params(&self, params: &GoParams) -> GoParams {
        GoParams {
            depth: params.depth.or(Some(self.depth)),
            movetime_ms: params.movetime_ms.or(self.movetime_ms),
            node_limit: params.node_limit.or(self.node_limit),
        }
    }
}
