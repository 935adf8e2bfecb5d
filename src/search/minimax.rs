//! Fixed-depth minimax with optional alpha-beta pruning.
//!
//! Scores are from Light's point of view; Light maximizes and Dark
//! minimizes. The search works on a private copy of the board with strict
//! make/unmake pairs, so the caller's board is never touched.
//!
//! Root tie-break: the first move in generator order that reaches the best
//! score wins. A later move replaces it only with a strictly better score,
//! which is also why alpha-beta picks the same move as plain minimax: a
//! pruned sibling can only report a bound no better than the current best.

use std::time::Instant;

use tracing::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves_in_place, has_any_legal_move,
};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;
use crate::search::search_control::SearchControl;

/// Score of being checkmated at the root. Mates found `ply` moves deep score
/// `MATE_SCORE - ply` so shorter mates are preferred.
pub const MATE_SCORE: i32 = 1_000_000;
pub const STALEMATE_SCORE: i32 = 0;
const INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl SearchAlgorithm {
    pub fn from_alpha_beta(enabled: bool) -> Self {
        if enabled {
            SearchAlgorithm::AlphaBeta
        } else {
            SearchAlgorithm::Minimax
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best fully-searched root move; `None` if stopped before the first
    /// root move finished or the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
    pub depth: u8,
    /// False when a stop condition cut the search short.
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct MinimaxSearch<S: BoardScorer> {
    scorer: S,
    algorithm: SearchAlgorithm,
}

struct SearchContext<'a> {
    control: &'a SearchControl,
    nodes: u64,
    aborted: bool,
}

impl<S: BoardScorer> MinimaxSearch<S> {
    pub fn new(scorer: S, algorithm: SearchAlgorithm) -> Self {
        Self { scorer, algorithm }
    }

    #[inline]
    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    #[inline]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Pick a move for the side to move of a non-terminal game.
    pub fn choose_move(&self, game: &GameState, depth: u8) -> ChessResult<Move> {
        if game.status().is_terminal() {
            return Err(ChessError::GameOver(game.status()));
        }
        self.search(game.board(), depth, &SearchControl::new())
            .best_move
            .ok_or(ChessError::GameOver(game.status()))
    }

    /// Search `board` to `depth` plies (at least one) under `control`.
    pub fn search(&self, board: &BoardState, depth: u8, control: &SearchControl) -> SearchOutcome {
        let started = Instant::now();
        let depth = depth.max(1);
        let mut probe = board.clone();
        let mut ctx = SearchContext {
            control,
            nodes: 0,
            aborted: false,
        };

        let maximizing = probe.side_to_move == Color::Light;
        let root_moves = generate_legal_moves_in_place(&mut probe);

        let mut best_move = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;

        for mv in root_moves {
            let undo = make_move(&mut probe, mv);
            let score = self.minimax(&mut probe, depth - 1, 1, alpha, beta, &mut ctx);
            unmake_move(&mut probe, &undo);

            if ctx.aborted {
                debug!(mv = %mv, nodes = ctx.nodes, "search stopped mid-root");
                break;
            }

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }

            if self.algorithm == SearchAlgorithm::AlphaBeta {
                if maximizing {
                    alpha = alpha.max(best_score);
                } else {
                    beta = beta.min(best_score);
                }
            }
        }

        let outcome = SearchOutcome {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: ctx.nodes,
            depth,
            completed: !ctx.aborted,
        };

        info!(
            depth,
            nodes = outcome.nodes,
            score = outcome.score,
            completed = outcome.completed,
            best = %outcome.best_move.map(|mv| mv.to_string()).unwrap_or_else(|| "none".to_owned()),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search finished"
        );
        outcome
    }

    fn minimax(
        &self,
        board: &mut BoardState,
        depth: u8,
        ply: i32,
        mut alpha: i32,
        mut beta: i32,
        ctx: &mut SearchContext<'_>,
    ) -> i32 {
        ctx.nodes += 1;
        if ctx.control.should_stop(ctx.nodes) {
            ctx.aborted = true;
            return 0;
        }

        if depth == 0 {
            if !has_any_legal_move(board) {
                return terminal_score(board, ply);
            }
            return self.scorer.score(board);
        }

        let moves = generate_legal_moves_in_place(board);
        if moves.is_empty() {
            return terminal_score(board, ply);
        }

        let maximizing = board.side_to_move == Color::Light;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let undo = make_move(board, mv);
            let score = self.minimax(board, depth - 1, ply + 1, alpha, beta, ctx);
            unmake_move(board, &undo);

            if ctx.aborted {
                return 0;
            }

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.algorithm == SearchAlgorithm::AlphaBeta && alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Score of a position with no legal moves for the side to move.
fn terminal_score(board: &BoardState, ply: i32) -> i32 {
    let side = board.side_to_move;
    if !is_king_in_check(board, side) {
        return STALEMATE_SCORE;
    }
    match side {
        Color::Light => -(MATE_SCORE - ply),
        Color::Dark => MATE_SCORE - ply,
    }
}
