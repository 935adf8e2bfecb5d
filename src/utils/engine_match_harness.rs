//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other in-process, with an
//! optional seeded random opening prefix so deterministic engines still see
//! varied games.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn is_draw(self) -> bool {
        matches!(self, MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            avg_ns_per_move_ms(self.player1_total_time_ns, self.player1_moves),
            avg_ns_per_move_ms(self.player2_total_time_ns, self.player2_moves),
        )
    }
}

/// Play a single seeded match from the standard start position.
///
/// `engine_light` moves first.
pub fn play_engine_match(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    let mut state = GameState::new_game();
    let opening_moves_lan = apply_seeded_random_opening(
        &mut state,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;
    play_from_state(state, engine_light, engine_dark, opening_moves_lan, config)
}

/// Play from a caller-provided position without a random opening.
pub fn play_engine_match_from_state(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    start_state: GameState,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    play_from_state(start_state, engine_light, engine_dark, Vec::new(), config)
}

fn play_from_state(
    mut state: GameState,
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    opening_moves_lan: Vec<String>,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    engine_light.new_game();
    engine_dark.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: GameState::new_game(),
        opening_moves_lan,
        played_moves_lan: Vec::new(),
        light_move_count: 0,
        dark_move_count: 0,
        light_total_time_ns: 0,
        dark_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(outcome) = terminal_outcome(state.status()) {
            result.outcome = outcome;
            break;
        }

        let mover = state.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_light.choose_move(&state, &config.go_params)?,
            Color::Dark => engine_dark.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                result.light_move_count += 1;
                result.light_total_time_ns += elapsed_ns;
            }
            Color::Dark => {
                result.dark_move_count += 1;
                result.dark_total_time_ns += elapsed_ns;
            }
        }

        let chosen = out.best_move.ok_or(ChessError::GameOver(state.status()))?;
        state.apply(chosen)?;
        result.played_moves_lan.push(chosen.to_string());
    }

    // The last move may have ended the game right at the ply cap.
    if let Some(outcome) = terminal_outcome(state.status()) {
        result.outcome = outcome;
    }

    debug!(outcome = ?result.outcome, plies = result.played_moves_lan.len(), "match finished");
    result.final_state = state;
    Ok(result)
}

fn terminal_outcome(status: GameStatus) -> Option<MatchOutcome> {
    match status {
        GameStatus::Checkmate(Color::Light) => Some(MatchOutcome::DarkWinCheckmate),
        GameStatus::Checkmate(Color::Dark) => Some(MatchOutcome::LightWinCheckmate),
        GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
        GameStatus::Ongoing | GameStatus::Check(_) => None,
    }
}

/// Play a series of matches, alternating colors: player 1 is Light in
/// even-numbered games.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_light = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i / 2));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_light {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_light {
            (
                result.light_move_count,
                result.light_total_time_ns,
                result.dark_move_count,
                result.dark_total_time_ns,
            )
        } else {
            (
                result.dark_move_count,
                result.dark_total_time_ns,
                result.light_move_count,
                result.light_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_ns;

        match (result.outcome, player1_is_light) {
            (MatchOutcome::LightWinCheckmate, true) | (MatchOutcome::DarkWinCheckmate, false) => {
                stats.player1_wins += 1
            }
            (MatchOutcome::LightWinCheckmate, false) | (MatchOutcome::DarkWinCheckmate, true) => {
                stats.player2_wins += 1
            }
            _ => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        let player1_color = if player1_is_light { Color::Light } else { Color::Dark };
        info!(
            game = i + 1,
            of = config.games,
            seed,
            player1_color = %player1_color,
            outcome = ?result.outcome,
            "series game finished"
        );
    }

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> ChessResult<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = state.legal_moves();
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        state.apply(chosen)?;
        opening_moves_lan.push(chosen.to_string());
    }

    Ok(opening_moves_lan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;

    fn short_match() -> MatchConfig {
        MatchConfig {
            max_plies: 40,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }

    #[test]
    fn random_vs_greedy_runs_to_a_result() {
        let mut light = RandomEngine::with_seed(3);
        let mut dark = GreedyEngine::new();
        let result = play_engine_match(&mut light, &mut dark, 42, short_match()).expect("match should run");

        assert!(result.opening_moves_lan.len() >= 2);
        assert!(result.light_move_count + result.dark_move_count > 0);
        let total = result.opening_moves_lan.len() + result.played_moves_lan.len();
        assert_eq!(result.final_state.history().len(), total);
        if result.outcome == MatchOutcome::DrawMaxPlies {
            assert!(!result.final_state.status().is_terminal());
        }
    }

    #[test]
    fn deterministic_engines_replay_identically() {
        let config = EngineConfig {
            depth: 1,
            ..EngineConfig::default()
        };
        let play = || {
            let mut light = MinimaxEngine::new(config.clone());
            let mut dark = GreedyEngine::new();
            play_engine_match(&mut light, &mut dark, 9, short_match()).expect("match should run")
        };
        let first = play();
        let second = play();
        assert_eq!(first.opening_moves_lan, second.opening_moves_lan);
        assert_eq!(first.played_moves_lan, second.played_moves_lan);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn scholar_mate_ends_in_light_win() {
        let mut game = GameState::new_game();
        for text in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6"] {
            game.apply_long_algebraic(text).expect("scripted move should be legal");
        }
        let mut light = GreedyEngine::new();
        let mut dark = GreedyEngine::new();
        let result = play_engine_match_from_state(&mut light, &mut dark, game, short_match())
            .expect("match should run");
        assert_eq!(result.played_moves_lan.first().map(String::as_str), Some("h5f7"));
        assert_eq!(result.outcome, MatchOutcome::LightWinCheckmate);
    }

    #[test]
    fn series_alternates_colors_and_counts_every_game() {
        let stats = play_engine_match_series(
            || Box::new(GreedyEngine::new()),
            || Box::new(RandomEngine::with_seed(5)),
            MatchSeriesConfig {
                games: 4,
                base_seed: 100,
                per_game: MatchConfig {
                    max_plies: 30,
                    ..short_match()
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 4);
        assert!(stats.player1_moves > 0 && stats.player2_moves > 0);
        assert!(stats.report().starts_with("games=4"));
    }
}
