//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --games 10 --player1 minimax --player2 greedy`

use clap::{Parser, ValueEnum};

use plum_engine::config::EngineConfig;
use plum_engine::engines::engine_greedy::GreedyEngine;
use plum_engine::engines::engine_minimax::MinimaxEngine;
use plum_engine::engines::engine_random::RandomEngine;
use plum_engine::engines::engine_trait::Engine;
use plum_engine::errors::ChessResult;
use plum_engine::logging::init_logging;
use plum_engine::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Minimax,
    Greedy,
    Random,
}

#[derive(Debug, Parser)]
#[command(about = "Play a series of games between two engines")]
struct Cli {
    #[arg(long, value_enum, default_value = "minimax")]
    player1: EngineKind,

    #[arg(long, value_enum, default_value = "greedy")]
    player2: EngineKind,

    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// JSON config for minimax players.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn factory(kind: EngineKind, config: EngineConfig, seed: u64) -> impl Fn() -> Box<dyn Engine> {
    move || -> Box<dyn Engine> {
        match kind {
            EngineKind::Minimax => Box::new(MinimaxEngine::new(config.clone())),
            EngineKind::Greedy => Box::new(GreedyEngine::new()),
            EngineKind::Random => Box::new(RandomEngine::with_seed(seed)),
        }
    }
}

fn main() -> ChessResult<()> {
    init_logging();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let stats = play_engine_match_series(
        factory(cli.player1, config.clone(), cli.seed),
        factory(cli.player2, config, cli.seed.wrapping_add(1)),
        MatchSeriesConfig {
            games: cli.games,
            base_seed: cli.seed,
            per_game: MatchConfig {
                max_plies: cli.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
