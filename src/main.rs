//! Interactive terminal driver.
//!
//! Reads one command per line from stdin. Anything that is not a command is
//! treated as a move in long algebraic notation (`e2e4`, `e7e8q`). When the
//! engine owns the side to move it searches on a worker thread while the
//! prompt keeps accepting read-only commands; `stop` makes it move at once.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use plum_engine::config::EngineConfig;
use plum_engine::errors::ChessResult;
use plum_engine::game_state::chess_types::Color;
use plum_engine::game_state::game_state::GameState;
use plum_engine::logging::init_logging;
use plum_engine::search::background::BackgroundSearch;
use plum_engine::search::board_scoring::ScorerKind;
use plum_engine::search::minimax::{MinimaxSearch, SearchOutcome};
use plum_engine::utils::game_record::GameRecord;
use plum_engine::utils::render_game_state::render_board;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineSide {
    Light,
    Dark,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScorerArg {
    Material,
    Positional,
}

#[derive(Debug, Parser)]
#[command(name = "plum_engine", about = "Play chess against a minimax engine in the terminal")]
struct Cli {
    /// JSON engine config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    depth: Option<u8>,

    /// Search every branch instead of pruning with alpha-beta.
    #[arg(long)]
    no_alpha_beta: bool,

    #[arg(long, value_enum)]
    scorer: Option<ScorerArg>,

    #[arg(long)]
    movetime_ms: Option<u64>,

    /// Side the engine plays.
    #[arg(long, value_enum, default_value = "dark")]
    engine: EngineSide,

    /// Start from this position instead of the initial one.
    #[arg(long)]
    fen: Option<String>,
}

impl Cli {
    fn engine_config(&self) -> ChessResult<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.no_alpha_beta {
            config.alpha_beta = false;
        }
        if let Some(scorer) = self.scorer {
            config.scorer = match scorer {
                ScorerArg::Material => ScorerKind::Material,
                ScorerArg::Positional => ScorerKind::Positional,
            };
        }
        if self.movetime_ms.is_some() {
            config.movetime_ms = self.movetime_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

struct Session {
    game: GameState,
    config: EngineConfig,
    worker: BackgroundSearch<ScorerKind>,
    engine_side: Option<Color>,
    /// Result channel of the search in flight.
    pending: Option<mpsc::Receiver<SearchOutcome>>,
}

impl Session {
    fn engine_to_move(&self) -> bool {
        self.engine_side == Some(self.game.side_to_move()) && !self.game.status().is_terminal()
    }

    fn start_search(&mut self) {
        let budget = self.config.movetime_ms.map(Duration::from_millis);
        self.pending = Some(self.worker.start(&self.game, self.config.depth, budget));
        println!("thinking (type 'stop' to move now)");
    }

    /// Drop the search in flight without playing its move.
    fn abandon_search(&mut self) {
        if self.pending.take().is_some() {
            self.worker.cancel();
        }
    }

    /// Play the finished search's move, if one has arrived.
    fn poll_search(&mut self) -> ChessResult<()> {
        let Some(rx) = &self.pending else {
            return Ok(());
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return Ok(()),
            Err(mpsc::TryRecvError::Disconnected) => {
                warn!("search worker stopped without a result");
                self.pending = None;
                return Ok(());
            }
        };
        self.pending = None;

        let chosen = outcome
            .best_move
            .or_else(|| self.game.legal_moves().first().copied());
        if let Some(mv) = chosen {
            self.game.apply(mv)?;
            println!("engine plays {mv} (score {}, nodes {})", outcome.score, outcome.nodes);
            self.print_position();
        }
        Ok(())
    }

    fn print_position(&self) {
        println!("{}", render_board(self.game.board()));
        println!("{} to move, status: {}", self.game.side_to_move(), self.game.status());
    }

    /// Returns false when the session should end.
    fn handle(&mut self, line: &str) -> ChessResult<bool> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(true);
        };

        match command {
            "quit" | "exit" => return Ok(false),
            "help" => print_help(),
            "board" => self.print_position(),
            "moves" => {
                let moves: Vec<String> = self.game.legal_moves().iter().map(|mv| mv.to_string()).collect();
                println!("{}", moves.join(" "));
            }
            "fen" => println!("{}", self.game.to_fen()),
            "stop" => {
                // The cancelled search still reports its best completed move.
                if self.pending.is_some() {
                    self.worker.cancel();
                }
            }
            "undo" => {
                self.abandon_search();
                let mv = self.game.undo()?;
                println!("undid {mv}");
                self.print_position();
            }
            "reset" => {
                self.abandon_search();
                self.game.reset();
                self.print_position();
            }
            "save" => {
                let path = parts.next().unwrap_or("game.json");
                GameRecord::from_game(&self.game).save(path)?;
                println!("saved to {path}");
            }
            "load" => {
                let path = parts.next().unwrap_or("game.json");
                let game = GameRecord::load(path)?.replay()?;
                self.abandon_search();
                self.game = game;
                self.print_position();
            }
            "go" => {
                if self.pending.is_some() {
                    println!("already thinking");
                } else if self.game.status().is_terminal() {
                    println!("game over: {}", self.game.status());
                } else {
                    self.start_search();
                }
            }
            text => {
                if self.pending.is_some() {
                    println!("engine is thinking; 'stop' first");
                    return Ok(true);
                }
                self.game.apply_long_algebraic(text)?;
                self.print_position();
                if self.engine_to_move() {
                    self.start_search();
                }
            }
        }
        Ok(true)
    }
}

fn print_help() {
    println!("commands: <move> board moves fen undo reset go stop save [path] load [path] help quit");
}

fn main() -> ChessResult<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.engine_config()?;
    info!(?config, "engine configured");

    let game = match &cli.fen {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    let mut session = Session {
        game,
        worker: BackgroundSearch::new(MinimaxSearch::new(config.scorer, config.algorithm())),
        config,
        engine_side: match cli.engine {
            EngineSide::Light => Some(Color::Light),
            EngineSide::Dark => Some(Color::Dark),
            EngineSide::None => None,
        },
        pending: None,
    };

    print_help();
    session.print_position();
    if session.engine_to_move() {
        session.start_search();
    }

    // Stdin blocks, so it gets its own thread; the main loop stays free to
    // pick up search results as they land.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut input_closed = false;
    loop {
        if let Err(err) = session.poll_search() {
            println!("error: {err}");
        }
        if input_closed && session.pending.is_none() {
            break;
        }

        match line_rx.recv_timeout(INPUT_POLL_INTERVAL) {
            Ok(line) => match session.handle(line.trim()) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => println!("error: {err}"),
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => input_closed = true,
        }
        io::stdout().flush()?;
    }
    Ok(())
}
