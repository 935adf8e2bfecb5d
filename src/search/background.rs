//! Runs one search at a time on a worker thread.
//!
//! The worker owns a copy of the board, so the game can keep changing while
//! it thinks. Starting a new search cancels and joins the one in flight
//! before spawning. Each search reports on its own channel, so a superseded
//! search can never be mistaken for the current one.

use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::trace;

use crate::game_state::game_state::GameState;
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{MinimaxSearch, SearchOutcome};
use crate::search::search_control::SearchControl;

struct InFlight {
    control: SearchControl,
    handle: JoinHandle<()>,
}

pub struct BackgroundSearch<S: BoardScorer + 'static> {
    search: Arc<MinimaxSearch<S>>,
    in_flight: Option<InFlight>,
}

impl<S: BoardScorer + 'static> BackgroundSearch<S> {
    pub fn new(search: MinimaxSearch<S>) -> Self {
        Self {
            search: Arc::new(search),
            in_flight: None,
        }
    }

    /// Start searching the current position. The outcome, partial if the
    /// search was stopped, arrives on the returned channel.
    pub fn start(
        &mut self,
        game: &GameState,
        depth: u8,
        budget: Option<Duration>,
    ) -> mpsc::Receiver<SearchOutcome> {
        self.cancel();

        let mut control = SearchControl::new();
        if let Some(budget) = budget {
            control = control.with_time_budget(budget);
        }

        let (tx, rx) = mpsc::channel();
        let board = game.board().clone();
        let search = Arc::clone(&self.search);
        let worker_control = control.clone();

        trace!(depth, "background search spawned");
        let handle = thread::spawn(move || {
            let outcome = search.search(&board, depth, &worker_control);
            // The receiver may already be gone.
            let _ = tx.send(outcome);
            trace!("background search exited");
        });

        self.in_flight = Some(InFlight { control, handle });
        rx
    }

    /// Cancel the search in flight, if any, and wait for the worker to exit.
    pub fn cancel(&mut self) {
        if let Some(job) = self.in_flight.take() {
            job.control.cancel();
            if job.handle.join().is_err() {
                trace!("background search worker panicked");
            }
            trace!("background search cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|job| !job.handle.is_finished())
    }
}

impl<S: BoardScorer + 'static> Drop for BackgroundSearch<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::MaterialScorer;
    use crate::search::minimax::SearchAlgorithm;

    fn worker() -> BackgroundSearch<MaterialScorer> {
        BackgroundSearch::new(MinimaxSearch::new(MaterialScorer, SearchAlgorithm::AlphaBeta))
    }

    #[test]
    fn finished_search_reports_a_legal_move() {
        let game = GameState::new_game();
        let mut background = worker();
        let rx = background.start(&game, 2, None);
        let outcome = rx
            .recv_timeout(Duration::from_secs(30))
            .expect("search should report");
        assert!(outcome.completed);
        let best = outcome.best_move.expect("start position has moves");
        assert!(game.legal_moves().contains(&best));
    }

    #[test]
    fn search_uses_a_snapshot_of_the_board() {
        let mut game = GameState::new_game();
        let mut background = worker();
        let rx = background.start(&game, 2, None);
        game.apply_long_algebraic("e2e4").expect("e2e4 is legal");
        let outcome = rx
            .recv_timeout(Duration::from_secs(30))
            .expect("search should report");
        let best = outcome.best_move.expect("start position has moves");
        assert!(GameState::new_game().legal_moves().contains(&best));
    }

    #[test]
    fn new_request_cancels_the_previous_one() {
        let game = GameState::new_game();
        let mut background = worker();
        let first = background.start(&game, 8, None);
        let second = background.start(&game, 1, None);

        let stale = first
            .recv_timeout(Duration::from_secs(30))
            .expect("cancelled search still reports");
        assert!(!stale.completed);

        let fresh = second
            .recv_timeout(Duration::from_secs(30))
            .expect("search should report");
        assert!(fresh.completed);
        background.cancel();
        assert!(!background.is_running());
    }

    #[test]
    fn stopping_delivers_a_result_that_can_be_polled() {
        let game = GameState::new_game();
        let mut background = worker();
        let rx = background.start(&game, 8, None);
        assert!(matches!(rx.try_recv(), Err(mpsc::TryRecvError::Empty)));

        thread::sleep(Duration::from_millis(20));
        background.cancel();
        let outcome = rx.try_recv().expect("joined worker has already reported");
        assert!(!outcome.completed);
        if let Some(best) = outcome.best_move {
            assert!(game.legal_moves().contains(&best));
        }
        assert!(!background.is_running());
    }

    #[test]
    fn time_budget_stops_a_deep_search() {
        let game = GameState::new_game();
        let mut background = worker();
        let rx = background.start(&game, 8, Some(Duration::from_millis(50)));
        let outcome = rx
            .recv_timeout(Duration::from_secs(30))
            .expect("search should stop on its deadline");
        assert!(!outcome.completed);
    }
}
