//! Stop conditions shared between a running search and its owner.
//!
//! The cancellation flag is checked at every node; the deadline and node
//! budget bound turn latency.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// Nodes between wall-clock checks.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    stop: Arc<AtomicBool>,
    deadline: Option<Instant>,
    node_limit: Option<u64>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.deadline = Some(Instant::now() + budget);
        self
    }

    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Request a cooperative stop. Safe to call from any thread.
    #[inline]
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// True once the search that has visited `nodes` nodes must unwind.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.is_cancelled() {
            return true;
        }
        if self.node_limit.is_some_and(|limit| nodes > limit) {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if nodes % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                self.cancel();
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_cancellation_flag() {
        let control = SearchControl::new();
        let handle = control.clone();
        assert!(!control.should_stop(1));
        handle.cancel();
        assert!(control.is_cancelled());
        assert!(control.should_stop(1));
    }

    #[test]
    fn node_limit_stops_after_budget() {
        let control = SearchControl::new().with_node_limit(10);
        assert!(!control.should_stop(10));
        assert!(control.should_stop(11));
    }

    #[test]
    fn expired_deadline_latches_cancellation() {
        let control = SearchControl::new().with_time_budget(Duration::ZERO);
        assert!(control.should_stop(DEADLINE_CHECK_INTERVAL));
        assert!(control.is_cancelled());
    }
}
