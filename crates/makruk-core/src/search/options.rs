//! Search configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tt::DEFAULT_TT_CAPACITY;

/// Options for a single `find_best_move` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Probe and store the transposition table
    pub use_tt: bool,
    /// Empty the transposition table before searching
    pub clear_tt: bool,
    /// Entries held before the table is flushed
    pub tt_capacity: usize,
    /// Wall-clock budget; enables iterative deepening
    pub time_limit_ms: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            use_tt: true,
            clear_tt: false,
            tt_capacity: DEFAULT_TT_CAPACITY,
            time_limit_ms: None,
        }
    }
}

impl SearchOptions {
    pub fn with_tt(mut self, use_tt: bool) -> Self {
        self.use_tt = use_tt;
        self
    }

    pub fn with_clear_tt(mut self, clear_tt: bool) -> Self {
        self.clear_tt = clear_tt;
        self
    }

    pub fn with_tt_capacity(mut self, capacity: usize) -> Self {
        self.tt_capacity = capacity;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}
