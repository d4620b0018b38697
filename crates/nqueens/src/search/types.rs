//! Search configuration and summary types.

use std::time::Instant;

/// Search configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchCfg {
    /// Cooperative wall-clock cutoff, checked at each row descent.
    /// `None` runs to completion.
    pub deadline: Option<Instant>,
}

/// How the search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every branch was explored.
    Exhausted,
    /// The visitor asked to stop.
    Stopped,
    DeadlineExceeded,
}

/// Totals reported by one search call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSummary {
    /// Complete placements reached (including the one that stopped the search).
    pub solutions: u64,
    /// Queens placed over the whole search, counting re-placements.
    pub nodes: u64,
    pub outcome: Outcome,
    /// Every occupancy table was empty when the search returned.
    pub trackers_clear: bool,
}
