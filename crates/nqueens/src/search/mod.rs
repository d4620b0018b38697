//! N-Queens backtracking search.
//!
//! Purpose
//! - Enumerate non-attacking placements row by row, trying columns in
//!   ascending order so "first" and enumeration order are reproducible.
//! - Keep conflict checks O(1) with column/diagonal occupancy tables that are
//!   updated symmetrically on place and backtrack.
//!
//! The runner knows nothing about rendering or output policy; callers pass a
//! visitor that sees each complete placement and may stop the search.

mod dfs;
mod occupancy;
mod types;

pub use dfs::{count_solutions, search, try_search};
pub use types::{Outcome, SearchCfg, SearchSummary};

#[cfg(test)]
mod tests;
