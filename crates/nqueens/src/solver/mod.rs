//! Solver facade: validate, search, then shape the output per mode.
//!
//! Purpose
//! - One engine serves both output contracts: enumerate (full count plus a
//!   bounded list of boards) and first-only (single board, `n <= 12`).
//! - Validation runs before any search work. The only later failure is a
//!   board whose search tables do not fit in memory (`BoardTooLarge`).
//!
//! Notes
//! - `n = 2` and `n = 3` return the empty result without searching. The
//!   general search gives the same answer (see `search::tests`).
//! - `solve_within` adds a cooperative deadline on top of the same pipeline.

mod request;
mod types;

pub use request::{respond, SizeField, SolveRequest, SolveResponse};
pub use types::{Mode, SolveOptions, Solution};

use std::collections::TryReserveError;
use std::ops::ControlFlow;
use std::time::Instant;

use crate::board::{Board, Encoding};
use crate::cfg::{FIRST_ONLY_MAX_N, MAX_N};
use crate::error::{InvalidInputError, SearchError};
use crate::search::{try_search, Outcome, SearchCfg, SearchSummary};

/// Solve N-Queens for board size `n`.
pub fn solve(n: i64, options: &SolveOptions) -> Result<Solution, InvalidInputError> {
    let size = validate(n, options)?;
    let (solution, summary) = run(size, options, &SearchCfg::default())?;
    debug_assert!(summary.outcome != Outcome::DeadlineExceeded);
    Ok(solution)
}

/// Like `solve`, but gives up once `deadline` passes.
pub fn solve_within(
    n: i64,
    options: &SolveOptions,
    deadline: Instant,
) -> Result<Solution, SearchError> {
    let size = validate(n, options)?;
    let cfg = SearchCfg {
        deadline: Some(deadline),
    };
    let (solution, summary) = run(size, options, &cfg)?;
    match summary.outcome {
        Outcome::DeadlineExceeded => {
            tracing::debug!(n, nodes = summary.nodes, "deadline exceeded");
            Err(SearchError::DeadlineExceeded {
                nodes: summary.nodes,
            })
        }
        Outcome::Exhausted | Outcome::Stopped => Ok(solution),
    }
}

/// Check `n` and `take` against the mode's envelope; returns the board size.
pub fn validate(n: i64, options: &SolveOptions) -> Result<usize, InvalidInputError> {
    if n < 1 {
        return Err(InvalidInputError::NotPositive { n });
    }
    match options.mode {
        Mode::FirstOnly if n > FIRST_ONLY_MAX_N => {
            return Err(InvalidInputError::OutOfRange {
                n,
                min: 1,
                max: FIRST_ONLY_MAX_N,
            });
        }
        Mode::Enumerate if options.take < 0 => {
            return Err(InvalidInputError::NegativeTake { take: options.take });
        }
        _ => {}
    }
    let too_large = InvalidInputError::OutOfRange {
        n,
        min: 1,
        max: MAX_N,
    };
    if n > MAX_N {
        return Err(too_large);
    }
    usize::try_from(n).map_err(|_| too_large)
}

/// Parse a textual board size, e.g. a query parameter or stdin line.
///
/// Surrounding whitespace is ignored. Integral decimals such as `"8.0"` are
/// accepted; anything else that is not a whole number is rejected.
pub fn parse_board_size(raw: &str) -> Result<i64, InvalidInputError> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(x) => board_size_from_f64(x).map_err(|_| InvalidInputError::not_integer(trimmed)),
        Err(_) => Err(InvalidInputError::not_integer(trimmed)),
    }
}

/// Convert a floating board size (e.g. a JSON number) to an integer.
pub fn board_size_from_f64(x: f64) -> Result<i64, InvalidInputError> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
        Ok(x as i64)
    } else {
        Err(InvalidInputError::not_integer(x.to_string()))
    }
}

fn run(
    n: usize,
    options: &SolveOptions,
    cfg: &SearchCfg,
) -> Result<(Solution, SearchSummary), InvalidInputError> {
    let encoding = options.encoding();
    tracing::debug!(
        n,
        mode = options.mode.as_str(),
        take = options.take,
        encoding = encoding.as_str(),
        "solve"
    );
    let (solution, summary) = match options.mode {
        Mode::Enumerate => enumerate(n, options.take, encoding, cfg),
        Mode::FirstOnly => first_only(n, encoding, cfg),
    }
    .map_err(|err| {
        tracing::debug!(n, %err, "table allocation failed");
        InvalidInputError::BoardTooLarge { n: n as i64 }
    })?;
    tracing::debug!(
        n,
        solutions = summary.solutions,
        nodes = summary.nodes,
        outcome = ?summary.outcome,
        "search finished"
    );
    Ok((solution, summary))
}

fn enumerate(
    n: usize,
    take: i64,
    encoding: Encoding,
    cfg: &SearchCfg,
) -> Result<(Solution, SearchSummary), TryReserveError> {
    if has_no_solution(n) {
        let solution = Solution::Enumerated {
            count: 0,
            boards: Vec::new(),
        };
        return Ok((solution, empty_summary()));
    }
    let take = usize::try_from(take).unwrap_or(usize::MAX);
    let mut boards = Vec::new();
    let summary = try_search(n, cfg, |placement| {
        if boards.len() < take {
            boards.push(Board::from_placement(placement).render(encoding));
        }
        ControlFlow::Continue(())
    })?;
    let solution = Solution::Enumerated {
        count: summary.solutions,
        boards,
    };
    Ok((solution, summary))
}

fn first_only(
    n: usize,
    encoding: Encoding,
    cfg: &SearchCfg,
) -> Result<(Solution, SearchSummary), TryReserveError> {
    if has_no_solution(n) {
        return Ok((Solution::First { board: None }, empty_summary()));
    }
    let mut board = None;
    let summary = try_search(n, cfg, |placement| {
        board = Some(Board::from_placement(placement).render(encoding));
        ControlFlow::Break(())
    })?;
    Ok((Solution::First { board }, summary))
}

/// Sizes with no non-attacking placement (for `n >= 1`).
#[inline]
fn has_no_solution(n: usize) -> bool {
    n == 2 || n == 3
}

fn empty_summary() -> SearchSummary {
    SearchSummary {
        solutions: 0,
        nodes: 0,
        outcome: Outcome::Exhausted,
        trackers_clear: true,
    }
}
