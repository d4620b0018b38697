//! Curated surface for embedding callers (service handlers, bindings).
//!
//! Re-exports the pieces a request handler needs: parse and validate the
//! board size, run the solver, and map the result to a serializable
//! response. Search internals stay behind `search`.

pub use crate::board::{Board, Encoding, RenderedBoard};
pub use crate::cfg::{DEFAULT_TAKE, FIRST_ONLY_MAX_N, MAX_N};
pub use crate::error::{BoardParseError, InvalidInputError, SearchError};
pub use crate::known::{known_count, KNOWN_MAX_N};
pub use crate::search::{count_solutions, SearchCfg};
pub use crate::solver::{
    board_size_from_f64, parse_board_size, respond, solve, solve_within, validate, Mode,
    SizeField, SolveOptions, SolveRequest, SolveResponse, Solution,
};

/// Solve a textual board size, e.g. a raw query parameter.
pub fn solve_str(raw: &str, options: &SolveOptions) -> Result<Solution, InvalidInputError> {
    solve(parse_board_size(raw)?, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_str_parses_then_solves() {
        let sol = solve_str(" 6 ", &SolveOptions::enumerate(0)).unwrap();
        assert!(matches!(sol, Solution::Enumerated { count: 4, .. }));
        assert!(matches!(
            solve_str("6.5", &SolveOptions::default()),
            Err(InvalidInputError::NotInteger { .. })
        ));
        assert!(matches!(
            solve_str("4.5", &SolveOptions::first_only()),
            Err(InvalidInputError::NotInteger { .. })
        ));
        assert!(matches!(
            solve_str("0", &SolveOptions::first_only()),
            Err(InvalidInputError::NotPositive { n: 0 })
        ));
    }
}
