//! N-Queens constraint search engine.
//!
//! Places N mutually non-attacking queens on an N×N board by depth-first
//! backtracking with O(1) column/diagonal conflict checks. One engine serves
//! two output contracts:
//! - enumerate: full solution count plus up to `take` rendered boards;
//! - first-only: the first solution as a flattened 0/1 board (`n <= 12`).
//!
//! The engine is pure and synchronous. Every call owns its placement and
//! conflict tables, so concurrent calls need no locking.
//!
//! ```
//! use nqueens::{solve, SolveOptions, Solution};
//!
//! let sol = solve(8, &SolveOptions::enumerate(0)).unwrap();
//! assert!(matches!(sol, Solution::Enumerated { count: 92, .. }));
//! ```

pub mod api;
pub mod board;
pub mod cfg;
pub mod error;
pub mod known;
pub mod search;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use board::{Board, Encoding, RenderedBoard};
pub use error::{BoardParseError, InvalidInputError, SearchError};
pub use solver::{solve, solve_within, Mode, SolveOptions, Solution};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::board::{Board, Encoding, RenderedBoard};
    pub use crate::error::{InvalidInputError, SearchError};
    pub use crate::solver::{
        parse_board_size, solve, solve_within, Mode, SolveOptions, SolveRequest, SolveResponse,
        Solution,
    };
}
