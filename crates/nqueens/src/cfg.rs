//! Policy constants for the solver boundary (internal).
//!
//! Policy
//! - Defaults are fixed constants; run-time choices go through `SolveOptions`
//!   and `SearchCfg` instead of new constants here.

/// Largest board size accepted in first-only mode.
pub const FIRST_ONLY_MAX_N: i64 = 12;
/// Boards materialized by enumerate mode when the caller does not say.
pub const DEFAULT_TAKE: i64 = 1;
/// Grid cell holding a queen.
pub const QUEEN_MARKER: char = 'Q';
/// Grid cell without a queen.
pub const EMPTY_MARKER: char = '.';
/// Largest board size any mode accepts: the placement vector (`n` words)
/// must stay within `isize::MAX` bytes.
pub const MAX_N: i64 = (isize::MAX as usize / std::mem::size_of::<usize>()) as i64;
