//! Error types surfaced at the solver boundary.
//!
//! `InvalidInputError` is the only failure of `solve`: either validation
//! rejects the input or the search tables for `n` cannot be allocated. `SearchError` exists for the deadline-bounded entry
//! point only.

use std::fmt;

/// Rejected input: bad board size, bad `take`, or an unknown option name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInputError {
    /// `n` is zero or negative.
    NotPositive { n: i64 },
    /// Textual or floating board size that is not a whole number.
    NotInteger { raw: String },
    /// `n` is outside the range the requested mode supports.
    OutOfRange { n: i64, min: i64, max: i64 },
    /// Search tables for `n` could not be allocated.
    BoardTooLarge { n: i64 },
    /// `take` is negative.
    NegativeTake { take: i64 },
    /// Unrecognized mode or encoding name.
    UnknownOption { name: &'static str, value: String },
}

impl InvalidInputError {
    pub(crate) fn not_integer(raw: impl Into<String>) -> Self {
        Self::NotInteger { raw: raw.into() }
    }

    pub(crate) fn unknown_option(name: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { n } => write!(f, "n must be a positive integer, got {n}"),
            Self::NotInteger { raw } => write!(f, "n must be a positive integer, got {raw:?}"),
            Self::OutOfRange { n, min, max } => {
                write!(f, "n must be {min}<=n<={max}, got {n}")
            }
            Self::BoardTooLarge { n } => {
                write!(f, "n={n} is too large to allocate search tables")
            }
            Self::NegativeTake { take } => write!(f, "take must be >= 0, got {take}"),
            Self::UnknownOption { name, value } => write!(f, "unknown {name} {value:?}"),
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Failure of a deadline-bounded solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    Invalid(InvalidInputError),
    /// The wall-clock deadline passed before the search finished.
    DeadlineExceeded { nodes: u64 },
}

impl From<InvalidInputError> for SearchError {
    fn from(err: InvalidInputError) -> Self {
        Self::Invalid(err)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid input: {err}"),
            Self::DeadlineExceeded { nodes } => {
                write!(f, "deadline exceeded after placing {nodes} queens")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::DeadlineExceeded { .. } => None,
        }
    }
}

/// Rendered text that does not describe an N-Queens board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardParseError {
    Empty,
    /// Row `row` has `width` cells on a board with `rows` rows.
    NotSquare { row: usize, width: usize, rows: usize },
    /// A cell that is neither a queen nor an empty marker.
    BadCell { row: usize, cell: String },
    /// Row `row` holds `found` queens instead of exactly one.
    QueenCount { row: usize, found: usize },
    /// Flattened digit count has no integer square root.
    NotPerfectSquare { cells: usize },
    /// Column index outside `0..n`.
    ColumnOutOfRange { row: usize, col: usize, n: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board is empty"),
            Self::NotSquare { row, width, rows } => write!(
                f,
                "row {row} has {width} cells but the board has {rows} rows"
            ),
            Self::BadCell { row, cell } => write!(f, "row {row} has unexpected cell {cell:?}"),
            Self::QueenCount { row, found } => {
                write!(f, "row {row} holds {found} queens (expected exactly one)")
            }
            Self::NotPerfectSquare { cells } => {
                write!(f, "{cells} cells do not form a square board")
            }
            Self::ColumnOutOfRange { row, col, n } => {
                write!(f, "row {row} places a queen in column {col} on a {n}x{n} board")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}
