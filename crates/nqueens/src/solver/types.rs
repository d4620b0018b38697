//! Options and results of a solve call.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Encoding, RenderedBoard};
use crate::cfg::DEFAULT_TAKE;
use crate::error::InvalidInputError;

/// What the caller wants back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Count every solution and keep up to `take` boards.
    #[default]
    Enumerate,
    /// Stop at the first solution (`n` capped at 12).
    FirstOnly,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Enumerate => "enumerate",
            Mode::FirstOnly => "first-only",
        }
    }

    /// Encoding used when the caller does not pick one.
    pub fn default_encoding(self) -> Encoding {
        match self {
            Mode::Enumerate => Encoding::Grid,
            Mode::FirstOnly => Encoding::FlattenedBinary,
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enumerate" => Ok(Mode::Enumerate),
            "first-only" => Ok(Mode::FirstOnly),
            other => Err(InvalidInputError::unknown_option("mode", other)),
        }
    }
}

/// Output-shaping options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveOptions {
    pub mode: Mode,
    /// Maximum boards to materialize in enumerate mode. Must be >= 0; the
    /// count is always complete regardless.
    pub take: i64,
    /// `None` picks `mode.default_encoding()`.
    pub encoding: Option<Encoding>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Enumerate,
            take: DEFAULT_TAKE,
            encoding: None,
        }
    }
}

impl SolveOptions {
    pub fn enumerate(take: i64) -> Self {
        Self {
            take,
            ..Self::default()
        }
    }

    pub fn first_only() -> Self {
        Self {
            mode: Mode::FirstOnly,
            ..Self::default()
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding.unwrap_or_else(|| self.mode.default_encoding())
    }
}

/// Result of a successful solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Solution {
    /// Total count plus up to `take` boards in discovery order.
    Enumerated {
        count: u64,
        boards: Vec<RenderedBoard>,
    },
    /// First solution found; `None` only when the board has none (n = 2, 3).
    First { board: Option<RenderedBoard> },
}

impl Solution {
    /// Boards carried by this result, in order.
    pub fn boards(&self) -> &[RenderedBoard] {
        match self {
            Solution::Enumerated { boards, .. } => boards,
            Solution::First { board } => {
                board.as_ref().map(std::slice::from_ref).unwrap_or(&[])
            }
        }
    }
}
