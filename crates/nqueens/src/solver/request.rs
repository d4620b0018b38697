//! Serialized request/response shapes for callers that speak JSON.
//!
//! A request accepts the board size in any JSON shape. Numbers, numeric
//! strings, and everything else arrive intact and fail validation with a
//! descriptive message instead of failing deserialization.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::{board_size_from_f64, parse_board_size, solve, Mode, SolveOptions, Solution};
use crate::board::Encoding;
use crate::cfg::DEFAULT_TAKE;
use crate::error::InvalidInputError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolveRequest {
    pub n: SizeField,
    #[serde(default)]
    pub take: Option<i64>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub encoding: Option<Encoding>,
}

/// Board size as it appeared in the request.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    Integer(i64),
    Number(f64),
    Text(String),
    /// Booleans, null, arrays and objects.
    Other(IgnoredAny),
}

impl SizeField {
    pub fn board_size(&self) -> Result<i64, InvalidInputError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Number(x) => board_size_from_f64(*x),
            Self::Text(raw) => parse_board_size(raw),
            Self::Other(_) => Err(InvalidInputError::not_integer("non-numeric value")),
        }
    }
}

impl SolveRequest {
    pub fn options(&self) -> SolveOptions {
        SolveOptions {
            mode: self.mode.unwrap_or_default(),
            take: self.take.unwrap_or(DEFAULT_TAKE),
            encoding: self.encoding,
        }
    }

    pub fn execute(&self) -> Result<Solution, InvalidInputError> {
        solve(self.n.board_size()?, &self.options())
    }
}

/// Either the solution object or `{ "error": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    Solved(Solution),
    Rejected { error: String },
}

pub fn respond(request: &SolveRequest) -> SolveResponse {
    match request.execute() {
        Ok(solution) => SolveResponse::Solved(solution),
        Err(err) => {
            tracing::debug!(%err, "request rejected");
            SolveResponse::Rejected {
                error: err.to_string(),
            }
        }
    }
}
