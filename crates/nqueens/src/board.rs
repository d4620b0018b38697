//! Solved boards and their two output encodings.
//!
//! A `Board` is an owned placement (`columns[row] = col`). Rendering produces
//! either a grid of `Q`/`.` rows or the row-major 0/1 digits joined by single
//! spaces. Both encodings parse back into a `Board`, which lets callers verify
//! output without trusting the search's conflict trackers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cfg::{EMPTY_MARKER, QUEEN_MARKER};
use crate::error::{BoardParseError, InvalidInputError};

/// Output encoding for a rendered solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// One string per row with a queen marker at the queen's column.
    Grid,
    /// `n²` binary digits in row-major order, space separated.
    FlattenedBinary,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Grid => "grid",
            Encoding::FlattenedBinary => "flattened-binary",
        }
    }
}

impl FromStr for Encoding {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Encoding::Grid),
            "flattened-binary" => Ok(Encoding::FlattenedBinary),
            other => Err(InvalidInputError::unknown_option("encoding", other)),
        }
    }
}

/// One solution rendered in a specific encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderedBoard {
    Grid(Vec<String>),
    Flattened(String),
}

impl RenderedBoard {
    pub fn encoding(&self) -> Encoding {
        match self {
            RenderedBoard::Grid(_) => Encoding::Grid,
            RenderedBoard::Flattened(_) => Encoding::FlattenedBinary,
        }
    }

    /// Recover the placement from either encoding.
    pub fn parse(&self) -> Result<Board, BoardParseError> {
        match self {
            RenderedBoard::Grid(rows) => Board::parse_grid(rows),
            RenderedBoard::Flattened(text) => Board::parse_flattened(text),
        }
    }
}

/// A complete placement: `columns()[row]` is the queen's column in `row`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Checked constructor; every column must lie in `0..n`.
    pub fn from_columns(columns: Vec<usize>) -> Result<Self, BoardParseError> {
        if columns.is_empty() {
            return Err(BoardParseError::Empty);
        }
        let n = columns.len();
        if let Some((row, &col)) = columns.iter().enumerate().find(|(_, &c)| c >= n) {
            return Err(BoardParseError::ColumnOutOfRange { row, col, n });
        }
        Ok(Self { columns })
    }

    /// Wrap a placement produced by the search (already in range).
    pub(crate) fn from_placement(placement: &[usize]) -> Self {
        debug_assert!(placement.iter().all(|&c| c < placement.len()));
        Self {
            columns: placement.to_vec(),
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Pairwise check: no two queens share a column or a diagonal.
    /// Rows are distinct by construction.
    pub fn is_non_attacking(&self) -> bool {
        let cols = &self.columns;
        for r1 in 0..cols.len() {
            for r2 in (r1 + 1)..cols.len() {
                let (c1, c2) = (cols[r1], cols[r2]);
                if c1 == c2 || r2 - r1 == c1.abs_diff(c2) {
                    return false;
                }
            }
        }
        true
    }

    pub fn to_grid(&self) -> Vec<String> {
        let n = self.n();
        self.columns
            .iter()
            .map(|&c| {
                (0..n)
                    .map(|i| if i == c { QUEEN_MARKER } else { EMPTY_MARKER })
                    .collect()
            })
            .collect()
    }

    /// Row-major occupancy, `1` where a queen stands.
    pub fn to_bits(&self) -> Vec<u8> {
        let n = self.n();
        let mut bits = vec![0u8; n * n];
        for (row, &col) in self.columns.iter().enumerate() {
            bits[row * n + col] = 1;
        }
        bits
    }

    /// Row-major digits joined by single spaces, no leading/trailing space.
    pub fn to_flattened(&self) -> String {
        let bits = self.to_bits();
        let mut out = String::with_capacity(bits.len() * 2);
        for (i, b) in bits.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if *b == 1 { '1' } else { '0' });
        }
        out
    }

    pub fn render(&self, encoding: Encoding) -> RenderedBoard {
        match encoding {
            Encoding::Grid => RenderedBoard::Grid(self.to_grid()),
            Encoding::FlattenedBinary => RenderedBoard::Flattened(self.to_flattened()),
        }
    }

    /// Parse grid rows (`Q` marks a queen, `.` an empty cell).
    pub fn parse_grid<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardParseError> {
        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }
        let n = rows.len();
        let mut columns = Vec::with_capacity(n);
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.as_ref().chars().collect();
            if cells.len() != n {
                return Err(BoardParseError::NotSquare {
                    row,
                    width: cells.len(),
                    rows: n,
                });
            }
            let mut queen = None;
            let mut found = 0;
            for (col, &ch) in cells.iter().enumerate() {
                match ch {
                    QUEEN_MARKER => {
                        found += 1;
                        queen = Some(col);
                    }
                    EMPTY_MARKER => {}
                    other => {
                        return Err(BoardParseError::BadCell {
                            row,
                            cell: other.to_string(),
                        })
                    }
                }
            }
            match (found, queen) {
                (1, Some(col)) => columns.push(col),
                _ => return Err(BoardParseError::QueenCount { row, found }),
            }
        }
        Ok(Self { columns })
    }

    /// Parse the flattened encoding. Any whitespace separates digits.
    pub fn parse_flattened(text: &str) -> Result<Self, BoardParseError> {
        let cells: Vec<&str> = text.split_whitespace().collect();
        if cells.is_empty() {
            return Err(BoardParseError::Empty);
        }
        let n = integer_sqrt(cells.len()).ok_or(BoardParseError::NotPerfectSquare {
            cells: cells.len(),
        })?;
        let mut columns = Vec::with_capacity(n);
        for (row, chunk) in cells.chunks(n).enumerate() {
            let mut queen = None;
            let mut found = 0;
            for (col, cell) in chunk.iter().enumerate() {
                match *cell {
                    "1" => {
                        found += 1;
                        queen = Some(col);
                    }
                    "0" => {}
                    other => {
                        return Err(BoardParseError::BadCell {
                            row,
                            cell: other.to_string(),
                        })
                    }
                }
            }
            match (found, queen) {
                (1, Some(col)) => columns.push(col),
                _ => return Err(BoardParseError::QueenCount { row, found }),
            }
        }
        Ok(Self { columns })
    }
}

fn integer_sqrt(cells: usize) -> Option<usize> {
    let root = (cells as f64).sqrt().round() as usize;
    (root * root == cells).then_some(root)
}
