//! Run records: a small JSON file next to each `solve --out` result that
//! says what was asked, what came back, and whether it agrees with the
//! published solution counts.

use anyhow::{Context, Result};
use nqueens::api::{known_count, Mode, SolveOptions, Solution};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub engine_version: &'static str,
    pub request: RunRequest,
    pub result: RunResult,
    pub elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct RunRequest {
    pub n: i64,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<i64>,
    pub encoding: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Full solution count; absent in first-only mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    pub boards: usize,
    /// Every written board parses and has no two queens attacking.
    pub boards_valid: bool,
    pub known_count: Option<u64>,
    /// Count (or, for first-only, solvability) agrees with `known_count`.
    pub matches_known: Option<bool>,
}

impl RunRecord {
    pub fn new(
        n: i64,
        options: &SolveOptions,
        timeout_ms: Option<u64>,
        solution: &Solution,
        elapsed: Duration,
    ) -> Self {
        let take = match options.mode {
            Mode::Enumerate => Some(options.take),
            Mode::FirstOnly => None,
        };
        Self {
            engine_version: nqueens::VERSION,
            request: RunRequest {
                n,
                mode: options.mode.as_str(),
                take,
                encoding: options.encoding().as_str(),
                timeout_ms,
            },
            result: RunResult::summarize(n, solution),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    /// Write `<stem>.run.json` beside `artifact`; returns the record path.
    pub fn write_next_to(&self, artifact: &Path) -> Result<PathBuf> {
        let path = record_path(artifact);
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

impl RunResult {
    fn summarize(n: i64, solution: &Solution) -> Self {
        let boards = solution.boards();
        let boards_valid = boards.iter().all(|b| {
            b.parse()
                .is_ok_and(|board| board.is_non_attacking() && board.n() as i64 == n)
        });
        let known = usize::try_from(n).ok().and_then(known_count);
        let (count, matches_known) = match solution {
            Solution::Enumerated { count, .. } => (Some(*count), known.map(|k| k == *count)),
            Solution::First { board } => (None, known.map(|k| (k > 0) == board.is_some())),
        };
        Self {
            count,
            boards: boards.len(),
            boards_valid,
            known_count: known,
            matches_known,
        }
    }
}

fn record_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("run.json")
}
