use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use nqueens::api::{
    count_solutions, known_count, parse_board_size, respond, solve, solve_within, Encoding, Mode,
    RenderedBoard, SolveOptions, SolveRequest, Solution, DEFAULT_TAKE, FIRST_ONLY_MAX_N,
    KNOWN_MAX_N, MAX_N,
};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod run_record;

use run_record::RunRecord;

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "N-Queens search engine runner")]
struct Cmd {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate or find placements for one board size
    Solve {
        /// Board size; whole numbers only
        #[arg(long, allow_hyphen_values = true)]
        n: String,
        /// Boards to keep in enumerate mode
        #[arg(long, default_value_t = DEFAULT_TAKE, allow_hyphen_values = true)]
        take: i64,
        #[arg(long, default_value = "enumerate")]
        mode: Mode,
        /// Defaults to grid for enumerate, flattened-binary for first-only
        #[arg(long)]
        encoding: Option<Encoding>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Abort the search after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Also write the JSON result here, with a `.run.json` record beside it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Read n from stdin and print the first solution as flattened 0/1 digits
    First,
    /// Answer a JSON request read from a file or stdin
    Request {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print solution counts for 1..=max next to the published values
    Table {
        #[arg(long, default_value_t = 10)]
        max: usize,
        #[arg(long)]
        json: bool,
    },
    /// Print engine version and size limits as JSON
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(log_level(cmd.verbose))
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            n,
            take,
            mode,
            encoding,
            json,
            timeout_ms,
            out,
        } => {
            let options = SolveOptions {
                mode,
                take,
                encoding,
            };
            run_solve(&n, &options, json, timeout_ms, out.as_deref())
        }
        Action::First => first(),
        Action::Request { input } => request(input.as_deref()),
        Action::Table { max, json } => table(max, json),
        Action::Report => report(),
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run_solve(
    raw_n: &str,
    options: &SolveOptions,
    json: bool,
    timeout_ms: Option<u64>,
    out: Option<&Path>,
) -> Result<()> {
    let n = parse_board_size(raw_n)?;
    tracing::info!(n, mode = options.mode.as_str(), take = options.take, "solve");
    let started = Instant::now();
    let solution = match timeout_ms {
        Some(ms) => solve_within(n, options, started + Duration::from_millis(ms))?,
        None => solve(n, options)?,
    };
    let elapsed = started.elapsed();
    tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "solved");

    if let Some(path) = out {
        let record = RunRecord::new(n, options, timeout_ms, &solution, elapsed);
        write_result(path, &solution, &record)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{}", render_text(&solution));
    }
    Ok(())
}

fn write_result(path: &Path, solution: &Solution, record: &RunRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(solution)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let record_path = record.write_next_to(path)?;
    if record.result.matches_known == Some(false) {
        tracing::warn!(record = %record_path.display(), "result disagrees with published count");
    }
    tracing::info!(out = %path.display(), record = %record_path.display(), "wrote result");
    Ok(())
}

/// Plain-text rendering: a count line and blank-line separated boards for
/// enumerate; the single board line (or `no solution`) for first-only.
fn render_text(solution: &Solution) -> String {
    let mut out = String::new();
    match solution {
        Solution::Enumerated { count, boards } => {
            out.push_str(&format!("count={count}\n"));
            for board in boards {
                out.push('\n');
                push_board(&mut out, board);
            }
        }
        Solution::First { board: Some(board) } => push_board(&mut out, board),
        Solution::First { board: None } => out.push_str("no solution\n"),
    }
    out
}

fn push_board(out: &mut String, board: &RenderedBoard) {
    match board {
        RenderedBoard::Grid(rows) => {
            for row in rows {
                out.push_str(row);
                out.push('\n');
            }
        }
        RenderedBoard::Flattened(line) => {
            out.push_str(line);
            out.push('\n');
        }
    }
}

/// Stdin program: one size in, one flattened board out (empty line when the
/// size has no solution).
fn first() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading n from stdin")?;
    let line = first_line(&input)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    Ok(())
}

fn first_line(input: &str) -> Result<String> {
    let n = parse_board_size(input)?;
    match solve(n, &SolveOptions::first_only())? {
        Solution::First { board: Some(board) } => match board {
            RenderedBoard::Flattened(line) => Ok(line),
            RenderedBoard::Grid(rows) => Ok(rows.join(" ")),
        },
        Solution::First { board: None } => Ok(String::new()),
        Solution::Enumerated { .. } => bail!("first-only solve returned an enumeration"),
    }
}

fn request(input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    let req: SolveRequest = serde_json::from_str(&text).context("parsing solve request")?;
    tracing::info!(n = ?req.n, "request");
    println!("{}", serde_json::to_string_pretty(&respond(&req))?);
    Ok(())
}

#[derive(Debug, Serialize)]
struct TableRow {
    n: usize,
    count: u64,
    known: Option<u64>,
}

impl TableRow {
    fn matches(&self) -> Option<bool> {
        self.known.map(|k| k == self.count)
    }
}

fn table_rows(max: usize) -> Vec<TableRow> {
    (1..=max)
        .map(|n| {
            let count = count_solutions(n);
            tracing::debug!(n, count, "counted");
            TableRow {
                n,
                count,
                known: known_count(n),
            }
        })
        .collect()
}

fn table(max: usize, json: bool) -> Result<()> {
    let rows = table_rows(max);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("{:>3}  {:>12}  {:>12}", "n", "count", "known");
    for row in &rows {
        let known = row.known.map_or_else(|| "-".to_string(), |k| k.to_string());
        let mark = match row.matches() {
            Some(true) => "ok",
            Some(false) => "MISMATCH",
            None => "?",
        };
        println!("{:>3}  {:>12}  {:>12}  {mark}", row.n, row.count, known);
    }
    if rows.iter().any(|r| r.matches() == Some(false)) {
        bail!("computed counts disagree with published values");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "engine_version": nqueens::VERSION,
        "first_only_max_n": FIRST_ONLY_MAX_N,
        "max_n": MAX_N,
        "known_counts_up_to": KNOWN_MAX_N,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
