//! Print the solution count and the first few boards for one size.
//!
//! Usage:
//!   cargo run -p nqueens --example print_boards -- 6 3

use nqueens::{solve, RenderedBoard, SolveOptions, Solution};

fn main() {
    let mut args = std::env::args().skip(1);
    let n: i64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
    let take: i64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2);

    match solve(n, &SolveOptions::enumerate(take)) {
        Ok(Solution::Enumerated { count, boards }) => {
            println!("n={n} solutions={count}");
            for (i, board) in boards.iter().enumerate() {
                println!("board {i}:");
                if let RenderedBoard::Grid(rows) = board {
                    for row in rows {
                        println!("  {row}");
                    }
                }
            }
        }
        Ok(other) => println!("{other:?}"),
        Err(err) => eprintln!("error: {err}"),
    }
}
