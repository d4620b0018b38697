//! Search-level checks: counts, ordering, early stop, deadline, tracker reset.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use super::*;
use crate::known::known_count;

fn collect_all(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    search(n, &SearchCfg::default(), |p| {
        out.push(p.to_vec());
        ControlFlow::Continue(())
    });
    out
}

#[test]
fn counts_match_known_sequence() {
    for n in 1..=10 {
        assert_eq!(Some(count_solutions(n)), known_count(n), "n={n}");
    }
}

#[test]
fn small_boards_without_solutions() {
    // the general search agrees with the solver's n=2,3 fast path
    assert_eq!(count_solutions(2), 0);
    assert_eq!(count_solutions(3), 0);
}

#[test]
fn first_solutions_follow_ascending_column_order() {
    let four = collect_all(4);
    assert_eq!(four, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);

    let mut first = None;
    let summary = search(8, &SearchCfg::default(), |p| {
        first = Some(p.to_vec());
        ControlFlow::Break(())
    });
    assert_eq!(first, Some(vec![0, 4, 7, 5, 2, 6, 1, 3]));
    assert_eq!(summary.outcome, Outcome::Stopped);
    assert_eq!(summary.solutions, 1);
}

#[test]
fn enumeration_is_lexicographic_and_distinct() {
    let all = collect_all(6);
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn trackers_are_clear_after_every_kind_of_exit() {
    let full = search(7, &SearchCfg::default(), |_| ControlFlow::Continue(()));
    assert_eq!(full.outcome, Outcome::Exhausted);
    assert!(full.trackers_clear);

    let stopped = search(7, &SearchCfg::default(), |_| ControlFlow::Break(()));
    assert_eq!(stopped.outcome, Outcome::Stopped);
    assert!(stopped.trackers_clear);

    let cfg = SearchCfg {
        deadline: Some(Instant::now()),
    };
    let late = search(7, &cfg, |_| ControlFlow::Continue(()));
    assert!(late.trackers_clear);
}

#[test]
fn stop_after_k_solutions() {
    let mut seen = 0;
    let summary = search(8, &SearchCfg::default(), |_| {
        seen += 1;
        if seen == 5 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(summary.solutions, 5);
    assert_eq!(summary.outcome, Outcome::Stopped);
}

#[test]
fn passed_deadline_halts_before_first_row() {
    let cfg = SearchCfg {
        deadline: Some(Instant::now()),
    };
    let summary = search(8, &cfg, |_| ControlFlow::Continue(()));
    assert_eq!(summary.outcome, Outcome::DeadlineExceeded);
    assert_eq!(summary.solutions, 0);
    assert_eq!(summary.nodes, 0);
}

#[test]
fn distant_deadline_does_not_change_results() {
    let cfg = SearchCfg {
        deadline: Some(Instant::now() + Duration::from_secs(3600)),
    };
    let summary = search(8, &cfg, |_| ControlFlow::Continue(()));
    assert_eq!(summary.outcome, Outcome::Exhausted);
    assert_eq!(summary.solutions, 92);
}

#[test]
fn every_placement_is_non_attacking() {
    for n in 1..=8 {
        for p in collect_all(n) {
            let board = crate::board::Board::from_columns(p).unwrap();
            assert!(board.is_non_attacking(), "n={n} {:?}", board.columns());
        }
    }
}
