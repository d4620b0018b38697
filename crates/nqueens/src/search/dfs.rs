//! Depth-first backtracking over rows with O(1) conflict checks.

use std::collections::TryReserveError;
use std::ops::ControlFlow;
use std::time::Instant;

use super::occupancy::{filled, Occupancy};
use super::types::{Outcome, SearchCfg, SearchSummary};

/// Run the search and hand every complete placement to `visit`, in discovery
/// order. Returning `ControlFlow::Break(())` from `visit` ends the search.
pub fn search<F>(n: usize, cfg: &SearchCfg, visit: F) -> SearchSummary
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    DfsRunner::new(vec![0; n], Occupancy::new(n), cfg, visit).run()
}

/// Like `search`, but reports a failed table allocation instead of aborting.
pub fn try_search<F>(
    n: usize,
    cfg: &SearchCfg,
    visit: F,
) -> Result<SearchSummary, TryReserveError>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    let placement = filled(n, 0usize)?;
    let occupancy = Occupancy::try_new(n)?;
    Ok(DfsRunner::new(placement, occupancy, cfg, visit).run())
}

/// Count every solution without materializing boards.
pub fn count_solutions(n: usize) -> u64 {
    search(n, &SearchCfg::default(), |_| ControlFlow::Continue(())).solutions
}

/// DFS runner owning the placement and trackers for one call.
struct DfsRunner<'a, F> {
    n: usize,
    cfg: &'a SearchCfg,
    placement: Vec<usize>,
    occupancy: Occupancy,
    solutions: u64,
    nodes: u64,
    visit: F,
}

impl<'a, F> DfsRunner<'a, F>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    fn new(placement: Vec<usize>, occupancy: Occupancy, cfg: &'a SearchCfg, visit: F) -> Self {
        Self {
            n: placement.len(),
            cfg,
            placement,
            occupancy,
            solutions: 0,
            nodes: 0,
            visit,
        }
    }

    fn run(mut self) -> SearchSummary {
        let outcome = match self.recur(0) {
            ControlFlow::Continue(()) => Outcome::Exhausted,
            ControlFlow::Break(halt) => halt,
        };
        debug_assert!(self.occupancy.is_clear());
        SearchSummary {
            solutions: self.solutions,
            nodes: self.nodes,
            outcome,
            trackers_clear: self.occupancy.is_clear(),
        }
    }

    fn recur(&mut self, row: usize) -> ControlFlow<Outcome> {
        if row == self.n {
            self.solutions += 1;
            return match (self.visit)(&self.placement) {
                ControlFlow::Continue(()) => ControlFlow::Continue(()),
                ControlFlow::Break(()) => ControlFlow::Break(Outcome::Stopped),
            };
        }
        if let Some(deadline) = self.cfg.deadline {
            if Instant::now() >= deadline {
                return ControlFlow::Break(Outcome::DeadlineExceeded);
            }
        }
        for col in 0..self.n {
            if !self.occupancy.is_free(row, col) {
                continue;
            }
            self.occupancy.occupy(row, col);
            self.placement[row] = col;
            self.nodes += 1;
            let flow = self.recur(row + 1);
            self.occupancy.release(row, col);
            if let ControlFlow::Break(halt) = flow {
                return ControlFlow::Break(halt);
            }
        }
        ControlFlow::Continue(())
    }
}
