//! Conflict trackers: which columns and diagonals are taken.
//!
//! Fixed-size boolean tables replace per-key sets. Rising diagonals are keyed
//! by `row - col` shifted by `n - 1` so the key is non-negative; falling
//! diagonals by `row + col`. Both ranges have `2n - 1` keys.

use std::collections::TryReserveError;

#[derive(Clone, Debug)]
pub(crate) struct Occupancy {
    n: usize,
    cols: Vec<bool>,
    rising: Vec<bool>,
    falling: Vec<bool>,
}

impl Occupancy {
    pub(crate) fn new(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            cols: vec![false; n],
            rising: vec![false; diagonals],
            falling: vec![false; diagonals],
        }
    }

    pub(crate) fn try_new(n: usize) -> Result<Self, TryReserveError> {
        let diagonals = n.saturating_mul(2).saturating_sub(1);
        Ok(Self {
            n,
            cols: filled(n, false)?,
            rising: filled(diagonals, false)?,
            falling: filled(diagonals, false)?,
        })
    }

    #[inline]
    fn rising_key(&self, row: usize, col: usize) -> usize {
        row + (self.n - 1) - col
    }

    #[inline]
    fn falling_key(row: usize, col: usize) -> usize {
        row + col
    }

    #[inline]
    pub(crate) fn is_free(&self, row: usize, col: usize) -> bool {
        !self.cols[col]
            && !self.rising[self.rising_key(row, col)]
            && !self.falling[Self::falling_key(row, col)]
    }

    #[inline]
    pub(crate) fn occupy(&mut self, row: usize, col: usize) {
        debug_assert!(self.is_free(row, col));
        self.set(row, col, true);
    }

    #[inline]
    pub(crate) fn release(&mut self, row: usize, col: usize) {
        debug_assert!(self.cols[col]);
        self.set(row, col, false);
    }

    fn set(&mut self, row: usize, col: usize, taken: bool) {
        let r = self.rising_key(row, col);
        self.cols[col] = taken;
        self.rising[r] = taken;
        self.falling[Self::falling_key(row, col)] = taken;
    }

    /// True when no key is held.
    pub(crate) fn is_clear(&self) -> bool {
        self.cols
            .iter()
            .chain(&self.rising)
            .chain(&self.falling)
            .all(|taken| !taken)
    }
}

/// `vec![value; len]` that fails instead of aborting when memory runs out.
pub(crate) fn filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_cover_all_keys() {
        let occ = Occupancy::new(5);
        assert_eq!(occ.cols.len(), 5);
        assert_eq!(occ.rising.len(), 9);
        assert_eq!(occ.falling.len(), 9);
        // corner keys stay in bounds
        assert_eq!(occ.rising_key(0, 4), 0);
        assert_eq!(occ.rising_key(4, 0), 8);
        assert_eq!(Occupancy::falling_key(4, 4), 8);
    }

    #[test]
    fn fallible_tables_match_infallible_ones() {
        let occ = Occupancy::try_new(6).unwrap();
        assert_eq!(occ.cols.len(), 6);
        assert_eq!(occ.rising.len(), 11);
        assert!(occ.is_clear());
        assert!(filled(usize::MAX / 2, 0u64).is_err());
    }

    #[test]
    fn occupy_blocks_column_and_both_diagonals() {
        let mut occ = Occupancy::new(4);
        occ.occupy(1, 1);
        assert!(!occ.is_free(3, 1)); // column
        assert!(!occ.is_free(2, 2)); // row - col
        assert!(!occ.is_free(2, 0)); // row + col
        assert!(occ.is_free(2, 3));
        occ.release(1, 1);
        assert!(occ.is_clear());
        assert!(occ.is_free(2, 2));
    }
}
