//! Published N-Queens solution counts (OEIS A000170), for cross-checks.

const KNOWN_COUNTS: [u64; 16] = [
    1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2_680, 14_200, 73_712, 365_596, 2_279_184, 14_772_512,
];

/// Known number of solutions for `1 <= n <= 16`; `None` outside the table.
pub fn known_count(n: usize) -> Option<u64> {
    n.checked_sub(1).and_then(|i| KNOWN_COUNTS.get(i).copied())
}

/// Largest `n` covered by `known_count`.
pub const KNOWN_MAX_N: usize = KNOWN_COUNTS.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_bounds() {
        assert_eq!(known_count(0), None);
        assert_eq!(known_count(1), Some(1));
        assert_eq!(known_count(8), Some(92));
        assert_eq!(known_count(KNOWN_MAX_N), Some(14_772_512));
        assert_eq!(known_count(KNOWN_MAX_N + 1), None);
    }
}
