//! Property checks over the public solver contract.

use nqueens::cfg::MAX_N;
use nqueens::known::known_count;
use nqueens::{solve, Encoding, InvalidInputError, Mode, SolveOptions, Solution};
use proptest::prelude::*;

fn encoding() -> impl Strategy<Value = Option<Encoding>> {
    prop_oneof![
        Just(None),
        Just(Some(Encoding::Grid)),
        Just(Some(Encoding::FlattenedBinary)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn enumerate_keeps_min_of_count_and_take(n in 1i64..=8, take in 0i64..120, enc in encoding()) {
        let opts = SolveOptions { mode: Mode::Enumerate, take, encoding: enc };
        let sol = solve(n, &opts).unwrap();
        let count = match &sol {
            Solution::Enumerated { count, .. } => *count,
            Solution::First { .. } => unreachable!(),
        };
        prop_assert_eq!(Some(count), known_count(n as usize));
        prop_assert_eq!(sol.boards().len() as u64, count.min(take as u64));

        let mut seen = std::collections::HashSet::new();
        for rendered in sol.boards() {
            let board = rendered.parse().unwrap();
            prop_assert_eq!(board.n(), n as usize);
            prop_assert!(board.is_non_attacking());
            prop_assert!(seen.insert(board));
        }
    }

    #[test]
    fn first_only_is_valid_within_range(n in 1i64..=12) {
        let sol = solve(n, &SolveOptions::first_only()).unwrap();
        match sol.boards() {
            [] => {
                prop_assert!(n == 2 || n == 3);
            }
            [rendered] => {
                prop_assert_eq!(rendered.encoding(), Encoding::FlattenedBinary);
                let board = rendered.parse().unwrap();
                prop_assert_eq!(board.n(), n as usize);
                prop_assert!(board.is_non_attacking());
            }
            more => {
                prop_assert!(false, "first-only returned {} boards", more.len());
            }
        }
    }

    #[test]
    fn first_only_rejects_sizes_above_twelve(n in 13i64..10_000) {
        let is_out_of_range = matches!(
            solve(n, &SolveOptions::first_only()),
            Err(InvalidInputError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn non_positive_sizes_are_rejected(n in i64::MIN..=0, first in any::<bool>()) {
        let opts = if first { SolveOptions::first_only() } else { SolveOptions::enumerate(1) };
        prop_assert_eq!(solve(n, &opts).unwrap_err(), InvalidInputError::NotPositive { n });
    }

    #[test]
    fn sizes_above_addressable_limit_are_rejected(n in (MAX_N + 1)..=i64::MAX) {
        prop_assert_eq!(
            solve(n, &SolveOptions::enumerate(0)).unwrap_err(),
            InvalidInputError::OutOfRange { n, min: 1, max: MAX_N }
        );
    }

    #[test]
    fn negative_take_is_rejected(n in 1i64..=8, take in i64::MIN..0) {
        prop_assert_eq!(
            solve(n, &SolveOptions::enumerate(take)).unwrap_err(),
            InvalidInputError::NegativeTake { take }
        );
    }

    #[test]
    fn fractional_sizes_are_rejected(
        whole in 1i64..50,
        frac in 0.01f64..0.99,
        first in any::<bool>(),
    ) {
        let raw = format!("{}", whole as f64 + frac);
        let opts = if first { SolveOptions::first_only() } else { SolveOptions::default() };
        let is_not_integer = matches!(
            nqueens::api::solve_str(&raw, &opts),
            Err(InvalidInputError::NotInteger { .. })
        );
        prop_assert!(is_not_integer);
    }
}
