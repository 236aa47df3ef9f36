//! Simultaneous minimum and maximum by divide and conquer.
//!
//! Splitting in half and comparing only the two mins and the two maxes when merging costs about
//! ⌈3n/2⌉ − 2 comparisons, against 2(n − 1) for scanning once for the min and once for the max.
use crate::error::{Error, Result};
use log::trace;

/// Result of [`min_max`]. `min` and `max` borrow from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax<'a, T> {
    pub min: &'a T,
    pub max: &'a T,
    /// Number of `<`/`>` evaluations performed.
    pub comparisons: usize,
    /// Number of elements in the input.
    pub len: usize,
}

impl<T> MinMax<'_, T> {
    /// Comparisons the naive two pass scan would do: 2(n − 1)
    pub fn naive_comparisons(&self) -> usize {
        2 * (self.len - 1)
    }

    /// ⌈3n/2⌉ − 2, the lower bound for any comparison based min & max (when n ≥ 2)
    pub fn optimal_comparisons(&self) -> usize {
        if self.len < 2 {
            0
        } else {
            (3 * self.len).div_ceil(2) - 2
        }
    }
}

/// Find the smallest and largest element of `values`, counting comparisons.
///
/// Returns `Error::InvalidArgument` for an empty slice.
pub fn min_max<T: PartialOrd>(values: &[T]) -> Result<MinMax<'_, T>> {
    if values.is_empty() {
        return Err(Error::invalid_argument("min_max needs at least one value"));
    }
    let (min, max, comparisons) = min_max_rec(values);
    trace!(
        "min_max of {} values took {} comparisons",
        values.len(),
        comparisons
    );
    Ok(MinMax {
        min,
        max,
        comparisons,
        len: values.len(),
    })
}

/// `values` must not be empty.
fn min_max_rec<T: PartialOrd>(values: &[T]) -> (&T, &T, usize) {
    match values {
        [only] => (only, only, 0),
        [a, b] => {
            if a < b {
                (a, b, 1)
            } else {
                (b, a, 1)
            }
        }
        _ => {
            let (left, right) = values.split_at(values.len() / 2);
            let (min_l, max_l, count_l) = min_max_rec(left);
            let (min_r, max_r, count_r) = min_max_rec(right);

            let min = if min_l < min_r { min_l } else { min_r };
            let max = if max_l > max_r { max_l } else { max_r };
            (min, max, count_l + count_r + 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    macro_rules! test_min_max {
        ( $name:ident, $input:expr, $min:expr, $max:expr, $comparisons:expr ) => {
            #[test]
            fn $name() {
                let input = $input;
                let res = min_max(&input).unwrap();
                assert_eq!(*res.min, $min);
                assert_eq!(*res.max, $max);
                assert_eq!(res.comparisons, $comparisons);
            }
        };
    }

    test_min_max!(single, [7], 7, 7, 0);
    test_min_max!(two, [4, 2], 2, 4, 1);
    test_min_max!(two_sorted, [2, 4], 2, 4, 1);
    test_min_max!(three, [3, 1, 2], 1, 3, 3);
    test_min_max!(six, [5, 3, 8, 1, 9, 2], 1, 9, 8);
    test_min_max!(all_equal, [5, 5, 5, 5], 5, 5, 4);
    test_min_max!(negative, [-3, -10000, 42, 0], -10000, 42, 4);
    test_min_max!(floats, [0.5, -1.25, 3.0], -1.25, 3.0, 3);

    #[test]
    fn empty() {
        let input: [i64; 0] = [];
        assert!(matches!(min_max(&input), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn borrows_from_input() {
        let input = vec![String::from("pear"), String::from("apple"), String::from("zucchini")];
        let res = min_max(&input).unwrap();
        assert!(std::ptr::eq(res.min, &input[1]));
        assert!(std::ptr::eq(res.max, &input[2]));
    }

    /// Same recurrence, just counting
    fn expected_count(n: usize) -> usize {
        match n {
            1 => 0,
            2 => 1,
            _ => expected_count(n / 2) + expected_count(n - n / 2) + 2,
        }
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let len = rng.gen_range(1..=200);
            let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-10_000..=10_000)).collect();
            let res = min_max(&values).unwrap();
            assert_eq!(res.min, values.iter().min().unwrap());
            assert_eq!(res.max, values.iter().max().unwrap());
            assert_eq!(res.len, len);
        }
    }

    #[test]
    fn comparison_bounds() {
        for n in 1..=300 {
            let values: Vec<usize> = (0..n).rev().collect();
            let res = min_max(&values).unwrap();
            assert_eq!(res.comparisons, expected_count(n), "n={}", n);
            assert!(res.comparisons <= res.naive_comparisons(), "n={}", n);
            assert!(res.comparisons >= res.optimal_comparisons(), "n={}", n);
        }
    }

    #[test]
    fn powers_of_two_are_optimal() {
        for exp in 1..12 {
            let n = 1_usize << exp;
            let values: Vec<usize> = (0..n).collect();
            let res = min_max(&values).unwrap();
            assert_eq!(res.comparisons, 3 * n / 2 - 2);
            assert_eq!(res.comparisons, res.optimal_comparisons());
        }
    }

    #[test]
    fn idempotent() {
        let values = [9, -4, 17, 3, 3, 0, 12];
        assert_eq!(min_max(&values).unwrap(), min_max(&values).unwrap());
    }
}
