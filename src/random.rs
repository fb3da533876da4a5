//! Random number sourcing.
//!
//! Every operator takes the generator as an explicit `&mut R` argument, so a
//! run owns exactly one generator and tests can seed it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
///
/// The same seed always yields the same sequence.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from OS entropy.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}

/// Uniform integer sampling over inclusive ranges.
///
/// Implemented for every [`rand::Rng`], so any seeded `rand` generator can be
/// passed wherever a `RandomSource` is expected.
pub trait RandomSource {
    /// Returns a value uniformly distributed over `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;

    /// Returns a position uniformly distributed over `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    fn next_index(&mut self, min: usize, max: usize) -> usize;

    /// Samples the full `i32` range.
    fn next_any_int(&mut self) -> i32 {
        self.next_int(i32::MIN, i32::MAX)
    }

    /// Returns `true` with probability `1 / n`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    fn one_in(&mut self, n: u32) -> bool {
        assert!(n > 0, "one_in requires n >= 1");
        self.next_index(0, n as usize - 1) == 0
    }
}

impl<R: Rng> RandomSource for R {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "invalid range: min {min} > max {max}");
        self.random_range(min..=max)
    }

    fn next_index(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "invalid range: min {min} > max {max}");
        self.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_int_inclusive_bounds() {
        let mut rng = create_rng(42);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = rng.next_int(-1, 1);
            assert!((-1..=1).contains(&v));
            seen[(v + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "both bounds must be reachable: {seen:?}");
    }

    #[test]
    fn test_next_int_degenerate_range() {
        let mut rng = create_rng(7);
        for _ in 0..10 {
            assert_eq!(rng.next_int(5, 5), 5);
        }
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn test_next_int_rejects_inverted_range() {
        let mut rng = create_rng(42);
        rng.next_int(3, 2);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn test_next_index_rejects_inverted_range() {
        let mut rng = create_rng(42);
        rng.next_index(1, 0);
    }

    #[test]
    fn test_full_range_spans_both_signs() {
        let mut rng = create_rng(1);
        let samples: Vec<i32> = (0..200).map(|_| rng.next_any_int()).collect();
        assert!(samples.iter().any(|&v| v < 0));
        assert!(samples.iter().any(|&v| v >= 0));
    }

    #[test]
    fn test_one_in_rate() {
        let mut rng = create_rng(42);
        let n = 21_000;
        let hits = (0..n).filter(|_| rng.one_in(21)).count();
        // Expected 1000.
        assert!(
            (800..1200).contains(&hits),
            "expected about 1/21 hits, got {hits}/{n}"
        );
    }

    #[test]
    fn test_one_in_one_always_fires() {
        let mut rng = create_rng(42);
        assert!((0..100).all(|_| rng.one_in(1)));
    }

    #[test]
    fn test_seed_reproducibility() {
        let mut a = create_rng(99);
        let mut b = create_rng(99);
        let xs: Vec<i32> = (0..20).map(|_| a.next_int(0, 1000)).collect();
        let ys: Vec<i32> = (0..20).map(|_| b.next_int(0, 1000)).collect();
        assert_eq!(xs, ys);
    }
}
