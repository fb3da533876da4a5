//! Integer target search.
//!
//! Genomes are raw `i32` values. Crossover and mutation work on the bit
//! pattern, so the search can move between distant numbers in one step.

use crate::ga::operators::{bit_crossover, bit_flip};
use crate::ga::selection::number_replacement;
use crate::ga::{GaConfig, GaProblem, Population};
use crate::random::RandomSource;

/// Penalty added when a candidate's sign differs from the target's.
pub const SIGN_PENALTY: i32 = 100_000;

/// Searches for a fixed target integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberSearch {
    target: i32,
}

impl NumberSearch {
    pub fn new(target: i32) -> Self {
        Self { target }
    }

    /// The conventional demo target: `i32::MAX / 10_000_000`, i.e. 214.
    pub fn default_target() -> Self {
        Self::new(i32::MAX / 10_000_000)
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    /// Scores `value` against the target.
    ///
    /// `| |target| - |value| |`, plus [`SIGN_PENALTY`] when exactly one of
    /// the two is negative. A score that does not fit in `i32` is clamped to
    /// `i32::MAX`.
    pub fn fitness(&self, value: i32) -> i32 {
        let diff = self.target.unsigned_abs().abs_diff(value.unsigned_abs());
        let penalty = if (self.target >= 0) != (value >= 0) {
            SIGN_PENALTY
        } else {
            0
        };
        i32::try_from(diff)
            .ok()
            .and_then(|d| d.checked_add(penalty))
            .filter(|score| *score >= 0)
            .unwrap_or(i32::MAX)
    }
}

impl Default for NumberSearch {
    fn default() -> Self {
        Self::default_target()
    }
}

impl GaProblem for NumberSearch {
    type Genome = i32;
    type Fitness = i32;

    fn create_genome<R: RandomSource>(&self, rng: &mut R) -> i32 {
        rng.next_any_int()
    }

    fn evaluate(&self, genome: &i32) -> i32 {
        self.fitness(*genome)
    }

    fn crossover<R: RandomSource>(&self, parent1: &i32, parent2: &i32, rng: &mut R) -> (i32, i32) {
        bit_crossover(*parent1, *parent2, rng)
    }

    fn mutate<R: RandomSource>(&self, genome: &mut i32, rng: &mut R) {
        *genome = bit_flip(*genome, rng);
    }

    fn advance<R: RandomSource>(
        &self,
        population: &mut Population<i32>,
        config: &GaConfig,
        rng: &mut R,
    ) {
        number_replacement(self, population, config, rng);
    }
}
