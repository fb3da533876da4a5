//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic generational loop and
//! a concrete search problem: how genomes are created, scored, recombined
//! and perturbed, and how one generation replaces the weak half of the
//! population.

use super::config::GaConfig;
use super::population::Population;
use crate::random::RandomSource;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization).
///
/// Built-in implementations exist for `f64` and `i32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for i32 {
    fn worst() -> Self {
        i32::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Defines a GA search problem.
///
/// This is the trait that plugs a genome representation into the generic
/// loop. It covers:
///
/// 1. **Initialization**: how to create a random genome
/// 2. **Evaluation**: how to compute fitness (lower is better)
/// 3. **Crossover**: how two parents produce two children
/// 4. **Mutation**: how a single genome is perturbed in place
/// 5. **Replacement**: how one generation rewrites the population
///
/// Fitness is never stored on the genome. The population is re-scored
/// every time it is sorted, so a mutated genome can never carry a stale
/// score.
///
/// # Implementing
///
/// ```ignore
/// struct Parity;
///
/// impl GaProblem for Parity {
///     type Genome = i32;
///     type Fitness = i32;
///     fn create_genome<R: RandomSource>(&self, rng: &mut R) -> i32 { rng.next_any_int() }
///     fn evaluate(&self, g: &i32) -> i32 { g.rem_euclid(2) }
///     fn crossover<R: RandomSource>(&self, a: &i32, b: &i32, _: &mut R) -> (i32, i32) { (*a, *b) }
///     fn mutate<R: RandomSource>(&self, g: &mut i32, _: &mut R) { *g ^= 1; }
/// }
/// ```
pub trait GaProblem {
    /// The genome (candidate solution) type.
    type Genome: Clone + std::fmt::Debug;

    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Creates a random genome.
    ///
    /// Called once per slot during population initialization.
    fn create_genome<R: RandomSource>(&self, rng: &mut R) -> Self::Genome;

    /// Scores a genome. Lower values are better.
    fn evaluate(&self, genome: &Self::Genome) -> Self::Fitness;

    /// Produces two children by recombining two parents.
    fn crossover<R: RandomSource>(
        &self,
        parent1: &Self::Genome,
        parent2: &Self::Genome,
        rng: &mut R,
    ) -> (Self::Genome, Self::Genome);

    /// Mutates a genome in place.
    fn mutate<R: RandomSource>(&self, genome: &mut Self::Genome, rng: &mut R);

    /// Advances the population by one generation.
    ///
    /// The runner sorts the population once before the first generation and
    /// once after the last; in between, each call sees the order the previous
    /// call left behind.
    ///
    /// The default is the paired replacement policy: consecutive pairs of
    /// the top half breed into the bottom half, survivors are lightly
    /// mutated, then the population is re-sorted.
    fn advance<R: RandomSource>(
        &self,
        population: &mut Population<Self::Genome>,
        config: &GaConfig,
        rng: &mut R,
    ) where
        Self: Sized,
    {
        super::selection::paired_replacement(self, population, config, rng);
    }

    /// Called at the end of each generation with the current best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Self::Fitness) {}
}
