//! Survivor selection and replacement policies.
//!
//! Both policies are truncation schemes: the better half of the population
//! survives and breeds, and its offspring overwrite the worse half. They
//! differ in how parents are paired and how survivors are perturbed.
//!
//! - [`paired_replacement`]: consecutive survivors breed, survivors are
//!   lightly mutated, the population is re-sorted. Generic over any
//!   [`GaProblem`].
//! - [`number_replacement`]: sign-correcting elitism, mutation of the
//!   weaker survivors, random partners, gene replacement of children.
//!   Specific to `i32` genomes.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::config::GaConfig;
use super::operators::{bit_flip, gene_replace};
use super::population::Population;
use super::types::GaProblem;
use crate::random::RandomSource;

/// Paired replacement.
///
/// Expects the population sorted ascending on entry. With `half = len / 2`:
///
/// 1. Each disjoint pair `(i, i + 1)` of the top half produces two children
///    via [`GaProblem::crossover`]; each child mutates with
///    `1 / child_mutation_odds`; the children overwrite slots `half + i` and
///    `half + i + 1`
/// 2. Every survivor in the top half mutates with
///    `1 / survivor_mutation_odds`
/// 3. The population is re-sorted
///
/// When `half` is odd the last survivor has no partner and the last slot of
/// the bottom half keeps its previous genome.
pub fn paired_replacement<P, R>(
    problem: &P,
    population: &mut Population<P::Genome>,
    config: &GaConfig,
    rng: &mut R,
) where
    P: GaProblem,
    R: RandomSource,
{
    let half = population.len() / 2;

    let mut i = 0;
    while i + 1 < half {
        let (mut c1, mut c2) = problem.crossover(&population[i], &population[i + 1], rng);

        if rng.one_in(config.child_mutation_odds) {
            problem.mutate(&mut c1, rng);
        }
        if rng.one_in(config.child_mutation_odds) {
            problem.mutate(&mut c2, rng);
        }

        population[half + i] = c1;
        population[half + i + 1] = c2;
        i += 2;
    }

    for i in 0..half {
        if rng.one_in(config.survivor_mutation_odds) {
            problem.mutate(&mut population[i], rng);
        }
    }

    population.sort_by_fitness(problem);
}

/// Replacement for integer genomes.
///
/// With `half = len / 2`:
///
/// 1. Sort ascending
/// 2. In the top quarter, replace each genome by its negation when that
///    scores strictly better
/// 3. In the second quarter, bit-flip each genome with
///    `1 / survivor_mutation_odds`
/// 4. For `i = 0, 2, 4, … < half`, cross genome `i` with a partner drawn
///    uniformly from the whole top half. Each child bit-flips with
///    `1 / child_mutation_odds`, then gene-replaces with
///    `1 / gene_replace_odds`. Children fill the bottom half from slot
///    `half` onward, stopping before a pair would overflow
///
/// The partner draw includes `i` itself, so a genome can be crossed with
/// itself and reproduce unchanged (modulo mutation).
///
/// The population is left unsorted.
pub fn number_replacement<P, R>(
    problem: &P,
    population: &mut Population<i32>,
    config: &GaConfig,
    rng: &mut R,
) where
    P: GaProblem<Genome = i32>,
    R: RandomSource,
{
    population.sort_by_fitness(problem);

    let size = population.len();
    let half = size / 2;
    if half == 0 {
        return;
    }

    for i in 0..half / 2 {
        let flipped = population[i].wrapping_neg();
        if problem.evaluate(&flipped) < problem.evaluate(&population[i]) {
            population[i] = flipped;
        }
    }

    for i in half / 2..half {
        if rng.one_in(config.survivor_mutation_odds) {
            population[i] = bit_flip(population[i], rng);
        }
    }

    let mut j = half;
    for i in (0..half).step_by(2) {
        let partner = rng.next_index(0, half - 1);
        let (mut c1, mut c2) = problem.crossover(&population[i], &population[partner], rng);

        if rng.one_in(config.child_mutation_odds) {
            c1 = bit_flip(c1, rng);
        }
        if rng.one_in(config.child_mutation_odds) {
            c2 = bit_flip(c2, rng);
        }

        if rng.one_in(config.gene_replace_odds) {
            c1 = gene_replace(c1, rng);
        }
        if rng.one_in(config.gene_replace_odds) {
            c2 = gene_replace(c2, rng);
        }

        if j + 1 >= size {
            break;
        }
        population[j] = c1;
        population[j + 1] = c2;
        j += 2;
    }
}
