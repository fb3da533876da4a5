//! Fixed-size, fitness-ordered population.

use super::types::{Fitness, GaProblem};
use crate::random::RandomSource;
use std::ops::{Index, IndexMut};

/// An ordered collection of genomes whose size never changes.
///
/// Slots are overwritten in place; genomes are never added or removed after
/// construction. Order is only meaningful right after
/// [`sort_by_fitness`](Population::sort_by_fitness).
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G> {
    genomes: Vec<G>,
}

impl<G: Clone> Population<G> {
    /// Wraps an existing set of genomes.
    pub fn from_genomes(genomes: Vec<G>) -> Self {
        Self { genomes }
    }

    /// Creates `size` independently random genomes.
    pub fn random<P, R>(problem: &P, size: usize, rng: &mut R) -> Self
    where
        P: GaProblem<Genome = G>,
        R: RandomSource,
    {
        let genomes = (0..size).map(|_| problem.create_genome(rng)).collect();
        Self { genomes }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Whether the population has no slots.
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// The genomes in current slot order.
    pub fn genomes(&self) -> &[G] {
        &self.genomes
    }

    /// The genome in slot 0, the best one after a sort.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &G {
        self.genomes.first().expect("population must not be empty")
    }

    /// Sorts ascending by fitness (best first).
    ///
    /// Every genome is scored once per call; the sort is stable, so genomes
    /// of equal fitness keep their relative order.
    pub fn sort_by_fitness<P>(&mut self, problem: &P)
    where
        P: GaProblem<Genome = G>,
    {
        let mut scored: Vec<(P::Fitness, G)> = self
            .genomes
            .drain(..)
            .map(|g| (problem.evaluate(&g), g))
            .collect();
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        self.genomes = scored.into_iter().map(|(_, g)| g).collect();
    }

    /// Fitness of the genome in slot 0, or the worst fitness if empty.
    pub fn best_fitness<P>(&self, problem: &P) -> P::Fitness
    where
        P: GaProblem<Genome = G>,
    {
        self.genomes
            .first()
            .map_or_else(<P::Fitness as Fitness>::worst, |g| problem.evaluate(g))
    }

    /// Lowest fitness over all slots, regardless of order.
    pub fn min_fitness<P>(&self, problem: &P) -> P::Fitness
    where
        P: GaProblem<Genome = G>,
    {
        self.genomes
            .iter()
            .map(|g| problem.evaluate(g))
            .fold(<P::Fitness as Fitness>::worst(), |best, f| {
                if f < best {
                    f
                } else {
                    best
                }
            })
    }
}

impl<G> Index<usize> for Population<G> {
    type Output = G;

    fn index(&self, index: usize) -> &G {
        &self.genomes[index]
    }
}

impl<G> IndexMut<usize> for Population<G> {
    fn index_mut(&mut self, index: usize) -> &mut G {
        &mut self.genomes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    struct Distance {
        target: i32,
    }

    impl GaProblem for Distance {
        type Genome = i32;
        type Fitness = i32;

        fn create_genome<R: RandomSource>(&self, rng: &mut R) -> i32 {
            rng.next_int(-100, 100)
        }

        fn evaluate(&self, g: &i32) -> i32 {
            (g - self.target).abs()
        }

        fn crossover<R: RandomSource>(&self, a: &i32, b: &i32, _rng: &mut R) -> (i32, i32) {
            (*a, *b)
        }

        fn mutate<R: RandomSource>(&self, g: &mut i32, _rng: &mut R) {
            *g += 1;
        }
    }

    #[test]
    fn test_random_population_size() {
        let mut rng = create_rng(42);
        let pop = Population::random(&Distance { target: 0 }, 50, &mut rng);
        assert_eq!(pop.len(), 50);
        assert!(pop.genomes().iter().all(|g| (-100..=100).contains(g)));
    }

    #[test]
    fn test_sort_by_fitness_ascending() {
        let problem = Distance { target: 10 };
        let mut pop = Population::from_genomes(vec![0, 30, 11, 10, -5, 9]);
        pop.sort_by_fitness(&problem);
        assert_eq!(pop.genomes(), &[10, 11, 9, 0, -5, 30]);
        assert_eq!(*pop.best(), 10);
        assert_eq!(pop.best_fitness(&problem), 0);
    }

    #[test]
    fn test_min_fitness_ignores_order() {
        let problem = Distance { target: 10 };
        let pop = Population::from_genomes(vec![0, 30, 12, -5]);
        assert_eq!(pop.min_fitness(&problem), 2);
        assert_eq!(pop.best_fitness(&problem), 10);
    }

    #[test]
    fn test_sort_rescores_after_mutation() {
        let problem = Distance { target: 0 };
        let mut pop = Population::from_genomes(vec![1, 5]);
        pop.sort_by_fitness(&problem);
        pop[1] = 0;
        pop.sort_by_fitness(&problem);
        assert_eq!(pop.genomes(), &[0, 1]);
    }

    #[test]
    fn test_empty_best_fitness_is_worst() {
        let pop: Population<i32> = Population::from_genomes(vec![]);
        assert!(pop.is_empty());
        assert_eq!(pop.best_fitness(&Distance { target: 0 }), i32::MAX);
    }

    #[test]
    #[should_panic(expected = "population must not be empty")]
    fn test_best_of_empty_panics() {
        let pop: Population<i32> = Population::from_genomes(vec![]);
        pop.best();
    }
}
