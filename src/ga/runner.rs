//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → sort → (replacement → repeat) → final sort.

use super::config::{ConfigError, GaConfig};
use super::population::Population;
use super::types::{Fitness, GaProblem};
use crate::random::{create_rng, entropy_rng, RandomSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA run.
///
/// Contains the final population, sorted best first, along with statistics
/// about the run.
#[derive(Debug, Clone)]
pub struct GaResult<G, F> {
    /// The best genome of the final population (slot 0).
    pub best: G,

    /// Fitness of `best`.
    pub best_fitness: F,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness in the population before the first generation and at the
    /// end of each generation. Not guaranteed to be monotonic: mutation can
    /// degrade the top genomes.
    pub fitness_history: Vec<f64>,

    /// The final population, sorted ascending by fitness.
    pub population: Population<G>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use evo_search::ga::{GaConfig, GaRunner};
/// use evo_search::problems::NumberSearch;
///
/// let problem = NumberSearch::new(214);
/// let config = GaConfig::number_search().with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.population.len(), 500);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Genome, P::Fitness>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked between generations only. When it is set the run
    /// stops and returns the sorted population reached so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Genome, P::Fitness>, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel.as_deref())
    }

    /// Runs the GA with an injected random source.
    ///
    /// `config.seed` is ignored; the caller owns seeding.
    pub fn run_with_rng<P, R>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<GaResult<P::Genome, P::Fitness>, ConfigError>
    where
        P: GaProblem,
        R: RandomSource,
    {
        config.validate()?;

        log::info!(
            "starting GA: population {}, generations {}",
            config.population_size,
            config.max_generations
        );

        // 1. Initialize and rank the population
        let mut population = Population::random(problem, config.population_size, rng);
        population.sort_by_fitness(problem);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(population.best_fitness(problem).to_f64());

        let mut generations = 0;
        let mut cancelled = false;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::warn!("GA cancelled after {gen} generations");
                cancelled = true;
                break;
            }

            problem.advance(&mut population, config, rng);
            generations = gen + 1;

            let best = population.min_fitness(problem);
            fitness_history.push(best.to_f64());
            log::debug!("generation {generations}: best fitness {best:?}");

            problem.on_generation(generations, best);
        }

        // 3. Final ranking: slot 0 is the answer
        population.sort_by_fitness(problem);
        let best = population.best().clone();
        let best_fitness = problem.evaluate(&best);

        log::info!("GA finished after {generations} generations: best fitness {best_fitness:?}");

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            cancelled,
            fitness_history,
            population,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::{is_permutation, pmx_crossover, random_permutation, swap_mutation};
    use std::cell::Cell;

    // ---- Position problem: a permutation should map i -> i ----

    struct Identity {
        n: usize,
        calls: Cell<usize>,
    }

    impl Identity {
        fn new(n: usize) -> Self {
            Self {
                n,
                calls: Cell::new(0),
            }
        }
    }

    impl GaProblem for Identity {
        type Genome = Vec<usize>;
        type Fitness = f64;

        fn create_genome<R: RandomSource>(&self, rng: &mut R) -> Vec<usize> {
            random_permutation(self.n, rng)
        }

        fn evaluate(&self, g: &Vec<usize>) -> f64 {
            g.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
        }

        fn crossover<R: RandomSource>(
            &self,
            a: &Vec<usize>,
            b: &Vec<usize>,
            rng: &mut R,
        ) -> (Vec<usize>, Vec<usize>) {
            pmx_crossover(a, b, rng)
        }

        fn mutate<R: RandomSource>(&self, g: &mut Vec<usize>, rng: &mut R) {
            swap_mutation(g, rng);
        }

        fn on_generation(&self, generation: usize, _best: f64) {
            assert_eq!(generation, self.calls.get() + 1);
            self.calls.set(generation);
        }
    }

    fn config() -> GaConfig {
        GaConfig::tour_search()
            .with_population_size(40)
            .with_max_generations(30)
            .with_seed(42)
    }

    #[test]
    fn test_runs_fixed_generations() {
        let problem = Identity::new(10);
        let result = GaRunner::run(&problem, &config()).unwrap();

        assert_eq!(result.generations, 30);
        assert!(!result.cancelled);
        assert_eq!(problem.calls.get(), 30);
        // Initial + one entry per generation.
        assert_eq!(result.fitness_history.len(), 31);
    }

    #[test]
    fn test_population_invariants() {
        let problem = Identity::new(10);
        let result = GaRunner::run(&problem, &config()).unwrap();

        assert_eq!(result.population.len(), 40);
        assert!(result.population.genomes().iter().all(|g| is_permutation(g)));
        assert_eq!(&result.best, result.population.best());
        assert_eq!(result.best_fitness, problem.evaluate(&result.best));
        for w in result.population.genomes().windows(2) {
            assert!(problem.evaluate(&w[0]) <= problem.evaluate(&w[1]));
        }
    }

    #[test]
    fn test_finds_good_solution() {
        let problem = Identity::new(8);
        let config = config().with_population_size(100).with_max_generations(100);
        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_fitness <= 2.0,
            "expected near-identity permutation, got {:?} ({})",
            result.best,
            result.best_fitness
        );
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = GaRunner::run(&Identity::new(10), &config()).unwrap();
        let b = GaRunner::run(&Identity::new(10), &config()).unwrap();
        assert_eq!(a.population, b.population);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_injected_rng() {
        let problem = Identity::new(6);
        let mut rng = create_rng(7);
        let result = GaRunner::run_with_rng(&problem, &config(), &mut rng, None).unwrap();
        assert_eq!(result.generations, 30);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = Identity::new(6);
        let err = GaRunner::run(&problem, &config().with_population_size(7)).unwrap_err();
        assert_eq!(err, ConfigError::PopulationOdd(7));
        assert_eq!(problem.calls.get(), 0);
    }

    #[test]
    fn test_cancellation_before_start() {
        let problem = Identity::new(10);
        let cancel = Arc::new(AtomicBool::new(true));

        let result = GaRunner::run_with_cancel(&problem, &config(), Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert_eq!(result.population.len(), 40);
    }

    #[test]
    fn test_cancellation_mid_run() {
        // Cancels from the generation callback; the loop notices at the next
        // generation boundary.
        struct CancelAt<'a> {
            inner: Identity,
            at: usize,
            flag: &'a AtomicBool,
        }

        impl GaProblem for CancelAt<'_> {
            type Genome = Vec<usize>;
            type Fitness = f64;

            fn create_genome<R: RandomSource>(&self, rng: &mut R) -> Vec<usize> {
                self.inner.create_genome(rng)
            }
            fn evaluate(&self, g: &Vec<usize>) -> f64 {
                self.inner.evaluate(g)
            }
            fn crossover<R: RandomSource>(
                &self,
                a: &Vec<usize>,
                b: &Vec<usize>,
                rng: &mut R,
            ) -> (Vec<usize>, Vec<usize>) {
                self.inner.crossover(a, b, rng)
            }
            fn mutate<R: RandomSource>(&self, g: &mut Vec<usize>, rng: &mut R) {
                self.inner.mutate(g, rng)
            }
            fn on_generation(&self, generation: usize, _best: f64) {
                if generation == self.at {
                    self.flag.store(true, Ordering::Relaxed);
                }
            }
        }

        let flag = AtomicBool::new(false);
        let problem = CancelAt {
            inner: Identity::new(10),
            at: 5,
            flag: &flag,
        };
        let mut rng = create_rng(42);

        let result = GaRunner::run_with_rng(&problem, &config(), &mut rng, Some(&flag)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 5);
        assert_eq!(result.fitness_history.len(), 6);
        assert!(result.population.genomes().iter().all(|g| is_permutation(g)));
    }
}
