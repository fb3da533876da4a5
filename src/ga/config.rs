//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.
//! Operator rates are expressed as "one in N" odds: a rate of 21 means an
//! operator fires on average once every 21 draws.

/// Configuration for the generational loop.
///
/// # Defaults
///
/// ```
/// use evo_search::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evo_search::ga::GaConfig;
///
/// let config = GaConfig::tour_search()
///     .with_max_generations(200)
///     .with_child_mutation_odds(7)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genomes in the population. Must be even and at least 2.
    pub population_size: usize,

    /// Number of generations to run. There is no early exit.
    pub max_generations: usize,

    /// One-in-N odds that a surviving genome is mutated each generation.
    pub survivor_mutation_odds: u32,

    /// One-in-N odds that a freshly bred child is mutated.
    pub child_mutation_odds: u32,

    /// One-in-N odds that a freshly bred child undergoes gene replacement.
    ///
    /// Only used by replacement policies that have a gene-replace operator.
    pub gene_replace_odds: u32,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self::number_search()
    }
}

impl GaConfig {
    /// Preset for integer target search: 500 genomes, 100 generations.
    pub fn number_search() -> Self {
        Self {
            population_size: 500,
            max_generations: 100,
            survivor_mutation_odds: 21,
            child_mutation_odds: 11,
            gene_replace_odds: 21,
            seed: None,
        }
    }

    /// Preset for tour search: 250 genomes, 100 generations.
    pub fn tour_search() -> Self {
        Self {
            population_size: 250,
            ..Self::number_search()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the survivor mutation odds.
    pub fn with_survivor_mutation_odds(mut self, odds: u32) -> Self {
        self.survivor_mutation_odds = odds;
        self
    }

    /// Sets the child mutation odds.
    pub fn with_child_mutation_odds(mut self, odds: u32) -> Self {
        self.child_mutation_odds = odds;
        self
    }

    /// Sets the gene replacement odds.
    pub fn with_gene_replace_odds(mut self, odds: u32) -> Self {
        self.gene_replace_odds = odds;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationOdd(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        for (name, odds) in [
            ("survivor_mutation_odds", self.survivor_mutation_odds),
            ("child_mutation_odds", self.child_mutation_odds),
            ("gene_replace_odds", self.gene_replace_odds),
        ] {
            if odds == 0 {
                return Err(ConfigError::ZeroOdds(name));
            }
        }
        Ok(())
    }
}

/// GA configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("population size must be even, got {0}")]
    PopulationOdd(usize),
    #[error("max_generations must be at least 1")]
    NoGenerations,
    #[error("{0} must be at least 1")]
    ZeroOdds(&'static str),
}
