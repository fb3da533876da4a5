//! Generational evolutionary search.
//!
//! A small GA engine and two problems built on it:
//!
//! - **Number search**: find a target integer by crossing and mutating the
//!   raw bit patterns of `i32` genomes.
//! - **Tour search**: find a short closed tour through grid locations using
//!   partially mapped crossover (PMX) and swap mutation.
//!
//! The engine runs a fixed number of generations and reports the best
//! genome found. All randomness flows through an explicitly passed
//! generator (see [`random`]), so seeded runs are reproducible.
//!
//! ```
//! use evo_search::ga::{GaConfig, GaRunner};
//! use evo_search::problems::TourSearch;
//! use evo_search::random::create_rng;
//!
//! let mut rng = create_rng(7);
//! let search = TourSearch::random(10, 20, &mut rng).unwrap();
//! let config = GaConfig::tour_search().with_max_generations(10).with_seed(7);
//! let result = GaRunner::run(&search, &config).unwrap();
//! assert_eq!(result.best.len(), 10);
//! ```

pub mod ga;
pub mod problems;
pub mod random;
