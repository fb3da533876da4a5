//! Genetic Algorithm framework.
//!
//! A generic generational GA built on one trait. Problems implement
//! [`GaProblem`], which specifies how to create, evaluate, crossover and
//! mutate genomes, and optionally how a generation replaces the population.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation count, operator odds, seed
//! - [`Population`]: fixed-size, fitness-ordered genome collection
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: final population and statistics
//!
//! # Submodules
//!
//! - [`operators`]: bit-level and permutation crossover/mutation operators
//! - [`selection`]: truncation replacement policies
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use config::{ConfigError, GaConfig};
pub use population::Population;
pub use runner::{GaResult, GaRunner};
pub use types::{Fitness, GaProblem};
