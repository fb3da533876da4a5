//! Closed-tour search over a fixed set of locations.
//!
//! Genomes are visiting orders: permutations of the location indices. The
//! tour is closed, so the last location connects back to the first.

use super::ProblemError;
use crate::ga::operators::{pmx_crossover, random_permutation, swap_mutation};
use crate::ga::GaProblem;
use crate::random::RandomSource;

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        let dx = (self.x as i64 - other.x as i64) as f64;
        let dy = (self.y as i64 - other.y as i64) as f64;
        dx.hypot(dy)
    }
}

/// Searches for a short closed tour through every location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSearch {
    locations: Vec<Location>,
}

impl TourSearch {
    /// Wraps a fixed set of locations.
    ///
    /// Requires at least two locations, all with non-negative coordinates.
    pub fn new(locations: Vec<Location>) -> Result<Self, ProblemError> {
        if locations.len() < 2 {
            return Err(ProblemError::TooFewLocations(locations.len()));
        }
        if let Some(loc) = locations.iter().find(|l| l.x < 0 || l.y < 0) {
            return Err(ProblemError::NegativeCoordinate(loc.x, loc.y));
        }
        Ok(Self { locations })
    }

    /// Places `count` locations uniformly on a `grid_size` x `grid_size`
    /// grid. Locations may coincide.
    pub fn random<R: RandomSource>(
        count: usize,
        grid_size: usize,
        rng: &mut R,
    ) -> Result<Self, ProblemError> {
        let max = i32::try_from(grid_size)
            .ok()
            .filter(|&g| g > 0)
            .ok_or(ProblemError::InvalidGrid(grid_size))?
            - 1;
        let locations = (0..count)
            .map(|_| Location::new(rng.next_int(0, max), rng.next_int(0, max)))
            .collect();
        Self::new(locations)
    }

    /// The locations, indexed by genome value.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations, the length of every genome.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether there are no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total length of the closed tour visiting locations in `order`.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        (0..n)
            .map(|i| {
                let a = &self.locations[order[i]];
                let b = &self.locations[order[(i + 1) % n]];
                a.distance(b)
            })
            .sum()
    }
}

impl GaProblem for TourSearch {
    type Genome = Vec<usize>;
    type Fitness = f64;

    fn create_genome<R: RandomSource>(&self, rng: &mut R) -> Vec<usize> {
        random_permutation(self.len(), rng)
    }

    fn evaluate(&self, genome: &Vec<usize>) -> f64 {
        self.tour_length(genome)
    }

    fn crossover<R: RandomSource>(
        &self,
        parent1: &Vec<usize>,
        parent2: &Vec<usize>,
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>) {
        pmx_crossover(parent1, parent2, rng)
    }

    fn mutate<R: RandomSource>(&self, genome: &mut Vec<usize>, rng: &mut R) {
        swap_mutation(genome, rng);
    }
}
