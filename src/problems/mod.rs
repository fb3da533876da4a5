//! Concrete search problems and result presentation.
//!
//! - [`NumberSearch`]: find a target `i32` by bit-level evolution
//! - [`TourSearch`]: find a short closed tour over grid locations (PMX)
//! - [`render_grid`]: draw a tour on its grid

mod number;
mod render;
mod tour;

pub use number::{NumberSearch, SIGN_PENALTY};
pub use render::render_grid;
pub use tour::{Location, TourSearch};

/// Problem setup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProblemError {
    #[error("a tour needs at least 2 locations, got {0}")]
    TooFewLocations(usize),
    #[error("location ({0}, {1}) has a negative coordinate")]
    NegativeCoordinate(i32, i32),
    #[error("grid size must be between 1 and i32::MAX, got {0}")]
    InvalidGrid(usize),
}
