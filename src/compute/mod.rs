//! Compute module - Numerical computation for extremum search.

mod curve;

pub mod evolution;

pub use curve::*;
