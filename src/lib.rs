//! Evo Extremum - Truncation-selection search for extrema of scalar functions.
//!
//! This crate searches a bounded interval for the minimum or maximum of a
//! real function using a simple evolutionary loop: evict half the population,
//! record the generation, clone the survivors and mutate everyone.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, snapshot and report types
//! - `compute`: Numerical computation (candidates, search engine, curve sampling)
//!
//! # Example
//!
//! ```rust,no_run
//! use evo_extremum::{
//!     schema::{ObjectiveSpec, PlotConfig, SearchConfig, SearchReport},
//!     compute::{FunctionCurve, evolution::{EvolutionEngine, SearchRng}},
//! };
//!
//! // Create configuration
//! let search = SearchConfig::default();
//! let objective = ObjectiveSpec::default();
//!
//! // Run the search
//! let rng = SearchRng::new(42);
//! let engine = EvolutionEngine::new(search.clone(), &objective, rng).unwrap();
//! let snapshots = engine.run().unwrap();
//!
//! // Keep everything a plotter needs
//! let curve = FunctionCurve::sample(&objective, &search, &PlotConfig::default()).unwrap();
//! let report = SearchReport { search, objective, curve: curve.points, snapshots };
//! report.save_json("report.json").unwrap();
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::FunctionCurve;
pub use compute::evolution::{EvolutionEngine, ObjectiveFunction, SearchError, SearchRng, run};
pub use schema::{OptimizationMode, Point, PopulationSnapshot, SearchConfig, SearchJob};
