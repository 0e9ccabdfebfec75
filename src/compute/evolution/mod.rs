//! Evolutionary search for extrema of scalar functions.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Candidates** (`candidate`): one input value and its cached objective value
//! - **Objectives** (`objective`): the functions being searched
//! - **Random sources** (`rng`): injectable, seedable randomness
//! - **Search** (`search`): truncation selection, duplication and mutation
//! - **Statistics** (`stats`): per-generation summaries of recorded snapshots
//!
//! # Example
//!
//! ```rust
//! use evo_extremum::schema::{OptimizationMode, SearchConfig};
//! use evo_extremum::compute::evolution::{SearchRng, run};
//!
//! let config = SearchConfig {
//!     left: -2.0,
//!     right: 2.0,
//!     mode: OptimizationMode::Minimize,
//!     agent_count: 4,
//!     generation_count: 3,
//!     ..Default::default()
//! };
//!
//! let mut rng = SearchRng::new(42);
//! let snapshots = run(&config, &|x: f64| x * x, &mut rng).unwrap();
//!
//! assert_eq!(snapshots.len(), 3);
//! for snapshot in &snapshots {
//!     assert_eq!(snapshot.discarded().len() + snapshot.surviving().len(), 4);
//! }
//! ```
//!
//! # Selection
//!
//! Each generation evicts `agent_count / 2` candidates one at a time. When
//! maximizing the lowest output is evicted; when minimizing, the highest. The
//! evicted points are recorded as discarded and the remainder as surviving.

mod candidate;
mod objective;
mod rng;
mod search;
mod stats;

pub use candidate::{Candidate, UnevaluatedCandidate};
pub use objective::{EvaluationError, Fallible, ObjectiveFunction};
pub use rng::{RandomSource, SearchRng};
pub use search::{EvolutionEngine, SearchError, eviction_index, run};
pub use stats::SnapshotStats;
