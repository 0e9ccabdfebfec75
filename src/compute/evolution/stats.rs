//! Summary statistics for recorded generations.

use serde::{Deserialize, Serialize};

use crate::schema::{OptimizationMode, Point, PopulationSnapshot};

/// Statistics about one generation's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Number of evicted points.
    pub discarded: usize,
    /// Number of kept points.
    pub surviving: usize,
    /// Mean input of the kept points.
    pub mean_input: f64,
    /// Mean output of the kept points.
    pub mean_output: f64,
    /// Kept point closest to the sought extremum.
    pub best: Option<Point>,
}

impl SnapshotStats {
    /// Compute statistics from a snapshot.
    pub fn from_snapshot(snapshot: &PopulationSnapshot, mode: OptimizationMode) -> Self {
        let best = snapshot
            .surviving()
            .iter()
            .copied()
            .reduce(|best, p| if mode.prefers(p.output, best.output) { p } else { best });

        Self {
            generation: snapshot.generation(),
            discarded: snapshot.discarded().len(),
            surviving: snapshot.surviving().len(),
            mean_input: snapshot.mean_surviving_input().unwrap_or(f64::NAN),
            mean_output: snapshot.mean_surviving_output().unwrap_or(f64::NAN),
            best,
        }
    }
}
