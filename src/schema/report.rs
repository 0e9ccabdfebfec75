//! Replay record of a finished search, for plotting collaborators.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObjectiveSpec, Point, PopulationSnapshot, SearchConfig};

/// Everything needed to redraw any generation of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Configuration the run used.
    pub search: SearchConfig,
    /// Objective that was searched.
    pub objective: ObjectiveSpec,
    /// Sampled objective curve.
    pub curve: Vec<Point>,
    /// One snapshot per generation, in order.
    pub snapshots: Vec<PopulationSnapshot>,
}

/// Report I/O errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Report JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Snapshot {index} records generation {generation}")]
    GenerationMismatch { index: usize, generation: usize },
    #[error(
        "Snapshot {generation} has {discarded} discarded and {surviving} surviving points, expected {half} of each"
    )]
    PopulationMismatch {
        generation: usize,
        discarded: usize,
        surviving: usize,
        half: usize,
    },
}

impl SearchReport {
    /// Snapshot for a generation index, if the run reached it.
    pub fn generation(&self, index: usize) -> Option<&PopulationSnapshot> {
        self.snapshots.get(index)
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Write the report as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check every snapshot against the recorded population size.
    pub fn validate(&self) -> Result<(), ReportError> {
        let half = self.search.half();
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            if snapshot.generation() != index {
                return Err(ReportError::GenerationMismatch {
                    index,
                    generation: snapshot.generation(),
                });
            }
            let discarded = snapshot.discarded().len();
            let surviving = snapshot.surviving().len();
            if discarded != half || surviving != half {
                return Err(ReportError::PopulationMismatch {
                    generation: index,
                    discarded,
                    surviving,
                    half,
                });
            }
        }
        Ok(())
    }

    /// Read a report previously written by [`SearchReport::save_json`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let json = fs::read_to_string(path)?;
        let report: Self = serde_json::from_str(&json)?;
        report.validate()?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SearchReport {
        SearchReport {
            search: SearchConfig {
                agent_count: 2,
                ..Default::default()
            },
            objective: ObjectiveSpec::default(),
            curve: vec![Point::new(0.0, 0.0), Point::new(0.5, 0.25)],
            snapshots: vec![
                PopulationSnapshot::new(
                    0,
                    vec![Point::new(1.0, 1.0)],
                    vec![Point::new(0.5, 0.25)],
                ),
                PopulationSnapshot::new(
                    1,
                    vec![Point::new(0.6, 0.36)],
                    vec![Point::new(0.4, 0.16)],
                ),
            ],
        }
    }

    #[test]
    fn test_generation_lookup() {
        let report = sample_report();
        assert_eq!(report.len(), 2);
        assert_eq!(report.generation(1).map(|s| s.generation()), Some(1));
        assert!(report.generation(2).is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = sample_report();
        report.save_json(&path).unwrap();
        let loaded = SearchReport::load_json(&path).unwrap();

        assert_eq!(loaded.snapshots, report.snapshots);
        assert_eq!(loaded.curve, report.curve);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            SearchReport::load_json(&path),
            Err(ReportError::Json(_))
        ));
        assert!(matches!(
            SearchReport::load_json(dir.path().join("missing.json")),
            Err(ReportError::Io(_))
        ));
    }

    #[test]
    fn test_load_rejects_inconsistent_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut report = sample_report();
        report.snapshots[1] = PopulationSnapshot::new(
            1,
            vec![Point::new(0.6, 0.36), Point::new(0.7, 0.49)],
            vec![Point::new(0.4, 0.16)],
        );
        report.save_json(&path).unwrap();
        assert!(matches!(
            SearchReport::load_json(&path),
            Err(ReportError::PopulationMismatch {
                generation: 1,
                discarded: 2,
                surviving: 1,
                half: 1
            })
        ));

        let mut report = sample_report();
        report.snapshots.swap(0, 1);
        assert!(matches!(
            report.validate(),
            Err(ReportError::GenerationMismatch {
                index: 0,
                generation: 1
            })
        ));
    }
}
