//! Per-generation population records.

use serde::{Deserialize, Serialize};

/// An evaluated `(input, output)` pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// Independent variable.
    pub input: f64,
    /// Objective value at `input`.
    pub output: f64,
}

impl Point {
    #[inline]
    pub fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

impl From<(f64, f64)> for Point {
    fn from((input, output): (f64, f64)) -> Self {
        Self { input, output }
    }
}

/// Immutable record of one generation's selection outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopulationSnapshot {
    generation: usize,
    discarded: Vec<Point>,
    surviving: Vec<Point>,
}

impl PopulationSnapshot {
    pub fn new(generation: usize, discarded: Vec<Point>, surviving: Vec<Point>) -> Self {
        Self {
            generation,
            discarded,
            surviving,
        }
    }

    /// Zero-based generation index.
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Evicted points, in eviction order.
    #[inline]
    pub fn discarded(&self) -> &[Point] {
        &self.discarded
    }

    /// Kept points, in population order.
    #[inline]
    pub fn surviving(&self) -> &[Point] {
        &self.surviving
    }

    /// Total number of points recorded (the population size).
    #[inline]
    pub fn len(&self) -> usize {
        self.discarded.len() + self.surviving.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean input of the surviving points, if any survived.
    pub fn mean_surviving_input(&self) -> Option<f64> {
        mean(self.surviving.iter().map(|p| p.input))
    }

    /// Mean output of the surviving points, if any survived.
    pub fn mean_surviving_output(&self) -> Option<f64> {
        mean(self.surviving.iter().map(|p| p.output))
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    Some(values.sum::<f64>() / n as f64)
}
