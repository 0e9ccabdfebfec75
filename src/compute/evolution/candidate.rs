//! Single evolving solution.

use crate::schema::{MutationConfig, Point};

use super::objective::{EvaluationError, ObjectiveFunction};
use super::rng::RandomSource;

/// Attempted to read the point of a candidate with no cached output.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq)]
#[error("Candidate at x = {input} has not been evaluated")]
pub struct UnevaluatedCandidate {
    pub input: f64,
}

/// A candidate input and its cached objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    input: f64,
    output: Option<f64>,
}

impl Candidate {
    /// Unevaluated candidate at `input`.
    pub fn new(input: f64) -> Self {
        Self {
            input,
            output: None,
        }
    }

    #[inline]
    pub fn input(&self) -> f64 {
        self.input
    }

    /// Cached output, `None` until evaluated or after a mutation.
    #[inline]
    pub fn output(&self) -> Option<f64> {
        self.output
    }

    /// Compute and cache the objective value at the current input.
    pub fn evaluate<F>(&mut self, objective: &F) -> Result<f64, EvaluationError>
    where
        F: ObjectiveFunction + ?Sized,
    {
        let output = objective.evaluate(self.input)?;
        self.output = Some(output);
        Ok(output)
    }

    /// With probability `frequency`, step the input by exactly `intensity` in
    /// a random direction. Returns whether the input moved.
    ///
    /// A moved candidate loses its cached output until re-evaluated.
    pub fn mutate<R>(&mut self, mutation: &MutationConfig, rng: &mut R) -> bool
    where
        R: RandomSource + ?Sized,
    {
        if !rng.chance(mutation.frequency) {
            return false;
        }
        if rng.coin_flip() {
            self.input += mutation.intensity;
        } else {
            self.input -= mutation.intensity;
        }
        self.output = None;
        true
    }

    /// Unevaluated copy of this candidate's input.
    pub fn duplicate(&self) -> Self {
        Self::new(self.input)
    }

    /// The evaluated point, for snapshot storage.
    pub fn as_point(&self) -> Result<Point, UnevaluatedCandidate> {
        self.output
            .map(|output| Point::new(self.input, output))
            .ok_or(UnevaluatedCandidate { input: self.input })
    }
}
