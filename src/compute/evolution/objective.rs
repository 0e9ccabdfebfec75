//! Objective function interface.

use std::fmt::Display;

use crate::schema::ObjectiveSpec;

/// Objective evaluation failures.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum EvaluationError {
    #[error("Objective is undefined at x = {input} (got {output})")]
    NonFinite { input: f64, output: f64 },
    #[error("Objective failed at x = {input}: {reason}")]
    Failed { input: f64, reason: String },
}

/// A scalar function the engine can search.
pub trait ObjectiveFunction {
    /// Evaluate at `input`. Only finite outputs are valid.
    fn evaluate(&self, input: f64) -> Result<f64, EvaluationError>;
}

fn finite(input: f64, output: f64) -> Result<f64, EvaluationError> {
    if output.is_finite() {
        Ok(output)
    } else {
        Err(EvaluationError::NonFinite { input, output })
    }
}

impl<F> ObjectiveFunction for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, input: f64) -> Result<f64, EvaluationError> {
        finite(input, self(input))
    }
}

/// Adapter for objectives that report their own failures.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> ObjectiveFunction for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: Display,
{
    fn evaluate(&self, input: f64) -> Result<f64, EvaluationError> {
        let output = (self.0)(input).map_err(|e| EvaluationError::Failed {
            input,
            reason: e.to_string(),
        })?;
        finite(input, output)
    }
}

impl ObjectiveFunction for ObjectiveSpec {
    fn evaluate(&self, input: f64) -> Result<f64, EvaluationError> {
        finite(input, self.value(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_objective() {
        let square = |x: f64| x * x;
        assert_eq!(square.evaluate(3.0), Ok(9.0));

        let sqrt = |x: f64| x.sqrt();
        assert!(matches!(
            sqrt.evaluate(-1.0),
            Err(EvaluationError::NonFinite { input, .. }) if input == -1.0
        ));
    }

    #[test]
    fn test_singularity_is_error() {
        let reciprocal = |x: f64| 1.0 / x;
        assert_eq!(
            reciprocal.evaluate(0.0),
            Err(EvaluationError::NonFinite {
                input: 0.0,
                output: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_fallible_objective() {
        let checked = Fallible(|x: f64| {
            if x < 0.0 {
                Err("negative input")
            } else {
                Ok(x.sqrt())
            }
        });
        assert_eq!(checked.evaluate(4.0), Ok(2.0));
        assert_eq!(
            checked.evaluate(-4.0),
            Err(EvaluationError::Failed {
                input: -4.0,
                reason: "negative input".to_string()
            })
        );
    }

    #[test]
    fn test_spec_objective() {
        let spec = ObjectiveSpec::Logarithm { base: 2.0 };
        assert_eq!(spec.evaluate(8.0).map(|y| y.round()), Ok(3.0));
        assert!(spec.evaluate(0.0).is_err());
    }
}
