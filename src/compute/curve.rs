//! Objective sampling for plotting.

use log::trace;

use crate::compute::evolution::ObjectiveFunction;
use crate::schema::{ConfigError, PlotConfig, Point, SearchConfig};

/// Objective values sampled on an evenly spaced grid.
#[derive(Debug, Clone, Default)]
pub struct FunctionCurve {
    /// Successfully evaluated samples, in ascending input order.
    pub points: Vec<Point>,
    /// Samples skipped because the objective was undefined there.
    pub gaps: usize,
}

impl FunctionCurve {
    /// Sample `[left - margin, right + margin)` every `step`.
    pub fn sample<F>(
        objective: &F,
        search: &SearchConfig,
        plot: &PlotConfig,
    ) -> Result<Self, ConfigError>
    where
        F: ObjectiveFunction + ?Sized,
    {
        plot.validate(search.left, search.right)?;

        let start = search.left - plot.margin;
        let count = plot.sample_count(search.left, search.right);
        let mut curve = Self {
            points: Vec::with_capacity(count),
            gaps: 0,
        };

        for i in 0..count {
            let x = start + i as f64 * plot.step;
            match objective.evaluate(x) {
                Ok(y) => curve.points.push(Point::new(x, y)),
                Err(e) => {
                    trace!("curve gap: {}", e);
                    curve.gaps += 1;
                }
            }
        }

        Ok(curve)
    }

    /// Number of plotted samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ObjectiveSpec;

    fn search(left: f64, right: f64) -> SearchConfig {
        SearchConfig {
            left,
            right,
            ..Default::default()
        }
    }

    #[test]
    fn test_sample_range() {
        let plot = PlotConfig {
            margin: 0.5,
            step: 0.25,
        };
        let curve = FunctionCurve::sample(&|x: f64| 2.0 * x, &search(0.0, 1.0), &plot).unwrap();

        assert_eq!(curve.len(), 8);
        assert_eq!(curve.gaps, 0);
        assert_eq!(curve.points[0], Point::new(-0.5, -1.0));
        assert_eq!(curve.points[7], Point::new(1.25, 2.5));
    }

    #[test]
    fn test_singularity_leaves_gap() {
        let plot = PlotConfig {
            margin: 0.0,
            step: 0.5,
        };
        let objective = ObjectiveSpec::Reciprocal { pole: 0.0 };
        let curve = FunctionCurve::sample(&objective, &search(-1.0, 1.0), &plot).unwrap();

        assert_eq!(curve.gaps, 1);
        assert_eq!(curve.len(), 3);
        assert!(curve.points.iter().all(|p| p.input != 0.0));
    }

    #[test]
    fn test_invalid_plot() {
        let plot = PlotConfig {
            margin: -1.0,
            step: 0.1,
        };
        assert_eq!(
            FunctionCurve::sample(&|x: f64| x, &search(0.0, 1.0), &plot).unwrap_err(),
            ConfigError::InvalidPlotMargin(-1.0)
        );
    }
}
