//! Configuration types for extremum search runs.

use serde::{Deserialize, Serialize};

use super::ObjectiveSpec;

/// Upper bound on the number of samples a plot curve may request.
pub const MAX_CURVE_SAMPLES: usize = 1_000_000;

/// Which extremum the search is looking for.
///
/// Selection evicts the candidates with the lowest output when maximizing and
/// the highest output when minimizing; those evicted points are the "discarded"
/// half of each snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OptimizationMode {
    /// Search for the maximum.
    Maximize,
    /// Search for the minimum.
    #[default]
    Minimize,
}

impl OptimizationMode {
    /// Whether `challenger` should replace `incumbent` as the next candidate
    /// to evict. Strict, so ties keep the earlier incumbent.
    #[inline]
    pub fn evicts_before(self, challenger: f64, incumbent: f64) -> bool {
        match self {
            OptimizationMode::Maximize => challenger < incumbent,
            OptimizationMode::Minimize => challenger > incumbent,
        }
    }

    /// Whether `a` sits strictly closer to the sought extremum than `b`.
    #[inline]
    pub fn prefers(self, a: f64, b: f64) -> bool {
        match self {
            OptimizationMode::Maximize => a > b,
            OptimizationMode::Minimize => a < b,
        }
    }
}

/// Mutation step parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MutationConfig {
    /// Fixed step added to or subtracted from a mutated input.
    pub intensity: f64,
    /// Per-candidate, per-generation probability of mutating (0.0-1.0).
    pub frequency: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            intensity: 0.1,
            frequency: 0.5,
        }
    }
}

/// Top-level configuration for one search run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Left bound of the initial sampling interval.
    pub left: f64,
    /// Right bound of the initial sampling interval.
    pub right: f64,
    /// Extremum being searched for.
    #[serde(default)]
    pub mode: OptimizationMode,
    /// Population size. Must be even and non-zero.
    pub agent_count: usize,
    /// Number of generations to run.
    pub generation_count: usize,
    /// Mutation parameters.
    #[serde(default)]
    pub mutation: MutationConfig,
    /// Seed for the CLI's `SearchRng`. The engine itself always uses the
    /// random source it is given.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            left: -10.0,
            right: 10.0,
            mode: OptimizationMode::default(),
            agent_count: 20,
            generation_count: 50,
            mutation: MutationConfig::default(),
            random_seed: None,
        }
    }
}

impl SearchConfig {
    /// Number of candidates discarded (and kept) each generation.
    #[inline]
    pub fn half(&self) -> usize {
        self.agent_count / 2
    }

    /// Width of the sampling interval.
    #[inline]
    pub fn span(&self) -> f64 {
        self.right - self.left
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent_count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.agent_count % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.agent_count));
        }
        if !self.left.is_finite()
            || !self.right.is_finite()
            || self.left >= self.right
            || !self.span().is_finite()
        {
            return Err(ConfigError::DegenerateInterval {
                left: self.left,
                right: self.right,
            });
        }
        if !self.mutation.intensity.is_finite() || self.mutation.intensity < 0.0 {
            return Err(ConfigError::InvalidMutationIntensity(
                self.mutation.intensity,
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation.frequency) {
            return Err(ConfigError::InvalidMutationFrequency(
                self.mutation.frequency,
            ));
        }
        Ok(())
    }
}

/// Sampling of the objective for plotting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlotConfig {
    /// Extra range plotted on each side of the search interval.
    pub margin: f64,
    /// Distance between consecutive samples.
    pub step: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            margin: 1.0,
            step: 0.01,
        }
    }
}

impl PlotConfig {
    /// Number of samples needed to cover `[left - margin, right + margin)`.
    pub fn sample_count(&self, left: f64, right: f64) -> usize {
        let width = (right + self.margin) - (left - self.margin);
        (width / self.step).ceil().max(0.0) as usize
    }

    /// Validate plot parameters against a search interval.
    pub fn validate(&self, left: f64, right: f64) -> Result<(), ConfigError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::InvalidPlotMargin(self.margin));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidPlotStep(self.step));
        }
        let samples = self.sample_count(left, right);
        if samples > MAX_CURVE_SAMPLES {
            return Err(ConfigError::TooManySamples(samples));
        }
        Ok(())
    }
}

/// Complete description of a search, as loaded by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchJob {
    /// Engine parameters.
    pub search: SearchConfig,
    /// Function to search.
    #[serde(default)]
    pub objective: ObjectiveSpec,
    /// Curve sampling for plotting collaborators.
    #[serde(default)]
    pub plot: PlotConfig,
}

impl SearchJob {
    /// Validate every section of the job.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        self.plot.validate(self.search.left, self.search.right)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Agent count must be non-zero")]
    EmptyPopulation,
    #[error("Agent count must be even, got {0}")]
    OddPopulation(usize),
    #[error("Interval [{left}, {right}] is degenerate: bounds and width must be finite, left below right")]
    DegenerateInterval { left: f64, right: f64 },
    #[error("Mutation intensity must be finite and non-negative, got {0}")]
    InvalidMutationIntensity(f64),
    #[error("Mutation frequency must be between 0.0 and 1.0, got {0}")]
    InvalidMutationFrequency(f64),
    #[error("Plot margin must be finite and non-negative, got {0}")]
    InvalidPlotMargin(f64),
    #[error("Plot step must be finite and positive, got {0}")]
    InvalidPlotStep(f64),
    #[error("Plot would need {0} samples")]
    TooManySamples(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchJob::default().validate().is_ok());
    }

    #[test]
    fn test_population_validation() {
        let config = SearchConfig {
            agent_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));

        let config = SearchConfig {
            agent_count: 7,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::OddPopulation(7)));

        let config = SearchConfig {
            agent_count: 2,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interval_validation() {
        for (left, right) in [(1.0, 1.0), (2.0, -2.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            let config = SearchConfig {
                left,
                right,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::DegenerateInterval { .. })
            ));
        }
    }

    #[test]
    fn test_interval_width_must_be_finite() {
        let config = SearchConfig {
            left: -1e308,
            right: 1e308,
            ..Default::default()
        };
        assert!(config.span().is_infinite());
        assert_eq!(
            config.validate(),
            Err(ConfigError::DegenerateInterval {
                left: -1e308,
                right: 1e308
            })
        );

        let config = SearchConfig {
            left: -1e307,
            right: 1e307,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mutation_validation() {
        let config = SearchConfig {
            mutation: MutationConfig {
                intensity: -1.0,
                frequency: 0.5,
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMutationIntensity(-1.0))
        );

        let config = SearchConfig {
            mutation: MutationConfig {
                intensity: 0.1,
                frequency: 1.5,
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMutationFrequency(1.5))
        );
    }

    #[test]
    fn test_zero_generations_allowed() {
        let config = SearchConfig {
            generation_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_plot_validation() {
        let plot = PlotConfig {
            margin: 0.5,
            step: 0.0,
        };
        assert_eq!(plot.validate(0.0, 1.0), Err(ConfigError::InvalidPlotStep(0.0)));

        let plot = PlotConfig {
            margin: 0.0,
            step: 1e-9,
        };
        assert!(matches!(
            plot.validate(0.0, 1.0),
            Err(ConfigError::TooManySamples(_))
        ));

        let plot = PlotConfig {
            margin: 0.5,
            step: 0.25,
        };
        assert_eq!(plot.sample_count(0.0, 1.0), 8);
    }

    #[test]
    fn test_mode_comparisons() {
        assert!(OptimizationMode::Maximize.evicts_before(1.0, 2.0));
        assert!(!OptimizationMode::Maximize.evicts_before(2.0, 2.0));
        assert!(OptimizationMode::Minimize.evicts_before(3.0, 2.0));
        assert!(OptimizationMode::Minimize.prefers(1.0, 2.0));
        assert!(OptimizationMode::Maximize.prefers(2.0, 1.0));
    }

    #[test]
    fn test_serialization() {
        let job = SearchJob::default();
        let json = serde_json::to_string(&job).unwrap();
        let parsed: SearchJob = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.search, job.search);
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{"search": {"left": -1.0, "right": 1.0, "agent_count": 4, "generation_count": 3}}"#;
        let job: SearchJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.search.mode, OptimizationMode::Minimize);
        assert_eq!(job.search.mutation, MutationConfig::default());
        assert_eq!(job.plot, PlotConfig::default());
    }
}
