//! Built-in objective functions selectable from a job file.

use serde::{Deserialize, Serialize};

/// Predefined scalar functions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ObjectiveSpec {
    /// Polynomial with coefficients in ascending powers of x.
    Polynomial {
        /// `coefficients[i]` multiplies `x^i`.
        coefficients: Vec<f64>,
    },
    /// `amplitude * sin(frequency * x + phase)`.
    Sinusoid {
        amplitude: f64,
        frequency: f64,
        #[serde(default)]
        phase: f64,
    },
    /// Gaussian bump `height * exp(-((x - center) / width)^2 / 2)`.
    Gaussian { center: f64, width: f64, height: f64 },
    /// `1 / (x - pole)`, singular at the pole.
    Reciprocal { pole: f64 },
    /// Logarithm in the given base, undefined for `x <= 0`.
    Logarithm { base: f64 },
}

impl Default for ObjectiveSpec {
    fn default() -> Self {
        Self::Polynomial {
            coefficients: vec![0.0, 0.0, 1.0],
        }
    }
}

impl ObjectiveSpec {
    /// Raw function value. May be NaN or infinite outside the function's domain.
    pub fn value(&self, x: f64) -> f64 {
        match self {
            ObjectiveSpec::Polynomial { coefficients } => coefficients
                .iter()
                .rev()
                .fold(0.0, |acc, c| acc * x + c),
            ObjectiveSpec::Sinusoid {
                amplitude,
                frequency,
                phase,
            } => amplitude * (frequency * x + phase).sin(),
            ObjectiveSpec::Gaussian {
                center,
                width,
                height,
            } => {
                let z = (x - center) / width;
                height * (-0.5 * z * z).exp()
            }
            ObjectiveSpec::Reciprocal { pole } => 1.0 / (x - pole),
            ObjectiveSpec::Logarithm { base } => {
                if x <= 0.0 {
                    f64::NAN
                } else {
                    x.log(*base)
                }
            }
        }
    }

    /// Short human-readable formula.
    pub fn describe(&self) -> String {
        match self {
            ObjectiveSpec::Polynomial { coefficients } => {
                let terms: Vec<String> = coefficients
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| **c != 0.0)
                    .map(|(power, c)| match power {
                        0 => format!("{}", c),
                        1 => format!("{}*x", c),
                        _ => format!("{}*x^{}", c, power),
                    })
                    .collect();
                if terms.is_empty() {
                    "0".to_string()
                } else {
                    terms.join(" + ")
                }
            }
            ObjectiveSpec::Sinusoid {
                amplitude,
                frequency,
                phase,
            } => format!("{}*sin({}*x + {})", amplitude, frequency, phase),
            ObjectiveSpec::Gaussian {
                center,
                width,
                height,
            } => format!("{}*exp(-((x - {})/{})^2/2)", height, center, width),
            ObjectiveSpec::Reciprocal { pole } => format!("1/(x - {})", pole),
            ObjectiveSpec::Logarithm { base } => format!("log_{}(x)", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_horner() {
        let spec = ObjectiveSpec::Polynomial {
            coefficients: vec![1.0, -2.0, 3.0],
        };
        // 1 - 2x + 3x^2 at x = 2
        assert_eq!(spec.value(2.0), 9.0);
        assert_eq!(ObjectiveSpec::default().value(-3.0), 9.0);
        assert_eq!(spec.describe(), "1 + -2*x + 3*x^2");
    }

    #[test]
    fn test_empty_polynomial_is_zero() {
        let spec = ObjectiveSpec::Polynomial {
            coefficients: Vec::new(),
        };
        assert_eq!(spec.value(5.0), 0.0);
        assert_eq!(spec.describe(), "0");
    }

    #[test]
    fn test_domain_edges() {
        let log = ObjectiveSpec::Logarithm { base: 10.0 };
        assert!(log.value(-1.0).is_nan());
        assert!((log.value(100.0) - 2.0).abs() < 1e-12);

        let reciprocal = ObjectiveSpec::Reciprocal { pole: 1.0 };
        assert!(reciprocal.value(1.0).is_infinite());
    }

    #[test]
    fn test_gaussian_peak() {
        let spec = ObjectiveSpec::Gaussian {
            center: 1.0,
            width: 0.5,
            height: 3.0,
        };
        assert_eq!(spec.value(1.0), 3.0);
        assert!(spec.value(3.0) < 0.1);
    }

    #[test]
    fn test_tagged_serialization() {
        let json = r#"{"type": "Sinusoid", "amplitude": 2.0, "frequency": 1.0}"#;
        let spec: ObjectiveSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec,
            ObjectiveSpec::Sinusoid {
                amplitude: 2.0,
                frequency: 1.0,
                phase: 0.0
            }
        );
    }
}
