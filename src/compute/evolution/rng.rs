//! Random sources for sampling and mutation decisions.

use rand::prelude::*;

/// Randomness the engine consumes.
///
/// Injected into every run so tests can replay or script the draws.
pub trait RandomSource {
    /// Uniform sample in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// True when a unit draw lands at or below `probability`.
    fn chance(&mut self, probability: f64) -> bool;

    /// Fair coin. True means a positive step.
    fn coin_flip(&mut self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Seedable random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SearchRng {
    rng: StdRng,
}

impl SearchRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::random, Self::new)
    }
}

impl RandomSource for SearchRng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.r#gen::<f64>() <= probability
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays fixed draws. Panics when a queue runs dry.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedRandom {
    pub uniforms: std::collections::VecDeque<f64>,
    pub chances: std::collections::VecDeque<bool>,
    pub flips: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(uniforms: &[f64], chances: &[bool], flips: &[bool]) -> Self {
        Self {
            uniforms: uniforms.iter().copied().collect(),
            chances: chances.iter().copied().collect(),
            flips: flips.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let value = self.uniforms.pop_front().expect("uniform draws exhausted");
        assert!((low..=high).contains(&value), "scripted {value} outside [{low}, {high}]");
        value
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().expect("chance draws exhausted")
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().expect("coin flips exhausted")
    }
}
