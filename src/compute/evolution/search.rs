//! Truncation-selection search over a single real variable.

use log::{debug, info};

use crate::schema::{ConfigError, OptimizationMode, Point, PopulationSnapshot, SearchConfig};

use super::candidate::{Candidate, UnevaluatedCandidate};
use super::objective::{EvaluationError, ObjectiveFunction};
use super::rng::RandomSource;

/// Search run failures. A failed run yields no snapshots.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SearchError {
    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Unevaluated(#[from] UnevaluatedCandidate),
}

/// Index of the next point to evict: the lowest output when maximizing, the
/// highest when minimizing. Ties keep the earliest index.
pub fn eviction_index(points: &[Point], mode: OptimizationMode) -> Option<usize> {
    let mut found: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        match found {
            Some((_, extreme)) if !mode.evicts_before(point.output, extreme) => {}
            _ => found = Some((index, point.output)),
        }
    }
    found.map(|(index, _)| index)
}

/// Evolution engine that runs the search.
///
/// Running consumes the engine, so snapshots from a failed run are dropped
/// along with it.
pub struct EvolutionEngine<'f, F: ?Sized, R> {
    config: SearchConfig,
    objective: &'f F,
    rng: R,
    population: Vec<Candidate>,
    snapshots: Vec<PopulationSnapshot>,
}

impl<'f, F, R> EvolutionEngine<'f, F, R>
where
    F: ObjectiveFunction + ?Sized,
    R: RandomSource,
{
    /// Create a new evolution engine. Fails on an invalid configuration.
    pub fn new(config: SearchConfig, objective: &'f F, rng: R) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            population: Vec::with_capacity(config.agent_count),
            snapshots: Vec::with_capacity(config.generation_count),
            config,
            objective,
            rng,
        })
    }

    /// Engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Sample and evaluate the starting population.
    fn initialize(&mut self) -> Result<(), SearchError> {
        self.population.clear();
        for _ in 0..self.config.agent_count {
            let input = self.rng.uniform(self.config.left, self.config.right);
            let mut candidate = Candidate::new(input);
            candidate.evaluate(self.objective)?;
            self.population.push(candidate);
        }
        Ok(())
    }

    /// Evict half the population and record the generation.
    fn select(&mut self, generation: usize) -> Result<(), SearchError> {
        let mut discarded = Vec::with_capacity(self.config.half());

        for _ in 0..self.config.half() {
            let points = self
                .population
                .iter()
                .map(Candidate::as_point)
                .collect::<Result<Vec<_>, _>>()?;
            let Some(index) = eviction_index(&points, self.config.mode) else {
                break;
            };
            discarded.push(points[index]);
            self.population.remove(index);
        }

        let surviving = self
            .population
            .iter()
            .map(Candidate::as_point)
            .collect::<Result<Vec<_>, _>>()?;

        self.snapshots
            .push(PopulationSnapshot::new(generation, discarded, surviving));
        Ok(())
    }

    /// Refill the population with one unevaluated copy of each survivor.
    fn duplicate(&mut self) {
        let clones: Vec<Candidate> = self.population.iter().map(Candidate::duplicate).collect();
        self.population.extend(clones);
    }

    /// Mutate every candidate, then re-evaluate all of them.
    fn mutate_and_evaluate(&mut self) -> Result<usize, SearchError> {
        let mut mutated = 0;
        for candidate in &mut self.population {
            if candidate.mutate(&self.config.mutation, &mut self.rng) {
                mutated += 1;
            }
        }
        for candidate in &mut self.population {
            candidate.evaluate(self.objective)?;
        }
        Ok(mutated)
    }

    /// Run one full generation.
    fn step_generation(&mut self, generation: usize) -> Result<(), SearchError> {
        self.select(generation)?;
        self.duplicate();
        let mutated = self.mutate_and_evaluate()?;

        if let Some(snapshot) = self.snapshots.last() {
            debug!(
                "generation {}/{}: discarded={}, surviving={}, mutated={}, mean surviving x={:?}",
                generation + 1,
                self.config.generation_count,
                snapshot.discarded().len(),
                snapshot.surviving().len(),
                mutated,
                snapshot.mean_surviving_input(),
            );
        }
        Ok(())
    }

    /// Run the search, reporting each snapshot as it is recorded.
    pub fn run_with_callback<C>(
        mut self,
        mut callback: C,
    ) -> Result<Vec<PopulationSnapshot>, SearchError>
    where
        C: FnMut(&PopulationSnapshot),
    {
        info!(
            "starting search: mode={:?}, interval=[{}, {}], agents={}, generations={}",
            self.config.mode,
            self.config.left,
            self.config.right,
            self.config.agent_count,
            self.config.generation_count,
        );

        self.initialize()?;

        for generation in 0..self.config.generation_count {
            self.step_generation(generation)?;
            if let Some(snapshot) = self.snapshots.last() {
                callback(snapshot);
            }
        }

        info!("search finished after {} generations", self.snapshots.len());
        Ok(self.snapshots)
    }

    /// Run the search (blocking).
    pub fn run(self) -> Result<Vec<PopulationSnapshot>, SearchError> {
        self.run_with_callback(|_| {})
    }
}

/// Run one search with the given objective and random source.
pub fn run<F, R>(
    config: &SearchConfig,
    objective: &F,
    rng: &mut R,
) -> Result<Vec<PopulationSnapshot>, SearchError>
where
    F: ObjectiveFunction + ?Sized,
    R: RandomSource + ?Sized,
{
    EvolutionEngine::new(config.clone(), objective, rng)?.run()
}
