//! Candidate positions and the probabilistic move rule.
//!
//! A particle is a facility selection: one site index per facility slot.
//! This variant carries no velocity vector. Instead the social, cognitive
//! and inertia weights are cumulative per-dimension move probabilities:
//! each dimension independently copies the frozen guide, copies the
//! personal best, keeps its value, or resamples uniformly.

use rand::Rng;

use crate::compare::Comparator;
use crate::error::PsoError;
use crate::fitness::FitnessEvaluator;

/// Weight snapshot handed to every particle for one iteration.
///
/// `inertia` is the already-decayed value for this iteration; social and
/// cognitive stay constant across a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationWeights {
    pub social: f64,
    pub cognitive: f64,
    pub inertia: f64,
}

/// One candidate solution with its cached score and personal best.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: Vec<usize>,
    fitness: f64,
    best_position: Vec<usize>,
    best_fitness: f64,
}

impl Particle {
    /// Builds a particle from an evaluated starting position; the personal
    /// best starts as a copy of it.
    pub(crate) fn from_position(position: Vec<usize>, fitness: f64) -> Self {
        Self {
            best_position: position.clone(),
            best_fitness: fitness,
            position,
            fitness,
        }
    }

    #[inline]
    pub fn position(&self) -> &[usize] {
        &self.position
    }

    #[inline]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    #[inline]
    pub fn best_position(&self) -> &[usize] {
        &self.best_position
    }

    #[inline]
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// One in-place move guided by `guide` (the frozen global best).
    ///
    /// Per dimension, one uniform draw against the cumulative thresholds
    /// social / +cognitive / +inertia decides the new value: guide
    /// component, personal-best component, current value, or a uniform
    /// resample from `0..range`. The new position is then re-scored and the
    /// personal best updated on strict improvement under `cmp`.
    pub fn update<R>(
        &mut self,
        guide: &Particle,
        weights: IterationWeights,
        cmp: Comparator,
        evaluator: &FitnessEvaluator<'_>,
        range: usize,
        rng: &mut R,
    ) -> Result<(), PsoError>
    where
        R: Rng + ?Sized,
    {
        debug_assert_eq!(guide.position.len(), self.position.len());
        let social_cut = weights.social;
        let cognitive_cut = social_cut + weights.cognitive;
        let keep_cut = cognitive_cut + weights.inertia;
        for d in 0..self.position.len() {
            let draw: f64 = rng.gen_range(0.0..1.0);
            self.position[d] = if draw < social_cut {
                guide.position[d]
            } else if draw < cognitive_cut {
                self.best_position[d]
            } else if draw < keep_cut {
                self.position[d]
            } else {
                rng.gen_range(0..range)
            };
        }
        self.fitness = evaluator.score(&self.position)?;
        if cmp.better(self.fitness, self.best_fitness) {
            self.best_fitness = self.fitness;
            self.best_position.clone_from(&self.position);
        }
        Ok(())
    }
}

/*───────────────────────── tests ─────────────────────────*/
