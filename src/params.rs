// src/params.rs
//! Parameter bundle for optimization runs.
//!
//! One [`Params`] value fully determines a run's behaviour on a given
//! instance (modulo the random stream). The bundle is immutable during a
//! run: the decaying inertia is not mutated in place but exposed as an
//! explicit per-iteration schedule, so the same `Params` can drive any
//! number of runs without cross-talk.

use serde::{Deserialize, Serialize};

use crate::error::PsoError;

/// Swarm size, move weights and iteration budget for one run.
///
/// The three weights act as per-dimension move probabilities; values above
/// `1.0` are accepted and simply saturate the cumulative thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Particles per swarm.
    pub swarm_size: usize,
    /// Pull towards the frozen global best.
    pub social: f64,
    /// Pull towards each particle's personal best.
    pub cognitive: f64,
    /// Tendency to keep the current value; decays multiplicatively.
    pub inertia: f64,
    /// Factor applied to the inertia before every iteration.
    pub inertia_discount: f64,
    /// Iterations per run; `0` is a valid (empty) run.
    pub max_iterations: usize,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            swarm_size: 30,
            social: 0.5,
            cognitive: 0.5,
            inertia: 0.7,
            inertia_discount: 0.95,
            max_iterations: 200,
        }
    }
}

impl Params {
    #[must_use]
    pub fn with_swarm_size(mut self, swarm_size: usize) -> Self {
        self.swarm_size = swarm_size;
        self
    }

    #[must_use]
    pub fn with_social(mut self, social: f64) -> Self {
        self.social = social;
        self
    }

    #[must_use]
    pub fn with_cognitive(mut self, cognitive: f64) -> Self {
        self.cognitive = cognitive;
        self
    }

    #[must_use]
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    #[must_use]
    pub fn with_inertia_discount(mut self, inertia_discount: f64) -> Self {
        self.inertia_discount = inertia_discount;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks the bundle; rejected bundles never reach the engine.
    pub fn validate(&self) -> Result<(), PsoError> {
        if self.swarm_size == 0 {
            return Err(PsoError::InvalidParams(
                "swarm_size must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("social", self.social),
            ("cognitive", self.cognitive),
            ("inertia", self.inertia),
            ("inertia_discount", self.inertia_discount),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PsoError::InvalidParams(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Inertia value per iteration: the i-th yielded value (1-based) is
    /// `inertia * inertia_discount^i`. The decay precedes the first
    /// iteration, so the configured `inertia` itself is never applied.
    pub fn inertia_schedule(&self) -> impl Iterator<Item = f64> {
        let discount = self.inertia_discount;
        std::iter::successors(Some(self.inertia * discount), move |w| Some(w * discount))
            .take(self.max_iterations)
    }
}

/*───────────────────────── tests ─────────────────────────*/
