// src/optimizer.rs
//! The coordinator: complete optimization runs over one instance.
//!
//! One run is:
//! 1. validate the instance, announce the run;
//! 2. build a fresh random swarm;
//! 3. `max_iterations` times: decay the inertia, move every particle
//!    against a frozen copy of the global best, recompute the global best,
//!    fold it into the universal best, report progress;
//! 4. recompute the winning assignment and hand back [`ProblemResults`].
//!
//! The coordinator itself is stateless across runs; everything a run
//! touches lives on its own stack frame, so back-to-back calls are fully
//! independent.

use std::time::Instant;

use rand::Rng;

use crate::assignment;
use crate::compare::Comparator;
use crate::error::PsoError;
use crate::fitness::FitnessEvaluator;
use crate::listener::Listener;
use crate::params::Params;
use crate::particle::IterationWeights;
use crate::problem::{ProblemData, ProblemResults};
use crate::swarm::{Swarm, update_universal_best};

/// Drives runs with one immutable, validated parameter bundle.
#[derive(Clone, Debug)]
pub struct Optimizer {
    params: Params,
}

impl Optimizer {
    /// Validates `params`; an `Optimizer` never holds a rejected bundle.
    pub fn new(params: Params) -> Result<Self, PsoError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// One full run on `data`, reporting through `listener`.
    ///
    /// With `max_iterations == 0` the result is simply the best particle of
    /// the initial swarm.
    pub fn optimize<R, L>(
        &self,
        data: &ProblemData,
        rng: &mut R,
        listener: &mut L,
    ) -> Result<ProblemResults, PsoError>
    where
        R: Rng + ?Sized,
        L: Listener + ?Sized,
    {
        data.validate()?;
        listener.on_configured(&self.params, data);

        let cmp = Comparator::new(data.direction);
        let evaluator = FitnessEvaluator::new(data);
        let mut swarm = Swarm::init(self.params.swarm_size, data, &evaluator, rng)?;
        let mut guide = swarm.global_best(cmp)?.clone();
        let mut universal = guide.clone();

        let started = Instant::now();
        for (i, inertia) in self.params.inertia_schedule().enumerate() {
            let weights = IterationWeights {
                social: self.params.social,
                cognitive: self.params.cognitive,
                inertia,
            };
            for particle in swarm.particles_mut() {
                particle.update(&guide, weights, cmp, &evaluator, data.num_customers, rng)?;
            }
            guide = swarm.global_best(cmp)?.clone();
            universal = update_universal_best(universal, &guide, cmp);
            listener.on_progress(&universal, i + 1);
        }
        let elapsed = started.elapsed();

        let assignments = assignment::assign(&data.costs, universal.position(), data.kind)?;
        let results = ProblemResults {
            elapsed,
            fitness: universal.fitness(),
            position: universal.position().to_vec(),
            assignments,
            kind: data.kind,
            direction: data.direction,
        };
        listener.on_completed(&results);
        Ok(results)
    }
}

/*───────────────────────── tests ─────────────────────────*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{CostMatrix, Direction, ProblemKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// n sites on a line, cost = distance.
    fn line_data(n: usize, k: usize, direction: Direction) -> ProblemData {
        let rows = (0..n)
            .map(|s| (0..n).map(|c| (s as f64 - c as f64).abs()).collect())
            .collect();
        ProblemData::new("line", CostMatrix::new(rows), k, ProblemKind::Median, direction)
            .unwrap()
    }

    fn small_params() -> Params {
        Params::default()
            .with_swarm_size(8)
            .with_max_iterations(25)
            .with_social(0.4)
            .with_cognitive(0.3)
            .with_inertia(0.2)
    }

    #[test]
    fn new_rejects_invalid_params() {
        let err = Optimizer::new(Params::default().with_swarm_size(0)).unwrap_err();
        assert!(matches!(err, PsoError::InvalidParams(_)));
    }

    #[test]
    fn optimize_rejects_invalid_data() {
        let optimizer = Optimizer::new(small_params()).unwrap();
        let mut data = line_data(5, 2, Direction::Minimize);
        data.num_facilities = 9;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let err = optimizer.optimize(&data, &mut rng, &mut ()).unwrap_err();
        assert!(matches!(err, PsoError::InvalidProblem { .. }));
    }

    #[test]
    fn result_carries_position_and_recomputed_assignments() {
        let data = line_data(9, 3, Direction::Minimize);
        let optimizer = Optimizer::new(small_params()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let results = optimizer.optimize(&data, &mut rng, &mut ()).unwrap();

        assert_eq!(results.position.len(), 3);
        assert_eq!(results.assignments.len(), 9);
        assert_eq!(results.kind, ProblemKind::Median);
        assert_eq!(results.direction, Direction::Minimize);
        let expected =
            assignment::assign(&data.costs, &results.position, data.kind).unwrap();
        assert_eq!(results.assignments, expected);
        let rescored =
            crate::objective::evaluate(&data.costs, &results.assignments, data.kind).unwrap();
        assert_eq!(rescored.to_bits(), results.fitness.to_bits());
    }

    #[test]
    fn zero_iterations_returns_the_initial_best() {
        let data = line_data(7, 2, Direction::Minimize);
        let optimizer = Optimizer::new(small_params().with_max_iterations(0)).unwrap();

        let mut mirror_rng = ChaCha8Rng::seed_from_u64(11);
        let evaluator = FitnessEvaluator::new(&data);
        let mirror = Swarm::init(8, &data, &evaluator, &mut mirror_rng).unwrap();
        let cmp = Comparator::new(data.direction);
        let expected = mirror.global_best(cmp).unwrap().clone();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let results = optimizer.optimize(&data, &mut rng, &mut ()).unwrap();
        assert_eq!(results.fitness.to_bits(), expected.fitness().to_bits());
        assert_eq!(results.position, expected.position());
    }

    #[test]
    fn same_seed_same_result() {
        let data = line_data(10, 3, Direction::Minimize);
        let optimizer = Optimizer::new(small_params()).unwrap();
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        let a = optimizer.optimize(&data, &mut rng_a, &mut ()).unwrap();
        let b = optimizer.optimize(&data, &mut rng_b, &mut ()).unwrap();
        assert_eq!(a.position, b.position);
        assert_eq!(a.fitness.to_bits(), b.fitness.to_bits());
        assert_eq!(a.assignments, b.assignments);
    }

    #[test]
    fn maximize_runs_improve_upwards() {
        let data = line_data(8, 2, Direction::Maximize);
        let optimizer = Optimizer::new(small_params()).unwrap();
        let cmp = Comparator::new(data.direction);

        let mut mirror_rng = ChaCha8Rng::seed_from_u64(5);
        let evaluator = FitnessEvaluator::new(&data);
        let mirror = Swarm::init(8, &data, &evaluator, &mut mirror_rng).unwrap();
        let initial_best = mirror.global_best(cmp).unwrap().fitness();

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let results = optimizer.optimize(&data, &mut rng, &mut ()).unwrap();
        assert!(!cmp.better(initial_best, results.fitness));
    }
}
