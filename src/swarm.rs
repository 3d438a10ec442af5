//! Swarm lifecycle and best-candidate tracking.
//!
//! A [`Swarm`] is an insertion-ordered batch of particles, built fresh for
//! every run and dropped when the run ends. Two notions of "best" live
//! here:
//! • global best – the best particle in the swarm right now, by current
//!   fitness, first encountered wins ties;
//! • universal best – the best global best observed across the whole run,
//!   maintained by the strict-improvement fold [`update_universal_best`].

use rand::Rng;
use rand::seq::SliceRandom;

use crate::compare::Comparator;
use crate::error::PsoError;
use crate::fitness::FitnessEvaluator;
use crate::particle::Particle;
use crate::problem::ProblemData;

/// Particles of one run, in insertion order.
#[derive(Clone, Debug)]
pub struct Swarm {
    particles: Vec<Particle>,
}

impl Swarm {
    /// Random initial swarm: every particle samples `num_facilities`
    /// distinct sites (shuffle and take), scored through `evaluator`.
    pub fn init<R>(
        size: usize,
        data: &ProblemData,
        evaluator: &FitnessEvaluator<'_>,
        rng: &mut R,
    ) -> Result<Self, PsoError>
    where
        R: Rng + ?Sized,
    {
        let mut sites: Vec<usize> = (0..data.num_customers).collect();
        let mut particles = Vec::with_capacity(size);
        for _ in 0..size {
            sites.shuffle(rng);
            let position = sites[..data.num_facilities].to_vec();
            let fitness = evaluator.score(&position)?;
            particles.push(Particle::from_position(position, fitness));
        }
        Ok(Self { particles })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Best particle by current fitness under `cmp`; the first encountered
    /// wins ties.
    pub fn global_best(&self, cmp: Comparator) -> Result<&Particle, PsoError> {
        if self.is_empty() {
            return Err(PsoError::EmptySwarm);
        }
        let mut best = &self.particles[0];
        for p in &self.particles[1..] {
            if cmp.better(p.fitness(), best.fitness()) {
                best = p;
            }
        }
        Ok(best)
    }
}

/// Universal-best fold step: `challenger` replaces `current` only on strict
/// improvement under `cmp`.
pub fn update_universal_best(
    current: Particle,
    challenger: &Particle,
    cmp: Comparator,
) -> Particle {
    if cmp.better(challenger.fitness(), current.fitness()) {
        challenger.clone()
    } else {
        current
    }
}

/*───────────────────────── tests ─────────────────────────*/
