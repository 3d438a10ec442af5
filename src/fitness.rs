//! Fitness pipeline: assignment composed with an objective.
//!
//! The evaluator owns nothing and caches nothing; it borrows one validated
//! [`ProblemData`] and turns facility selections into scores. Equal
//! selections always score equally, which is what lets particles cache their
//! fitness between moves.

use crate::assignment;
use crate::error::PsoError;
use crate::objective;
use crate::problem::ProblemData;

/// Scores facility selections against one immutable problem instance.
#[derive(Clone, Copy, Debug)]
pub struct FitnessEvaluator<'p> {
    data: &'p ProblemData,
}

impl<'p> FitnessEvaluator<'p> {
    pub fn new(data: &'p ProblemData) -> Self {
        Self { data }
    }

    /// The instance being scored against.
    #[inline]
    pub fn data(&self) -> &'p ProblemData {
        self.data
    }

    /// Assigns customers for `selection`, then scores the assignment.
    ///
    /// Collaborator failures propagate unchanged.
    pub fn score(&self, selection: &[usize]) -> Result<f64, PsoError> {
        let assignments = assignment::assign(&self.data.costs, selection, self.data.kind)?;
        objective::evaluate(&self.data.costs, &assignments, self.data.kind)
    }
}

/*───────────────────────── tests ─────────────────────────*/
