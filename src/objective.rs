//! Objective formulas over a completed assignment.
//!
//! • median – total cost of serving every customer;
//! • center – worst single service cost.
//!
//! Pure lookups and folds over the cost matrix; no ordering opinion here.
//! Whether a score is good belongs to [`crate::compare::Comparator`].

use crate::error::PsoError;
use crate::problem::{CostMatrix, ProblemKind};

/// Scores a customer assignment under `kind`.
///
/// `assignments[c]` is the open site serving customer `c`, as produced by
/// [`crate::assignment::assign`]. An empty assignment scores `0.0`.
pub fn evaluate(
    costs: &CostMatrix,
    assignments: &[usize],
    kind: ProblemKind,
) -> Result<f64, PsoError> {
    if assignments.is_empty() {
        return Ok(0.0);
    }
    let sites = costs.sites();
    let customers = costs.customers();
    if assignments.len() > customers {
        return Err(PsoError::CustomerOutOfRange { index: customers, customers });
    }
    let mut total = 0.0;
    let mut worst = f64::NEG_INFINITY;
    for (customer, &site) in assignments.iter().enumerate() {
        if site >= sites {
            return Err(PsoError::SiteOutOfRange { index: site, sites });
        }
        let cost = costs.cost(site, customer);
        total += cost;
        if cost > worst {
            worst = cost;
        }
    }
    Ok(match kind {
        ProblemKind::Median => total,
        ProblemKind::Center => worst,
    })
}

/*───────────────────────── tests ─────────────────────────*/
