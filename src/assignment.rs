//! Customer-to-facility assignment (the deterministic half of fitness).
//!
//! Every customer is served by the cheapest open facility; the two problem
//! kinds share this rule and differ only in how the resulting costs are
//! scored. Duplicate sites in a selection collapse to one open facility, so
//! the assignment depends only on the set of distinct sites.
//!
//! Determinism contract: equal selections always produce equal assignments.
//! Cost ties between open facilities resolve to the lowest site index.

use bitvec::prelude::*;

use crate::error::PsoError;
use crate::problem::{CostMatrix, ProblemKind};

/// Maps every customer to one open facility from `facilities`.
///
/// `facilities` is a raw particle position: site indices, duplicates allowed.
/// Returns one serving site per matrix column. Fails on an empty selection or
/// a site index outside the matrix.
pub fn assign(
    costs: &CostMatrix,
    facilities: &[usize],
    kind: ProblemKind,
) -> Result<Vec<usize>, PsoError> {
    if facilities.is_empty() {
        return Err(PsoError::EmptySelection);
    }
    let sites = costs.sites();
    let mut open = bitvec![0; sites];
    for &site in facilities {
        if site >= sites {
            return Err(PsoError::SiteOutOfRange { index: site, sites });
        }
        open.set(site, true);
    }
    match kind {
        ProblemKind::Median | ProblemKind::Center => nearest(costs, &open),
    }
}

/// Greedy rule shared by both kinds: cheapest open facility per customer.
fn nearest(costs: &CostMatrix, open: &BitVec) -> Result<Vec<usize>, PsoError> {
    let mut assignments = Vec::with_capacity(costs.customers());
    for customer in 0..costs.customers() {
        let mut choice: Option<(usize, f64)> = None;
        for site in open.iter_ones() {
            let cost = costs.cost(site, customer);
            if choice.map_or(true, |(_, best)| cost < best) {
                choice = Some((site, cost));
            }
        }
        match choice {
            Some((site, _)) => assignments.push(site),
            None => return Err(PsoError::EmptySelection),
        }
    }
    Ok(assignments)
}

/*───────────────────────── tests ─────────────────────────*/
