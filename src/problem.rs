//! Problem instances: cost structure, counts and tags.
//!
//! A [`ProblemData`] describes one facility-location task over a square cost
//! matrix: candidate facility sites coincide with customer sites, so row `s`,
//! column `c` is the cost of serving customer `c` from a facility opened at
//! site `s`. The instance carries two tags that steer the engine:
//! • [`ProblemKind`] – which objective formula scores an assignment;
//! • [`Direction`] – whether lower or higher scores win.
//!
//! Instances are immutable once validated; every run borrows the same data.

use std::fmt;
use std::io::Read;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PsoError;

/*───────────────────────── cost matrix ─────────────────────────*/

/// Square site × customer cost matrix, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostMatrix {
    rows: Vec<Vec<f64>>,
}

impl CostMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Number of candidate facility sites (rows).
    #[inline]
    pub fn sites(&self) -> usize {
        self.rows.len()
    }

    /// Number of customers (columns of the first row).
    #[inline]
    pub fn customers(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cost of serving `customer` from a facility opened at `site`.
    ///
    /// Callers bounds-check first; the engine validates indices before
    /// touching the matrix.
    #[inline]
    pub fn cost(&self, site: usize, customer: usize) -> f64 {
        self.rows[site][customer]
    }

    fn is_square(&self) -> bool {
        let n = self.rows.len();
        self.rows.iter().all(|row| row.len() == n)
    }

    fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|c| c.is_finite())
    }
}

/*───────────────────────── tags ─────────────────────────*/

/// Which objective formula scores a customer assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    /// Sum of every customer's service cost (p-median).
    Median,
    /// Worst single service cost over all customers (p-center).
    Center,
}

impl FromStr for ProblemKind {
    type Err = PsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "median" => Ok(ProblemKind::Median),
            "center" => Ok(ProblemKind::Center),
            other => Err(PsoError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Median => f.write_str("median"),
            ProblemKind::Center => f.write_str("center"),
        }
    }
}

/// Whether lower or higher fitness wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Minimize,
    Maximize,
}

impl FromStr for Direction {
    type Err = PsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimize" => Ok(Direction::Minimize),
            "maximize" => Ok(Direction::Maximize),
            other => Err(PsoError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Minimize => f.write_str("minimize"),
            Direction::Maximize => f.write_str("maximize"),
        }
    }
}

/*───────────────────────── instance ─────────────────────────*/

/// One immutable facility-location instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemData {
    pub name: String,
    pub costs: CostMatrix,
    /// Facilities to open; also the dimensionality of every particle.
    pub num_facilities: usize,
    /// Customers to serve; also the encoding range of every position entry.
    pub num_customers: usize,
    pub kind: ProblemKind,
    pub direction: Direction,
}

impl ProblemData {
    /// Builds and validates an instance; the customer count is taken from
    /// the matrix.
    pub fn new(
        name: impl Into<String>,
        costs: CostMatrix,
        num_facilities: usize,
        kind: ProblemKind,
        direction: Direction,
    ) -> Result<Self, PsoError> {
        let data = Self {
            name: name.into(),
            num_customers: costs.sites(),
            costs,
            num_facilities,
            kind,
            direction,
        };
        data.validate()?;
        Ok(data)
    }

    /// Reads an instance from JSON and validates it.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, PsoError> {
        let data: Self = serde_json::from_reader(reader)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks shape and counts; every engine entry point calls this before
    /// trusting the instance.
    pub fn validate(&self) -> Result<(), PsoError> {
        let fail = |reason: &str| {
            Err(PsoError::InvalidProblem {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };
        if self.num_facilities == 0 {
            return fail("num_facilities must be at least 1");
        }
        if self.num_facilities > self.num_customers {
            return fail("num_facilities exceeds num_customers");
        }
        if !self.costs.is_square() {
            return fail("cost matrix is not square");
        }
        if self.costs.sites() != self.num_customers {
            return fail("cost matrix size does not match num_customers");
        }
        if !self.costs.is_finite() {
            return fail("cost matrix contains non-finite entries");
        }
        Ok(())
    }
}

/*───────────────────────── run outcome ─────────────────────────*/

/// Outcome of one optimization run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemResults {
    /// Wall-clock time spent in the iteration loop.
    pub elapsed: Duration,
    /// Fitness of the best candidate ever observed during the run.
    pub fitness: f64,
    /// Facility selection of that candidate.
    pub position: Vec<usize>,
    /// Serving site per customer, recomputed from `position`.
    pub assignments: Vec<usize>,
    pub kind: ProblemKind,
    pub direction: Direction,
}

/*───────────────────────── tests ─────────────────────────*/
