//! Error taxonomy of the crate.
//!
//! Two families, mirroring how failures actually arise:
//! • configuration contract violations – rejected parameter bundles, rejected
//!   problem instances, unknown tag strings at a parse boundary;
//! • collaborator failures – the assignment or objective step fed indices the
//!   cost matrix cannot answer for.
//!
//! Both abort the current operation with no partial result; nothing in the
//! engine retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PsoError {
    /// Rejected parameter bundle (zero swarm, non-finite weight, ...).
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Rejected problem instance (shape, counts, non-finite costs).
    #[error("invalid problem `{name}`: {reason}")]
    InvalidProblem { name: String, reason: String },

    /// Unknown objective-direction tag at a parse boundary.
    #[error("unknown objective direction `{0}` (expected `minimize` or `maximize`)")]
    UnknownDirection(String),

    /// Unknown problem-kind tag at a parse boundary.
    #[error("unknown problem kind `{0}` (expected `median` or `center`)")]
    UnknownKind(String),

    /// A facility selection with no entries cannot serve anyone.
    #[error("empty facility selection")]
    EmptySelection,

    /// A selected facility index has no row in the cost matrix.
    #[error("facility index {index} out of range ({sites} candidate sites)")]
    SiteOutOfRange { index: usize, sites: usize },

    /// An assignment covers more customers than the cost matrix has.
    #[error("customer index {index} out of range ({customers} customers)")]
    CustomerOutOfRange { index: usize, customers: usize },

    /// A swarm with no particles has no global best.
    #[error("swarm is empty; global best is undefined")]
    EmptySwarm,

    /// Problem JSON could not be read or parsed.
    #[error("problem source: {0}")]
    Source(#[from] serde_json::Error),
}
