//! Typed search errors.
//!
//! `SearchError` covers the recoverable outcomes of a search: the frontier ran
//! dry, the expansion budget was spent, or the policy was rejected before any
//! step was taken. Caller bugs (reusing a finished search, negative edge costs,
//! merging roots) are panics, not errors.

/// Recoverable failure of a one-way or two-way search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Every open node was expanded without reaching a target or meeting point.
    #[error("no plan found: open list exhausted")]
    NotFound,
    /// The policy's expansion cap was reached before the search concluded.
    #[error("expansion budget exceeded after {expansions} expansions")]
    BudgetExceeded { expansions: u64 },
    /// A policy option was rejected during pre-flight validation.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
