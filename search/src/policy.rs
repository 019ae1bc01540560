//! Search policy types.

use crate::error::SearchError;

/// Budget and failure-handling configuration shared by one-way and two-way
/// search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (`None` = unbounded).
    ///
    /// For two-way search the cap applies to each direction separately.
    pub max_expansions: Option<u64>,
    /// What to do when a cheaper path to an already-closed node shows up.
    pub on_inadmissible: InadmissiblePolicy,
    /// Capacity hint for the node arena and open list.
    pub reserve_nodes: usize,
}

impl SearchPolicy {
    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is `Some(0)`,
    /// which would forbid even expanding the source.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 (use None for unbounded)".into(),
            });
        }
        Ok(())
    }

    /// Policy echo for reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "on_inadmissible": self.on_inadmissible.as_str(),
            "reserve_nodes": self.reserve_nodes,
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            on_inadmissible: InadmissiblePolicy::Panic,
            reserve_nodes: 0,
        }
    }
}

/// Reaction to a heuristic inadmissibility violation.
///
/// A violation is detected when registration finds a strictly cheaper branch
/// for a node that has already been expanded. That can only happen if the
/// heuristic overestimated the remaining cost somewhere earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InadmissiblePolicy {
    /// Panic immediately. Default.
    Panic,
    /// Keep the closed node's cost, emit a warning, and count the event.
    /// Optimality of the returned plan is then undefined.
    KeepClosedCost,
}

impl InadmissiblePolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::KeepClosedCost => "keep_closed_cost",
        }
    }
}
