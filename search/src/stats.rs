//! Search counters and their JSON report form.

use std::fmt;

use crate::cost::Cost;

/// What [`crate::search::AStar::register`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// First record for its key; opened.
    Inserted,
    /// Cheaper than the existing primary branch; became the new primary.
    /// For weak duplicates the old primary was kept as an alternate.
    ReplacedPrimary,
    /// Weak duplicate without better cost; kept as an alternate branch.
    AppendedAlternate,
    /// Strong duplicate without better cost (or tolerated inadmissible
    /// improvement of a closed node); dropped.
    Discarded,
}

impl RegisterOutcome {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::ReplacedPrimary => "replaced_primary",
            Self::AppendedAlternate => "appended_alternate",
            Self::Discarded => "discarded",
        }
    }
}

/// Counters for one search direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats<C> {
    /// Nodes popped from the open list and closed.
    pub expansions: u64,
    pub inserted: u64,
    pub replaced_primary: u64,
    pub appended_alternate: u64,
    pub discarded: u64,
    /// Cheaper branches for closed nodes that were tolerated by policy.
    pub inadmissible: u64,
    pub open_high_water: u64,
    pub open: u64,
    pub closed: u64,
    /// Lowest cost at which a target was generated (one-way only).
    pub best_target_cost: Option<C>,
}

impl<C: Cost> SearchStats<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            expansions: 0,
            inserted: 0,
            replaced_primary: 0,
            appended_alternate: 0,
            discarded: 0,
            inadmissible: 0,
            open_high_water: 0,
            open: 0,
            closed: 0,
            best_target_cost: None,
        }
    }

    pub(crate) fn record(&mut self, outcome: RegisterOutcome) {
        match outcome {
            RegisterOutcome::Inserted => self.inserted += 1,
            RegisterOutcome::ReplacedPrimary => self.replaced_primary += 1,
            RegisterOutcome::AppendedAlternate => self.appended_alternate += 1,
            RegisterOutcome::Discarded => self.discarded += 1,
        }
    }

    /// Report form. Costs are rendered with their `Debug` representation so
    /// any [`Cost`] type can be reported.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "appended_alternate": self.appended_alternate,
            "best_target_cost": self.best_target_cost.map(|c| format!("{c:?}")),
            "closed": self.closed,
            "discarded": self.discarded,
            "expansions": self.expansions,
            "inadmissible": self.inadmissible,
            "inserted": self.inserted,
            "open": self.open,
            "open_high_water": self.open_high_water,
            "replaced_primary": self.replaced_primary,
        })
    }
}

impl<C: Cost> Default for SearchStats<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Display for SearchStats<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "open {} / closed {}", self.open, self.closed)
    }
}

/// Counters for a two-way search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoWayStats<C> {
    pub forward: SearchStats<C>,
    pub reverse: SearchStats<C>,
    /// Connector nodes synthesized (including ones later superseded).
    pub connectors: u64,
    /// Cheapest complete path seen through any connector.
    pub best_connector_cost: Option<C>,
}

impl<C: Cost> TwoWayStats<C> {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "best_connector_cost": self.best_connector_cost.map(|c| format!("{c:?}")),
            "connectors": self.connectors,
            "forward": self.forward.to_json_value(),
            "reverse": self.reverse.to_json_value(),
        })
    }
}

impl<C> fmt::Display for TwoWayStats<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "forward: {}; reverse: {}", self.forward, self.reverse)
    }
}
