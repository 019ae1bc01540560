//! Waypoint Search: best-first A* with node merging and two-way search.
//!
//! The engine is generic over a caller-supplied [`SearchProblem`]: node,
//! edge and cost types, successor expansion, heuristic, and the duplicate
//! predicates. Nodes with equal signatures are *weak duplicates*; the problem
//! decides per pair whether they collapse (strong) or merge into one node
//! with several incoming branches.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_search  ←  waypoint_worlds  ←  lock_tests / waypoint_benchmarks
//! (engine)            (demo problems)
//! ```
//!
//! # Key types
//!
//! - [`AStar`]: single-use one-way search
//! - [`TwoWayAStar`]: forward and reverse search meeting through connectors
//! - [`SearchProblem`]: trait for problems that can be searched
//! - [`SearchPolicy`]: expansion budget and inadmissibility handling
//! - [`Plan`]: the returned path with per-step costs
//! - [`OpenList`] / [`NodeStore`]: the frontier heap and the node arena

#![forbid(unsafe_code)]

pub mod contract;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod node;
pub mod plan;
pub mod policy;
pub mod search;
pub mod stats;
pub mod store;
pub mod two_way;

pub use contract::{Candidate, SearchProblem};
pub use cost::Cost;
pub use error::SearchError;
pub use frontier::OpenList;
pub use node::{NodeId, ParentLink, SearchNode};
pub use plan::{Plan, PlanStep};
pub use policy::{InadmissiblePolicy, SearchPolicy};
pub use search::{AStar, Direction, SearchState, StepOutcome};
pub use stats::{RegisterOutcome, SearchStats, TwoWayStats};
pub use store::NodeStore;
pub use two_way::{TwoWayAStar, TwoWayStep};
