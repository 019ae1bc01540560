//! World descriptor contract.
//!
//! Worlds describe themselves for reports and benchmark labels. Searching is
//! the engine's job; a world only answers [`waypoint_search::SearchProblem`]
//! callbacks.

/// Identity and summary of a demonstration world.
pub trait WorldDescriptor {
    /// Unique world identifier (e.g., `"weighted_graph"`).
    fn world_id(&self) -> &str;

    /// Summary of the world's shape as JSON (sizes, costs, flags).
    fn describe(&self) -> serde_json::Value;
}
