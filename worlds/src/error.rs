//! World construction errors.

/// Typed failure while building a demonstration world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// An edge endpoint is outside `0..node_count`.
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: u32, node_count: u32 },

    /// A grid map could not be parsed.
    #[error("malformed grid: {detail}")]
    MalformedGrid { detail: String },

    /// A city name is not part of the timetable.
    #[error("unknown city {name:?}")]
    UnknownCity { name: String },

    /// A flight has an unparsable clock or arrives before it departs.
    #[error("invalid flight: {detail}")]
    InvalidFlight { detail: String },
}
