//! Waypoint Worlds: demonstration search problems.
//!
//! Each world implements [`waypoint_search::SearchProblem`] and
//! [`WorldDescriptor`]. They exist to exercise the engine from tests and
//! benchmarks; none of them reaches into engine internals.
//!
//! - [`WeightedGraph`]: explicit graph with `u32` edge costs and a zero
//!   heuristic, including the ten-node reference graph
//! - [`GridWorld`]: 4-connected grid with walls and per-cell entry costs
//! - [`ItineraryWorld`]: flight timetable where arrivals in the same hour
//!   merge instead of collapsing

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod grid;
pub mod itinerary;
pub mod weighted_graph;

pub use contract::WorldDescriptor;
pub use error::WorldError;
pub use grid::{Cell, GridWorld, Move};
pub use itinerary::{CityId, Flight, FlightId, ItineraryWorld, Stop};
pub use weighted_graph::{GraphEdge, WeightedGraph, XorShift, REFERENCE_EDGES};
