//! `WeightedGraph`: explicit graph with `u32` edge costs.
//!
//! Nodes are `0..node_count`. The heuristic is zero, so searches over this
//! world behave as Dijkstra. Reverse expansion walks incoming edges, which
//! makes the world usable from two-way search even when directed.

use waypoint_search::{Candidate, SearchProblem};

use crate::contract::WorldDescriptor;
use crate::error::WorldError;

/// Edges of the ten-node reference graph: `(a, b, cost)`, undirected.
///
/// Shortest `0 → 5` path is `0 → 4 → 2 → 5` with cost 28. Nodes 7, 8 and 9
/// are isolated.
pub const REFERENCE_EDGES: [(u32, u32, u32); 9] = [
    (0, 1, 10),
    (1, 2, 20),
    (0, 4, 1),
    (4, 2, 2),
    (2, 3, 10),
    (3, 5, 20),
    (2, 5, 25),
    (0, 5, 32),
    (3, 6, 100),
];

/// A directed edge as it appears in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub from: u32,
    pub to: u32,
    pub cost: u32,
}

/// Adjacency-list graph.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    directed: bool,
    outgoing: Vec<Vec<GraphEdge>>,
    incoming: Vec<Vec<GraphEdge>>,
}

impl WeightedGraph {
    /// Build an undirected graph; each `(a, b, cost)` is usable both ways.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NodeOutOfRange`] if an endpoint is not below
    /// `node_count`.
    pub fn undirected(node_count: u32, edges: &[(u32, u32, u32)]) -> Result<Self, WorldError> {
        check_endpoints(node_count, edges)?;
        Ok(Self::build(node_count, edges, false))
    }

    /// Build a directed graph; each `(a, b, cost)` runs from `a` to `b` only.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NodeOutOfRange`] if an endpoint is not below
    /// `node_count`.
    pub fn directed(node_count: u32, edges: &[(u32, u32, u32)]) -> Result<Self, WorldError> {
        check_endpoints(node_count, edges)?;
        Ok(Self::build(node_count, edges, true))
    }

    /// The ten-node reference graph ([`REFERENCE_EDGES`]).
    #[must_use]
    pub fn reference() -> Self {
        Self::build(10, &REFERENCE_EDGES, false)
    }

    /// Deterministic pseudo-random undirected graph.
    ///
    /// Edge endpoints and costs (`1..=max_cost`) come from a xorshift stream
    /// seeded with `seed`, so the same arguments always give the same graph.
    /// Self-loops are skipped; parallel edges are allowed.
    #[must_use]
    pub fn pseudo_random(node_count: u32, edge_count: usize, max_cost: u32, seed: u64) -> Self {
        let mut rng = XorShift::new(seed);
        let mut edges = Vec::with_capacity(edge_count);
        if node_count >= 2 {
            while edges.len() < edge_count {
                let a = rng.below(node_count);
                let b = rng.below(node_count);
                if a != b {
                    edges.push((a, b, 1 + rng.below(max_cost.max(1))));
                }
            }
        }
        Self::build(node_count, &edges, false)
    }

    fn build(node_count: u32, edges: &[(u32, u32, u32)], directed: bool) -> Self {
        let n = node_count as usize;
        let mut outgoing = vec![Vec::new(); n];
        let mut incoming = vec![Vec::new(); n];
        for &(from, to, cost) in edges {
            let edge = GraphEdge { from, to, cost };
            outgoing[from as usize].push(edge);
            incoming[to as usize].push(edge);
            if !directed {
                let back = GraphEdge {
                    from: to,
                    to: from,
                    cost,
                };
                outgoing[to as usize].push(back);
                incoming[from as usize].push(back);
            }
        }
        Self {
            directed,
            outgoing,
            incoming,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let n = self.outgoing.len() as u32;
        n
    }

    /// Number of edges as given at construction.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.outgoing.iter().map(Vec::len).sum();
        if self.directed {
            stored
        } else {
            stored / 2
        }
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Edges leaving `node` (empty for unknown nodes).
    #[must_use]
    pub fn outgoing(&self, node: u32) -> &[GraphEdge] {
        self.outgoing.get(node as usize).map(Vec::as_slice).unwrap_or_default()
    }

    /// Edges entering `node` (empty for unknown nodes).
    #[must_use]
    pub fn incoming(&self, node: u32) -> &[GraphEdge] {
        self.incoming.get(node as usize).map(Vec::as_slice).unwrap_or_default()
    }
}

impl SearchProblem for WeightedGraph {
    type Node = u32;
    type Edge = GraphEdge;
    type Cost = u32;
    type Signature = u32;

    fn signature(&self, node: &u32) -> u32 {
        *node
    }

    fn expand(
        &self,
        node: &u32,
        _prev_node: Option<&u32>,
        _prev_edge: Option<&GraphEdge>,
        _cost_so_far: u32,
    ) -> Vec<Candidate<u32, GraphEdge, u32>> {
        self.outgoing(*node)
            .iter()
            .map(|&edge| Candidate {
                edge,
                edge_cost: edge.cost,
                node: edge.to,
            })
            .collect()
    }

    fn heuristic(&self, _node: &u32, _destinations: &[u32]) -> u32 {
        0
    }

    fn expand_reverse(
        &self,
        node: &u32,
        _prev_node: Option<&u32>,
        _prev_edge: Option<&GraphEdge>,
        _cost_so_far: u32,
    ) -> Vec<Candidate<u32, GraphEdge, u32>> {
        self.incoming(*node)
            .iter()
            .map(|&edge| Candidate {
                edge,
                edge_cost: edge.cost,
                node: edge.from,
            })
            .collect()
    }
}

impl WorldDescriptor for WeightedGraph {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "weighted_graph"
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "directed": self.directed,
            "edge_count": self.edge_count(),
            "node_count": self.node_count(),
        })
    }
}

fn check_endpoints(node_count: u32, edges: &[(u32, u32, u32)]) -> Result<(), WorldError> {
    for &(a, b, _) in edges {
        for node in [a, b] {
            if node >= node_count {
                return Err(WorldError::NodeOutOfRange { node, node_count });
            }
        }
    }
    Ok(())
}

/// Xorshift64 stream; enough for reproducible test and benchmark graphs.
#[derive(Debug, Clone)]
pub struct XorShift(u64);

impl XorShift {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    /// Uniform-ish value in `0..bound` (`bound` must be non-zero).
    pub fn below(&mut self, bound: u32) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let v = (self.next_u64() % u64::from(bound)) as u32;
        v
    }
}
