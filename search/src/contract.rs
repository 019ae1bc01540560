//! Search problem contract trait.

use std::hash::Hash;

use crate::cost::Cost;

/// One successor produced by [`SearchProblem::expand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<N, E, C> {
    /// The transition taken.
    pub edge: E,
    /// Incremental cost of `edge`; must be `>= C::zero()`.
    pub edge_cost: C,
    /// The state reached.
    pub node: N,
}

/// Trait for problems that can be searched by [`crate::search::AStar`] and
/// [`crate::two_way::TwoWayAStar`].
///
/// # Contract
///
/// - `signature` must be a pure function of the node value. Equal signatures
///   make two nodes *weak duplicates*.
/// - `heuristic` (and `heuristic_reverse`) must be admissible: never above the
///   true remaining cost to any valid target. Two weak duplicates must get
///   the same estimate.
/// - Every candidate returned by `expand` must have a non-negative
///   `edge_cost`. Zero candidates marks a dead end.
/// - Callbacks take `&self` and must not depend on engine state.
pub trait SearchProblem {
    type Node: Clone;
    type Edge: Clone;
    type Cost: Cost;
    type Signature: Hash + Eq + Clone;

    /// Weak-duplicate signature of `node`.
    fn signature(&self, node: &Self::Node) -> Self::Signature;

    /// List the successors of `node`.
    ///
    /// `prev_node` / `prev_edge` describe the primary branch that reached
    /// `node` (both `None` at a root). `cost_so_far` is the node's cumulative
    /// cost.
    fn expand(
        &self,
        node: &Self::Node,
        prev_node: Option<&Self::Node>,
        prev_edge: Option<&Self::Edge>,
        cost_so_far: Self::Cost,
    ) -> Vec<Candidate<Self::Node, Self::Edge, Self::Cost>>;

    /// Remaining-cost estimate from `node` to the nearest of `destinations`.
    fn heuristic(&self, node: &Self::Node, destinations: &[Self::Node]) -> Self::Cost;

    /// One-way search only: whether `node` ends the search.
    ///
    /// Defaults to "`node` has the signature of one of `destinations`".
    fn is_target(
        &self,
        node: &Self::Node,
        cost_so_far: Self::Cost,
        destinations: &[Self::Node],
    ) -> bool {
        let _ = cost_so_far;
        let signature = self.signature(node);
        destinations.iter().any(|d| self.signature(d) == signature)
    }

    /// Called only for weak duplicates. `true` collapses them to the cheaper
    /// one (classical A*); `false` merges them into one node with several
    /// branches.
    fn is_strong_duplicate(&self, a: &Self::Node, b: &Self::Node) -> bool {
        let _ = (a, b);
        true
    }

    /// Two-way search only: list predecessors of `node` for the reverse
    /// direction. Defaults to [`SearchProblem::expand`] (undirected graphs).
    fn expand_reverse(
        &self,
        node: &Self::Node,
        prev_node: Option<&Self::Node>,
        prev_edge: Option<&Self::Edge>,
        cost_so_far: Self::Cost,
    ) -> Vec<Candidate<Self::Node, Self::Edge, Self::Cost>> {
        self.expand(node, prev_node, prev_edge, cost_so_far)
    }

    /// Two-way search only: admissible estimate from `node` back to the
    /// nearest of `sources`. Defaults to [`SearchProblem::heuristic`].
    fn heuristic_reverse(&self, node: &Self::Node, sources: &[Self::Node]) -> Self::Cost {
        self.heuristic(node, sources)
    }
}
