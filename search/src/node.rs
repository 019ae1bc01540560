//! Search node records and parent links.

use crate::cost::Cost;

/// Stable arena index of a [`SearchNode`] inside one search instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Handle for arena slot `index`. Only meaningful for the store (or
    /// [`crate::frontier::HeapSlots`] table) that owns that slot.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An incoming branch of a [`SearchNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink<E, C> {
    /// Back-reference to the parent record (never owning).
    pub parent: NodeId,
    /// The transition taken. `None` only on connector links.
    pub edge: Option<E>,
    /// Cost of this transition alone.
    pub edge_cost: C,
    /// `parent.cumulative_cost() + edge_cost`.
    pub cumulative_cost: C,
}

/// The engine's canonical record for one node under weak-duplicate equality.
///
/// The primary branch is the only one that bears cost. Alternates are
/// retained for node merging and never change `f_value`.
#[derive(Debug, Clone)]
pub struct SearchNode<N, E, C> {
    pub(crate) value: N,
    pub(crate) primary: Option<ParentLink<E, C>>,
    pub(crate) alternates: Vec<ParentLink<E, C>>,
    pub(crate) f_value: C,
    pub(crate) heap_slot: Option<usize>,
    pub(crate) is_connector: bool,
}

impl<N, E, C: Cost> SearchNode<N, E, C> {
    #[must_use]
    pub fn value(&self) -> &N {
        &self.value
    }

    /// Lowest-known-cost branch; `None` for a root.
    #[must_use]
    pub fn primary(&self) -> Option<&ParentLink<E, C>> {
        self.primary.as_ref()
    }

    /// Non-primary incoming branches, in registration order.
    #[must_use]
    pub fn alternates(&self) -> &[ParentLink<E, C>] {
        &self.alternates
    }

    /// All incoming branches, primary first.
    pub fn branches(&self) -> impl Iterator<Item = &ParentLink<E, C>> {
        self.primary.iter().chain(self.alternates.iter())
    }

    #[must_use]
    pub fn branch_count(&self) -> usize {
        usize::from(self.primary.is_some()) + self.alternates.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.primary.is_none()
    }

    /// Cost of the primary branch (zero for a root).
    #[must_use]
    pub fn cumulative_cost(&self) -> C {
        self.primary
            .as_ref()
            .map_or_else(C::zero, |link| link.cumulative_cost)
    }

    #[must_use]
    pub fn f_value(&self) -> C {
        self.f_value
    }

    /// Position in the open list, if the node is currently open.
    #[must_use]
    pub fn heap_slot(&self) -> Option<usize> {
        self.heap_slot
    }

    /// Whether this is a synthetic meeting point created by two-way search.
    #[must_use]
    pub fn is_connector(&self) -> bool {
        self.is_connector
    }
}

/// A candidate record awaiting registration: zero branches for a root, one
/// branch otherwise.
#[derive(Debug, Clone)]
pub struct Provisional<N, E, C> {
    pub value: N,
    pub link: Option<ParentLink<E, C>>,
    pub f_value: C,
    pub is_connector: bool,
}

impl<N, E, C: Cost> Provisional<N, E, C> {
    /// A root candidate with cost zero.
    pub fn root(value: N, heuristic: C) -> Self {
        Self {
            value,
            link: None,
            f_value: heuristic,
            is_connector: false,
        }
    }

    #[must_use]
    pub fn cumulative_cost(&self) -> C {
        self.link
            .as_ref()
            .map_or_else(C::zero, |link| link.cumulative_cost)
    }

    pub(crate) fn into_node(self) -> SearchNode<N, E, C> {
        SearchNode {
            value: self.value,
            primary: self.link,
            alternates: Vec::new(),
            f_value: self.f_value,
            heap_slot: None,
            is_connector: self.is_connector,
        }
    }
}

/// Node-store key. Connectors live in their own namespace so a meeting point
/// never collides with an ordinary node carrying the same signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey<S> {
    Node(S),
    Connector(S),
}
