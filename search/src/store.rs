//! Node arena with signature-keyed deduplication.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cost::Cost;
use crate::frontier::HeapSlots;
use crate::node::{NodeId, SearchNode};

/// Deduplication table for one search instance.
///
/// Guarantees at most one [`SearchNode`] per key. Records live in an arena
/// and are addressed by [`NodeId`], which stays valid for the life of the
/// store; nothing is ever removed.
#[derive(Debug)]
pub struct NodeStore<K, N, E, C> {
    nodes: Vec<SearchNode<N, E, C>>,
    index: HashMap<K, NodeId>,
}

impl<K: Hash + Eq, N, E, C: Cost> NodeStore<K, N, E, C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Look up `key`, storing `candidate` if it is absent.
    ///
    /// Returns the handle of the stored record. If a record already existed,
    /// `candidate` is handed back untouched as the second element; merging it
    /// is the caller's job.
    pub fn get_or_insert(
        &mut self,
        key: K,
        candidate: SearchNode<N, E, C>,
    ) -> (NodeId, Option<SearchNode<N, E, C>>) {
        if let Some(&id) = self.index.get(&key) {
            return (id, Some(candidate));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(candidate);
        self.index.insert(key, id);
        (id, None)
    }

    /// Read-only probe.
    #[must_use]
    pub fn lookup(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<N, E, C> {
        &self.nodes[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this store.
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<N, E, C> {
        &mut self.nodes[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K: Hash + Eq, N, E, C: Cost> Default for NodeStore<K, N, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N, E, C: Cost> HeapSlots for NodeStore<K, N, E, C> {
    type Key = C;

    fn key(&self, id: NodeId) -> C {
        self.nodes[id.0].f_value
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        self.nodes[id.0].heap_slot
    }

    fn set_slot(&mut self, id: NodeId, slot: Option<usize>) {
        self.nodes[id.0].heap_slot = slot;
    }
}
