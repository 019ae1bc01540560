//! Open list: a binary min-heap with in-place re-keying.
//!
//! The heap holds [`NodeId`]s; keys and slot back-pointers live on the
//! elements themselves and are reached through [`HeapSlots`]. Storing the
//! slot on the element is what makes `contains` O(1) and `reorder`
//! O(log n) after registration lowers an open node's `f_value`.

use crate::node::NodeId;

/// Element storage seen by the open list.
pub trait HeapSlots {
    type Key: Ord + Copy;

    /// Current ordering key (`f_value`) of `id`.
    fn key(&self, id: NodeId) -> Self::Key;

    /// Stored heap position of `id`, if any.
    fn slot(&self, id: NodeId) -> Option<usize>;

    /// Record (or clear) the heap position of `id`.
    fn set_slot(&mut self, id: NodeId, slot: Option<usize>);
}

/// Min-heap open list ordered by `f_value`.
///
/// Heap property: every element's key is `<=` both children's keys. Equal
/// keys never swap.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: Vec<NodeId>,
    high_water: usize,
}

impl OpenList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    /// Add `id` and restore heap order by sift-up.
    pub fn insert<S: HeapSlots>(&mut self, id: NodeId, slots: &mut S) {
        debug_assert!(!self.contains(id, slots), "node {id:?} is already open");
        let idx = self.heap.len();
        self.heap.push(id);
        slots.set_slot(id, Some(idx));
        self.sift_up(idx, slots);
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Current minimum without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<NodeId> {
        self.heap.first().copied()
    }

    /// Remove and return the minimum. The popped element's slot is cleared.
    pub fn pop_min<S: HeapSlots>(&mut self, slots: &mut S) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        slots.set_slot(top, None);
        if let Some(&moved) = self.heap.first() {
            slots.set_slot(moved, Some(0));
            self.sift_down(0, slots);
        }
        Some(top)
    }

    /// Re-sift `id` after its key changed in place.
    ///
    /// Returns `false` without touching the heap if `id` is not open.
    pub fn reorder<S: HeapSlots>(&mut self, id: NodeId, slots: &mut S) -> bool {
        let Some(idx) = self.position(id, slots) else {
            return false;
        };
        if idx > 0 && slots.key(self.heap[(idx - 1) / 2]) > slots.key(id) {
            self.sift_up(idx, slots);
        } else {
            self.sift_down(idx, slots);
        }
        true
    }

    /// O(1) membership test through the element's stored slot.
    #[must_use]
    pub fn contains<S: HeapSlots>(&self, id: NodeId, slots: &S) -> bool {
        self.position(id, slots).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the open list ever reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Verify the heap property and every slot back-pointer.
    #[must_use]
    pub fn check_consistency<S: HeapSlots>(&self, slots: &S) -> bool {
        self.heap.iter().enumerate().all(|(idx, &id)| {
            let parent_ok = idx == 0 || slots.key(self.heap[(idx - 1) / 2]) <= slots.key(id);
            parent_ok && slots.slot(id) == Some(idx)
        })
    }

    fn position<S: HeapSlots>(&self, id: NodeId, slots: &S) -> Option<usize> {
        slots
            .slot(id)
            .filter(|&idx| self.heap.get(idx) == Some(&id))
    }

    fn swap<S: HeapSlots>(&mut self, a: usize, b: usize, slots: &mut S) {
        self.heap.swap(a, b);
        slots.set_slot(self.heap[a], Some(a));
        slots.set_slot(self.heap[b], Some(b));
    }

    fn sift_up<S: HeapSlots>(&mut self, mut idx: usize, slots: &mut S) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if slots.key(self.heap[parent]) <= slots.key(self.heap[idx]) {
                break;
            }
            self.swap(idx, parent, slots);
            idx = parent;
        }
    }

    fn sift_down<S: HeapSlots>(&mut self, mut idx: usize, slots: &mut S) {
        let len = self.heap.len();
        loop {
            let left = idx * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len
                && slots.key(self.heap[right]) < slots.key(self.heap[left])
            {
                right
            } else {
                left
            };
            if slots.key(self.heap[idx]) <= slots.key(self.heap[child]) {
                break;
            }
            self.swap(idx, child, slots);
            idx = child;
        }
    }
}
