//! Reference shortest-path oracle for equivalence tests.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use waypoint_worlds::WeightedGraph;

/// Textbook Dijkstra over outgoing edges: distance from `source` to every
/// node, `None` where unreachable.
#[must_use]
pub fn dijkstra(graph: &WeightedGraph, source: u32) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count() as usize];
    let mut heap = BinaryHeap::new();
    dist[source as usize] = Some(0);
    heap.push(Reverse((0u32, source)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if dist[node as usize].is_some_and(|best| d > best) {
            continue;
        }
        for edge in graph.outgoing(node) {
            let next = d + edge.cost;
            let slot = &mut dist[edge.to as usize];
            if slot.map_or(true, |best| next < best) {
                *slot = Some(next);
                heap.push(Reverse((next, edge.to)));
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_distances() {
        let dist = dijkstra(&WeightedGraph::reference(), 0);
        assert_eq!(dist[5], Some(28));
        assert_eq!(dist[2], Some(3));
        assert_eq!(dist[6], Some(113));
        assert_eq!(dist[9], None);
    }
}
