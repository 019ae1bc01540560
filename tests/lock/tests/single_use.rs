//! Search instances are single-use; misuse panics instead of returning
//! stale results.

use waypoint_search::{AStar, SearchError, TwoWayAStar};
use waypoint_worlds::WeightedGraph;

#[test]
#[should_panic(expected = "can only be used once")]
fn one_way_search_twice_panics() {
    let graph = WeightedGraph::reference();
    let mut search = AStar::new(&graph);
    search.add_source(0);
    search.add_destination(5);
    let _ = search.search().unwrap();
    let _ = search.search();
}

#[test]
#[should_panic(expected = "can only be used once")]
fn one_way_step_after_not_found_panics() {
    let graph = WeightedGraph::reference();
    let mut search = AStar::new(&graph);
    search.add_source(7);
    search.add_destination(0);
    assert_eq!(search.search(), Err(SearchError::NotFound));
    let _ = search.step();
}

#[test]
#[should_panic(expected = "can only be used once")]
fn two_way_search_twice_panics() {
    let graph = WeightedGraph::reference();
    let mut search = TwoWayAStar::new(&graph);
    search.add_source(0);
    search.add_destination(5);
    let _ = search.search().unwrap();
    let _ = search.search();
}

#[test]
#[should_panic(expected = "can only be used once")]
fn two_way_adding_source_after_expansion_panics() {
    let graph = WeightedGraph::reference();
    let mut search = TwoWayAStar::new(&graph);
    search.add_source(0);
    search.add_destination(5);
    let _ = search.step();
    search.add_source(1);
}

#[test]
#[should_panic(expected = "can only be used once")]
fn one_way_adding_destination_after_expansion_panics() {
    let graph = WeightedGraph::reference();
    let mut search = AStar::new(&graph);
    search.add_source(0);
    search.add_destination(5);
    let _ = search.step();
    search.add_destination(6);
}

#[test]
#[should_panic(expected = "can only be used once")]
fn two_way_adding_destination_after_forward_expansion_panics() {
    let graph = WeightedGraph::reference();
    let mut search = TwoWayAStar::new(&graph);
    search.add_source(0);
    search.add_destination(5);
    // Equal open minima: the forward half steps first.
    let _ = search.step();
    assert_eq!(search.forward().num_closed(), 1);
    assert_eq!(search.reverse().num_closed(), 0);
    search.add_destination(6);
}
