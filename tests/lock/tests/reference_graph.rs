//! Reference scenario: the ten-node graph with a zero heuristic.

use lock_tests::{init_tracing, one_way, two_way};
use waypoint_search::{AStar, SearchError, SearchState, TwoWayAStar};
use waypoint_worlds::{WeightedGraph, WorldDescriptor};

#[test]
fn one_way_finds_cost_28_via_node_4_and_2() {
    init_tracing();
    let graph = WeightedGraph::reference();
    let plan = one_way(&graph, 0, 5).unwrap();

    assert_eq!(plan.cost, 28);
    assert_eq!(plan.nodes().copied().collect::<Vec<_>>(), vec![0, 4, 2, 5]);
    let step_costs: Vec<u32> = plan.steps.iter().map(|s| s.edge_cost).collect();
    assert_eq!(step_costs, vec![0, 1, 2, 25]);
    assert!(plan.is_well_formed());
}

#[test]
fn two_way_finds_cost_28() {
    init_tracing();
    let graph = WeightedGraph::reference();
    let plan = two_way(&graph, 0, 5).unwrap();

    assert_eq!(plan.cost, 28);
    assert_eq!(plan.nodes().copied().collect::<Vec<_>>(), vec![0, 4, 2, 5]);
    assert!(plan.is_well_formed());
    for pair in plan.steps.windows(2) {
        let edge = pair[1].edge.unwrap();
        assert_eq!((edge.from, edge.to), (pair[0].node, pair[1].node));
    }
}

#[test]
fn two_way_in_the_other_direction() {
    let graph = WeightedGraph::reference();
    let plan = two_way(&graph, 5, 0).unwrap();
    assert_eq!(plan.cost, 28);
    assert_eq!(plan.nodes().copied().collect::<Vec<_>>(), vec![5, 2, 4, 0]);
    assert!(plan.is_well_formed());
}

#[test]
fn disconnected_pair_is_not_found_in_both_modes() {
    let graph = WeightedGraph::reference();

    let mut search = AStar::new(&graph);
    search.add_source(0);
    search.add_destination(9);
    assert_eq!(search.search(), Err(SearchError::NotFound));
    assert_eq!(search.state(), SearchState::Exhausted);
    assert_eq!(search.num_open(), 0);

    let mut search = TwoWayAStar::new(&graph);
    search.add_source(0);
    search.add_destination(9);
    assert_eq!(search.search(), Err(SearchError::NotFound));
    assert_eq!(search.state(), SearchState::Exhausted);
}

#[test]
fn isolated_source_equal_to_destination_succeeds() {
    let graph = WeightedGraph::reference();
    assert_eq!(one_way(&graph, 8, 8).unwrap().cost, 0);
    assert_eq!(two_way(&graph, 8, 8).unwrap().cost, 0);
}

#[test]
fn stats_report_is_stable_json() {
    let graph = WeightedGraph::reference();
    let mut search = AStar::new(&graph);
    search.add_source(0);
    search.add_destination(5);
    let _ = search.search().unwrap();

    let stats = search.stats();
    let report = serde_json::json!({
        "policy": search.policy().to_json_value(),
        "stats": stats.to_json_value(),
        "world": graph.describe(),
        "world_id": graph.world_id(),
    });
    let bytes = serde_json::to_vec(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(parsed["world_id"], "weighted_graph");
    assert_eq!(parsed["policy"]["on_inadmissible"], "panic");
    assert_eq!(parsed["stats"]["best_target_cost"], "28");
    assert_eq!(parsed["stats"]["expansions"], stats.expansions);
    assert_eq!(stats.to_string(), format!("open {} / closed {}", stats.open, stats.closed));
}
