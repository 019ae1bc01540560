//! Expansion budgets and inadmissible-heuristic handling.

use lock_tests::init_tracing;
use waypoint_search::{
    AStar, Candidate, Direction, InadmissiblePolicy, SearchError, SearchPolicy, SearchProblem,
    SearchState, TwoWayAStar,
};
use waypoint_worlds::{GraphEdge, WeightedGraph};

/// Wraps a graph with a heuristic that badly overestimates at node 1.
///
/// `0 -> 1 (1)`, `0 -> 2 (3)`, `1 -> 2 (1)`, `2 -> 3 (200)`: node 2 is closed
/// at cost 3 before node 1 is expanded and offers it at cost 2.
struct Overestimating {
    graph: WeightedGraph,
}

impl Overestimating {
    fn new() -> Self {
        let graph = WeightedGraph::directed(4, &[(0, 1, 1), (0, 2, 3), (1, 2, 1), (2, 3, 200)]).unwrap();
        Self { graph }
    }
}

impl SearchProblem for Overestimating {
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
        prev_node: Option<&u32>,
        prev_edge: Option<&GraphEdge>,
        cost_so_far: u32,
    ) -> Vec<Candidate<u32, GraphEdge, u32>> {
        self.graph.expand(node, prev_node, prev_edge, cost_so_far)
    }

    fn heuristic(&self, node: &u32, _destinations: &[u32]) -> u32 {
        if *node == 1 {
            100
        } else {
            0
        }
    }
}

#[test]
fn budget_exceeded_halts_one_way() {
    let graph = WeightedGraph::reference();
    let policy = SearchPolicy {
        max_expansions: Some(3),
        ..SearchPolicy::default()
    };
    let mut search = AStar::with_policy(&graph, Direction::OneWay, policy);
    search.add_source(0);
    search.add_destination(6);
    assert_eq!(
        search.search(),
        Err(SearchError::BudgetExceeded { expansions: 3 })
    );
    assert_eq!(search.state(), SearchState::Halted);
    assert_eq!(search.stats().expansions, 3);
}

#[test]
fn generous_budget_does_not_change_the_plan() {
    let graph = WeightedGraph::reference();
    let policy = SearchPolicy {
        max_expansions: Some(1_000),
        reserve_nodes: 16,
        ..SearchPolicy::default()
    };
    let mut search = TwoWayAStar::with_policy(&graph, policy);
    search.add_source(0);
    search.add_destination(5);
    assert_eq!(search.search().unwrap().cost, 28);
}

#[test]
fn zero_budget_is_an_invalid_policy() {
    let graph = WeightedGraph::reference();
    let policy = SearchPolicy {
        max_expansions: Some(0),
        ..SearchPolicy::default()
    };
    let mut search = TwoWayAStar::with_policy(&graph, policy);
    search.add_source(0);
    search.add_destination(5);
    let err = search.search().unwrap_err();
    assert!(matches!(err, SearchError::InvalidPolicy { .. }));
    assert!(err.to_string().contains("max_expansions"));
}

#[test]
#[should_panic(expected = "heuristic is not admissible")]
fn inadmissible_heuristic_panics_by_default() {
    let problem = Overestimating::new();
    let mut search = AStar::new(&problem);
    search.add_source(0);
    search.add_destination(3);
    let _ = search.search();
}

#[test]
fn inadmissible_heuristic_tolerated_when_configured() {
    init_tracing();
    let problem = Overestimating::new();
    let policy = SearchPolicy {
        on_inadmissible: InadmissiblePolicy::KeepClosedCost,
        ..SearchPolicy::default()
    };
    let mut search = AStar::with_policy(&problem, Direction::OneWay, policy);
    search.add_source(0);
    search.add_destination(3);
    let plan = search.search().unwrap();

    // The closed cost of node 2 is kept, so the plan misses the cheaper route.
    assert_eq!(plan.cost, 203);
    assert_eq!(plan.nodes().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
    assert_eq!(search.stats().inadmissible, 1);
    assert_eq!(
        search.policy().to_json_value()["on_inadmissible"],
        "keep_closed_cost"
    );
}
