//! Weak/strong duplicate handling observed through the public API.

use waypoint_search::{AStar, Candidate, RegisterOutcome, SearchProblem};
use waypoint_worlds::ItineraryWorld;

/// Diamond `0 -> {1, 2} -> 3 -> 4` where node values carry the node they
/// came from, so the two arrivals at 3 differ in value but share a
/// signature.
struct Diamond {
    strong: bool,
}

impl SearchProblem for Diamond {
    type Node = (u32, u32);
    type Edge = (u32, u32);
    type Cost = u32;
    type Signature = u32;

    fn signature(&self, node: &(u32, u32)) -> u32 {
        node.0
    }

    fn expand(
        &self,
        node: &(u32, u32),
        _prev_node: Option<&(u32, u32)>,
        _prev_edge: Option<&(u32, u32)>,
        _cost_so_far: u32,
    ) -> Vec<Candidate<(u32, u32), (u32, u32), u32>> {
        let next: &[(u32, u32)] = match node.0 {
            0 => &[(1, 2), (2, 5)],
            1 => &[(3, 10)],
            2 => &[(3, 1)],
            3 => &[(4, 1)],
            _ => &[],
        };
        next.iter()
            .map(|&(to, cost)| Candidate {
                edge: (node.0, to),
                edge_cost: cost,
                node: (to, node.0),
            })
            .collect()
    }

    fn heuristic(&self, _node: &(u32, u32), _destinations: &[(u32, u32)]) -> u32 {
        0
    }

    fn is_target(&self, node: &(u32, u32), _cost: u32, _destinations: &[(u32, u32)]) -> bool {
        node.0 == 4
    }

    fn is_strong_duplicate(&self, _a: &(u32, u32), _b: &(u32, u32)) -> bool {
        self.strong
    }
}

#[test]
fn strong_duplicates_collapse_to_the_cheaper_path() {
    let problem = Diamond { strong: true };
    let mut search = AStar::new(&problem);
    search.add_source((0, 0));
    let plan = search.search().unwrap();

    assert_eq!(plan.cost, 7);
    assert_eq!(plan.nodes().map(|n| n.0).collect::<Vec<_>>(), vec![0, 2, 3, 4]);

    let three = search.node(search.lookup(&3).unwrap());
    assert_eq!(three.branch_count(), 1);
    assert_eq!(*three.value(), (3, 2), "collapsed node holds the cheaper value");
    assert_eq!(search.stats().replaced_primary, 1);
}

#[test]
fn weak_duplicates_merge_with_cheaper_primary() {
    let problem = Diamond { strong: false };
    let mut search = AStar::new(&problem);
    search.add_source((0, 0));
    let plan = search.search().unwrap();

    assert_eq!(plan.cost, 7);
    assert_eq!(plan.nodes().map(|n| n.0).collect::<Vec<_>>(), vec![0, 2, 3, 4]);

    let three = search.node(search.lookup(&3).unwrap());
    assert_eq!(three.branch_count(), 2);
    let costs: Vec<u32> = three.branches().map(|b| b.cumulative_cost).collect();
    assert_eq!(costs, vec![6, 12], "primary is the cheaper branch");
    assert_eq!(three.f_value(), 6);
    assert_eq!(*three.value(), (3, 1), "merged node keeps its first value");

    let parents: Vec<u32> = three
        .branches()
        .map(|b| search.node(b.parent).value().0)
        .collect();
    assert_eq!(parents, vec![2, 1]);
}

#[test]
fn every_branch_cost_is_parent_cost_plus_edge_cost() {
    let problem = Diamond { strong: false };
    let mut search = AStar::new(&problem);
    search.add_source((0, 0));
    let _ = search.search().unwrap();

    for sig in 0..=4 {
        let Some(id) = search.lookup(&sig) else {
            continue;
        };
        for branch in search.node(id).branches() {
            let parent = search.node(branch.parent);
            assert_eq!(branch.cumulative_cost, parent.cumulative_cost() + branch.edge_cost);
            assert!(branch.edge.is_some());
        }
    }
}

#[test]
fn register_reports_each_outcome() {
    let problem = Diamond { strong: false };
    let mut search = AStar::new(&problem);
    search.add_source((0, 0));
    // Expanding the root registers nodes 1 and 2.
    let _ = search.step();
    let stats = search.stats();
    assert_eq!(stats.inserted, 3);
    assert_eq!(stats.expansions, 1);
    assert_eq!(RegisterOutcome::AppendedAlternate.as_str(), "appended_alternate");
}

#[test]
fn itinerary_keeps_both_same_hour_arrivals() {
    let mut world = ItineraryWorld::new(&["LIS", "MAD", "BCN"]);
    world.add_flight("LIS", "MAD", "06:00", "09:10").unwrap();
    world.add_flight("LIS", "MAD", "06:30", "09:50").unwrap();
    world.add_flight("MAD", "BCN", "10:30", "11:45").unwrap();

    let mut search = AStar::new(&world);
    search.add_source(world.stop("LIS", "06:00").unwrap());
    search.add_destination(world.destination("BCN").unwrap());
    let plan = search.search().unwrap();
    assert_eq!(plan.cost, 345);
    assert_eq!(
        world.legs(&plan),
        vec!["LIS 06:00 -> MAD 09:10", "MAD 10:30 -> BCN 11:45"]
    );

    let mad = world.city("MAD").unwrap();
    let node = search.node(search.lookup(&(mad, 9)).unwrap());
    assert_eq!(node.branch_count(), 2);
    assert_eq!(node.cumulative_cost(), 190);
}
