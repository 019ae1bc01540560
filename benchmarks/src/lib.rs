//! Shared helpers for waypoint benchmark suites.

use waypoint_search::frontier::HeapSlots;
use waypoint_search::search::PlanOf;
use waypoint_search::{
    AStar, NodeId, SearchError, SearchProblem, SearchStats, TwoWayAStar, TwoWayStats,
};
use waypoint_worlds::{Cell, GridWorld, WeightedGraph, WorldDescriptor, XorShift};

/// One source/destination query over a world.
pub struct Scenario<P: SearchProblem> {
    pub name: &'static str,
    pub world: P,
    pub source: P::Node,
    pub destination: P::Node,
}

impl<P: SearchProblem + WorldDescriptor> Scenario<P> {
    /// World description plus the query endpoints, for reports.
    pub fn describe(&self) -> serde_json::Value
    where
        P::Node: std::fmt::Debug,
    {
        serde_json::json!({
            "destination": format!("{:?}", self.destination),
            "source": format!("{:?}", self.source),
            "world": self.world.describe(),
            "world_id": self.world.world_id(),
        })
    }
}

/// Grid regimes: an obstacle-free square, and a scattered-wall map with
/// mixed entry costs.
///
/// # Panics
///
/// Panics if a generated map fails to parse. Benchmark setup failures are fatal.
#[must_use]
pub fn grid_scenarios() -> Vec<Scenario<GridWorld>> {
    let open = GridWorld::open(64, 64);
    let scattered = scattered_grid(96, 96, 0x5EED);
    let corners = open_corners(&scattered);
    vec![
        Scenario {
            name: "grid_open_64",
            world: open,
            source: Cell::new(0, 0),
            destination: Cell::new(63, 63),
        },
        Scenario {
            name: "grid_scattered_96",
            world: scattered,
            source: corners.0,
            destination: corners.1,
        },
    ]
}

/// Graph regimes: the reference graph and a sparse 2000-node random graph.
#[must_use]
pub fn graph_scenarios() -> Vec<Scenario<WeightedGraph>> {
    vec![
        Scenario {
            name: "graph_reference",
            world: WeightedGraph::reference(),
            source: 0,
            destination: 5,
        },
        Scenario {
            name: "graph_random_2000",
            world: WeightedGraph::pseudo_random(2000, 6000, 50, 42),
            source: 0,
            destination: 1999,
        },
    ]
}

/// Map with roughly one wall in five and entry costs `1..=4`.
///
/// # Panics
///
/// Panics if the generated map fails to parse.
#[must_use]
pub fn scattered_grid(width: usize, height: usize, seed: u64) -> GridWorld {
    let mut rng = XorShift::new(seed);
    let mut map = String::with_capacity((width + 1) * height);
    for _ in 0..height {
        for _ in 0..width {
            map.push(match rng.below(10) {
                0 | 1 => '#',
                2..=6 => '.',
                7 => '2',
                8 => '3',
                _ => '4',
            });
        }
        map.push('\n');
    }
    GridWorld::parse(&map).expect("generated grid parses")
}

/// First and last passable cells in row-major order.
fn open_corners(grid: &GridWorld) -> (Cell, Cell) {
    let mut open = (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| Cell::new(x, y)))
        .filter(|&cell| grid.entry_cost(cell).is_some());
    let first = open.next().unwrap_or(Cell::new(0, 0));
    let last = open.last().unwrap_or(first);
    (first, last)
}

/// Run a fresh one-way search. Returns the outcome and the final counters.
pub fn run_one_way<P: SearchProblem>(
    scenario: &Scenario<P>,
) -> (Result<PlanOf<P>, SearchError>, SearchStats<P::Cost>) {
    let mut search = AStar::new(&scenario.world);
    search.add_source(scenario.source.clone());
    search.add_destination(scenario.destination.clone());
    let result = search.search();
    (result, search.stats())
}

/// Run a fresh two-way search. Returns the outcome and the final counters.
pub fn run_two_way<P: SearchProblem>(
    scenario: &Scenario<P>,
) -> (Result<PlanOf<P>, SearchError>, TwoWayStats<P::Cost>) {
    let mut search = TwoWayAStar::new(&scenario.world);
    search.add_source(scenario.source.clone());
    search.add_destination(scenario.destination.clone());
    let result = search.search();
    (result, search.stats())
}

/// Flat key table for driving [`waypoint_search::OpenList`] without a search.
#[derive(Debug, Clone)]
pub struct KeyTable {
    keys: Vec<u64>,
    slots: Vec<Option<usize>>,
}

impl KeyTable {
    /// `count` pseudo-random keys below `1 << 20`.
    #[must_use]
    pub fn random(count: usize, seed: u64) -> Self {
        let mut rng = XorShift::new(seed);
        let keys = (0..count).map(|_| rng.next_u64() & 0xF_FFFF).collect();
        Self {
            keys,
            slots: vec![None; count],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.keys.len()).map(NodeId::new)
    }

    /// Lower the key of `id` by `delta` (saturating at zero).
    pub fn decrease(&mut self, id: NodeId, delta: u64) {
        let key = &mut self.keys[id.index()];
        *key = key.saturating_sub(delta);
    }
}

impl HeapSlots for KeyTable {
    type Key = u64;

    fn key(&self, id: NodeId) -> u64 {
        self.keys[id.index()]
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        self.slots[id.index()]
    }

    fn set_slot(&mut self, id: NodeId, slot: Option<usize>) {
        self.slots[id.index()] = slot;
    }
}
