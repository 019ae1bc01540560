//! Demonstration worlds driven end to end through both search modes.

use lock_tests::{one_way, two_way};
use waypoint_search::{SearchError, SearchProblem};
use waypoint_worlds::{Cell, GridWorld, ItineraryWorld, WorldDescriptor, XorShift};

/// Pseudo-random map: about one cell in five is a wall, the rest cost 1-4.
fn scattered_grid(width: usize, height: usize, seed: u64) -> GridWorld {
    let mut rng = XorShift::new(seed);
    let mut map = String::new();
    for _ in 0..height {
        for _ in 0..width {
            let roll = rng.below(10);
            map.push(match roll {
                0 | 1 => '#',
                2..=6 => '.',
                n => char::from_digit(n - 5, 10).unwrap_or('.'),
            });
        }
        map.push('\n');
    }
    GridWorld::parse(&map).unwrap()
}

#[test]
fn grid_two_way_matches_one_way() {
    for seed in 1..=4 {
        let grid = scattered_grid(12, 9, seed);
        let open: Vec<Cell> = (0..9)
            .flat_map(|y| (0..12).map(move |x| Cell::new(x, y)))
            .filter(|&c| grid.entry_cost(c).is_some())
            .collect();
        let Some(&from) = open.first() else {
            continue;
        };
        for &to in open.iter().step_by(3) {
            let one = one_way(&grid, from, to).map(|p| p.cost);
            let two = two_way(&grid, from, to).map(|p| p.cost);
            assert_eq!(one, two, "seed {seed}: {from:?} -> {to:?}");
        }
    }
}

#[test]
fn grid_heuristic_prunes_compared_to_zero_heuristic() {
    struct Blind(GridWorld);

    impl SearchProblem for Blind {
        type Node = Cell;
        type Edge = waypoint_worlds::Move;
        type Cost = u32;
        type Signature = Cell;

        fn signature(&self, node: &Cell) -> Cell {
            *node
        }

        fn expand(
            &self,
            node: &Cell,
            prev_node: Option<&Cell>,
            prev_edge: Option<&waypoint_worlds::Move>,
            cost_so_far: u32,
        ) -> Vec<waypoint_search::Candidate<Cell, waypoint_worlds::Move, u32>> {
            self.0.expand(node, prev_node, prev_edge, cost_so_far)
        }

        fn heuristic(&self, _node: &Cell, _destinations: &[Cell]) -> u32 {
            0
        }
    }

    let grid = GridWorld::open(20, 20);
    let mut informed = waypoint_search::AStar::new(&grid);
    informed.add_source(Cell::new(0, 0));
    informed.add_destination(Cell::new(19, 0));
    let plan = informed.search().unwrap();
    assert_eq!(plan.cost, 19);

    let blind_world = Blind(grid.clone());
    let mut blind = waypoint_search::AStar::new(&blind_world);
    blind.add_source(Cell::new(0, 0));
    blind.add_destination(Cell::new(19, 0));
    assert_eq!(blind.search().unwrap().cost, 19);

    assert!(informed.stats().expansions < blind.stats().expansions);
}

#[test]
fn itinerary_picks_earliest_arrival() {
    let mut world = ItineraryWorld::new(&["OPO", "LIS", "MAD", "PAR"]).with_min_connection(30);
    world.add_flight("OPO", "LIS", "07:00", "07:55").unwrap();
    world.add_flight("OPO", "MAD", "07:30", "09:45").unwrap();
    world.add_flight("LIS", "PAR", "08:30", "11:50").unwrap();
    world.add_flight("LIS", "PAR", "09:00", "12:30").unwrap();
    world.add_flight("MAD", "PAR", "10:30", "12:40").unwrap();
    world.add_flight("OPO", "PAR", "13:00", "15:00").unwrap();

    let source = world.stop("OPO", "06:30").unwrap();
    let plan = one_way(&world, source, world.destination("PAR").unwrap()).unwrap();
    assert_eq!(plan.cost, 320);
    assert_eq!(
        world.legs(&plan),
        vec!["OPO 07:00 -> LIS 07:55", "LIS 08:30 -> PAR 11:50"]
    );
    assert_eq!(world.describe()["flights"], 6);
    assert_eq!(world.world_id(), "itinerary");
}

#[test]
fn itinerary_without_connections_is_not_found() {
    let mut world = ItineraryWorld::new(&["OPO", "LIS", "PAR"]);
    world.add_flight("OPO", "LIS", "07:00", "07:55").unwrap();
    assert!(world.destination("NYC").is_err());

    let source = world.stop("OPO", "06:00").unwrap();
    let paris = world.destination("PAR").unwrap();
    assert_eq!(one_way(&world, source, paris), Err(SearchError::NotFound));
    assert_eq!(one_way(&world, source, source).map(|p| p.cost), Ok(0));
}
