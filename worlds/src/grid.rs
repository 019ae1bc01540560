//! `GridWorld`: 4-connected grid with walls and per-cell entry costs.
//!
//! Maps are parsed from ASCII: `#` is a wall, `.` costs 1 to enter, and a
//! digit `1`-`9` costs that much to enter. Every row must have the same
//! width.
//!
//! The heuristic is the Manhattan distance to the nearest destination times
//! the cheapest entry cost on the map, which never overestimates.

use waypoint_search::{Candidate, Plan, SearchProblem};

use crate::contract::WorldDescriptor;
use crate::error::WorldError;

/// A grid position. `x` grows east, `y` grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// A unit move between orthogonal neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    North,
    South,
    East,
    West,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// Rectangular grid. `None` cells are walls.
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: usize,
    height: usize,
    cells: Vec<Option<u32>>,
    min_cost: u32,
}

impl GridWorld {
    /// Parse an ASCII map (leading and trailing blank lines are ignored).
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::MalformedGrid`] for an empty map, ragged rows,
    /// or characters other than `#`, `.` and `1`-`9`.
    pub fn parse(map: &str) -> Result<Self, WorldError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(WorldError::MalformedGrid {
                detail: "map has no rows".into(),
            });
        };
        let width = first.chars().count();

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(WorldError::MalformedGrid {
                    detail: format!("row {y} has {} cells, expected {width}", row.chars().count()),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '#' => None,
                    '.' => Some(1),
                    '1'..='9' => ch.to_digit(10),
                    other => {
                        return Err(WorldError::MalformedGrid {
                            detail: format!("unexpected {other:?} at ({x}, {y})"),
                        })
                    }
                };
                cells.push(cell);
            }
        }
        Ok(Self::from_cells(width, rows.len(), cells))
    }

    /// Wall-free grid where every cell costs 1 to enter.
    #[must_use]
    pub fn open(width: usize, height: usize) -> Self {
        Self::from_cells(width, height, vec![Some(1); width * height])
    }

    fn from_cells(width: usize, height: usize, cells: Vec<Option<u32>>) -> Self {
        let min_cost = cells.iter().flatten().copied().min().unwrap_or(1);
        Self {
            width,
            height,
            cells,
            min_cost,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Entry cost of `cell`, or `None` for walls and off-grid positions.
    #[must_use]
    pub fn entry_cost(&self, cell: Cell) -> Option<u32> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        self.cells[cell.y * self.width + cell.x]
    }

    /// Neighbour reached by `step`, if it is on the grid and not a wall.
    #[must_use]
    pub fn neighbour(&self, cell: Cell, step: Move) -> Option<Cell> {
        let next = match step {
            Move::North => Cell::new(cell.x, cell.y.checked_sub(1)?),
            Move::South => Cell::new(cell.x, cell.y + 1),
            Move::East => Cell::new(cell.x + 1, cell.y),
            Move::West => Cell::new(cell.x.checked_sub(1)?, cell.y),
        };
        self.entry_cost(next).map(|_| next)
    }

    /// Draw the map with the plan's cells marked `*`.
    #[must_use]
    pub fn render(&self, plan: &Plan<Cell, Move, u32>) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, y);
                let ch = if plan.nodes().any(|&c| c == cell) {
                    '*'
                } else {
                    match self.entry_cost(cell) {
                        None => '#',
                        Some(1) => '.',
                        Some(cost) => char::from_digit(cost, 10).unwrap_or('?'),
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn estimate(&self, cell: Cell, goals: &[Cell]) -> u32 {
        let Some(nearest) = goals.iter().map(|g| cell.manhattan(*g)).min() else {
            return 0;
        };
        u32::try_from(nearest).map_or(u32::MAX, |d| d.saturating_mul(self.min_cost))
    }
}

impl SearchProblem for GridWorld {
    type Node = Cell;
    type Edge = Move;
    type Cost = u32;
    type Signature = Cell;

    fn signature(&self, node: &Cell) -> Cell {
        *node
    }

    fn expand(
        &self,
        node: &Cell,
        _prev_node: Option<&Cell>,
        _prev_edge: Option<&Move>,
        _cost_so_far: u32,
    ) -> Vec<Candidate<Cell, Move, u32>> {
        Move::ALL
            .into_iter()
            .filter_map(|step| {
                let next = self.neighbour(*node, step)?;
                Some(Candidate {
                    edge: step,
                    edge_cost: self.entry_cost(next)?,
                    node: next,
                })
            })
            .collect()
    }

    fn heuristic(&self, node: &Cell, destinations: &[Cell]) -> u32 {
        self.estimate(*node, destinations)
    }

    /// Predecessors of `node`: stepping from a neighbour into `node` costs
    /// `node`'s entry cost. The edge is the forward move into `node`.
    fn expand_reverse(
        &self,
        node: &Cell,
        _prev_node: Option<&Cell>,
        _prev_edge: Option<&Move>,
        _cost_so_far: u32,
    ) -> Vec<Candidate<Cell, Move, u32>> {
        let Some(cost) = self.entry_cost(*node) else {
            return Vec::new();
        };
        Move::ALL
            .into_iter()
            .filter_map(|step| {
                let prev = self.neighbour(*node, step)?;
                Some(Candidate {
                    edge: step.opposite(),
                    edge_cost: cost,
                    node: prev,
                })
            })
            .collect()
    }

    fn heuristic_reverse(&self, node: &Cell, sources: &[Cell]) -> u32 {
        self.estimate(*node, sources)
    }
}

impl WorldDescriptor for GridWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid"
    }

    fn describe(&self) -> serde_json::Value {
        serde_json::json!({
            "height": self.height,
            "min_cost": self.min_cost,
            "walls": self.cells.iter().filter(|c| c.is_none()).count(),
            "width": self.width,
        })
    }
}
