//! Board geometry: the play area, its placement grid and the objective.

use std::collections::HashSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use guardian_core::constants::{OBJECTIVE_SIZE, SPAWN_MARGIN};
use guardian_core::types::{Cell, Position};

/// The square play area `[0, size]²` split into `grid_size²` cells.
#[derive(Debug, Clone)]
pub struct Board {
    size: f64,
    grid_size: u32,
    objective: Position,
}

/// Answers whether a board cell already holds a defender.
///
/// Supplied by whoever owns placement input; the engine also implements it
/// for its own defenders.
pub trait CellOccupancy {
    fn is_occupied(&self, cell: Cell) -> bool;
}

impl<F: Fn(Cell) -> bool> CellOccupancy for F {
    fn is_occupied(&self, cell: Cell) -> bool {
        self(cell)
    }
}

impl CellOccupancy for HashSet<Cell> {
    fn is_occupied(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

/// One of the four edges hostiles may enter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Board {
    pub fn new(size: f64, grid_size: u32) -> Self {
        // The objective region is centred on the board; only its centre matters.
        let corner = (size - OBJECTIVE_SIZE) / 2.0;
        let objective = Position::new(corner + OBJECTIVE_SIZE / 2.0, corner + OBJECTIVE_SIZE / 2.0);
        Self {
            size,
            grid_size: grid_size.max(1),
            objective,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Centre of the objective region; the point every hostile walks to.
    pub fn objective(&self) -> Position {
        self.objective
    }

    pub fn cell_size(&self) -> f64 {
        self.size / self.grid_size as f64
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.grid_size && cell.y < self.grid_size
    }

    /// Centre of a cell in board coordinates.
    pub fn cell_center(&self, cell: Cell) -> Position {
        let step = self.cell_size();
        Position::new(
            (cell.x as f64 + 0.5) * step,
            (cell.y as f64 + 0.5) * step,
        )
    }

    /// Point just outside `edge`, `offset` (0..=1) of the way along it.
    pub fn spawn_point(&self, edge: Edge, offset: f64) -> Position {
        let along = offset * self.size;
        match edge {
            Edge::Top => Position::new(along, -SPAWN_MARGIN),
            Edge::Right => Position::new(self.size + SPAWN_MARGIN, along),
            Edge::Bottom => Position::new(along, self.size + SPAWN_MARGIN),
            Edge::Left => Position::new(-SPAWN_MARGIN, along),
        }
    }

    /// Uniformly random edge and position along it.
    pub fn random_spawn_point(&self, rng: &mut ChaCha8Rng) -> Position {
        let edge = match rng.gen_range(0..4) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        };
        let offset: f64 = rng.gen_range(0.0..1.0);
        self.spawn_point(edge, offset)
    }
}
