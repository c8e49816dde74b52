use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::{ConfigError, Result};

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Direction of the single step leading from `self` to `other`, if they
    /// are orthogonal neighbours.
    pub fn direction_to(&self, other: GridCell) -> Option<Direction> {
        Direction::from_delta(other.x - self.x, other.y - self.y)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bounded coordinate system the simulation runs on.
///
/// Holds only the fixed dimensions and the cell size used when converting to
/// continuous (render/physics) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpace {
    width: i32,
    height: i32,
    cell_size: f32,
}

impl GridSpace {
    pub fn new(width: i32, height: i32, cell_size: f32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(cell_size));
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn center(&self) -> GridCell {
        GridCell::new(self.width / 2, self.height / 2)
    }

    pub fn is_in_bounds(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Uniformly sampled cell; occupancy is not considered.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> GridCell {
        GridCell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    pub fn to_continuous(&self, cell: GridCell) -> (f32, f32) {
        (
            cell.x as f32 * self.cell_size,
            cell.y as f32 * self.cell_size,
        )
    }

    /// Nearest cell to a continuous position, rounding halves to even.
    pub fn from_continuous(&self, pos: (f32, f32)) -> GridCell {
        GridCell::new(
            (pos.0 / self.cell_size).round_ties_even() as i32,
            (pos.1 / self.cell_size).round_ties_even() as i32,
        )
    }
}
