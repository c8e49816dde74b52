use rand::Rng;

use super::error::{ConfigError, Result};
use super::grid::{GridCell, GridSpace};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Picks food cells by rejection sampling with a bounded retry budget.
///
/// Holds no state beyond the budget; each call depends only on the grid,
/// the occupancy predicate and the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodPlacer {
    max_attempts: u32,
}

impl FoodPlacer {
    pub fn new(max_attempts: u32) -> Result<Self> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self { max_attempts })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Samples up to `max_attempts` random cells and returns the first one
    /// that is in bounds and not occupied, or `None` once the budget runs out.
    pub fn find_free_cell<R, F>(
        &self,
        grid: &GridSpace,
        rng: &mut R,
        is_occupied: F,
    ) -> Option<GridCell>
    where
        R: Rng + ?Sized,
        F: Fn(GridCell) -> bool,
    {
        for _ in 0..self.max_attempts {
            let cell = grid.random_cell(rng);
            if grid.is_in_bounds(cell) && !is_occupied(cell) {
                return Some(cell);
            }
        }

        log::warn!(
            "Failed to find a free food cell after {} attempts",
            self.max_attempts
        );
        None
    }
}

impl Default for FoodPlacer {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
