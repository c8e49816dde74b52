use thiserror::Error;

use super::grid::GridCell;

/// Errors raised while constructing a grid, engine or session.
///
/// All of these are detected before the first tick; a constructed engine
/// never fails at runtime.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),
    #[error("speed must give a non-zero, finite tick interval, got {0} moves per second")]
    InvalidSpeed(f32),
    #[error("food placement needs at least one attempt")]
    ZeroAttempts,
    #[error("a {width}x{height} grid cannot hold the initial snake")]
    GridTooSmall { width: i32, height: i32 },
    #[error("snake chain must contain at least one segment")]
    EmptyChain,
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(GridCell),
    #[error("cell {0} is occupied more than once")]
    OverlappingChain(GridCell),
    #[error("cell {0} is not adjacent to the segment ahead of it")]
    DisconnectedChain(GridCell),
}

pub type Result<T> = core::result::Result<T, ConfigError>;
