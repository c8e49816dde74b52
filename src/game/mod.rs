//! Core simulation for grid snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine is driven one tick at a time by a `GameSession` or any other driver.

pub mod chain;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod events;
pub mod food;
pub mod grid;
pub mod orientation;
pub mod session;

// Re-export commonly used types
pub use chain::SegmentChain;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{CollisionType, SnakeEngine, StepResult};
pub use error::ConfigError;
pub use events::{EventLog, EventSink, GameEvent};
pub use food::FoodPlacer;
pub use grid::{GridCell, GridSpace};
pub use orientation::{SegmentShape, SegmentView};
pub use session::GameSession;
