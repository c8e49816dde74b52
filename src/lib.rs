//! Grid Snake - a tick-driven snake simulation on a bounded grid
//!
//! This library provides:
//! - Core simulation (game module): grid, segment chain, engine, food placement
//! - Terminal front end: input mapping, rendering and play metrics
//! - The human play mode driving a session from the keyboard

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
