//! Sparse, unbounded Game of Life world and its transition engine.
//!
//! A [`World`] holds only live cells. [`tick`] maps one generation to the
//! next without touching its input.

pub mod world;
pub mod rules;
pub mod engine;

pub use world::World;
pub use rules::{live_neighbor_count, next_state, next_state_with};
pub use engine::{tick, Engine};
pub use life_core::{neighbors, CellState, Coordinate, Error, Result, Rule};
