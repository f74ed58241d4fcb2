//! Neighbour counting and the per-cell transition rule.

use crate::world::World;
use life_core::{CellState, Coordinate, Rule};

/// How many of the eight cells around `cell` are live in `world`.
///
/// Positions beyond the `i64` edge do not exist and count as dead.
pub fn live_neighbor_count(cell: &Coordinate, world: &World) -> u8 {
    cell.neighbors_in_range()
        .filter(|n| world.contains(n))
        .count() as u8
}

/// State of `cell` in the next generation under Conway's rule (B3/S23).
pub fn next_state(cell: &Coordinate, world: &World) -> CellState {
    let current = CellState::from(world.contains(cell));
    let neighbors = live_neighbor_count(cell, world);
    match (current, neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Alive, _) => CellState::Dead,
        (CellState::Dead, 3) => CellState::Alive,
        (CellState::Dead, _) => CellState::Dead,
    }
}

/// State of `cell` in the next generation under an arbitrary rule.
pub fn next_state_with(rule: &Rule, cell: &Coordinate, world: &World) -> CellState {
    let current = CellState::from(world.contains(cell));
    rule.next_state(current, live_neighbor_count(cell, world))
}
