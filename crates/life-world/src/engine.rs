//! Transition engine: builds the next generation from the current one.

use crate::rules::{next_state, next_state_with};
use crate::world::World;
use life_core::{Coordinate, Rule};
use std::collections::HashSet;
use tracing::{trace, warn};

/// Cells whose state may change in the next generation.
///
/// Only neighbourhoods of live cells are collected; live cells themselves are
/// not inserted. The Moore neighbourhood is symmetric, so a live cell with at
/// least one live neighbour is reached through that neighbour. A live cell
/// with no live neighbours is never a candidate, which is correct whenever the
/// rule does not survive on zero neighbours: it dies either way. Positions
/// beyond the `i64` edge are never produced.
fn candidates(world: &World, include_live: bool) -> HashSet<Coordinate> {
    let mut cells = HashSet::with_capacity(world.len() * 8);
    for cell in world {
        cells.extend(cell.neighbors_in_range());
        if include_live {
            cells.insert(*cell);
        }
    }
    cells
}

/// Evaluate every candidate with `is_alive` and collect the survivors.
fn step<F>(world: &World, include_live: bool, is_alive: F) -> World
where
    F: Fn(&Coordinate) -> bool,
{
    let candidates = candidates(world, include_live);
    let next: HashSet<Coordinate> = candidates
        .iter()
        .filter(|cell| is_alive(*cell))
        .copied()
        .collect();

    trace!(
        population = world.len(),
        candidates = candidates.len(),
        next_population = next.len(),
        "tick"
    );
    World::from_set(next)
}

/// Advance `world` by one generation under Conway's rule (B3/S23).
pub fn tick(world: &World) -> World {
    step(world, false, |cell| next_state(cell, world).is_alive())
}

/// Transition engine for a configurable birth/survival rule.
///
/// The rule is stored in [`Rule::normalized`] form. Birth on zero is dropped:
/// it would fill the unbounded plane, and a dead cell with no live neighbours
/// is never evaluated, so `B0` never fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    rule: Rule,
}

impl Engine {
    pub fn new(rule: Rule) -> Self {
        let normalized = rule.normalized();
        if normalized != rule {
            warn!("Rule {:?} normalized to {}", rule, normalized);
        }
        Self { rule: normalized }
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Advance `world` by one generation under this engine's rule.
    pub fn tick(&self, world: &World) -> World {
        trace!(rule = %self.rule, "engine tick");
        step(world, self.rule.survives_isolation(), |cell| {
            next_state_with(&self.rule, cell, world).is_alive()
        })
    }
}
