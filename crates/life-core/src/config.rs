//! Rule configuration for the transition engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-cell state for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Alive,
    Dead,
}

impl CellState {
    pub fn is_alive(&self) -> bool {
        matches!(self, CellState::Alive)
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Birth/survival table, keyed by live-neighbour count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Counts at which a dead cell becomes alive
    pub birth: Vec<u8>,
    /// Counts at which a live cell stays alive
    pub survive: Vec<u8>,
}

impl Rule {
    /// Conway's Game of Life, B3/S23.
    pub fn conway() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }

    /// State of a cell in the next generation, given its current state and
    /// live-neighbour count.
    pub fn next_state(&self, current: CellState, live_neighbors: u8) -> CellState {
        let table = match current {
            CellState::Alive => &self.survive,
            CellState::Dead => &self.birth,
        };
        CellState::from(table.contains(&live_neighbors))
    }

    /// Whether an isolated live cell survives.
    pub fn survives_isolation(&self) -> bool {
        self.survive.contains(&0)
    }

    /// Sorted, deduplicated copy holding only counts that can fire on the
    /// unbounded plane: birth in `1..=8`, survival in `0..=8`.
    ///
    /// Birth on zero is dropped because a dead cell with no live neighbours
    /// lies outside every live neighbourhood and is never evaluated.
    pub fn normalized(&self) -> Self {
        Self {
            birth: sorted_counts(&self.birth, 1),
            survive: sorted_counts(&self.survive, 0),
        }
    }
}

fn sorted_counts(counts: &[u8], min: u8) -> Vec<u8> {
    let mut sorted: Vec<u8> = counts
        .iter()
        .copied()
        .filter(|n| (min..=8).contains(n))
        .collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

/// Renders the `Bxx/Syy` notation. Counts above 8 never match and are left
/// out, so every digit is a single neighbour count.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |counts: Vec<u8>| counts.iter().map(|n| n.to_string()).collect::<String>();
        write!(
            f,
            "B{}/S{}",
            digits(sorted_counts(&self.birth, 0)),
            digits(sorted_counts(&self.survive, 0))
        )
    }
}
