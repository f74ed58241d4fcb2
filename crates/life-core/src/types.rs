//! Core type definitions for the grid.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Offsets of the Moore neighbourhood: top row left to right, then the middle
/// row (left, right), then the bottom row left to right.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell position on the unbounded grid.
///
/// The canonical text form is `"x,y"`. Ordering is row-major: by `y`, then `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`. Wraps at the `i64` boundary.
    pub fn offset(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Shift by `(dx, dy)`, or `None` if either component leaves the `i64` range.
    pub fn checked_offset(&self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The eight surrounding cells, in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// Only meaningful away from the `i64` edge: a cell on the edge gets
    /// wrapped entries here. Use [`Coordinate::neighbors_in_range`] when the
    /// cell may lie on the edge.
    pub fn neighbors(&self) -> [Coordinate; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// The surrounding cells that exist on the plane, in [`NEIGHBOR_OFFSETS`]
    /// order. Yields fewer than eight cells on the `i64` edge.
    pub fn neighbors_in_range(&self) -> impl Iterator<Item = Coordinate> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.checked_offset(dx, dy))
    }

    /// Whether `other` is one of the eight cells around `self`.
    ///
    /// Symmetric: `a.is_neighbor_of(&b) == b.is_neighbor_of(&a)`.
    pub fn is_neighbor_of(&self, other: &Coordinate) -> bool {
        self != other && self.neighbors_in_range().any(|n| n == *other)
    }
}

/// Free-function form of [`Coordinate::neighbors`].
pub fn neighbors(cell: Coordinate) -> [Coordinate; 8] {
    cell.neighbors()
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (sx, sy) = s
            .split_once(',')
            .ok_or_else(|| Error::malformed(s, "expected two components"))?;
        if sy.contains(',') {
            return Err(Error::malformed(s, "expected two components"));
        }

        let x = parse_component(s, sx)?;
        let y = parse_component(s, sy)?;
        Ok(Self { x, y })
    }
}

fn parse_component(input: &str, component: &str) -> Result<i64> {
    let component = component.trim();
    if component.is_empty() {
        return Err(Error::malformed(input, "empty component"));
    }
    component
        .parse::<i64>()
        .map_err(|e| Error::malformed(input, e))
}

impl TryFrom<&str> for Coordinate {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for (i64, i64) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}
