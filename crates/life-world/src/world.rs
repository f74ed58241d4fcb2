//! The set of live cells for one generation.

use life_core::{Coordinate, Result};
use std::collections::hash_set;
use std::collections::HashSet;
use tracing::debug;

/// Live cells of a single generation. Dead cells are implicit.
///
/// A `World` is never mutated after construction; [`crate::tick`] builds a
/// new one. Two worlds are equal iff they hold the same cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    cells: HashSet<Coordinate>,
}

impl World {
    /// The empty world.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        pairs.into_iter().map(Coordinate::from).collect()
    }

    /// Build a world from `"x,y"` strings. Fails on the first malformed entry.
    pub fn parse<I, S>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells = cells
            .into_iter()
            .map(|s| s.as_ref().parse::<Coordinate>())
            .collect::<Result<HashSet<_>>>()?;
        debug!("Parsed world with {} live cells", cells.len());
        Ok(Self { cells })
    }

    pub(crate) fn from_set(cells: HashSet<Coordinate>) -> Self {
        Self { cells }
    }

    pub fn contains(&self, cell: &Coordinate) -> bool {
        self.cells.contains(cell)
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, Coordinate> {
        self.cells.iter()
    }

    /// Live cells in row-major order.
    pub fn sorted(&self) -> Vec<Coordinate> {
        let mut cells: Vec<_> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Inclusive bounding box as `(min, max)` corners, `None` when empty.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), c| {
            (
                Coordinate::new(min.x.min(c.x), min.y.min(c.y)),
                Coordinate::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// A copy with every cell shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        self.cells.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// The next generation under Conway's rule.
    pub fn tick(&self) -> Self {
        crate::engine::tick(self)
    }
}

impl FromIterator<Coordinate> for World {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Coordinate;
    type IntoIter = hash_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::Error;

    #[test]
    fn test_empty_world() {
        let world = World::new();
        assert!(world.is_empty());
        assert_eq!(world.len(), 0);
        assert_eq!(world.bounds(), None);
        assert_eq!(world, World::from_pairs([]));
    }

    #[test]
    fn test_parse_world() {
        let world = World::parse(["0,1", "1,1", "2,1"]).unwrap();
        assert_eq!(world.len(), 3);
        assert!(world.contains(&Coordinate::new(1, 1)));
        assert!(!world.contains(&Coordinate::new(1, 0)));
        assert_eq!(world, World::from_pairs([(0, 1), (1, 1), (2, 1)]));
    }

    #[test]
    fn test_parse_rejects_malformed_entry() {
        let result = World::parse(vec!["0,1".to_string(), "one,1".to_string()]);
        assert!(matches!(result, Err(Error::MalformedCoordinate(_))));
    }

    #[test]
    fn test_construction_order_and_duplicates() {
        let a = World::from_pairs([(1, 1), (2, 1), (1, 2), (2, 2)]);
        let b = World::from_pairs([(2, 2), (1, 2), (1, 1), (2, 1), (1, 1)]);
        assert_eq!(a, b);
        assert_eq!(b.len(), 4);
        assert_eq!(a.sorted(), b.sorted());

        let members: HashSet<Coordinate> = b.iter().copied().collect();
        let expected: HashSet<Coordinate> = [(1, 1), (2, 1), (1, 2), (2, 2)]
            .into_iter()
            .map(Coordinate::from)
            .collect();
        assert_eq!(members, expected);
    }

    #[test]
    fn test_sorted_is_row_major() {
        let world = World::from_pairs([(1, 2), (0, 0), (3, 0), (0, 2)]);
        let sorted: Vec<(i64, i64)> = world.sorted().into_iter().map(Into::into).collect();
        assert_eq!(sorted, vec![(0, 0), (3, 0), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_bounds() {
        let world = World::from_pairs([(3, -1), (-2, 4), (0, 0)]);
        assert_eq!(
            world.bounds(),
            Some((Coordinate::new(-2, -1), Coordinate::new(3, 4)))
        );
    }

    #[test]
    fn test_translate_leaves_original_untouched() {
        let world = World::from_pairs([(0, 0), (1, 0)]);
        let moved = world.translate(5, -5);
        assert_eq!(moved, World::from_pairs([(5, -5), (6, -5)]));
        assert_eq!(world, World::from_pairs([(0, 0), (1, 0)]));
    }
}
