use bit_set::BitSet;
use std::fmt;

/// Open/closed flags for one family of walls laid out as a `rows x columns` table.
///
/// For a maze of `R x C` cells the vertical walls form an `R x (C - 1)` table: entry `(r, c)`
/// separates cell `(r, c)` from `(r, c + 1)`. The horizontal walls form an `(R - 1) x C` table:
/// entry `(r, c)` separates cell `(r, c)` from `(r + 1, c)`.
/// Either table may be empty, e.g. a single column maze has no vertical walls.
#[derive(Clone, PartialEq, Eq)]
pub struct WallSet {
    open: BitSet,
    rows: usize,
    columns: usize,
}

impl WallSet {
    /// A table with every wall closed.
    pub fn new(rows: usize, columns: usize) -> WallSet {
        WallSet {
            open: BitSet::with_capacity(rows * columns),
            rows,
            columns,
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of wall entries, open or closed.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is there a passage through this wall?
    ///
    /// Entries outside of the table are never open.
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        self.bit_index(row, column)
            .map_or(false, |index| self.open.contains(index))
    }

    /// Knock down a wall. Returns false if it was already open.
    ///
    /// Panics if the entry is outside of the table.
    pub(crate) fn open(&mut self, row: usize, column: usize) -> bool {
        let index = self.bit_index(row, column)
            .unwrap_or_else(|| {
                panic!("wall ({}, {}) outside of {} x {} table", row, column, self.rows, self.columns)
            });
        self.open.insert(index)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// `(row, column)` of every open entry in row major order.
    pub fn iter_open<'a>(&'a self) -> impl Iterator<Item = (usize, usize)> + 'a {
        let columns = self.columns;
        self.open.iter().map(move |index| (index / columns, index % columns))
    }

    /// `(row, column)` of every closed entry in row major order.
    pub fn iter_closed<'a>(&'a self) -> impl Iterator<Item = (usize, usize)> + 'a {
        let columns = self.columns;
        (0..self.len())
            .filter(move |index| !self.open.contains(*index))
            .map(move |index| (index / columns, index % columns))
    }

    /// The flags as nested rows, `true` meaning open.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| (0..self.columns).map(|column| self.is_open(row, column)).collect())
            .collect()
    }

    fn bit_index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }
}

impl fmt::Debug for WallSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WallSet :: {} x {}, open: {:?}", self.rows, self.columns, self.to_rows())
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    #[test]
    fn starts_closed() {
        let walls = WallSet::new(3, 2);
        assert_eq!(walls.len(), 6);
        assert_eq!(walls.open_count(), 0);
        assert_eq!(walls.to_rows(), vec![vec![false, false]; 3]);
        assert_eq!(walls.iter_closed().count(), 6);
    }

    #[test]
    fn open_walls() {
        let mut walls = WallSet::new(2, 3);
        assert!(walls.open(0, 2));
        assert!(walls.open(1, 0));
        assert!(!walls.open(1, 0));
        assert!(walls.is_open(0, 2));
        assert!(!walls.is_open(0, 1));
        assert_eq!(walls.open_count(), 2);
        assert_eq!(walls.iter_open().collect::<Vec<_>>(), vec![(0, 2), (1, 0)]);
        assert_eq!(walls.to_rows(), vec![vec![false, false, true], vec![true, false, false]]);

        let closed = walls.iter_closed().collect_vec();
        assert_eq!(closed, vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn outside_entries_are_closed() {
        let walls = WallSet::new(2, 2);
        assert!(!walls.is_open(2, 0));
        assert!(!walls.is_open(0, 2));
        assert!(!walls.is_open(usize::max_value(), 0));
    }

    #[test]
    fn empty_tables() {
        let walls = WallSet::new(4, 0);
        assert!(walls.is_empty());
        assert_eq!(walls.to_rows(), vec![Vec::<bool>::new(); 4]);
        assert_eq!(walls.iter_closed().count(), 0);

        let walls = WallSet::new(0, 4);
        assert!(walls.is_empty());
        assert!(walls.to_rows().is_empty());
    }

    #[test]
    #[should_panic]
    fn opening_outside_panics() {
        let mut walls = WallSet::new(2, 2);
        walls.open(0, 2);
    }
}
