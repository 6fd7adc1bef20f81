use bit_set::BitSet;

use crate::cells::{Cell, GridDirection};
use crate::units::GridDimensions;
use crate::walls::WallSet;

/// Working state of a single maze generation: which cells have been entered and which walls
/// have been knocked down so far.
///
/// A `Grid` is owned by exactly one generation run and consumed into its wall tables at the end.
#[derive(Debug)]
pub struct Grid {
    dimensions: GridDimensions,
    visited: BitSet,
    vertical_walls: WallSet,
    horizontal_walls: WallSet,
}

impl Grid {
    pub fn new(dimensions: GridDimensions) -> Grid {
        let rows = dimensions.rows().0;
        let columns = dimensions.columns().0;
        Grid {
            dimensions,
            visited: BitSet::with_capacity(dimensions.size()),
            vertical_walls: WallSet::new(rows, columns - 1),
            horizontal_walls: WallSet::new(rows - 1, columns),
        }
    }

    #[inline(always)]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.dimensions
            .cell_index(cell)
            .map_or(false, |index| self.visited.contains(index))
    }

    /// Mark a cell as entered. Returns false if it had already been visited.
    ///
    /// Panics if the cell is outside of the grid.
    pub fn visit(&mut self, cell: Cell) -> bool {
        let index = self.dimensions
            .cell_index(cell)
            .unwrap_or_else(|| panic!("cell {} outside of grid {:?}", cell, self.dimensions));
        self.visited.insert(index)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// The in-grid neighbour of a cell, if any.
    #[inline]
    pub fn neighbour_at_direction(&self, cell: Cell, direction: GridDirection) -> Option<Cell> {
        self.dimensions.neighbour_at_direction(cell, direction)
    }

    /// Open the wall between `cell` and its neighbour in `direction`.
    ///
    /// Returns false if the wall was already open. Panics if there is no such neighbour.
    pub fn open_wall(&mut self, cell: Cell, direction: GridDirection) -> bool {
        if self.neighbour_at_direction(cell, direction).is_none() {
            panic!("no neighbour {:?} of {} in grid {:?}", direction, cell, self.dimensions);
        }
        match direction {
            GridDirection::Up => self.horizontal_walls.open(cell.row - 1, cell.column),
            GridDirection::Down => self.horizontal_walls.open(cell.row, cell.column),
            GridDirection::Left => self.vertical_walls.open(cell.row, cell.column - 1),
            GridDirection::Right => self.vertical_walls.open(cell.row, cell.column),
        }
    }

    /// Give up the carving state, keeping `(vertical, horizontal)` walls.
    pub fn into_walls(self) -> (WallSet, WallSet) {
        (self.vertical_walls, self.horizontal_walls)
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    fn grid(rows: isize, columns: isize) -> Grid {
        Grid::new(GridDimensions::new(rows, columns).expect("valid test dimensions"))
    }

    #[test]
    fn wall_table_shapes() {
        let (vertical, horizontal) = grid(3, 5).into_walls();
        assert_eq!((vertical.rows(), vertical.columns()), (3, 4));
        assert_eq!((horizontal.rows(), horizontal.columns()), (2, 5));

        let (vertical, horizontal) = grid(4, 1).into_walls();
        assert_eq!((vertical.rows(), vertical.columns()), (4, 0));
        assert_eq!((horizontal.rows(), horizontal.columns()), (3, 1));

        let (vertical, horizontal) = grid(1, 1).into_walls();
        assert!(vertical.is_empty());
        assert!(horizontal.is_empty());
    }

    #[test]
    fn visiting_is_idempotent() {
        let mut g = grid(2, 2);
        let cell = Cell::new(1, 0);
        assert!(!g.is_visited(cell));
        assert!(g.visit(cell));
        assert!(!g.visit(cell));
        assert!(g.is_visited(cell));
        assert_eq!(g.visited_count(), 1);
        assert!(!g.is_visited(Cell::new(5, 5)));
    }

    #[test]
    fn opening_walls_maps_to_tables() {
        let mut g = grid(2, 2);
        assert!(g.open_wall(Cell::new(0, 0), GridDirection::Right));
        assert!(!g.open_wall(Cell::new(0, 1), GridDirection::Left));
        assert!(g.open_wall(Cell::new(1, 1), GridDirection::Up));
        assert!(g.open_wall(Cell::new(1, 0), GridDirection::Right));
        let (vertical, horizontal) = g.into_walls();
        assert_eq!(vertical.to_rows(), vec![vec![true], vec![true]]);
        assert_eq!(horizontal.to_rows(), vec![vec![false, true]]);
    }

    #[test]
    #[should_panic]
    fn opening_boundary_wall_panics() {
        let mut g = grid(2, 2);
        g.open_wall(Cell::new(0, 0), GridDirection::Up);
    }
}
