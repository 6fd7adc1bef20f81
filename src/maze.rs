use std::fmt;

use crate::cells::{Cell, CellSmallVec, DirectionSmallVec, GridDirection};
use crate::units::GridDimensions;
use crate::walls::WallSet;

/// A finished perfect maze: grid shape, which walls are open, and where the walk starts and ends.
///
/// Read only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeResult {
    dimensions: GridDimensions,
    vertical_walls: WallSet,
    horizontal_walls: WallSet,
    start: Cell,
    goal: Cell,
}

impl MazeResult {
    pub(crate) fn new(dimensions: GridDimensions,
                      vertical_walls: WallSet,
                      horizontal_walls: WallSet,
                      start: Cell,
                      goal: Cell)
                      -> MazeResult {
        MazeResult {
            dimensions,
            vertical_walls,
            horizontal_walls,
            start,
            goal,
        }
    }

    #[inline(always)]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dimensions.rows().0
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.dimensions.columns().0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size()
    }

    /// Walls between horizontally adjacent cells, `rows x (columns - 1)`.
    #[inline(always)]
    pub fn vertical_walls(&self) -> &WallSet {
        &self.vertical_walls
    }

    /// Walls between vertically adjacent cells, `(rows - 1) x columns`.
    #[inline(always)]
    pub fn horizontal_walls(&self) -> &WallSet {
        &self.horizontal_walls
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline(always)]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Is there a passage out of `cell` in the given direction?
    ///
    /// False for cells outside of the maze and for moves across the outer boundary.
    pub fn is_open(&self, cell: Cell, direction: GridDirection) -> bool {
        if self.dimensions.neighbour_at_direction(cell, direction).is_none() {
            return false;
        }
        match direction {
            GridDirection::Up => self.horizontal_walls.is_open(cell.row - 1, cell.column),
            GridDirection::Down => self.horizontal_walls.is_open(cell.row, cell.column),
            GridDirection::Left => self.vertical_walls.is_open(cell.row, cell.column - 1),
            GridDirection::Right => self.vertical_walls.is_open(cell.row, cell.column),
        }
    }

    /// Are two cells joined directly by a passage?
    pub fn is_linked(&self, a: Cell, b: Cell) -> bool {
        GridDirection::ALL
            .iter()
            .any(|&dir| self.dimensions.neighbour_at_direction(a, dir) == Some(b) &&
                        self.is_open(a, dir))
    }

    pub fn open_directions(&self, cell: Cell) -> DirectionSmallVec {
        GridDirection::ALL
            .iter()
            .cloned()
            .filter(|&dir| self.is_open(cell, dir))
            .collect()
    }

    /// Cells reachable from `cell` in one step.
    pub fn links(&self, cell: Cell) -> CellSmallVec {
        GridDirection::ALL
            .iter()
            .filter(|&&dir| self.is_open(cell, dir))
            .filter_map(|&dir| self.dimensions.neighbour_at_direction(cell, dir))
            .collect()
    }

    /// Count of open walls. A perfect maze has `size() - 1` of them.
    pub fn passages_count(&self) -> usize {
        self.vertical_walls.open_count() + self.horizontal_walls.open_count()
    }

    /// Each passage exactly once as a pair of cells, the first cell above or left of the second.
    pub fn iter_passages<'a>(&'a self) -> impl Iterator<Item = (Cell, Cell)> + 'a {
        let across = self.vertical_walls
            .iter_open()
            .map(|(row, column)| (Cell::new(row, column), Cell::new(row, column + 1)));
        let down = self.horizontal_walls
            .iter_open()
            .map(|(row, column)| (Cell::new(row, column), Cell::new(row + 1, column)));
        across.chain(down)
    }

    /// Cells in row major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> {
        let columns = self.columns();
        (0..self.size()).map(move |index| Cell::new(index / columns, index % columns))
    }
}

impl fmt::Display for MazeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        const CORNER: &str = "+";
        const WALL_LR: &str = "---";
        const PASSAGE_LR: &str = "   ";
        const WALL_UD: &str = "|";
        const PASSAGE_UD: &str = " ";

        let columns = self.columns();

        // The north boundary is always closed
        let mut output = String::from(CORNER);
        for _ in 0..columns {
            output.push_str(WALL_LR);
            output.push_str(CORNER);
        }
        output.push('\n');

        for row in 0..self.rows() {
            let mut middle = String::from(WALL_UD);
            let mut bottom = String::from(CORNER);

            for column in 0..columns {
                let cell = Cell::new(row, column);
                let body = if cell == self.start {
                    " S "
                } else if cell == self.goal {
                    " G "
                } else {
                    "   "
                };
                middle.push_str(body);
                middle.push_str(if self.is_open(cell, GridDirection::Right) {
                                    PASSAGE_UD
                                } else {
                                    WALL_UD
                                });

                bottom.push_str(if self.is_open(cell, GridDirection::Down) {
                                    PASSAGE_LR
                                } else {
                                    WALL_LR
                                });
                bottom.push_str(CORNER);
            }

            output.push_str(&middle);
            output.push('\n');
            output.push_str(&bottom);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    // 2x2 maze with passages (0,0)-(0,1), (0,1)-(1,1), (1,0)-(1,1)
    fn u_shaped_maze() -> MazeResult {
        let dims = GridDimensions::new(2, 2).unwrap();
        let mut vertical = WallSet::new(2, 1);
        let mut horizontal = WallSet::new(1, 2);
        vertical.open(0, 0);
        vertical.open(1, 0);
        horizontal.open(0, 1);
        MazeResult::new(dims, vertical, horizontal, Cell::new(0, 0), Cell::new(1, 1))
    }

    #[test]
    fn accessors() {
        let maze = u_shaped_maze();
        assert_eq!(maze.rows(), 2);
        assert_eq!(maze.columns(), 2);
        assert_eq!(maze.size(), 4);
        assert_eq!(maze.start(), Cell::new(0, 0));
        assert_eq!(maze.goal(), Cell::new(1, 1));
        assert_eq!(maze.passages_count(), 3);
    }

    #[test]
    fn open_directions_and_links() {
        let maze = u_shaped_maze();
        let gc = |r, c| Cell::new(r, c);

        assert_eq!(&*maze.open_directions(gc(0, 0)), &[GridDirection::Right]);
        assert_eq!(&*maze.open_directions(gc(1, 1)),
                   &[GridDirection::Up, GridDirection::Left]);
        assert_eq!(&*maze.links(gc(0, 1)), &[gc(1, 1), gc(0, 0)]);
        assert_eq!(&*maze.links(gc(1, 0)), &[gc(1, 1)]);

        assert!(maze.is_linked(gc(0, 0), gc(0, 1)));
        assert!(maze.is_linked(gc(0, 1), gc(0, 0)));
        assert!(!maze.is_linked(gc(0, 0), gc(1, 0)));
        assert!(!maze.is_linked(gc(0, 0), gc(1, 1)));
        assert!(!maze.is_linked(gc(0, 0), gc(0, 0)));
    }

    #[test]
    fn boundary_and_outside_cells_are_closed() {
        let maze = u_shaped_maze();
        for &dir in &GridDirection::ALL {
            assert!(!maze.is_open(Cell::new(2, 0), dir));
            assert!(!maze.is_open(Cell::new(0, 7), dir));
        }
        assert!(!maze.is_open(Cell::new(0, 0), GridDirection::Up));
        assert!(!maze.is_open(Cell::new(0, 0), GridDirection::Left));
        assert!(!maze.is_open(Cell::new(1, 1), GridDirection::Down));
        assert!(!maze.is_open(Cell::new(0, 1), GridDirection::Right));
    }

    #[test]
    fn passages_are_listed_once() {
        let maze = u_shaped_maze();
        let passages = maze.iter_passages().sorted().collect::<Vec<_>>();
        assert_eq!(passages,
                   vec![(Cell::new(0, 0), Cell::new(0, 1)),
                        (Cell::new(0, 1), Cell::new(1, 1)),
                        (Cell::new(1, 0), Cell::new(1, 1))]);
    }

    #[test]
    fn cells_are_row_major() {
        let maze = u_shaped_maze();
        assert_eq!(maze.iter_cells().collect::<Vec<_>>(),
                   vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn text_display() {
        let maze = u_shaped_maze();
        let expected = "\
+---+---+
| S     |
+---+   +
|     G |
+---+---+
";
        assert_eq!(maze.to_string(), expected);
    }
}
