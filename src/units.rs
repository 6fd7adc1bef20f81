use crate::cells::{Cell, GridDirection};
use crate::errors::*;
use error_chain::bail;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

/// Validated `rows x columns` shape of a maze grid. Both sides are at least 1 and the cell
/// count fits in a `usize`, so every table sized from it can be indexed without overflow.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: isize, columns: isize) -> Result<GridDimensions> {
        if rows <= 0 || columns <= 0 {
            bail!(ErrorKind::InvalidDimension(rows, columns));
        }
        if (rows as usize).checked_mul(columns as usize).is_none() {
            bail!(ErrorKind::InvalidDimension(rows, columns));
        }
        Ok(GridDimensions {
            rows: RowsCount(rows as usize),
            columns: ColumnsCount(columns as usize),
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows.0 && cell.column < self.columns.0
    }

    /// Row major index of a cell, `None` if the cell is outside of the grid.
    pub fn cell_index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.columns.0 + cell.column)
        } else {
            None
        }
    }

    /// The cell adjacent to `cell` in the given direction.
    ///
    /// `None` when the move would leave the grid.
    pub fn neighbour_at_direction(&self, cell: Cell, direction: GridDirection) -> Option<Cell> {
        let neighbour = match direction {
            GridDirection::Up => cell.row.checked_sub(1).map(|row| Cell { row, ..cell }),
            GridDirection::Down => Some(Cell { row: cell.row + 1, ..cell }),
            GridDirection::Left => cell.column.checked_sub(1).map(|column| Cell { column, ..cell }),
            GridDirection::Right => Some(Cell { column: cell.column + 1, ..cell }),
        };
        neighbour.filter(|c| self.contains(*c))
    }

    /// The far corner from the origin, `(rows - 1, columns - 1)`.
    #[inline]
    pub fn last_cell(&self) -> Cell {
        Cell::new(self.rows.0 - 1, self.columns.0 - 1)
    }
}
