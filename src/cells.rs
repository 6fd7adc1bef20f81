use smallvec::SmallVec;
use std::fmt;

/// A unit position in the maze grid, addressed by row then column.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Cell {
        Cell::new(row, column)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

pub type CellSmallVec = SmallVec<[Cell; 4]>;
pub type DirectionSmallVec = SmallVec<[GridDirection; 4]>;

/// The four moves out of a cell.
///
/// Declaration order is the candidate order a carving step starts from before shuffling.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub enum GridDirection {
    Up,
    Right,
    Down,
    Left,
}

impl GridDirection {
    pub const ALL: [GridDirection; 4] = [GridDirection::Up,
                                         GridDirection::Right,
                                         GridDirection::Down,
                                         GridDirection::Left];

    pub fn opposite(self) -> GridDirection {
        match self {
            GridDirection::Up => GridDirection::Down,
            GridDirection::Down => GridDirection::Up,
            GridDirection::Left => GridDirection::Right,
            GridDirection::Right => GridDirection::Left,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        self == GridDirection::Up || self == GridDirection::Down
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    #[test]
    fn opposite_is_an_involution() {
        for &dir in &GridDirection::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
            assert_eq!(dir.is_vertical(), dir.opposite().is_vertical());
        }
    }

    #[test]
    fn candidate_order() {
        let names = GridDirection::ALL.iter().map(|d| format!("{:?}", d)).join(",");
        assert_eq!(names, "Up,Right,Down,Left");
    }

    #[test]
    fn cells_order_row_major() {
        let cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        let sorted = cells.into_iter().sorted().collect::<Vec<_>>();
        assert_eq!(sorted, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
        assert_eq!(Cell::from((3, 4)).to_string(), "(3, 4)");
    }
}
