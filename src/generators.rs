use crate::cells::{Cell, GridDirection};
use crate::errors::*;
use crate::grid::Grid;
use crate::maze::MazeResult;
use crate::random::{random_index, shuffle, RandomSource, SeededRandom};
use crate::units::GridDimensions;

/// Generate a perfect maze of `rows x columns` cells with the recursive backtracker algorithm.
///
/// A randomised depth first walk starts from a random cell. On entering a cell the four moves
/// away from it are shuffled, then each in-grid, unvisited neighbour in that order has the wall
/// towards it knocked down and is walked into before the next move is tried. Every carved
/// passage joins a visited cell to a fresh one, so the passages form a spanning tree: exactly
/// `rows * columns - 1` of them, no loops, every cell reachable.
///
/// All randomness comes from `random`: the start row, the start column, then three shuffle
/// draws per cell at the moment it is entered. The goal is always the far corner
/// `(rows - 1, columns - 1)`.
///
/// Fails with `InvalidDimension` if either dimension is not positive, or `RandomSourceError`
/// if `random` produces a draw outside `[0, 1)`. No partial maze is returned on failure.
pub fn generate<R>(rows: isize, columns: isize, random: &mut R) -> Result<MazeResult>
    where R: RandomSource + ?Sized
{
    let dimensions = GridDimensions::new(rows, columns)?;
    recursive_backtracker(dimensions, random)
}

/// `generate` with a reproducible source seeded by `seed`.
pub fn generate_seeded(rows: isize, columns: isize, seed: u64) -> Result<MazeResult> {
    generate(rows, columns, &mut SeededRandom::new(seed))
}

/// Recursive backtracker over already validated dimensions.
pub fn recursive_backtracker<R>(dimensions: GridDimensions, random: &mut R) -> Result<MazeResult>
    where R: RandomSource + ?Sized
{
    let mut grid = Grid::new(dimensions);

    let start = Cell::new(random_index(random, dimensions.rows().0)?,
                          random_index(random, dimensions.columns().0)?);

    // Explicit stack in place of recursion; a long corridor can be rows * columns deep.
    // Each frame remembers which of its shuffled moves to try next, so passages are carved in
    // exactly the order the recursive formulation would carve them.
    let mut stack: Vec<Frame> = Vec::new();
    if let Some(frame) = enter(&mut grid, start, random)? {
        stack.push(frame);
    }

    while let Some(frame) = stack.last_mut() {
        let direction = match frame.next_direction() {
            Some(direction) => direction,
            None => {
                let _ = stack.pop();
                continue;
            }
        };
        let cell = frame.cell;

        let neighbour = match grid.neighbour_at_direction(cell, direction) {
            Some(neighbour) if !grid.is_visited(neighbour) => neighbour,
            _ => continue,
        };

        let opened = grid.open_wall(cell, direction);
        debug_assert!(opened);
        if let Some(next) = enter(&mut grid, neighbour, random)? {
            stack.push(next);
        }
    }

    debug_assert_eq!(grid.visited_count(), dimensions.size());

    let (vertical_walls, horizontal_walls) = grid.into_walls();
    Ok(MazeResult::new(dimensions,
                       vertical_walls,
                       horizontal_walls,
                       start,
                       dimensions.last_cell()))
}

/// A cell on the walk stack and the moves out of it still to be tried.
struct Frame {
    cell: Cell,
    directions: [GridDirection; 4],
    next: usize,
}

impl Frame {
    fn next_direction(&mut self) -> Option<GridDirection> {
        let direction = self.directions.get(self.next).cloned();
        self.next += 1;
        direction
    }
}

/// Mark `cell` visited and shuffle its moves. `None` if it had been visited already.
fn enter<R>(grid: &mut Grid, cell: Cell, random: &mut R) -> Result<Option<Frame>>
    where R: RandomSource + ?Sized
{
    if !grid.visit(cell) {
        return Ok(None);
    }
    let mut directions = GridDirection::ALL;
    shuffle(random, &mut directions)?;
    Ok(Some(Frame {
        cell,
        directions,
        next: 0,
    }))
}
