//! **maze_carver** generates random perfect mazes on rectangular grids.
//!
//! A maze is produced as plain data: the grid shape, which walls between adjacent cells are
//! open, a start cell and a goal cell. Drawing it, simulating it or steering through it is left
//! to the caller; `layout` turns a maze into rectangles for whatever does.
//!
//! ```
//! use maze_carver::{generators, random::SeededRandom};
//!
//! let maze = generators::generate(10, 15, &mut SeededRandom::new(7)).unwrap();
//! assert_eq!(maze.passages_count(), 10 * 15 - 1);
//! ```

// error_chain! can recurse deeply
#![recursion_limit = "1024"]

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod layout;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod units;
pub mod walls;
mod utils;

pub use crate::cells::{Cell, GridDirection};
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::generators::{generate, generate_seeded};
pub use crate::maze::MazeResult;
pub use crate::random::RandomSource;
