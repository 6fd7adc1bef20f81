//! Geometry handed to a renderer or physics engine.
//!
//! Grid coordinates become a continuous space where cell `(row, column)` covers
//! `[column * cell_width, (column + 1) * cell_width) x [row * cell_height, (row + 1) * cell_height)`,
//! x growing rightwards and y growing downwards. Every closed wall becomes a static rectangle,
//! the outer boundary gets four thin rectangles, and the start and goal cells get markers.
//! Nothing here draws or simulates anything.

use crate::cells::Cell;
use crate::maze::MazeResult;

/// An axis aligned rectangle given by its centre and size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Rect {
        Rect {
            center_x,
            center_y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center_y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center_y + self.height / 2.0
    }
}

/// A circular marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutOptions {
    cell_width: f64,
    cell_height: f64,
    wall_thickness: f64,
    boundary_thickness: f64,
    goal_scale: f64,
}

impl LayoutOptions {
    #[inline(always)]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    #[inline(always)]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptionsBuilder::new().build()
    }
}

/// Builder for `LayoutOptions`.
///
/// Every size, thickness and scale must be a positive finite number. Zero, negative or NaN
/// values are caught by debug assertions; release builds pass them through to the geometry.
pub struct LayoutOptionsBuilder {
    options: LayoutOptions,
}

impl LayoutOptionsBuilder {
    pub fn new() -> LayoutOptionsBuilder {
        LayoutOptionsBuilder {
            options: LayoutOptions {
                cell_width: 40.0,
                cell_height: 40.0,
                wall_thickness: 5.0,
                boundary_thickness: 2.0,
                goal_scale: 0.7,
            },
        }
    }

    pub fn cell_width(mut self, width: f64) -> LayoutOptionsBuilder {
        debug_assert_positive("cell width", width);
        self.options.cell_width = width;
        self
    }

    pub fn cell_height(mut self, height: f64) -> LayoutOptionsBuilder {
        debug_assert_positive("cell height", height);
        self.options.cell_height = height;
        self
    }

    /// Size a layout so the whole maze fills a `width x height` area. Both must be positive.
    pub fn fit_to(self, maze: &MazeResult, width: f64, height: f64) -> LayoutOptionsBuilder {
        debug_assert_positive("fit width", width);
        debug_assert_positive("fit height", height);
        let columns = maze.columns() as f64;
        let rows = maze.rows() as f64;
        self.cell_width(width / columns).cell_height(height / rows)
    }

    pub fn wall_thickness(mut self, thickness: f64) -> LayoutOptionsBuilder {
        debug_assert_positive("wall thickness", thickness);
        self.options.wall_thickness = thickness;
        self
    }

    pub fn boundary_thickness(mut self, thickness: f64) -> LayoutOptionsBuilder {
        debug_assert_positive("boundary thickness", thickness);
        self.options.boundary_thickness = thickness;
        self
    }

    /// Goal marker side as a fraction of the cell size.
    pub fn goal_scale(mut self, scale: f64) -> LayoutOptionsBuilder {
        debug_assert_positive("goal scale", scale);
        self.options.goal_scale = scale;
        self
    }

    pub fn build(self) -> LayoutOptions {
        self.options
    }
}

impl Default for LayoutOptionsBuilder {
    fn default() -> Self {
        LayoutOptionsBuilder::new()
    }
}

// NaN fails the comparison too.
#[inline]
fn debug_assert_positive(name: &str, value: f64) {
    debug_assert!(value > 0.0 && value.is_finite(),
                  "layout {} must be a positive finite number, got {}", name, value);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// One rectangle per closed interior wall, horizontal walls first.
    pub walls: Vec<Rect>,
    /// Top, bottom, left and right edges of the whole maze.
    pub boundary: [Rect; 4],
    pub start_marker: Circle,
    pub goal_marker: Rect,
}

impl Layout {
    pub fn new(maze: &MazeResult, options: &LayoutOptions) -> Layout {
        let w = options.cell_width;
        let h = options.cell_height;
        let width = maze.columns() as f64 * w;
        let height = maze.rows() as f64 * h;

        // horizontal wall (r, c) lies along the bottom edge of cell (r, c)
        let horizontal = maze.horizontal_walls()
            .iter_closed()
            .map(|(row, column)| {
                Rect::new(column as f64 * w + w / 2.0,
                          row as f64 * h + h,
                          w,
                          options.wall_thickness)
            });
        // vertical wall (r, c) lies along the right edge of cell (r, c)
        let vertical = maze.vertical_walls()
            .iter_closed()
            .map(|(row, column)| {
                Rect::new(column as f64 * w + w,
                          row as f64 * h + h / 2.0,
                          options.wall_thickness,
                          h)
            });
        let walls = horizontal.chain(vertical).collect();

        let t = options.boundary_thickness;
        let boundary = [Rect::new(width / 2.0, 0.0, width, t),
                        Rect::new(width / 2.0, height, width, t),
                        Rect::new(0.0, height / 2.0, t, height),
                        Rect::new(width, height / 2.0, t, height)];

        let (start_x, start_y) = cell_center(maze.start(), w, h);
        let start_marker = Circle {
            center_x: start_x,
            center_y: start_y,
            radius: w.min(h) / 4.0,
        };

        let (goal_x, goal_y) = cell_center(maze.goal(), w, h);
        let goal_marker = Rect::new(goal_x,
                                    goal_y,
                                    w * options.goal_scale,
                                    h * options.goal_scale);

        Layout {
            width,
            height,
            walls,
            boundary,
            start_marker,
            goal_marker,
        }
    }
}

fn cell_center(cell: Cell, cell_width: f64, cell_height: f64) -> (f64, f64) {
    (cell.column as f64 * cell_width + cell_width / 2.0,
     cell.row as f64 * cell_height + cell_height / 2.0)
}
