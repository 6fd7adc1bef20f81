use docopt::Docopt;
use itertools::Itertools;
use serde_derive::Deserialize;
use maze_carver::{
    generators,
    layout::{Layout, LayoutOptionsBuilder},
    maze::MazeResult,
    pathing,
    random::{SeededRandom, ThreadRandom},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Maze carver

Usage:
    maze_driver -h | --help
    maze_driver [options]

Options:
    -h --help              Show this screen.
    --rows=<n>             Number of cell rows [default: 10].
    --columns=<n>          Number of cell columns [default: 15].
    --seed=<s>             Seed the random source so the same maze is produced every run.
    --text-out=<path>      Output file path for a textual rendering of the maze instead of stdout.
    --show-path            Also print the route from the start cell to the goal cell.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based row major vertex indices.
    --layout               Print the wall, boundary and marker rectangles for a renderer.
    --cell-width=<w>       Width of one cell in layout units [default: 40].
    --cell-height=<h>      Height of one cell in layout units [default: 40].
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: isize,
    flag_columns: isize,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_show_path: bool,
    flag_save_edges: String,
    flag_layout: bool,
    flag_cell_width: f64,
    flag_cell_height: f64,
}

// Errors for the driver, chaining in the library's own error kinds.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::maze_carver::errors::Error, ::maze_carver::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let maze = if let Some(seed) = args.flag_seed {
        generators::generate(args.flag_rows, args.flag_columns, &mut SeededRandom::new(seed))?
    } else {
        generators::generate(args.flag_rows, args.flag_columns, &mut ThreadRandom::new())?
    };

    let mut text = maze.to_string();
    if args.flag_show_path {
        let path = pathing::solution(&maze).ok_or("Generated maze has no route from start to goal.")?;
        text.push_str(&format!("path ({} steps): {}\n",
                               path.len() - 1,
                               path.iter().join(" -> ")));
    }

    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    if args.flag_layout {
        for &(name, size) in &[("--cell-width", args.flag_cell_width),
                               ("--cell-height", args.flag_cell_height)] {
            if !(size > 0.0 && size.is_finite()) {
                return Err(format!("{} must be a positive number, got {}", name, size).into());
            }
        }
        let options = LayoutOptionsBuilder::new()
            .cell_width(args.flag_cell_width)
            .cell_height(args.flag_cell_height)
            .build();
        print!("{}", layout_text(&Layout::new(&maze, &options)));
    }

    Ok(())
}

fn layout_text(layout: &Layout) -> String {
    let mut out = format!("area {} x {}\n", layout.width, layout.height);
    for rect in layout.boundary.iter().chain(layout.walls.iter()) {
        out.push_str(&format!("wall center=({}, {}) size=({}, {})\n",
                              rect.center_x, rect.center_y, rect.width, rect.height));
    }
    let start = layout.start_marker;
    out.push_str(&format!("start center=({}, {}) radius={}\n",
                          start.center_x, start.center_y, start.radius));
    let goal = layout.goal_marker;
    out.push_str(&format!("goal center=({}, {}) size=({}, {})\n",
                          goal.center_x, goal.center_y, goal.width, goal.height));
    out
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &MazeResult, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", maze.size(), maze.passages_count()));

    let dimensions = maze.dimensions();
    for (src, dst) in maze.iter_passages() {
        let index_a = dimensions.cell_index(src)
            .expect("Passages iter should give valid cells");
        let index_b = dimensions.cell_index(dst)
            .expect("Passages iter should give valid cells");
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
