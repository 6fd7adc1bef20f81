// Flood fill distances over the passages of a maze, route finding between cells, and structural
// checks that a maze really is perfect.
//
// There are no weights on the passages, every step is one from the previous cell, so a breadth
// first flood fill gives shortest distances without needing a priority queue.

use itertools::Itertools;
use petgraph::{Graph, Undirected};
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::NodeIndex;

use crate::cells::Cell;
use crate::maze::MazeResult;
use crate::utils::{self, FnvHashMap};

#[derive(Debug, Clone)]
pub struct Distances {
    start: Cell,
    distances: FnvHashMap<Cell, u32>,
    max_distance: u32,
}

impl Distances {
    /// Steps from `start` to every cell reachable from it.
    ///
    /// `None` if `start` is outside of the maze.
    pub fn new(maze: &MazeResult, start: Cell) -> Option<Distances> {

        if !maze.dimensions().contains(start) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start, 0);

        // The distances map doubles as the visited set, so the frontier never needs dedup.
        let mut frontier = vec![start];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell in &frontier {
                let distance_to_cell = distances[cell];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link in maze.links(*cell) {
                    if !distances.contains_key(&link) {
                        distances.insert(link, distance_to_cell + 1);
                        new_frontier.push(link);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// Steps from the start to `cell`, `None` if unreachable or outside of the maze.
    pub fn distance_to(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// All cells at the maximum distance from the start, sorted.
    pub fn furthest_cells(&self) -> Vec<Cell> {
        self.distances
            .iter()
            .filter(|&(_, &distance)| distance == self.max_distance)
            .map(|(&cell, _)| cell)
            .sorted()
            .collect()
    }
}

/// The cells from the start of `distances` to `end` inclusive.
///
/// `None` if `end` cannot be reached.
pub fn shortest_path(maze: &MazeResult, distances: &Distances, end: Cell) -> Option<Vec<Cell>> {

    let mut current_distance = distances.distance_to(end)?;
    let mut path = vec![end];
    let mut current = end;

    // Walk back downhill from the end, any linked cell one step nearer the start will do.
    while current != distances.start() {
        let previous = maze.links(current)
            .into_iter()
            .find(|link| distances.distance_to(*link) == Some(current_distance - 1))?;
        path.push(previous);
        current = previous;
        current_distance -= 1;
    }

    path.reverse();
    Some(path)
}

/// The route from the maze's start cell to its goal cell.
pub fn solution(maze: &MazeResult) -> Option<Vec<Cell>> {
    let distances = Distances::new(maze, maze.start())?;
    shortest_path(maze, &distances, maze.goal())
}

/// The cells of the longest route through the maze.
///
/// The cell furthest from any point is one end of a longest path, the cell furthest from that is
/// the other end.
pub fn longest_path(maze: &MazeResult) -> Option<Vec<Cell>> {
    let first = Distances::new(maze, Cell::new(0, 0))?;
    let from = *first.furthest_cells().first()?;
    let distances = Distances::new(maze, from)?;
    let to = *distances.furthest_cells().first()?;
    shortest_path(maze, &distances, to)
}

/// Undirected graph with one node per cell (row major node indices) and one edge per passage.
pub fn to_graph(maze: &MazeResult) -> Graph<Cell, (), Undirected> {
    let mut graph = Graph::with_capacity(maze.size(), maze.passages_count());
    for cell in maze.iter_cells() {
        let _ = graph.add_node(cell);
    }
    let dimensions = maze.dimensions();
    for (a, b) in maze.iter_passages() {
        if let (Some(a_index), Some(b_index)) = (dimensions.cell_index(a), dimensions.cell_index(b)) {
            let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
        }
    }
    graph
}

/// Is the passage graph a spanning tree of the grid: connected, loop free, `cells - 1` passages?
pub fn is_perfect(maze: &MazeResult) -> bool {
    let graph = to_graph(maze);
    graph.edge_count() + 1 == graph.node_count() &&
    connected_components(&graph) == 1 &&
    !is_cyclic_undirected(&graph)
}
