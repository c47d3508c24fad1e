//! # marker_pathfinding
//!
//! Shortest paths on marker grids. Implements
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry)
//! heuristic over four-directional, uniform-cost movement. The target is a
//! cell *marker* rather than a coordinate: the engine scans the grid for the
//! first cell holding the target marker and paths towards it. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
mod astar;
pub mod grid;
pub mod position;
pub mod search_grid;

pub use grid::MarkerGrid;
pub use position::{Direction, Position};
pub use search_grid::{PathResult, SearchGrid};

/// Movement cost of one cardinal step. Only its positivity and uniformity
/// matter to the search; the heuristic stays in plain cell units.
pub const STEP_COST: i32 = 10;

/// One-call interface: finds the shortest path from `start` to the first
/// cell of `rows` holding `target`, treating cells equal to `obstacle` as
/// impassable.
///
/// Returns the empty [PathResult] when no cell holds the target marker,
/// when no route exists, or when `rows` is empty or ragged. Grids that are
/// queried more than once are better held in a [SearchGrid] so the
/// connected components are computed once.
///
/// ```
/// use marker_pathfinding::{find_shortest_path, Position};
///
/// let rows = vec![
///     vec!['.', '.', '.'],
///     vec!['.', '#', '.'],
///     vec!['.', 'X', '.'],
/// ];
/// let result = find_shortest_path(&'X', '#', Position::new(0, 0), rows);
/// assert_eq!(result.length, 3);
/// ```
pub fn find_shortest_path<M: PartialEq>(
    target: &M,
    obstacle: M,
    start: Position,
    rows: Vec<Vec<M>>,
) -> PathResult {
    match SearchGrid::from_rows(rows, obstacle) {
        Some(search_grid) => search_grid.find_path(target, start),
        None => PathResult::default(),
    }
}
