use crate::astar;
use crate::grid::MarkerGrid;
use crate::position::{Direction, Position};
use crate::STEP_COST;
use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Result of a path query: the traversed cells from start to target cell
/// inclusive, and the number of steps between them.
///
/// When no path exists (no cell holds the target marker, the start is
/// blocked, or every route is walled off) `path` is empty and `length` is
/// zero. The failure causes are not distinguished here; a caller that needs
/// to tell them apart can run [MarkerGrid::find_marker] itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathResult {
    pub path: Vec<Position>,
    pub length: usize,
}

impl PathResult {
    /// Whether a path was found. A found path always contains at least the
    /// start cell, so emptiness doubles as the failure signal.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    fn not_found() -> PathResult {
        PathResult::default()
    }
}

/// [SearchGrid] binds a [MarkerGrid] to the marker that denotes an obstacle
/// and maintains connected components of the free cells in a [UnionFind]
/// structure, so that queries for walled-off targets are answered without
/// flooding the whole grid.
///
/// Components are generated on construction. [set](Self::set) keeps them
/// current when cells are cleared and flags them as dirty when cells are
/// blocked; [update](Self::update) regenerates dirty components. A stale
/// structure only ever over-connects, so the reachability fast-path stays
/// sound between updates.
#[derive(Clone, Debug)]
pub struct SearchGrid<M> {
    pub grid: MarkerGrid<M>,
    obstacle: M,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl<M: PartialEq> SearchGrid<M> {
    pub fn new(grid: MarkerGrid<M>, obstacle: M) -> SearchGrid<M> {
        let mut search_grid = SearchGrid {
            components: UnionFind::new(grid.width() * grid.height()),
            grid,
            obstacle,
            components_dirty: false,
        };
        search_grid.generate_components();
        search_grid
    }

    /// Builds the grid from rows of markers; [None] on empty or ragged
    /// input.
    pub fn from_rows(rows: Vec<Vec<M>>, obstacle: M) -> Option<SearchGrid<M>> {
        MarkerGrid::from_rows(rows).map(|grid| SearchGrid::new(grid, obstacle))
    }

    pub fn obstacle(&self) -> &M {
        &self.obstacle
    }

    /// A position can be traversed iff it lies on the grid and its cell does
    /// not hold the obstacle marker. This is the sole check keeping the
    /// search inside bounds and off obstacles, applied to every candidate
    /// successor and to the start itself.
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.grid
            .get(pos)
            .map_or(false, |marker| *marker != self.obstacle)
    }

    /// Traversable neighbours of `pos` in N, E, S, W order, each paired with
    /// the uniform step cost.
    fn traversable_neighbours(&self, pos: Position) -> SmallVec<[(Position, i32); 4]> {
        Direction::CARDINAL
            .iter()
            .filter_map(|dir| dir.step(pos))
            .filter(|candidate| self.is_traversable(*candidate))
            .map(|candidate| (candidate, STEP_COST))
            .collect()
    }

    /// Retrieves the component id a given [Position] belongs to.
    pub fn get_component(&self, pos: &Position) -> usize {
        self.components.find(self.grid.cell_index(*pos))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Position, goal: &Position) -> bool {
        if self.grid.in_bounds(*start) && self.grid.in_bounds(*goal) {
            let start_index = self.grid.cell_index(*start);
            let goal_index = self.grid.cell_index(*goal);
            !self.components.equiv(start_index, goal_index)
        } else {
            true
        }
    }

    /// Replaces the marker of a cell. Joins newly connected components and
    /// flags the components as dirty if they are (potentially) broken apart.
    pub fn set(&mut self, pos: Position, marker: M) {
        if !self.grid.in_bounds(pos) {
            return;
        }
        let was_free = self.is_traversable(pos);
        let blocked = marker == self.obstacle;
        if was_free && blocked {
            self.components_dirty = true;
        } else if !blocked {
            let pos_index = self.grid.cell_index(pos);
            for (neighbour, _) in self.traversable_neighbours(pos) {
                self.components
                    .union(pos_index, self.grid.cell_index(neighbour));
            }
        }
        self.grid.set(pos, marker);
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("components are dirty, regenerating");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        let width = self.grid.width();
        let height = self.grid.height();
        self.components = UnionFind::new(width * height);
        self.components_dirty = false;
        for row in 0..height {
            for col in 0..width {
                let pos = Position::new(row, col);
                if !self.is_traversable(pos) {
                    continue;
                }
                let pos_index = self.grid.cell_index(pos);
                // East and south forward neighbours cover every cardinal
                // adjacency exactly once.
                for neighbour in [Position::new(row, col + 1), Position::new(row + 1, col)] {
                    if self.is_traversable(neighbour) {
                        self.components
                            .union(pos_index, self.grid.cell_index(neighbour));
                    }
                }
            }
        }
    }

    /// Computes the shortest path from `start` to the first cell holding
    /// `target`, routing around obstacle cells.
    ///
    /// The target cell is located by a row-major scan. A start on an
    /// obstacle cell (or off the grid) yields the not-found result. Results
    /// are deterministic: among equally promising frontier cells the one
    /// discovered first is expanded first, with successors generated in
    /// N, E, S, W order.
    pub fn find_path(&self, target: &M, start: Position) -> PathResult {
        let Some(goal) = self.grid.find_marker(target) else {
            info!("no cell holds the target marker");
            return PathResult::not_found();
        };
        if !self.is_traversable(start) {
            info!("start {} is blocked or out of bounds", start);
            return PathResult::not_found();
        }
        if self.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return PathResult::not_found();
        }
        let result = astar::search(
            &start,
            |position| self.traversable_neighbours(*position),
            |position| position.manhattan_distance(&goal),
            |position| *position == goal,
        );
        match result {
            Some((path, _cost)) => PathResult {
                length: path.len() - 1,
                path,
            },
            None => PathResult::not_found(),
        }
    }
}

impl<M: fmt::Debug> fmt::Display for SearchGrid<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in self.grid.rows() {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross_grid() -> SearchGrid<u8> {
        // 1 is free, 0 is the obstacle; the middle column is walled off
        // except for a gap in the last row.
        SearchGrid::from_rows(
            vec![
                vec![1, 0, 1],
                vec![1, 0, 1],
                vec![1, 1, 1],
            ],
            0,
        )
        .unwrap()
    }

    /// Free cells on both sides of the wall end up in one component through
    /// the gap; the wall cells stay in singleton components.
    #[test]
    fn component_generation_links_free_cells() {
        let grid = cross_grid();
        let left = Position::new(0, 0);
        let right = Position::new(0, 2);
        let wall = Position::new(0, 1);
        assert!(grid.reachable(&left, &right));
        assert!(grid.unreachable(&left, &wall));
    }

    #[test]
    fn out_of_bounds_positions_are_unreachable() {
        let grid = cross_grid();
        let inside = Position::new(0, 0);
        let outside = Position::new(3, 0);
        assert!(grid.unreachable(&inside, &outside));
        assert!(grid.unreachable(&outside, &inside));
    }

    #[test]
    fn blocking_a_cell_marks_components_dirty() {
        let mut grid = cross_grid();
        grid.set(Position::new(2, 1), 0);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(&Position::new(0, 0), &Position::new(0, 2)));
    }

    #[test]
    fn clearing_a_cell_joins_components_immediately() {
        let mut grid = cross_grid();
        grid.set(Position::new(2, 1), 0);
        grid.update();
        assert!(grid.unreachable(&Position::new(0, 0), &Position::new(0, 2)));
        grid.set(Position::new(1, 1), 1);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Position::new(0, 0), &Position::new(0, 2)));
    }

    #[test]
    fn traversability_checks_bounds_and_obstacles() {
        let grid = cross_grid();
        assert!(grid.is_traversable(Position::new(0, 0)));
        assert!(!grid.is_traversable(Position::new(0, 1)));
        assert!(!grid.is_traversable(Position::new(3, 3)));
    }

    #[test]
    fn start_equal_to_target_cell_is_a_zero_step_path() {
        let mut grid = cross_grid();
        grid.set(Position::new(2, 0), 9);
        let result = grid.find_path(&9, Position::new(2, 0));
        assert_eq!(result.path, vec![Position::new(2, 0)]);
        assert_eq!(result.length, 0);
        assert!(result.is_found());
    }

    #[test]
    fn start_on_an_obstacle_cell_finds_nothing() {
        let mut grid = cross_grid();
        grid.set(Position::new(2, 2), 9);
        let result = grid.find_path(&9, Position::new(0, 1));
        assert_eq!(result, PathResult::default());
    }

    #[test]
    fn routes_around_the_wall() {
        let mut grid = cross_grid();
        grid.set(Position::new(0, 2), 9);
        let result = grid.find_path(&9, Position::new(0, 0));
        assert_eq!(result.length, 6);
        assert_eq!(result.path.first(), Some(&Position::new(0, 0)));
        assert_eq!(result.path.last(), Some(&Position::new(0, 2)));
    }
}
