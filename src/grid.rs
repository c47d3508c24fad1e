use crate::position::Position;

/// Rectangular row-major storage of cell markers. A marker is any value
/// comparable for equality; the grid itself attaches no meaning to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerGrid<M> {
    cells: Vec<M>,
    width: usize,
    height: usize,
}

impl<M> MarkerGrid<M> {
    /// Builds a grid from rows of markers. Returns [None] when there are no
    /// rows, the rows are empty, or the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<M>>) -> Option<MarkerGrid<M>> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells = rows.into_iter().flatten().collect();
        Some(MarkerGrid {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Linear index of a cell; also serves as its component id.
    pub fn cell_index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    pub fn get(&self, pos: Position) -> Option<&M> {
        if self.in_bounds(pos) {
            Some(&self.cells[self.cell_index(pos)])
        } else {
            None
        }
    }

    /// Replaces the marker of a cell. Returns [false] when `pos` lies
    /// outside the grid, leaving it untouched.
    pub fn set(&mut self, pos: Position, marker: M) -> bool {
        if self.in_bounds(pos) {
            let index = self.cell_index(pos);
            self.cells[index] = marker;
            true
        } else {
            false
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[M]> {
        self.cells.chunks(self.width)
    }
}

impl<M: PartialEq> MarkerGrid<M> {
    /// Scans the grid in row-major order and returns the position of the
    /// first cell equal to `marker`.
    pub fn find_marker(&self, marker: &M) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| cell == marker)
            .map(|index| Position::new(index / self.width, index % self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_and_empty_input() {
        assert!(MarkerGrid::<i32>::from_rows(vec![]).is_none());
        assert!(MarkerGrid::from_rows(vec![Vec::<i32>::new()]).is_none());
        assert!(MarkerGrid::from_rows(vec![vec![1, 1], vec![1]]).is_none());
    }

    #[test]
    fn indexes_by_row_and_column() {
        let grid = MarkerGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Position::new(0, 2)), Some(&3));
        assert_eq!(grid.get(Position::new(1, 0)), Some(&4));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
    }

    #[test]
    fn finds_the_first_marker_in_row_major_order() {
        let grid = MarkerGrid::from_rows(vec![
            vec!['a', 'b', 'a'],
            vec!['b', 'a', 'b'],
        ])
        .unwrap();
        assert_eq!(grid.find_marker(&'b'), Some(Position::new(0, 1)));
        assert_eq!(grid.find_marker(&'z'), None);
    }

    #[test]
    fn set_replaces_markers_in_bounds_only() {
        let mut grid = MarkerGrid::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
        assert!(grid.set(Position::new(1, 1), 7));
        assert_eq!(grid.get(Position::new(1, 1)), Some(&7));
        assert!(!grid.set(Position::new(2, 0), 7));
    }
}
