use core::fmt;

/// A cell coordinate on the grid: row first, column second. Rows grow
/// downwards and columns grow to the right, so `(0, 0)` is the top-left cell.
///
/// Positions double as map keys during search; two positions are equal iff
/// both components are equal, which the derived [Eq] and [Hash] provide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Manhattan distance to `other`, in cell units.
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as i32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed expansion order for successor generation.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The position one step in this direction, or [None] when the step
    /// would leave the grid through row or column zero.
    pub fn step(&self, from: Position) -> Option<Position> {
        match self {
            Direction::North => from
                .row
                .checked_sub(1)
                .map(|row| Position::new(row, from.col)),
            Direction::East => Some(Position::new(from.row, from.col + 1)),
            Direction::South => Some(Position::new(from.row + 1, from.col)),
            Direction::West => from
                .col
                .checked_sub(1)
                .map(|col| Position::new(from.row, col)),
        }
    }
}
