use marker_pathfinding::{Position, SearchGrid};

// Finds a route to the target marker 9 on an integer grid, then blocks the
// only corridor, refreshes the components and searches again.

fn main() {
    let mut grid = SearchGrid::from_rows(
        vec![
            vec![1, 1, 1, 1],
            vec![0, 0, 0, 1],
            vec![9, 1, 1, 1],
        ],
        0,
    )
    .expect("rectangular grid");
    let start = Position::new(0, 0);

    let first = grid.find_path(&9, start);
    println!("First route ({} steps): {:?}", first.length, first.path);

    grid.set(Position::new(1, 3), 0);
    grid.update();
    let second = grid.find_path(&9, start);
    println!("Route after blocking the corridor found: {}", second.is_found());
}
