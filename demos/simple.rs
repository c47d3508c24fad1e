use marker_pathfinding::{Position, SearchGrid};

// In this demo a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// | X |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - X marks the target cell
//
// Cells have a 4-neighborhood

fn main() {
    let grid = SearchGrid::from_rows(
        vec![
            vec!['.', '.', '.'],
            vec!['.', '#', '.'],
            vec!['.', 'X', '.'],
        ],
        '#',
    )
    .expect("rectangular grid");
    println!("{}", grid);
    let result = grid.find_path(&'X', Position::new(0, 0));
    println!("Path ({} steps):", result.length);
    for pos in result.path {
        println!("{}", pos);
    }
}
