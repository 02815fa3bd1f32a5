//! Basic example of driving the Sudoku engine

use sudoku_engine::{Grid, SolveOutcome, SudokuEngine};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let grid = Grid::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", grid);
    println!("Empty cells: {}", grid.empty_count());

    let mut engine = SudokuEngine::from_grid(grid);
    println!("Consistent so far: {}\n", engine.check_current_consistency());

    match engine.solve() {
        SolveOutcome::Solved(solution) => {
            println!("Solution:");
            println!("{}", solution);
        }
        SolveOutcome::InvalidInput => println!("The puzzle already breaks a rule."),
        SolveOutcome::Unsolvable => println!("No completion exists for this puzzle."),
    }
}
