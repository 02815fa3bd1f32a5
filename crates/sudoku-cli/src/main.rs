use clap::{Parser, Subcommand};
use std::process::ExitCode;
use sudoku_engine::{Grid, SolveOutcome, SudokuEngine};

/// Sudoku puzzle checker and solver
#[derive(Parser)]
#[command(name = "sudoku", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the completed grid
    Solve {
        /// 81-character puzzle string, row by row, 0 or . for empty
        puzzle: String,
        /// Emit the outcome as JSON instead of a rendered grid
        #[arg(long)]
        json: bool,
    },
    /// Check whether the entered numbers are consistent so far
    Check {
        /// 81-character puzzle string, row by row, 0 or . for empty
        puzzle: String,
    },
    /// Pretty-print a puzzle without solving it
    Show {
        /// 81-character puzzle string, row by row, 0 or . for empty
        puzzle: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { puzzle, json } => solve(&puzzle, json),
        Command::Check { puzzle } => check(&puzzle),
        Command::Show { puzzle } => show(&puzzle),
    }
}

fn parse_grid(puzzle: &str) -> Result<Grid, ExitCode> {
    match Grid::from_string(puzzle) {
        Some(grid) => Ok(grid),
        None => {
            eprintln!("error: expected 81 characters of digits 0-9 or '.', row by row");
            Err(ExitCode::from(2))
        }
    }
}

fn solve(puzzle: &str, json: bool) -> ExitCode {
    let grid = match parse_grid(puzzle) {
        Ok(grid) => grid,
        Err(code) => return code,
    };

    let mut engine = SudokuEngine::from_grid(grid);
    let outcome = engine.solve();

    if json {
        println!(
            "{}",
            serde_json::to_string(&outcome).expect("outcome serializes")
        );
        return match outcome {
            SolveOutcome::Solved(_) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        };
    }

    match outcome {
        SolveOutcome::Solved(solution) => {
            println!("{}", solution);
            ExitCode::SUCCESS
        }
        SolveOutcome::InvalidInput => {
            eprintln!("invalid input: the grid already violates a row, column, or box constraint");
            ExitCode::FAILURE
        }
        SolveOutcome::Unsolvable => {
            eprintln!("this puzzle cannot be solved");
            ExitCode::FAILURE
        }
    }
}

fn check(puzzle: &str) -> ExitCode {
    let grid = match parse_grid(puzzle) {
        Ok(grid) => grid,
        Err(code) => return code,
    };

    let engine = SudokuEngine::from_grid(grid);

    if engine.is_empty() {
        println!("nothing to check: the grid is empty");
        return ExitCode::SUCCESS;
    }

    if engine.check_current_consistency() {
        println!("current configuration is valid");
        return ExitCode::SUCCESS;
    }

    // Point the user at the first offending cell
    for row in 0..9 {
        for col in 0..9 {
            if let Some(conflict) = engine.cell_conflict(row, col) {
                println!(
                    "invalid configuration: {} (cell {}, {})",
                    conflict,
                    row + 1,
                    col + 1
                );
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::FAILURE
}

fn show(puzzle: &str) -> ExitCode {
    match parse_grid(puzzle) {
        Ok(grid) => {
            println!("{}", grid);
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}
