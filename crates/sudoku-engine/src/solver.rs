use crate::Grid;
use serde::{Deserialize, Serialize};

/// Outcome of a solve attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// A complete, constraint-satisfying grid was found
    Solved(Grid),
    /// The grid already violates a constraint; no search was attempted
    InvalidInput,
    /// The grid is consistent but no completion exists
    Unsolvable,
}

/// Depth-first backtracking solver.
///
/// Cells are filled in row-major order and digits tried in ascending order,
/// so the result is a pure function of the input: a grid with several
/// completions always yields the lexicographically first one under that
/// order. Recursion depth is bounded by the 81 cells.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Attempt to complete `grid`. The input is checked for consistency
    /// before any search and is never mutated; a solved grid is carried in
    /// the outcome.
    pub fn solve(&self, grid: &Grid) -> SolveOutcome {
        if !grid.is_consistent() {
            return SolveOutcome::InvalidInput;
        }

        let mut working = grid.clone();
        if self.solve_recursive(&mut working) {
            SolveOutcome::Solved(working)
        } else {
            SolveOutcome::Unsolvable
        }
    }

    fn solve_recursive(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            // No empty cell left: the grid is a complete solution
            None => return true,
        };

        for value in 1..=9 {
            if grid.is_valid_placement(pos, value) {
                grid.set(pos, Some(value));
                if self.solve_recursive(grid) {
                    return true;
                }
                grid.set(pos, None);
            }
        }

        false
    }
}
