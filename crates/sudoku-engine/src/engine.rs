use crate::{Conflict, Grid, Position, SolveOutcome, Solver};

/// Owns the working grid and exposes the operations a front-end drives:
/// cell updates, consistency queries, solving, and reset.
///
/// The engine is single-threaded and synchronous; a solve runs to completion
/// within the call and no concurrent mutation is possible while it does.
#[derive(Debug, Clone, Default)]
pub struct SudokuEngine {
    grid: Grid,
}

impl SudokuEngine {
    /// Create an engine with an empty grid
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Create an engine seeded with an existing grid
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Write a value into a cell: 1-9 places a digit, 0 clears the cell.
    /// No validation happens here; the caller asks `cell_conflict` or
    /// `check_current_consistency` afterward for feedback.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(value <= 9);
        let pos = Position::new(row, col);
        self.grid.set(pos, if value == 0 { None } else { Some(value) });
    }

    /// The first constraint group the cell's current value collides with,
    /// if any. Empty cells never conflict.
    pub fn cell_conflict(&self, row: usize, col: usize) -> Option<Conflict> {
        let pos = Position::new(row, col);
        let value = self.grid.get(pos)?;
        self.grid.find_conflict(pos, value)
    }

    /// Read-only whole-grid consistency query, for live feedback and the
    /// "check my work" action.
    pub fn check_current_consistency(&self) -> bool {
        self.grid.is_consistent()
    }

    /// Attempt to complete the grid. On `Solved` the engine's grid is
    /// overwritten in place with the solution; on `InvalidInput` or
    /// `Unsolvable` it is left exactly as it was.
    pub fn solve(&mut self) -> SolveOutcome {
        let outcome = Solver::new().solve(&self.grid);
        if let SolveOutcome::Solved(ref solution) = outcome {
            self.grid = solution.clone();
        }
        outcome
    }

    /// Reset the grid to all-empty
    pub fn clear(&mut self) {
        self.grid = Grid::new();
    }

    /// The current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Snapshot of all cell values for display, 0 for empty
    pub fn values(&self) -> [[u8; 9]; 9] {
        self.grid.values()
    }

    /// True if nothing has been entered yet
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY_PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_set_and_read_cell() {
        let mut engine = SudokuEngine::new();
        engine.set_cell(2, 7, 4);

        assert_eq!(engine.grid().get(Position::new(2, 7)), Some(4));
        assert_eq!(engine.values()[2][7], 4);
    }

    #[test]
    fn test_set_zero_clears_cell() {
        let mut engine = SudokuEngine::new();
        engine.set_cell(2, 7, 4);
        engine.set_cell(2, 7, 0);

        assert_eq!(engine.grid().get(Position::new(2, 7)), None);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_live_feedback_on_duplicate_entry() {
        let mut engine = SudokuEngine::new();
        engine.set_cell(0, 0, 5);
        engine.set_cell(0, 1, 5);

        assert!(!engine.check_current_consistency());
        assert_eq!(engine.cell_conflict(0, 1), Some(Conflict::Row(0)));

        // Erasing the second entry restores consistency
        engine.set_cell(0, 1, 0);
        assert!(engine.check_current_consistency());
        assert_eq!(engine.cell_conflict(0, 0), None);
    }

    #[test]
    fn test_cell_conflict_names_the_box() {
        let mut engine = SudokuEngine::new();
        engine.set_cell(6, 6, 9);
        engine.set_cell(8, 8, 9);

        assert_eq!(engine.cell_conflict(8, 8), Some(Conflict::Box(8)));
    }

    #[test]
    fn test_solve_overwrites_grid_in_place() {
        let grid = Grid::from_string(EASY_PUZZLE).unwrap();
        let mut engine = SudokuEngine::from_grid(grid);

        match engine.solve() {
            SolveOutcome::Solved(solution) => assert_eq!(engine.grid(), &solution),
            other => panic!("expected Solved, got {:?}", other),
        }
        assert!(engine.grid().is_complete());
    }

    #[test]
    fn test_invalid_input_leaves_grid_untouched() {
        let mut engine = SudokuEngine::new();
        engine.set_cell(0, 0, 5);
        engine.set_cell(0, 1, 5);
        let before = engine.values();

        assert_eq!(engine.solve(), SolveOutcome::InvalidInput);
        assert_eq!(engine.values(), before);
    }

    #[test]
    fn test_unsolvable_leaves_grid_untouched() {
        let puzzle = format!("{}{}{}", "023456789", "0".repeat(63), "100000000");
        let grid = Grid::from_string(&puzzle).unwrap();
        let mut engine = SudokuEngine::from_grid(grid);
        let before = engine.values();

        assert_eq!(engine.solve(), SolveOutcome::Unsolvable);
        assert_eq!(engine.values(), before);
    }

    #[test]
    fn test_clear_resets_grid() {
        let grid = Grid::from_string(EASY_PUZZLE).unwrap();
        let mut engine = SudokuEngine::from_grid(grid);
        engine.clear();

        assert!(engine.is_empty());
        assert!(engine.check_current_consistency());
    }
}
