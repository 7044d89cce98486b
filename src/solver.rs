use crate::Board;

/// Brute-force backtracking solver.
///
/// Stateless; every call works on its own copy of the input board. No
/// constraint-propagation techniques are applied: the search fills the first
/// empty cell in index order and backtracks on conflict, which is fast enough
/// at 9x9 scale that nothing smarter is needed.
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

    /// Solve the board, returning the first completion found.
    ///
    /// Returns `None` if no completion exists. Cells that are filled on
    /// input are left untouched, but they are not re-validated: a board that
    /// already violates the Sudoku invariant gives an unspecified result.
    pub fn solve(&self, board: &Board) -> Option<Board> {
        let mut working = *board;
        if Self::solve_recursive(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Count completions of the board, stopping once `limit` is reached.
    ///
    /// The return value is always in `[0, limit]`: 0 means unsolvable, 1
    /// means a unique completion, and `limit` means "`limit` or more". The
    /// early stop is what makes uniqueness checks during carving cheap, so
    /// callers that only need "unique or not" should pass `limit = 2`.
    pub fn count_solutions(&self, board: &Board, limit: usize) -> usize {
        let mut working = *board;
        let mut count = 0;
        Self::count_recursive(&mut working, &mut count, limit);
        count
    }

    /// Check if the board has exactly one completion
    pub fn has_unique_solution(&self, board: &Board) -> bool {
        self.count_solutions(board, 2) == 1
    }

    fn solve_recursive(board: &mut Board) -> bool {
        let index = match board.first_empty() {
            Some(index) => index,
            None => return true,
        };

        for value in 1..=9 {
            if board.is_valid_placement(index, value) {
                board.set(index, value);
                if Self::solve_recursive(board) {
                    return true;
                }
                board.set(index, 0);
            }
        }

        false
    }

    fn count_recursive(board: &mut Board, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }

        let index = match board.first_empty() {
            Some(index) => index,
            None => {
                *count += 1;
                return;
            }
        };

        for value in 1..=9 {
            if *count >= limit {
                break;
            }
            if board.is_valid_placement(index, value) {
                board.set(index, value);
                Self::count_recursive(board, count, limit);
                board.set(index, 0);
            }
        }
    }
}
