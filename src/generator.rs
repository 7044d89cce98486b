use crate::board::CELL_COUNT;
use crate::{Board, Solver};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

/// Difficulty level of a puzzle, expressed as a cell-removal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of cells the carver blanks out of 81
    pub fn removals(&self) -> usize {
        match self {
            Difficulty::Easy => 34,
            Difficulty::Medium => 44,
            Difficulty::Hard => 54,
        }
    }

    /// Number of clues left after carving
    pub fn clue_count(&self) -> usize {
        CELL_COUNT - self.removals()
    }

    /// All difficulty levels, easiest first
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A carved puzzle together with the solution it came from.
///
/// `values` holds the clues (blanked cells are 0) and `fixed` marks which
/// cells are givens. The engine never mutates a puzzle after carving; the
/// game layer writes the player's digits into its own copy of `values` and
/// checks them against `solution`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    /// Clue values, 0 where carved out
    pub values: Board,
    /// Mask of pre-filled given cells
    #[serde(with = "BigArray")]
    pub fixed: [bool; CELL_COUNT],
    /// The full solution the puzzle was carved from
    pub solution: Board,
    /// False if the fallback pass blanked cells without re-checking
    /// uniqueness, in which case the puzzle may have multiple solutions
    pub uniqueness_guaranteed: bool,
}

impl Puzzle {
    /// Whether the cell at `index` is a given clue
    pub fn is_fixed(&self, index: usize) -> bool {
        self.fixed[index]
    }

    /// Number of given clues
    pub fn clue_count(&self) -> usize {
        self.fixed.iter().filter(|&&f| f).count()
    }

    /// Number of carved-out cells
    pub fn removed_count(&self) -> usize {
        CELL_COUNT - self.clue_count()
    }
}

/// Puzzle generator: produces full solutions by randomized backtracking and
/// carves puzzles from them
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle of the given difficulty
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        let solution = self.generate_solution();
        self.make_puzzle_from_solution(&solution, difficulty.removals())
    }

    /// Generate a complete, solved board.
    ///
    /// Same backtracking shape as [`Solver::solve`], but the candidate
    /// digits are reshuffled at every cell, so repeated calls walk different
    /// branches and yield different solved grids.
    pub fn generate_solution(&mut self) -> Board {
        let mut board = Board::new();
        // Cannot fail from an empty board.
        Self::fill_recursive(&mut board, &mut self.rng);
        board
    }

    /// Carve a puzzle out of a solved board by blanking `removals` cells.
    ///
    /// Cells are visited in one random order. A removal is kept only if the
    /// board still has exactly one completion, checked with
    /// [`Solver::count_solutions`] bounded at 2; otherwise the digit is
    /// restored and the next cell is tried. If a full pass cannot reach the
    /// target this way, a second pass over the same order blanks the
    /// remaining cells unconditionally and clears `uniqueness_guaranteed`
    /// on the result.
    pub fn make_puzzle_from_solution(&mut self, solution: &Board, removals: usize) -> Puzzle {
        let solver = Solver::new();
        let mut values = *solution;
        let mut fixed = [true; CELL_COUNT];

        let mut order: Vec<usize> = (0..CELL_COUNT).collect();
        order.shuffle(&mut self.rng);

        let mut removed = 0;
        for &index in &order {
            if removed == removals {
                break;
            }
            let digit = values.get(index);
            values.set(index, 0);
            if solver.count_solutions(&values, 2) == 1 {
                fixed[index] = false;
                removed += 1;
            } else {
                values.set(index, digit);
            }
        }

        let mut uniqueness_guaranteed = true;
        if removed < removals {
            // Uniqueness-preserving removals ran out; blank the rest anyway.
            for &index in &order {
                if removed == removals {
                    break;
                }
                if values.get(index) != 0 {
                    values.set(index, 0);
                    fixed[index] = false;
                    removed += 1;
                    uniqueness_guaranteed = false;
                }
            }
        }

        Puzzle {
            values,
            fixed,
            solution: *solution,
            uniqueness_guaranteed,
        }
    }

    fn fill_recursive(board: &mut Board, rng: &mut StdRng) -> bool {
        let index = match board.first_empty() {
            Some(index) => index,
            None => return true,
        };

        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(rng);

        for &value in &digits {
            if board.is_valid_placement(index, value) {
                board.set(index, value);
                if Self::fill_recursive(board, rng) {
                    return true;
                }
                board.set(index, 0);
            }
        }

        false
    }
}
