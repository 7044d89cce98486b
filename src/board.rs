use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

/// Number of cells on a 9x9 board
pub const CELL_COUNT: usize = 81;

/// Side length of the board
pub const SIDE: usize = 9;

/// A 9x9 Sudoku board stored as 81 cells in row-major order.
///
/// A cell holds 0 when empty, or a placed digit 1-9. Index `i` maps to
/// row `i / 9` and column `i % 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "BigArray")]
    cells: [u8; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Create a board from raw cell values
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parse a board from an 81-character string.
    ///
    /// Digits `1`-`9` are placed values; `0` and `.` are empty cells.
    /// Returns `None` if the string has the wrong length or contains any
    /// other character.
    pub fn from_string(s: &str) -> Option<Self> {
        if s.chars().count() != CELL_COUNT {
            return None;
        }
        let mut cells = [0u8; CELL_COUNT];
        for (i, ch) in s.chars().enumerate() {
            cells[i] = match ch {
                '0' | '.' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
        }
        Some(Self { cells })
    }

    /// Get the value at a cell index (0 = empty)
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Set the value at a cell index (0 clears the cell)
    pub fn set(&mut self, index: usize, value: u8) {
        self.cells[index] = value;
    }

    /// View the raw cell values
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Index of the first empty cell in row-major order, if any
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|&v| v == 0)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Check if every cell is filled
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Check whether placing `value` at `index` would conflict with the
    /// same row, column, or 3x3 box.
    ///
    /// The cell at `index` itself is ignored, so an already-placed digit can
    /// be re-validated in place. Pre-existing conflicts elsewhere on the
    /// board are not detected; only the placement at `index` is checked.
    /// Callers are expected to pass `index < 81` and `value` in 1-9.
    pub fn is_valid_placement(&self, index: usize, value: u8) -> bool {
        let row = index / SIDE;
        let col = index % SIDE;

        for i in 0..SIDE {
            let row_index = row * SIDE + i;
            if row_index != index && self.cells[row_index] == value {
                return false;
            }
            let col_index = i * SIDE + col;
            if col_index != index && self.cells[col_index] == value {
                return false;
            }
        }

        let box_row = row / 3 * 3;
        let box_col = col / 3 * 3;
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                let box_index = r * SIDE + c;
                if box_index != index && self.cells[box_index] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Check the full-board invariant: complete, and every row, column, and
    /// box contains each digit exactly once
    pub fn is_solved(&self) -> bool {
        self.is_complete()
            && (0..CELL_COUNT).all(|i| self.is_valid_placement(i, self.cells[i]))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIDE {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..SIDE {
                if col > 0 && col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row * SIDE + col] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_from_string() {
        let board = Board::from_string(EASY).unwrap();
        assert_eq!(board.get(0), 5);
        assert_eq!(board.get(1), 3);
        assert_eq!(board.get(2), 0);
        assert_eq!(board.get(80), 9);
        assert_eq!(board.filled_count(), 30);
    }

    #[test]
    fn test_from_string_dots() {
        let dotted: String = EASY.chars().map(|c| if c == '0' { '.' } else { c }).collect();
        assert_eq!(Board::from_string(&dotted), Board::from_string(EASY));
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(Board::from_string("12345").is_none());
        assert!(Board::from_string(&"x".repeat(81)).is_none());
        assert!(Board::from_string(&"1".repeat(82)).is_none());
    }

    #[test]
    fn test_valid_placement_row_conflict() {
        let board = Board::from_string(EASY).unwrap();
        // Row 0 already contains 5 at index 0 and 7 at index 4.
        assert!(!board.is_valid_placement(2, 5));
        assert!(!board.is_valid_placement(2, 7));
        assert!(board.is_valid_placement(2, 1));
    }

    #[test]
    fn test_valid_placement_column_conflict() {
        let board = Board::from_string(EASY).unwrap();
        // Column 0 contains 5, 6, 8, 4, 7.
        assert!(!board.is_valid_placement(18, 6));
        assert!(!board.is_valid_placement(18, 4));
    }

    #[test]
    fn test_valid_placement_box_conflict() {
        let board = Board::from_string(EASY).unwrap();
        // Top-left box contains 5, 3, 6, 9, 8.
        assert!(!board.is_valid_placement(2, 9));
        assert!(!board.is_valid_placement(2, 8));
    }

    #[test]
    fn test_valid_placement_ignores_own_cell() {
        let board = Board::from_string(EASY).unwrap();
        // Re-validating a placed digit against itself must pass.
        assert!(board.is_valid_placement(0, 5));
    }

    #[test]
    fn test_duplicate_flagged_at_both_indices() {
        let mut board = Board::from_string(EASY).unwrap();
        // Force a duplicate 5 in row 0.
        board.set(2, 5);
        assert!(!board.is_valid_placement(0, 5));
        assert!(!board.is_valid_placement(2, 5));
    }

    #[test]
    fn test_empty_board_accepts_anything() {
        let board = Board::new();
        for index in [0, 40, 80] {
            for value in 1..=9 {
                assert!(board.is_valid_placement(index, value));
            }
        }
    }

    #[test]
    fn test_is_solved() {
        let solved =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
        assert!(Board::from_string(solved).unwrap().is_solved());

        // Swap two cells in the first row to break it.
        let mut broken = Board::from_string(solved).unwrap();
        let (a, b) = (broken.get(0), broken.get(1));
        broken.set(0, b);
        broken.set(1, a);
        assert!(!broken.is_solved());

        assert!(!Board::from_string(EASY).unwrap().is_solved());
    }

    #[test]
    fn test_board_serde_round_trip() {
        let board = Board::from_string(EASY).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_display_round_trip_shape() {
        let board = Board::from_string(EASY).unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered.lines().count(), 11);
        assert!(rendered.starts_with("5 3 . "));
    }
}
