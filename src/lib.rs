//! Sudoku rule engine: validity checking, backtracking solving, bounded
//! solution counting, and difficulty-driven puzzle carving.
//!
//! The engine is pure, synchronous computation over an 81-cell board. It has
//! no I/O and no state across calls; rendering, input handling, hints, and
//! persistence belong to the caller.
//!
//! # Example
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator, Solver};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Easy);
//! assert_eq!(puzzle.clue_count(), 47);
//!
//! let solver = Solver::new();
//! let solution = solver.solve(&puzzle.values).unwrap();
//! assert!(solution.is_solved());
//! ```

mod board;
mod generator;
mod solver;

pub use board::{Board, CELL_COUNT, SIDE};
pub use generator::{Difficulty, Generator, Puzzle};
pub use solver::Solver;
