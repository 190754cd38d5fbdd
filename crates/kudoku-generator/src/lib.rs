//! Sudoku puzzle generation.
//!
//! A [`PuzzleGenerator`] drives the backtracking search in fill mode
//! (freshly shuffled candidate order at every cell) to produce a fully
//! solved grid, then clears a difficulty-dependent number of randomly
//! chosen cells to derive the puzzle. The untouched solved grid is kept
//! as the answer key.
//!
//! Generation is deterministic given a [`PuzzleSeed`]; [`PuzzleGenerator::generate`]
//! draws a fresh random seed and records it in the output so any puzzle
//! can be reproduced later.
//!
//! The generator does not check that the derived puzzle has a unique
//! solution; difficulty is purely the number of removed cells.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::Difficulty;
//! use kudoku_generator::PuzzleGenerator;
//! use kudoku_solver::BacktrackingSolver;
//!
//! let solver = BacktrackingSolver::new();
//! let generator = PuzzleGenerator::new(&solver);
//!
//! let puzzle = generator.generate(Difficulty::Easy);
//! assert!(puzzle.solution.is_full());
//! assert_eq!(puzzle.problem.filled_count(), 81 - 35);
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
