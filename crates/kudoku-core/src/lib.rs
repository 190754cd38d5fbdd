//! Core data model for the kudoku Sudoku engine.
//!
//! This crate holds the board-state types shared by the solver and the
//! generator:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: a `(row, col)` board coordinate
//! - [`Grid`]: the 9x9 cell container and constraint-check primitive
//! - [`Difficulty`]: the label controlling how many cells a generated
//!   puzzle has removed
//!
//! The grid is a plain value type: searches mutate it in place through
//! [`Grid::set`] and [`Grid::clear`], and the caller keeps ownership
//! throughout.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! let pos = Position::new(0, 0);
//!
//! assert!(grid.is_valid(pos, Digit::D5));
//! grid.set(pos, Digit::D5);
//!
//! // 5 now conflicts everywhere in row 0, column 0, and the top-left box.
//! assert!(!grid.is_valid(Position::new(0, 8), Digit::D5));
//! assert!(!grid.is_valid(Position::new(8, 0), Digit::D5));
//! assert!(!grid.is_valid(Position::new(2, 2), Digit::D5));
//! ```

pub mod difficulty;
pub mod digit;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    difficulty::Difficulty,
    digit::Digit,
    grid::{Grid, GridError, ParseGridError},
    position::Position,
};
