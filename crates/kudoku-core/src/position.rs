//! Board coordinate types.

use std::fmt::{self, Display};

/// A `(row, col)` coordinate on the 9x9 board.
///
/// Both components are in `0..9`. Rows grow downward and columns grow to
/// the right, so `Position::new(0, 0)` is the top-left cell.
///
/// # Examples
///
/// ```
/// use kudoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row, 4);
/// assert_eq!(pos.col, 7);
/// assert_eq!(pos.index(), 4 * 9 + 7);
/// assert_eq!(pos.box_origin(), Position::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, `0..9`, growing downward.
    pub row: usize,
    /// Column index, `0..9`, growing to the right.
    pub col: usize,
}

impl Position {
    /// All 81 positions in row-major order.
    ///
    /// Row-major order is significant: it is the order in which the solver
    /// looks for the next empty cell, so it defines the shape of the search
    /// tree for a fixed candidate order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                row: i / 9,
                col: i % 9,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or larger.
    ///
    /// # Examples
    ///
    /// ```
    /// use kudoku_core::Position;
    ///
    /// let pos = Position::new(8, 8);
    /// assert_eq!(pos.index(), 80);
    /// ```
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row-major flattening index (`row * 9 + col`).
    ///
    /// This is the index of the cell in the canonical 81-integer
    /// serialization of a grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * 9 + self.col
    }

    /// Returns the top-left cell of the 3x3 box containing this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use kudoku_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_origin(), Position::new(0, 0));
    /// assert_eq!(Position::new(5, 4).box_origin(), Position::new(3, 3));
    /// assert_eq!(Position::new(8, 8).box_origin(), Position::new(6, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: self.row - self.row % 3,
            col: self.col - self.col % 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
