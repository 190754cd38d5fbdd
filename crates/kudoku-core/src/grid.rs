//! The 9x9 board container and constraint-check primitive.

use std::{
    fmt::{self, Write as _},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{digit::Digit, position::Position};

/// Errors produced when constructing or validating a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// A stored cell value was outside the range 0-9.
    #[display("cell value {value} is outside the range 0-9")]
    InvalidCellValue {
        /// The offending value.
        value: u8,
    },
    /// Two filled cells sharing a row, column, or box hold the same digit.
    #[display("digit {digit} at {position} conflicts with another cell")]
    ConflictingClue {
        /// The position of a cell involved in the conflict.
        position: Position,
        /// The duplicated digit.
        digit: Digit,
    },
}

/// Errors produced when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cell characters found.
        found: usize,
    },
    /// The input contained a character that is not a cell or whitespace.
    #[display("invalid character {character:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

/// A 9x9 sudoku board.
///
/// Each cell holds `Option<Digit>`, with `None` meaning empty (the value
/// `0` in the canonical integer flattening). The grid is a plain value
/// type mutated in place; whoever runs a search over it owns it for the
/// duration of the search.
///
/// A grid is *valid* when no two filled cells sharing a row, column, or
/// 3x3 box hold the same digit. [`Grid::is_valid`] answers whether a
/// single placement preserves that invariant; [`Grid::validate`] checks
/// every filled cell at once.
///
/// # Text format
///
/// [`Display`] renders the grid as 81 characters in row-major order,
/// digits `1`-`9` for filled cells and `_` for empty ones. [`FromStr`]
/// accepts the same format, also allowing `.` and `0` for empty cells and
/// ignoring all whitespace, so multi-line layouts parse too:
///
/// ```
/// use kudoku_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert_eq!(grid.filled_count(), 30);
/// # Ok::<(), kudoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places `digit` at `pos`, overwriting any previous value.
    ///
    /// No constraint check is performed; callers that care use
    /// [`Grid::is_valid`] first, the way the solver does.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Clears the cell at `pos` back to empty.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order.
    ///
    /// Row-major order is significant: the solver always branches on the
    /// cell returned here, so this scan defines the search order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kudoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
    ///
    /// grid.set(Position::new(0, 0), Digit::D1);
    /// assert_eq!(grid.first_empty(), Some(Position::new(0, 1)));
    /// ```
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|i| Position::ALL[i])
    }

    /// Returns `true` if placing `digit` at `pos` would not duplicate it
    /// within `pos`'s row, column, or 3x3 box.
    ///
    /// The cell at `pos` itself is ignored, so the check can also be used
    /// to re-validate an already-placed digit. No side effects; at most 27
    /// cells are inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use kudoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(4, 4), Digit::D5);
    ///
    /// assert!(!grid.is_valid(Position::new(4, 0), Digit::D5)); // same row
    /// assert!(!grid.is_valid(Position::new(0, 4), Digit::D5)); // same column
    /// assert!(!grid.is_valid(Position::new(3, 3), Digit::D5)); // same box
    /// assert!(grid.is_valid(Position::new(0, 0), Digit::D5));
    /// ```
    #[must_use]
    pub fn is_valid(&self, pos: Position, digit: Digit) -> bool {
        for i in 0..9 {
            let in_row = Position::new(pos.row, i);
            if in_row != pos && self.get(in_row) == Some(digit) {
                return false;
            }
            let in_col = Position::new(i, pos.col);
            if in_col != pos && self.get(in_col) == Some(digit) {
                return false;
            }
        }

        let origin = pos.box_origin();
        for row in origin.row..origin.row + 3 {
            for col in origin.col..origin.col + 3 {
                let in_box = Position::new(row, col);
                if in_box != pos && self.get(in_box) == Some(digit) {
                    return false;
                }
            }
        }

        true
    }

    /// Checks every filled cell against the row/column/box invariant.
    ///
    /// The solver does not call this; it only prevents *new* conflicting
    /// placements. Callers that want to reject an inconsistent set of
    /// clues up front (rather than waiting for the search to exhaust
    /// itself) run this first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ConflictingClue`] naming one cell of the first
    /// conflicting pair found in row-major order.
    pub fn validate(&self) -> Result<(), GridError> {
        for pos in Position::ALL {
            if let Some(digit) = self.get(pos)
                && !self.is_valid(pos, digit)
            {
                return Err(GridError::ConflictingClue {
                    position: pos,
                    digit,
                });
            }
        }
        Ok(())
    }

    /// Flattens the grid to 81 integers in row-major order, 0 for empty.
    ///
    /// This is the canonical serialization used for persistence; it
    /// round-trips losslessly through [`Grid::from_values`].
    #[must_use]
    pub fn to_values(&self) -> [u8; 81] {
        let mut values = [0; 81];
        for (value, cell) in values.iter_mut().zip(&self.cells) {
            *value = cell.map_or(0, Digit::value);
        }
        values
    }

    /// Rebuilds a grid from 81 row-major integers, 0 meaning empty.
    ///
    /// Only the value range is checked; conflicting clues are accepted
    /// here and surfaced by [`Grid::validate`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellValue`] for any value above 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use kudoku_core::Grid;
    ///
    /// let mut values = [0; 81];
    /// values[0] = 5;
    /// let grid = Grid::from_values(values)?;
    /// assert_eq!(grid.to_values(), values);
    ///
    /// values[1] = 12;
    /// assert!(Grid::from_values(values).is_err());
    /// # Ok::<(), kudoku_core::GridError>(())
    /// ```
    pub fn from_values(values: [u8; 81]) -> Result<Self, GridError> {
        let mut cells = [None; 81];
        for (cell, &value) in cells.iter_mut().zip(&values) {
            if value > 9 {
                return Err(GridError::InvalidCellValue { value });
            }
            *cell = Digit::from_value(value);
        }
        Ok(Self { cells })
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl fmt::Display for Grid {
    /// Renders 81 cell characters in row-major order.
    ///
    /// The alternate form (`{:#}`) renders nine rows with boxes separated
    /// by spaces, the layout accepted back by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            if f.alternate() && pos.index() > 0 {
                if pos.col == 0 {
                    f.write_char('\n')?;
                } else if pos.col % 3 == 0 {
                    f.write_char(' ')?;
                }
            }
            match self.get(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_char('_')?,
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = if matches!(character, '_' | '.' | '0') {
                None
            } else if let Some(value) = character.to_digit(10) {
                u8::try_from(value).ok().and_then(Digit::from_value)
            } else {
                return Err(ParseGridError::InvalidCharacter { character });
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { found: count });
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const WORKED_EXAMPLE: &str = "\
        53__7____\
        6__195___\
        _98____6_\
        8___6___3\
        4__8_3__1\
        7___2___6\
        _6____28_\
        ___419__5\
        ____8__79";

    fn transposed(grid: &Grid) -> Grid {
        let mut out = Grid::new();
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                out.set(Position::new(pos.col, pos.row), digit);
            }
        }
        out
    }

    #[test]
    fn test_new_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_full());
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_set_clear() {
        let mut grid = Grid::new();
        let pos = Position::new(3, 7);
        grid.set(pos, Digit::D2);
        assert_eq!(grid.get(pos), Some(Digit::D2));
        assert_eq!(grid[pos], Some(Digit::D2));
        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = Grid::new();
        // Fill all of row 0 except the last cell, plus the start of row 1.
        for col in 0..8 {
            grid.set(Position::new(0, col), Digit::ALL[col]);
        }
        grid.set(Position::new(1, 0), Digit::D9);
        assert_eq!(grid.first_empty(), Some(Position::new(0, 8)));

        grid.set(Position::new(0, 8), Digit::D9);
        assert_eq!(grid.first_empty(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_is_valid_row_col_box() {
        let mut grid = Grid::new();
        grid.set(Position::new(4, 4), Digit::D7);

        assert!(!grid.is_valid(Position::new(4, 8), Digit::D7));
        assert!(!grid.is_valid(Position::new(8, 4), Digit::D7));
        assert!(!grid.is_valid(Position::new(5, 5), Digit::D7));

        // Different digit, or same digit outside all three houses.
        assert!(grid.is_valid(Position::new(4, 8), Digit::D1));
        assert!(grid.is_valid(Position::new(0, 0), Digit::D7));
    }

    #[test]
    fn test_is_valid_ignores_own_cell() {
        let mut grid = Grid::new();
        let pos = Position::new(2, 2);
        grid.set(pos, Digit::D3);
        assert!(grid.is_valid(pos, Digit::D3));
    }

    #[test]
    fn test_validate_accepts_worked_example() {
        let grid: Grid = WORKED_EXAMPLE.parse().unwrap();
        assert_eq!(grid.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        let mut grid: Grid = WORKED_EXAMPLE.parse().unwrap();
        // Row 0 already holds a 5 at (0, 0).
        grid.set(Position::new(0, 3), Digit::D5);
        let err = grid.validate().unwrap_err();
        assert!(matches!(err, GridError::ConflictingClue { .. }));
    }

    #[test]
    fn test_values_round_trip_worked_example() {
        let grid: Grid = WORKED_EXAMPLE.parse().unwrap();
        let values = grid.to_values();
        assert_eq!(&values[..9], &[5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(Grid::from_values(values).unwrap(), grid);
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let mut values = [0; 81];
        values[40] = 10;
        assert_eq!(
            Grid::from_values(values),
            Err(GridError::InvalidCellValue { value: 10 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let grid: Grid = WORKED_EXAMPLE.parse().unwrap();
        assert_eq!(format!("{grid}").parse::<Grid>().unwrap(), grid);
        assert_eq!(format!("{grid:#}").parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { character: 'x' })
        );
        assert_eq!(
            "123".parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { found: 3 })
        );
        assert_eq!(
            "1".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { found: 82 })
        );
        // The reported count covers all surplus cells, not just the first.
        assert_eq!(
            "5".repeat(100).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { found: 100 })
        );
    }

    proptest! {
        #[test]
        fn prop_values_round_trip(values in proptest::collection::vec(0u8..=9, 81)) {
            let values: [u8; 81] = values.try_into().unwrap();
            let grid = Grid::from_values(values).unwrap();
            prop_assert_eq!(grid.to_values(), values);
        }

        #[test]
        fn prop_is_valid_transposition_symmetry(
            values in proptest::collection::vec(0u8..=9, 81),
            row in 0usize..9,
            col in 0usize..9,
            digit in 1u8..=9,
        ) {
            let values: [u8; 81] = values.try_into().unwrap();
            let grid = Grid::from_values(values).unwrap();
            let digit = Digit::from_value(digit).unwrap();
            prop_assert_eq!(
                grid.is_valid(Position::new(row, col), digit),
                transposed(&grid).is_valid(Position::new(col, row), digit)
            );
        }
    }
}
