//! Puzzle difficulty labels.

use std::{convert::Infallible, fmt, str::FromStr};

/// How many cells are removed from a solved grid to form a puzzle.
///
/// Difficulty is nothing more than a removal count; the engine does not
/// rate puzzles beyond it.
///
/// # Examples
///
/// ```
/// use kudoku_core::Difficulty;
///
/// assert_eq!(Difficulty::Easy.remove_count(), 35);
/// assert_eq!(Difficulty::Medium.remove_count(), 45);
/// assert_eq!(Difficulty::Hard.remove_count(), 55);
///
/// // Unrecognized labels fall back to medium rather than failing.
/// assert_eq!(Difficulty::from_label("bogus"), Difficulty::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 35 cells removed.
    Easy,
    /// 45 cells removed (the default).
    #[default]
    Medium,
    /// 55 cells removed.
    Hard,
}

impl Difficulty {
    /// Returns the number of cells cleared from a solved grid.
    #[must_use]
    pub const fn remove_count(self) -> usize {
        match self {
            Self::Easy => 35,
            Self::Medium => 45,
            Self::Hard => 55,
        }
    }

    /// Parses a difficulty label, case-insensitively.
    ///
    /// Anything other than `easy`, `medium`, or `hard` is silently treated
    /// as [`Difficulty::Medium`]; callers never see a parse failure.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("easy") {
            Self::Easy
        } else if label.eq_ignore_ascii_case("hard") {
            Self::Hard
        } else {
            Self::Medium
        }
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(label)
    }
}
