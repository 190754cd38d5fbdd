//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::RngExt as _;

/// Errors produced when parsing a [`PuzzleSeed`] from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 hex characters.
    #[display("expected 64 hex characters, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// The input contained a non-hex character.
    #[display("invalid character {character:?} in seed")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

/// A 32-byte seed identifying one generated puzzle.
///
/// The seed fully determines the generator's random stream, so a recorded
/// seed reproduces the same solved grid and the same removed cells. Seeds
/// render as 64 lowercase hex characters and parse back from the same
/// form (uppercase accepted).
///
/// # Examples
///
/// ```
/// use kudoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// # Ok::<(), kudoku_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != 64 {
            return Err(ParseSeedError::WrongLength { found });
        }

        let mut bytes = [0; 32];
        for (i, character) in s.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidCharacter { character })?;
            bytes[i / 2] = (bytes[i / 2] << 4) | u8::try_from(nibble).unwrap_or(0);
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let seed = PuzzleSeed::from_bytes(core::array::from_fn(|i| u8::try_from(i).unwrap()));
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_uppercase_accepted() {
        let lower = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let upper = lower.to_uppercase();
        assert_eq!(
            upper.parse::<PuzzleSeed>(),
            lower.parse::<PuzzleSeed>()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::WrongLength { found: 3 })
        );
        assert_eq!(
            "g".repeat(64).parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidCharacter { character: 'g' })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        // 256-bit collisions do not happen by accident.
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    proptest! {
        #[test]
        fn prop_bytes_round_trip(bytes in proptest::array::uniform32(any::<u8>())) {
            let seed = PuzzleSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
            prop_assert_eq!(seed.into_bytes(), bytes);
        }
    }
}
