//! Random password generation.
//!
//! Every password contains at least one lowercase letter, one uppercase
//! letter, one digit and one punctuation character. The remaining characters
//! are drawn from all four sets and the result is shuffled.

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

/// Shortest password that can hold one character from each set.
pub const MIN_LENGTH: usize = 4;

/// Default upper bound on password length.
pub const DEFAULT_MAX_LENGTH: usize = 1024;

/// ASCII lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Errors raised while reading or honouring a requested length.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The requested length was not a whole number.
    #[error("Please enter a valid number.")]
    InvalidNumber {
        /// The text that failed to parse.
        input: String,
    },
    /// The requested length is below [`MIN_LENGTH`].
    #[error("Password length must be at least 4.")]
    TooShort {
        /// The requested length.
        length: usize,
    },
    /// The requested length exceeds the configured maximum.
    #[error("Password length must be at most {max}.")]
    TooLong {
        /// The requested length.
        length: usize,
        /// The configured maximum.
        max: usize,
    },
}

/// Parse a user-supplied password length.
///
/// # Errors
///
/// Returns [`PasswordError::InvalidNumber`] if `input` is not a non-negative
/// whole number.
pub fn parse_length(input: &str) -> Result<usize, PasswordError> {
    input
        .trim()
        .parse()
        .map_err(|_| PasswordError::InvalidNumber {
            input: input.to_string(),
        })
}

/// Password generator with an upper bound on length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    max_length: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl Generator {
    /// Creates a generator that refuses lengths above `max_length`.
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Generate a password using the thread-local random number generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is below [`MIN_LENGTH`] or above the
    /// generator's maximum.
    pub fn generate(&self, length: usize) -> Result<String, PasswordError> {
        self.generate_with(length, &mut rand::rng())
    }

    /// Generate a password from the given random number generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is below [`MIN_LENGTH`] or above the
    /// generator's maximum.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<String, PasswordError> {
        if length < MIN_LENGTH {
            return Err(PasswordError::TooShort { length });
        }
        if length > self.max_length {
            return Err(PasswordError::TooLong {
                length,
                max: self.max_length,
            });
        }

        let all = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION].concat();

        let mut password = Vec::with_capacity(length);
        for set in [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION] {
            password.push(pick(set, rng));
        }
        while password.len() < length {
            password.push(pick(&all, rng));
        }
        password.shuffle(rng);

        tracing::debug!(length, "generated password");
        Ok(password.into_iter().collect())
    }
}

/// Generate a password of the given length with the default limits.
///
/// # Errors
///
/// Returns an error if `length` is below [`MIN_LENGTH`] or above
/// [`DEFAULT_MAX_LENGTH`].
pub fn generate_password(length: usize) -> Result<String, PasswordError> {
    Generator::default().generate(length)
}

/// Choose one character uniformly from a non-empty ASCII set.
fn pick<R: Rng + ?Sized>(set: &str, rng: &mut R) -> char {
    let bytes = set.as_bytes();
    char::from(bytes[rng.random_range(0..bytes.len())])
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use test_case::test_case;

    use super::*;

    fn covers_every_set(password: &str) -> bool {
        [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION]
            .iter()
            .all(|set| password.chars().any(|c| set.contains(c)))
    }

    #[test_case(4; "minimum")]
    #[test_case(5; "one extra")]
    #[test_case(12; "default")]
    #[test_case(64; "long")]
    fn generates_requested_length_with_every_set(length: usize) {
        let mut rng = StdRng::seed_from_u64(7);
        let password = Generator::default().generate_with(length, &mut rng).unwrap();

        assert_eq!(password.chars().count(), length);
        assert!(covers_every_set(&password), "{password}");
    }

    #[test]
    fn only_uses_known_characters() {
        let all = [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION].concat();
        let password = generate_password(256).unwrap();
        assert!(password.chars().all(|c| all.contains(c)));
    }

    #[test]
    fn same_seed_gives_same_password() {
        let generator = Generator::default();
        let first = generator
            .generate_with(16, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = generator
            .generate_with(16, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn required_characters_are_not_always_first() {
        let generator = Generator::default();
        let mut rng = StdRng::seed_from_u64(3);
        let shuffled = (0..32).any(|_| {
            let password = generator.generate_with(4, &mut rng).unwrap();
            !password.starts_with(|c: char| c.is_ascii_lowercase())
        });
        assert!(shuffled);
    }

    #[test_case(0; "zero")]
    #[test_case(3; "three")]
    fn rejects_short_lengths(length: usize) {
        let error = generate_password(length).unwrap_err();
        assert_eq!(error, PasswordError::TooShort { length });
        assert_eq!(error.to_string(), "Password length must be at least 4.");
    }

    #[test]
    fn rejects_lengths_above_maximum() {
        let error = Generator::new(8).generate(9).unwrap_err();
        assert_eq!(error, PasswordError::TooLong { length: 9, max: 8 });
    }

    #[test]
    fn parses_lengths() {
        assert_eq!(parse_length(" 16 ").unwrap(), 16);
    }

    #[test_case("abc"; "letters")]
    #[test_case("-5"; "negative")]
    #[test_case("4.5"; "fraction")]
    #[test_case(""; "empty")]
    fn rejects_non_numeric_lengths(input: &str) {
        let error = parse_length(input).unwrap_err();
        assert_eq!(error.to_string(), "Please enter a valid number.");
    }
}
