//! Password generation.

use std::fmt;
use std::num::NonZeroUsize;

use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

use super::charset::Charset;
use crate::rng::{RandomSource, SecureRandom};

/// Length used when nothing else is configured.
pub const DEFAULT_LENGTH: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

/// Returned when sampling from a charset with no characters in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character set is empty, enable at least one character class")]
pub struct EmptyCharsetError;

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a password with the thread-local secure generator.
pub fn generate(length: NonZeroUsize, charset: &Charset) -> Result<Password, EmptyCharsetError> {
    generate_with(length, charset, &mut SecureRandom::new())
}

/// Generate a password drawing indices from `rng`.
///
/// Each character is picked independently and uniformly from `charset`.
pub fn generate_with<R: RandomSource + ?Sized>(
    length: NonZeroUsize,
    charset: &Charset,
    rng: &mut R,
) -> Result<Password, EmptyCharsetError> {
    let chars = charset.as_slice();
    if chars.is_empty() {
        return Err(EmptyCharsetError);
    }

    // Sized once so filling never reallocates; an impossible size just skips it.
    let mut pass = String::new();
    let _ = pass.try_reserve_exact(length.get());
    for _ in 0..length.get() {
        pass.push(chars[rng.next_index(chars.len())]);
    }
    Ok(Password(pass))
}

/// Generate `count` passwords from the same charset.
pub fn generate_batch<R: RandomSource + ?Sized>(
    length: NonZeroUsize,
    charset: &Charset,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>, EmptyCharsetError> {
    if charset.is_empty() {
        return Err(EmptyCharsetError);
    }

    let passwords = (0..count)
        .map(|_| generate_with(length, charset, &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count, length = length.get(), charset = charset.len(), "generated passwords");
    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out a fixed sequence of raw values, reduced into range.
    struct Cycle {
        values: Vec<usize>,
        pos: usize,
    }

    impl Cycle {
        fn new(values: &[usize]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }
    }

    impl RandomSource for Cycle {
        fn next_index(&mut self, bound: usize) -> usize {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v % bound
        }
    }

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn picks_characters_at_drawn_indices() {
        let charset = Charset::from("abcd");
        let mut rng = Cycle::new(&[0, 1, 2, 3]);
        let pass = generate_with(len(6), &charset, &mut rng).unwrap();
        assert_eq!(pass.as_str(), "abcdab");
    }

    #[test]
    fn first_and_last_characters_are_reachable() {
        let charset = Charset::from("xyz");
        let mut rng = Cycle::new(&[0, 2]);
        let pass = generate_with(len(4), &charset, &mut rng).unwrap();
        assert_eq!(pass.as_str(), "xzxz");
    }

    #[test]
    fn empty_charset_fails() {
        let mut rng = Cycle::new(&[0]);
        for n in [1, 20, 500] {
            assert_eq!(
                generate_with(len(n), &Charset::default(), &mut rng),
                Err(EmptyCharsetError)
            );
        }
    }

    #[test]
    fn default_length_is_twenty() {
        let charset = Charset::from("ab");
        let pass = generate(DEFAULT_LENGTH, &charset).unwrap();
        assert_eq!(pass.len(), 20);
        assert!(pass.as_str().chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn batch_returns_requested_count() {
        let charset = Charset::from("0123456789");
        let mut rng = SecureRandom::new();
        let passwords = generate_batch(len(12), &charset, 5, &mut rng).unwrap();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 12));
    }

    #[test]
    fn batch_with_empty_charset_fails_even_for_zero_count() {
        let mut rng = SecureRandom::new();
        assert!(generate_batch(len(12), &Charset::default(), 0, &mut rng).is_err());
    }

    #[test]
    fn debug_output_hides_password() {
        let pass = generate(len(8), &Charset::from("q")).unwrap();
        let shown = format!("{pass:?}");
        assert!(!shown.contains("qqqq"));
        assert_eq!(shown, "Password(<8 chars>)");
    }
}
