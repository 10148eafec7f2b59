//! Character set building for password generation.

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?";

/// Visually confusable characters dropped when `exclude_ambiguous` is set.
pub const AMBIGUOUS: &[char] = &[
    'I', 'l', '1', 'O', '0', '|', '`', '\'', '"', '~', ',', ';', ':', '.', ' ',
];

/// Which character classes go into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl GenerationOptions {
    /// Every flag off. Builds an empty charset.
    pub const NONE: Self = Self {
        include_lower: false,
        include_upper: false,
        include_digits: false,
        include_symbols: false,
        exclude_ambiguous: false,
    };

    /// True if at least one character class is enabled.
    pub fn any_class(&self) -> bool {
        self.include_lower || self.include_upper || self.include_digits || self.include_symbols
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_lower: true,
            include_upper: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: true,
        }
    }
}

/// Ordered pool of characters eligible for sampling.
///
/// Duplicates are kept if the sources overlap; they weight sampling toward
/// the repeated characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset(Vec<char>);

impl Charset {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl From<&str> for Charset {
    fn from(s: &str) -> Self {
        Charset(s.chars().collect())
    }
}

impl From<Vec<char>> for Charset {
    fn from(chars: Vec<char>) -> Self {
        Charset(chars)
    }
}

/// Build the character pool for the given options.
///
/// Blocks are appended lowercase, uppercase, digits, symbols; ambiguous
/// characters are then stripped from the whole pool.
pub fn build(options: &GenerationOptions) -> Charset {
    let mut chars: Vec<char> = Vec::new();

    if options.include_lower {
        chars.extend(LOWERCASE.chars());
    }

    if options.include_upper {
        chars.extend(UPPERCASE.chars());
    }

    if options.include_digits {
        chars.extend(DIGITS.chars());
    }

    if options.include_symbols {
        chars.extend(SYMBOLS.chars());
    }

    if options.exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }

    debug!(size = chars.len(), ?options, "built charset");
    Charset(chars)
}

/// Effective charset size for the options (for entropy display).
pub fn size(options: &GenerationOptions) -> usize {
    build(options).len()
}
