//! Password strength rating.
//!
//! A small fixed heuristic: one point per character class present, plus a
//! length bonus. The symbol set used for detection also counts the quote
//! characters, so it is slightly wider than the generator's symbol block.

use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

/// Characters counted as symbols when scoring.
pub const SYMBOL_DETECTION: &str = "!@#$%^&*()-_=+[]{};:,.<>/?'\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }

    fn from_score(score: u8) -> Self {
        match score {
            5.. => StrengthLabel::VeryStrong,
            4 => StrengthLabel::Strong,
            2..=3 => StrengthLabel::Weak,
            _ => StrengthLabel::VeryWeak,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw score in `0..=6`.
pub fn score(password: &str) -> u8 {
    let mut score = 0;

    if password.chars().any(char::is_lowercase) {
        score += 1;
    }
    if password.chars().any(char::is_uppercase) {
        score += 1;
    }
    if password.chars().any(is_decimal_digit) {
        score += 1;
    }
    if password.chars().any(|c| SYMBOL_DETECTION.contains(c)) {
        score += 1;
    }

    match password.chars().count() {
        16.. => score += 2,
        12..=15 => score += 1,
        _ => {}
    }

    score
}

/// Any Unicode decimal digit (category Nd), not just `0-9`.
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Rate a password.
pub fn estimate(password: &str) -> StrengthLabel {
    StrengthLabel::from_score(score(password))
}

/// Entropy in bits of a uniformly sampled password: `length * log2(charset_size)`.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}
