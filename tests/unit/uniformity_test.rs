//! Chi-square check that the sampler draws uniformly from the charset.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use parola::pass::{self, Charset, GenerationOptions, charset};
use parola::rng::{RandomSource, SecureRandom};

const DRAWS: usize = 100_000;
const LENGTH: usize = 20;

/// Pearson's statistic over every character in `charset`.
fn chi_square<R: RandomSource>(charset: &Charset, rng: &mut R) -> f64 {
    let length = NonZeroUsize::new(LENGTH).unwrap();
    let mut counts: HashMap<char, usize> = charset.iter().map(|c| (c, 0)).collect();

    for password in pass::generate_batch(length, charset, DRAWS / LENGTH, rng).unwrap() {
        for c in password.as_str().chars() {
            *counts.get_mut(&c).expect("character outside charset") += 1;
        }
    }

    let expected = DRAWS as f64 / charset.len() as f64;
    counts
        .values()
        .map(|&observed| {
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Upper chi-square quantile at p = 1e-6 (Wilson-Hilferty).
fn critical_value(df: f64) -> f64 {
    const Z: f64 = 4.753;
    let k = 2.0 / (9.0 * df);
    df * (1.0 - k + Z * k.sqrt()).powi(3)
}

#[test]
fn default_pool_is_sampled_uniformly() {
    let charset = charset::build(&GenerationOptions::default());
    assert_eq!(charset.len(), 79);

    let stat = chi_square(&charset, &mut SecureRandom::new());
    let limit = critical_value((charset.len() - 1) as f64);
    assert!(stat < limit, "chi-square {stat:.1} >= {limit:.1}");
}

#[test]
fn small_pool_is_sampled_uniformly() {
    let charset = charset::build(&GenerationOptions {
        include_lower: true,
        ..GenerationOptions::NONE
    });
    assert_eq!(charset.len(), 26);

    let stat = chi_square(&charset, &mut SecureRandom::new());
    let limit = critical_value(25.0);
    assert!(stat < limit, "chi-square {stat:.1} >= {limit:.1}");
}

/// Reduces a 5-bit secure value modulo the bound, skewing toward low indices.
struct ModuloBiased(SecureRandom);

impl RandomSource for ModuloBiased {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.next_index(32) % bound
    }
}

#[test]
fn check_detects_a_biased_source() {
    let charset = Charset::from("abcdefghijklmnopqrstuvwxy");
    let stat = chi_square(&charset, &mut ModuloBiased(SecureRandom::new()));
    assert!(stat > critical_value(24.0), "bias went unnoticed: {stat:.1}");
}
