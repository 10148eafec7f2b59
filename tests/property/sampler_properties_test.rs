//! Property-based tests for password sampling.

use std::num::NonZeroUsize;

use parola::pass::{self, Charset, EmptyCharsetError};
use parola::rng::SecureRandom;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn password_has_requested_length_and_only_charset_characters(
        length in 1usize..=256,
        pool in proptest::collection::vec(any::<char>(), 1..=64),
        seed in any::<u64>(),
    ) {
        let charset = Charset::from(pool);
        let length = NonZeroUsize::new(length).unwrap();
        let mut rng = SecureRandom::from_rng(StdRng::seed_from_u64(seed));

        let password = pass::generate_with(length, &charset, &mut rng).unwrap();

        prop_assert_eq!(password.len(), length.get());
        for c in password.as_str().chars() {
            prop_assert!(charset.contains(c));
        }
    }

    #[test]
    fn empty_charset_always_fails(length in 1usize..=10_000) {
        let length = NonZeroUsize::new(length).unwrap();
        prop_assert_eq!(
            pass::generate(length, &Charset::default()).map(|_| ()),
            Err(EmptyCharsetError)
        );
    }

    #[test]
    fn same_seed_gives_same_password(seed in any::<u64>()) {
        let charset = Charset::from("abcdefghijkmnopqrstuvwxyz23456789");
        let mut a = SecureRandom::from_rng(StdRng::seed_from_u64(seed));
        let mut b = SecureRandom::from_rng(StdRng::seed_from_u64(seed));

        let x = pass::generate_with(pass::DEFAULT_LENGTH, &charset, &mut a).unwrap();
        let y = pass::generate_with(pass::DEFAULT_LENGTH, &charset, &mut b).unwrap();
        prop_assert_eq!(x.as_str(), y.as_str());
    }
}
