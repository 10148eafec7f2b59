//! Property-based tests for charset building.

use parola::pass::GenerationOptions;
use parola::pass::charset::{self, AMBIGUOUS, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use proptest::prelude::*;

fn options() -> impl Strategy<Value = GenerationOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(include_lower, include_upper, include_digits, include_symbols, exclude_ambiguous)| {
            GenerationOptions {
                include_lower,
                include_upper,
                include_digits,
                include_symbols,
                exclude_ambiguous,
            }
        },
    )
}

fn enabled_sources(options: &GenerationOptions) -> String {
    let mut union = String::new();
    if options.include_lower {
        union.push_str(LOWERCASE);
    }
    if options.include_upper {
        union.push_str(UPPERCASE);
    }
    if options.include_digits {
        union.push_str(DIGITS);
    }
    if options.include_symbols {
        union.push_str(SYMBOLS);
    }
    union
}

proptest! {
    #[test]
    fn enabled_classes_give_non_empty_pool_from_their_union(options in options()) {
        prop_assume!(options.any_class() && !options.exclude_ambiguous);
        let charset = charset::build(&options);
        let union = enabled_sources(&options);

        prop_assert!(!charset.is_empty());
        prop_assert_eq!(charset.len(), union.chars().count());
        for c in charset.iter() {
            prop_assert!(union.contains(c), "{:?} not in enabled sources", c);
        }
    }

    #[test]
    fn no_class_means_empty_pool(exclude_ambiguous in any::<bool>()) {
        let options = GenerationOptions { exclude_ambiguous, ..GenerationOptions::NONE };
        prop_assert!(charset::build(&options).is_empty());
    }

    #[test]
    fn excluding_ambiguous_removes_every_ambiguous_character(options in options()) {
        prop_assume!(options.exclude_ambiguous);
        let charset = charset::build(&options);
        for c in AMBIGUOUS {
            prop_assert!(!charset.contains(*c));
        }
    }

    #[test]
    fn building_is_deterministic(options in options()) {
        prop_assert_eq!(charset::build(&options), charset::build(&options));
    }
}
