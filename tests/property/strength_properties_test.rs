//! Property-based tests for the strength estimator.

use parola::pass::StrengthLabel;
use parola::pass::strength::{estimate, score};
use proptest::prelude::*;

proptest! {
    #[test]
    fn estimate_is_deterministic(password in ".*") {
        prop_assert_eq!(estimate(&password), estimate(&password));
    }

    #[test]
    fn score_never_exceeds_six(password in ".*") {
        prop_assert!(score(&password) <= 6);
    }

    #[test]
    fn short_single_class_passwords_are_very_weak(password in "[a-z]{0,11}") {
        let expected = if password.is_empty() { 0 } else { 1 };
        prop_assert_eq!(score(&password), expected);
        prop_assert_eq!(estimate(&password), StrengthLabel::VeryWeak);
    }

    #[test]
    fn all_classes_and_sixteen_chars_is_very_strong(
        tail in "[a-zA-Z0-9!@#$%^&*]{12,40}",
    ) {
        let password = format!("aA1!{tail}");
        prop_assert_eq!(score(&password), 6);
        prop_assert_eq!(estimate(&password), StrengthLabel::VeryStrong);
    }

    #[test]
    fn appending_never_lowers_the_score(password in ".{0,30}", extra in ".{0,30}") {
        let longer = format!("{password}{extra}");
        prop_assert!(score(&longer) >= score(&password));
    }
}

#[test]
fn reference_cases() {
    assert_eq!(estimate(""), StrengthLabel::VeryWeak);
    assert_eq!(score("aaaaaaaaaaaaaaaa"), 3);
    assert_eq!(estimate("aaaaaaaaaaaaaaaa"), StrengthLabel::Weak);
    assert_eq!(score("Aa1!Aa1!Aa1!Aa1!"), 6);
    assert_eq!(estimate("Aa1!Aa1!Aa1!Aa1!"), StrengthLabel::VeryStrong);
}
