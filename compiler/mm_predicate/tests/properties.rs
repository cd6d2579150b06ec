//! Property-based tests for the predicate algebra.
//!
//! Predicates are generated over a tiny alphabet (`a`, `b`, `/`, `*`, `**`)
//! so that random pairs overlap often enough to exercise every
//! intersection case.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mm_predicate::{to_normal_predicate, Algebra, Matcher, NormalPredicate};
use proptest::prelude::*;

// -- Strategies --

/// A single alternative with no two wildcards adjacent.
fn alternative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "/", "*", "**"]), 0..6).prop_map(
        |tokens| {
            let mut out = String::new();
            for token in tokens {
                if token.starts_with('*') && out.ends_with('*') {
                    continue;
                }
                out.push_str(token);
            }
            out
        },
    )
}

/// A source pattern with one to three alternatives.
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(alternative_strategy(), 1..4).prop_map(|alts| alts.join("|"))
}

fn discriminant_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab/]{0,5}").expect("valid regex")
}

fn normal(pattern: &str) -> NormalPredicate {
    to_normal_predicate(pattern).expect("generated patterns are valid")
}

// -- Normalization --

proptest! {
    #[test]
    fn normalization_is_idempotent(pattern in pattern_strategy()) {
        let once = normal(&pattern);
        let twice = normal(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_preserves_matches(pattern in pattern_strategy(), d in discriminant_strategy()) {
        let source = Matcher::from_ast(&mm_predicate::parse_predicate(&pattern).unwrap());
        let canonical = Matcher::from_normal(normal(&pattern));
        prop_assert_eq!(source.is_match(&d), canonical.is_match(&d));
    }
}

// -- Subset --

proptest! {
    #[test]
    fn subset_is_reflexive(pattern in pattern_strategy()) {
        let p = normal(&pattern);
        prop_assert!(Algebra::new().is_subset_of(p, p));
    }

    #[test]
    fn subset_is_transitive(
        a in alternative_strategy(),
        b in alternative_strategy(),
        c in alternative_strategy(),
    ) {
        let (a, b, c) = (normal(&a), normal(&b), normal(&c));
        let mut alg = Algebra::new();
        prop_assume!(alg.is_subset_of(a, b) && alg.is_subset_of(b, c));
        prop_assert!(alg.is_subset_of(a, c));
    }

    #[test]
    fn subset_is_sound(a in alternative_strategy(), b in alternative_strategy(), d in discriminant_strategy()) {
        let (a, b) = (normal(&a), normal(&b));
        prop_assume!(Algebra::new().is_subset_of(a, b));
        if Matcher::from_normal(a).is_match(&d) {
            prop_assert!(Matcher::from_normal(b).is_match(&d));
        }
    }
}

// -- Intersection --

proptest! {
    #[test]
    fn intersection_is_commutative(a in pattern_strategy(), b in pattern_strategy()) {
        let (a, b) = (normal(&a), normal(&b));
        let mut alg = Algebra::new();
        prop_assert_eq!(alg.intersect(a, b), alg.intersect(b, a));
    }

    #[test]
    fn intersection_of_subset_is_subset(a in alternative_strategy(), b in alternative_strategy()) {
        let (a, b) = (normal(&a), normal(&b));
        let mut alg = Algebra::new();
        prop_assume!(alg.is_subset_of(a, b));
        prop_assert_eq!(alg.intersect(a, b), a);
    }

    #[test]
    fn intersection_recognizes_common_strings(
        a in alternative_strategy(),
        b in alternative_strategy(),
        d in discriminant_strategy(),
    ) {
        let (a, b) = (normal(&a), normal(&b));
        let q = Algebra::new().intersect(a, b);
        let both = Matcher::from_normal(a).is_match(&d) && Matcher::from_normal(b).is_match(&d);
        prop_assert_eq!(Matcher::from_normal(q).is_match(&d), both, "{} ∩ {} = {}", a, b, q);
    }
}
