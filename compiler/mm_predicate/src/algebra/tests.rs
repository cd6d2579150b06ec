#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::intersect::splits;
use super::*;
use crate::to_normal_predicate;

fn np(pattern: &str) -> NormalPredicate {
    to_normal_predicate(pattern).unwrap()
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(a, b)| ((*a).to_owned(), (*b).to_owned()))
        .collect()
}

// ── Subset ──────────────────────────────────────────────────────────

#[test]
fn subset_identity_shortcuts() {
    let mut alg = Algebra::new();
    let foo = np("foo");
    assert!(alg.is_subset_of(foo, foo));
    assert!(alg.is_subset_of(NormalPredicate::NONE, foo));
    assert!(alg.is_subset_of(foo, NormalPredicate::ALL));
    assert!(!alg.is_subset_of(NormalPredicate::ALL, foo));
    assert!(!alg.is_subset_of(foo, NormalPredicate::NONE));
    assert!(alg.is_subset_of(NormalPredicate::NONE, NormalPredicate::NONE));
}

#[test]
fn subset_wildcards() {
    let cases = [
        ("/foo", "/*", true),
        ("/foo/bar", "/*", false),
        ("/foo/bar", "/**", true),
        ("/*", "/**", true),
        ("/**", "/*", false),
        ("a*b", "a*", true),
        ("a**", "a*", false),
        ("*", "**", true),
        ("**", "*", false),
        ("x.y", "x.*", true),
        ("xy", "x.*", false),
        ("", "*", true),
        ("*", "", false),
        ("a*a", "*a", true),
    ];
    let mut alg = Algebra::new();
    for (sub, sup, expected) in cases {
        assert_eq!(alg.is_subset_of(np(sub), np(sup)), expected, "{sub} ⊆ {sup}");
    }
}

#[test]
fn subset_alternation() {
    let mut alg = Algebra::new();
    assert!(alg.is_subset_of(np("a|b"), np("*")));
    assert!(alg.is_subset_of(np("a"), np("b|a*")));
    assert!(!alg.is_subset_of(np("a/b|c"), np("*")));
    assert!(alg.is_subset_of(np("a/b|c"), np("*/*|c")));
}

#[test]
fn recognisers_are_cached() {
    let mut alg = Algebra::new();
    assert!(alg.is_subset_of(np("/a"), np("/*")));
    assert!(alg.is_subset_of(np("/b"), np("/*")));
    assert_eq!(alg.recogniser_count(), 1);
}

#[test]
fn free_subset_function() {
    assert!(is_subset_of(np("/foo"), np("/*")));
    assert!(!is_subset_of(np("/*"), np("/foo")));
}

// ── Intersection ────────────────────────────────────────────────────

#[test]
fn intersection_goldens() {
    let cases = [
        ("foo", "bar", "∅"),
        ("a*", "*a", "a|a*a"),
        ("test.*", "*.js", "test.*.js|test.js"),
        ("a*", "*b", "a*b"),
        ("/foo/*", "/*/bar", "/foo/bar"),
        ("a/*", "*/b", "a/b"),
        ("*A*", "*B*", "*A*B*|*B*A*"),
        ("**", "x/y", "x/y"),
        ("*", "", ""),
        ("a", "", "∅"),
        ("/*", "/foo", "/foo"),
        ("∅", "**", "∅"),
        ("a|b", "b|c", "b"),
    ];
    let mut alg = Algebra::new();
    for (a, b, expected) in cases {
        assert_eq!(alg.intersect(np(a), np(b)).as_str(), expected, "{a} ∩ {b}");
    }
}

#[test]
fn intersection_is_commutative() {
    let preds = ["a*", "*a", "test.*", "*.js", "/**", "/*/x", "*A*", "*B*"];
    let mut alg = Algebra::new();
    for a in preds {
        for b in preds {
            assert_eq!(alg.intersect(np(a), np(b)), alg.intersect(np(b), np(a)), "{a} ∩ {b}");
        }
    }
}

#[test]
fn intersection_of_subset_is_the_subset() {
    let mut alg = Algebra::new();
    assert_eq!(alg.intersect(np("/foo"), np("/*")), np("/foo"));
    assert_eq!(alg.intersect(np("/**"), np("/a/*.js")), np("/a/*.js"));
}

#[test]
fn intersections_are_memoized() {
    let mut alg = Algebra::new();
    let first = alg.intersect(np("*A*"), np("*B*"));
    let entries = alg.memo_len();
    assert!(entries > 0);
    let second = alg.intersect(np("*B*"), np("*A*"));
    assert_eq!(first, second);
    assert_eq!(alg.memo_len(), entries);
}

#[test]
fn free_intersect_function() {
    assert_eq!(intersect(np("a/*"), np("*/b")), np("a/b"));
}

// ── Relation ────────────────────────────────────────────────────────

#[test]
fn relations() {
    let mut alg = Algebra::new();
    assert_eq!(alg.relation(np("/foo"), np("/foo")), Relation::Equal);
    assert_eq!(alg.relation(np("/foo"), np("/*")), Relation::Subset);
    assert_eq!(alg.relation(np("/*"), np("/foo")), Relation::Superset);
    assert_eq!(alg.relation(np("foo"), np("bar")), Relation::Disjoint);
    assert_eq!(alg.relation(np("a/*"), np("*/b")), Relation::Overlap(np("a/b")));
    assert_eq!(alg.relation(NormalPredicate::NONE, np("x")), Relation::Subset);
}

// ── Normalization ───────────────────────────────────────────────────

#[test]
fn canonical_alternatives_prune_and_sort() {
    let mut alg = Algebra::new();
    let alts = vec!["aa*".to_owned(), "a*".to_owned(), "abc*d".to_owned(), "a*".to_owned()];
    assert_eq!(alg.canonical_alternatives(alts), vec!["a*".to_owned()]);

    let alts = vec!["def".to_owned(), "abc".to_owned(), "DEF".to_owned(), "123".to_owned()];
    assert_eq!(
        alg.canonical_alternatives(alts),
        vec!["123", "DEF", "abc", "def"]
    );
}

#[test]
fn normalization_goldens() {
    let cases = [
        ("*|aaa", "*"),
        ("|", ""),
        ("def|abc|DEF|123", "123|DEF|abc|def"),
        ("a*|abc*d|aa*", "a*"),
        ("a*|*a", "*a|a*"),
        ("foo*/bar|fo**/*", "fo**/*"),
        ("/{**aPath}/{name}.{ext}", "/**/*.*"),
        ("∅|foo", "foo"),
        ("∅", "∅"),
        ("**|*|**", "**"),
        ("/api/**# everything", "/api/**"),
    ];
    for (pattern, expected) in cases {
        assert_eq!(np(pattern).as_str(), expected, "normalize {pattern:?}");
    }
}

// ── Splits ──────────────────────────────────────────────────────────

#[test]
fn splits_under_globstar() {
    assert_eq!(
        splits("ab**c", "**"),
        owned(&[("", "ab**c"), ("a", "b**c"), ("ab**", "**c"), ("ab**c", "")])
    );
}

#[test]
fn splits_under_wildcard_reduce_strength() {
    assert_eq!(
        splits("ab**c", "*"),
        owned(&[("", "ab**c"), ("a", "b**c"), ("ab*", "**c"), ("ab*c", "")])
    );
}

#[test]
fn splits_under_wildcard_stop_at_separator() {
    assert_eq!(splits("a/b", "*"), owned(&[("", "a/b"), ("a", "/b")]));
    assert_eq!(
        splits("a/b", "**"),
        owned(&[("", "a/b"), ("a", "/b"), ("a/", "b"), ("a/b", "")])
    );
}

#[test]
fn splits_of_empty() {
    assert_eq!(splits("", "*"), owned(&[("", "")]));
}
