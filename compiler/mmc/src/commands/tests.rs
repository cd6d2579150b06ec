#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn normalize_prints_the_canonical_form() {
    assert_eq!(normalize("/{**aPath}/{name}.{ext}").unwrap(), "/**/*.*");
    assert_eq!(normalize("def|abc|DEF|123").unwrap(), "123|DEF|abc|def");
}

#[test]
fn identify_transliterates() {
    assert_eq!(identify("/api/foo/{**rest}").unwrap(), "ⳆapiⳆfooⳆᕯ");
}

#[test]
fn match_lists_captures_in_order() {
    assert_eq!(
        match_discriminant("/{kind}/{**rest}", "/users/42/posts").unwrap(),
        "kind = users\nrest = 42/posts"
    );
    assert_eq!(match_discriminant("/api/*", "/api/users").unwrap(), "match");
    assert_eq!(match_discriminant("/api/*", "/api/users/1").unwrap(), "no match");
}

#[test]
fn subset_and_intersect() {
    assert_eq!(subset("/foo", "/*").unwrap(), "true");
    assert_eq!(subset("/*", "/foo").unwrap(), "false");
    assert_eq!(intersection("a/*", "*/b").unwrap(), "a/b");
    assert_eq!(intersection("a", "b").unwrap(), "∅");
}

#[test]
fn lattice_brackets_synthetic_nodes() {
    assert_eq!(
        lattice(&["a/*", "*/b"]).unwrap(),
        "**\n  a/*\n    [a/b]\n  */b\n    [a/b]"
    );
}

#[test]
fn predicate_errors_render_as_diagnostics() {
    let err = normalize("/api/$").unwrap_err();
    assert!(matches!(err, CommandError::Predicate(_)));
    assert!(err.to_diagnostic().unwrap().is_error());
    let rendered = err.render();
    assert!(rendered.starts_with("error[E1"), "{rendered}");
    assert!(rendered.contains("  | /api/$\n"), "{rendered}");
}

#[test]
fn lattice_reports_the_first_bad_predicate() {
    let err = lattice(&["/ok", "/{x", "/$"]).unwrap_err();
    assert!(err.render().contains("/{x"));
}

#[test]
fn explain_known_and_unknown_codes() {
    assert!(explain("E2003").unwrap().starts_with("# E2003"));
    assert!(explain("e2003").is_ok());

    let err = explain("X9").unwrap_err();
    assert!(matches!(err, CommandError::UnknownCode(ref c) if c == "X9"));
    assert!(err.to_diagnostic().is_none());
    assert!(err.render().starts_with("Unknown error code: X9\n"));
}
