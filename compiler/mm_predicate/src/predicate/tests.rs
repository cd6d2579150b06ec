#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;
use mm_diagnostic::ErrorCode;

#[test]
fn record_fields() {
    let p = to_predicate("/{**aPath}/{name}.{ext}# static files").unwrap();
    assert_eq!(p.source(), "/{**aPath}/{name}.{ext}# static files");
    assert_eq!(p.normalized().as_str(), "/**/*.*");
    assert_eq!(p.capture_names(), ["aPath", "name", "ext"]);
    assert_eq!(p.comment(), Some(" static files"));
    assert_eq!(p.to_string(), p.source());
}

#[test]
fn identifier_follows_normal_form() {
    let p = to_predicate("GET /{id}").unwrap();
    assert_eq!(p.identifier(), "GETˑⳆӿ");
}

#[test]
fn matches_with_captures() {
    let p = to_predicate("/users/{id}/posts/{**rest}").unwrap();
    let caps = p.matches("/users/42/posts/2024/01").unwrap();
    assert_eq!(caps.get("id"), Some("42"));
    assert_eq!(caps.get("rest"), Some("2024/01"));
    assert!(p.matches("/users/42").is_none());
    assert!(!p.is_match("/users/4/2/posts/x"));
}

#[test]
fn normalized_forms_are_shared() {
    let a = to_normal_predicate("/{x}").unwrap();
    let b = to_normal_predicate("/*# comment").unwrap();
    assert_eq!(a, b);
    assert!(std::ptr::eq(a.as_str(), b.as_str()));
}

#[test]
fn from_normal_record() {
    let p = Predicate::from_normal(to_normal_predicate("a/*").unwrap());
    assert_eq!(p.source(), "a/*");
    assert!(p.capture_names().is_empty());
    assert!(p.is_match("a/b"));
    assert_eq!(p.identifier(), "aⳆӿ");

    let none = Predicate::from_normal(NormalPredicate::NONE);
    assert_eq!(none.identifier(), "Ø");
    assert!(!none.is_match(""));
}

#[test]
fn syntax_errors_surface() {
    let err = to_predicate("/a|{b}").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1006);
    assert!(to_normal_predicate("(").is_err());
}
