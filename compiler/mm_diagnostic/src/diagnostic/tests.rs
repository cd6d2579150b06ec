use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected character '$'")
        .with_source("/api/$")
        .with_label(Span::point(5), "not allowed in a predicate")
        .with_note("only letters, digits, space and / - . : < > @ are literal");

    assert!(diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(5, 6)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_render_with_source() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected character '$'")
        .with_source("/api/$")
        .with_label(Span::point(5), "here");

    let expected = "\
error[E1001]: unexpected character '$'
  |
  | /api/$
  |      ^ here
";
    assert_eq!(diag.render(), expected);
}

#[test]
fn test_render_warning_without_source() {
    let diag = Diagnostic::warning(ErrorCode::W2001)
        .with_message("Multimethod contains conflicts: a/b")
        .with_note("add a rule for each listed predicate");

    assert_eq!(
        diag.render(),
        "warning[W2001]: Multimethod contains conflicts: a/b\n  = note: add a rule for each listed predicate\n"
    );
    assert!(!diag.is_error());
}

#[test]
fn test_display_is_one_line() {
    let diag = Diagnostic::error(ErrorCode::E3001).with_message("unhandled");
    assert_eq!(diag.to_string(), "error[E3001]: unhandled");
}
