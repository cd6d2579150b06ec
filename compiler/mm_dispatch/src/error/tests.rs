#![allow(clippy::unwrap_used, clippy::expect_used)]

use mm_diagnostic::Severity;
use mm_predicate::{to_normal_predicate, to_predicate};
use pretty_assertions::assert_eq;

use super::*;

fn normal(source: &str) -> NormalPredicate {
    to_normal_predicate(source).unwrap()
}

#[test]
fn compile_error_codes() {
    let cases = [
        (
            CompileError::MixedChain {
                predicate: "p".to_owned(),
            },
            ErrorCode::E2001,
        ),
        (
            CompileError::MultiplePathsTo {
                predicate: normal("a/b"),
            },
            ErrorCode::E2002,
        ),
        (
            CompileError::ArityMismatch {
                declared: Arity::Fixed(2),
                actual: Arity::Fixed(1),
            },
            ErrorCode::E2004,
        ),
        (
            CompileError::InvalidOptions {
                message: String::new(),
            },
            ErrorCode::E2005,
        ),
        (
            CompileError::Conflicts { predicates: vec![] },
            ErrorCode::E2006,
        ),
    ];
    for (error, code) in cases {
        assert_eq!(error.code(), code, "{error}");
        assert_eq!(error.to_diagnostic().code, code);
    }
}

#[test]
fn predicate_errors_keep_their_code_and_span() {
    let error = CompileError::from(to_predicate("/api/$").unwrap_err());
    assert_eq!(error.code(), ErrorCode::E1001);
    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.source.as_deref(), Some("/api/$"));
    assert_eq!(diagnostic.labels.len(), 1);
}

#[test]
fn conflict_message_lists_predicates() {
    let error = CompileError::Conflicts {
        predicates: vec![normal("a/b"), normal("c/d")],
    };
    assert_eq!(
        error.to_string(),
        "Multimethod contains conflicts: a/b, c/d"
    );
}

#[test]
fn mixed_chain_message() {
    let error = CompileError::MixedChain {
        predicate: "p".to_owned(),
    };
    assert_eq!(
        error.to_string(),
        "Multimethod chain for 'p' has an ordinary method before a meta-method"
    );
}

#[test]
fn dispatch_error_codes() {
    let cases = [
        (
            DispatchError::Unhandled {
                discriminant: "x".to_owned(),
            },
            ErrorCode::E3001,
        ),
        (
            DispatchError::MultipleFallbacksFrom {
                predicate: normal("a/b"),
                fallbacks: "a/*, */b".to_owned(),
            },
            ErrorCode::E3002,
        ),
        (
            DispatchError::InvalidResult {
                discriminant: "x".to_owned(),
            },
            ErrorCode::E3003,
        ),
        (
            DispatchError::InvalidDiscriminant {
                message: "no".to_owned(),
            },
            ErrorCode::E3004,
        ),
        (DispatchError::method("failed"), ErrorCode::E3005),
    ];
    for (error, code) in cases {
        assert_eq!(error.code(), code, "{error}");
        assert!(error.to_diagnostic().is_error());
    }
}

#[test]
fn method_errors_are_transparent() {
    let io = std::io::Error::other("disk on fire");
    let error = DispatchError::method(io);
    assert_eq!(error.to_string(), "disk on fire");
    assert!(error.source().is_none());
}

#[test]
fn multiple_fallbacks_message() {
    let error = DispatchError::MultipleFallbacksFrom {
        predicate: normal("a/b"),
        fallbacks: "a/*, */b".to_owned(),
    };
    assert_eq!(
        error.to_string(),
        "Multiple possible fallbacks from 'a/b': a/*, */b"
    );
}

#[test]
fn conflict_report_diagnostics() {
    let report = ConflictReport {
        predicates: vec![normal("a/b")],
        unhandled_root: true,
    };
    let diagnostics = report.to_diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].code, ErrorCode::W2001);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].message, "Multimethod contains conflicts: a/b");
    assert_eq!(diagnostics[1].code, ErrorCode::W2002);
}

#[test]
fn empty_report() {
    let report = ConflictReport {
        predicates: vec![],
        unhandled_root: false,
    };
    assert!(report.is_empty());
    assert!(report.to_diagnostics().is_empty());
}
