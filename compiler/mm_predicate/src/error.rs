//! Predicate syntax errors.

use mm_diagnostic::{Diagnostic, ErrorCode, Span};

/// What was wrong with a predicate pattern.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredicateErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unclosed named capture")]
    UnclosedCapture,
    #[error("unmatched '}}'")]
    UnmatchedBrace,
    #[error("invalid capture name '{0}'")]
    InvalidCaptureName(String),
    #[error("wildcards and captures may not be adjacent")]
    AdjacentWildcards,
    #[error("Predicate cannot contain both alternation and named captures")]
    AlternationWithCaptures,
    #[error("duplicate capture name '{0}'")]
    DuplicateCaptureName(String),
    #[error("'∅' must form a whole alternative")]
    MisplacedEmptySet,
}

impl PredicateErrorKind {
    /// The diagnostic code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            PredicateErrorKind::UnexpectedChar(_) => ErrorCode::E1001,
            PredicateErrorKind::UnclosedCapture => ErrorCode::E1002,
            PredicateErrorKind::UnmatchedBrace => ErrorCode::E1003,
            PredicateErrorKind::InvalidCaptureName(_) => ErrorCode::E1004,
            PredicateErrorKind::AdjacentWildcards => ErrorCode::E1005,
            PredicateErrorKind::AlternationWithCaptures => ErrorCode::E1006,
            PredicateErrorKind::DuplicateCaptureName(_) => ErrorCode::E1007,
            PredicateErrorKind::MisplacedEmptySet => ErrorCode::E1008,
        }
    }
}

/// An invalid predicate pattern.
///
/// Displays as the message, the pattern, and a caret line under the
/// offending columns:
///
/// ```text
/// unexpected character '$':
/// /api/$
///      ^
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}:\n{pattern}\n{}", .span.indicator())]
pub struct PredicateError {
    pub kind: PredicateErrorKind,
    pub pattern: String,
    pub span: Span,
}

impl PredicateError {
    pub(crate) fn new(kind: PredicateErrorKind, pattern: &str, span: Span) -> Self {
        PredicateError {
            kind,
            pattern: pattern.to_owned(),
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_source(self.pattern.clone())
            .with_label(self.span, "")
    }
}
