//! Compile-time and dispatch-time errors.
//!
//! Compile errors fail the whole compilation; dispatch errors are returned
//! to the caller of [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
//! Both map onto diagnostic codes for uniform rendering.

use std::error::Error as StdError;
use std::fmt;

use mm_diagnostic::{Diagnostic, ErrorCode};
use mm_predicate::{NormalPredicate, PredicateError};

use crate::Arity;

/// Why a multimethod could not be compiled.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Predicate(#[from] PredicateError),

    #[error("Multimethod chain for '{predicate}' has an ordinary method before a meta-method")]
    MixedChain { predicate: String },

    #[error("Multiple paths to '{predicate}' with different meta-methods")]
    MultiplePathsTo { predicate: NormalPredicate },

    #[error("Rules '{first}' and '{second}' both normalize to '{normalized}'")]
    DuplicatePredicate {
        first: String,
        second: String,
        normalized: NormalPredicate,
    },

    #[error("Multimethod declares arity {declared} but its arguments have arity {actual}")]
    ArityMismatch { declared: Arity, actual: Arity },

    #[error("Multimethod contains conflicts: {}", Joined(predicates))]
    Conflicts { predicates: Vec<NormalPredicate> },

    #[error("Invalid multimethod options: {message}")]
    InvalidOptions { message: String },
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Predicate(err) => err.code(),
            CompileError::MixedChain { .. } => ErrorCode::E2001,
            CompileError::MultiplePathsTo { .. } => ErrorCode::E2002,
            CompileError::DuplicatePredicate { .. } => ErrorCode::E2003,
            CompileError::ArityMismatch { .. } => ErrorCode::E2004,
            CompileError::InvalidOptions { .. } => ErrorCode::E2005,
            CompileError::Conflicts { .. } => ErrorCode::E2006,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Predicate(err) => err.to_diagnostic(),
            CompileError::MultiplePathsTo { .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_note("meta-methods on different parent predicates cannot be ordered; add a rule for this predicate"),
            CompileError::Conflicts { .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_note("add a rule for each listed predicate, or lower the warning level"),
            _ => Diagnostic::error(self.code()).with_message(self.to_string()),
        }
    }
}

/// Why a dispatch call failed.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Multimethod dispatch failure: no method handled '{discriminant}'")]
    Unhandled { discriminant: String },

    #[error("Multiple possible fallbacks from '{predicate}': {fallbacks}")]
    MultipleFallbacksFrom {
        predicate: NormalPredicate,
        fallbacks: String,
    },

    #[error("Multimethod result for '{discriminant}' is not promise-like")]
    InvalidResult { discriminant: String },

    #[error("Could not compute a discriminant: {message}")]
    InvalidDiscriminant { message: String },

    #[error(transparent)]
    Method(Box<dyn StdError + Send + Sync>),
}

impl DispatchError {
    /// Wrap an error raised inside a user method.
    pub fn method(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        DispatchError::Method(err.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DispatchError::Unhandled { .. } => ErrorCode::E3001,
            DispatchError::MultipleFallbacksFrom { .. } => ErrorCode::E3002,
            DispatchError::InvalidResult { .. } => ErrorCode::E3003,
            DispatchError::InvalidDiscriminant { .. } => ErrorCode::E3004,
            DispatchError::Method(_) => ErrorCode::E3005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

/// Conflict warnings for synthetic predicates no rule covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictReport {
    pub predicates: Vec<NormalPredicate>,
    /// The universal predicate `**` has no method.
    pub unhandled_root: bool,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && !self.unhandled_root
    }

    /// One warning diagnostic per finding.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        if !self.predicates.is_empty() {
            out.push(
                Diagnostic::warning(ErrorCode::W2001).with_message(format!(
                    "Multimethod contains conflicts: {}",
                    Joined(&self.predicates)
                )),
            );
        }
        if self.unhandled_root {
            out.push(
                Diagnostic::warning(ErrorCode::W2002)
                    .with_message("Multimethod has no method for '**'"),
            );
        }
        out
    }
}

/// Displays predicates separated by `, `.
struct Joined<'a>(&'a [NormalPredicate]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, predicate) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{predicate}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
