//! Diagnostic system for the multimethod compiler.
//!
//! Every failure the compiler or an emitted dispatcher can raise carries an
//! [`ErrorCode`]. Codes are grouped by phase so they stay searchable:
//! - E1xxx: predicate syntax
//! - E2xxx: compilation (method tables, lattice, configuration)
//! - E3xxx: dispatch (runtime)
//! - W2xxx: compile-time warnings
//!
//! Errors convert into a [`Diagnostic`] for uniform rendering; the `mmc`
//! front end renders them and looks up long-form docs via [`ErrorDocs`].

mod diagnostic;
mod error_code;
pub mod errors;
mod span;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use span::Span;
