//! Predicate patterns and their set algebra.
//!
//! A predicate is a small glob dialect that recognizes a set of strings:
//! literals, `*` (one segment), `**` (anything), named captures `{name}` /
//! `{**name}`, top-level `|` alternation and a trailing `#comment`.
//!
//! This crate provides:
//! - Parsing into a [`PredicateAst`] with column-accurate [`PredicateError`]s
//! - [`NormalPredicate`]: the interned canonical form (equality is identity)
//! - [`Predicate`]: the full record with identifier, captures and matcher
//! - [`Algebra`]: memoized `is_subset_of` and `intersect`
//!
//! # Design
//!
//! - **Intern everything**: normalized forms live in a process-wide,
//!   append-only table and are passed around as `Copy` handles.
//! - **Memo per compilation**: recognisers and intersections are cached in
//!   an [`Algebra`] value that a compilation owns and drops.

mod algebra;
mod error;
mod identifier;
mod matcher;
mod normal;
mod parse;
mod predicate;
mod stack;

pub use algebra::{intersect, is_subset_of, Algebra, Relation};
pub use error::{PredicateError, PredicateErrorKind};
pub use identifier::{identifier_glyph, to_identifier_parts};
pub use matcher::{Captures, Matcher};
pub use normal::NormalPredicate;
pub use parse::{is_literal_char, parse_predicate, Alternative, PredicateAst, Segment};
pub use predicate::{to_normal_predicate, to_predicate, Predicate};
pub use stack::ensure_sufficient_stack;
