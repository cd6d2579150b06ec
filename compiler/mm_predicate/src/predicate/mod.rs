//! The full predicate record.

use std::fmt;

use crate::{
    parse_predicate, to_identifier_parts, Algebra, Captures, Matcher, NormalPredicate,
    PredicateError,
};

/// A parsed predicate with everything the compiler derives from it.
#[derive(Clone)]
pub struct Predicate {
    source: String,
    normalized: NormalPredicate,
    identifier: String,
    capture_names: Vec<String>,
    comment: Option<String>,
    matcher: Matcher,
}

impl Predicate {
    /// Parse and analyse `source`, normalizing with the given algebra.
    pub fn parse_with(source: &str, algebra: &mut Algebra) -> Result<Self, PredicateError> {
        let ast = parse_predicate(source)?;
        let normalized = algebra.normalize_ast(&ast);
        Ok(Predicate {
            source: source.to_owned(),
            normalized,
            identifier: to_identifier_parts(normalized),
            capture_names: ast.capture_names().into_iter().map(str::to_owned).collect(),
            comment: ast.comment.clone(),
            matcher: Matcher::from_ast(&ast),
        })
    }

    /// The record for an already-normalized predicate (no captures, no comment).
    pub fn from_normal(normalized: NormalPredicate) -> Self {
        Predicate {
            source: normalized.as_str().to_owned(),
            normalized,
            identifier: to_identifier_parts(normalized),
            capture_names: Vec::new(),
            comment: None,
            matcher: Matcher::from_normal(normalized),
        }
    }

    /// The pattern as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn normalized(&self) -> NormalPredicate {
        self.normalized
    }

    /// Identifier-safe spelling of the normalized form.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Named captures, in source order.
    pub fn capture_names(&self) -> &[String] {
        &self.capture_names
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Match a discriminant, returning named captures on success.
    pub fn matches(&self, discriminant: &str) -> Option<Captures> {
        self.matcher.captures(discriminant)
    }

    pub fn is_match(&self, discriminant: &str) -> bool {
        self.matcher.is_match(discriminant)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("source", &self.source)
            .field("normalized", &self.normalized)
            .field("identifier", &self.identifier)
            .field("capture_names", &self.capture_names)
            .field("comment", &self.comment)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse `source` into a full [`Predicate`] record.
pub fn to_predicate(source: &str) -> Result<Predicate, PredicateError> {
    Predicate::parse_with(source, &mut Algebra::new())
}

/// Parse `source` and return only its normalized form.
pub fn to_normal_predicate(source: &str) -> Result<NormalPredicate, PredicateError> {
    let ast = parse_predicate(source)?;
    Ok(Algebra::new().normalize_ast(&ast))
}

#[cfg(test)]
mod tests;
