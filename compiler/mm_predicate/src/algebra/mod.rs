//! Set algebra over normalized predicates.
//!
//! [`Algebra`] answers subset and intersection queries and owns the caches
//! that make them affordable: one compiled recogniser per superset and a
//! two-level intersection memo keyed by `(a, b)` with `a <= b`. A
//! compilation creates one `Algebra`, uses it for every query, then drops
//! it. The free functions [`is_subset_of`] and [`intersect`] use a fresh
//! instance per call.
//!
//! Internally the algebra works on single alternatives as `&str`, because
//! intersection produces intermediate forms that are never interned.

mod intersect;
mod subset;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::parse::{Alternative, PredicateAst};
use crate::NormalPredicate;

/// How one predicate relates to another, as string sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    Equal,
    /// The left predicate is a proper subset of the right.
    Subset,
    /// The left predicate is a proper superset of the right.
    Superset,
    Disjoint,
    /// Neither contains the other; the intersection is non-empty.
    Overlap(NormalPredicate),
}

/// Memoizing subset and intersection engine.
#[derive(Default)]
pub struct Algebra {
    /// Subset recognisers keyed by the superset alternative.
    /// `None` records a regex that failed to build.
    recognisers: FxHashMap<Box<str>, Option<Regex>>,
    /// `a -> b -> alternatives of a ∩ b`, for `a <= b`.
    intersections: FxHashMap<Box<str>, FxHashMap<Box<str>, Vec<String>>>,
}

impl Algebra {
    pub fn new() -> Self {
        Self::default()
    }

    /// `sub ⊆ sup` as string sets.
    pub fn is_subset_of(&mut self, sub: NormalPredicate, sup: NormalPredicate) -> bool {
        self.subset(sub.as_str(), sup.as_str())
    }

    /// The normalized predicate recognizing exactly the strings recognized
    /// by both `a` and `b`.
    pub fn intersect(&mut self, a: NormalPredicate, b: NormalPredicate) -> NormalPredicate {
        if a == b {
            return a;
        }
        let mut found = Vec::new();
        for x in a.alternatives() {
            for y in b.alternatives() {
                found.extend(self.alternative_intersections(x, y));
            }
        }
        self.normalize_alternatives(found)
    }

    /// Classify `p` against `n`.
    pub fn relation(&mut self, p: NormalPredicate, n: NormalPredicate) -> Relation {
        if p == n {
            return Relation::Equal;
        }
        match (self.is_subset_of(p, n), self.is_subset_of(n, p)) {
            (true, true) => Relation::Equal,
            (true, false) => Relation::Subset,
            (false, true) => Relation::Superset,
            (false, false) => {
                let q = self.intersect(p, n);
                if q.is_none() {
                    Relation::Disjoint
                } else if q == p {
                    Relation::Subset
                } else if q == n {
                    Relation::Superset
                } else {
                    Relation::Overlap(q)
                }
            }
        }
    }

    /// Normalize a parsed predicate: erase captures, drop `∅` alternatives,
    /// then canonicalize the alternation.
    pub fn normalize_ast(&mut self, ast: &PredicateAst) -> NormalPredicate {
        let alternatives = ast
            .alternatives
            .iter()
            .filter_map(Alternative::signature)
            .collect();
        self.normalize_alternatives(alternatives)
    }

    /// Canonicalize a list of capture-free alternatives and intern the result.
    pub fn normalize_alternatives(&mut self, alternatives: Vec<String>) -> NormalPredicate {
        let canonical = self.canonical_alternatives(alternatives);
        if canonical.is_empty() {
            NormalPredicate::NONE
        } else {
            NormalPredicate::intern(&canonical.join("|"))
        }
    }

    /// Sort, deduplicate and drop every alternative contained in another.
    ///
    /// When two alternatives contain each other only the lesser survives.
    pub fn canonical_alternatives(&mut self, mut alternatives: Vec<String>) -> Vec<String> {
        alternatives.sort_unstable();
        alternatives.dedup();
        if alternatives.len() < 2 {
            return alternatives;
        }

        let mut redundant = vec![false; alternatives.len()];
        for i in 0..alternatives.len() {
            for j in 0..alternatives.len() {
                if i == j || redundant[j] {
                    continue;
                }
                let (a, b) = (&alternatives[i], &alternatives[j]);
                if self.subset(a, b) && (j < i || !self.subset(b, a)) {
                    redundant[i] = true;
                    break;
                }
            }
        }

        alternatives
            .into_iter()
            .zip(redundant)
            .filter_map(|(alt, drop)| (!drop).then_some(alt))
            .collect()
    }

    /// Number of memoized intersection pairs.
    pub fn memo_len(&self) -> usize {
        self.intersections.values().map(FxHashMap::len).sum()
    }

    /// Number of cached subset recognisers.
    pub fn recogniser_count(&self) -> usize {
        self.recognisers.len()
    }
}

/// `sub ⊆ sup`, using a throwaway [`Algebra`].
pub fn is_subset_of(sub: NormalPredicate, sup: NormalPredicate) -> bool {
    Algebra::new().is_subset_of(sub, sup)
}

/// `a ∩ b`, using a throwaway [`Algebra`].
pub fn intersect(a: NormalPredicate, b: NormalPredicate) -> NormalPredicate {
    Algebra::new().intersect(a, b)
}

#[cfg(test)]
mod tests;
