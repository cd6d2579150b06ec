//! Intersection of single alternatives.
//!
//! `a ∩ b` is built by unifying the two patterns left to right. Literal
//! leaders must share a prefix. A wildcard leader is unified with every
//! prefix of the other pattern it can absorb, and the remainders are
//! intersected recursively. Every result is memoized.

use super::Algebra;
use crate::stack::ensure_sufficient_stack;

impl Algebra {
    /// All alternatives of `a ∩ b` for alternation-free `a` and `b`.
    pub(crate) fn alternative_intersections(&mut self, a: &str, b: &str) -> Vec<String> {
        let (a, b) = if a > b { (b, a) } else { (a, b) };

        if let Some(hit) = self.intersections.get(a).and_then(|inner| inner.get(b)) {
            tracing::trace!(a, b, "intersection memo hit");
            return hit.clone();
        }

        let result = ensure_sufficient_stack(|| self.compute_intersections(a, b));
        self.intersections
            .entry(a.into())
            .or_default()
            .insert(b.into(), result.clone());
        result
    }

    /// Requires `a <= b`.
    fn compute_intersections(&mut self, a: &str, b: &str) -> Vec<String> {
        // The empty string sorts first, so only `a` can be empty.
        if a.is_empty() {
            return if matches!(b, "" | "*" | "**") {
                vec![String::new()]
            } else {
                Vec::new()
            };
        }

        if self.subset(a, b) {
            return vec![a.to_owned()];
        }
        if self.subset(b, a) {
            return vec![b.to_owned()];
        }

        let a_first = first_token(a);
        let b_first = first_token(b);

        // Both lead with literals: they must agree on a common prefix.
        if !a_first.starts_with('*') && !b_first.starts_with('*') {
            let prefix = common_prefix(a_first, b_first);
            if prefix.is_empty() {
                return Vec::new();
            }
            return self
                .alternative_intersections(&a[prefix.len()..], &b[prefix.len()..])
                .into_iter()
                .map(|rest| format!("{prefix}{rest}"))
                .collect();
        }

        // At least one leads with a wildcard; a leading `**` takes priority.
        let (p1, p1_prefix, p2) = if a_first == "**" || !b_first.starts_with('*') {
            (a, a_first, b)
        } else {
            (b, b_first, a)
        };
        let p1_suffix = &p1[p1_prefix.len()..];

        let mut found = Vec::new();
        for (p2_prefix, p2_suffix) in splits(p2, p1_prefix) {
            for rest in self.alternative_intersections(p1_suffix, &p2_suffix) {
                found.push(format!("{p2_prefix}{rest}"));
            }
        }
        self.canonical_alternatives(found)
    }
}

/// The leading token of `p`: `*`, `**`, or the literal run before the first
/// wildcard (the whole of `p` if it has none).
fn first_token(p: &str) -> &str {
    match p.find('*') {
        None => p,
        Some(0) if p.starts_with("**") => "**",
        Some(0) => "*",
        Some(n) => &p[..n],
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i);
    &a[..len]
}

/// Every `(prefix, suffix)` split of `p` whose prefix `unifier` can absorb.
///
/// A split on a wildcard keeps it on both sides, so `ab**c` splits under
/// `**` into `("", "ab**c")`, `("a", "b**c")`, `("ab**", "**c")` and
/// `("ab**c", "")`. Under `*`, a `**` is written to the prefix as `*` and
/// splitting stops at the first `/`.
pub(super) fn splits(p: &str, unifier: &str) -> Vec<(String, String)> {
    let reduce = unifier == "*";
    let mut pairs = Vec::new();
    let mut prefix = String::new();
    let mut suffix = p;
    loop {
        let wildcard = if suffix.starts_with("**") {
            "**"
        } else if suffix.starts_with('*') {
            "*"
        } else {
            ""
        };
        if !wildcard.is_empty() {
            prefix.push_str(if reduce { "*" } else { wildcard });
        }

        pairs.push((prefix.clone(), suffix.to_owned()));
        suffix = &suffix[wildcard.len()..];

        if suffix.is_empty() || (reduce && suffix.starts_with('/')) {
            break;
        }

        // No two wildcards are adjacent, so `suffix` now leads with a literal.
        let mut chars = suffix.chars();
        if let Some(c) = chars.next() {
            prefix.push(c);
        }
        suffix = chars.as_str();
    }
    pairs
}
