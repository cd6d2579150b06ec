//! Subset test.
//!
//! For single alternatives, `sub ⊆ sup` is decided by matching the text of
//! `sub` against a recogniser built from `sup`: a literal in `sup` matches
//! itself, `**` matches anything, and `*` matches any run of `sub` that
//! contains neither `/` nor `**`. The regex engine has no lookahead, so
//! `**` in `sub` is first rewritten to the single glyph `ᕯ`, which `*`
//! excludes by character class.

use regex::Regex;

use super::Algebra;
use crate::parse::{split_normal, Segment};

/// Stand-in for `**` in the text being tested.
const GLOBSTAR_GLYPH: &str = "ᕯ";

impl Algebra {
    pub(crate) fn subset(&mut self, sub: &str, sup: &str) -> bool {
        if sub == sup {
            return true;
        }
        if sub == "∅" || sup == "**" {
            return true;
        }
        if sub == "**" || sup == "∅" {
            return false;
        }

        // Every alternative of `sub` must fit; one alternative of `sup` must hold it.
        if sub.contains('|') {
            return sub.split('|').all(|alt| self.subset(alt, sup));
        }
        if sup.contains('|') {
            return sup.split('|').any(|alt| self.subset(sub, alt));
        }

        let text = sub.replace("**", GLOBSTAR_GLYPH);
        if !self.recognisers.contains_key(sup) {
            let recogniser = build_recogniser(sup);
            self.recognisers.insert(sup.into(), recogniser);
        }
        self.recognisers
            .get(sup)
            .and_then(Option::as_ref)
            .is_some_and(|re| re.is_match(&text))
    }
}

fn build_recogniser(sup: &str) -> Option<Regex> {
    let mut source = String::from("(?s)^");
    for segment in split_normal(sup) {
        match segment {
            Segment::Literal(text) => source.push_str(&regex::escape(&text)),
            Segment::Wildcard(_) => {
                source.push_str("[^/");
                source.push_str(GLOBSTAR_GLYPH);
                source.push_str("]*");
            }
            Segment::Globstar(_) => source.push_str(".*"),
        }
    }
    source.push('$');

    match Regex::new(&source) {
        Ok(regex) => Some(regex),
        Err(error) => {
            tracing::warn!(%sup, %error, "subset recogniser failed to build; treating as no subsets");
            None
        }
    }
}
