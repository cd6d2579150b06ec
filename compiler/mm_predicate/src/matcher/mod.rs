//! Matching discriminants against predicates.
//!
//! Each predicate compiles to one anchored [`Regex`]: literals are escaped,
//! `*` becomes `[^/]*` and `**` becomes `.*`. Named captures become
//! positional groups whose names are kept alongside the regex.

use std::fmt;

use regex::Regex;
use smallvec::SmallVec;

use crate::parse::{split_normal, Alternative, PredicateAst, Segment};
use crate::NormalPredicate;

/// Values bound by a predicate's named captures.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Captures {
    entries: SmallVec<[(Box<str>, String); 4]>,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Bindings in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (&**n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, name: &str, value: &str) {
        self.entries.push((name.into(), value.to_owned()));
    }
}

impl fmt::Debug for Captures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// A compiled recogniser for one predicate.
#[derive(Clone)]
pub struct Matcher {
    /// `None` for `∅`, which matches nothing.
    regex: Option<Regex>,
    /// Capture names, indexed by regex group number minus one.
    names: Vec<Box<str>>,
}

impl Matcher {
    /// A matcher that rejects every string.
    pub fn nothing() -> Self {
        Matcher {
            regex: None,
            names: Vec::new(),
        }
    }

    /// Compile a parsed predicate, keeping its named captures.
    pub fn from_ast(ast: &PredicateAst) -> Self {
        let mut names = Vec::new();
        let alternatives: Vec<String> = ast
            .alternatives
            .iter()
            .filter_map(|alt| match alt {
                Alternative::Nothing => None,
                Alternative::Segments(segments) => Some(segments_regex(segments, &mut names)),
            })
            .collect();
        Self::compile(&alternatives, names)
    }

    /// Compile a normalized predicate. Normal forms have no named captures.
    pub fn from_normal(predicate: NormalPredicate) -> Self {
        let mut names = Vec::new();
        let alternatives: Vec<String> = predicate
            .alternatives()
            .into_iter()
            .map(|alt| segments_regex(&split_normal(alt), &mut names))
            .collect();
        Self::compile(&alternatives, names)
    }

    fn compile(alternatives: &[String], names: Vec<Box<str>>) -> Self {
        if alternatives.is_empty() {
            return Self::nothing();
        }
        let source = format!("(?s)^(?:{})$", alternatives.join("|"));
        match Regex::new(&source) {
            Ok(regex) => Matcher {
                regex: Some(regex),
                names,
            },
            Err(error) => {
                tracing::error!(%source, %error, "predicate regex failed to compile; it will match nothing");
                Self::nothing()
            }
        }
    }

    pub fn is_match(&self, discriminant: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(discriminant))
    }

    /// Match `discriminant`, returning the named captures on success.
    pub fn captures(&self, discriminant: &str) -> Option<Captures> {
        let regex = self.regex.as_ref()?;
        if self.names.is_empty() {
            return regex.is_match(discriminant).then(Captures::new);
        }
        let found = regex.captures(discriminant)?;
        let mut captures = Captures::new();
        for (index, name) in self.names.iter().enumerate() {
            let value = found.get(index + 1).map_or("", |m| m.as_str());
            captures.push(name, value);
        }
        Some(captures)
    }

    /// The regex source, or `None` for a matcher that rejects everything.
    pub fn as_regex_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("regex", &self.as_regex_str())
            .field("names", &self.names)
            .finish()
    }
}

fn segments_regex(segments: &[Segment], names: &mut Vec<Box<str>>) -> String {
    let mut out = String::new();
    for segment in segments {
        let (body, name) = match segment {
            Segment::Literal(text) => {
                out.push_str(&regex::escape(text));
                continue;
            }
            Segment::Wildcard(name) => ("[^/]*", name),
            Segment::Globstar(name) => (".*", name),
        };
        match name {
            Some(name) => {
                names.push(name.as_str().into());
                out.push('(');
                out.push_str(body);
                out.push(')');
            }
            None => out.push_str(body),
        }
    }
    out
}
