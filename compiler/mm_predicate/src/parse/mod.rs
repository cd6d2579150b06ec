//! Predicate pattern parser.
//!
//! Grammar:
//!
//! ```text
//! predicate   := alt ( '|' alt )* comment?
//! alt         := '∅' | segment*
//! segment     := literal | '*' | '**' | '{' name '}' | '{**' name '}'
//! literal     := [A-Za-z0-9] | ' ' | '/' | '-' | '.' | ':' | '<' | '>' | '@'
//! name        := [A-Za-z_$][A-Za-z0-9_$]*
//! comment     := '#' any*
//! ```
//!
//! Two variable parts may never be adjacent, so every normalized form has a
//! single reading. Columns in errors count `char`s from the pattern start.

use mm_diagnostic::Span;
use rustc_hash::FxHashSet;

use crate::{PredicateError, PredicateErrorKind};

/// One part of an alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A run of literal characters.
    Literal(String),
    /// `*` or `{name}`: zero or more characters other than `/`.
    Wildcard(Option<String>),
    /// `**` or `{**name}`: zero or more of any character.
    Globstar(Option<String>),
}

impl Segment {
    fn is_variable(&self) -> bool {
        !matches!(self, Segment::Literal(_))
    }

    /// The capture name, if this is a named capture.
    pub fn capture_name(&self) -> Option<&str> {
        match self {
            Segment::Wildcard(name) | Segment::Globstar(name) => name.as_deref(),
            Segment::Literal(_) => None,
        }
    }
}

/// One `|`-separated alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Alternative {
    /// `∅`: recognizes nothing.
    Nothing,
    /// A sequence of segments (possibly empty, recognizing only `""`).
    Segments(Vec<Segment>),
}

impl Alternative {
    /// The structural form of this alternative: captures replaced by `*`/`**`.
    ///
    /// Returns `None` for `∅`.
    pub fn signature(&self) -> Option<String> {
        let Alternative::Segments(segments) = self else {
            return None;
        };
        let mut out = String::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Wildcard(_) => out.push('*'),
                Segment::Globstar(_) => out.push_str("**"),
            }
        }
        Some(out)
    }
}

/// Parsed form of a predicate pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredicateAst {
    pub alternatives: Vec<Alternative>,
    /// Text after the first `#`, if a comment was present.
    pub comment: Option<String>,
}

impl PredicateAst {
    /// Names of the named captures, in source order.
    pub fn capture_names(&self) -> Vec<&str> {
        self.alternatives
            .iter()
            .filter_map(|alt| match alt {
                Alternative::Segments(segments) => Some(segments),
                Alternative::Nothing => None,
            })
            .flatten()
            .filter_map(Segment::capture_name)
            .collect()
    }

    pub fn has_named_captures(&self) -> bool {
        !self.capture_names().is_empty()
    }
}

/// Check whether `c` may appear in a predicate literal.
///
/// The set is exactly the characters that have an identifier glyph.
pub fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '/' | '-' | '.' | ':' | '<' | '>' | '@')
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Split one alternative of a normalized predicate into segments.
///
/// Normalized text has no captures, comments or `|`, so this cannot fail.
pub(crate) fn split_normal(alternative: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = alternative.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '*' {
            literal.push(c);
            continue;
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        if chars.peek() == Some(&'*') {
            chars.next();
            segments.push(Segment::Globstar(None));
        } else {
            segments.push(Segment::Wildcard(None));
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Parse a predicate pattern.
pub fn parse_predicate(pattern: &str) -> Result<PredicateAst, PredicateError> {
    Parser::new(pattern).parse()
}

struct Parser<'a> {
    pattern: &'a str,
    chars: Vec<char>,
    /// Column of the first `#`, or `chars.len()`.
    body_end: usize,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let body_end = chars.iter().position(|&c| c == '#').unwrap_or(chars.len());
        Parser {
            pattern,
            chars,
            body_end,
        }
    }

    fn error(&self, kind: PredicateErrorKind, start: usize, end: usize) -> PredicateError {
        PredicateError::new(kind, self.pattern, Span::from_cols(start, end))
    }

    fn parse(&self) -> Result<PredicateAst, PredicateError> {
        let mut alternatives = Vec::new();
        let mut alt_start = 0;
        for (col, &c) in self.chars[..self.body_end].iter().enumerate() {
            if c == '|' {
                alternatives.push(self.parse_alternative(alt_start, col)?);
                alt_start = col + 1;
            }
        }
        alternatives.push(self.parse_alternative(alt_start, self.body_end)?);

        let comment = (self.body_end < self.chars.len())
            .then(|| self.chars[self.body_end + 1..].iter().collect::<String>());

        let ast = PredicateAst {
            alternatives,
            comment,
        };
        self.check_captures(&ast)?;
        Ok(ast)
    }

    fn parse_alternative(&self, start: usize, end: usize) -> Result<Alternative, PredicateError> {
        let chars = &self.chars[start..end];

        if let Some(offset) = chars.iter().position(|&c| c == '∅') {
            if chars.len() == 1 {
                return Ok(Alternative::Nothing);
            }
            let col = start + offset;
            return Err(self.error(PredicateErrorKind::MisplacedEmptySet, col, col + 1));
        }

        let mut segments: Vec<Segment> = Vec::new();
        let mut col = start;
        while col < end {
            let c = self.chars[col];
            let (segment, next) = match c {
                '*' => self.parse_star(col, end)?,
                '{' => self.parse_capture(col, end)?,
                '}' => return Err(self.error(PredicateErrorKind::UnmatchedBrace, col, col + 1)),
                c if is_literal_char(c) => {
                    if let Some(Segment::Literal(text)) = segments.last_mut() {
                        text.push(c);
                        col += 1;
                        continue;
                    }
                    (Segment::Literal(c.to_string()), col + 1)
                }
                c => return Err(self.error(PredicateErrorKind::UnexpectedChar(c), col, col + 1)),
            };

            if segment.is_variable() && segments.last().is_some_and(Segment::is_variable) {
                return Err(self.error(PredicateErrorKind::AdjacentWildcards, col, next));
            }
            segments.push(segment);
            col = next;
        }

        Ok(Alternative::Segments(segments))
    }

    /// Parse `*` or `**` at `col`; three stars in a row are adjacent wildcards.
    fn parse_star(&self, col: usize, end: usize) -> Result<(Segment, usize), PredicateError> {
        let run = self.chars[col..end].iter().take_while(|&&c| c == '*').count();
        match run {
            1 => Ok((Segment::Wildcard(None), col + 1)),
            2 => Ok((Segment::Globstar(None), col + 2)),
            _ => Err(self.error(PredicateErrorKind::AdjacentWildcards, col, col + run)),
        }
    }

    /// Parse `{name}` or `{**name}` starting at the `{` in column `col`.
    fn parse_capture(&self, col: usize, end: usize) -> Result<(Segment, usize), PredicateError> {
        let Some(offset) = self.chars[col + 1..end].iter().position(|&c| c == '}') else {
            return Err(self.error(PredicateErrorKind::UnclosedCapture, col, end));
        };
        let close = col + 1 + offset;
        let inner = &self.chars[col + 1..close];

        let (is_globstar, name_chars) = match inner {
            ['*', '*', rest @ ..] => (true, rest),
            _ => (false, inner),
        };
        let name: String = name_chars.iter().collect();
        let valid = name_chars.first().is_some_and(|&c| is_name_start(c))
            && name_chars.iter().all(|&c| is_name_continue(c));
        if !valid {
            return Err(self.error(
                PredicateErrorKind::InvalidCaptureName(name),
                col,
                close + 1,
            ));
        }

        let segment = if is_globstar {
            Segment::Globstar(Some(name))
        } else {
            Segment::Wildcard(Some(name))
        };
        Ok((segment, close + 1))
    }

    fn check_captures(&self, ast: &PredicateAst) -> Result<(), PredicateError> {
        let names = ast.capture_names();
        if names.is_empty() {
            return Ok(());
        }
        if ast.alternatives.len() > 1 {
            return Err(self.error(
                PredicateErrorKind::AlternationWithCaptures,
                0,
                self.body_end,
            ));
        }

        let mut seen = FxHashSet::default();
        for name in names {
            if !seen.insert(name) {
                let (start, end) = self.locate_capture(name);
                return Err(self.error(
                    PredicateErrorKind::DuplicateCaptureName(name.to_owned()),
                    start,
                    end,
                ));
            }
        }
        Ok(())
    }

    /// Columns of the last capture named `name` (used for duplicates).
    fn locate_capture(&self, name: &str) -> (usize, usize) {
        let body: String = self.chars[..self.body_end].iter().collect();
        for needle in [format!("{{{name}}}"), format!("{{**{name}}}")] {
            if let Some(byte) = body.rfind(&needle) {
                let start = body[..byte].chars().count();
                return (start, start + needle.chars().count());
            }
        }
        (0, self.body_end)
    }
}
