//! Embedded error documentation for `mmc explain` support.
//!
//! Each code has a short markdown explanation embedded in the binary and
//! reachable through [`ErrorDocs::get`].

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (
        ErrorCode::E1001,
        "# E1001: unexpected character in predicate

Predicate literals may only contain ASCII letters, digits, space and the
punctuation `/ - . : < > @`. The metacharacters `* | { } #` have special
meaning and `∅` must stand alone.

    /api/$id      # error: '$' is not a literal character
    /api/{id}     # ok
",
    ),
    (
        ErrorCode::E1002,
        "# E1002: unclosed named capture

A `{` opens a named capture that must be closed by `}`.

    /api/{id      # error
    /api/{id}     # ok
",
    ),
    (
        ErrorCode::E1003,
        "# E1003: unmatched closing brace

A `}` appeared without an opening `{`.
",
    ),
    (
        ErrorCode::E1004,
        "# E1004: invalid capture name

Capture names start with a letter, `_` or `$` and continue with letters,
digits, `_` or `$`. A globstar capture is written `{**name}`.
",
    ),
    (
        ErrorCode::E1005,
        "# E1005: adjacent wildcards

Two variable parts may not touch: `***`, `*{name}` and `{a}{b}` have no
unique reading. Separate them with a literal.
",
    ),
    (
        ErrorCode::E1006,
        "# E1006: alternation with named captures

A predicate may use `|` alternation or named captures, not both.

    {a}|b         # error
",
    ),
    (
        ErrorCode::E1007,
        "# E1007: duplicate capture name

Each named capture in a predicate must have a distinct name.
",
    ),
    (
        ErrorCode::E1008,
        "# E1008: misplaced empty-set symbol

`∅` denotes the predicate that matches nothing. It must form a whole
alternative on its own.
",
    ),
    (
        ErrorCode::E2001,
        "# E2001: mixed method chain

Within a chain, all meta-methods must come before all ordinary methods.

    rule(\"p\", [ordinary, meta(m)])   # error
    rule(\"p\", [meta(m), ordinary])   # ok
",
    ),
    (
        ErrorCode::E2002,
        "# E2002: multiple paths to a predicate

A predicate is reachable from several less-specific predicates whose
method sequences disagree on meta-methods. Add a rule for the predicate
itself so its behavior is explicit.
",
    ),
    (
        ErrorCode::E2003,
        "# E2003: duplicate predicate

Two rule patterns recognize exactly the same strings, e.g. `/{id}` and
`/*`. Merge them into one rule.
",
    ),
    (
        ErrorCode::E2004,
        "# E2004: arity mismatch

The declared arity disagrees with the argument type of the multimethod.
",
    ),
    (
        ErrorCode::E2005,
        "# E2005: invalid options

The combination of options cannot be honored, e.g. strict async results
were requested without a way to recognize a promise-like result.
",
    ),
    (
        ErrorCode::E2006,
        "# E2006: conflicts denied

Warnings were elevated to errors and the rule set contains predicates
synthesized from overlapping rules. Add a rule for each listed predicate.
",
    ),
    (
        ErrorCode::E3001,
        "# E3001: unhandled discriminant

Every applicable method returned CONTINUE (or no method applies).
Add a rule for `**` to provide a catch-all.
",
    ),
    (
        ErrorCode::E3002,
        "# E3002: multiple fallbacks

The discriminant selected a predicate reachable from several
less-specific predicates, and delegation had to choose between them.
Add a rule for the predicate to resolve the ambiguity.
",
    ),
    (
        ErrorCode::E3003,
        "# E3003: invalid result

The multimethod is strictly asynchronous but a method returned a value
that is not promise-like.
",
    ),
    (
        ErrorCode::E3004,
        "# E3004: invalid discriminant

The discriminant function failed to produce a string for the arguments.
",
    ),
    (
        ErrorCode::E3005,
        "# E3005: method failed

A user-supplied method returned an error; it is propagated unchanged.
",
    ),
    (
        ErrorCode::W2001,
        "# W2001: conflicts

Overlapping rules produced intersections with no rule of their own.
Dispatch to them falls back through several paths and may be ambiguous.
",
    ),
    (
        ErrorCode::W2002,
        "# W2002: unhandled universal predicate

No rule covers `**`, so some discriminants may be unhandled.
",
    ),
];

#[cfg(test)]
mod tests;
