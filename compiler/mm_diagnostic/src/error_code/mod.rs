//! Error codes for all compiler and dispatcher diagnostics.
//!
//! Each code is a unique identifier (e.g. `E1001`) whose first digit names
//! the phase that raised it. Used for `mmc explain` lookups.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Predicate syntax errors
/// - E2xxx: Compile errors (rules, lattice, options)
/// - E3xxx: Dispatch errors (raised by an emitted dispatcher)
/// - W2xxx: Compile warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Predicate Errors (E1xxx)
    /// Character not allowed in a predicate literal
    E1001,
    /// Unclosed named capture
    E1002,
    /// Unmatched closing brace
    E1003,
    /// Invalid capture name
    E1004,
    /// Adjacent wildcards or captures
    E1005,
    /// Alternation combined with named captures
    E1006,
    /// Duplicate capture name
    E1007,
    /// `∅` used inside a larger alternative
    E1008,

    // Compile Errors (E2xxx)
    /// Ordinary method precedes a meta-method in a chain
    E2001,
    /// Irreconcilable method sequences through multiple paths
    E2002,
    /// Two rules normalize to the same predicate
    E2003,
    /// Declared arity disagrees with the argument type
    E2004,
    /// Invalid combination of options
    E2005,
    /// Conflicts elevated to errors
    E2006,

    // Dispatch Errors (E3xxx)
    /// No method handled the discriminant
    E3001,
    /// Ambiguous fallback reached at runtime
    E3002,
    /// Strict async result check failed
    E3003,
    /// Discriminant could not be computed
    E3004,
    /// A user method failed
    E3005,

    // Warnings (W2xxx)
    /// Synthetic intersection not covered by any rule
    W2001,
    /// Universal predicate has no method
    W2002,
}

impl ErrorCode {
    /// All code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        // Predicate
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        // Compile
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        // Dispatch
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        // Warnings
        ErrorCode::W2001,
        ErrorCode::W2002,
    ];

    /// Get the string representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::W2001 => "W2001",
            ErrorCode::W2002 => "W2002",
        }
    }

    /// Check if this is a predicate syntax error (E1xxx).
    pub fn is_predicate_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E1007
                | ErrorCode::E1008
        )
    }

    /// Check if this is a compile error (E2xxx).
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001
                | ErrorCode::E2002
                | ErrorCode::E2003
                | ErrorCode::E2004
                | ErrorCode::E2005
                | ErrorCode::E2006
        )
    }

    /// Check if this is a dispatch error (E3xxx).
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E3001
                | ErrorCode::E3002
                | ErrorCode::E3003
                | ErrorCode::E3004
                | ErrorCode::E3005
        )
    }

    /// Check if this is a warning code (W prefix).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W2001 | ErrorCode::W2002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code string like `"E2001"` or `"w2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] so it never drifts.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
