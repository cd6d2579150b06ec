//! Argument lists a dispatcher accepts.

use std::fmt::{self, Display, Write};

/// Number of arguments a dispatcher takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Fixed(u8),
    Variadic,
}

impl Arity {
    /// Largest fixed arity a dispatcher accepts.
    pub const MAX_FIXED: u8 = 3;

    pub fn is_valid(self) -> bool {
        match self {
            Arity::Fixed(n) => (1..=Self::MAX_FIXED).contains(&n),
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{n}"),
            Arity::Variadic => f.write_str("variadic"),
        }
    }
}

/// An argument list: its arity and the default discriminant.
///
/// The default discriminant concatenates the `Display` form of every
/// argument, so `("GET", "/users")` dispatches on `"GET/users"`.
pub trait Arguments {
    const ARITY: Arity;

    fn discriminant(&self) -> String;
}

impl Arguments for String {
    const ARITY: Arity = Arity::Fixed(1);

    fn discriminant(&self) -> String {
        self.clone()
    }
}

impl Arguments for &str {
    const ARITY: Arity = Arity::Fixed(1);

    fn discriminant(&self) -> String {
        (*self).to_owned()
    }
}

impl<T: Display> Arguments for (T,) {
    const ARITY: Arity = Arity::Fixed(1);

    fn discriminant(&self) -> String {
        self.0.to_string()
    }
}

impl<T0: Display, T1: Display> Arguments for (T0, T1) {
    const ARITY: Arity = Arity::Fixed(2);

    fn discriminant(&self) -> String {
        format!("{}{}", self.0, self.1)
    }
}

impl<T0: Display, T1: Display, T2: Display> Arguments for (T0, T1, T2) {
    const ARITY: Arity = Arity::Fixed(3);

    fn discriminant(&self) -> String {
        format!("{}{}{}", self.0, self.1, self.2)
    }
}

impl<T: Display> Arguments for Vec<T> {
    const ARITY: Arity = Arity::Variadic;

    fn discriminant(&self) -> String {
        let mut out = String::new();
        for arg in self {
            // Writing to a String cannot fail.
            let _ = write!(out, "{arg}");
        }
        out
    }
}
