//! Thunks: the closures that execute one node's method sequence.
//!
//! Entries are ordered most specific first. Execution starts at the entry
//! point (the least specific meta-method, else entry 0):
//!
//! - an ordinary entry's `forward` targets the next ordinary entry, and
//!   returning [`Outcome::Continue`] falls through to that same entry;
//! - a meta entry's `forward` targets the nearest more specific meta entry,
//!   or the first ordinary entry when there is none. A meta-method's result
//!   is returned as-is.
//!
//! Captures are computed per entry from its rule's predicate, only when the
//! entry actually runs.

use std::sync::Arc;

use mm_predicate::{NormalPredicate, Predicate};

use crate::{DispatchError, Method, MethodResult, Outcome};

/// What one entry of a method sequence does when reached.
pub(crate) enum Action<A, R> {
    Call {
        method: Method<A, R>,
        /// The rule predicate captures are read from.
        predicate: Arc<Predicate>,
    },
    /// A synthesized method standing in for an ambiguous fallback.
    Ambiguous {
        predicate: NormalPredicate,
        fallbacks: Arc<str>,
    },
}

impl<A, R> Action<A, R> {
    fn is_meta(&self) -> bool {
        match self {
            Action::Call { method, .. } => method.is_meta(),
            Action::Ambiguous { .. } => false,
        }
    }
}

pub(crate) struct Entry<A, R> {
    pub(crate) identifier: String,
    pub(crate) action: Action<A, R>,
}

/// The executable form of one node's method sequence.
pub(crate) struct Thunk<A, R> {
    pub(crate) identifier: String,
    pub(crate) entries: Vec<Entry<A, R>>,
    pub(crate) entry_point: Option<usize>,
}

impl<A, R> Thunk<A, R> {
    pub(crate) fn new(
        identifier: String,
        entries: Vec<Entry<A, R>>,
        entry_point: Option<usize>,
    ) -> Self {
        Thunk {
            identifier,
            entries,
            entry_point,
        }
    }

    /// Run the sequence from its entry point.
    pub(crate) fn invoke(&self, discriminant: &str, args: &A) -> MethodResult<R> {
        match self.entry_point {
            Some(index) => self.run(index, discriminant, args),
            None => Ok(Outcome::Continue),
        }
    }

    fn run(&self, mut index: usize, discriminant: &str, args: &A) -> MethodResult<R> {
        loop {
            let entry = &self.entries[index];
            tracing::trace!(thunk = %self.identifier, entry = %entry.identifier, "run");
            let (method, predicate) = match &entry.action {
                Action::Call { method, predicate } => (method, predicate),
                Action::Ambiguous {
                    predicate,
                    fallbacks,
                } => {
                    return Err(DispatchError::MultipleFallbacksFrom {
                        predicate: *predicate,
                        fallbacks: fallbacks.to_string(),
                    })
                }
            };
            let captures = predicate.matches(discriminant).unwrap_or_default();

            if method.is_meta() {
                let forward = self.forward(self.meta_target(index), discriminant);
                return method.call(args, &captures, &forward);
            }

            let next = self.next_ordinary(index);
            let forward = self.forward(next, discriminant);
            match method.call(args, &captures, &forward)? {
                Outcome::Continue => match next {
                    Some(next) => index = next,
                    None => return Ok(Outcome::Continue),
                },
                value @ Outcome::Value(_) => return Ok(value),
            }
        }
    }

    fn forward<'t>(&'t self, target: Option<usize>, discriminant: &'t str) -> Forward<'t, A, R> {
        Forward {
            thunk: self,
            discriminant,
            target,
        }
    }

    fn next_ordinary(&self, index: usize) -> Option<usize> {
        (index + 1..self.entries.len()).find(|&i| !self.entries[i].action.is_meta())
    }

    fn meta_target(&self, index: usize) -> Option<usize> {
        (0..index)
            .rev()
            .find(|&i| self.entries[i].action.is_meta())
            .or_else(|| self.entries.iter().position(|e| !e.action.is_meta()))
    }
}

/// Continuation handed to every method.
///
/// Calling it runs the rest of the method sequence, possibly with different
/// arguments. Captures are still computed from the original discriminant.
pub struct Forward<'t, A, R> {
    thunk: &'t Thunk<A, R>,
    discriminant: &'t str,
    target: Option<usize>,
}

impl<A, R> Forward<'_, A, R> {
    pub fn call(&self, args: &A) -> MethodResult<R> {
        match self.target {
            Some(index) => self.thunk.run(index, self.discriminant, args),
            None => Ok(Outcome::Continue),
        }
    }

    /// Whether there is anything to forward to.
    pub fn has_next(&self) -> bool {
        self.target.is_some()
    }

    /// The discriminant being dispatched.
    pub fn discriminant(&self) -> &str {
        self.discriminant
    }
}
