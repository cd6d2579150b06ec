//! User methods and the meta marker.
//!
//! A method is an opaque callable with one uniform signature: it receives
//! the dispatch arguments, the captures bound by its rule's predicate, and
//! a [`Forward`] continuation onto the next entry of the method sequence.
//! Whether a method is *meta* is recorded on the [`Method`] wrapper, never
//! on the user's closure.

use std::fmt;
use std::sync::Arc;

use mm_predicate::Captures;

use crate::{DispatchError, Forward};

/// What a method produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<R> {
    Value(R),
    /// Delegate to the next less-specific method.
    Continue,
}

impl<R> Outcome<R> {
    pub fn is_continue(&self) -> bool {
        matches!(self, Outcome::Continue)
    }

    pub fn into_value(self) -> Option<R> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Continue => None,
        }
    }
}

impl<R> From<R> for Outcome<R> {
    fn from(value: R) -> Self {
        Outcome::Value(value)
    }
}

pub type MethodResult<R> = Result<Outcome<R>, DispatchError>;

type MethodFn<A, R> = dyn Fn(&A, &Captures, &Forward<'_, A, R>) -> MethodResult<R> + Send + Sync;
type ReturningFn<A, R> = dyn Fn(&A, &Captures) -> R + Send + Sync;

enum Func<A, R> {
    Full(Arc<MethodFn<A, R>>),
    Returning(Arc<ReturningFn<A, R>>),
}

impl<A, R> Clone for Func<A, R> {
    fn clone(&self) -> Self {
        match self {
            Func::Full(f) => Func::Full(Arc::clone(f)),
            Func::Returning(f) => Func::Returning(Arc::clone(f)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MethodKind {
    Ordinary,
    /// Receives `forward` and decides whether to call it.
    Meta,
}

/// A method attached to a rule.
pub struct Method<A, R> {
    kind: MethodKind,
    func: Func<A, R>,
}

impl<A, R> Method<A, R> {
    pub fn ordinary<F>(f: F) -> Self
    where
        F: Fn(&A, &Captures, &Forward<'_, A, R>) -> MethodResult<R> + Send + Sync + 'static,
    {
        Method {
            kind: MethodKind::Ordinary,
            func: Func::Full(Arc::new(f)),
        }
    }

    pub fn meta<F>(f: F) -> Self
    where
        F: Fn(&A, &Captures, &Forward<'_, A, R>) -> MethodResult<R> + Send + Sync + 'static,
    {
        Method {
            kind: MethodKind::Meta,
            func: Func::Full(Arc::new(f)),
        }
    }

    /// An ordinary method that always produces a value.
    pub fn returning<F>(f: F) -> Self
    where
        F: Fn(&A, &Captures) -> R + Send + Sync + 'static,
    {
        Method {
            kind: MethodKind::Ordinary,
            func: Func::Returning(Arc::new(f)),
        }
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn is_meta(&self) -> bool {
        self.kind == MethodKind::Meta
    }

    pub(crate) fn call(
        &self,
        args: &A,
        captures: &Captures,
        forward: &Forward<'_, A, R>,
    ) -> MethodResult<R> {
        match &self.func {
            Func::Full(f) => f(args, captures, forward),
            Func::Returning(f) => Ok(Outcome::Value(f(args, captures))),
        }
    }
}

/// Mark `method` as a meta-method.
pub fn meta<A, R>(method: Method<A, R>) -> Method<A, R> {
    Method {
        kind: MethodKind::Meta,
        func: method.func,
    }
}

impl<A, R> Clone for Method<A, R> {
    fn clone(&self) -> Self {
        Method {
            kind: self.kind,
            func: self.func.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Method<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// The methods of one rule, most specific first.
///
/// Converts from a single [`Method`], a `Vec` or an array so that rules can
/// be given either way.
#[derive(Debug)]
pub struct Chain<A, R>(pub Vec<Method<A, R>>);

impl<A, R> Clone for Chain<A, R> {
    fn clone(&self) -> Self {
        Chain(self.0.clone())
    }
}

impl<A, R> From<Method<A, R>> for Chain<A, R> {
    fn from(method: Method<A, R>) -> Self {
        Chain(vec![method])
    }
}

impl<A, R> From<Vec<Method<A, R>>> for Chain<A, R> {
    fn from(methods: Vec<Method<A, R>>) -> Self {
        Chain(methods)
    }
}

impl<A, R, const N: usize> From<[Method<A, R>; N]> for Chain<A, R> {
    fn from(methods: [Method<A, R>; N]) -> Self {
        Chain(methods.into())
    }
}

impl<A, R> Chain<A, R> {
    /// Index of the first ordinary method that precedes a meta-method.
    pub(crate) fn mixed_at(&self) -> Option<usize> {
        self.0
            .windows(2)
            .position(|pair| !pair[0].is_meta() && pair[1].is_meta())
    }
}
