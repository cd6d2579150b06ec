//! Multimethod options.
//!
//! Built with chained setters and handed to [`Dispatcher::new`]:
//!
//! ```ignore
//! let options = Options::new()
//!     .name("route")
//!     .rule("/users/{id}", Method::returning(|_, c: &Captures| c.get("id").map(str::to_owned)))
//!     .rule("**", Method::returning(|_, _| None))
//!     .warnings(WarningLevel::All);
//! ```
//!
//! [`Dispatcher::new`]: crate::Dispatcher::new

use std::fmt;
use std::sync::Arc;

use mm_predicate::NormalPredicate;

use crate::{Arity, Chain, DispatchError};

pub(crate) type DiscriminantFn<A> = dyn Fn(&A) -> Result<String, DispatchError> + Send + Sync;
pub(crate) type UnhandledFn<A, R> = dyn Fn(&A, &str) -> Result<R, DispatchError> + Send + Sync;
pub(crate) type PromiseFn<R> = dyn Fn(&R) -> bool + Send + Sync;
pub(crate) type UnreachablePredicateFn = dyn Fn(NormalPredicate) -> bool + Send + Sync;

/// How method results relate to asynchronous computation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AsyncMode {
    Sync,
    /// Every result is promise-like.
    Async,
    /// Results may or may not be promise-like.
    #[default]
    Mixed,
}

/// Which conflicts are reported after the diagram is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WarningLevel {
    None,
    /// Warn about synthetic predicates no rule covers.
    #[default]
    Default,
    /// Also warn when `**` has no method.
    All,
    /// Fail compilation on conflicts.
    Deny,
}

/// Everything that configures one multimethod.
pub struct Options<A, R> {
    pub(crate) name: String,
    pub(crate) arity: Option<Arity>,
    pub(crate) to_discriminant: Option<Arc<DiscriminantFn<A>>>,
    pub(crate) rules: Vec<(String, Chain<A, R>)>,
    pub(crate) async_mode: AsyncMode,
    pub(crate) strict: bool,
    pub(crate) is_promise_like: Option<Arc<PromiseFn<R>>>,
    pub(crate) unhandled: Option<Arc<UnhandledFn<A, R>>>,
    pub(crate) warnings: WarningLevel,
    pub(crate) is_unreachable: Option<Arc<UnreachablePredicateFn>>,
}

impl<A, R> Default for Options<A, R> {
    fn default() -> Self {
        Options {
            name: "multimethod".to_owned(),
            arity: None,
            to_discriminant: None,
            rules: Vec::new(),
            async_mode: AsyncMode::default(),
            strict: false,
            is_promise_like: None,
            unhandled: None,
            warnings: WarningLevel::default(),
            is_unreachable: None,
        }
    }
}

impl<A, R> Options<A, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used in the emitted source.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Declare the arity; it must agree with the argument type.
    #[must_use]
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = Some(arity);
        self
    }

    /// Compute discriminants with `f` instead of concatenating arguments.
    #[must_use]
    pub fn to_discriminant<F>(mut self, f: F) -> Self
    where
        F: Fn(&A) -> String + Send + Sync + 'static,
    {
        self.to_discriminant = Some(Arc::new(move |args: &A| Ok(f(args))));
        self
    }

    /// Like [`to_discriminant`](Self::to_discriminant), but `f` may reject
    /// its arguments. A rejection fails the dispatch with
    /// [`DispatchError::InvalidDiscriminant`].
    #[must_use]
    pub fn try_to_discriminant<F, E>(mut self, f: F) -> Self
    where
        F: Fn(&A) -> Result<String, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        self.to_discriminant = Some(Arc::new(move |args: &A| {
            f(args).map_err(|err| DispatchError::InvalidDiscriminant {
                message: err.to_string(),
            })
        }));
        self
    }

    /// Add a rule. Rules may come in any order.
    #[must_use]
    pub fn rule(mut self, predicate: impl Into<String>, chain: impl Into<Chain<A, R>>) -> Self {
        self.rules.push((predicate.into(), chain.into()));
        self
    }

    #[must_use]
    pub fn async_mode(mut self, mode: AsyncMode) -> Self {
        self.async_mode = mode;
        self
    }

    /// Alias of [`async_mode`](Self::async_mode).
    #[must_use]
    pub fn timing(self, mode: AsyncMode) -> Self {
        self.async_mode(mode)
    }

    /// With [`AsyncMode::Async`], require every result to be promise-like.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn is_promise_like<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.is_promise_like = Some(Arc::new(f));
        self
    }

    /// Called with the arguments and discriminant when no method handles a
    /// dispatch, instead of failing with [`DispatchError::Unhandled`].
    #[must_use]
    pub fn unhandled<F>(mut self, f: F) -> Self
    where
        F: Fn(&A, &str) -> Result<R, DispatchError> + Send + Sync + 'static,
    {
        self.unhandled = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn warnings(mut self, level: WarningLevel) -> Self {
        self.warnings = level;
        self
    }

    /// Leave out synthetic intersections for which `f` returns `true`.
    #[must_use]
    pub fn is_unreachable<F>(mut self, f: F) -> Self
    where
        F: Fn(NormalPredicate) -> bool + Send + Sync + 'static,
    {
        self.is_unreachable = Some(Arc::new(f));
        self
    }
}

impl<A, R> fmt::Debug for Options<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field(
                "rules",
                &self.rules.iter().map(|(p, _)| p.as_str()).collect::<Vec<_>>(),
            )
            .field("async_mode", &self.async_mode)
            .field("strict", &self.strict)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}
