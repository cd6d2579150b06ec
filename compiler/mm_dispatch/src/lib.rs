//! Multimethod compilation and dispatch.
//!
//! A multimethod is a set of rules, each a predicate pattern with a chain of
//! methods. Compiling it:
//!
//! 1. parses every rule and attaches its chain to the rule's node in the
//!    Euler diagram of all predicates (the method table);
//! 2. computes, for every node, the ordered sequence of methods that may run
//!    for a discriminant selecting that node, reconciling nodes reachable
//!    through several parents;
//! 3. specializes a [`Dispatcher`]: a decision table that selects the most
//!    specific node for a discriminant, and one thunk per node that executes
//!    its method sequence.
//!
//! ```ignore
//! let dispatcher = Dispatcher::new(
//!     Options::new()
//!         .rule("/foo", Method::returning(|_: &(&str,), _| "foo"))
//!         .rule("/*", Method::returning(|_: &(&str,), _| "any")),
//! )?;
//! assert_eq!(dispatcher.dispatch(&("/foo",))?, "foo");
//! ```

mod analysis;
mod args;
mod dispatcher;
mod emit;
mod error;
mod method;
mod options;
mod select;
mod thunk;

pub use analysis::MethodSequence;
pub use args::{Arguments, Arity};
pub use dispatcher::{create, Dispatcher};
pub use error::{CompileError, ConflictReport, DispatchError};
pub use method::{meta, Chain, Method, MethodKind, MethodResult, Outcome};
pub use options::{AsyncMode, Options, WarningLevel};
pub use thunk::Forward;

pub use mm_predicate::{Captures, NormalPredicate};
