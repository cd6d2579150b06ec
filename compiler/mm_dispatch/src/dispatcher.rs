//! The compiled dispatcher.

use std::fmt;
use std::sync::Arc;

use mm_lattice::{EulerDiagram, UnreachableFn};
use mm_predicate::NormalPredicate;

use crate::analysis::{analyse, Analysis, MethodSequence, Route};
use crate::emit::{emit_source, SourceSettings};
use crate::options::{DiscriminantFn, PromiseFn, UnhandledFn};
use crate::select::Selector;
use crate::thunk::{Action, Entry, Thunk};
use crate::{Arguments, AsyncMode, CompileError, ConflictReport, DispatchError, Options, Outcome};

/// A compiled multimethod.
///
/// Dispatching is stateless: a `Dispatcher` may be shared between threads
/// and called concurrently.
pub struct Dispatcher<A, R> {
    name: String,
    diagram: EulerDiagram,
    selector: Selector,
    thunks: Vec<Thunk<A, R>>,
    sequences: Vec<MethodSequence>,
    to_discriminant: Option<Arc<DiscriminantFn<A>>>,
    unhandled: Option<Arc<UnhandledFn<A, R>>>,
    /// Set only for strict async dispatchers.
    promise_check: Option<Arc<PromiseFn<R>>>,
    conflicts: ConflictReport,
    source: String,
}

/// Compile a multimethod from `options`.
pub fn create<A: Arguments, R>(options: Options<A, R>) -> Result<Dispatcher<A, R>, CompileError> {
    Dispatcher::new(options)
}

impl<A: Arguments, R> Dispatcher<A, R> {
    /// Compile a multimethod from `options`.
    pub fn new(options: Options<A, R>) -> Result<Self, CompileError> {
        let Options {
            name,
            arity,
            to_discriminant,
            rules,
            async_mode,
            strict,
            is_promise_like,
            unhandled,
            warnings,
            is_unreachable,
        } = options;

        if let Some(declared) = arity {
            if !declared.is_valid() {
                return Err(CompileError::InvalidOptions {
                    message: format!("arity must be 1 to 3 or variadic, not {declared}"),
                });
            }
            if declared != A::ARITY {
                return Err(CompileError::ArityMismatch {
                    declared,
                    actual: A::ARITY,
                });
            }
        }
        let strict_async = strict && async_mode == AsyncMode::Async;
        if strict_async && is_promise_like.is_none() {
            return Err(CompileError::InvalidOptions {
                message: "strict async dispatch needs an is_promise_like check".to_owned(),
            });
        }

        let is_unreachable: Option<&UnreachableFn<'_>> = match &is_unreachable {
            Some(f) => Some(&**f),
            None => None,
        };
        let analysis = analyse(rules, is_unreachable, warnings)?;
        let selector = Selector::new(&analysis.diagram);
        let source = emit_source(
            &analysis,
            &selector,
            &SourceSettings {
                name: &name,
                strict_async,
                has_unhandled: unhandled.is_some(),
            },
        );
        let thunks = build_thunks(&analysis);
        tracing::debug!(%name, thunks = thunks.len(), "dispatcher compiled");

        let Analysis {
            diagram,
            sequences,
            conflicts,
            ..
        } = analysis;
        Ok(Dispatcher {
            name,
            diagram,
            selector,
            thunks,
            sequences,
            to_discriminant,
            unhandled,
            promise_check: if strict_async { is_promise_like } else { None },
            conflicts,
            source,
        })
    }

    /// Dispatch `args` to the most specific applicable method.
    pub fn dispatch(&self, args: &A) -> Result<R, DispatchError> {
        let discriminant = match &self.to_discriminant {
            Some(f) => f(args)?,
            None => args.discriminant(),
        };
        let node = self.selector.select(&discriminant);
        let thunk = &self.thunks[node.index()];
        tracing::trace!(%discriminant, thunk = %thunk.identifier, "dispatch");

        let result = match thunk.invoke(&discriminant, args)? {
            Outcome::Value(result) => result,
            Outcome::Continue => match &self.unhandled {
                Some(unhandled) => unhandled(args, &discriminant)?,
                None => return Err(DispatchError::Unhandled { discriminant }),
            },
        };
        if let Some(is_promise_like) = &self.promise_check {
            if !is_promise_like(&result) {
                return Err(DispatchError::InvalidResult { discriminant });
            }
        }
        Ok(result)
    }
}

impl<A, R> Dispatcher<A, R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diagram(&self) -> &EulerDiagram {
        &self.diagram
    }

    /// The predicate of the node a discriminant selects.
    pub fn select(&self, discriminant: &str) -> NormalPredicate {
        self.diagram
            .node(self.selector.select(discriminant))
            .predicate()
    }

    /// The method sequence of the node holding `predicate`.
    pub fn method_sequence(&self, predicate: NormalPredicate) -> Option<&MethodSequence> {
        let id = self.diagram.find(predicate)?;
        self.sequences.get(id.index())
    }

    /// Method sequences indexed like the diagram's nodes.
    pub fn method_sequences(&self) -> &[MethodSequence] {
        &self.sequences
    }

    pub fn conflicts(&self) -> &ConflictReport {
        &self.conflicts
    }

    /// The emitted source of this dispatcher.
    pub fn source(&self) -> &str {
        &self.source
    }
}

fn build_thunks<A, R>(analysis: &Analysis<A, R>) -> Vec<Thunk<A, R>> {
    analysis
        .sequences
        .iter()
        .map(|sequence| {
            let entries = sequence
                .routes
                .iter()
                .zip(sequence.identifiers())
                .map(|(route, identifier)| Entry {
                    identifier: identifier.clone(),
                    action: action(analysis, route),
                })
                .collect();
            Thunk::new(
                sequence.identifier().to_owned(),
                entries,
                sequence.entry_point(),
            )
        })
        .collect()
}

fn action<A, R>(analysis: &Analysis<A, R>, route: &Route) -> Action<A, R> {
    match route {
        Route::Method { rule, position, .. } => {
            let rule = &analysis.table.rules[*rule];
            Action::Call {
                method: rule.chain.0[*position].clone(),
                predicate: Arc::clone(&rule.predicate),
            }
        }
        Route::Ambiguous { node, fallbacks } => Action::Ambiguous {
            predicate: analysis.diagram.node(*node).predicate(),
            fallbacks: Arc::clone(fallbacks),
        },
    }
}

impl<A, R> fmt::Display for Dispatcher<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<A, R> fmt::Debug for Dispatcher<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("name", &self.name)
            .field("nodes", &self.diagram.len())
            .field("conflicts", &self.conflicts)
            .finish_non_exhaustive()
    }
}
