//! Method-table analysis.
//!
//! Parses every rule, places its predicate in the Euler diagram, attaches
//! its chain to the node as the node's exact methods, and derives one
//! [`MethodSequence`] per node. Synthetic nodes have no exact methods and
//! inherit everything from their ancestors.

mod disambiguate;
mod sequence;

use std::sync::Arc;

use mm_diagnostic::ErrorCode;
use mm_lattice::{EulerDiagram, NodeId, UnreachableFn};
use mm_predicate::{Algebra, NormalPredicate, Predicate};
use rustc_hash::FxHashMap;

use crate::{Chain, CompileError, ConflictReport, WarningLevel};

pub use sequence::MethodSequence;

/// A parsed rule: its predicate and its chain.
pub(crate) struct Rule<A, R> {
    pub(crate) predicate: Arc<Predicate>,
    pub(crate) chain: Chain<A, R>,
}

/// Where one entry of a method sequence comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    /// Method `position` of the chain of `rule`, attached to `node`.
    Method {
        rule: usize,
        position: usize,
        node: NodeId,
        meta: bool,
    },
    /// Synthesized stand-in for an ambiguous fallback at `node`.
    Ambiguous { node: NodeId, fallbacks: Arc<str> },
}

impl Route {
    pub(crate) fn node(&self) -> NodeId {
        match self {
            Route::Method { node, .. } | Route::Ambiguous { node, .. } => *node,
        }
    }

    pub(crate) fn is_meta(&self) -> bool {
        matches!(self, Route::Method { meta: true, .. })
    }
}

/// Rules indexed by the diagram node they are attached to.
pub(crate) struct MethodTable<A, R> {
    pub(crate) rules: Vec<Rule<A, R>>,
    by_node: Vec<Option<usize>>,
}

impl<A, R> MethodTable<A, R> {
    /// The rule attached to `node`, if the node is principal.
    pub(crate) fn exact(&self, node: NodeId) -> Option<usize> {
        self.by_node.get(node.index()).copied().flatten()
    }

    /// The exact methods of `node` as routes, in chain order.
    pub(crate) fn routes(&self, node: NodeId) -> Vec<Route> {
        let Some(rule) = self.exact(node) else {
            return Vec::new();
        };
        self.rules[rule]
            .chain
            .0
            .iter()
            .enumerate()
            .map(|(position, method)| Route::Method {
                rule,
                position,
                node,
                meta: method.is_meta(),
            })
            .collect()
    }
}

/// Everything the emitter needs.
pub(crate) struct Analysis<A, R> {
    pub(crate) diagram: EulerDiagram,
    pub(crate) table: MethodTable<A, R>,
    /// Indexed by node.
    pub(crate) sequences: Vec<MethodSequence>,
    pub(crate) conflicts: ConflictReport,
}

/// Parse `rules`, build the diagram and compute every method sequence.
pub(crate) fn analyse<A, R>(
    rules: Vec<(String, Chain<A, R>)>,
    is_unreachable: Option<&UnreachableFn<'_>>,
    warnings: WarningLevel,
) -> Result<Analysis<A, R>, CompileError> {
    let _span = tracing::debug_span!("analyse", rules = rules.len()).entered();
    let mut algebra = Algebra::new();

    let mut parsed: Vec<Rule<A, R>> = Vec::with_capacity(rules.len());
    let mut seen: FxHashMap<NormalPredicate, usize> = FxHashMap::default();
    for (source, chain) in rules {
        let predicate = Predicate::parse_with(&source, &mut algebra)?;
        if chain.mixed_at().is_some() {
            return Err(CompileError::MixedChain { predicate: source });
        }
        if let Some(&first) = seen.get(&predicate.normalized()) {
            return Err(CompileError::DuplicatePredicate {
                first: parsed[first].predicate.source().to_owned(),
                second: source,
                normalized: predicate.normalized(),
            });
        }
        seen.insert(predicate.normalized(), parsed.len());
        parsed.push(Rule {
            predicate: Arc::new(predicate),
            chain,
        });
    }

    let diagram = EulerDiagram::build(
        parsed.iter().map(|rule| rule.predicate.normalized()),
        &mut algebra,
        is_unreachable,
    );

    // Distinct spellings of one set share a node.
    let mut by_node = vec![None; diagram.len()];
    for (index, rule) in parsed.iter().enumerate() {
        let Some(node) = diagram.find(rule.predicate.normalized()) else {
            continue;
        };
        if let Some(first) = by_node[node.index()] {
            let first: &Rule<A, R> = &parsed[first];
            return Err(CompileError::DuplicatePredicate {
                first: first.predicate.source().to_owned(),
                second: rule.predicate.source().to_owned(),
                normalized: diagram.node(node).predicate(),
            });
        }
        by_node[node.index()] = Some(index);
    }
    let table = MethodTable {
        rules: parsed,
        by_node,
    };

    let sequences = sequence::compute(&diagram, &table)?;
    let conflicts = ConflictReport {
        predicates: diagram.synthetic_predicates(),
        unhandled_root: sequences[diagram.root().index()].is_empty(),
    };
    report(&conflicts, warnings)?;

    tracing::debug!(
        nodes = diagram.len(),
        conflicts = conflicts.predicates.len(),
        "analysis complete"
    );
    Ok(Analysis {
        diagram,
        table,
        sequences,
        conflicts,
    })
}

/// Log conflict warnings, or fail when they are denied.
fn report(conflicts: &ConflictReport, level: WarningLevel) -> Result<(), CompileError> {
    if level == WarningLevel::Deny && !conflicts.predicates.is_empty() {
        return Err(CompileError::Conflicts {
            predicates: conflicts.predicates.clone(),
        });
    }
    if level == WarningLevel::None {
        return Ok(());
    }
    for diagnostic in conflicts.to_diagnostics() {
        if diagnostic.code == ErrorCode::W2002 && level != WarningLevel::All {
            continue;
        }
        tracing::warn!(code = %diagnostic.code, "{}", diagnostic.message);
    }
    Ok(())
}
