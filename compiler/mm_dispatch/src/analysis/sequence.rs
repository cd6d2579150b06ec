//! Method sequences.
//!
//! The sequence of a node lists, most specific first, every method that may
//! run for a discriminant selecting that node: its own chain, then its
//! parent's sequence. Nodes are visited in topological order so a parent's
//! sequence is final before any child reads it. A node with several parents
//! gets one candidate per parent, reconciled by [`disambiguate`].
//!
//! [`disambiguate`]: super::disambiguate::disambiguate

use mm_lattice::{EulerDiagram, NodeId};
use mm_predicate::{to_identifier_parts, NormalPredicate};

use super::disambiguate::disambiguate;
use super::{MethodTable, Route};
use crate::CompileError;

/// Marks one chain position in an entry identifier.
const POSITION_MARK: char = 'ᐟ';
/// Joins a node identifier to an inherited meta-method's identifier.
const VIA: &str = "ːviaː";
const AMBIGUOUS: &str = "ːambiguous";

/// The ordered methods applicable at one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSequence {
    predicate: NormalPredicate,
    identifier: String,
    pub(crate) routes: Vec<Route>,
    identifiers: Vec<String>,
    entry_point: Option<usize>,
}

impl MethodSequence {
    fn new(start: NodeId, routes: Vec<Route>, diagram: &EulerDiagram) -> Self {
        let predicate = diagram.node(start).predicate();
        let identifier = to_identifier_parts(predicate);
        let identifiers = routes
            .iter()
            .map(|route| entry_identifier(route, start, &identifier, diagram))
            .collect();
        let entry_point = routes
            .iter()
            .rposition(Route::is_meta)
            .or(if routes.is_empty() { None } else { Some(0) });
        MethodSequence {
            predicate,
            identifier,
            routes,
            identifiers,
            entry_point,
        }
    }

    /// The node's predicate.
    pub fn predicate(&self) -> NormalPredicate {
        self.predicate
    }

    /// The node's identifier, which also names its thunk.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// One identifier per entry, most specific first.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Index of the entry execution starts at: the least specific
    /// meta-method, else the first entry. `None` for an empty sequence.
    pub fn entry_point(&self) -> Option<usize> {
        self.entry_point
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Whether an ambiguous fallback was synthesized into this sequence.
    pub fn is_ambiguous(&self) -> bool {
        self.routes
            .iter()
            .any(|route| matches!(route, Route::Ambiguous { .. }))
    }
}

/// Identifier of `route` within the sequence of `start`.
///
/// Inherited meta-methods, and meta-methods past the first chain position,
/// are prefixed with the start node's identifier since their behaviour
/// depends on which node they were entered from.
fn entry_identifier(
    route: &Route,
    start: NodeId,
    start_identifier: &str,
    diagram: &EulerDiagram,
) -> String {
    match route {
        Route::Method {
            node,
            position,
            meta,
            ..
        } => {
            let mut identifier = to_identifier_parts(diagram.node(*node).predicate());
            identifier.extend(std::iter::repeat(POSITION_MARK).take(*position));
            if *meta && (*node != start || *position > 0) {
                format!("{start_identifier}{VIA}{identifier}")
            } else {
                identifier
            }
        }
        Route::Ambiguous { node, .. } => {
            let mut identifier = to_identifier_parts(diagram.node(*node).predicate());
            identifier.push_str(AMBIGUOUS);
            identifier
        }
    }
}

/// Compute the method sequence of every node, indexed by node.
pub(super) fn compute<A, R>(
    diagram: &EulerDiagram,
    table: &MethodTable<A, R>,
) -> Result<Vec<MethodSequence>, CompileError> {
    let mut routes: Vec<Option<Vec<Route>>> = vec![None; diagram.len()];

    for id in diagram.topological_order() {
        let node = diagram.node(id);
        let own = table.routes(id);

        // `∅` never matches, so its inherited methods are irrelevant.
        let merged = if node.parents().is_empty() || node.predicate().is_none() {
            own
        } else {
            let candidates = node
                .parents()
                .iter()
                .map(|parent| {
                    let mut candidate = own.clone();
                    candidate.extend(routes[parent.index()].iter().flatten().cloned());
                    candidate
                })
                .collect();
            disambiguate(id, candidates, diagram)?
        };

        tracing::trace!(
            predicate = %node.predicate(),
            entries = merged.len(),
            "method sequence"
        );
        routes[id.index()] = Some(merged);
    }

    Ok(diagram
        .nodes()
        .map(|(id, _)| {
            let merged = routes[id.index()].take().unwrap_or_default();
            MethodSequence::new(id, merged, diagram)
        })
        .collect())
}
