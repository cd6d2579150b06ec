//! The Euler diagram and its queries.

mod build;
mod render;

use std::collections::VecDeque;

use mm_predicate::{Algebra, NormalPredicate};
use rustc_hash::FxHashMap;

use crate::{EulerNode, NodeId};

pub use render::Snapshot;

/// Caller-supplied test for intersections that can never occur in practice.
///
/// Synthetic nodes for which it returns `true` are left out of the diagram.
pub type UnreachableFn<'a> = dyn Fn(NormalPredicate) -> bool + 'a;

/// DAG of predicates ordered by strict subset, rooted at `**`.
#[derive(Clone, Debug)]
pub struct EulerDiagram {
    nodes: Vec<EulerNode>,
    index: FxHashMap<NormalPredicate, NodeId>,
}

impl EulerDiagram {
    /// Build a diagram with a private [`Algebra`] and no unreachability test.
    pub fn new(predicates: impl IntoIterator<Item = NormalPredicate>) -> Self {
        Self::build(predicates, &mut Algebra::new(), None)
    }

    /// Build a diagram, inserting `predicates` in order.
    ///
    /// The resulting DAG does not depend on the insertion order.
    pub fn build(
        predicates: impl IntoIterator<Item = NormalPredicate>,
        algebra: &mut Algebra,
        is_unreachable: Option<&UnreachableFn<'_>>,
    ) -> Self {
        let _span = tracing::debug_span!("euler_diagram").entered();
        let mut builder = build::Builder::new(algebra, is_unreachable);
        for predicate in predicates {
            builder.insert(predicate, true);
        }
        let diagram = builder.finish();
        tracing::debug!(
            nodes = diagram.len(),
            synthetic = diagram.len() - diagram.principal_count(),
            "euler diagram built"
        );
        diagram
    }

    fn with_root() -> Self {
        let mut index = FxHashMap::default();
        index.insert(NormalPredicate::ALL, NodeId::ROOT);
        EulerDiagram {
            nodes: vec![EulerNode::new(NormalPredicate::ALL, false)],
            index,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node with the given id.
    ///
    /// # Panics
    /// If `id` did not come from this diagram.
    pub fn node(&self, id: NodeId) -> &EulerNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&EulerNode> {
        self.nodes.get(id.index())
    }

    /// The node holding exactly `predicate`, if any.
    pub fn find(&self, predicate: NormalPredicate) -> Option<NodeId> {
        self.index.get(&predicate).copied()
    }

    /// All nodes in arena order (the root first).
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &EulerNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: the root always exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn principal_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.principal).count()
    }

    /// Predicates of synthetic nodes other than the root, in arena order.
    pub fn synthetic_predicates(&self) -> Vec<NormalPredicate> {
        self.nodes
            .iter()
            .skip(1)
            .filter(|n| !n.principal)
            .map(|n| n.predicate)
            .collect()
    }

    /// Nodes ordered so that every node follows all of its parents.
    ///
    /// Ties are broken by arena order, so the result is deterministic.
    pub fn topological_order(&self) -> Vec<NodeId> {
        let mut pending: Vec<usize> = self.nodes.iter().map(|n| n.parents.len()).collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut ready: VecDeque<NodeId> = VecDeque::from([NodeId::ROOT]);
        while let Some(id) = ready.pop_front() {
            order.push(id);
            for &child in &self.node(id).children {
                let count = &mut pending[child.index()];
                *count -= 1;
                if *count == 0 {
                    ready.push_back(child);
                }
            }
        }
        order
    }

    /// Every strict ancestor of `id`, nearest first, each listed once.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut out = Vec::new();
        let mut queue: VecDeque<NodeId> = self.node(id).parents.iter().copied().collect();
        while let Some(next) = queue.pop_front() {
            if std::mem::replace(&mut seen[next.index()], true) {
                continue;
            }
            out.push(next);
            queue.extend(self.node(next).parents.iter().copied());
        }
        out
    }
}
