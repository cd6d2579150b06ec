//! Insertion-based construction.
//!
//! To insert `p`, the builder walks the DAG breadth-first from the root,
//! descending only into nodes that contain or overlap `p`. Every overlap
//! `q = p ∩ n` is inserted first as a synthetic node, after which the walk
//! is repeated until it finds no new intersections. The new node is then
//! linked below its minimal supersets and above its maximal subsets, and
//! the edges it now sits between are removed.

use std::collections::VecDeque;

use mm_predicate::{ensure_sufficient_stack, Algebra, NormalPredicate, Relation};

use super::{EulerDiagram, UnreachableFn};
use crate::node::EulerNode;
use crate::NodeId;

pub(super) struct Builder<'a> {
    diagram: EulerDiagram,
    algebra: &'a mut Algebra,
    is_unreachable: Option<&'a UnreachableFn<'a>>,
}

/// Where a predicate sits relative to the current diagram.
#[derive(Default)]
struct Placement {
    equal: Option<NodeId>,
    supersets: Vec<NodeId>,
    subsets: Vec<NodeId>,
    overlaps: Vec<NormalPredicate>,
}

impl<'a> Builder<'a> {
    pub(super) fn new(algebra: &'a mut Algebra, is_unreachable: Option<&'a UnreachableFn<'a>>) -> Self {
        Builder {
            diagram: EulerDiagram::with_root(),
            algebra,
            is_unreachable,
        }
    }

    pub(super) fn finish(self) -> EulerDiagram {
        self.diagram
    }

    pub(super) fn insert(&mut self, predicate: NormalPredicate, principal: bool) -> NodeId {
        if let Some(id) = self.diagram.find(predicate) {
            self.mark(id, principal);
            return id;
        }

        let placement = loop {
            let placement = self.classify(predicate);
            if let Some(id) = placement.equal {
                // Same set under a different spelling
                self.diagram.index.insert(predicate, id);
                self.mark(id, principal);
                return id;
            }

            let before = self.diagram.nodes.len();
            for &q in &placement.overlaps {
                if self.diagram.find(q).is_some() {
                    continue;
                }
                if self.is_unreachable.is_some_and(|f| f(q)) {
                    tracing::trace!(%q, "skipping unreachable intersection");
                    continue;
                }
                ensure_sufficient_stack(|| self.insert(q, false));
            }
            if self.diagram.nodes.len() == before {
                break placement;
            }
        };

        let parents = self.minimal_supersets(&placement.supersets);
        let children = self.maximal_subsets(predicate, &placement.subsets);
        tracing::debug!(
            %predicate,
            principal,
            parents = parents.len(),
            children = children.len(),
            "inserting node"
        );
        self.link(predicate, principal, &parents, &children)
    }

    fn mark(&mut self, id: NodeId, principal: bool) {
        if principal {
            self.diagram.nodes[id.index()].principal = true;
        }
    }

    fn classify(&mut self, predicate: NormalPredicate) -> Placement {
        let mut placement = Placement::default();
        let mut visited = vec![false; self.diagram.nodes.len()];
        let mut queue = VecDeque::from([NodeId::ROOT]);
        visited[NodeId::ROOT.index()] = true;

        while let Some(id) = queue.pop_front() {
            let node = &self.diagram.nodes[id.index()];
            let descend = match self.algebra.relation(predicate, node.predicate) {
                Relation::Equal => {
                    placement.equal = Some(id);
                    return placement;
                }
                Relation::Subset => {
                    placement.supersets.push(id);
                    true
                }
                Relation::Superset => {
                    placement.subsets.push(id);
                    false
                }
                Relation::Disjoint => false,
                Relation::Overlap(q) => {
                    placement.overlaps.push(q);
                    true
                }
            };
            if descend {
                for &child in &node.children {
                    if !std::mem::replace(&mut visited[child.index()], true) {
                        queue.push_back(child);
                    }
                }
            }
        }

        // The empty set sits below every leaf, where the walk may not reach.
        if let Some(none) = self.diagram.find(NormalPredicate::NONE) {
            if !visited[none.index()] {
                placement.subsets.push(none);
            }
        }
        placement
    }

    /// Supersets with no child that is also a superset.
    fn minimal_supersets(&self, supersets: &[NodeId]) -> Vec<NodeId> {
        supersets
            .iter()
            .copied()
            .filter(|&id| {
                !self.diagram.nodes[id.index()]
                    .children
                    .iter()
                    .any(|child| supersets.contains(child))
            })
            .collect()
    }

    /// Subsets with no parent that is also a subset of `predicate`.
    fn maximal_subsets(&mut self, predicate: NormalPredicate, subsets: &[NodeId]) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(subsets.len());
        for &id in subsets {
            let parents = self.diagram.nodes[id.index()].parents.clone();
            let covered = parents.iter().any(|parent| {
                let p = self.diagram.nodes[parent.index()].predicate;
                p != predicate && self.algebra.is_subset_of(p, predicate)
            });
            if !covered {
                out.push(id);
            }
        }
        out
    }

    fn link(
        &mut self,
        predicate: NormalPredicate,
        principal: bool,
        parents: &[NodeId],
        children: &[NodeId],
    ) -> NodeId {
        let id = NodeId::from_index(self.diagram.nodes.len());
        let nodes = &mut self.diagram.nodes;

        // The new node now sits between each parent and each child.
        for &parent in parents {
            nodes[parent.index()].children.retain(|c| !children.contains(c));
        }
        for &child in children {
            nodes[child.index()].parents.retain(|p| !parents.contains(p));
        }

        let mut node = EulerNode::new(predicate, principal);
        node.parents.extend(parents.iter().copied());
        node.children.extend(children.iter().copied());
        nodes.push(node);

        for &parent in parents {
            nodes[parent.index()].children.push(id);
        }
        for &child in children {
            nodes[child.index()].parents.push(id);
        }
        self.diagram.index.insert(predicate, id);
        id
    }
}
