//! The selector: a decision table shaped like the Euler diagram.
//!
//! Starting at the root, the children of the current node are tested in
//! order and the first one whose predicate matches becomes the current
//! node. When no child matches, the current node's thunk is selected.

use mm_lattice::{EulerDiagram, NodeId};
use mm_predicate::Matcher;
use smallvec::SmallVec;

pub(crate) struct Selector {
    children: Vec<SmallVec<[NodeId; 4]>>,
    matchers: Vec<Matcher>,
}

impl Selector {
    pub(crate) fn new(diagram: &EulerDiagram) -> Self {
        let mut children = Vec::with_capacity(diagram.len());
        let mut matchers = Vec::with_capacity(diagram.len());
        for (_, node) in diagram.nodes() {
            children.push(node.children().iter().copied().collect());
            matchers.push(Matcher::from_normal(node.predicate()));
        }
        Selector { children, matchers }
    }

    /// The most specific node recognizing `discriminant`.
    pub(crate) fn select(&self, discriminant: &str) -> NodeId {
        let mut current = NodeId::ROOT;
        'descend: loop {
            for &child in &self.children[current.index()] {
                if self.matchers[child.index()].is_match(discriminant) {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    pub(crate) fn children(&self, node: NodeId) -> &[NodeId] {
        &self.children[node.index()]
    }

    pub(crate) fn matcher(&self, node: NodeId) -> &Matcher {
        &self.matchers[node.index()]
    }
}
