//! Arena nodes of the Euler diagram.

use std::fmt;

use mm_predicate::NormalPredicate;
use smallvec::SmallVec;

/// Index of a node in an [`EulerDiagram`](crate::EulerDiagram).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, which always holds `**`.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Position in the node arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

pub(crate) type Edges = SmallVec<[NodeId; 4]>;

/// One set in the diagram.
#[derive(Clone, Debug)]
pub struct EulerNode {
    pub(crate) predicate: NormalPredicate,
    pub(crate) principal: bool,
    pub(crate) parents: Edges,
    pub(crate) children: Edges,
}

impl EulerNode {
    pub(crate) fn new(predicate: NormalPredicate, principal: bool) -> Self {
        EulerNode {
            predicate,
            principal,
            parents: Edges::new(),
            children: Edges::new(),
        }
    }

    pub fn predicate(&self) -> NormalPredicate {
        self.predicate
    }

    /// True if the predicate was supplied by the caller rather than
    /// synthesized as an intersection.
    pub fn is_principal(&self) -> bool {
        self.principal
    }

    /// Immediate supersets, in the order they were linked.
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// Immediate subsets, in the order they were linked.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
