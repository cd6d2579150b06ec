//! Euler-diagram lattice over normalized predicates.
//!
//! An [`EulerDiagram`] arranges predicates as a DAG ordered by strict
//! subset, rooted at `**`. Edges are covers only, and every pair of
//! overlapping predicates has its intersection present as a node, so the
//! structure is a meet-semilattice. Intersections added by the builder are
//! *synthetic*; predicates supplied by the caller are *principal*.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`].

mod euler;
mod node;

pub use euler::{EulerDiagram, Snapshot, UnreachableFn};
pub use node::{EulerNode, NodeId};
