//! Structural snapshots and text rendering.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use mm_predicate::ensure_sufficient_stack;

use super::EulerDiagram;
use crate::NodeId;

/// Order-insensitive structure of a diagram below some node.
///
/// Keys are predicates, with synthetic ones written `[p]`. Two diagrams
/// built from the same predicates in any order have equal snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot(pub BTreeMap<String, Snapshot>);

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Child snapshot under `key`.
    pub fn get(&self, key: &str) -> Option<&Snapshot> {
        self.0.get(key)
    }

    /// Sorted keys of the immediate children.
    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

impl EulerDiagram {
    /// Snapshot of everything below the root.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_of(self.root())
    }

    fn snapshot_of(&self, id: NodeId) -> Snapshot {
        ensure_sufficient_stack(|| {
            Snapshot(
                self.node(id)
                    .children()
                    .iter()
                    .map(|&child| (self.label(child), self.snapshot_of(child)))
                    .collect(),
            )
        })
    }

    /// Display label: the predicate, bracketed if synthetic.
    pub fn label(&self, id: NodeId) -> String {
        let node = self.node(id);
        if node.is_principal() || id == self.root() {
            node.predicate().to_string()
        } else {
            format!("[{}]", node.predicate())
        }
    }

    /// Indented tree, one line per path to each node.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, self.root(), 0);
        out
    }

    fn render_into(&self, out: &mut String, id: NodeId, depth: usize) {
        let _ = writeln!(out, "{:indent$}{}", "", self.label(id), indent = depth * 2);
        ensure_sufficient_stack(|| {
            for &child in self.node(id).children() {
                self.render_into(out, child, depth + 1);
            }
        });
    }
}

impl fmt::Display for EulerDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
