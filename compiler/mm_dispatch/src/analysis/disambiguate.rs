//! Route disambiguation for nodes with several parents.
//!
//! Each parent contributes one candidate sequence. Where all candidates
//! agree (their longest common prefix and suffix) the merged sequence keeps
//! them; the differing middles are replaced by a single synthesized entry
//! that fails at dispatch with the list of possible fallbacks. A middle
//! holding a meta-method cannot be replaced this way and fails compilation.

use mm_lattice::{EulerDiagram, NodeId};

use super::Route;
use crate::CompileError;

pub(super) fn disambiguate(
    node: NodeId,
    candidates: Vec<Vec<Route>>,
    diagram: &EulerDiagram,
) -> Result<Vec<Route>, CompileError> {
    let mut unique: Vec<Vec<Route>> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    if unique.len() <= 1 {
        return Ok(unique.pop().unwrap_or_default());
    }

    let predicate = diagram.node(node).predicate();
    let shortest = unique.iter().map(Vec::len).min().unwrap_or(0);
    let prefix = common_prefix_len(&unique);
    let suffix = common_suffix_len(&unique).min(shortest - prefix);

    let middles = unique
        .iter()
        .map(|candidate| &candidate[prefix..candidate.len() - suffix]);
    if middles.clone().flatten().any(Route::is_meta) {
        return Err(CompileError::MultiplePathsTo { predicate });
    }

    let fallbacks = middles
        .filter_map(<[Route]>::last)
        .map(|route| diagram.node(route.node()).predicate().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    tracing::debug!(%predicate, %fallbacks, "ambiguous fallbacks");

    let first = &unique[0];
    let mut merged = Vec::with_capacity(prefix + 1 + suffix);
    merged.extend_from_slice(&first[..prefix]);
    merged.push(Route::Ambiguous {
        node,
        fallbacks: fallbacks.into(),
    });
    merged.extend_from_slice(&first[first.len() - suffix..]);
    Ok(merged)
}

fn common_prefix_len(candidates: &[Vec<Route>]) -> usize {
    let Some((first, rest)) = candidates.split_first() else {
        return 0;
    };
    (0..first.len())
        .take_while(|&i| rest.iter().all(|c| c.get(i) == Some(&first[i])))
        .count()
}

fn common_suffix_len(candidates: &[Vec<Route>]) -> usize {
    let Some((first, rest)) = candidates.split_first() else {
        return 0;
    };
    (1..=first.len())
        .take_while(|&n| {
            let route = &first[first.len() - n];
            rest.iter()
                .all(|c| c.len() >= n && &c[c.len() - n] == route)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mm_lattice::NodeId;

    use super::*;

    fn method(rule: usize) -> Route {
        Route::Method {
            rule,
            position: 0,
            node: NodeId::ROOT,
            meta: false,
        }
    }

    #[test]
    fn prefix_and_suffix() {
        let candidates = vec![
            vec![method(0), method(1), method(3)],
            vec![method(0), method(2), method(3)],
        ];
        assert_eq!(common_prefix_len(&candidates), 1);
        assert_eq!(common_suffix_len(&candidates), 1);
    }

    #[test]
    fn no_common_parts() {
        let candidates = vec![vec![method(1)], vec![method(2)]];
        assert_eq!(common_prefix_len(&candidates), 0);
        assert_eq!(common_suffix_len(&candidates), 0);
    }

    #[test]
    fn suffix_of_unequal_lengths() {
        let candidates = vec![vec![method(1), method(9)], vec![method(9)]];
        assert_eq!(common_prefix_len(&candidates), 0);
        assert_eq!(common_suffix_len(&candidates), 1);
    }

    #[test]
    fn ambiguous_routes_compare_by_fallbacks() {
        let a = Route::Ambiguous {
            node: NodeId::ROOT,
            fallbacks: Arc::from("a/*, */b"),
        };
        assert_eq!(a.clone(), a);
        assert!(!a.is_meta());
    }
}
