//! Property tests: Euler diagrams do not depend on insertion order.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mm_lattice::EulerDiagram;
use mm_predicate::{to_normal_predicate, NormalPredicate};
use proptest::prelude::*;

const POOL: &[&str] = &[
    "/**", "/api/*", "/api/**", "/*/users", "/api/users", "*.js", "test.*", "a/*", "*/b", "a/b",
    "∅", "GET /*", "* /api/**",
];

fn normal(pattern: &str) -> NormalPredicate {
    to_normal_predicate(pattern).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn permutations_give_isomorphic_diagrams(order in Just(POOL.to_vec()).prop_shuffle()) {
        let reference = EulerDiagram::new(POOL.iter().map(|p| normal(p)));
        let shuffled = EulerDiagram::new(order.iter().map(|p| normal(p)));
        prop_assert_eq!(reference.snapshot(), shuffled.snapshot());
        prop_assert_eq!(reference.len(), shuffled.len());
    }

    #[test]
    fn subsets_give_principal_flags_by_membership(
        picked in prop::sample::subsequence(POOL.to_vec(), 1..POOL.len())
    ) {
        let d = EulerDiagram::new(picked.iter().map(|p| normal(p)));
        for p in &picked {
            let id = d.find(normal(p)).unwrap();
            prop_assert!(d.node(id).is_principal());
        }
    }
}
