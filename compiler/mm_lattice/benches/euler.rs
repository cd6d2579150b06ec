#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Euler-diagram construction benchmarks.
//!
//! Measures building diagrams from heavily overlapping predicate sets,
//! where most of the work is intersecting sibling predicates.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mm_lattice::EulerDiagram;
use mm_predicate::{to_normal_predicate, Algebra, NormalPredicate};

/// Flags `*A*B*…*` forms whose literal parts are not strictly increasing.
fn is_unreachable(p: NormalPredicate) -> bool {
    let p = p.as_str();
    if p.len() < 3 || !p.starts_with('*') || !p.ends_with('*') || p.contains("**") || p.contains('/') {
        return false;
    }
    let parts: Vec<&str> = p[1..p.len() - 1].split('*').collect();
    parts.windows(2).any(|w| w[0] >= w[1])
}

/// `*.A*`, `*.B*`, … : every pair overlaps.
fn dotted_letters(n: usize) -> Vec<NormalPredicate> {
    (b'A'..=b'Z')
        .take(n)
        .map(|c| to_normal_predicate(&format!("*.{}*", char::from(c))).unwrap())
        .collect()
}

/// Mostly nested or disjoint path prefixes.
fn path_prefixes(n: usize) -> Vec<NormalPredicate> {
    let letters = "abcdefghij";
    let mut out = Vec::new();
    for a in letters.chars() {
        for template in ["{a}*", "{a}/*", "{a}/a*", "a/{a}*", "{a}*/a*", "{a}*z", "{a}/*z"] {
            out.push(to_normal_predicate(&template.replace("{a}", &a.to_string())).unwrap());
        }
    }
    out.truncate(n);
    out
}

fn bench_overlapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler/overlapping");
    for n in [5, 10, 20] {
        let predicates = dotted_letters(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &predicates, |b, preds| {
            b.iter(|| {
                EulerDiagram::build(
                    black_box(preds.iter().copied()),
                    &mut Algebra::new(),
                    Some(&is_unreachable),
                )
            });
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler/nested");
    for n in [10, 35, 70] {
        let predicates = path_prefixes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &predicates, |b, preds| {
            b.iter(|| EulerDiagram::new(black_box(preds.iter().copied())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overlapping, bench_nested);
criterion_main!(benches);
