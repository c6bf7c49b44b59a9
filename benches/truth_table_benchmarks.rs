//! Benchmarks for truth table generation
//!
//! Covers the text rewriting stages on their own and whole-table generation
//! as the variable count grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use latex_truth_table::implication::eliminate_implications;
use latex_truth_table::normalize::normalize;
use latex_truth_table::{TruthTableConfig, TruthTableGenerator};

const VARIABLES: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l'];

/// `a \to b \to ... ` over the first `n` variables
fn implication_chain(n: usize) -> String {
    VARIABLES[..n]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(r" \to ")
}

/// `(a \wedge \neg b) \vee (b \wedge \neg c) \vee ...` over the first `n` variables
fn alternating_terms(n: usize) -> String {
    (0..n)
        .map(|i| {
            let next = VARIABLES[(i + 1) % n];
            format!(r"({} \wedge \neg {})", VARIABLES[i], next)
        })
        .collect::<Vec<_>>()
        .join(r" \vee ")
}

fn bench_rewriting(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewriting");

    for n in [2, 4, 8, 12] {
        let chain = implication_chain(n);
        group.bench_with_input(BenchmarkId::new("normalize", n), &chain, |b, input| {
            b.iter(|| normalize(black_box(input)))
        });

        let normalized = normalize(&chain);
        group.bench_with_input(
            BenchmarkId::new("eliminate_implications", n),
            &normalized,
            |b, input| b.iter(|| eliminate_implications(black_box(input))),
        );
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    let generator = TruthTableGenerator::new(TruthTableConfig {
        max_variables: VARIABLES.len(),
        ..Default::default()
    });

    for n in [2, 4, 8, 12] {
        let formula = alternating_terms(n);
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::new("build", n), &formula, |b, input| {
            b.iter(|| generator.build(black_box(input)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("generate", n), &formula, |b, input| {
            b.iter(|| generator.generate(black_box(input)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rewriting, bench_generation);
criterion_main!(benches);
