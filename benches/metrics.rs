use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fuzzymetrics::algorithms::{Levenshtein, Metric, SmithWatermanGotoh};
use fuzzymetrics::batch;
use fuzzymetrics::cache::{BoundedCache, UnboundedCache};
use fuzzymetrics::simplifiers::ToLowerCase;
use fuzzymetrics::tokenizers::Whitespace;
use fuzzymetrics::{string_metrics, Multiset, StringMetricBuilder};

/// Deterministic pseudo-words so runs are comparable.
fn generate(len: usize, seed: u64) -> String {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..len)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if i % 6 == 5 {
                ' '
            } else {
                char::from(b'a' + ((state >> 59) % 26) as u8)
            }
        })
        .collect()
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    let levenshtein = Levenshtein::new();
    let weighted = Levenshtein::with_costs(1.0, 2.0).unwrap();

    for len in [8, 32, 128] {
        let (a, b) = (generate(len, 1), generate(len, 2));
        group.bench_with_input(BenchmarkId::new("levenshtein", len), &(&a, &b), |bench, val| {
            bench.iter(|| black_box(levenshtein.compare(val.0, val.1)))
        });
        group.bench_with_input(BenchmarkId::new("weighted", len), &(&a, &b), |bench, val| {
            bench.iter(|| black_box(weighted.compare(val.0, val.1)))
        });
    }
    group.finish();
}

fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("smith_waterman_gotoh");
    let metric = SmithWatermanGotoh::new();

    for len in [8, 32, 128] {
        let (a, b) = (generate(len, 3), generate(len, 4));
        group.bench_with_input(BenchmarkId::from_parameter(len), &(&a, &b), |bench, val| {
            bench.iter(|| black_box(metric.compare(val.0, val.1)))
        });
    }
    group.finish();
}

fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let (a, b) = (generate(120, 5), generate(120, 6));

    let jaccard = string_metrics::jaccard();
    group.bench_function("jaccard", |bench| {
        bench.iter(|| black_box(jaccard.compare(&a, &b)))
    });

    let cached = StringMetricBuilder::with_multiset(fuzzymetrics::algorithms::CosineSimilarity)
        .simplify(Arc::new(ToLowerCase))
        .cache_strings(Arc::new(BoundedCache::<String>::new(1024)))
        .tokenize(Arc::new(Whitespace))
        .cache_tokens(Arc::new(UnboundedCache::<Multiset<String>>::new()))
        .build();
    group.bench_function("cosine_cached", |bench| {
        bench.iter(|| black_box(cached.compare(&a, &b)))
    });

    let simon_white = string_metrics::simon_white();
    group.bench_function("simon_white", |bench| {
        bench.iter(|| black_box(simon_white.compare(&a, &b)))
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let metric = string_metrics::jaro_winkler();
    let choices: Vec<String> = (0..1000).map(|i| generate(16, i)).collect();
    let query = generate(16, 7);

    c.bench_function("batch/extract_1000", |bench| {
        bench.iter(|| black_box(batch::extract(&metric, &query, &choices, 10, 0.0)))
    });
}

criterion_group!(benches, bench_edit, bench_alignment, bench_pipelines, bench_batch);
criterion_main!(benches);
