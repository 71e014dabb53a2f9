//! Pace model and end-to-end estimation benchmarks.
//!
//! Run with: `cargo bench --package readpace-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use readpace_bench::{StoreFixture, TARGET_PAGE, synthetic_series};
use readpace_lib::prelude::*;
use readpace_lib::fit_pace;
use std::hint::black_box;

const LOG_SIZES: [usize; 4] = [2, 30, 365, 5_000];

fn pace_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_pace");

    for len in LOG_SIZES {
        let (pages, days) = synthetic_series(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| fit_pace(black_box(&pages), black_box(&days), i64::from(TARGET_PAGE)));
        });
    }

    group.finish();
}

fn estimate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_json_store");

    for len in [30, 365] {
        let fixture = StoreFixture::new(len);
        let estimator = Estimator::new(&fixture.store);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| estimator.estimate(black_box(fixture.session)));
        });
    }

    group.finish();
}

criterion_group!(benches, pace_benchmark, estimate_benchmark);
criterion_main!(benches);
