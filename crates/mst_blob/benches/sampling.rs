mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mst_blob::sampling::{DiskRejectionSampling, PointSampling};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SPACINGS: [f64; 4] = [0.1, 0.05, 0.03, 0.02];

fn sampling_disk_rejection_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/disk_rejection");

    for &spacing in &SPACINGS {
        let strategy = DiskRejectionSampling::with_spacing(spacing);
        group.throughput(common::elements_throughput(strategy.max_attempts));

        group.bench_with_input(BenchmarkId::from_parameter(spacing), &spacing, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(385_926);
                let pts = strategy.generate(&mut rng);
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_disk_rejection_benches
}
criterion_main!(benches);
