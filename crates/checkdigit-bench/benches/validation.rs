//! Validation throughput of every algorithm over generated codes.

use checkdigit_bench::{SizeTier, generate_samples};
use checkdigit_core::Algorithm;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for algorithm in Algorithm::ALL {
        let samples = generate_samples(algorithm, &SizeTier::Medium.config(42));
        let routine = algorithm.routine();

        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("is_valid", algorithm),
            &samples,
            |b, samples| {
                b.iter(|| samples.iter().filter(|s| routine.is_valid(&s.code)).count());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("calculate", algorithm),
            &samples,
            |b, samples| {
                b.iter(|| {
                    samples
                        .iter()
                        .filter(|s| routine.calculate(&s.input).is_ok())
                        .count()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_validation);
criterion_main!(benches);
