//! Recurrence versus weighted-sum computation of the ISO/IEC 7064 pure systems.
#![allow(clippy::expect_used)]

use checkdigit_core::{
    CheckDigit, POLYNOMIAL_97_10, POLYNOMIAL_1271_36, PURE_97_10, PURE_1271_36, PureSystem,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn payload(charset: &str, len: usize) -> String {
    let chars: Vec<char> = charset.chars().collect();
    (0..len).map(|i| chars[(i * 7 + 3) % chars.len()]).collect()
}

fn bench_pair(
    c: &mut Criterion,
    group_name: &str,
    charset: &str,
    recursive: &PureSystem,
    polynomial: &PureSystem,
) {
    let mut group = c.benchmark_group(group_name);
    for len in [10, 20, 40, 80] {
        let input = payload(charset, len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("recurrence", len), &input, |b, input| {
            b.iter(|| recursive.calculate(input).expect("valid payload"));
        });

        group.bench_with_input(BenchmarkId::new("polynomial", len), &input, |b, input| {
            b.iter(|| polynomial.calculate(input).expect("valid payload"));
        });
    }
    group.finish();
}

fn bench_pure_forms(c: &mut Criterion) {
    bench_pair(c, "mod_97_10", "0123456789", &PURE_97_10, &POLYNOMIAL_97_10);
    bench_pair(
        c,
        "mod_1271_36",
        "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        &PURE_1271_36,
        &POLYNOMIAL_1271_36,
    );
}

criterion_group!(benches, bench_pure_forms);
criterion_main!(benches);
