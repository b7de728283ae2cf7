//! Benchmarks for the pricing engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sona_desk::pricing::{compute, PricingInput, Purity};

fn benchmark_compute(c: &mut Criterion) {
    let input = PricingInput {
        weight: 10.0,
        purity: Purity::Gold22k,
        rate_per_gram: 7000.0,
        discount_per_gram: 50.0,
        making_charge: 500.0,
        stone_charge: 0.0,
        gst_percent: 3.0,
        old_metal_weight: 0.0,
        old_metal_touch: 0.0,
        old_metal_rate: 0.0,
    };

    c.bench_function("pricing_compute", |b| {
        b.iter(|| compute(black_box(&input)))
    });
}

fn benchmark_compute_with_exchange(c: &mut Criterion) {
    let input = PricingInput {
        weight: 10.0,
        purity: Purity::Gold22k,
        rate_per_gram: 7000.0,
        discount_per_gram: 50.0,
        making_charge: 500.0,
        stone_charge: 250.0,
        gst_percent: 3.0,
        old_metal_weight: 5.0,
        old_metal_touch: 91.6,
        old_metal_rate: 6500.0,
    };

    c.bench_function("pricing_compute_with_exchange", |b| {
        b.iter(|| compute(black_box(&input)))
    });
}

criterion_group!(benches, benchmark_compute, benchmark_compute_with_exchange);
criterion_main!(benches);
