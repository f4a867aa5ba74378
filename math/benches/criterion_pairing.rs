use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bn256_math::cyclic_group::IsGroup;
use bn256_math::elliptic_curve::short_weierstrass::curves::bn_256::{
    curve::BN256Curve, pairing::BN256AtePairing, twist::BN256TwistCurve,
};
use bn256_math::elliptic_curve::traits::{IsEllipticCurve, IsPairing};

pub fn bn256_elliptic_curve_benchmarks(c: &mut Criterion) {
    let p = BN256Curve::generator();
    let q = BN256TwistCurve::generator();
    let scalar: u64 = 0x38432b4a81a75cf1;

    let mut group = c.benchmark_group("bn256");
    group.significance_level(0.1).sample_size(100);

    group.bench_function("g1_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&p).operate_with_self(black_box(scalar))));
    });

    group.bench_function("g2_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&q).operate_with_self(black_box(scalar))));
    });

    group.bench_function("ate_pairing", |bencher| {
        bencher.iter(|| black_box(BN256AtePairing::compute(black_box(&p), black_box(&q))));
    });

    group.finish();
}

criterion_group!(bn256, bn256_elliptic_curve_benchmarks);
criterion_main!(bn256);
