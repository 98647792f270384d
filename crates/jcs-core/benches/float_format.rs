use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jcs_core::format_double;

const BOUNDARY_BITS: &[u64] = &[
    0x0000_0000_0000_0001, // min subnormal
    0x7fef_ffff_ffff_ffff, // MAX
    0x3eb0_c6f7_a0b5_ed8d, // 1e-6
    0x444b_1ae4_d6e2_ef50, // 1e21
    0x3ff0_0000_0000_0000, // 1
    0x4024_0000_0000_0000, // 10
];

fn bench_boundary_constants(c: &mut Criterion) {
    c.bench_function("format_double_boundaries", |b| {
        b.iter(|| {
            for &bits in BOUNDARY_BITS {
                black_box(format_double(black_box(f64::from_bits(bits))).unwrap());
            }
        })
    });
}

fn bench_random_bit_patterns(c: &mut Criterion) {
    // A fixed, non-random sequence of bit patterns (no RNG in the bench
    // itself, to keep it reproducible across runs) sweeping a range of
    // exponents so the subnormal and large-magnitude paths are exercised
    // alongside ordinary values.
    let bits: Vec<u64> = (0..2048u64)
        .map(|i| {
            let exponent = (i % 2046) + 1; // avoid subnormal/inf biased exponents
            let mantissa = i.wrapping_mul(0x9E37_79B9_7F4A_7C15) & 0x000F_FFFF_FFFF_FFFF;
            (exponent << 52) | mantissa
        })
        .collect();

    c.bench_function("format_double_sweep", |b| {
        b.iter(|| {
            for &bits in &bits {
                if let Ok(s) = format_double(black_box(f64::from_bits(bits))) {
                    black_box(s);
                }
            }
        })
    });
}

criterion_group!(benches, bench_boundary_constants, bench_random_bit_patterns);
criterion_main!(benches);
