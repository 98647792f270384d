use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jcs_core::{canonicalize, Options};

/// Builds a synthetic document with `width` members per object and `depth`
/// levels of nesting, keys deliberately out of sorted order so the
/// serializer's sort is actually exercised.
fn synthetic_document(width: usize, depth: usize) -> Vec<u8> {
    fn build(width: usize, depth: usize, out: &mut String) {
        if depth == 0 {
            out.push_str("3.14159");
            return;
        }
        out.push('{');
        for i in (0..width).rev() {
            if i != width - 1 {
                out.push(',');
            }
            out.push_str(&format!("\"key_{i:04}\":"));
            build(width, depth - 1, out);
        }
        out.push('}');
    }
    let mut s = String::new();
    build(width, depth, &mut s);
    s.into_bytes()
}

fn bench_wide_flat_object(c: &mut Criterion) {
    let doc = synthetic_document(2000, 1);
    c.bench_function("canonicalize_wide_flat_object", |b| {
        b.iter(|| black_box(canonicalize(black_box(&doc), Options::default()).unwrap()))
    });
}

fn bench_deeply_nested_object(c: &mut Criterion) {
    let doc = synthetic_document(4, 100);
    c.bench_function("canonicalize_deeply_nested_object", |b| {
        b.iter(|| black_box(canonicalize(black_box(&doc), Options::default()).unwrap()))
    });
}

fn bench_array_of_numbers(c: &mut Criterion) {
    let mut s = String::from("[");
    for i in 0..10_000 {
        if i != 0 {
            s.push(',');
        }
        s.push_str(&format!("{i}.5"));
    }
    s.push(']');
    let doc = s.into_bytes();

    c.bench_function("canonicalize_array_of_numbers", |b| {
        b.iter(|| black_box(canonicalize(black_box(&doc), Options::default()).unwrap()))
    });
}

criterion_group!(benches, bench_wide_flat_object, bench_deeply_nested_object, bench_array_of_numbers);
criterion_main!(benches);
