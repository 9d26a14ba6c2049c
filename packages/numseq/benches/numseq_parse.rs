//! Benchmarks for parsing, membership testing and encoding of number sequences.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use numseq::{Limits, SequenceParser};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const SHORT: &str = "5-30/5,100";
const MANY_PARTS: &str = "1,3,5-9,20-40/4,100+10,200,-50--40,300-400/25,7,8,9,1000-1010";
const LARGE_RANGE: &str = "0-1000000";

fn entrypoint(c: &mut Criterion) {
    let integers = SequenceParser::new(Limits::<i64>::between(-1_000_000, 1_000_000));
    let floats = SequenceParser::<f64>::unbounded();

    let mut group = c.benchmark_group("numseq_parse");

    group.bench_function("parse_short", |b| {
        b.iter(|| integers.parse(black_box(SHORT)));
    });

    group.bench_function("parse_many_parts", |b| {
        b.iter(|| integers.parse(black_box(MANY_PARTS)));
    });

    group.bench_function("parse_float_exponential", |b| {
        b.iter(|| floats.parse(black_box("1e-5-1.001e-5/1e-8,-2e+2+1e02")));
    });

    group.bench_function("subsequences_large_range", |b| {
        b.iter(|| integers.subsequences(black_box(LARGE_RANGE)));
    });

    group.finish();

    let mut group = c.benchmark_group("numseq_contains");

    group.bench_function("contains_large_range", |b| {
        b.iter(|| integers.contains(black_box(LARGE_RANGE), black_box(777_777)));
    });

    group.bench_function("contains_float_tolerance", |b| {
        b.iter(|| floats.contains(black_box("0-1000000/0.5"), black_box(250_000.5)));
    });

    group.finish();

    let mut group = c.benchmark_group("numseq_encode");

    let values = integers.parse(MANY_PARTS).expect("benchmark input is valid");

    group.bench_function("encode_many_parts", |b| {
        b.iter(|| numseq::encode(black_box(values.iter().copied())));
    });

    group.finish();
}
