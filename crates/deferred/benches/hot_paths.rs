use criterion::{Criterion, black_box, criterion_group, criterion_main};
use deferred::functional::{fold, map};
use deferred::{_1, _2, _3, Expr, by_fn, lambda};

fn bench_arithmetic_tree(c: &mut Criterion) {
    let f = lambda((_1 + _2 * 2i64) * (_3 - 1i64) / 3i64);

    c.bench_function("lambda_arithmetic", |b| {
        b.iter(|| f.call(black_box((3i64, 4i64, 7i64))))
    });

    let native = |x: i64, y: i64, z: i64| (x + y * 2) * (z - 1) / 3;
    c.bench_function("closure_arithmetic", |b| {
        b.iter(|| native(black_box(3), black_box(4), black_box(7)))
    });
}

fn bench_predicate(c: &mut Criterion) {
    let in_range = lambda(_1.greater_eq(_2).and(_1.less(_3)));

    c.bench_function("lambda_predicate", |b| {
        b.iter(|| in_range.call(black_box((50i32, 0i32, 100i32))))
    });
}

fn bench_slice_call(c: &mut Criterion) {
    let clamp = by_fn(|x: i64, lo: i64, hi: i64| x.clamp(lo, hi));
    let f = lambda(clamp.bind((_1 * 3i64, _2, _3)));
    let args = [10i64, 0, 20];

    c.bench_function("lambda_call_slice", |b| {
        b.iter(|| f.call_slice(black_box(&args[..])).unwrap())
    });
}

fn bench_sequence_utilities(c: &mut Criterion) {
    let items: Vec<i64> = (0..10_000).collect();
    let square = lambda(_1 * _1);
    let add = lambda(_1 + _2);

    c.bench_function("map_square_10k", |b| {
        b.iter(|| map(square.as_fn(), black_box(&items)))
    });
    c.bench_function("fold_sum_10k", |b| {
        b.iter(|| fold(add.as_fn2(), 0, black_box(&items)))
    });
}

criterion_group!(
    hot_paths,
    bench_arithmetic_tree,
    bench_predicate,
    bench_slice_call,
    bench_sequence_utilities
);
criterion_main!(hot_paths);
