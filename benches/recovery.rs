use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_ordermap::{from_str, to_string, value, OrderedMap, Value};

fn flat_object(size: usize) -> OrderedMap {
    let map = OrderedMap::new();
    for i in (0..size).rev() {
        map.add(format!("field{}", i), format!("value {}", i));
    }
    map
}

fn nested_object(size: usize) -> OrderedMap {
    let map = OrderedMap::new();
    for i in 0..size {
        map.add(
            format!("record{}", i),
            value!({
                "zeta": [1, 2, { "y": true, "x": null }],
                "alpha": "text, with: structure {}",
                "mid": { "b": 2.5, "a": (-1) }
            }),
        );
    }
    map
}

fn benchmark_serialize_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_flat");

    for size in [10, 50, 100, 500].iter() {
        let map = flat_object(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| to_string(black_box(map)))
        });
    }
    group.finish();
}

fn benchmark_recover_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("recover_flat");

    for size in [10, 50, 100, 500].iter() {
        let json = to_string(&flat_object(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| from_str(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_recover_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("recover_nested");

    for size in [1, 10, 50].iter() {
        let json = to_string(&nested_object(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| from_str(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_comparison_with_serde_json(c: &mut Criterion) {
    let json = to_string(&nested_object(10)).unwrap();

    let mut group = c.benchmark_group("ordered_vs_unordered");

    group.bench_function("order_recovery", |b| b.iter(|| from_str(black_box(&json))));

    group.bench_function("serde_delivery_order", |b| {
        b.iter(|| serde_json::from_str::<OrderedMap>(black_box(&json)))
    });

    group.bench_function("serde_json_value", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&json)))
    });

    group.finish();
}

fn benchmark_structural_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural");

    group.bench_function("sort_keys_500", |b| {
        b.iter(|| {
            let map = flat_object(500);
            map.sort_keys();
            black_box(map)
        })
    });

    group.bench_function("sort_values_500", |b| {
        b.iter(|| {
            let map = flat_object(500);
            map.sort_values();
            black_box(map)
        })
    });

    group.bench_function("add_existing_500", |b| {
        let map = flat_object(500);
        let mut i = 0usize;
        b.iter(|| {
            map.add(format!("field{}", i % 500), Value::Null);
            i += 1;
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_flat,
    benchmark_recover_flat,
    benchmark_recover_nested,
    benchmark_comparison_with_serde_json,
    benchmark_structural_operations
);
criterion_main!(benches);
