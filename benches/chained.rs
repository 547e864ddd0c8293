#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use chainmap::ChainedTable;
use criterion::{criterion_group, criterion_main, Criterion};
use proptest::{ prelude::{ any, Strategy}, strategy::ValueTree, test_runner::TestRunner};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn chained_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>()
    .new_tree(&mut runner)
    .unwrap()
    .current();


    let mut group = c.benchmark_group("Chained table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut chained_table = ChainedTable::with_buckets(1024);
    let mut rust_map = HashMap::new();
    group.bench_function("chainmap push", |b| {
        b.iter(
            || {
            for (key, value) in &items {
                // Empty proptest strings are rejected; skip them on both sides.
                let _ = chained_table.push(key, value);
            }

        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(
            || {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }

        });
    });
    group.bench_function("chainmap search_key", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = chained_table.search_key(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, chained_table_benches);

criterion_main!(benches);
