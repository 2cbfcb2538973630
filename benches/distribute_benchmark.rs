//! Distribution throughput benchmarks.
//!
//! Verifies the single pass stays linear in item count for realistic feed sizes
//! and column counts.
//!
//! Run with: cargo bench --bench distribute_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use newsgrid::layout::ColumnDistributor;
use newsgrid::model::ContentItem;

/// Generate a feed cycling through the three height classes.
fn generate_feed(count: usize) -> Vec<ContentItem> {
    (0..count)
        .map(|i| {
            let item = ContentItem::new().with_key(format!("article-{i}"));
            match i % 7 {
                0 => item.with_class("featured"),
                1 | 3 | 5 => item.with_image(format!("https://img.example/{i}.jpg")),
                _ => item,
            }
        })
        .collect()
}

fn benchmark_item_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute_items");
    let distributor = ColumnDistributor::default();

    for count in [10, 100, 1_000, 10_000] {
        let feed = generate_feed(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &feed, |b, feed| {
            b.iter(|| distributor.distribute(black_box(feed), black_box(3)))
        });
    }

    group.finish();
}

fn benchmark_column_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute_columns");
    let distributor = ColumnDistributor::default();
    let feed = generate_feed(500);

    for columns in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(columns), &columns, |b, &columns| {
            b.iter(|| distributor.distribute(black_box(&feed), black_box(columns)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_item_scaling, benchmark_column_scaling);
criterion_main!(benches);
