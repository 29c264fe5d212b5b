// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery view-model operations.
//!
//! Measures the performance of:
//! - Loading a collection into the view
//! - Filter changes (category and text search)
//! - Paging through a large filtered collection

use chrono::{DateTime, Duration, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vitrine::application::query::GalleryView;
use vitrine::domain::media::{GalleryFilter, MediaItem, MediaKind};

const ITEM_COUNT: usize = 10_000;

/// Build a large synthetic collection for the paging benchmarks.
fn large_collection() -> Vec<MediaItem> {
    let categories = ["professional", "casual", "exclusive"];
    let epoch = DateTime::<Utc>::from_timestamp(1_717_243_200, 0).unwrap_or_default();
    (1..=ITEM_COUNT)
        .map(|n| MediaItem {
            id: format!("photo_{n}"),
            kind: MediaKind::Photo,
            title: format!("Photo session {n}"),
            description: format!("Professional photo shoot #{n}"),
            url: format!("https://example.com/{n}.jpg"),
            thumbnail_url: None,
            duration: None,
            category: categories[(n - 1) % categories.len()].to_string(),
            is_premium: n % 4 == 0,
            timestamp: epoch - Duration::days(n as i64),
        })
        .collect()
}

/// Benchmark loading a collection into a fresh view.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_paging");

    let items = large_collection();

    group.bench_function("load_collection", |b| {
        b.iter(|| {
            let mut view = GalleryView::new(12);
            view.load(items.clone());
            black_box(&view);
        });
    });

    group.finish();
}

/// Benchmark filter changes on a populated view.
fn bench_set_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_paging");

    let mut view = GalleryView::new(12);
    view.load(large_collection());

    group.bench_function("set_category_filter", |b| {
        b.iter(|| {
            let visible = view.set_filter(GalleryFilter::Category("exclusive".to_string()));
            black_box(visible.len());
        });
    });

    group.bench_function("set_search_filter", |b| {
        b.iter(|| {
            let visible = view.set_filter(GalleryFilter::Search("shoot #42".to_string()));
            black_box(visible.len());
        });
    });

    group.finish();
}

/// Benchmark paging to the end of a filtered collection.
fn bench_show_more(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_paging");

    let items = large_collection();

    group.bench_function("show_more_to_end", |b| {
        b.iter(|| {
            let mut view = GalleryView::new(500);
            view.load(items.clone());
            while view.has_more() {
                view.show_more();
            }
            black_box(view.info());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_set_filter, bench_show_more);
criterion_main!(benches);
