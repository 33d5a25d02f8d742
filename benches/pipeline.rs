//! Benchmarks for the filter, sort and paginate pipeline.
//!
//! These benchmarks run the pipeline over a generated collection, the way
//! every render does.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inventario_tui::inventory::{demo_products, derive, FilterCriteria, Pager, ProductStore, SortBy, SortOrder};

fn store_with(count: usize) -> ProductStore {
    let mut store = ProductStore::new();
    for draft in demo_products(count) {
        store.add(draft);
    }
    store
}

fn bench_derive_default(c: &mut Criterion) {
    let store = store_with(1000);
    let criteria = FilterCriteria::default();
    let pager = Pager::default();

    c.bench_function("derive_1000_default", |b| {
        b.iter(|| derive(black_box(store.products()), &criteria, &pager).items.len())
    });
}

fn bench_derive_by_name(c: &mut Criterion) {
    let store = store_with(1000);
    let criteria = FilterCriteria {
        sort_by: SortBy::Name,
        sort_order: SortOrder::Desc,
        ..FilterCriteria::default()
    };
    let pager = Pager::with_page_size(12);

    c.bench_function("derive_1000_by_name_desc", |b| {
        b.iter(|| derive(black_box(store.products()), &criteria, &pager).items.len())
    });
}

fn bench_derive_search(c: &mut Criterion) {
    let store = store_with(1000);
    let criteria = FilterCriteria {
        search_term: "ut".to_string(),
        sort_by: SortBy::Stock,
        ..FilterCriteria::default()
    };
    let pager = Pager::default();

    c.bench_function("derive_1000_search_by_stock", |b| {
        b.iter(|| derive(black_box(store.products()), &criteria, &pager).total)
    });
}

criterion_group!(
    benches,
    bench_derive_default,
    bench_derive_by_name,
    bench_derive_search
);
criterion_main!(benches);
