//! Benchmarks for catalog queries
//!
//! Run with: cargo bench --package catalog
//!
//! Builds a synthetic catalog of 10,000 rated movies and times the queries
//! that scan or sort the whole collection.

use catalog::{FilterChain, GenreFilter, MinimumRatingFilter, MovieCatalog};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const GENRES: [&str; 5] = ["Action", "Drama", "Sci-Fi", "Comedy", "Horror"];

fn build_test_catalog() -> MovieCatalog {
    let mut catalog = MovieCatalog::with_seed(2010);

    for i in 0..10_000 {
        let id = catalog.add_movie(
            &format!("Movie number {i}"),
            &format!("Director {}", i % 250),
            1950 + (i % 75),
            GENRES[i as usize % GENRES.len()],
        );
        for r in 0..(i % 7) {
            catalog
                .rate_movie(&id, 1 + (i + r) % 5)
                .expect("Generated rating should be valid");
        }
    }

    catalog
}

fn bench_top_rated(c: &mut Criterion) {
    let catalog = build_test_catalog();

    c.bench_function("top_rated_movies", |b| {
        b.iter(|| black_box(catalog.top_rated_movies()))
    });
}

fn bench_keyword_search(c: &mut Criterion) {
    let catalog = build_test_catalog();

    c.bench_function("search_by_keyword", |b| {
        b.iter(|| black_box(catalog.search_by_keyword(black_box("NUMBER 99"))))
    });
}

fn bench_filter_chain(c: &mut Criterion) {
    let catalog = build_test_catalog();
    let chain = FilterChain::new()
        .add_filter(GenreFilter::new("sci-fi"))
        .add_filter(MinimumRatingFilter::new(3.0));

    c.bench_function("filter_chain", |b| {
        b.iter(|| black_box(catalog.filter(black_box(&chain))))
    });
}

criterion_group!(
    benches,
    bench_top_rated,
    bench_keyword_search,
    bench_filter_chain
);
criterion_main!(benches);
