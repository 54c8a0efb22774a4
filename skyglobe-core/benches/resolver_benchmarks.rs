//! Criterion benchmarks comparing the linear and envelope-indexed resolvers.
//!
//! The synthetic world is a grid of square "countries", each with a hole, so
//! the cost of the ring test dominates as it does with real boundaries.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package skyglobe-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geo::Coord;
use skyglobe_core::test_support::square_with_hole;
use skyglobe_core::{
    BoundaryDataset, BoundaryFeature, CountryRecord, EnvelopeResolver, LinearResolver,
    PointResolver,
};

/// Grid edge lengths; the dataset holds `n * n` features.
const GRID_SIZES: &[u32] = &[4, 8, 16];

/// Build an `n * n` grid of 5° cells starting at (-40, -40).
fn grid_dataset(n: u32) -> BoundaryDataset {
    let mut countries = Vec::new();
    let mut features = Vec::new();
    for row in 0..n {
        for col in 0..n {
            let alpha2 = format!("{}{}", letter(row), letter(col));
            let alpha3 = format!("{alpha2}X");
            let x0 = -40.0 + f64::from(col) * 5.0;
            let y0 = -40.0 + f64::from(row) * 5.0;
            let record = CountryRecord::new(
                alpha2.clone(),
                alpha3.clone(),
                alpha2,
                Coord {
                    x: x0 + 2.5,
                    y: y0 + 2.5,
                },
            )
            .unwrap_or_else(|err| panic!("grid record should build: {err}"));
            countries.push(record);
            features.push(BoundaryFeature::new(
                alpha3,
                square_with_hole(
                    (x0, y0, x0 + 4.5, y0 + 4.5),
                    (x0 + 2.0, y0 + 2.0, x0 + 2.5, y0 + 2.5),
                ),
            ));
        }
    }
    BoundaryDataset::new(countries, features)
        .unwrap_or_else(|err| panic!("grid dataset should build: {err}"))
}

fn letter(index: u32) -> char {
    char::from_digit(index + 10, 36)
        .map_or('Z', |c| c.to_ascii_uppercase())
}

fn bench_resolvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_country");
    for &n in GRID_SIZES {
        let dataset = Arc::new(grid_dataset(n));
        let linear = LinearResolver::new(Arc::clone(&dataset));
        let indexed = EnvelopeResolver::new(dataset);
        // Last cell of the grid: the worst case for a linear scan.
        let far = -40.0 + f64::from(n - 1) * 5.0 + 1.0;

        group.bench_with_input(BenchmarkId::new("linear", n * n), &far, |b, &far| {
            b.iter(|| linear.resolve_country(black_box(far), black_box(far)));
        });
        group.bench_with_input(BenchmarkId::new("envelope", n * n), &far, |b, &far| {
            b.iter(|| indexed.resolve_country(black_box(far), black_box(far)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolvers);
criterion_main!(benches);
