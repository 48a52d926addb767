// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use thicket_rtree::{Point2, RTree2, Rect2};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect2> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect2::from_corners(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

fn to_rstar_rects(v: &[Rect2]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| {
            Rectangle::from_corners(
                [r.min.coords[0], r.min.coords[1]],
                [r.max.coords[0], r.max.coords[1]],
            )
        })
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let window = Rect2::from_corners(100.0, 100.0, 500.0, 500.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("thicket_build_query_n{}", n), |b| {
            b.iter_batched(
                RTree2::new,
                |mut tree| {
                    for &r in &rects {
                        tree.insert(r).expect("grid rectangles are valid");
                    }
                    let hits = tree.search_region(&window).expect("valid window").len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [window.min.coords[0], window.min.coords[1]],
                        [window.max.coords[0], window.max.coords[1]],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_nearest_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_nearest_external_compare");
    let rects = gen_grid_rects(96, 10.0);
    let queries: Vec<[f64; 2]> = (0..256)
        .map(|i| {
            let t = i as f64;
            [(t * 37.0) % 960.0, (t * 61.0) % 960.0]
        })
        .collect();
    group.throughput(Throughput::Elements(queries.len() as u64));

    let mut thicket = RTree2::new();
    for &r in &rects {
        thicket.insert(r).expect("grid rectangles are valid");
    }
    group.bench_function("thicket_nearest", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(thicket.nearest_neighbor(&Point2::new(*q)));
            }
        });
    });

    let rstar_tree = RTree::bulk_load(to_rstar_rects(&rects));
    group.bench_function("rstar_nearest", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(rstar_tree.nearest_neighbor(q));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rtree_external_compare,
    bench_nearest_external_compare
);
criterion_main!(benches);
