// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use thicket_rtree::{Point2, RTree2, Rect2};

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

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, world: f64, max_side: f64) -> Vec<Rect2> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * world;
        let y0 = rng.next_f64() * world;
        let w = rng.next_f64() * max_side;
        let h = rng.next_f64() * max_side;
        out.push(Rect2::from_corners(x0, y0, x0 + w, y0 + h));
    }
    out
}

fn build_tree(rects: &[Rect2]) -> RTree2 {
    let mut tree = RTree2::new();
    for &r in rects {
        tree.insert(r).expect("bench rectangles are valid");
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_build");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_grid_n{}", n), |b| {
            b.iter(|| {
                let tree = build_tree(&rects);
                black_box(tree.len());
            });
        });
    }
    let rects = gen_random_rects(4096, 2000.0, 25.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("insert_random_4096", |b| {
        b.iter(|| {
            let tree = build_tree(&rects);
            black_box(tree.len());
        });
    });
    group.finish();
}

fn bench_region_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_region_query");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let tree = build_tree(&rects);
        let window = Rect2::from_corners(100.0, 100.0, 500.0, 500.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("window_grid_n{}", n), |b| {
            b.iter(|| {
                let hits = tree.search_region(&window).expect("valid window");
                black_box(hits.len());
            });
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_nearest");
    let rects = gen_random_rects(8192, 2000.0, 10.0);
    let tree = build_tree(&rects);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let queries: Vec<Point2> = (0..256)
        .map(|_| Point2::new([rng.next_f64() * 2000.0, rng.next_f64() * 2000.0]))
        .collect();
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("random_8192", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.nearest_neighbor(q));
            }
        });
    });
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_delete");
    let rects = gen_random_rects(4096, 2000.0, 25.0);
    group.throughput(Throughput::Elements((rects.len() / 2) as u64));
    group.bench_function("delete_half_random_4096", |b| {
        b.iter_batched(
            || build_tree(&rects),
            |mut tree| {
                for r in &rects[..rects.len() / 2] {
                    let removed = tree.delete(r).expect("valid rectangle");
                    black_box(removed);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_region_query, bench_nearest, bench_delete);
criterion_main!(benches);
