// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insert/delete churn.
//!
//! Fill the tree with random boxes, delete half of them, and report how the
//! structure held up. Splits, condensing, and root collapses show up in the
//! log output.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p thicket_demos --example rtree_churn`

use thicket_rtree::{Point2, RTree2, RTreeResult, Rect2};

struct Rng(u64);

impl Rng {
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

fn main() -> RTreeResult<()> {
    env_logger::init();

    let mut rng = Rng(0x5EED_5EED_5EED_5EED);
    let mut tree = RTree2::with_capacity(6)?;

    let boxes: Vec<Rect2> = (0..2000)
        .map(|_| {
            let x0 = rng.next_f64() * 1000.0;
            let y0 = rng.next_f64() * 1000.0;
            let w = rng.next_f64() * 20.0;
            let h = rng.next_f64() * 20.0;
            Rect2::from_corners(x0, y0, x0 + w, y0 + h)
        })
        .collect();

    for &b in &boxes {
        tree.insert(b)?;
    }
    log::info!("inserted {} boxes, height {}", tree.len(), tree.height());

    for b in &boxes[..1000] {
        let removed = tree.delete(b)?;
        assert!(removed, "every inserted box should delete cleanly");
    }
    log::info!("deleted 1000 boxes, height {}", tree.height());

    let window = Rect2::from_corners(250.0, 250.0, 750.0, 750.0);
    let hits = tree.search_region(&window)?;
    println!(
        "{} boxes left ({} in the center window), height {}",
        tree.len(),
        hits.len(),
        tree.height()
    );

    let q = Point2::new([500.0, 500.0]);
    if let Some(nearest) = tree.nearest_neighbor(&q) {
        println!("nearest to (500, 500): {nearest:?}");
    }

    Ok(())
}
