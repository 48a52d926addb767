// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! R-tree basics.
//!
//! Insert a few boxes, look them up exactly, run a region query, find the
//! nearest neighbor, then delete and re-check.
//!
//! Run:
//! - `cargo run -p thicket_demos --example rtree_basics`

use thicket_rtree::{Point2, RTree2, RTreeResult, Rect2};

fn main() -> RTreeResult<()> {
    let mut tree = RTree2::new();

    tree.insert(Rect2::from_corners(10.0, 10.0, 20.0, 20.0))?;
    tree.insert(Rect2::from_corners(30.0, 30.0, 40.0, 40.0))?;
    tree.insert(Rect2::from_corners(50.0, 50.0, 60.0, 60.0))?;
    tree.insert(Rect2::from_corners(70.0, 70.0, 80.0, 80.0))?;

    let present = tree.search_exact(&Rect2::from_corners(10.0, 10.0, 20.0, 20.0))?;
    println!("exact (10, 10)-(20, 20): {present}");
    let absent = tree.search_exact(&Rect2::from_corners(25.0, 25.0, 35.0, 35.0))?;
    println!("exact (25, 25)-(35, 35): {absent}");

    let hits = tree.search_region(&Rect2::from_corners(0.0, 0.0, 45.0, 45.0))?;
    println!("region (0, 0)-(45, 45): {} boxes", hits.len());

    let nearest = tree.nearest_neighbor(&Point2::new([42.0, 45.0]));
    println!("nearest to (42, 45): {nearest:?}");

    let removed = tree.delete(&Rect2::from_corners(10.0, 10.0, 20.0, 20.0))?;
    println!("deleted (10, 10)-(20, 20): {removed}");
    assert!(
        !tree.search_exact(&Rect2::from_corners(10.0, 10.0, 20.0, 20.0))?,
        "deleted box should be gone"
    );
    println!("{} boxes remain", tree.len());

    Ok(())
}
