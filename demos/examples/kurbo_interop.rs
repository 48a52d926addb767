// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kurbo interop.
//!
//! Feed Kurbo rectangles into the index and read query results back out as
//! Kurbo types, the way a scene or UI layer would.
//!
//! Run:
//! - `cargo run -p thicket_demos --example kurbo_interop`

use kurbo::{Point, Rect};
use thicket_rtree::{Point2, RTree2, RTreeResult, Rect2};

fn main() -> RTreeResult<()> {
    let panels = [
        Rect::new(0.0, 0.0, 200.0, 40.0),    // toolbar
        Rect::new(0.0, 40.0, 60.0, 400.0),   // sidebar
        Rect::new(60.0, 40.0, 200.0, 400.0), // canvas
        Rect::new(140.0, 300.0, 200.0, 400.0), // inspector, overlaps the canvas
    ];

    let mut tree = RTree2::new();
    for &panel in &panels {
        tree.insert(Rect2::from(panel))?;
    }

    // Everything under the cursor.
    let cursor = Point::new(160.0, 350.0);
    let under_cursor = tree.search_region(&Rect2::from_point(Point2::from(cursor)))?;
    println!("{} panels under the cursor at {cursor:?}", under_cursor.len());
    for r in &under_cursor {
        println!("  {:?}", Rect::from(*r));
    }

    // The panel nearest to a point outside all of them.
    let q = Point::new(300.0, 20.0);
    let nearest = tree.nearest_neighbor(&Point2::from(q)).expect("tree is non-empty");
    println!("nearest panel to {q:?}: {:?}", Rect::from(nearest));

    Ok(())
}
