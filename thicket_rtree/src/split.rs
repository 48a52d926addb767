// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic-cost node split.
//!
//! Splitting an overflowing node picks the pair of entries that would waste
//! the most area in a shared bounding box as seeds, then deals the remaining
//! entries to whichever group grows the least, forcing the tail into the
//! emptier group once the other has taken its share.

use crate::geom::Rect;
use crate::node::Child;

/// Distribute the `M + 1` children of an overflowing node into two groups,
/// each holding between `min_fill` and `M` entries.
pub(crate) fn quadratic_split<const N: usize>(
    mut entries: Vec<Child<N>>,
    min_fill: usize,
) -> (Vec<Child<N>>, Vec<Child<N>>) {
    let total = entries.len();
    debug_assert!(total >= 2 * min_fill, "split needs room for two minimum-fill groups");

    let (i, j) = pick_seeds(&entries);
    // Remove the higher index first so the lower one stays valid.
    let seed_b = entries.swap_remove(i.max(j));
    let seed_a = entries.swap_remove(i.min(j));

    let mut bounds_a = seed_a.bounds();
    let mut bounds_b = seed_b.bounds();
    let mut group_a = vec![seed_a];
    let mut group_b = vec![seed_b];

    for entry in entries {
        // Once one group has taken all it may, the rest must fill the other
        // up to the minimum.
        if group_a.len() == total - min_fill {
            bounds_b = bounds_b.union(&entry.bounds());
            group_b.push(entry);
            continue;
        }
        if group_b.len() == total - min_fill {
            bounds_a = bounds_a.union(&entry.bounds());
            group_a.push(entry);
            continue;
        }

        let bounds = entry.bounds();
        let growth_a = bounds_a.enlargement(&bounds);
        let growth_b = bounds_b.enlargement(&bounds);
        let take_a = if growth_a != growth_b {
            growth_a < growth_b
        } else {
            let area_a = bounds_a.union(&bounds).area();
            let area_b = bounds_b.union(&bounds).area();
            if area_a != area_b {
                area_a < area_b
            } else {
                group_a.len() <= group_b.len()
            }
        };
        if take_a {
            bounds_a = bounds_a.union(&bounds);
            group_a.push(entry);
        } else {
            bounds_b = bounds_b.union(&bounds);
            group_b.push(entry);
        }
    }

    (group_a, group_b)
}

/// The pair of entries whose shared bounding box wastes the most area:
/// `area(union) - area(a) - area(b)`.
fn pick_seeds<const N: usize>(entries: &[Child<N>]) -> (usize, usize) {
    let mut worst = f64::NEG_INFINITY;
    let mut pair = (0, 1);
    for i in 0..entries.len() {
        let a: Rect<N> = entries[i].bounds();
        for j in (i + 1)..entries.len() {
            let b = entries[j].bounds();
            let waste = a.union(&b).area() - a.area() - b.area();
            if waste > worst {
                worst = waste;
                pair = (i, j);
            }
        }
    }
    pair
}
