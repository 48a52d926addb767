// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The R-tree proper: insertion with quadratic splits, deletion with
//! condense-and-reinsert, and the query algorithms.

use core::fmt;

use crate::error::{RTreeError, RTreeResult};
use crate::geom::{Point, Rect};
use crate::node::{Child, Node};
use crate::split::quadratic_split;

/// Default node capacity.
const DEFAULT_MAX_CHILDREN: usize = 8;

/// A dynamic R-tree over `N`-dimensional axis-aligned rectangles.
///
/// Stored rectangles may be degenerate (points). Duplicates are kept as
/// separate entries. The tree stays height-balanced under any sequence of
/// insertions and deletions: every leaf sits at the same depth and every
/// non-root node holds between `ceil(M / 2)` and `M` children, where `M` is
/// the configured capacity.
///
/// # Example
///
/// ```
/// use thicket_rtree::{Point2, RTree2, Rect2};
///
/// let mut tree = RTree2::new();
/// tree.insert(Rect2::from_corners(0.0, 0.0, 10.0, 10.0))?;
/// tree.insert(Rect2::from_point(Point2::new([25.0, 25.0])))?;
///
/// assert!(tree.search_exact(&Rect2::from_corners(0.0, 0.0, 10.0, 10.0))?);
/// let hits = tree.search_region(&Rect2::from_corners(-1.0, -1.0, 11.0, 11.0))?;
/// assert_eq!(hits.len(), 1);
///
/// let nearest = tree.nearest_neighbor(&Point2::new([24.0, 25.0]));
/// assert_eq!(nearest, Some(Rect2::from_point(Point2::new([25.0, 25.0]))));
/// # Ok::<(), thicket_rtree::RTreeError>(())
/// ```
#[derive(Clone)]
pub struct RTree<const N: usize> {
    max_children: usize,
    min_children: usize,
    root: Option<Box<Node<N>>>,
    len: usize,
}

impl<const N: usize> RTree<N> {
    /// Create an empty tree with the default node capacity of 8.
    pub fn new() -> Self {
        Self {
            max_children: DEFAULT_MAX_CHILDREN,
            min_children: DEFAULT_MAX_CHILDREN.div_ceil(2),
            root: None,
            len: 0,
        }
    }

    /// Create an empty tree with node capacity `max_children`.
    ///
    /// The minimum fill for non-root nodes is `max_children / 2`, rounded
    /// up. Capacities below 4 are rejected since they cannot keep split
    /// groups at a useful minimum fill.
    pub fn with_capacity(max_children: usize) -> RTreeResult<Self> {
        if max_children < 4 {
            return Err(RTreeError::InvalidCapacity(max_children));
        }
        Ok(Self {
            max_children,
            min_children: max_children.div_ceil(2),
            root: None,
            len: 0,
        })
    }

    /// Number of stored rectangles.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no rectangles are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Configured node capacity `M`.
    pub fn max_children(&self) -> usize {
        self.max_children
    }

    /// Minimum fill `ceil(M / 2)` for non-root nodes.
    pub fn min_children(&self) -> usize {
        self.min_children
    }

    /// Number of levels: 0 when empty, 1 for a lone leaf root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            height += 1;
            node = match n.children.first() {
                Some(Child::Node(child)) => Some(child.as_ref()),
                _ => None,
            };
        }
        height
    }

    /// Remove every stored rectangle.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Insert a rectangle (or a degenerate point rectangle).
    pub fn insert(&mut self, rect: Rect<N>) -> RTreeResult<()> {
        Self::validate(&rect)?;
        self.insert_entry(rect);
        self.len += 1;
        Ok(())
    }

    /// Remove the entry exactly equal to `rect`.
    ///
    /// Returns `Ok(false)` when no such entry is stored; the tree is left
    /// untouched in that case. Equality is exact, coordinate-wise.
    pub fn delete(&mut self, rect: &Rect<N>) -> RTreeResult<bool> {
        Self::validate(rect)?;
        let Some(root) = self.root.as_deref_mut() else {
            return Ok(false);
        };
        let mut orphans = Vec::new();
        if !Self::delete_rec(root, rect, self.min_children, &mut orphans) {
            debug_assert!(orphans.is_empty(), "no removal, no orphans");
            return Ok(false);
        }
        self.len -= 1;
        self.collapse_root();
        if !orphans.is_empty() {
            log::debug!("condense: reinserting {} orphaned entries", orphans.len());
            for orphan in orphans {
                self.insert_entry(orphan);
            }
        }
        Ok(true)
    }

    /// Whether some stored entry equals `rect` exactly.
    pub fn search_exact(&self, rect: &Rect<N>) -> RTreeResult<bool> {
        Self::validate(rect)?;
        let Some(root) = self.root.as_deref() else {
            return Ok(false);
        };
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            // An exact match can only live under bounds that cover it.
            if !node.bounds.contains(rect) {
                continue;
            }
            for child in &node.children {
                match child {
                    Child::Item(stored) => {
                        if stored == rect {
                            return Ok(true);
                        }
                    }
                    Child::Node(sub) => stack.push(sub),
                }
            }
        }
        Ok(false)
    }

    /// Every stored rectangle intersecting `region`, in unspecified order.
    pub fn search_region(&self, region: &Rect<N>) -> RTreeResult<Vec<Rect<N>>> {
        Self::validate(region)?;
        let mut out = Vec::new();
        let Some(root) = self.root.as_deref() else {
            return Ok(out);
        };
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !node.bounds.intersects(region) {
                continue;
            }
            for child in &node.children {
                match child {
                    Child::Item(stored) => {
                        if stored.intersects(region) {
                            out.push(*stored);
                        }
                    }
                    Child::Node(sub) => stack.push(sub),
                }
            }
        }
        Ok(out)
    }

    /// The stored rectangle closest to `query`, measured to the nearest
    /// point of each rectangle (zero when `query` lies inside one).
    ///
    /// Ties may return any closest entry. `None` only when the tree is
    /// empty.
    pub fn nearest_neighbor(&self, query: &Point<N>) -> Option<Rect<N>> {
        let root = self.root.as_deref()?;
        let mut best = None;
        let mut best_dist = f64::INFINITY;
        Self::nearest_rec(root, query, &mut best, &mut best_dist);
        best
    }

    fn validate(rect: &Rect<N>) -> RTreeResult<()> {
        match rect.first_invalid_axis() {
            Some(axis) => Err(RTreeError::InvalidRectangle { axis }),
            None => Ok(()),
        }
    }

    /// Insertion without validation or length accounting; shared by
    /// [`insert`](Self::insert) and condense-time reinsertion.
    fn insert_entry(&mut self, rect: Rect<N>) {
        if self.root.is_none() {
            let mut root = Node::new(true, rect);
            root.children.push(Child::Item(rect));
            self.root = Some(Box::new(root));
            return;
        }
        let root = self.root.as_deref_mut().expect("checked above");
        let split = Self::insert_rec(root, rect, self.max_children, self.min_children);
        if let Some(sibling) = split {
            log::debug!("root split: tree grows a level");
            let old_root = self.root.take().expect("root was just borrowed");
            let new_root =
                Node::with_children(false, vec![Child::Node(old_root), Child::Node(sibling)]);
            self.root = Some(Box::new(new_root));
        }
    }

    /// Recursive insert descent; returns the new sibling when `node` split.
    fn insert_rec(
        node: &mut Node<N>,
        rect: Rect<N>,
        max_children: usize,
        min_children: usize,
    ) -> Option<Box<Node<N>>> {
        if node.is_leaf() {
            node.children.push(Child::Item(rect));
            node.bounds = node.bounds.union(&rect);
            if node.child_count() <= max_children {
                return None;
            }
            return Some(Self::split_node(node, min_children));
        }

        let chosen = Self::choose_subtree(node, &rect);
        let child_split = match &mut node.children[chosen] {
            Child::Node(child) => Self::insert_rec(child, rect, max_children, min_children),
            Child::Item(_) => unreachable!("internal nodes hold only node children"),
        };
        node.bounds = node.bounds.union(&rect);
        if let Some(sibling) = child_split {
            node.children.push(Child::Node(sibling));
            if node.child_count() > max_children {
                return Some(Self::split_node(node, min_children));
            }
        }
        None
    }

    /// The child needing the least area enlargement to absorb `rect`; ties
    /// fall to the child with the smaller current area.
    fn choose_subtree(node: &Node<N>, rect: &Rect<N>) -> usize {
        let mut best = 0;
        let mut best_growth = f64::INFINITY;
        let mut best_area = f64::INFINITY;
        for (i, child) in node.children.iter().enumerate() {
            let bounds = child.bounds();
            let growth = bounds.enlargement(rect);
            let area = bounds.area();
            if growth < best_growth || (growth == best_growth && area < best_area) {
                best = i;
                best_growth = growth;
                best_area = area;
            }
        }
        best
    }

    /// Split an overflowing node in place; returns the new sibling.
    fn split_node(node: &mut Node<N>, min_children: usize) -> Box<Node<N>> {
        log::debug!(
            "splitting {} node with {} entries",
            if node.is_leaf() { "leaf" } else { "internal" },
            node.child_count(),
        );
        let entries = core::mem::take(&mut node.children);
        let (left, right) = quadratic_split(entries, min_children);
        node.children = left;
        node.recompute_bounds();
        Box::new(Node::with_children(node.is_leaf(), right))
    }

    /// Returns true when the entry was found and removed somewhere below
    /// `node`. Underflowing descendants are detached on the way back up and
    /// their stored rectangles pushed onto `orphans` for reinsertion.
    fn delete_rec(
        node: &mut Node<N>,
        rect: &Rect<N>,
        min_children: usize,
        orphans: &mut Vec<Rect<N>>,
    ) -> bool {
        if node.is_leaf() {
            let found = node
                .children
                .iter()
                .position(|c| matches!(c, Child::Item(stored) if stored == rect));
            let Some(idx) = found else {
                return false;
            };
            node.children.remove(idx);
            node.recompute_bounds();
            return true;
        }

        for i in 0..node.children.len() {
            let child = match &mut node.children[i] {
                Child::Node(child) => child,
                Child::Item(_) => unreachable!("internal nodes hold only node children"),
            };
            // The stored copy can only be under bounds it intersects.
            if !child.bounds.intersects(rect) {
                continue;
            }
            if !Self::delete_rec(child, rect, min_children, orphans) {
                continue;
            }
            if child.child_count() < min_children {
                let Child::Node(removed) = node.children.remove(i) else {
                    unreachable!("checked above");
                };
                Self::collect_items(*removed, orphans);
            }
            node.recompute_bounds();
            return true;
        }
        false
    }

    /// Gather every stored rectangle beneath `node`.
    fn collect_items(node: Node<N>, out: &mut Vec<Rect<N>>) {
        for child in node.children {
            match child {
                Child::Item(rect) => out.push(rect),
                Child::Node(sub) => Self::collect_items(*sub, out),
            }
        }
    }

    /// Post-delete root fixes: an empty root empties the tree, and a root
    /// whose only child is internal hands the root role to that child. The
    /// root itself is exempt from the minimum fill.
    fn collapse_root(&mut self) {
        if self.root.as_deref().is_some_and(|r| r.children.is_empty()) {
            log::trace!("last entry removed, tree is empty");
            self.root = None;
            return;
        }
        loop {
            let promote = match self.root.as_deref() {
                Some(root) if !root.is_leaf() && root.child_count() == 1 => {
                    matches!(root.children.first(), Some(Child::Node(c)) if !c.is_leaf())
                }
                _ => false,
            };
            if !promote {
                break;
            }
            let mut old_root = self.root.take().expect("promotion implies a root");
            match old_root.children.pop() {
                Some(Child::Node(child)) => {
                    log::trace!("root collapse: height shrinks a level");
                    self.root = Some(child);
                }
                _ => unreachable!("promotion checked a single node child"),
            }
        }
    }

    fn nearest_rec(
        node: &Node<N>,
        query: &Point<N>,
        best: &mut Option<Rect<N>>,
        best_dist: &mut f64,
    ) {
        if node.is_leaf() {
            for child in &node.children {
                if let Child::Item(stored) = child {
                    let dist = stored.min_distance(query);
                    if dist < *best_dist {
                        *best = Some(*stored);
                        *best_dist = dist;
                    }
                }
            }
            return;
        }
        // Visit subtrees in ascending lower-bound order; a bound at or above
        // the best distance cannot hide a closer entry.
        let mut ordered: Vec<(f64, &Node<N>)> = node
            .children
            .iter()
            .filter_map(|c| match c {
                Child::Node(sub) => Some((sub.bounds.min_distance(query), sub.as_ref())),
                Child::Item(_) => None,
            })
            .collect();
        ordered.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(core::cmp::Ordering::Equal));
        for (lower_bound, sub) in ordered {
            if lower_bound >= *best_dist {
                break;
            }
            Self::nearest_rec(sub, query, best, best_dist);
        }
    }
}

impl<const N: usize> Default for RTree<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for RTree<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RTree")
            .field("max_children", &self.max_children)
            .field("min_children", &self.min_children)
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// R-tree over 2-D rectangles.
pub type RTree2 = RTree<2>;

#[cfg(test)]
impl<const N: usize> RTree<N> {
    /// Structural self-check: uniform leaf depth, fill factor on non-root
    /// nodes, tight bounds everywhere, and an entry count matching `len`.
    pub(crate) fn check_invariants(&self) {
        let Some(root) = self.root.as_deref() else {
            assert_eq!(self.len, 0, "empty tree with a nonzero length");
            return;
        };
        let mut leaf_depths = Vec::new();
        let mut entries = 0;
        Self::check_node(
            root,
            true,
            self.min_children,
            self.max_children,
            0,
            &mut leaf_depths,
            &mut entries,
        );
        assert!(
            leaf_depths.windows(2).all(|w| w[0] == w[1]),
            "leaves at differing depths: {leaf_depths:?}"
        );
        assert_eq!(entries, self.len, "stored entry count drifted");
    }

    fn check_node(
        node: &Node<N>,
        is_root: bool,
        min: usize,
        max: usize,
        depth: usize,
        leaf_depths: &mut Vec<usize>,
        entries: &mut usize,
    ) {
        assert!(!node.children.is_empty(), "empty node reachable");
        if !is_root {
            assert!(
                node.child_count() >= min,
                "node below minimum fill: {} < {min}",
                node.child_count()
            );
        }
        assert!(
            node.child_count() <= max,
            "node above capacity: {} > {max}",
            node.child_count()
        );
        let union = node
            .children
            .iter()
            .map(Child::bounds)
            .reduce(|a, b| a.union(&b))
            .expect("children are non-empty");
        assert_eq!(node.bounds, union, "loose or stale bounds");
        if node.is_leaf() {
            leaf_depths.push(depth);
            *entries += node.child_count();
            for child in &node.children {
                assert!(matches!(child, Child::Item(_)), "subtree in a leaf");
            }
        } else {
            for child in &node.children {
                match child {
                    Child::Node(sub) => {
                        Self::check_node(sub, false, min, max, depth + 1, leaf_depths, entries);
                    }
                    Child::Item(_) => panic!("stored rectangle in an internal node"),
                }
            }
        }
    }
}
