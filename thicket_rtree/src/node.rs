// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree vertices: a bounding rectangle over stored rectangles (leaf) or
//! child nodes (internal).

use crate::geom::Rect;

/// One tree vertex. A passive container; the algorithms live in
/// [`tree`](crate::tree).
#[derive(Clone, Debug)]
pub(crate) struct Node<const N: usize> {
    /// Tight union of the children's rectangles.
    pub(crate) bounds: Rect<N>,
    /// True when `children` holds stored rectangles rather than subtrees.
    pub(crate) leaf: bool,
    pub(crate) children: Vec<Child<N>>,
}

/// One slot of a node's child list.
#[derive(Clone, Debug)]
pub(crate) enum Child<const N: usize> {
    /// Subtree of an internal node.
    Node(Box<Node<N>>),
    /// Stored rectangle in a leaf node.
    Item(Rect<N>),
}

impl<const N: usize> Child<N> {
    pub(crate) fn bounds(&self) -> Rect<N> {
        match self {
            Self::Node(node) => node.bounds,
            Self::Item(rect) => *rect,
        }
    }
}

impl<const N: usize> Node<N> {
    pub(crate) fn new(leaf: bool, bounds: Rect<N>) -> Self {
        Self {
            bounds,
            leaf,
            children: Vec::new(),
        }
    }

    /// Build a node over a non-empty child list with tight bounds.
    pub(crate) fn with_children(leaf: bool, children: Vec<Child<N>>) -> Self {
        debug_assert!(!children.is_empty(), "node needs at least one child");
        let mut node = Self {
            bounds: children[0].bounds(),
            leaf,
            children,
        };
        node.recompute_bounds();
        node
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.leaf
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Tighten `bounds` to the union of the children's rectangles. An empty
    /// child list (a transient mid-mutation state) keeps the previous bounds.
    pub(crate) fn recompute_bounds(&mut self) {
        let mut it = self.children.iter();
        let Some(first) = it.next() else { return };
        self.bounds = it.fold(first.bounds(), |acc, c| acc.union(&c.bounds()));
    }
}
