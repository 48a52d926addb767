// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry: n-dimensional points and axis-aligned rectangles.

/// A point in `N`-dimensional space.
///
/// Coordinates are `f64` and assumed finite (no NaNs). Equality is
/// coordinate-wise and exact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<const N: usize> {
    /// One coordinate per dimension.
    pub coords: [f64; N],
}

impl<const N: usize> Point<N> {
    /// Create a point from its coordinates.
    pub const fn new(coords: [f64; N]) -> Self {
        Self { coords }
    }
}

impl<const N: usize> From<[f64; N]> for Point<N> {
    fn from(coords: [f64; N]) -> Self {
        Self { coords }
    }
}

/// An axis-aligned rectangle spanning `min..=max` on every axis.
///
/// A degenerate rectangle with `min == max` represents a point. The index
/// enforces `min.coords[i] <= max.coords[i]` at its API boundary, so the
/// helpers here assume it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<const N: usize> {
    /// Minimum corner.
    pub min: Point<N>,
    /// Maximum corner.
    pub max: Point<N>,
}

impl<const N: usize> Rect<N> {
    /// Create a rectangle from its corners.
    pub const fn new(min: Point<N>, max: Point<N>) -> Self {
        Self { min, max }
    }

    /// Degenerate rectangle covering exactly `p`.
    pub const fn from_point(p: Point<N>) -> Self {
        Self { min: p, max: p }
    }

    /// First axis on which `min` exceeds `max` (NaN counts as invalid), or
    /// `None` for a well-formed rectangle.
    pub fn first_invalid_axis(&self) -> Option<usize> {
        (0..N).find(|&i| !(self.min.coords[i] <= self.max.coords[i]))
    }

    /// True when `min[i] <= max[i]` holds on every axis.
    pub fn is_valid(&self) -> bool {
        self.first_invalid_axis().is_none()
    }

    /// True when the rectangle covers a single point.
    pub fn is_point(&self) -> bool {
        (0..N).all(|i| self.min.coords[i] == self.max.coords[i])
    }

    /// Whether the two rectangles overlap on every axis. Touching at a
    /// boundary counts as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..N).all(|i| {
            self.min.coords[i] <= other.max.coords[i] && other.min.coords[i] <= self.max.coords[i]
        })
    }

    /// Whether `other` lies entirely within this rectangle (boundaries
    /// included).
    pub fn contains(&self, other: &Self) -> bool {
        (0..N).all(|i| {
            self.min.coords[i] <= other.min.coords[i] && self.max.coords[i] >= other.max.coords[i]
        })
    }

    /// Whether the point lies on or inside the boundary.
    pub fn contains_point(&self, p: &Point<N>) -> bool {
        (0..N).all(|i| self.min.coords[i] <= p.coords[i] && p.coords[i] <= self.max.coords[i])
    }

    /// Smallest rectangle covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        for i in 0..N {
            min.coords[i] = min.coords[i].min(other.min.coords[i]);
            max.coords[i] = max.coords[i].max(other.max.coords[i]);
        }
        Self { min, max }
    }

    /// Product of the per-axis extents; zero for a degenerate rectangle.
    pub fn area(&self) -> f64 {
        let mut area = 1.0;
        for i in 0..N {
            area *= self.max.coords[i] - self.min.coords[i];
        }
        area
    }

    /// Growth in area needed to absorb `other`. Always non-negative.
    pub fn enlargement(&self, other: &Self) -> f64 {
        self.union(other).area() - self.area()
    }

    /// Center point.
    pub fn center(&self) -> Point<N> {
        let mut coords = [0.0; N];
        for i in 0..N {
            coords[i] = 0.5 * (self.min.coords[i] + self.max.coords[i]);
        }
        Point { coords }
    }

    /// Euclidean distance from `p` to the nearest point of the rectangle,
    /// zero when `p` lies inside. Never overestimates the distance to any
    /// point of the rectangle, which makes it a safe pruning bound.
    pub fn min_distance(&self, p: &Point<N>) -> f64 {
        let mut acc = 0.0;
        for i in 0..N {
            let c = p.coords[i];
            let d = (self.min.coords[i] - c).max(c - self.max.coords[i]).max(0.0);
            acc += d * d;
        }
        acc.sqrt()
    }
}

impl Rect<2> {
    /// 2-D convenience constructor from corner coordinates.
    pub const fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Point::new([min_x, min_y]),
            max: Point::new([max_x, max_y]),
        }
    }
}

/// A 2-D point.
pub type Point2 = Point<2>;

/// A 2-D rectangle.
pub type Rect2 = Rect<2>;

#[cfg(feature = "kurbo")]
impl From<kurbo::Point> for Point2 {
    fn from(p: kurbo::Point) -> Self {
        Self::new([p.x, p.y])
    }
}

#[cfg(feature = "kurbo")]
impl From<Point2> for kurbo::Point {
    fn from(p: Point2) -> Self {
        Self::new(p.coords[0], p.coords[1])
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect2 {
    fn from(r: kurbo::Rect) -> Self {
        // Kurbo rects may have swapped corners; abs() sorts them.
        let r = r.abs();
        Self::from_corners(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect2> for kurbo::Rect {
    fn from(r: Rect2) -> Self {
        Self::new(r.min.coords[0], r.min.coords[1], r.max.coords[0], r.max.coords[1])
    }
}
