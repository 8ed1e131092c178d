//! Geometry primitives: [`Point`] and [`BoundingBox`].

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid point, also used as a displacement vector.
///
/// A point names the unit cell whose bottom-left corner it is, so the cell
/// `(x, y)` covers `[x, x + 1) × [y, y + 1)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev (L∞) length of this point seen as a vector.
    ///
    /// This is the number of unit moves needed when diagonal moves cost the
    /// same as straight ones.
    #[inline]
    pub fn magnitude(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Chebyshev distance between two points.
    #[inline]
    pub fn distance(self, other: Point) -> i32 {
        (self - other).magnitude()
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// BoundingBox
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is the inclusive bottom-left
/// corner, `max` the exclusive top-right corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Create a new box from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Create a box from its bottom-left and top-right corners as given.
    #[inline]
    pub const fn from_corners(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// The unit box covering the single cell `p`.
    #[inline]
    pub const fn cell(p: Point) -> Self {
        Self {
            min: p,
            max: p.shift(1, 1),
        }
    }

    /// Width of the box.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Bottom-left and top-right corners.
    #[inline]
    pub fn corners(self) -> (Point, Point) {
        (self.min, self.max)
    }

    /// Total number of cells in the box.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the box has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether the cell `p` is inside the half-open box.
    ///
    /// Testing the cell center `p + ½` against the closed box gives the same
    /// answer for integer points, which is why no epsilon is needed here.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Intersection of two boxes. Disjoint boxes give the empty default box.
    #[inline]
    pub fn intersect(self, other: BoundingBox) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Smallest box that contains both boxes.
    #[inline]
    pub fn union(self, other: BoundingBox) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Whether the two boxes share at least one cell.
    #[inline]
    pub fn overlaps(self, other: BoundingBox) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Row-major iterator over every cell in the box, bottom row first.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for BoundingBox {
    type Item = Point;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`BoundingBox`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: BoundingBox,
    cur: Point,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.bounds.max.y || self.bounds.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.bounds.max.x {
            self.cur.x = self.bounds.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.y >= self.bounds.max.y {
            return (0, Some(0));
        }
        let w = self.bounds.width() as usize;
        let remaining_in_row = (self.bounds.max.x - self.cur.x) as usize;
        let remaining_rows = (self.bounds.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
    }

    #[test]
    fn magnitude_is_chebyshev() {
        assert_eq!(Point::new(3, -7).magnitude(), 7);
        assert_eq!(Point::new(-4, 2).magnitude(), 4);
        assert_eq!(Point::new(1, 1).distance(Point::new(8, 8)), 7);
        assert_eq!(Point::new(5, 4).distance(Point::new(5, 8)), 4);
    }

    #[test]
    fn bounds_basics() {
        let r = BoundingBox::new(0, 0, 3, 2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.len(), 6);
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn bounds_auto_canonicalize() {
        let r = BoundingBox::new(3, 2, 0, 0);
        assert_eq!(r.corners(), (Point::new(0, 0), Point::new(3, 2)));
    }

    #[test]
    fn cell_box_is_unit() {
        let c = BoundingBox::cell(Point::new(5, 5));
        assert_eq!(c.corners(), (Point::new(5, 5), Point::new(6, 6)));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn bounds_iter_is_row_major() {
        let r = BoundingBox::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn intersect_and_overlap() {
        let a = BoundingBox::new(0, 0, 4, 4);
        let b = BoundingBox::new(2, 2, 6, 6);
        assert_eq!(a.intersect(b), BoundingBox::new(2, 2, 4, 4));
        assert!(a.overlaps(b));

        // Touching edges share no cell.
        let c = BoundingBox::new(4, 0, 6, 4);
        assert!(!a.overlaps(c));
        assert_eq!(a.intersect(c), BoundingBox::default());
    }

    #[test]
    fn union_skips_empty() {
        let a = BoundingBox::new(0, 0, 2, 2);
        let b = BoundingBox::new(5, 1, 7, 9);
        assert_eq!(a.union(b), BoundingBox::new(0, 0, 7, 9));
        assert_eq!(BoundingBox::default().union(b), b);
    }
}
