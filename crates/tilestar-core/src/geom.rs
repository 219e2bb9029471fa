//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards and columns grow
//! to the right, so row-major order matches the order a grid is printed in.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Point::new(row0.min(row1), col0.min(col1)),
            max: Point::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The grid rectangle `[0, rows) × [0, cols)`.
    #[inline]
    pub fn sized(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows.max(0), cols.max(0))
    }

    /// Number of rows covered by the range.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns covered by the range.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of tiles in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.row >= self.min.row
            && p.row < self.max.row
            && p.col >= self.min.col
            && p.col < self.max.col
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_order_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn neighbors_are_orthogonal() {
        let p = Point::new(3, 3);
        let set: HashSet<_> = p.neighbors_4().into_iter().collect();
        assert_eq!(set.len(), 4);
        for n in set {
            assert_eq!((n.row - p.row).abs() + (n.col - p.col).abs(), 1);
        }
    }

    #[test]
    fn range_basics() {
        let r = Range::sized(2, 3);
        assert_eq!(r.rows(), 2);
        assert_eq!(r.cols(), 3);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(1, 2)));
        assert!(!r.contains(Point::new(2, 0)));
        assert!(!r.contains(Point::new(0, 3)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn negative_size_is_empty() {
        let r = Range::sized(-4, 3);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn range_iter_row_major() {
        let pts: Vec<_> = Range::sized(2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(0, 2));
        assert_eq!(pts[3], Point::new(1, 0));
        assert_eq!(pts[5], Point::new(1, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(4, 7).to_string(), "(4, 7)");
        assert_eq!(Range::sized(2, 2).to_string(), "[(0, 0)-(2, 2))");
    }
}
