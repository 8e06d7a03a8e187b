//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! A node's coordinates are its key everywhere in the workspace, so `Point`
//! carries the `Eq`/`Hash`/`Ord` impls that layouts and search maps rely on.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer coordinate. X grows right, Y grows down when rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
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

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
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

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
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

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Inclusive bounding box `[min, max]` of a set of points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Bounding box of a single point.
    #[inline]
    pub const fn point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box covering all `points`, or `None` when there are none.
    pub fn of(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::point(first), |b, p| b.include(p)))
    }

    /// Grow the box to cover `p`.
    #[inline]
    pub fn include(self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Number of columns covered.
    #[inline]
    pub fn width(self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x) + 1
    }

    /// Number of rows covered.
    #[inline]
    pub fn height(self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y) + 1
    }

    /// Whether `p` lies inside the box (edges included).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
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
        let mut pts = vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 0), Point::new(2, 0), Point::new(0, 1)]);
    }

    #[test]
    fn point_hash_matches_eq() {
        let mut set = HashSet::new();
        set.insert(Point::new(5, -3));
        assert!(set.contains(&Point::from((5, -3))));
        assert!(!set.contains(&Point::new(-3, 5)));
    }

    #[test]
    fn bounds_cover_points() {
        let b = Bounds::of([Point::new(2, 3), Point::new(-1, 5), Point::new(0, 0)]).unwrap();
        assert_eq!(b.min, Point::new(-1, 0));
        assert_eq!(b.max, Point::new(2, 5));
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 6);
        assert!(b.contains(Point::new(2, 5)));
        assert!(!b.contains(Point::new(3, 5)));
        assert!(Bounds::of(std::iter::empty()).is_none());
    }
}
