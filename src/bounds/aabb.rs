//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// The axis-aligned bounding box of a piece of geometry.
///
/// The clipper leans on boxes twice: inputs whose boxes are disjoint skip
/// the sweep entirely, and the smaller of the two right edges bounds how far
/// an intersection or difference can reach before the sweep may stop early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Corner with the smallest coordinates.
    pub min: Point2<F>,
    /// Corner with the largest coordinates.
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from its corners, trusted as given.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Tightest box around a set of points, or `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            if p.x < min.x {
                min.x = p.x;
            }
            if p.y < min.y {
                min.y = p.y;
            }
            if p.x > max.x {
                max.x = p.x;
            }
            if p.y > max.y {
                max.y = p.y;
            }
        }
        Some(Self { min, max })
    }

    /// The smallest box covering both boxes.
    ///
    /// Folding this over per-contour boxes gives a polygon its bounds.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Do the boxes share at least one point?
    ///
    /// Both axes compare as closed intervals. Inputs that merely touch along
    /// an edge or a corner can still share boundary geometry, so they must
    /// take the full sweep rather than the trivial disjoint path.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        let x_overlap = self.min.x <= other.max.x && other.min.x <= self.max.x;
        let y_overlap = self.min.y <= other.max.y && other.min.y <= self.max.y;
        x_overlap && y_overlap
    }

    /// Is the point inside the box or on its boundary?
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x: f64, y: f64, w: f64, h: f64) -> Aabb2<f64> {
        Aabb2::new(Point2::new(x, y), Point2::new(x + w, y + h))
    }

    #[test]
    fn test_from_points() {
        let points = [
            Point2::new(1.0_f64, 2.0),
            Point2::new(3.0, 1.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 4.0),
        ];
        let bb = Aabb2::from_points(points).unwrap();
        assert_eq!(bb.min, Point2::new(1.0, 1.0));
        assert_eq!(bb.max, Point2::new(4.0, 4.0));

        let single = Aabb2::from_points([Point2::new(2.0_f64, 5.0)]).unwrap();
        assert_eq!(single.min, single.max);

        let empty: Option<Aabb2<f64>> = Aabb2::from_points(std::iter::empty());
        assert!(empty.is_none());
    }

    #[test]
    fn test_union() {
        let cases = [
            (aabb(0.0, 0.0, 20.0, 30.0), aabb(0.0, 0.0, 30.0, 20.0), aabb(0.0, 0.0, 30.0, 30.0)),
            (
                aabb(10.0, 10.0, 10.0, 10.0),
                aabb(-10.0, -10.0, 10.0, 10.0),
                aabb(-10.0, -10.0, 30.0, 30.0),
            ),
        ];
        for (a, b, want) in cases {
            assert_eq!(a.union(b), want);
            assert_eq!(b.union(a), want);
        }
    }

    #[test]
    fn test_intersects() {
        let r1 = aabb(5.0, 5.0, 10.0, 10.0);
        let cases = [
            (aabb(0.0, 0.0, 10.0, 20.0), aabb(0.0, 10.0, 20.0, 10.0), true),
            (aabb(0.0, 0.0, 10.0, 20.0), aabb(20.0, 0.0, 10.0, 20.0), false),
            (aabb(10.0, 50.0, 10.0, 10.0), aabb(0.0, 0.0, 50.0, 45.0), false),
            // Touching along an edge or a corner counts as intersecting.
            (r1, aabb(0.0, 0.0, 10.0, 10.0), true),
            (r1, aabb(10.0, 0.0, 10.0, 10.0), true),
            (r1, aabb(0.0, 10.0, 10.0, 10.0), true),
            (r1, aabb(10.0, 10.0, 10.0, 10.0), true),
            // Diagonally separated boxes do not.
            (r1, aabb(-10.0, -10.0, 10.0, 10.0), false),
            (r1, aabb(20.0, -10.0, 10.0, 10.0), false),
            (r1, aabb(-10.0, 20.0, 10.0, 10.0), false),
            (r1, aabb(20.0, 20.0, 10.0, 10.0), false),
        ];
        for (i, (a, b, want)) in cases.iter().enumerate() {
            assert_eq!(a.intersects(*b), *want, "case {}", i);
            assert_eq!(b.intersects(*a), *want, "case {} swapped", i);
        }
    }

    #[test]
    fn test_contains_point() {
        let bb = aabb(1.0, 2.0, 8.0, 6.0);
        assert!(bb.contains_point(Point2::new(3.0, 4.0)));
        // Boundary points are inside.
        assert!(bb.contains_point(Point2::new(1.0, 2.0)));
        assert!(bb.contains_point(Point2::new(9.0, 8.0)));
        assert!(!bb.contains_point(Point2::new(0.0, 0.0)));
        assert!(!bb.contains_point(Point2::new(3.0, 8.5)));
    }
}
