//! Directed polygon edge.

use super::{Point2, Vec2};
use num_traits::Float;

/// A directed edge between two vertices.
///
/// Edges keep whatever orientation the contour traversal gave them; the
/// sweep decides for itself which endpoint counts as "left" when it turns an
/// edge into a pair of events. Zero-length edges can exist transiently (a
/// contour repeating a vertex) and are dropped before they reach the event
/// queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates an edge between two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates an edge from raw coordinates.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// The displacement from `start` to `end`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns `true` when both endpoints are exactly equal.
    ///
    /// Deliberately an exact test, not a tolerance: the clipper discards
    /// these edges outright, and snapping already decides what counts as
    /// "the same point" everywhere else.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            s,
            Segment2::new(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_direction_follows_orientation() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 4.0, 5.0);
        assert_eq!(s.direction(), Vec2::new(3.0, 4.0));

        // Traversing the same edge the other way negates the direction.
        let r: Segment2<f64> = Segment2::from_coords(4.0, 5.0, 1.0, 1.0);
        assert_eq!(r.direction(), Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_is_degenerate() {
        assert!(Segment2::from_coords(1.0_f64, 1.0, 1.0, 1.0).is_degenerate());
        // Tiny but distinct endpoints are still a real edge.
        assert!(!Segment2::from_coords(0.0_f64, 0.0, 1e-30, 0.0).is_degenerate());
    }
}
