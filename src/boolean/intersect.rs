//! Segment intersection with the tolerances the sweep depends on.

use super::event::{EventId, Events};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Two lines count as parallel when `kross^2 <= eps * |d0|^2 * |d1|^2`.
///
/// Empirical; larger values create false parallels on short segments near
/// long ones.
pub(crate) const PARALLEL_EPSILON: f64 = 1e-15;

/// A computed intersection point within this distance (per axis) of an
/// involved endpoint is replaced by that endpoint.
///
/// Empirical; without snapping, intersections land a few ulps off the
/// endpoints of nearly-collinear segments and every subdivision spawns new
/// sliver segments instead of reducing.
pub(crate) const SNAP_TOLERANCE: f64 = 3e-14;

/// Result of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SegmentIntersection<F> {
    /// The segments do not meet.
    None,
    /// The segments meet in a single point.
    Point(Point2<F>),
    /// The segments are collinear and overlap over a range; the points are
    /// the ends of the overlap in the first segment's direction.
    Overlap(Point2<F>, Point2<F>),
}

impl<F> SegmentIntersection<F> {
    fn count(&self) -> usize {
        match self {
            SegmentIntersection::None => 0,
            SegmentIntersection::Point(_) => 1,
            SegmentIntersection::Overlap(_, _) => 2,
        }
    }
}

/// Intersects two segments.
///
/// The computation parameterizes along `seg0` and is not symmetric in corner
/// cases where the segments overlap and share an endpoint: one orientation
/// may see a clean overlap while the other sees a fuzzy single point. With
/// `both_directions`, a result of at most one intersection triggers a retry
/// with the arguments swapped, keeping whichever result found more. The
/// retry is guarded so the common non-parallel path pays for one call only.
pub(crate) fn find_intersection<F: Float>(
    seg0: Segment2<F>,
    seg1: Segment2<F>,
    both_directions: bool,
) -> SegmentIntersection<F> {
    let first = intersect_one_way(seg0, seg1);
    if both_directions && first.count() <= 1 {
        let swapped = intersect_one_way(seg1, seg0);
        if swapped.count() > first.count() {
            return swapped;
        }
    }
    first
}

fn intersect_one_way<F: Float>(seg0: Segment2<F>, seg1: Segment2<F>) -> SegmentIntersection<F> {
    let p0 = seg0.start;
    let d0 = seg0.direction();
    let p1 = seg1.start;
    let d1 = seg1.direction();
    let eps = F::from(PARALLEL_EPSILON).unwrap();

    let e = p1 - p0;
    let kross = d0.cross(d1);
    let sqr_kross = kross * kross;
    let sqr_len0 = d0.length_squared();
    let sqr_len1 = d1.length_squared();

    if sqr_kross > eps * sqr_len0 * sqr_len1 {
        // Lines are not parallel; intersect them and check both parameters.
        let s = e.cross(d1) / kross;
        if s < F::zero() || s > F::one() {
            return SegmentIntersection::None;
        }
        let t = e.cross(d0) / kross;
        if t < F::zero() || t > F::one() {
            return SegmentIntersection::None;
        }
        return SegmentIntersection::Point(p0 + d0 * s);
    }

    // Parallel lines; distinct unless the offset is collinear too.
    let sqr_len_e = e.length_squared();
    let kross_e = e.cross(d0);
    if kross_e * kross_e > eps * sqr_len0 * sqr_len_e {
        return SegmentIntersection::None;
    }

    // Same line: overlap the parameter intervals along seg0.
    let s0 = d0.dot(e) / sqr_len0;
    let s1 = s0 + d0.dot(d1) / sqr_len0;
    let (smin, smax) = (s0.min(s1), s0.max(s1));
    match interval_overlap(F::zero(), F::one(), smin, smax) {
        IntervalOverlap::None => SegmentIntersection::None,
        IntervalOverlap::Point(w) => SegmentIntersection::Point(p0 + d0 * w),
        IntervalOverlap::Range(w0, w1) => {
            SegmentIntersection::Overlap(p0 + d0 * w0, p0 + d0 * w1)
        }
    }
}

enum IntervalOverlap<F> {
    None,
    Point(F),
    Range(F, F),
}

fn interval_overlap<F: Float>(u0: F, u1: F, v0: F, v1: F) -> IntervalOverlap<F> {
    if u1 < v0 || u0 > v1 {
        return IntervalOverlap::None;
    }
    if u1 == v0 {
        return IntervalOverlap::Point(u1);
    }
    if u0 == v1 {
        return IntervalOverlap::Point(u0);
    }
    let w0 = if u0 < v0 { v0 } else { u0 };
    let w1 = if u1 > v1 { v1 } else { u1 };
    IntervalOverlap::Range(w0, w1)
}

/// Replaces `pt` with a nearby endpoint of either segment when one is within
/// [`SNAP_TOLERANCE`].
///
/// `e1` and `e2` must be left events. Among several candidates the
/// sweep-latest left endpoint and the sweep-earliest right endpoint win, so
/// the snapped point stays interior to both segments and the subdivisions it
/// causes stay valid.
pub(crate) fn snap<F: Float>(
    pt: Point2<F>,
    e1: EventId,
    e2: EventId,
    events: &Events<F>,
) -> Point2<F> {
    let tol = F::from(SNAP_TOLERANCE).unwrap();
    let mut out = pt;
    for &e in &[e1, e2] {
        let lp = events[e].p;
        if pt.equal_within(lp, tol) && (out == pt || out.is_before(lp)) {
            out = lp;
        }
        let rp = events[events[e].other].p;
        if pt.equal_within(rp, tol) && (out == pt || rp.is_before(out)) {
            out = rp;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::event::PolygonRole;

    fn seg(s: (f64, f64), e: (f64, f64)) -> Segment2<f64> {
        Segment2::from_coords(s.0, s.1, e.0, e.1)
    }

    #[test]
    fn test_nearly_parallel_lines_miss() {
        let s1 = seg((0.0, 0.0), (100.0, 0.0001));
        let s2 = seg((1.0, 0.0), (100.0, 0.0));
        assert_eq!(
            find_intersection(s1, s2, true),
            SegmentIntersection::None
        );
    }

    #[test]
    fn test_cross() {
        let s1 = seg((1.0, 0.0), (1.0, 3.0));
        let s2 = seg((0.0, 1.0), (3.0, 1.0));
        assert_eq!(
            find_intersection(s1, s2, true),
            SegmentIntersection::Point(Point2::new(1.0, 1.0))
        );
    }

    #[test]
    fn test_rays_sharing_start() {
        let s1 = seg((0.0, 1.0), (1.0, 3.0));
        let s2 = seg((0.0, 1.0), (3.0, 1.0));
        assert_eq!(
            find_intersection(s1, s2, true),
            SegmentIntersection::Point(Point2::new(0.0, 1.0))
        );
    }

    #[test]
    fn test_collinear_rays() {
        let s1 = seg((2.0, 1.0), (0.0, 1.0));
        let s2 = seg((2.0, 1.0), (1.0, 1.0));
        match find_intersection(s1, s2, true) {
            SegmentIntersection::Overlap(ip1, _) => {
                assert_eq!(ip1, Point2::new(2.0, 1.0));
            }
            other => panic!("expected overlap, got {:?}", other),
        }

        let s1 = seg((0.0, 3.0), (0.0, 1.0));
        let s2 = seg((0.0, 3.0), (0.0, 2.0));
        match find_intersection(s1, s2, true) {
            SegmentIntersection::Overlap(ip1, _) => {
                assert_eq!(ip1, Point2::new(0.0, 3.0));
            }
            other => panic!("expected overlap, got {:?}", other),
        }
    }

    #[test]
    fn test_contained_overlap() {
        let s1 = seg((0.0, 1.0), (3.0, 1.0));
        let s2 = seg((1.0, 1.0), (2.0, 1.0));
        assert_eq!(
            find_intersection(s1, s2, true),
            SegmentIntersection::Overlap(Point2::new(1.0, 1.0), Point2::new(2.0, 1.0))
        );

        let s1 = seg((0.0, 1.0), (0.0, 4.0));
        let s2 = seg((0.0, 2.0), (0.0, 3.0));
        assert_eq!(
            find_intersection(s1, s2, true),
            SegmentIntersection::Overlap(Point2::new(0.0, 2.0), Point2::new(0.0, 3.0))
        );
    }

    #[test]
    fn test_identical_segments() {
        let s = seg((66.0, 160.0), (67.1242262770966, 147.15003485264717));
        match find_intersection(s, s, true) {
            SegmentIntersection::Overlap(ip1, ip2) => {
                assert_eq!(ip1, Point2::new(66.0, 160.0));
                assert_eq!(ip2, Point2::new(67.1242262770966, 147.15003485264717));
            }
            other => panic!("expected overlap, got {:?}", other),
        }
    }

    #[test]
    fn test_disjoint_collinear() {
        let s1 = seg((0.0, 0.0), (1.0, 0.0));
        let s2 = seg((2.0, 0.0), (3.0, 0.0));
        assert_eq!(
            find_intersection(s1, s2, true),
            SegmentIntersection::None
        );
    }

    #[test]
    fn test_symmetric_in_both_directions() {
        // A shared-endpoint overlap must be found regardless of argument
        // order when both directions are requested.
        let s1 = seg((0.0, 1.0), (3.0, 1.0));
        let s2 = seg((0.0, 1.0), (2.0, 1.0));
        assert_eq!(find_intersection(s1, s2, true).count(), 2);
        assert_eq!(find_intersection(s2, s1, true).count(), 2);
    }

    fn snap_events(
        l1: (f64, f64),
        r1: (f64, f64),
        l2: (f64, f64),
        r2: (f64, f64),
    ) -> (Events<f64>, EventId, EventId) {
        let mut events = Events::new();
        let (e1, _) = events.alloc_pair(seg(l1, r1), PolygonRole::Subject);
        let (e2, _) = events.alloc_pair(seg(l2, r2), PolygonRole::Clipping);
        (events, e1, e2)
    }

    #[test]
    fn test_snap() {
        // (pt, l1, r1, l2, r2, want)
        let cases = [
            (
                (0.0, 0.0),
                (0.0, 1e-9),
                (1e-9, 0.0),
                (1e-13, 1e-13),
                (1e-13, 0.0),
                (0.0, 0.0),
            ),
            (
                (0.0, 0.0),
                (0.0, 1e-9),
                (1e-9, 0.0),
                (1e-15, 1e-15),
                (1e-13, 0.0),
                (1e-15, 1e-15),
            ),
            // Two left candidates in range: the sweep-later one wins.
            (
                (0.0, 0.0),
                (1e-15, 1e-15),
                (1e-9, 0.0),
                (1e-15, 2e-15),
                (1.0, 0.0),
                (1e-15, 2e-15),
            ),
            (
                (0.0, 0.0),
                (1e-15, 2e-15),
                (1e-9, 0.0),
                (1e-15, 1e-15),
                (1.0, 0.0),
                (1e-15, 2e-15),
            ),
            // Two right candidates in range: the sweep-earlier one wins.
            (
                (0.0, 0.0),
                (-1.0, 0.0),
                (1e-15, 3e-15),
                (-1.0, -1.0),
                (1e-15, 1e-15),
                (1e-15, 1e-15),
            ),
            (
                (0.0, 0.0),
                (-1.0, 0.0),
                (1e-15, 1e-15),
                (-1.0, -1.0),
                (1e-15, 3e-15),
                (1e-15, 1e-15),
            ),
        ];
        for (i, (pt, l1, r1, l2, r2, want)) in cases.iter().enumerate() {
            let (events, e1, e2) = snap_events(*l1, *r1, *l2, *r2);
            let got = snap(Point2::new(pt.0, pt.1), e1, e2, &events);
            assert_eq!(got, Point2::new(want.0, want.1), "case {}", i);
        }
    }
}
