//! Sweep events and their orderings.
//!
//! Every segment contributes two linked endpoints to the sweep. The twin
//! link is bidirectional (`events[events[e].other].other == e`) and segment
//! subdivision rewires it in place, so endpoints live in an arena and refer
//! to each other by index.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::ops::{Index, IndexMut};

/// Which input polygon a sweep event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PolygonRole {
    Subject,
    Clipping,
}

/// Edge classification, refined while overlapping segment pairs are
/// processed; drives which segments are emitted for each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeType {
    Normal,
    NonContributing,
    SameTransition,
    DifferentTransition,
}

/// Index of an endpoint in the event arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventId(usize);

/// One endpoint of a directed segment, as seen by the sweep.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint<F> {
    /// Location of this endpoint.
    pub p: Point2<F>,
    /// Is this the left end of the segment `(p, other.p)` in sweep order?
    pub left: bool,
    /// Input polygon this segment came from.
    pub role: PolygonRole,
    /// The endpoint at the other end of the same segment.
    pub other: EventId,
    pub edge_type: EdgeType,
    /// Does the segment represent an inside-outside transition of its own
    /// polygon for a vertical ray from (p.x, -inf)?
    pub in_out: bool,
    /// Is the segment inside the other polygon? Only meaningful on left
    /// events, set when the event is inserted into the sweep status.
    pub inside: bool,
}

/// Arena owning every endpoint of one sweep operation.
#[derive(Debug, Default)]
pub(crate) struct Events<F>(Vec<Endpoint<F>>);

/// Signed area of the triangle (p0, p1, p2).
///
/// Positive when the triangle winds counter-clockwise. The sign is the
/// orientation test every sweep ordering rests on.
pub(crate) fn signed_area<F: Float>(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> F {
    (p0.x - p2.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p0.y - p2.y)
}

impl<F: Float> Events<F> {
    pub fn new() -> Self {
        Events(Vec::new())
    }

    pub fn alloc(&mut self, endpoint: Endpoint<F>) -> EventId {
        self.0.push(endpoint);
        EventId(self.0.len() - 1)
    }

    /// Discards the two most recently allocated endpoints.
    ///
    /// Only valid while nothing references them; used to back out of a
    /// rejected subdivision.
    pub fn discard_last_two(&mut self) {
        let n = self.0.len();
        self.0.truncate(n - 2);
    }

    /// Allocates the linked endpoint pair for a segment, assigning the left
    /// flag by sweep order (vertical segments: the bottom end is left).
    pub fn alloc_pair(&mut self, seg: Segment2<F>, role: PolygonRole) -> (EventId, EventId) {
        let i1 = EventId(self.0.len());
        let i2 = EventId(self.0.len() + 1);
        let mut e1 = Endpoint {
            p: seg.start,
            left: true,
            role,
            other: i2,
            edge_type: EdgeType::Normal,
            in_out: false,
            inside: false,
        };
        let mut e2 = Endpoint {
            p: seg.end,
            left: true,
            role,
            other: i1,
            edge_type: EdgeType::Normal,
            in_out: false,
            inside: false,
        };

        if e1.p.x < e2.p.x {
            e2.left = false;
        } else if e1.p.x > e2.p.x {
            e1.left = false;
        } else if e1.p.y < e2.p.y {
            e2.left = false;
        } else {
            e1.left = false;
        }

        self.0.push(e1);
        self.0.push(e2);
        (i1, i2)
    }

    /// The segment this event belongs to, oriented from this endpoint.
    pub fn segment(&self, e: EventId) -> Segment2<F> {
        Segment2::new(self[e].p, self[self[e].other].p)
    }

    /// Does the segment of `e` lie strictly below the probe point?
    pub fn below(&self, e: EventId, probe: Point2<F>) -> bool {
        let ep = &self[e];
        let op = self[ep.other].p;
        if ep.left {
            signed_area(ep.p, op, probe) > F::zero()
        } else {
            signed_area(op, ep.p, probe) > F::zero()
        }
    }

    pub fn above(&self, e: EventId, probe: Point2<F>) -> bool {
        !self.below(e, probe)
    }

    /// Is the segment oriented the way its left/right flags claim?
    ///
    /// The left endpoint must strictly sweep-precede the right endpoint;
    /// zero-length segments are invalid. Subdivisions producing an invalid
    /// half are rejected.
    pub fn is_valid_direction(&self, e: EventId) -> bool {
        let ep = &self[e];
        let op = self[ep.other].p;
        if ep.left {
            ep.p.is_before(op)
        } else {
            op.is_before(ep.p)
        }
    }

    /// Queue ordering: `true` when `e1` is processed after `e2`.
    ///
    /// Smaller x first, then smaller y; at the same point right endpoints
    /// before left ones, then the event whose segment lies below.
    pub fn sweeps_after(&self, e1: EventId, e2: EventId) -> bool {
        let a = &self[e1];
        let b = &self[e2];
        if a.p.x != b.p.x {
            return a.p.x > b.p.x;
        }
        if a.p.y != b.p.y {
            return a.p.y > b.p.y;
        }
        if a.left != b.left {
            return a.left;
        }
        self.above(e1, self[b.other].p)
    }

    /// Status ordering: `true` when the segment of `e1` sits below the
    /// segment of `e2` on the sweep line.
    ///
    /// Not a total order over arbitrary pairs, but consistent for pairs that
    /// actually coexist in the status.
    pub fn segment_less(&self, e1: EventId, e2: EventId) -> bool {
        if e1 == e2 {
            return false;
        }
        let a = &self[e1];
        let b = &self[e2];
        let a_other = self[a.other].p;
        let b_other = self[b.other].p;

        if signed_area(a.p, a_other, b.p) != F::zero()
            || signed_area(a.p, a_other, b_other) != F::zero()
        {
            // Not collinear. Segments sharing their left endpoint are ordered
            // by where the right endpoints sit.
            if a.p == b.p {
                return self.below(e1, b_other);
            }
            if self.sweeps_after(e1, e2) {
                // e2 entered the status first; probe its view of e1's point.
                return self.above(e2, a.p);
            }
            return self.below(e1, b.p);
        }

        // Collinear: any consistent criterion will do.
        if a.p == b.p {
            return false;
        }
        self.sweeps_after(e1, e2)
    }

    /// Guard against intersection points that floating-point error has
    /// pushed along a shared axis past both segment endpoints.
    ///
    /// When the two left endpoints and `ip` share an x (or a y), `ip` must
    /// not lie beyond both of them on that axis; likewise for the right
    /// endpoints. Such points spawn nearly-parallel sliver segments that
    /// subdivide forever.
    pub fn is_valid_single_intersection(&self, e1: EventId, e2: EventId, ip: Point2<F>) -> bool {
        let l1 = self[e1].p;
        let l2 = self[e2].p;
        let r1 = self[self[e1].other].p;
        let r2 = self[self[e2].other].p;
        axis_bounded(l1, l2, ip) && axis_bounded(r1, r2, ip)
    }
}

fn axis_bounded<F: Float>(a: Point2<F>, b: Point2<F>, ip: Point2<F>) -> bool {
    if a.x == b.x && b.x == ip.x && (ip.y > a.y.max(b.y) || ip.y < a.y.min(b.y)) {
        return false;
    }
    if a.y == b.y && b.y == ip.y && (ip.x > a.x.max(b.x) || ip.x < a.x.min(b.x)) {
        return false;
    }
    true
}

impl<F> Index<EventId> for Events<F> {
    type Output = Endpoint<F>;

    fn index(&self, id: EventId) -> &Endpoint<F> {
        &self.0[id.0]
    }
}

impl<F> IndexMut<EventId> for Events<F> {
    fn index_mut(&mut self, id: EventId) -> &mut Endpoint<F> {
        &mut self.0[id.0]
    }
}
