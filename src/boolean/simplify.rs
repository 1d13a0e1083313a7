//! Self-intersection removal for a single polygon.
//!
//! A reduced sweep over one input: segments are still subdivided wherever
//! they cross or overlap, but no inside/in-out classification runs. Every
//! processed segment survives unless the segment next to it in right-event
//! order is its exact duplicate, which removes edges traversed twice.

use super::clipper::{dump_polygon, Clipper};
use super::connector::Connector;
use super::event::{EventId, PolygonRole};
use super::intersect::{find_intersection, snap, SegmentIntersection};
use super::BooleanOp;
use crate::error::ClipError;
use crate::polygon::Polygon;
use num_traits::Float;

pub(crate) fn simplify<F: Float>(polygon: &Polygon<F>) -> Result<Polygon<F>, ClipError> {
    let mut clip = Clipper::new();
    let mut num_segments = 0usize;
    for contour in &polygon.contours {
        for i in 0..contour.len() {
            let seg = contour.segment(i);
            if !seg.is_degenerate() {
                clip.enqueue_segment(seg, PolygonRole::Subject);
                num_segments += 1;
            }
        }
    }

    let max_events = num_segments + 4 * num_segments * num_segments;
    let mut processed = 0usize;
    let mut rights: Vec<EventId> = Vec::with_capacity(num_segments);

    while let Some(e) = clip.queue.dequeue() {
        processed += 1;
        if processed > max_events {
            return Err(ClipError::SimplifyDiverged {
                events: processed,
                polygon: dump_polygon(polygon),
            });
        }

        if clip.events[e].left {
            let pos = clip.status.insert(e, &clip.events);
            let prev = if pos > 0 {
                Some(clip.status.at(pos - 1))
            } else {
                None
            };
            let next = clip.status.get(pos + 1);

            if let Some(next) = next {
                clip.divide_at_crossings(e, next);
            }
            if let Some(prev) = prev {
                let divided = clip.divide_at_crossings(prev, e);
                // If only the lower neighbor was divided, the status below
                // `e` changed; re-run `e` against the new context. (When `e`
                // itself was divided the replacement events are already
                // queued.)
                if divided.len() == 1 && divided[0] == prev {
                    clip.status.remove(e);
                    clip.queue.enqueue(e, &clip.events);
                }
            }
        } else {
            let other = clip.events[e].other;
            let other_pos = clip.status.position(other);
            let (prev, next) = match other_pos {
                Some(pos) => {
                    let prev = if pos > 0 {
                        Some(clip.status.at(pos - 1))
                    } else {
                        None
                    };
                    (prev, clip.status.get(pos + 1))
                }
                None => (None, None),
            };

            rights.push(e);

            if let Some(pos) = other_pos {
                clip.status.remove_at(pos);
            }
            if let (Some(next), Some(prev)) = (next, prev) {
                clip.divide_at_crossings(next, prev);
            }
        }
    }

    // Emit every segment whose neighbors in right-event order are not its
    // duplicates; a doubled edge drops out entirely.
    let mut connector = Connector::new(BooleanOp::Union);
    let last = rights.len().saturating_sub(1);
    for (i, &e) in rights.iter().enumerate() {
        if i == 0
            || i == last
            || (!same_segment(&clip, e, rights[i + 1]) && !same_segment(&clip, e, rights[i - 1]))
        {
            connector.add(clip.events.segment(e));
        }
    }
    Ok(connector.into_polygon())
}

fn same_segment<F: Float>(clip: &Clipper<F>, a: EventId, b: EventId) -> bool {
    clip.events[a].p == clip.events[b].p
        && clip.events[clip.events[a].other].p == clip.events[clip.events[b].other].p
}

impl<F: Float> Clipper<F> {
    /// Subdivides two status segments wherever they cross or overlap,
    /// without any classification. Returns the events whose segments were
    /// divided.
    fn divide_at_crossings(&mut self, e1: EventId, e2: EventId) -> Vec<EventId> {
        let seg1 = self.events.segment(e1);
        let seg2 = self.events.segment(e2);

        match find_intersection(seg1, seg2, true) {
            SegmentIntersection::None => Vec::new(),
            SegmentIntersection::Point(ip) => {
                let ip = snap(ip, e1, e2, &self.events);
                let p1 = self.events[e1].p;
                let q1 = self.events[self.events[e1].other].p;
                let p2 = self.events[e2].p;
                let q2 = self.events[self.events[e2].other].p;

                let mut divided = Vec::new();
                if ip != p1 && ip != q1 {
                    if let Some(d) = self.divide_segment(e1, ip) {
                        divided.push(d);
                    }
                }
                if ip != p2 && ip != q2 {
                    if let Some(d) = self.divide_segment(e2, ip) {
                        divided.push(d);
                    }
                }
                divided
            }
            SegmentIntersection::Overlap(ip1, ip2) => {
                let ip1 = snap(ip1, e1, e2, &self.events);
                let ip2 = snap(ip2, e1, e2, &self.events);
                let p1 = self.events[e1].p;
                let q1 = self.events[self.events[e1].other].p;
                let p2 = self.events[e2].p;
                let q2 = self.events[self.events[e2].other].p;

                let mut divided = Vec::new();
                if ip1 != p1 && ip2 != q1 {
                    if let Some(d) = self.divide_segment(e1, ip1) {
                        divided.push(d);
                    }
                }
                if ip1 != p2 && ip2 != q2 {
                    if let Some(d) = self.divide_segment(e2, ip1) {
                        divided.push(d);
                    }
                }
                divided
            }
        }
    }
}
