//! Assembles emitted segments into contours.

use super::BooleanOp;
use crate::polygon::{Contour, Polygon};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A connected run of segments under construction.
///
/// Grows by attaching segments or whole chains at either end; becomes closed
/// when its two ends meet.
#[derive(Debug)]
pub(crate) struct Chain<F> {
    pub closed: bool,
    pub points: Vec<Point2<F>>,
}

impl<F: Float> Chain<F> {
    fn new(s: Segment2<F>) -> Self {
        Chain {
            closed: false,
            points: vec![s.start, s.end],
        }
    }

    /// Attaches a segment sharing an endpoint with either end of the chain.
    ///
    /// Returns `false` when the segment touches neither end. Sets `closed`
    /// when the attachment makes head and tail meet.
    pub fn link_segment(&mut self, s: Segment2<F>) -> bool {
        let front = self.points[0];
        let back = *self.points.last().unwrap();

        if s.start == front {
            if s.end == back {
                self.closed = true;
            } else {
                self.points.insert(0, s.end);
            }
            return true;
        }
        if s.end == back {
            if s.start == front {
                self.closed = true;
            } else {
                self.points.push(s.start);
            }
            return true;
        }
        if s.end == front {
            if s.start == back {
                self.closed = true;
            } else {
                self.points.insert(0, s.start);
            }
            return true;
        }
        if s.start == back {
            if s.end == front {
                self.closed = true;
            } else {
                self.points.push(s.end);
            }
            return true;
        }
        false
    }

    /// Absorbs another chain whose end matches one of this chain's ends,
    /// reversing it when needed. On success the other chain is emptied.
    pub fn link_chain(&mut self, other: &mut Chain<F>) -> bool {
        let front = self.points[0];
        let back = *self.points.last().unwrap();
        let other_front = other.points[0];
        let other_back = *other.points.last().unwrap();

        if other_front == back {
            self.points.extend(other.points.drain(..).skip(1));
            return true;
        }
        if other_back == front {
            let mut points = std::mem::take(&mut other.points);
            points.extend(self.points.drain(..).skip(1));
            self.points = points;
            return true;
        }
        if other_front == front {
            let mut points: Vec<Point2<F>> = other.points.drain(..).rev().collect();
            points.extend(self.points.drain(..).skip(1));
            self.points = points;
            return true;
        }
        if other_back == back {
            self.points.pop();
            self.points.extend(other.points.drain(..).rev());
            return true;
        }
        false
    }
}

/// Collects the segments the sweep emits and links them into contours.
#[derive(Debug)]
pub(crate) struct Connector<F> {
    op: BooleanOp,
    pub open: Vec<Chain<F>>,
    pub closed: Vec<Chain<F>>,
}

impl<F: Float> Connector<F> {
    pub fn new(op: BooleanOp) -> Self {
        Connector {
            op,
            open: Vec::new(),
            closed: Vec::new(),
        }
    }

    pub fn add(&mut self, s: Segment2<F>) {
        for j in 0..self.open.len() {
            if !self.open[j].link_segment(s) {
                continue;
            }

            if self.open[j].closed {
                if self.open[j].points.len() == 2 {
                    // The segment is the reverse of the only segment in the
                    // chain; closing would make a degenerate two-point loop.
                    self.open[j].closed = false;
                    return;
                }
                let chain = self.open.remove(j);
                self.closed.push(chain);
                return;
            }

            // The chain grew; see if it now reaches one of the chains after
            // it. The ones before already refused this segment.
            let mut k = j + 1;
            while k < self.open.len() {
                let (head, tail) = self.open.split_at_mut(k);
                if head[j].link_chain(&mut tail[0]) {
                    self.open.remove(k);
                    return;
                }
                k += 1;
            }
            return;
        }

        self.open.push(Chain::new(s));
    }

    /// Returns the assembled contours.
    ///
    /// Closed chains become contours; open chains are dropped, except for
    /// [`BooleanOp::ClipLine`] where they are the result.
    pub fn into_polygon(self) -> Polygon<F> {
        let mut polygon = Polygon::new();
        for chain in self.closed {
            polygon.add(Contour::from(chain.points));
        }
        if self.op == BooleanOp::ClipLine {
            for chain in self.open {
                polygon.add(Contour::from(chain.points));
            }
        }
        polygon
    }
}
