//! Priority queue of sweep events.

use super::event::{EventId, Events};
use num_traits::Float;

/// Event queue ordered by the sweep: leftmost (then lowest) point first,
/// right endpoints before left ones at the same point.
///
/// Kept as a vector sorted in reverse processing order, so the next event is
/// popped from the tail and insertions binary-search their slot. Segment
/// subdivision enqueues new events mid-sweep, always at or after the current
/// sweep position.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    elements: Vec<EventId>,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue {
            elements: Vec::new(),
        }
    }

    pub fn enqueue<F: Float>(&mut self, e: EventId, events: &Events<F>) {
        let i = self
            .elements
            .partition_point(|&q| !events.sweeps_after(e, q));
        self.elements.insert(i, e);
    }

    /// Removes and returns the next event in sweep order.
    pub fn dequeue(&mut self) -> Option<EventId> {
        self.elements.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::event::PolygonRole;
    use crate::primitives::Segment2;

    #[test]
    fn test_dequeues_in_sweep_order() {
        let mut events = Events::new();
        let mut queue = EventQueue::new();

        let segs = [
            Segment2::from_coords(3.0_f64, 0.0, 4.0, 0.0),
            Segment2::from_coords(1.0, 2.0, 2.0, 2.0),
            Segment2::from_coords(1.0, 0.0, 2.0, 1.0),
        ];
        for seg in segs {
            let (a, b) = events.alloc_pair(seg, PolygonRole::Subject);
            queue.enqueue(a, &events);
            queue.enqueue(b, &events);
        }

        let mut order = Vec::new();
        while let Some(e) = queue.dequeue() {
            order.push(events[e].p);
        }
        assert_eq!(order.len(), 6);
        for pair in order.windows(2) {
            assert!(
                pair[0].is_before(pair[1]) || pair[0] == pair[1],
                "{:?} dequeued before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_right_endpoint_first_at_shared_point() {
        let mut events = Events::new();
        let mut queue = EventQueue::new();

        // Two segments meeting at (1, 1): the right end of the first must be
        // processed before the left end of the second.
        let (a, ar) = events.alloc_pair(
            Segment2::from_coords(0.0_f64, 0.0, 1.0, 1.0),
            PolygonRole::Subject,
        );
        let (bl, b) = events.alloc_pair(
            Segment2::from_coords(1.0, 1.0, 2.0, 0.0),
            PolygonRole::Subject,
        );
        for e in [a, ar, bl, b] {
            queue.enqueue(e, &events);
        }

        assert_eq!(queue.dequeue(), Some(a));
        assert_eq!(queue.dequeue(), Some(ar));
        assert_eq!(queue.dequeue(), Some(bl));
        assert_eq!(queue.dequeue(), Some(b));
    }
}
