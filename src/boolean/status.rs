//! Sweep-line status: the segments currently cut by the sweep.

use super::event::{EventId, Events};
use num_traits::Float;

/// Ordered sequence of the left events whose segments the sweep line
/// currently intersects, bottom to top.
///
/// The status order (`segment_less`) is only consistent for segments that
/// coexist on the sweep, so the container is a plain vector: insertion
/// binary-searches a slot, removal scans for the exact event.
#[derive(Debug, Default)]
pub(crate) struct SweepStatus {
    active: Vec<EventId>,
}

impl SweepStatus {
    pub fn new() -> Self {
        SweepStatus { active: Vec::new() }
    }

    /// Inserts a left event, returning its position.
    pub fn insert<F: Float>(&mut self, e: EventId, events: &Events<F>) -> usize {
        let i = self.active.partition_point(|&q| !events.segment_less(e, q));
        self.active.insert(i, e);
        i
    }

    /// Position of the given event, if present.
    pub fn position(&self, e: EventId) -> Option<usize> {
        self.active.iter().position(|&q| q == e)
    }

    /// Event at `index`; panics when out of range.
    pub fn at(&self, index: usize) -> EventId {
        self.active[index]
    }

    /// Event at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<EventId> {
        self.active.get(index).copied()
    }

    pub fn remove(&mut self, e: EventId) {
        if let Some(i) = self.position(e) {
            self.active.remove(i);
        }
    }

    pub fn remove_at(&mut self, index: usize) {
        self.active.remove(index);
    }
}
