//! Boolean operations between polygons.
//!
//! Implements the Martinez-Rueda-Feito sweep-line algorithm: every segment
//! endpoint of both input polygons becomes an event; a vertical line sweeps
//! left to right, keeping the segments it currently cuts in a status
//! structure ordered by height. Each segment learns, at the moment it enters
//! the status, whether it lies inside the other polygon; each segment pair
//! that meets is intersected and subdivided in place. Segments that belong to
//! the requested operation are emitted and reassembled into closed contours.
//!
//! The interesting part is not the textbook sweep but the robustness layer
//! around it: snapping computed intersection points onto nearby endpoints,
//! refusing subdivisions that rounding has made zero-length or
//! wrong-direction, and the exact tie-breaking rules in the event and status
//! orders. Without these, nearly-collinear input makes the subdivision
//! recurse without ever reducing.
//!
//! # Example
//!
//! ```
//! use polybool::{union, Contour, Point2, Polygon};
//!
//! let a: Polygon<f64> = Polygon::from_contours(vec![Contour::from(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ])]);
//! let b = Polygon::from_contours(vec![Contour::from(vec![
//!     Point2::new(5.0, 5.0),
//!     Point2::new(6.0, 5.0),
//!     Point2::new(6.0, 6.0),
//!     Point2::new(5.0, 6.0),
//! ])]);
//!
//! let merged = union(&a, &b);
//! assert_eq!(merged.contours.len(), 2);
//! ```

pub(crate) mod clipper;
mod connector;
mod event;
mod intersect;
mod queue;
pub(crate) mod simplify;
mod status;

use crate::polygon::Polygon;
use num_traits::Float;

/// A boolean operation between two polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// A point is in the result if it is in either polygon.
    Union,
    /// A point is in the result if it is in both polygons.
    Intersection,
    /// A point is in the result if it is in the subject but not the clipping
    /// polygon.
    Difference,
    /// A point is in the result if it is in exactly one of the polygons.
    Xor,
    /// The subject is an open polyline; the result is the set of its pieces
    /// that lie inside the clipping region.
    ClipLine,
}

/// Computes the union of two polygons.
pub fn union<F: Float>(subject: &Polygon<F>, clipping: &Polygon<F>) -> Polygon<F> {
    subject.construct(BooleanOp::Union, clipping)
}

/// Computes the intersection of two polygons.
pub fn intersection<F: Float>(subject: &Polygon<F>, clipping: &Polygon<F>) -> Polygon<F> {
    subject.construct(BooleanOp::Intersection, clipping)
}

/// Computes the difference `subject - clipping`.
pub fn difference<F: Float>(subject: &Polygon<F>, clipping: &Polygon<F>) -> Polygon<F> {
    subject.construct(BooleanOp::Difference, clipping)
}

/// Computes the symmetric difference of two polygons.
pub fn xor<F: Float>(subject: &Polygon<F>, clipping: &Polygon<F>) -> Polygon<F> {
    subject.construct(BooleanOp::Xor, clipping)
}

/// Clips an open polyline by a polygon region.
///
/// Each contour of `line` is read as an open point sequence (no closing
/// edge). The result contains one contour per surviving polyline piece; the
/// pieces are open and their point order is not specified.
pub fn clip_polyline<F: Float>(line: &Polygon<F>, region: &Polygon<F>) -> Polygon<F> {
    line.construct(BooleanOp::ClipLine, region)
}
