//! Polygon types: closed contours and contour collections.
//!
//! A [`Contour`] is a closed ring of vertices; a [`Polygon`] is a set of zero
//! or more contours whose interiors collectively carve a region out of the
//! plane. Polygons may be disjoint, contain holes, or self-intersect; the
//! boolean operations in [`crate::boolean`] accept all of these.
//!
//! # Example
//!
//! ```
//! use polybool::{BooleanOp, Contour, Point2, Polygon};
//!
//! let square: Polygon<f64> = Polygon::from_contours(vec![Contour::from(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 1.0),
//! ])]);
//! let triangle = Polygon::from_contours(vec![Contour::from(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 3.0),
//!     Point2::new(3.0, 0.0),
//! ])]);
//!
//! let clipped = square.construct(BooleanOp::Intersection, &triangle);
//! assert_eq!(clipped.num_vertices(), 3);
//! ```

mod contour;
mod core;

pub use contour::Contour;
pub use core::Polygon;
