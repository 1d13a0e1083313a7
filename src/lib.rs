//! polybool - Boolean operations on 2D polygons
//!
//! Computes union, intersection, difference, and symmetric difference of
//! arbitrary planar polygons (disjoint, holed, or self-intersecting), clips
//! open polylines by polygon regions, and removes self-intersections from a
//! single polygon. The engine is the Martinez-Rueda-Feito sweep line, which
//! runs in O((n+k) log n) for n edges and k edge intersections, hardened
//! against the floating-point degeneracies that make textbook renditions of
//! the algorithm loop forever on real data.

pub mod boolean;
pub mod bounds;
pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;

pub use boolean::{clip_polyline, difference, intersection, union, xor, BooleanOp};
pub use bounds::Aabb2;
pub use error::ClipError;
pub use polygon::{Contour, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
