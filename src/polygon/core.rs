//! Polygon type and operation entry points.

use super::Contour;
use crate::boolean::{self, BooleanOp};
use crate::bounds::Aabb2;
use crate::error::ClipError;
use num_traits::Float;

/// A region of the plane carved out by a set of (possibly disjoint) contours.
///
/// A polygon can contain holes and can be self-intersecting; no winding or
/// nesting convention is required of the input, and none is promised of the
/// output of the boolean operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<F> {
    /// The contours making up the region.
    pub contours: Vec<Contour<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates an empty polygon.
    #[inline]
    pub fn new() -> Self {
        Self {
            contours: Vec::new(),
        }
    }

    /// Creates a polygon from a list of contours.
    #[inline]
    pub fn from_contours(contours: Vec<Contour<F>>) -> Self {
        Self { contours }
    }

    /// Appends a contour.
    #[inline]
    pub fn add(&mut self, contour: Contour<F>) {
        self.contours.push(contour);
    }

    /// Returns `true` if the polygon has no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Returns the total number of vertices over all contours.
    pub fn num_vertices(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Returns the bounding box of all contours, or `None` if the polygon
    /// holds no points.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        self.contours
            .iter()
            .filter_map(Contour::bounding_box)
            .reduce(Aabb2::union)
    }

    /// Computes the boolean operation `self op clipping`.
    ///
    /// `self` is the subject polygon. Only [`BooleanOp::Difference`] and
    /// [`BooleanOp::ClipLine`] distinguish subject from clipping. The output
    /// is a set of closed contours whose interiors collectively define the
    /// result region (for [`BooleanOp::ClipLine`], open polyline pieces).
    ///
    /// # Panics
    ///
    /// Panics if the sweep fails to converge on pathological input; see
    /// [`Polygon::try_construct`] for the fallible form.
    pub fn construct(&self, op: BooleanOp, clipping: &Polygon<F>) -> Polygon<F> {
        match self.try_construct(op, clipping) {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }

    /// Computes the boolean operation `self op clipping`, reporting
    /// non-convergence as an error instead of panicking.
    pub fn try_construct(
        &self,
        op: BooleanOp,
        clipping: &Polygon<F>,
    ) -> Result<Polygon<F>, ClipError> {
        boolean::clipper::compute(self, clipping, op)
    }

    /// Removes self-intersections and fully-degenerate edges.
    ///
    /// # Panics
    ///
    /// Panics if the sweep fails to converge on pathological input; see
    /// [`Polygon::try_simplify`] for the fallible form.
    pub fn simplify(&self) -> Polygon<F> {
        match self.try_simplify() {
            Ok(result) => result,
            Err(err) => panic!("{}", err),
        }
    }

    /// Removes self-intersections and fully-degenerate edges, reporting
    /// non-convergence as an error instead of panicking.
    pub fn try_simplify(&self) -> Result<Polygon<F>, ClipError> {
        boolean::simplify::simplify(self)
    }
}
