//! Half-plane constraints derived from window boundaries.

use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A closed half-plane: every point `x` with `normal · (x - origin) >= 0`.
///
/// `normal` points into the permitted side and need not be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane<F> {
    /// Any point on the boundary line.
    pub origin: Point2<F>,
    /// Inward-facing normal.
    pub normal: Vec2<F>,
}

impl<F: Float> HalfPlane<F> {
    /// Creates a half-plane from a boundary point and inward normal.
    #[inline]
    pub fn new(origin: Point2<F>, normal: Vec2<F>) -> Self {
        Self { origin, normal }
    }

    /// Half-plane to the left of the directed edge `a -> b`.
    ///
    /// The normal is the perpendicular `(-(b.y - a.y), b.x - a.x)`.
    #[inline]
    pub fn left_of(a: Point2<F>, b: Point2<F>) -> Self {
        Self::new(a, (b - a).perpendicular())
    }

    /// Half-plane to the right of the directed edge `a -> b`.
    #[inline]
    pub fn right_of(a: Point2<F>, b: Point2<F>) -> Self {
        Self::new(a, -(b - a).perpendicular())
    }

    /// Scaled signed distance of `point` from the boundary, positive inside.
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        self.normal.dot(point - self.origin)
    }

    /// Returns `true` if `point` lies in the closed half-plane.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.signed_distance(point) >= F::zero()
    }

    /// The `(p, q)` pair this boundary imposes on `segment`.
    ///
    /// In edge-normal terms `q = -numerator` and `p = -denominator`, with
    /// `numerator = -normal · (start - origin)` and
    /// `denominator = normal · direction`.
    #[inline]
    pub fn constraint(&self, segment: Segment2<F>) -> (F, F) {
        let denominator = self.normal.dot(segment.direction());
        let numerator = -self.signed_distance(segment.start);
        (-denominator, -numerator)
    }
}
