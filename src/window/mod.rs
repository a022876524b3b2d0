//! Clip windows: the regions segments are clipped against.
//!
//! Both window kinds reduce to a set of closed half-planes. A rectangle
//! contributes four axis-aligned ones, a convex polygon one per edge.

mod half_plane;
mod polygon;
mod rect;

pub use half_plane::HalfPlane;
pub use polygon::{ConvexPolygon, Winding};
pub use rect::ClipRect;

use crate::clip::{ClipOptions, ParamInterval};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A convex region that segments can be clipped against.
pub trait ClipWindow<F: Float> {
    /// The visible parameter interval of `segment`, or `None` if no part of
    /// it lies inside.
    fn clip_interval(
        &self,
        segment: Segment2<F>,
        options: &ClipOptions<F>,
    ) -> Option<ParamInterval<F>>;

    /// Returns `true` if `point` is inside or on the boundary.
    fn contains(&self, point: Point2<F>) -> bool;

    /// The visible sub-segment of `segment`, in the same direction.
    fn clip_segment(&self, segment: Segment2<F>, options: &ClipOptions<F>) -> Option<Segment2<F>> {
        self.clip_interval(segment, options)
            .map(|interval| interval.apply(segment))
    }
}

impl<F: Float, W: ClipWindow<F> + ?Sized> ClipWindow<F> for &W {
    fn clip_interval(
        &self,
        segment: Segment2<F>,
        options: &ClipOptions<F>,
    ) -> Option<ParamInterval<F>> {
        (**self).clip_interval(segment, options)
    }

    fn contains(&self, point: Point2<F>) -> bool {
        (**self).contains(point)
    }
}
