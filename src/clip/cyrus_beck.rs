//! Cyrus-Beck clipping against a convex polygon.

use super::{clip_parametric, ClipOptions, ParamInterval};
use crate::primitives::Segment2;
use crate::window::ConvexPolygon;
use num_traits::Float;

/// Clips `segment` to a convex `polygon`, returning the visible part or `None`.
///
/// Works for either winding. The boundary is inclusive, as with
/// [`clip_to_rectangle`](super::clip_to_rectangle). Runs in O(n) for n
/// polygon vertices.
///
/// A segment parallel to an edge is rejected only when it lies on the outer
/// side of that edge; the textbook `denominator == 0 && numerator < 0` test
/// with an inward normal would instead reject segments parallel to an edge on
/// its inner side.
///
/// # Example
///
/// ```
/// use segclip::{clip_to_convex_polygon, ConvexPolygon, Segment2};
///
/// let hexagon = ConvexPolygon::reference_hexagon();
/// let segment = Segment2::from_coords(-10.0, 0.0, 10.0, 0.0);
///
/// let clipped = clip_to_convex_polygon(segment, &hexagon).unwrap();
/// assert!((clipped.start.x + 45.0 / 7.0).abs() < 1e-12);
/// assert!((clipped.end.x - 45.0 / 7.0).abs() < 1e-12);
/// ```
pub fn clip_to_convex_polygon<F: Float>(
    segment: Segment2<F>,
    polygon: &ConvexPolygon<F>,
) -> Option<Segment2<F>> {
    clip_to_convex_polygon_with(segment, polygon, &ClipOptions::default())
}

/// [`clip_to_convex_polygon`] with explicit options.
pub fn clip_to_convex_polygon_with<F: Float>(
    segment: Segment2<F>,
    polygon: &ConvexPolygon<F>,
    options: &ClipOptions<F>,
) -> Option<Segment2<F>> {
    cyrus_beck_interval(segment, polygon, options).map(|interval| interval.apply(segment))
}

/// Visible interval of `segment` inside `polygon`, one constraint per edge.
pub(crate) fn cyrus_beck_interval<F: Float>(
    segment: Segment2<F>,
    polygon: &ConvexPolygon<F>,
    options: &ClipOptions<F>,
) -> Option<ParamInterval<F>> {
    clip_parametric(
        polygon.half_planes().map(|plane| plane.constraint(segment)),
        options,
    )
}
