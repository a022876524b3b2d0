//! Liang-Barsky clipping against an axis-aligned rectangle.

use super::{clip_parametric, ClipOptions, ParamInterval};
use crate::primitives::Segment2;
use crate::window::ClipRect;
use num_traits::Float;

/// Clips `segment` to `rect`, returning the visible part or `None`.
///
/// The result keeps the direction of the input. The rectangle boundary is
/// inclusive: a segment touching it at one point yields a zero-length
/// segment, and a segment running along a side is kept. The parallel test
/// uses exact equality; see [`clip_to_rectangle_with`] to change that.
///
/// # Example
///
/// ```
/// use segclip::{clip_to_rectangle, ClipRect, Point2, Segment2};
///
/// let rect = ClipRect::new(-5.0, -5.0, 5.0, 5.0);
/// let segment = Segment2::from_coords(-10.0, 0.0, 10.0, 0.0);
///
/// let clipped = clip_to_rectangle(segment, rect).unwrap();
/// assert_eq!(clipped.start, Point2::new(-5.0, 0.0));
/// assert_eq!(clipped.end, Point2::new(5.0, 0.0));
///
/// let outside = Segment2::from_coords(-20.0, -20.0, -15.0, -15.0);
/// assert!(clip_to_rectangle(outside, rect).is_none());
/// ```
pub fn clip_to_rectangle<F: Float>(
    segment: Segment2<F>,
    rect: ClipRect<F>,
) -> Option<Segment2<F>> {
    clip_to_rectangle_with(segment, rect, &ClipOptions::default())
}

/// [`clip_to_rectangle`] with explicit options.
pub fn clip_to_rectangle_with<F: Float>(
    segment: Segment2<F>,
    rect: ClipRect<F>,
    options: &ClipOptions<F>,
) -> Option<Segment2<F>> {
    liang_barsky_interval(segment, &rect, options).map(|interval| interval.apply(segment))
}

/// Visible interval of `segment` inside `rect`.
///
/// Constraints, in order left, right, bottom, top:
/// `p = [-dx, dx, -dy, dy]`,
/// `q = [x1 - x_min, x_max - x1, y1 - y_min, y_max - y1]`.
pub(crate) fn liang_barsky_interval<F: Float>(
    segment: Segment2<F>,
    rect: &ClipRect<F>,
    options: &ClipOptions<F>,
) -> Option<ParamInterval<F>> {
    let d = segment.direction();
    let s = segment.start;
    let constraints = [
        (-d.x, s.x - rect.x_min),
        (d.x, rect.x_max - s.x),
        (-d.y, s.y - rect.y_min),
        (d.y, rect.y_max - s.y),
    ];
    clip_parametric(constraints, options)
}
