//! Partitioning a segment into its inside and outside pieces.

use super::ClipOptions;
use crate::primitives::Segment2;
use crate::window::ClipWindow;
use num_traits::Float;

/// A segment cut by a clip window.
///
/// For a visible part `(q1, q2)` of the segment `(p1, p2)`, `before` is
/// `(p1, q1)` and `after` is `(q2, p2)`. Outside pieces of zero parameter
/// length are `None`. When nothing is visible, `before` holds the whole
/// segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSplit<F> {
    pub before: Option<Segment2<F>>,
    pub inside: Option<Segment2<F>>,
    pub after: Option<Segment2<F>>,
}

impl<F: Float> SegmentSplit<F> {
    /// Returns `true` if some part of the segment, possibly a single point,
    /// is inside the window.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.inside.is_some()
    }

    /// The outside pieces in segment order.
    pub fn outside(&self) -> impl Iterator<Item = Segment2<F>> {
        self.before.into_iter().chain(self.after)
    }
}

/// Splits `segment` into the pieces before, inside and after `window`.
///
/// # Example
///
/// ```
/// use segclip::{split_segment, ClipOptions, ClipRect, Segment2};
///
/// let rect = ClipRect::new(-5.0, -5.0, 5.0, 5.0);
/// let split = split_segment(
///     Segment2::from_coords(0.0, 0.0, 10.0, 0.0),
///     &rect,
///     &ClipOptions::default(),
/// );
/// assert_eq!(split.inside, Some(Segment2::from_coords(0.0, 0.0, 5.0, 0.0)));
/// assert!(split.before.is_none());
/// assert_eq!(split.after, Some(Segment2::from_coords(5.0, 0.0, 10.0, 0.0)));
/// ```
pub fn split_segment<F, W>(
    segment: Segment2<F>,
    window: &W,
    options: &ClipOptions<F>,
) -> SegmentSplit<F>
where
    F: Float,
    W: ClipWindow<F> + ?Sized,
{
    let Some(interval) = window.clip_interval(segment, options) else {
        return SegmentSplit {
            before: Some(segment),
            inside: None,
            after: None,
        };
    };

    if interval.is_full() {
        return SegmentSplit {
            before: None,
            inside: Some(segment),
            after: None,
        };
    }

    let inside = interval.apply(segment);
    let before = (interval.t_min > F::zero()).then(|| Segment2::new(segment.start, inside.start));
    let after = (interval.t_max < F::one()).then(|| Segment2::new(inside.end, segment.end));

    SegmentSplit {
        before,
        inside: Some(inside),
        after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{ClipRect, ConvexPolygon};

    fn rect() -> ClipRect<f64> {
        ClipRect::new(-5.0, -5.0, 5.0, 5.0)
    }

    #[test]
    fn test_crossing_has_both_outside_pieces() {
        let s = Segment2::from_coords(-10.0, 0.0, 10.0, 0.0);
        let split = split_segment(s, &rect(), &ClipOptions::default());
        assert_eq!(split.before, Some(Segment2::from_coords(-10.0, 0.0, -5.0, 0.0)));
        assert_eq!(split.inside, Some(Segment2::from_coords(-5.0, 0.0, 5.0, 0.0)));
        assert_eq!(split.after, Some(Segment2::from_coords(5.0, 0.0, 10.0, 0.0)));
        assert_eq!(split.outside().count(), 2);
    }

    #[test]
    fn test_inside_has_no_outside_pieces() {
        let s = Segment2::from_coords(-1.0, -1.0, 1.0, 1.0);
        let split = split_segment(s, &rect(), &ClipOptions::default());
        assert_eq!(split.inside, Some(s));
        assert_eq!(split.outside().count(), 0);
    }

    #[test]
    fn test_uncut_segment_is_returned_as_is() {
        // `start + (end - start) * 1` need not reproduce `end` exactly.
        let s = Segment2::from_coords(0.1, 0.2, 0.7, 0.3);
        let split = split_segment(s, &rect(), &ClipOptions::default());
        assert_eq!(split.inside, Some(s));
        assert!(split.before.is_none() && split.after.is_none());
    }

    #[test]
    fn test_rejected_is_all_outside() {
        let s = Segment2::from_coords(-20.0, -20.0, -15.0, -15.0);
        let split = split_segment(s, &rect(), &ClipOptions::default());
        assert!(!split.is_visible());
        assert_eq!(split.outside().collect::<Vec<_>>(), vec![s]);
    }

    #[test]
    fn test_touching_keeps_whole_segment_outside() {
        let s = Segment2::from_coords(5.0, 5.0, 10.0, 10.0);
        let split = split_segment(s, &rect(), &ClipOptions::default());
        let inside = split.inside.unwrap();
        assert_eq!(inside.start, inside.end);
        assert!(split.before.is_none());
        assert_eq!(split.after, Some(s));
    }

    #[test]
    fn test_polygon_window() {
        let hexagon = ConvexPolygon::reference_hexagon();
        let s = Segment2::from_coords(0.0, 0.0, 0.0, 20.0);
        let split = split_segment(s, &hexagon, &ClipOptions::default());
        let inside = split.inside.unwrap();
        assert_eq!(inside.start, s.start);
        assert!(split.before.is_none());
        let after = split.after.unwrap();
        assert_eq!(after.start, inside.end);
        assert_eq!(after.end, s.end);
    }
}
