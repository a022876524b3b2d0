//! Parametric line segment clipping.
//!
//! Both clippers narrow the parameter interval `[0, 1]` of a segment with one
//! constraint per window boundary:
//!
//! - [`clip_to_rectangle`]: Liang-Barsky, four axis-aligned boundaries
//! - [`clip_to_convex_polygon`]: Cyrus-Beck, one boundary per polygon edge
//!
//! The clippers are pure functions. They never fail; a segment with no
//! visible part yields `None`.
//!
//! # Example
//!
//! ```
//! use segclip::clip::{clip_all, ClipOptions};
//! use segclip::{ConvexPolygon, Segment2};
//!
//! let hexagon = ConvexPolygon::reference_hexagon();
//! let segments = [
//!     Segment2::from_coords(-10.0, 0.0, 10.0, 0.0),
//!     Segment2::from_coords(10.0, 10.0, 20.0, 20.0),
//! ];
//!
//! let clipped = clip_all(&segments, &hexagon, &ClipOptions::default());
//! assert!(clipped[0].is_some());
//! assert!(clipped[1].is_none());
//! ```

mod batch;
mod cyrus_beck;
mod liang_barsky;
mod parametric;
mod split;

#[cfg(feature = "rayon")]
pub use batch::par_clip_all;
pub use batch::{clip_all, split_all, ClipStats};
pub use cyrus_beck::{clip_to_convex_polygon, clip_to_convex_polygon_with};
pub use liang_barsky::{clip_to_rectangle, clip_to_rectangle_with};
pub use parametric::{clip_parametric, ClipOptions, ParamInterval};
pub use split::{split_segment, SegmentSplit};

pub(crate) use cyrus_beck::cyrus_beck_interval;
pub(crate) use liang_barsky::liang_barsky_interval;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point2, Segment2};
    use crate::window::{ClipRect, ClipWindow, ConvexPolygon};

    const EPS: f64 = 1e-9;

    /// Deterministic pseudo-random coordinates in `[-range, range]`.
    struct XorShift(u64);

    impl XorShift {
        fn next(&mut self, range: f64) -> f64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            (self.0 as f64 / u64::MAX as f64 * 2.0 - 1.0) * range
        }

        fn segment(&mut self, range: f64) -> Segment2<f64> {
            Segment2::from_coords(
                self.next(range),
                self.next(range),
                self.next(range),
                self.next(range),
            )
        }
    }

    fn close(a: Point2<f64>, b: Point2<f64>) -> bool {
        a.distance(b) < EPS
    }

    fn windows() -> Vec<Box<dyn ClipWindow<f64>>> {
        vec![
            Box::new(ClipRect::new(-5.0, -5.0, 5.0, 5.0)),
            Box::new(ClipRect::new(-1.0, 2.0, 8.0, 3.5)),
            Box::new(ConvexPolygon::reference_hexagon()),
        ]
    }

    #[test]
    fn test_contained_segments_unchanged() {
        let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
        let options = ClipOptions::default();
        for window in windows() {
            let mut checked = 0;
            while checked < 100 {
                let s = rng.segment(10.0);
                if !(window.contains(s.start) && window.contains(s.end)) {
                    continue;
                }
                let c = window.clip_segment(s, &options).unwrap();
                assert!(close(c.start, s.start) && close(c.end, s.end), "{:?} -> {:?}", s, c);
                checked += 1;
            }
        }
    }

    /// `p` is inside, or within `EPS` of inside along some axis or diagonal.
    fn inside_or_on_boundary(window: &dyn ClipWindow<f64>, p: Point2<f64>) -> bool {
        let steps = [-EPS, 0.0, EPS];
        steps.iter().any(|&dx| {
            steps
                .iter()
                .any(|&dy| window.contains(Point2::new(p.x + dx, p.y + dy)))
        })
    }

    #[test]
    fn test_results_lie_inside() {
        let mut rng = XorShift(42);
        let options = ClipOptions::default();
        for window in windows() {
            for _ in 0..500 {
                let s = rng.segment(20.0);
                if let Some(c) = window.clip_segment(s, &options) {
                    for p in [c.start, c.end, c.start.midpoint(c.end)] {
                        assert!(inside_or_on_boundary(&*window, p), "{:?} -> {:?}", s, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_separated_segments_rejected() {
        let rect = ClipRect::new(-5.0, -5.0, 5.0, 5.0);
        let hexagon = ConvexPolygon::reference_hexagon();
        let mut rng = XorShift(7);
        for _ in 0..200 {
            // Both endpoints above y = 8, beyond every window's top.
            let s = Segment2::from_coords(
                rng.next(30.0),
                8.0 + rng.next(5.0).abs(),
                rng.next(30.0),
                8.0 + rng.next(5.0).abs(),
            );
            assert!(clip_to_rectangle(s, rect).is_none());
            assert!(clip_to_convex_polygon(s, &hexagon).is_none());
        }
    }

    #[test]
    fn test_idempotent() {
        let mut rng = XorShift(1234);
        let options = ClipOptions::default();
        for window in windows() {
            for _ in 0..300 {
                let s = rng.segment(15.0);
                let Some(once) = window.clip_segment(s, &options) else {
                    continue;
                };
                let twice = window
                    .clip_segment(once, &options)
                    .unwrap_or_else(|| panic!("reclipping {:?} lost it", once));
                assert!(close(once.start, twice.start) && close(once.end, twice.end));
            }
        }
    }

    #[test]
    fn test_reversal_symmetric() {
        let mut rng = XorShift(99);
        let options = ClipOptions::default();
        for window in windows() {
            for _ in 0..300 {
                let s = rng.segment(15.0);
                let forward = window.clip_segment(s, &options);
                let backward = window.clip_segment(s.reversed(), &options);
                match (forward, backward) {
                    (Some(f), Some(b)) => {
                        assert!(close(f.start, b.end) && close(f.end, b.start));
                    }
                    (None, None) => {}
                    (f, b) => panic!("{:?}: forward {:?}, backward {:?}", s, f, b),
                }
            }
        }
    }

    #[test]
    fn test_degenerate_rect_crossing_yields_point() {
        let rect = ClipRect::new(2.0, -5.0, 2.0, 5.0);
        let mut rng = XorShift(5);
        for _ in 0..200 {
            let s = rng.segment(10.0);
            if let Some(c) = clip_to_rectangle(s, rect) {
                assert!((c.start.x - 2.0).abs() < EPS);
                assert!((c.end.x - 2.0).abs() < EPS);
            }
        }
    }
}
