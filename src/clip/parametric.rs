//! Parametric interval clipping over half-plane constraints.
//!
//! A segment is written as `P(t) = start + t * (end - start)` with `t` in
//! `[0, 1]`. Every boundary of a clip window contributes a pair `(p, q)`:
//! `q` is the signed distance of `start` from the boundary (non-negative on
//! the inside) and `p` is the rate at which that distance *decreases* along
//! the segment. Intersecting the permitted `t` ranges of all pairs yields the
//! visible interval.

use crate::primitives::Segment2;
use num_traits::Float;

/// Per-call clipping configuration.
///
/// The default classifies a boundary as parallel only when `p == 0` exactly,
/// which reproduces the classic Liang-Barsky behaviour. Near-parallel
/// segments then take the general branch, where `t = q / p` can be huge
/// but is still well defined.
///
/// `p` is the segment direction projected onto the boundary normal. Rectangle
/// normals are unit length, but a polygon edge's normal is as long as the
/// edge, so against polygons the tolerance scales with edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipOptions<F> {
    /// Constraints with `|p| <= parallel_tolerance` are treated as parallel.
    pub parallel_tolerance: F,
}

impl<F: Float> ClipOptions<F> {
    /// Options using exact equality for the parallel test.
    #[inline]
    pub fn exact() -> Self {
        Self {
            parallel_tolerance: F::zero(),
        }
    }

    /// Returns options that treat `|p| <= tolerance` as parallel.
    ///
    /// Negative tolerances are taken by magnitude.
    #[inline]
    pub fn with_parallel_tolerance(mut self, tolerance: F) -> Self {
        self.parallel_tolerance = tolerance.abs();
        self
    }

    #[inline]
    pub(crate) fn is_parallel(&self, p: F) -> bool {
        p.abs() <= self.parallel_tolerance
    }
}

impl<F: Float> Default for ClipOptions<F> {
    fn default() -> Self {
        Self::exact()
    }
}

/// The visible parameter range `[t_min, t_max]` of a clipped segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamInterval<F> {
    pub t_min: F,
    pub t_max: F,
}

impl<F: Float> ParamInterval<F> {
    /// The whole segment, `[0, 1]`.
    #[inline]
    pub fn full() -> Self {
        Self {
            t_min: F::zero(),
            t_max: F::one(),
        }
    }

    /// Maps the interval back onto `segment`, keeping its direction.
    #[inline]
    pub fn apply(self, segment: Segment2<F>) -> Segment2<F> {
        Segment2::new(segment.point_at(self.t_min), segment.point_at(self.t_max))
    }

    /// Returns `true` if the interval collapsed to a single parameter.
    #[inline]
    pub fn is_point(self) -> bool {
        self.t_min == self.t_max
    }

    /// Returns `true` if nothing was cut off.
    #[inline]
    pub fn is_full(self) -> bool {
        self.t_min == F::zero() && self.t_max == F::one()
    }
}

/// Intersects `[0, 1]` with the permitted range of every `(p, q)` constraint.
///
/// - parallel (`p` classified zero by `options`): rejects everything when
///   `q < 0`, otherwise imposes nothing.
/// - `p < 0`: the boundary is entered at `t = q / p`, raising `t_min`.
/// - `p > 0`: the boundary is left at `t = q / p`, lowering `t_max`.
///
/// Returns `None` when the range is empty. Boundaries are inclusive, so a
/// segment that only touches the window yields a single-point interval.
///
/// # Example
///
/// ```
/// use segclip::clip::{clip_parametric, ClipOptions};
///
/// // x >= 0 and x <= 1 for the segment x(t) = -1 + 4t.
/// let constraints = [(-4.0, -1.0), (4.0, 2.0)];
/// let interval = clip_parametric(constraints, &ClipOptions::default()).unwrap();
/// assert_eq!(interval.t_min, 0.25);
/// assert_eq!(interval.t_max, 0.5);
/// ```
pub fn clip_parametric<F, I>(constraints: I, options: &ClipOptions<F>) -> Option<ParamInterval<F>>
where
    F: Float,
    I: IntoIterator<Item = (F, F)>,
{
    let mut interval: ParamInterval<F> = ParamInterval::full();

    for (p, q) in constraints {
        if options.is_parallel(p) {
            if q < F::zero() {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < F::zero() {
            interval.t_min = interval.t_min.max(t);
        } else {
            interval.t_max = interval.t_max.min(t);
        }
    }

    if interval.t_min > interval.t_max {
        None
    } else {
        Some(interval)
    }
}
