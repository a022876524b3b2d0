//! Axis-aligned rectangular clip window.

use super::{ClipWindow, HalfPlane};
use crate::clip::{ClipOptions, ParamInterval};
use crate::error::ClipError;
use crate::primitives::{Point2, Segment2, Vec2};
use log::debug;
use num_traits::Float;

/// An axis-aligned clip rectangle.
///
/// Expected to satisfy `x_min <= x_max` and `y_min <= y_max`; `new` does not
/// check this, `try_new` does. Zero width or height is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipRect<F> {
    pub x_min: F,
    pub y_min: F,
    pub x_max: F,
    pub y_max: F,
}

impl<F: Float> ClipRect<F> {
    /// Creates a rectangle without validating its bounds.
    #[inline]
    pub fn new(x_min: F, y_min: F, x_max: F, y_max: F) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates a rectangle, rejecting non-finite or inverted bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use segclip::{ClipError, ClipRect};
    ///
    /// assert!(ClipRect::try_new(-5.0, -5.0, 5.0, 5.0).is_ok());
    /// assert_eq!(
    ///     ClipRect::try_new(5.0, -5.0, -5.0, 5.0),
    ///     Err(ClipError::InvertedRect { axis: 'x' })
    /// );
    /// ```
    pub fn try_new(x_min: F, y_min: F, x_max: F, y_max: F) -> Result<Self, ClipError> {
        let rect = Self::new(x_min, y_min, x_max, y_max);
        if ![x_min, y_min, x_max, y_max].into_iter().all(|v| v.is_finite()) {
            debug!("rejecting clip rectangle with non-finite bounds");
            return Err(ClipError::NonFinite);
        }
        if x_min > x_max {
            debug!("rejecting clip rectangle: x_min > x_max");
            return Err(ClipError::InvertedRect { axis: 'x' });
        }
        if y_min > y_max {
            debug!("rejecting clip rectangle: y_min > y_max");
            return Err(ClipError::InvertedRect { axis: 'y' });
        }
        Ok(rect)
    }

    /// Creates a rectangle spanning two arbitrary opposite corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    #[inline]
    pub fn width(&self) -> F {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> F {
        self.y_max - self.y_min
    }

    /// Returns `true` if the rectangle has zero width or height.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == F::zero() || self.height() == F::zero()
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Corners in counter-clockwise order, starting at `(x_min, y_min)`.
    pub fn corners(&self) -> [Point2<F>; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
        ]
    }

    /// The four boundaries as unit-normal half-planes: left, right, bottom, top.
    pub fn half_planes(&self) -> [HalfPlane<F>; 4] {
        let (zero, one) = (F::zero(), F::one());
        let low = Point2::new(self.x_min, self.y_min);
        let high = Point2::new(self.x_max, self.y_max);
        [
            HalfPlane::new(low, Vec2::new(one, zero)),
            HalfPlane::new(high, Vec2::new(-one, zero)),
            HalfPlane::new(low, Vec2::new(zero, one)),
            HalfPlane::new(high, Vec2::new(zero, -one)),
        ]
    }
}

impl<F: Float> ClipWindow<F> for ClipRect<F> {
    fn clip_interval(
        &self,
        segment: Segment2<F>,
        options: &ClipOptions<F>,
    ) -> Option<ParamInterval<F>> {
        crate::clip::liang_barsky_interval(segment, self, options)
    }

    fn contains(&self, point: Point2<F>) -> bool {
        ClipRect::contains(self, point)
    }
}
