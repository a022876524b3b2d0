//! Convex polygon clip window.

use super::{ClipWindow, HalfPlane};
use crate::clip::{ClipOptions, ParamInterval};
use crate::error::ClipError;
use crate::primitives::{Point2, Segment2};
use log::debug;
use num_traits::Float;

/// Vertex ordering of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Winding of a closed vertex loop from the sign of its shoelace area.
    ///
    /// Zero-area loops report `CounterClockwise`.
    pub fn of<F: Float>(vertices: &[Point2<F>]) -> Self {
        if signed_area(vertices) < F::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// A convex polygon, implicitly closed (the last vertex connects to the first).
///
/// Either winding is accepted. Convexity is a precondition of `new` and is
/// only verified by `try_new`; clipping against a non-convex polygon gives
/// unspecified (but finite-time, non-panicking) results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexPolygon<F> {
    vertices: Vec<Point2<F>>,
}

impl<F: Float> ConvexPolygon<F> {
    /// Creates a polygon without validating it.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon, checking vertex count, finiteness, convexity and area.
    ///
    /// Collinear consecutive vertices and repeated vertices are allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use segclip::{ClipError, ConvexPolygon, Point2};
    ///
    /// let arrow = vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(1.0, 1.0),
    ///     Point2::new(0.0, 4.0),
    /// ];
    /// assert!(matches!(
    ///     ConvexPolygon::try_new(arrow),
    ///     Err(ClipError::NotConvex { .. })
    /// ));
    /// ```
    pub fn try_new(vertices: Vec<Point2<F>>) -> Result<Self, ClipError> {
        let n = vertices.len();
        if n < 3 {
            debug!("rejecting clip polygon with {} vertices", n);
            return Err(ClipError::TooFewVertices { count: n });
        }
        if !vertices.iter().all(|v| v.is_finite()) {
            debug!("rejecting clip polygon with non-finite vertices");
            return Err(ClipError::NonFinite);
        }

        let mut turn: Option<bool> = None;
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];
            let cross = (b - a).cross(c - b);
            if cross == F::zero() {
                continue;
            }
            let left = cross > F::zero();
            match turn {
                None => turn = Some(left),
                Some(t) if t != left => {
                    let vertex = (i + 1) % n;
                    debug!("rejecting non-convex clip polygon at vertex {}", vertex);
                    return Err(ClipError::NotConvex { vertex });
                }
                _ => {}
            }
        }

        let Some(left) = turn else {
            debug!("rejecting zero-area clip polygon");
            return Err(ClipError::Degenerate);
        };

        // Same turn direction everywhere still admits star loops such as a
        // pentagram; every vertex must also lie inside every edge.
        for i in 0..n {
            let (a, b) = (vertices[i], vertices[(i + 1) % n]);
            let plane = if left {
                HalfPlane::left_of(a, b)
            } else {
                HalfPlane::right_of(a, b)
            };
            if let Some(vertex) = vertices.iter().position(|&v| !plane.contains(v)) {
                debug!("rejecting self-overlapping clip polygon at vertex {}", vertex);
                return Err(ClipError::NotConvex { vertex });
            }
        }

        Ok(Self { vertices })
    }

    /// The vertices in input order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        Winding::of(&self.vertices)
    }

    /// Edges `(v[i], v[(i + 1) % n])` in order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// One inward-facing half-plane per edge.
    ///
    /// For counter-clockwise polygons the normal of edge `(e1, e2)` is
    /// `(-(e2.y - e1.y), e2.x - e1.x)`; clockwise polygons use its negation.
    pub fn half_planes(&self) -> impl Iterator<Item = HalfPlane<F>> + '_ {
        let winding = self.winding();
        self.edges().map(move |(a, b)| match winding {
            Winding::CounterClockwise => HalfPlane::left_of(a, b),
            Winding::Clockwise => HalfPlane::right_of(a, b),
        })
    }

    /// Returns `true` if `point` is inside or on the boundary.
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.half_planes().all(|hp| hp.contains(point))
    }

    /// Unsigned area.
    pub fn area(&self) -> F {
        signed_area(&self.vertices).abs()
    }
}

impl ConvexPolygon<f64> {
    /// The hexagon used by the classic clipping demonstration:
    /// `(-5,-5) (5,-5) (7,2) (3,7) (-3,6) (-7,2)`, counter-clockwise.
    pub fn reference_hexagon() -> Self {
        Self::new(vec![
            Point2::new(-5.0, -5.0),
            Point2::new(5.0, -5.0),
            Point2::new(7.0, 2.0),
            Point2::new(3.0, 7.0),
            Point2::new(-3.0, 6.0),
            Point2::new(-7.0, 2.0),
        ])
    }
}

impl<F: Float> TryFrom<Vec<Point2<F>>> for ConvexPolygon<F> {
    type Error = ClipError;

    fn try_from(vertices: Vec<Point2<F>>) -> Result<Self, ClipError> {
        Self::try_new(vertices)
    }
}

impl<F: Float> ClipWindow<F> for ConvexPolygon<F> {
    fn clip_interval(
        &self,
        segment: Segment2<F>,
        options: &ClipOptions<F>,
    ) -> Option<ParamInterval<F>> {
        crate::clip::cyrus_beck_interval(segment, self, options)
    }

    fn contains(&self, point: Point2<F>) -> bool {
        ConvexPolygon::contains(self, point)
    }
}

/// Shoelace signed area, fanned from the first vertex.
fn signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    let Some(&first) = vertices.first() else {
        return F::zero();
    };
    let twice = vertices
        .windows(2)
        .map(|w| (w[0] - first).cross(w[1] - first))
        .fold(F::zero(), |acc, c| acc + c);
    twice / (F::one() + F::one())
}
