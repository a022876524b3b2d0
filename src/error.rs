//! Error types for checked clip window construction.
//!
//! Clipping itself never fails; these errors only come from the `try_new`
//! constructors that validate caller-supplied geometry.

use thiserror::Error;

/// Errors reported when validating a clip window.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// Rectangle bounds are given with `min > max` on some axis.
    #[error("inverted rectangle: min exceeds max on the {axis} axis")]
    InvertedRect {
        /// Offending axis, `'x'` or `'y'`.
        axis: char,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate in clip window")]
    NonFinite,

    /// A polygon needs at least three vertices.
    #[error("polygon has {count} vertices, at least 3 required")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// The polygon turns in both directions.
    #[error("polygon is not convex (turn direction changes at vertex {vertex})")]
    NotConvex {
        /// Index of the vertex where the turn direction flips.
        vertex: usize,
    },

    /// The polygon has zero area (all vertices collinear).
    #[error("polygon is degenerate: zero area")]
    Degenerate,
}
