//! segclip - Parametric line segment clipping
//!
//! Clips 2D segments against an axis-aligned rectangle (Liang-Barsky) or a
//! convex polygon (Cyrus-Beck). Both reduce to intersecting the segment's
//! parameter interval with one half-plane per window boundary.
//!
//! ```
//! use segclip::{clip_to_convex_polygon, clip_to_rectangle, ClipRect, ConvexPolygon, Segment2};
//!
//! let segment = Segment2::from_coords(0.0, -10.0, 0.0, 10.0);
//!
//! let rect = ClipRect::new(-5.0, -5.0, 5.0, 5.0);
//! assert_eq!(
//!     clip_to_rectangle(segment, rect),
//!     Some(Segment2::from_coords(0.0, -5.0, 0.0, 5.0))
//! );
//!
//! let hexagon = ConvexPolygon::reference_hexagon();
//! let inside = clip_to_convex_polygon(segment, &hexagon).unwrap();
//! assert!(inside.length() > 10.0);
//! ```

pub mod clip;
pub mod error;
pub mod primitives;
pub mod window;

pub use clip::{
    clip_to_convex_polygon, clip_to_rectangle, split_segment, ClipOptions, SegmentSplit,
};
pub use error::ClipError;
pub use primitives::{Point2, Segment2, Vec2};
pub use window::{ClipRect, ClipWindow, ConvexPolygon, HalfPlane, Winding};
