//! Layout engine for the cordiform shape
//!
//! This module takes the host's bounding box and a [`StyleConfig`](crate::StyleConfig)
//! and derives every rectangle, point and path needed to draw the shape.
//! It holds no state: the same inputs always produce the same geometry.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod path;
pub mod types;

pub use engine::{compute_geometry, resolve_stroke_width, BOTTOM_ARC_RADIUS_RATIO, DRAWABLE_RATIO};
pub use error::LayoutError;
pub use geometry::*;
pub use measure::{measure, MeasureSpec};
pub use path::{PathSegment, ShapePath};
pub use types::*;
