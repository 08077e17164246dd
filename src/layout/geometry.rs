//! The derived geometry of one layout pass

use super::path::ShapePath;
use super::types::{Point, Rect};

/// Start angle of the left lobe's 180° arc
pub const LEFT_LOBE_START: f64 = 135.0;
/// Start angle of the right lobe's 180° arc
pub const RIGHT_LOBE_START: f64 = -135.0;
/// Full sweep of a lobe
pub const LOBE_SWEEP: f64 = 180.0;
/// Start angle of the bottom rounding arc
pub const BOTTOM_ARC_START: f64 = 45.0;
/// Full sweep of the bottom rounding arc
pub const BOTTOM_ARC_SWEEP: f64 = 90.0;

/// Paths the six optional labels are laid out along
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextPaths {
    pub left_inner: ShapePath,
    pub right_inner: ShapePath,
    pub bottom_inner: ShapePath,
    pub left_outer: ShapePath,
    pub right_outer: ShapePath,
    pub bottom_outer: ShapePath,
}

/// Everything needed to draw the cordiform outline
///
/// Produced wholesale by [`compute_geometry`](super::compute_geometry) and
/// never updated in place: a new layout pass yields a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    /// The box of ratio [`DRAWABLE_RATIO`](super::DRAWABLE_RATIO) the shape is centered in
    pub drawable: Rect,
    /// Side of the square hosting each lobe
    pub side_length: f64,
    /// Stroke width after proportional clamping
    pub stroke_width: f64,
    pub left_arc_rect: Rect,
    pub right_arc_rect: Rect,
    pub bottom_arc_radius: f64,
    pub bottom_rect: Rect,
    /// Bottom end of the left line, where the bottom arc finishes
    pub left_line_start: Point,
    /// Top end of the left line, on the left lobe
    pub left_line_end: Point,
    /// Top end of the right line, on the right lobe
    pub right_line_start: Point,
    /// Bottom end of the right line, where the bottom arc begins
    pub right_line_end: Point,
    /// Length of the bottom path: both lines plus the quarter arc
    pub path_length: f64,
    /// Bottom progress at which the right line is complete
    pub right_line_progress_bound: f64,
    /// Bottom progress at which the bottom arc is complete
    pub bottom_arc_progress_bound: f64,
    /// Whole silhouette, used for the shadow
    pub outline: ShapePath,
    pub text_paths: TextPaths,
}

impl ShapeGeometry {
    /// Share of the bottom progress scale spent on the bottom arc
    pub fn bottom_arc_progress_span(&self) -> f64 {
        self.bottom_arc_progress_bound - self.right_line_progress_bound
    }

    /// Share of the bottom progress scale spent on the left line
    pub fn left_line_progress_span(&self) -> f64 {
        100.0 - self.bottom_arc_progress_bound
    }

    /// The pointed bottom of the silhouette before rounding
    pub fn bottom_point(&self) -> Point {
        Point::new(
            self.drawable.x + self.drawable.width / 2.0,
            self.drawable.bottom(),
        )
    }
}
