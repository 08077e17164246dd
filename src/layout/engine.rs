//! Layout engine: bounding box and style in, [`ShapeGeometry`] out
//!
//! The silhouette is built from two squares of side `s` (one per lobe) placed
//! in the top corners of the drawable box. Each lobe is the upper half of the
//! circle inscribed in its square, rotated 45° outwards; its tangent lines
//! meet at 45° below the squares to form the pointed bottom, which is then
//! rounded with a quarter arc of radius `s / 4`.
//!
//! ```text
//!    .--.  .--.
//!   /    \/    \
//!   \          /      width  = s * (2 + √2) / 2
//!    \        /       height = s * (2 + 3√2) / 4
//!     \      /
//!      `----'
//! ```

use std::f64::consts::{PI, SQRT_2};

use log::{debug, warn};

use super::error::LayoutError;
use super::geometry::{
    ShapeGeometry, TextPaths, BOTTOM_ARC_START, BOTTOM_ARC_SWEEP, LEFT_LOBE_START, LOBE_SWEEP,
    RIGHT_LOBE_START,
};
use super::path::ShapePath;
use super::types::{BoundingBox, Point, Rect};
use crate::style::StyleConfig;

/// Width : height of the silhouette, from the two-square decomposition above
pub const DRAWABLE_RATIO: f64 = (4.0 + 2.0 * SQRT_2) / (2.0 + 3.0 * SQRT_2);

/// Bottom rounding radius as a fraction of the lobe square's side
pub const BOTTOM_ARC_RADIUS_RATIO: f64 = 0.25;

/// The stroke may be at most `side / MAX_STROKE_DIVISOR` wide
const MAX_STROKE_DIVISOR: f64 = 3.0;

/// Unconfigured strokes are `side / DEFAULT_STROKE_DIVISOR` wide
const DEFAULT_STROKE_DIVISOR: f64 = 6.0;

/// Compute the full shape geometry for one layout pass
pub fn compute_geometry(
    bounds: &BoundingBox,
    style: &StyleConfig,
) -> Result<ShapeGeometry, LayoutError> {
    if let Some(field) = first_non_finite(bounds, style) {
        warn!("{} is not a finite number, skipping layout", field);
        return Err(LayoutError::degenerate(0.0, 0.0));
    }

    let configured_stroke = style.configured_stroke_width();
    let text_clearance = style.outer_text_clearance();
    let shadow_radius = style.shadow.radius.max(0.0);
    let reserved = reserved_extent(style);

    let available_width = bounds.width - bounds.padding.horizontal() - reserved;
    let available_height = bounds.height - bounds.padding.vertical() - reserved;
    // Also rejects NaN
    if !(available_width > 0.0 && available_height > 0.0) {
        warn!(
            "no room for the shape in {}x{} after padding and clearances",
            bounds.width, bounds.height
        );
        return Err(LayoutError::degenerate(
            available_width.max(0.0),
            available_height.max(0.0),
        ));
    }

    let mut x_offset = configured_stroke / 2.0
        + bounds.padding.start
        + (shadow_radius - style.shadow.dx).max(text_clearance);
    let mut y_offset = configured_stroke / 2.0
        + bounds.padding.top
        + (shadow_radius - style.shadow.dy).max(text_clearance);

    let (drawable_width, drawable_height) = if available_width / available_height > DRAWABLE_RATIO
    {
        let height = available_height;
        let width = height * DRAWABLE_RATIO;
        x_offset += (available_width - width) / 2.0;
        (width, height)
    } else {
        let width = available_width;
        let height = width / DRAWABLE_RATIO;
        y_offset += (available_height - height) / 2.0;
        (width, height)
    };

    let drawable = Rect::new(x_offset, y_offset, drawable_width, drawable_height);
    let side_length = 2.0 * drawable_width / (2.0 + SQRT_2);
    let stroke_width = resolve_stroke_width(configured_stroke, side_length);

    let origin = Point::new(x_offset, y_offset);
    let left_arc_rect = Rect::square(origin, side_length);
    let right_arc_rect = Rect::square(
        origin.offset(drawable_width - side_length, 0.0),
        side_length,
    );

    let bottom_arc_radius = BOTTOM_ARC_RADIUS_RATIO * side_length;
    let line_length = side_length - bottom_arc_radius;
    let path_length = 2.0 * line_length + PI * bottom_arc_radius / 2.0;
    let right_line_progress_bound = 100.0 * line_length / path_length;
    let bottom_arc_progress_bound = 100.0 - right_line_progress_bound;

    // Lobe tangent points, 135° on the left circle and 45° on the right one
    let left_line_end = origin.offset(
        (2.0 - SQRT_2) * side_length / 4.0,
        (2.0 + SQRT_2) * side_length / 4.0,
    );
    let right_line_start = Point::new(
        2.0 * x_offset + drawable_width - left_line_end.x,
        left_line_end.y,
    );

    // The rounding arc cuts `bottom_arc_radius` off each line at the tip
    let tip = Point::new(x_offset + drawable_width / 2.0, y_offset + drawable_height);
    let corner = bottom_arc_radius / SQRT_2;
    let right_line_end = tip.offset(corner, -corner);
    let left_line_start = tip.offset(-corner, -corner);

    let bottom_arc_center = tip.offset(0.0, -SQRT_2 * bottom_arc_radius);
    let bottom_rect = Rect::centered(bottom_arc_center, bottom_arc_radius);

    let outline = ShapePath::new()
        .move_to(right_line_start)
        .line_to(right_line_end)
        .arc_to(bottom_rect, BOTTOM_ARC_START, BOTTOM_ARC_SWEEP)
        .line_to(left_line_end)
        .arc_to(left_arc_rect, LEFT_LOBE_START, LOBE_SWEEP)
        .arc_to(right_arc_rect, RIGHT_LOBE_START, LOBE_SWEEP);

    let text_paths = TextPathInput {
        drawable,
        side_length,
        stroke_width,
        outer_offset: (stroke_width + text_clearance) / 2.0,
        left_arc_rect,
        right_arc_rect,
        bottom_rect,
        left_line_start,
        left_line_end,
        right_line_start,
    }
    .build();

    debug!(
        "layout: drawable {:.2}x{:.2} at ({:.2}, {:.2}), side {:.2}, stroke {:.2}",
        drawable_width, drawable_height, x_offset, y_offset, side_length, stroke_width
    );

    Ok(ShapeGeometry {
        drawable,
        side_length,
        stroke_width,
        left_arc_rect,
        right_arc_rect,
        bottom_arc_radius,
        bottom_rect,
        left_line_start,
        left_line_end,
        right_line_start,
        right_line_end,
        path_length,
        right_line_progress_bound,
        bottom_arc_progress_bound,
        outline,
        text_paths,
    })
}

/// Name of the first layout input that is NaN or infinite
fn first_non_finite(bounds: &BoundingBox, style: &StyleConfig) -> Option<&'static str> {
    [
        ("width", bounds.width),
        ("height", bounds.height),
        ("padding.start", bounds.padding.start),
        ("padding.end", bounds.padding.end),
        ("padding.top", bounds.padding.top),
        ("padding.bottom", bounds.padding.bottom),
        ("stroke.width", style.stroke_width),
        ("shadow.radius", style.shadow.radius),
        ("shadow.dx", style.shadow.dx),
        ("shadow.dy", style.shadow.dy),
        ("text.inner_size", style.inner_text_size),
        ("text.outer_size", style.outer_text_size),
        ("text.outer_offset", style.outer_text_offset),
        ("font.ascent", style.font.ascent),
        ("font.descent", style.font.descent),
    ]
    .into_iter()
    .find(|(_, value)| !value.is_finite())
    .map(|(name, _)| name)
}

/// Extent reserved around the drawable box on each axis: the configured
/// stroke plus shadow or outer text clearance on both sides
pub(crate) fn reserved_extent(style: &StyleConfig) -> f64 {
    let clearance = style
        .shadow
        .radius
        .max(0.0)
        .max(style.outer_text_clearance());
    style.configured_stroke_width() + 2.0 * clearance
}

/// Clamp the configured stroke into `(0, side / 3]`, defaulting to `side / 6`
pub fn resolve_stroke_width(configured: f64, side_length: f64) -> f64 {
    let max = side_length / MAX_STROKE_DIVISOR;
    if configured > max {
        max
    } else if configured <= 0.0 {
        side_length / DEFAULT_STROKE_DIVISOR
    } else {
        configured
    }
}

struct TextPathInput {
    drawable: Rect,
    side_length: f64,
    stroke_width: f64,
    outer_offset: f64,
    left_arc_rect: Rect,
    right_arc_rect: Rect,
    bottom_rect: Rect,
    left_line_start: Point,
    left_line_end: Point,
    right_line_start: Point,
}

impl TextPathInput {
    fn build(&self) -> TextPaths {
        let d = self.outer_offset;
        let s = self.side_length;
        let x = self.drawable.x;
        let y = self.drawable.y;
        let w = self.drawable.width;
        let h = self.drawable.height;

        let left_inner = ShapePath::new()
            .move_to(self.left_line_end)
            .arc_to(self.left_arc_rect, LEFT_LOBE_START, LOBE_SWEEP);

        // Runs backwards so right-hand text reads upright
        let right_inner = ShapePath::new()
            .move_to(self.right_line_start)
            .arc_to(self.right_arc_rect, 45.0, -LOBE_SWEEP);

        let bottom_inner = ShapePath::new()
            .move_to(self.left_line_end)
            .line_to(self.left_line_start)
            .arc_to(self.bottom_rect, 135.0, -BOTTOM_ARC_SWEEP)
            .line_to(self.right_line_start);

        let left_outer = ShapePath::new()
            .move_to(self.left_line_end.offset(-d, -d))
            .arc_to(self.left_arc_rect.outset(d), LEFT_LOBE_START, LOBE_SWEEP);

        let right_outer = ShapePath::new()
            .move_to(Point::new(x + w / 2.0 - d, y + h - SQRT_2 * s - d))
            .arc_to(self.right_arc_rect.outset(d), RIGHT_LOBE_START, LOBE_SWEEP);

        // Circle through the outer stroke edge at the tip, traversed through its bottom
        let half_diagonal = SQRT_2 * s / 2.0;
        let mid = Point::new(x + w / 2.0, y + w / 2.0);
        let radius = half_diagonal + self.stroke_width / 2.0;
        let bottom_outer = ShapePath::new()
            .move_to(mid.offset(-radius, 0.0))
            .arc_to(Rect::centered(mid, radius), 180.0, -180.0);

        TextPaths {
            left_inner,
            right_inner,
            bottom_inner,
            left_outer,
            right_outer,
            bottom_outer,
        }
    }
}
