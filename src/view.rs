//! Host adapter holding the indicator's mutable state
//!
//! A host framework owns one [`CordiformView`] per widget. Every setter
//! reports what the host has to do next: nothing, repaint, or run a new
//! layout pass. Geometry is recomputed eagerly whenever a setter returns
//! [`Invalidation::Relayout`].

use log::debug;

use crate::color::Color;
use crate::layout::{compute_geometry, measure, BoundingBox, MeasureSpec, ShapeGeometry};
use crate::progress::{compute_draw_commands, DrawCommand, ProgressState};
use crate::style::StyleConfig;

/// Work a host must schedule after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invalidation {
    None,
    /// Repaint with the current geometry
    Redraw,
    /// Geometry changed; re-measure and repaint
    Relayout,
}

/// Stateful wrapper around the layout engine and progress renderer
#[derive(Debug, Clone)]
pub struct CordiformView {
    bounds: BoundingBox,
    style: StyleConfig,
    progress: ProgressState,
    geometry: Option<ShapeGeometry>,
}

impl Default for CordiformView {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

impl CordiformView {
    /// A view with empty bounds; nothing is drawn until bounds are set
    pub fn new(style: StyleConfig) -> Self {
        Self {
            bounds: BoundingBox::default(),
            style,
            progress: ProgressState::default(),
            geometry: None,
        }
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// Geometry of the last layout pass, `None` when the bounds are degenerate
    pub fn geometry(&self) -> Option<&ShapeGeometry> {
        self.geometry.as_ref()
    }

    /// Stroke width after clamping, or 0 before a successful layout
    pub fn actual_stroke_width(&self) -> f64 {
        self.geometry.as_ref().map_or(0.0, |g| g.stroke_width)
    }

    /// Commands for the current frame; empty when there is no geometry
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        match &self.geometry {
            Some(geometry) => compute_draw_commands(geometry, &self.progress, &self.style),
            None => Vec::new(),
        }
    }

    /// Preferred size for the host's constraints
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> (f64, f64) {
        measure(width, height, &self.bounds.padding, &self.style)
    }

    fn relayout(&mut self) -> Invalidation {
        self.geometry = match compute_geometry(&self.bounds, &self.style) {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                debug!("layout skipped: {}", e);
                None
            }
        };
        Invalidation::Relayout
    }

    fn relayout_if(&mut self, changed: bool) -> Invalidation {
        if changed {
            self.relayout()
        } else {
            Invalidation::None
        }
    }

    pub fn set_bounds(&mut self, bounds: BoundingBox) -> Invalidation {
        let changed = self.bounds != bounds;
        self.bounds = bounds;
        self.relayout_if(changed)
    }

    /// Replace the whole style
    pub fn set_style(&mut self, style: StyleConfig) -> Invalidation {
        let changed = self.style != style;
        self.style = style;
        self.relayout_if(changed)
    }

    // Progress

    pub fn set_progress(&mut self, progress: ProgressState) -> Invalidation {
        self.progress = progress;
        Invalidation::Redraw
    }

    pub fn set_left_progress(&mut self, value: u32) -> Invalidation {
        self.progress.set_left(value);
        Invalidation::Redraw
    }

    pub fn set_right_progress(&mut self, value: u32) -> Invalidation {
        self.progress.set_right(value);
        Invalidation::Redraw
    }

    pub fn set_bottom_progress(&mut self, value: u32) -> Invalidation {
        self.progress.set_bottom(value);
        Invalidation::Redraw
    }

    // Colours

    pub fn set_left_arc_color(&mut self, color: Color) -> Invalidation {
        self.style.left_arc_color = color;
        Invalidation::Redraw
    }

    pub fn set_right_arc_color(&mut self, color: Color) -> Invalidation {
        self.style.right_arc_color = color;
        Invalidation::Redraw
    }

    pub fn set_bottom_line_color(&mut self, color: Color) -> Invalidation {
        self.style.bottom_line_color = color;
        Invalidation::Redraw
    }

    pub fn set_inner_text_color(&mut self, color: Color) -> Invalidation {
        self.style.inner_text_color = color;
        Invalidation::Redraw
    }

    pub fn set_shadow_color(&mut self, color: Color) -> Invalidation {
        self.style.shadow.color = color;
        Invalidation::Redraw
    }

    // Geometry-affecting values

    pub fn set_stroke_width(&mut self, width: f64) -> Invalidation {
        let changed = self.style.stroke_width != width;
        self.style.stroke_width = width;
        self.relayout_if(changed)
    }

    pub fn set_shadow_radius(&mut self, radius: f64) -> Invalidation {
        let changed = self.style.shadow.radius != radius;
        self.style.shadow.radius = radius;
        self.relayout_if(changed)
    }

    pub fn set_shadow_dx(&mut self, dx: f64) -> Invalidation {
        let changed = self.style.shadow.dx != dx;
        self.style.shadow.dx = dx;
        self.relayout_if(changed)
    }

    pub fn set_shadow_dy(&mut self, dy: f64) -> Invalidation {
        let changed = self.style.shadow.dy != dy;
        self.style.shadow.dy = dy;
        self.relayout_if(changed)
    }

    pub fn set_inner_text_size(&mut self, size: f64) -> Invalidation {
        let changed = self.style.inner_text_size != size;
        self.style.inner_text_size = size;
        self.relayout_if(changed)
    }

    pub fn set_outer_text_size(&mut self, size: f64) -> Invalidation {
        let changed = self.style.outer_text_size != size;
        self.style.outer_text_size = size;
        self.relayout_if(changed)
    }

    pub fn set_outer_text_offset(&mut self, offset: f64) -> Invalidation {
        let changed = self.style.outer_text_offset != offset;
        self.style.outer_text_offset = offset;
        self.relayout_if(changed)
    }

    // Labels

    pub fn set_left_inner_text(&mut self, text: Option<String>) -> Invalidation {
        self.style.labels.left_inner = text;
        Invalidation::Redraw
    }

    pub fn set_right_inner_text(&mut self, text: Option<String>) -> Invalidation {
        self.style.labels.right_inner = text;
        Invalidation::Redraw
    }

    pub fn set_bottom_inner_text(&mut self, text: Option<String>) -> Invalidation {
        self.style.labels.bottom_inner = text;
        Invalidation::Redraw
    }

    /// Outer labels may change the reserved text band; pass `relayout` to
    /// recompute geometry, or `false` to repaint with the current layout
    pub fn set_left_outer_text(&mut self, text: Option<String>, relayout: bool) -> Invalidation {
        self.style.labels.left_outer = text;
        self.outer_text_changed(relayout)
    }

    pub fn set_right_outer_text(&mut self, text: Option<String>, relayout: bool) -> Invalidation {
        self.style.labels.right_outer = text;
        self.outer_text_changed(relayout)
    }

    pub fn set_bottom_outer_text(&mut self, text: Option<String>, relayout: bool) -> Invalidation {
        self.style.labels.bottom_outer = text;
        self.outer_text_changed(relayout)
    }

    fn outer_text_changed(&mut self, relayout: bool) -> Invalidation {
        if relayout {
            self.relayout()
        } else {
            Invalidation::Redraw
        }
    }
}
