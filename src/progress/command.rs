//! Draw commands consumed by a drawing surface

use crate::color::Color;
use crate::layout::{Point, Rect, ShapePath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
}

/// How a line, arc or path is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
    pub cap: LineCap,
    pub join: LineJoin,
    pub anti_alias: bool,
}

impl Stroke {
    /// Round-capped, anti-aliased stroke
    pub fn round(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            cap: LineCap::Round,
            join: LineJoin::Miter,
            anti_alias: true,
        }
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// A blurred shadow layer under a stroked path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: Color,
}

/// Where text sits relative to the start of its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Text begins at the path start
    Left,
    /// Text is centered on the path's midpoint
    Center,
    /// Text ends at the path end
    Right,
}

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroked path, optionally casting a shadow
    Path {
        path: ShapePath,
        stroke: Stroke,
        shadow: Option<Shadow>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// Stroked arc along the ellipse inscribed in `oval`
    Arc {
        oval: Rect,
        start_angle: f64,
        sweep_angle: f64,
        stroke: Stroke,
    },
    FilledCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    /// Text laid out along `path`
    TextOnPath {
        text: String,
        path: ShapePath,
        /// Distance along the path added to the aligned start position
        h_offset: f64,
        /// Baseline shift perpendicular to the path
        v_offset: f64,
        font_size: f64,
        color: Color,
        align: TextAlign,
    },
}

impl DrawCommand {
    /// Colour this command paints with
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Path { stroke, .. }
            | DrawCommand::Line { stroke, .. }
            | DrawCommand::Arc { stroke, .. } => stroke.color,
            DrawCommand::FilledCircle { color, .. } | DrawCommand::TextOnPath { color, .. } => {
                *color
            }
        }
    }
}
