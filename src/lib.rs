//! Cordiform - a three-segment, heart-shaped progress indicator
//!
//! This library provides a layout engine that fits the heart outline into a
//! bounding box, a progress renderer that turns three progress values into
//! draw commands, and an SVG drawing surface for those commands.
//!
//! # Example
//!
//! ```rust
//! use cordiform::{render, ProgressState};
//!
//! let svg = render(300.0, 300.0, ProgressState::new(50, 75, 30));
//! assert!(svg.contains("<svg"));
//! ```

pub mod color;
pub mod error;
pub mod layout;
pub mod progress;
pub mod renderer;
pub mod style;
pub mod view;

pub use color::Color;
pub use error::ConfigError;
pub use layout::{
    compute_geometry, measure, BoundingBox, LayoutError, MeasureSpec, Padding, ShapeGeometry,
};
pub use progress::{compute_draw_commands, DrawCommand, ProgressState};
pub use renderer::{render_svg, SvgConfig};
pub use style::{FontMetrics, ShadowStyle, StyleConfig, TextLabels};
pub use view::{CordiformView, Invalidation};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Shape style
    pub style: StyleConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shape style
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Render the indicator to SVG with default configuration
pub fn render(width: f64, height: f64, progress: ProgressState) -> String {
    render_with_config(
        &BoundingBox::new(width, height),
        &progress,
        &RenderConfig::default(),
    )
}

/// Render the indicator to SVG with custom configuration
///
/// Bounds too small to hold the shape produce an empty document.
///
/// # Example
///
/// ```rust
/// use cordiform::{render_with_config, BoundingBox, Padding, ProgressState, RenderConfig, StyleConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_style(StyleConfig::default().with_stroke_width(12.0))
///     .with_svg(SvgConfig::default().with_standalone(false));
/// let bounds = BoundingBox::new(240.0, 200.0).with_padding(Padding::uniform(8.0));
///
/// let svg = render_with_config(&bounds, &ProgressState::new(10, 20, 30), &config);
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("cf-outline"));
/// ```
pub fn render_with_config(
    bounds: &BoundingBox,
    progress: &ProgressState,
    config: &RenderConfig,
) -> String {
    let commands = match compute_geometry(bounds, &config.style) {
        Ok(geometry) => compute_draw_commands(&geometry, progress, &config.style),
        Err(_) => Vec::new(),
    };
    let (width, height) = if bounds.width.is_finite() && bounds.height.is_finite() {
        (bounds.width, bounds.height)
    } else {
        (0.0, 0.0)
    };
    render_svg(&commands, width, height, &config.svg)
}
