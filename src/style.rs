//! Style configuration for the cordiform indicator
//!
//! A [`StyleConfig`] is immutable for the duration of a layout pass. It can be
//! built in code with the `with_*` builders or loaded from TOML:
//!
//! ```toml
//! [colors]
//! left_arc = "#ff6f91"
//! bottom_line = "#845ec2"
//!
//! [stroke]
//! width = 12
//!
//! [labels]
//! left_outer = "Sleep"
//! ```

use std::path::Path;

use serde::Deserialize;
use toml::Spanned;

use crate::color::Color;
use crate::error::ConfigError;

/// Line height of the reference font relative to its size (ascent + descent).
pub const TEXT_HEIGHT_SCALE: f64 = 1.171875;

/// Outer text size used when a label is set but no size is configured
pub const DEFAULT_OUTER_TEXT_SIZE: f64 = 10.0;

/// Shadow cast by the outline path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: Color,
}

impl ShadowStyle {
    /// A shadow is only cast when the blur radius is positive
    pub fn is_visible(&self) -> bool {
        self.radius > 0.0
    }
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            radius: 0.0,
            dx: 0.0,
            dy: 0.0,
            color: Color::GRAY,
        }
    }
}

/// The six optional text labels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLabels {
    pub left_inner: Option<String>,
    pub right_inner: Option<String>,
    pub bottom_inner: Option<String>,
    pub left_outer: Option<String>,
    pub right_outer: Option<String>,
    pub bottom_outer: Option<String>,
}

impl TextLabels {
    /// Whether any label drawn outside the stroke is non-empty
    pub fn has_outer_text(&self) -> bool {
        [&self.left_outer, &self.right_outer, &self.bottom_outer]
            .into_iter()
            .any(|t| non_empty(t).is_some())
    }
}

/// Returns the label only if it holds text
pub(crate) fn non_empty(label: &Option<String>) -> Option<&str> {
    label.as_deref().filter(|s| !s.is_empty())
}

/// Vertical font metrics as fractions of the font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Distance above the baseline (positive)
    pub ascent: f64,
    /// Distance below the baseline (positive)
    pub descent: f64,
}

impl FontMetrics {
    /// Baseline shift that centers a line of text of `size` on its path
    pub fn center_offset(&self, size: f64) -> f64 {
        (self.ascent + self.descent) * size / 2.0 - self.descent * size
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        // 2048 units per em; ascent + descent equals TEXT_HEIGHT_SCALE
        Self {
            ascent: 1900.0 / 2048.0,
            descent: 500.0 / 2048.0,
        }
    }
}

/// All style inputs of a layout and render pass
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub left_arc_color: Color,
    pub right_arc_color: Color,
    pub bottom_line_color: Color,
    /// Configured stroke width; `<= 0` lets the engine pick one
    pub stroke_width: f64,
    pub shadow: ShadowStyle,
    /// `<= 0` picks a size proportional to the stroke
    pub inner_text_size: f64,
    pub outer_text_size: f64,
    pub outer_text_offset: f64,
    pub inner_text_color: Color,
    pub labels: TextLabels,
    pub font: FontMetrics,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            left_arc_color: Color::from_u32(0xffff6f91),
            right_arc_color: Color::from_u32(0xffff9671),
            bottom_line_color: Color::from_u32(0xff845ec2),
            stroke_width: 0.0,
            shadow: ShadowStyle::default(),
            inner_text_size: 0.0,
            outer_text_size: 0.0,
            outer_text_offset: 0.0,
            inner_text_color: Color::BLACK,
            labels: TextLabels::default(),
            font: FontMetrics::default(),
        }
    }
}

impl StyleConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left_arc_color(mut self, color: Color) -> Self {
        self.left_arc_color = color;
        self
    }

    pub fn with_right_arc_color(mut self, color: Color) -> Self {
        self.right_arc_color = color;
        self
    }

    pub fn with_bottom_line_color(mut self, color: Color) -> Self {
        self.bottom_line_color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_shadow(mut self, shadow: ShadowStyle) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_inner_text_size(mut self, size: f64) -> Self {
        self.inner_text_size = size;
        self
    }

    pub fn with_outer_text_size(mut self, size: f64) -> Self {
        self.outer_text_size = size;
        self
    }

    pub fn with_outer_text_offset(mut self, offset: f64) -> Self {
        self.outer_text_offset = offset;
        self
    }

    pub fn with_inner_text_color(mut self, color: Color) -> Self {
        self.inner_text_color = color;
        self
    }

    pub fn with_labels(mut self, labels: TextLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = font;
        self
    }

    /// Configured stroke width with negative values treated as unset
    pub fn configured_stroke_width(&self) -> f64 {
        self.stroke_width.max(0.0)
    }

    /// Outer text size after falling back to [`DEFAULT_OUTER_TEXT_SIZE`]
    pub fn effective_outer_text_size(&self) -> f64 {
        if self.outer_text_size <= 0.0 && self.labels.has_outer_text() {
            DEFAULT_OUTER_TEXT_SIZE
        } else {
            self.outer_text_size.max(0.0)
        }
    }

    /// Band reserved outside the stroke for outer labels
    pub fn outer_text_clearance(&self) -> f64 {
        self.effective_outer_text_size() * TEXT_HEIGHT_SCALE + self.outer_text_offset
    }

    /// Load a style from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a style from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlStyle = toml::from_str(content)?;
        let mut style = StyleConfig::default();

        if let Some(colors) = parsed.colors {
            apply_color(&mut style.left_arc_color, colors.left_arc, "colors.left_arc")?;
            apply_color(&mut style.right_arc_color, colors.right_arc, "colors.right_arc")?;
            apply_color(
                &mut style.bottom_line_color,
                colors.bottom_line,
                "colors.bottom_line",
            )?;
            apply_color(
                &mut style.inner_text_color,
                colors.inner_text,
                "colors.inner_text",
            )?;
        }

        if let Some(stroke) = parsed.stroke {
            style.stroke_width = stroke.width.unwrap_or(style.stroke_width);
        }

        if let Some(shadow) = parsed.shadow {
            style.shadow.radius = shadow.radius.unwrap_or(style.shadow.radius);
            style.shadow.dx = shadow.dx.unwrap_or(style.shadow.dx);
            style.shadow.dy = shadow.dy.unwrap_or(style.shadow.dy);
            apply_color(&mut style.shadow.color, shadow.color, "shadow.color")?;
        }

        if let Some(text) = parsed.text {
            style.inner_text_size = text.inner_size.unwrap_or(style.inner_text_size);
            style.outer_text_size = text.outer_size.unwrap_or(style.outer_text_size);
            style.outer_text_offset = text.outer_offset.unwrap_or(style.outer_text_offset);
        }

        if let Some(labels) = parsed.labels {
            style.labels = TextLabels {
                left_inner: labels.left_inner,
                right_inner: labels.right_inner,
                bottom_inner: labels.bottom_inner,
                left_outer: labels.left_outer,
                right_outer: labels.right_outer,
                bottom_outer: labels.bottom_outer,
            };
        }

        if let Some(font) = parsed.font {
            style.font.ascent = font.ascent.unwrap_or(style.font.ascent);
            style.font.descent = font.descent.unwrap_or(style.font.descent);
        }

        Ok(style)
    }
}

fn apply_color(
    target: &mut Color,
    value: Option<Spanned<String>>,
    key: &str,
) -> Result<(), ConfigError> {
    let Some(value) = value else {
        return Ok(());
    };
    match Color::parse(value.get_ref()) {
        Some(color) => {
            *target = color;
            Ok(())
        }
        None => Err(ConfigError::InvalidColor {
            key: key.to_string(),
            value: value.get_ref().clone(),
            span: value.span(),
        }),
    }
}

/// TOML structure for deserializing styles
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStyle {
    colors: Option<TomlColors>,
    stroke: Option<TomlStroke>,
    shadow: Option<TomlShadow>,
    text: Option<TomlText>,
    labels: Option<TomlLabels>,
    font: Option<TomlFont>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlColors {
    left_arc: Option<Spanned<String>>,
    right_arc: Option<Spanned<String>>,
    bottom_line: Option<Spanned<String>>,
    inner_text: Option<Spanned<String>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStroke {
    width: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlShadow {
    radius: Option<f64>,
    dx: Option<f64>,
    dy: Option<f64>,
    color: Option<Spanned<String>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlText {
    inner_size: Option<f64>,
    outer_size: Option<f64>,
    outer_offset: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLabels {
    left_inner: Option<String>,
    right_inner: Option<String>,
    bottom_inner: Option<String>,
    left_outer: Option<String>,
    right_outer: Option<String>,
    bottom_outer: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlFont {
    ascent: Option<f64>,
    descent: Option<f64>,
}
