//! Configuration for SVG rendering

use crate::color::Color;

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "cf-" for "cf-lobe")
    pub class_prefix: Option<String>,

    /// Fill for a rectangle covering the whole canvas
    pub background: Option<Color>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("cf-".to_string()),
            background: None,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Paint the canvas before any command
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}
