//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Nothing is left to draw in once padding and clearances are removed
    #[error("degenerate bounds: drawable area is {width}x{height}")]
    DegenerateBounds { width: f64, height: f64 },
}

impl LayoutError {
    /// Create a degenerate bounds error
    pub fn degenerate(width: f64, height: f64) -> Self {
        Self::DegenerateBounds { width, height }
    }
}
