//! Preferred-size negotiation with a host layout system

use super::engine::{reserved_extent, DRAWABLE_RATIO};
use super::types::Padding;
use crate::style::StyleConfig;

/// A size constraint offered by the host for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The host imposes this exact size
    Exactly(f64),
    /// The view may be at most this large
    AtMost(f64),
    /// No constraint; the value is a hint
    Unspecified(f64),
}

impl MeasureSpec {
    pub fn size(&self) -> f64 {
        match *self {
            MeasureSpec::Exactly(s) | MeasureSpec::AtMost(s) | MeasureSpec::Unspecified(s) => s,
        }
    }

    pub fn is_at_most(&self) -> bool {
        matches!(self, MeasureSpec::AtMost(_))
    }
}

/// Pick the view size for the given constraints
///
/// When either axis is `AtMost`, the longer side is shrunk so the content
/// area matches [`DRAWABLE_RATIO`]; otherwise the offered sizes are kept.
pub fn measure(
    width: MeasureSpec,
    height: MeasureSpec,
    padding: &Padding,
    style: &StyleConfig,
) -> (f64, f64) {
    let mut w = width.size();
    let mut h = height.size();

    if width.is_at_most() || height.is_at_most() {
        let reserved = reserved_extent(style);
        let pad_h = padding.horizontal() + reserved;
        let pad_v = padding.vertical() + reserved;
        if w > h {
            w = ((h - pad_v) * DRAWABLE_RATIO + pad_h).max(0.0);
        } else {
            h = ((w - pad_h) / DRAWABLE_RATIO + pad_v).max(0.0);
        }
    }

    (w, h)
}
