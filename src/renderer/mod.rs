//! SVG drawing surface for draw-command lists
//!
//! This module takes the commands produced by the progress renderer and
//! serialises them, in order, into an SVG document.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::to_svg_d;
pub use svg::{render_svg, SvgBuilder};
