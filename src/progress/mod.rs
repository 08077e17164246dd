//! Progress renderer for the cordiform shape
//!
//! Turns a [`ShapeGeometry`](crate::layout::ShapeGeometry) and the three
//! progress values into an ordered list of [`DrawCommand`]s. Commands are
//! painted in order, so later commands cover earlier ones.

pub mod command;
pub mod renderer;
pub mod state;

pub use command::{DrawCommand, LineCap, LineJoin, Shadow, Stroke, TextAlign};
pub use renderer::{compute_draw_commands, inner_text_size, lobe_sweep};
pub use state::{wrap_progress, ProgressState, PROGRESS_MODULUS};
