//! Progress renderer: geometry, progress and style in, draw commands out
//!
//! The two lobes map progress linearly onto their 180° arcs. The bottom path
//! is a line, a quarter arc and another line driven by one progress value;
//! the value is split at the geometry's progress bounds so that equal steps
//! travel equal distances along the stroke.

use log::trace;

use super::command::{DrawCommand, LineCap, LineJoin, Shadow, Stroke, TextAlign};
use super::state::ProgressState;
use crate::color::Color;
use crate::layout::{
    Point, Rect, ShapeGeometry, ShapePath, BOTTOM_ARC_START, BOTTOM_ARC_SWEEP, LEFT_LOBE_START,
    LOBE_SWEEP, RIGHT_LOBE_START,
};
use crate::style::{non_empty, StyleConfig, TEXT_HEIGHT_SCALE};

/// Added to the bottom arc's progress before scaling. Empirical: closes a
/// one-unit gap where the arc meets the right line.
pub const BOTTOM_ARC_SEAM_BIAS: f64 = 0.5;

/// Fraction of the right line after which the seam patch is drawn. Empirical.
pub const SEAM_PATCH_THRESHOLD: f64 = 0.5;

/// Divides the largest inner text size to get the default one
const DEFAULT_INNER_TEXT_DIVISOR: f64 = 1.5;

/// Nudge along the path for the right inner label
const RIGHT_INNER_TEXT_OFFSET: f64 = 1.0;

/// Build the ordered command list for one frame
pub fn compute_draw_commands(
    geometry: &ShapeGeometry,
    progress: &ProgressState,
    style: &StyleConfig,
) -> Vec<DrawCommand> {
    let strokes = Strokes::new(geometry.stroke_width, style);
    let mut commands = Vec::with_capacity(20);

    commands.push(DrawCommand::Path {
        path: geometry.outline.clone(),
        stroke: strokes.outline,
        shadow: style.shadow.is_visible().then(|| Shadow {
            radius: style.shadow.radius,
            dx: style.shadow.dx,
            dy: style.shadow.dy,
            color: style.shadow.color,
        }),
    });

    let bottom = progress.bottom() as f64;
    let right_bound = geometry.right_line_progress_bound;
    let arc_bound = geometry.bottom_arc_progress_bound;

    // Right line
    commands.push(line(
        geometry.right_line_start,
        geometry.right_line_end,
        strokes.line_bg,
    ));
    let right_line_progress = bottom.min(right_bound);
    let right_line_ratio = right_line_progress / right_bound;
    let right_line_tip = geometry
        .right_line_start
        .lerp(geometry.right_line_end, right_line_ratio);
    if right_line_ratio > 0.0 {
        commands.push(line(
            geometry.right_line_start,
            right_line_tip,
            strokes.line_fg,
        ));
    }

    push_lobe(
        &mut commands,
        geometry.right_arc_rect,
        RIGHT_LOBE_START,
        progress.right(),
        strokes.right_bg,
        strokes.right_fg,
    );
    push_lobe(
        &mut commands,
        geometry.left_arc_rect,
        LEFT_LOBE_START,
        progress.left(),
        strokes.left_bg,
        strokes.left_fg,
    );

    // Left line, filled once the bottom arc is complete
    commands.push(line(
        geometry.left_line_start,
        geometry.left_line_end,
        strokes.line_bg,
    ));
    if bottom > arc_bound {
        let ratio = (bottom - arc_bound) / geometry.left_line_progress_span();
        commands.push(line(
            geometry.left_line_start,
            geometry.left_line_start.lerp(geometry.left_line_end, ratio),
            strokes.line_fg,
        ));
    }

    // Bottom rounding arc
    commands.push(arc(
        geometry.bottom_rect,
        BOTTOM_ARC_START,
        BOTTOM_ARC_SWEEP,
        strokes.bottom_arc_bg,
    ));
    if bottom > right_bound {
        let ratio = (bottom.min(arc_bound) - right_bound + BOTTOM_ARC_SEAM_BIAS)
            / geometry.bottom_arc_progress_span();
        commands.push(arc(
            geometry.bottom_rect,
            BOTTOM_ARC_START,
            BOTTOM_ARC_SWEEP * ratio,
            strokes.bottom_arc_fg,
        ));
    }

    // Masks the joint between the right line's cap and the arc background
    if right_line_progress > SEAM_PATCH_THRESHOLD * right_bound {
        commands.push(DrawCommand::FilledCircle {
            center: right_line_tip,
            radius: geometry.stroke_width / 2.0,
            color: style.bottom_line_color,
        });
    }

    push_labels(&mut commands, geometry, style);

    trace!("{} draw commands for {:?}", commands.len(), progress);
    commands
}

/// Degrees swept by a lobe at the given progress
pub fn lobe_sweep(progress: u32) -> f64 {
    LOBE_SWEEP * (progress as f64 / 100.0)
}

/// Inner labels must fit inside the stroke band
pub fn inner_text_size(configured: f64, stroke_width: f64) -> f64 {
    let max = stroke_width / TEXT_HEIGHT_SCALE;
    if configured > max {
        max
    } else if configured <= 0.0 {
        max / DEFAULT_INNER_TEXT_DIVISOR
    } else {
        configured
    }
}

struct Strokes {
    outline: Stroke,
    left_fg: Stroke,
    left_bg: Stroke,
    right_fg: Stroke,
    right_bg: Stroke,
    line_fg: Stroke,
    line_bg: Stroke,
    bottom_arc_fg: Stroke,
    bottom_arc_bg: Stroke,
}

impl Strokes {
    fn new(width: f64, style: &StyleConfig) -> Self {
        let line_fg = Stroke::round(width, style.bottom_line_color).with_join(LineJoin::Round);
        let line_bg =
            Stroke::round(width, style.bottom_line_color.darken()).with_join(LineJoin::Round);
        Self {
            outline: Stroke::round(width, Color::GRAY)
                .with_cap(LineCap::Butt)
                .with_join(LineJoin::Round),
            left_fg: Stroke::round(width, style.left_arc_color),
            left_bg: Stroke::round(width, style.left_arc_color.darken()),
            right_fg: Stroke::round(width, style.right_arc_color),
            right_bg: Stroke::round(width, style.right_arc_color.darken()),
            line_fg,
            line_bg,
            // Anti-aliasing the small arc leaves a visible seam against the lines
            bottom_arc_fg: line_fg.with_anti_alias(false),
            bottom_arc_bg: line_bg.with_anti_alias(false),
        }
    }
}

fn line(from: Point, to: Point, stroke: Stroke) -> DrawCommand {
    DrawCommand::Line { from, to, stroke }
}

fn arc(oval: Rect, start_angle: f64, sweep_angle: f64, stroke: Stroke) -> DrawCommand {
    DrawCommand::Arc {
        oval,
        start_angle,
        sweep_angle,
        stroke,
    }
}

fn push_lobe(
    commands: &mut Vec<DrawCommand>,
    oval: Rect,
    start_angle: f64,
    progress: u32,
    background: Stroke,
    foreground: Stroke,
) {
    commands.push(arc(oval, start_angle, LOBE_SWEEP, background));
    let sweep = lobe_sweep(progress);
    if sweep > 0.0 {
        commands.push(arc(oval, start_angle, sweep, foreground));
    }
}

fn push_labels(commands: &mut Vec<DrawCommand>, geometry: &ShapeGeometry, style: &StyleConfig) {
    let paths = &geometry.text_paths;
    let labels = &style.labels;

    let inner_size = inner_text_size(style.inner_text_size, geometry.stroke_width);
    let inner_v_offset = style.font.center_offset(inner_size);
    let inner = [
        (&labels.left_inner, &paths.left_inner, TextAlign::Right, 0.0),
        (
            &labels.right_inner,
            &paths.right_inner,
            TextAlign::Left,
            RIGHT_INNER_TEXT_OFFSET,
        ),
        (&labels.bottom_inner, &paths.bottom_inner, TextAlign::Left, 0.0),
    ];
    for (label, path, align, h_offset) in inner {
        if let Some(text) = non_empty(label) {
            commands.push(text_on_path(
                text,
                path,
                h_offset,
                inner_v_offset,
                inner_size,
                style.inner_text_color,
                align,
            ));
        }
    }

    let outer_size = style.effective_outer_text_size();
    let outer_v_offset = style.font.center_offset(outer_size);
    let outer = [
        (&labels.bottom_outer, &paths.bottom_outer, style.bottom_line_color),
        (&labels.right_outer, &paths.right_outer, style.right_arc_color),
        (&labels.left_outer, &paths.left_outer, style.left_arc_color),
    ];
    for (label, path, color) in outer {
        if let Some(text) = non_empty(label) {
            commands.push(text_on_path(
                text,
                path,
                0.0,
                outer_v_offset,
                outer_size,
                color,
                TextAlign::Center,
            ));
        }
    }
}

fn text_on_path(
    text: &str,
    path: &ShapePath,
    h_offset: f64,
    v_offset: f64,
    font_size: f64,
    color: Color,
    align: TextAlign,
) -> DrawCommand {
    DrawCommand::TextOnPath {
        text: text.to_string(),
        path: path.clone(),
        h_offset,
        v_offset,
        font_size,
        color,
        align,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute_geometry, BoundingBox};
    use crate::style::{FontMetrics, TextLabels};

    fn setup(stroke: f64) -> (ShapeGeometry, StyleConfig) {
        let style = StyleConfig::default().with_stroke_width(stroke);
        let geometry = compute_geometry(&BoundingBox::new(300.0, 300.0), &style).unwrap();
        (geometry, style)
    }

    fn arcs_in(commands: &[DrawCommand], oval: Rect) -> Vec<(f64, f64, Color)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc {
                    oval: o,
                    start_angle,
                    sweep_angle,
                    stroke,
                } if *o == oval => Some((*start_angle, *sweep_angle, stroke.color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_lobe_sweep_is_linear() {
        assert_eq!(lobe_sweep(0), 0.0);
        assert_eq!(lobe_sweep(50), 90.0);
        assert_eq!(lobe_sweep(100), 180.0);
    }

    #[test]
    fn test_inner_text_size_clamps() {
        assert_eq!(inner_text_size(100.0, 11.71875), 10.0);
        assert_eq!(inner_text_size(0.0, 11.71875), 10.0 / 1.5);
        assert_eq!(inner_text_size(4.0, 11.71875), 4.0);
    }

    #[test]
    fn test_lobe_background_then_foreground() {
        let (g, style) = setup(10.0);
        let commands = compute_draw_commands(&g, &ProgressState::new(25, 0, 0), &style);
        let left = arcs_in(&commands, g.left_arc_rect);
        assert_eq!(
            left,
            vec![
                (LEFT_LOBE_START, 180.0, style.left_arc_color.darken()),
                (LEFT_LOBE_START, 45.0, style.left_arc_color),
            ]
        );
        let right = arcs_in(&commands, g.right_arc_rect);
        assert_eq!(
            right,
            vec![(RIGHT_LOBE_START, 180.0, style.right_arc_color.darken())]
        );
    }

    #[test]
    fn test_bottom_arc_not_drawn_before_right_line_completes() {
        let (g, style) = setup(10.0);
        let below = g.right_line_progress_bound.floor() as u32;
        let commands = compute_draw_commands(&g, &ProgressState::new(0, 0, below), &style);
        let bottom = arcs_in(&commands, g.bottom_rect);
        assert_eq!(bottom.len(), 1, "only the background arc");
    }

    #[test]
    fn test_bottom_arc_sweep_includes_seam_bias() {
        let (g, style) = setup(10.0);
        let p = g.right_line_progress_bound.ceil() as u32 + 5;
        let commands = compute_draw_commands(&g, &ProgressState::new(0, 0, p), &style);
        let bottom = arcs_in(&commands, g.bottom_rect);
        assert_eq!(bottom.len(), 2);
        let expected = 90.0 * (p as f64 - g.right_line_progress_bound + 0.5)
            / (g.bottom_arc_progress_bound - g.right_line_progress_bound);
        assert!((bottom[1].1 - expected).abs() < 1e-9);
        assert_eq!(bottom[1].2, style.bottom_line_color);
    }

    #[test]
    fn test_bottom_arc_strokes_are_aliased() {
        let (g, style) = setup(10.0);
        let commands = compute_draw_commands(&g, &ProgressState::new(0, 0, 100), &style);
        for c in &commands {
            if let DrawCommand::Arc { oval, stroke, .. } = c {
                assert_eq!(stroke.anti_alias, *oval != g.bottom_rect);
            }
        }
    }

    #[test]
    fn test_seam_patch_threshold() {
        let (g, style) = setup(10.0);
        let half = g.right_line_progress_bound / 2.0;
        let has_patch = |p: u32| {
            compute_draw_commands(&g, &ProgressState::new(0, 0, p), &style)
                .iter()
                .any(|c| matches!(c, DrawCommand::FilledCircle { .. }))
        };
        assert!(!has_patch(half.floor() as u32));
        assert!(has_patch(half.floor() as u32 + 1));
    }

    #[test]
    fn test_shadow_only_when_radius_positive() {
        let (g, style) = setup(10.0);
        let commands = compute_draw_commands(&g, &ProgressState::default(), &style);
        assert!(matches!(
            &commands[0],
            DrawCommand::Path { shadow: None, .. }
        ));

        let style = style.with_shadow(crate::style::ShadowStyle {
            radius: 3.0,
            ..Default::default()
        });
        let commands = compute_draw_commands(&g, &ProgressState::default(), &style);
        assert!(matches!(
            &commands[0],
            DrawCommand::Path {
                shadow: Some(Shadow { radius, .. }),
                ..
            } if *radius == 3.0
        ));
    }

    #[test]
    fn test_labels_order_and_alignment() {
        let (g, style) = setup(10.0);
        let style = style.with_labels(TextLabels {
            left_inner: Some("li".into()),
            right_inner: Some("ri".into()),
            bottom_inner: Some("bi".into()),
            left_outer: Some("lo".into()),
            right_outer: Some("ro".into()),
            bottom_outer: Some("bo".into()),
        });
        let commands = compute_draw_commands(&g, &ProgressState::default(), &style);
        let texts: Vec<(&str, TextAlign, f64, Color)> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::TextOnPath {
                    text,
                    align,
                    h_offset,
                    color,
                    ..
                } => Some((text.as_str(), *align, *h_offset, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                ("li", TextAlign::Right, 0.0, style.inner_text_color),
                ("ri", TextAlign::Left, 1.0, style.inner_text_color),
                ("bi", TextAlign::Left, 0.0, style.inner_text_color),
                ("bo", TextAlign::Center, 0.0, style.bottom_line_color),
                ("ro", TextAlign::Center, 0.0, style.right_arc_color),
                ("lo", TextAlign::Center, 0.0, style.left_arc_color),
            ]
        );
    }

    #[test]
    fn test_font_metrics_shift_baseline() {
        let (g, style) = setup(10.0);
        let font = FontMetrics {
            ascent: 0.8,
            descent: 0.2,
        };
        let style = style.with_font(font).with_labels(TextLabels {
            bottom_inner: Some("Focus".to_string()),
            ..Default::default()
        });
        let commands = compute_draw_commands(&g, &ProgressState::default(), &style);
        let Some(DrawCommand::TextOnPath {
            v_offset,
            font_size,
            ..
        }) = commands.last()
        else {
            panic!("expected a label");
        };
        assert_eq!(*font_size, inner_text_size(0.0, g.stroke_width));
        assert_eq!(*v_offset, font.center_offset(*font_size));
        assert!((*v_offset - 0.3 * *font_size).abs() < 1e-12);
    }

    #[test]
    fn test_empty_labels_skipped() {
        let (g, style) = setup(10.0);
        let style = style.with_labels(TextLabels {
            left_inner: Some(String::new()),
            ..Default::default()
        });
        let commands = compute_draw_commands(&g, &ProgressState::default(), &style);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, DrawCommand::TextOnPath { .. })));
    }
}
