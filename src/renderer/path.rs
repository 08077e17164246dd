//! SVG `d` attribute encoding for shape paths

use std::fmt::Write;

use crate::layout::{PathSegment, Point, Rect, ShapePath};

/// Convert a shape path to an SVG path `d` attribute string
///
/// An arc that does not start at the current point is preceded by a line to
/// its start (or a move, if the path has no current point yet).
pub fn to_svg_d(path: &ShapePath) -> String {
    let mut d = String::new();
    let mut current: Option<Point> = None;

    for seg in &path.segments {
        match *seg {
            PathSegment::MoveTo(p) => {
                push_cmd(&mut d, 'M', p);
                current = Some(p);
            }
            PathSegment::LineTo(p) => {
                // A line with no current point starts the contour
                push_cmd(&mut d, if current.is_some() { 'L' } else { 'M' }, p);
                current = Some(p);
            }
            PathSegment::ArcTo {
                oval,
                start_angle,
                sweep_angle,
            } => {
                let start = oval.point_at_angle(start_angle);
                match current {
                    None => push_cmd(&mut d, 'M', start),
                    Some(c) if !same_point(c, start) => push_cmd(&mut d, 'L', start),
                    Some(_) => {}
                }
                push_arc(&mut d, oval, start_angle, sweep_angle);
                current = Some(oval.point_at_angle(start_angle + sweep_angle));
            }
        }
    }

    d
}

/// `d` for a single arc, starting with a move to the arc's start point
pub fn arc_d(oval: Rect, start_angle: f64, sweep_angle: f64) -> String {
    to_svg_d(&ShapePath::new().arc_to(oval, start_angle, sweep_angle))
}

fn push_cmd(d: &mut String, cmd: char, p: Point) {
    if !d.is_empty() {
        d.push(' ');
    }
    let _ = write!(d, "{}{:.2} {:.2}", cmd, p.x, p.y);
}

fn push_arc(d: &mut String, oval: Rect, start_angle: f64, sweep_angle: f64) {
    if sweep_angle == 0.0 {
        return;
    }
    // SVG cannot express a closed arc in one command
    if sweep_angle.abs() >= 360.0 {
        let half = sweep_angle.signum() * 180.0;
        push_arc(d, oval, start_angle, half);
        push_arc(d, oval, start_angle + half, sweep_angle - half);
        return;
    }
    let end = oval.point_at_angle(start_angle + sweep_angle);
    let large = if sweep_angle.abs() > 180.0 { 1 } else { 0 };
    // y grows downwards, so clockwise (positive) sweeps use sweep-flag 1
    let sweep = if sweep_angle > 0.0 { 1 } else { 0 };
    let _ = write!(
        d,
        " A{:.2} {:.2} 0 {} {} {:.2} {:.2}",
        oval.width / 2.0,
        oval.height / 2.0,
        large,
        sweep,
        end.x,
        end.y
    );
}

fn same_point(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}
