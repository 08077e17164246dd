//! Path descriptors produced by the layout engine
//!
//! Paths are plain values: the engine only describes contours, a drawing
//! surface decides how to rasterize them. Arc segments follow the
//! `arcTo(oval, start, sweep)` convention: if the current point is not the
//! arc's start point, a straight connector is implied from one to the other.

use super::types::{Point, Rect};

/// A segment in a shape path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new contour
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Arc along the ellipse inscribed in `oval`
    ArcTo {
        oval: Rect,
        /// Degrees, 0° east, clockwise positive
        start_angle: f64,
        /// Degrees, negative sweeps counter-clockwise
        sweep_angle: f64,
    },
}

/// An ordered, open contour
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapePath {
    pub segments: Vec<PathSegment>,
}

impl ShapePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn arc_to(mut self, oval: Rect, start_angle: f64, sweep_angle: f64) -> Self {
        self.segments.push(PathSegment::ArcTo {
            oval,
            start_angle,
            sweep_angle,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total stroked length, including implicit arc connectors
    ///
    /// Arcs are measured as circular arcs using the oval's mean radius;
    /// every oval the engine emits is a square so this is exact there.
    pub fn length(&self) -> f64 {
        let mut total = 0.0;
        let mut current: Option<Point> = None;

        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => current = Some(p),
                PathSegment::LineTo(p) => {
                    if let Some(c) = current {
                        total += c.distance(p);
                    }
                    current = Some(p);
                }
                PathSegment::ArcTo {
                    oval,
                    start_angle,
                    sweep_angle,
                } => {
                    let start = oval.point_at_angle(start_angle);
                    if let Some(c) = current {
                        total += c.distance(start);
                    }
                    let radius = (oval.width + oval.height) / 4.0;
                    total += radius * sweep_angle.abs().to_radians();
                    current = Some(oval.point_at_angle(start_angle + sweep_angle));
                }
            }
        }

        total
    }
}
