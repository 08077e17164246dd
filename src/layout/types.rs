//! Core value types for the layout engine

/// A 2D point in view coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Translate by the given deltas
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `side` with its top-left corner at `origin`
    pub fn square(origin: Point, side: f64) -> Self {
        Self::new(origin.x, origin.y, side, side)
    }

    /// Square centered on `center` extending `radius` in every direction
    pub fn centered(center: Point, radius: f64) -> Self {
        Self::new(center.x - radius, center.y - radius, 2.0 * radius, 2.0 * radius)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Grow (positive `amount`) or shrink (negative) on every side
    pub fn outset(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// Point on the ellipse inscribed in this rectangle at `degrees`
    ///
    /// Angles follow the screen convention: 0° points east and positive
    /// angles turn clockwise (90° points down).
    pub fn point_at_angle(&self, degrees: f64) -> Point {
        let radians = degrees.to_radians();
        let c = self.center();
        Point::new(
            c.x + self.width / 2.0 * radians.cos(),
            c.y + self.height / 2.0 * radians.sin(),
        )
    }
}

/// Padding on each side of the host's bounds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub start: f64,
    pub end: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn new(start: f64, end: f64, top: f64, bottom: f64) -> Self {
        Self {
            start,
            end,
            top,
            bottom,
        }
    }

    /// Same padding on all four sides
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.start + self.end
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// The area the host framework hands to the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl BoundingBox {
    /// Bounds without padding
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}
