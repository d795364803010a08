//! Display list produced by one tick of the sketch.
//!
//! The core never touches a canvas. It records what should be drawn into a
//! [`Frame`] and the browser shell replays that list onto a 2D context.

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stroke colour; channels and alpha all in 0..255. `to_css` normalises alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string for `strokeStyle`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r.clamp(0.0, 255.0).round() as u8,
            self.g.clamp(0.0, 255.0).round() as u8,
            self.b.clamp(0.0, 255.0).round() as u8,
            (self.a / 255.0).clamp(0.0, 1.0),
        )
    }
}

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the surface with a gray level (0..255) and reset the transform.
    Background(f64),
    /// Move the origin by the given offset.
    Translate(Point),
    /// Stroke a closed, unfilled polyline.
    Polygon { stroke: Rgba, points: Vec<Point> },
    /// Stroke a single point.
    Dot { stroke: Rgba, at: Point },
}

/// Commands for one tick plus the presentation of the reset control.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    commands: Vec<DrawCommand>,
    /// Reset control should render depressed.
    pub button_pressed: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous tick's commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.button_pressed = false;
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&Rgba, &[Point])> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon { stroke, points } => Some((stroke, points.as_slice())),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = (&Rgba, &Point)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Dot { stroke, at } => Some((stroke, at)),
            _ => None,
        })
    }
}
