//! The drawing-surface seam and an in-memory surface that records calls.

use super::defaults;
use super::types::RenderCommand;
use crate::types::Point;

/// A 2D drawing context the dispatcher renders into.
///
/// Mirrors a canvas-style API: a translation, a current path built from
/// move/line/curve/arc segments, and `stroke` to paint it.
pub trait DrawingSurface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Reset the translation and paint the whole surface with the background.
    fn clear(&mut self);

    /// Replace the current translation. Later coordinates are relative to it.
    fn set_translation(&mut self, dx: f64, dy: f64);

    /// Start a new, empty path.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Cubic Bezier from the current point to `to`.
    fn curve_to(&mut self, c1: Point, c2: Point, to: Point);

    /// Circular arc; angles in radians, measured clockwise in the y-down frame.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );

    /// Stroke the current path.
    fn stroke(&mut self);

    /// Stroke an axis-aligned rectangle without touching the current path.
    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64);

    /// Paint text; only used for error messages.
    fn render_text(&mut self, text: &str, at: Point);
}

/// Records every call as a [`RenderCommand`].
///
/// `clear` drops what was recorded before it, so the log always describes
/// what the surface currently shows.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    width: f64,
    height: f64,
    commands: Vec<RenderCommand>,
}

impl CommandRecorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands that carry shape geometry.
    pub fn geometry_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_geometry()).count()
    }

    /// The error text on the surface, if any.
    pub fn text(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The translation in effect at the end of the log.
    pub fn translation(&self) -> Point {
        self.commands
            .iter()
            .rev()
            .find_map(|c| match c {
                RenderCommand::SetTranslation { dx, dy } => Some(Point::new(*dx, *dy)),
                _ => None,
            })
            .unwrap_or(Point::ZERO)
    }

    /// Move/line targets, in order. Curve and arc segments are skipped.
    pub fn path_points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::MoveTo(p) | RenderCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new(defaults::SURFACE_WIDTH, defaults::SURFACE_HEIGHT)
    }
}

impl DrawingSurface for CommandRecorder {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(RenderCommand::Clear);
    }

    fn set_translation(&mut self, dx: f64, dy: f64) {
        self.commands.push(RenderCommand::SetTranslation { dx, dy });
    }

    fn begin_path(&mut self) {
        self.commands.push(RenderCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(RenderCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(RenderCommand::LineTo(p));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.commands.push(RenderCommand::CurveTo { c1, c2, to });
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        self.commands.push(RenderCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(RenderCommand::Stroke);
    }

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64) {
        self.commands.push(RenderCommand::StrokeRect {
            origin,
            width,
            height,
        });
    }

    fn render_text(&mut self, text: &str, at: Point) {
        self.commands.push(RenderCommand::Text {
            text: text.to_string(),
            at,
        });
    }
}
