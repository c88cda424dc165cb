//! Path builder for straight-edged outlines.
//!
//! Collects vertices, then replays them onto a surface as one
//! `move_to` followed by `line_to`s and a final `stroke`.
//!
//! # Example
//!
//! ```ignore
//! let mut builder = PathBuilder::new(apex);
//! builder.line_to(left);
//! builder.line_to(right);
//! builder.close();
//! builder.stroke(surface);
//! ```

use super::surface::DrawingSurface;
use crate::types::Point;

#[derive(Debug, Clone)]
pub struct PathBuilder {
    /// Always non-empty; the first entry is the start point.
    points: Vec<Point>,
}

impl PathBuilder {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Build from an already computed vertex list. Returns `None` when empty.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let points: Vec<Point> = points.into_iter().collect();
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.points.push(p);
        self
    }

    /// Add a final edge back to the start point.
    pub fn close(&mut self) -> &mut Self {
        let start = self.points[0];
        self.points.push(start);
        self
    }

    /// Replay onto `surface` as a fresh path and stroke it.
    pub fn stroke(&self, surface: &mut dyn DrawingSurface) {
        let (first, rest) = self
            .points
            .split_first()
            .expect("PathBuilder always holds a start point");
        surface.begin_path();
        surface.move_to(*first);
        for p in rest {
            surface.line_to(*p);
        }
        surface.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::CommandRecorder;
    use crate::render::types::RenderCommand;
    use glam::dvec2;

    #[test]
    fn close_repeats_the_start_point() {
        let mut builder = PathBuilder::new(dvec2(1.0, 2.0));
        builder.line_to(dvec2(3.0, 4.0)).line_to(dvec2(5.0, 0.0)).close();
        let mut rec = CommandRecorder::default();
        builder.stroke(&mut rec);
        let points = rec.path_points();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], dvec2(1.0, 2.0));
    }

    #[test]
    fn from_points_rejects_empty() {
        assert!(PathBuilder::from_points(Vec::new()).is_none());
        assert!(PathBuilder::from_points([Point::ZERO]).is_some());
    }

    #[test]
    fn stroke_emits_move_then_lines() {
        let mut builder = PathBuilder::new(Point::ZERO);
        builder.line_to(dvec2(10.0, 0.0));
        let mut rec = CommandRecorder::default();
        builder.stroke(&mut rec);
        assert_eq!(
            rec.commands(),
            &[
                RenderCommand::BeginPath,
                RenderCommand::MoveTo(Point::ZERO),
                RenderCommand::LineTo(dvec2(10.0, 0.0)),
                RenderCommand::Stroke,
            ]
        );
    }
}
