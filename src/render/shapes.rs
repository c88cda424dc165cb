//! Shape types for rendering
//!
//! Each shape is its own type that knows how to:
//! - Compute the translation that centers it on a surface
//! - Emit its path primitives in that translated frame

use std::f64::consts::TAU;

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use super::geometry::{
    self, EllipsePath, centered_offset, circle_draw_radius, ellipse_by_center,
    parallelogram_offset, parallelogram_vertices, polygon_offset, polygon_vertices,
    triangle_vertices,
};
use super::path_builder::PathBuilder;
use super::surface::DrawingSurface;
use super::types::{Polygon, ShapeKind, TriangleVariant};
use super::validate::{Dimensions, validate};
use crate::errors::ShapeError;
use crate::types::{Measures, Point};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    fn kind(&self) -> ShapeKind;

    /// Translation that centers this shape on a surface of size `surface`.
    fn offset(&self, surface: Point) -> Point;

    /// Emit path primitives, relative to [`Shape::offset`].
    fn emit(&self, surface: &mut dyn DrawingSurface);
}

/// A shape with validated measures, ready to draw.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone)]
pub enum ShapeRenderer {
    RectangleShape,
    PolygonShape,
    TriangleShape,
    ParallelogramShape,
    OvalShape,
    CircleShape,
}

impl ShapeRenderer {
    /// Validate `measures` for `kind` and build its renderer.
    ///
    /// `angle` is only read by the parallelogram.
    pub fn resolve(
        kind: ShapeKind,
        measures: &Measures,
        angle: Option<f64>,
    ) -> Result<Self, ShapeError> {
        let dims = validate(kind, measures)?;
        let renderer = match (kind, dims) {
            (ShapeKind::Rectangle, Dimensions::Box { width, height }) => {
                RectangleShape { width, height }.into()
            }
            (ShapeKind::Polygon(polygon), Dimensions::Side(side_length)) => PolygonShape {
                polygon,
                side_length,
            }
            .into(),
            (ShapeKind::Triangle(variant), Dimensions::Box { width, height }) => TriangleShape {
                variant,
                width,
                height,
            }
            .into(),
            (ShapeKind::Parallelogram, Dimensions::Box { width, height }) => {
                ParallelogramShape::new(width, height, angle).into()
            }
            (ShapeKind::Oval, Dimensions::Box { width, height }) => {
                OvalShape { width, height }.into()
            }
            (ShapeKind::Circle, Dimensions::Radius(radius)) => CircleShape { radius }.into(),
            (kind, _) => {
                return Err(ShapeError::UnimplementedFeature {
                    name: kind.name().to_string(),
                });
            }
        };
        Ok(renderer)
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// Axis-aligned rectangle, stroked directly rather than as a path.
#[derive(Debug, Clone)]
pub struct RectangleShape {
    pub width: f64,
    pub height: f64,
}

impl Shape for RectangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn offset(&self, surface: Point) -> Point {
        centered_offset(surface, dvec2(self.width, self.height))
    }

    fn emit(&self, surface: &mut dyn DrawingSurface) {
        surface.stroke_rect(Point::ZERO, self.width, self.height);
    }
}

/// Regular polygon, square through octagon.
#[derive(Debug, Clone)]
pub struct PolygonShape {
    pub polygon: Polygon,
    pub side_length: f64,
}

impl PolygonShape {
    pub fn vertices(&self) -> Vec<Point> {
        polygon_vertices(self.polygon.sides(), self.side_length)
    }
}

impl Shape for PolygonShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon(self.polygon)
    }

    fn offset(&self, surface: Point) -> Point {
        polygon_offset(surface, self.polygon.sides(), self.side_length)
    }

    fn emit(&self, surface: &mut dyn DrawingSurface) {
        if let Some(path) = PathBuilder::from_points(self.vertices()) {
            path.stroke(surface);
        }
    }
}

#[derive(Debug, Clone)]
pub struct TriangleShape {
    pub variant: TriangleVariant,
    pub width: f64,
    pub height: f64,
}

impl TriangleShape {
    pub fn vertices(&self) -> [Point; 3] {
        triangle_vertices(self.variant, self.width, self.height)
    }
}

impl Shape for TriangleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle(self.variant)
    }

    fn offset(&self, surface: Point) -> Point {
        centered_offset(surface, dvec2(self.width, self.height))
    }

    fn emit(&self, surface: &mut dyn DrawingSurface) {
        let [apex, left, right] = self.vertices();
        let mut path = PathBuilder::new(apex);
        path.line_to(left).line_to(right).close();
        path.stroke(surface);
    }
}

#[derive(Debug, Clone)]
pub struct ParallelogramShape {
    pub width: f64,
    pub height: f64,
    /// Shear angle in degrees, already defaulted.
    pub angle: f64,
}

impl ParallelogramShape {
    /// `angle` of `None` or zero means [`super::defaults::DEFAULT_SHEAR_ANGLE`].
    pub fn new(width: f64, height: f64, angle: Option<f64>) -> Self {
        Self {
            width,
            height,
            angle: geometry::effective_shear_angle(angle),
        }
    }

    pub fn diff(&self) -> f64 {
        geometry::shear_offset(self.angle, self.width)
    }
}

impl Shape for ParallelogramShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Parallelogram
    }

    fn offset(&self, surface: Point) -> Point {
        parallelogram_offset(surface, self.width, self.height, self.diff())
    }

    fn emit(&self, surface: &mut dyn DrawingSurface) {
        let vertices = parallelogram_vertices(self.width, self.height, self.diff());
        if let Some(path) = PathBuilder::from_points(vertices) {
            path.stroke(surface);
        }
    }
}

/// Bezier ellipse around the surface center; needs no translation.
#[derive(Debug, Clone)]
pub struct OvalShape {
    pub width: f64,
    pub height: f64,
}

impl Shape for OvalShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Oval
    }

    fn offset(&self, _surface: Point) -> Point {
        Point::ZERO
    }

    fn emit(&self, surface: &mut dyn DrawingSurface) {
        let center = surface_center(surface);
        stroke_ellipse(surface, &ellipse_by_center(center, self.width, self.height));
    }
}

/// Full arc around the surface center, drawn at half the given radius.
#[derive(Debug, Clone)]
pub struct CircleShape {
    pub radius: f64,
}

impl Shape for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn offset(&self, _surface: Point) -> Point {
        Point::ZERO
    }

    fn emit(&self, surface: &mut dyn DrawingSurface) {
        let center = surface_center(surface);
        surface.begin_path();
        surface.arc(center, circle_draw_radius(self.radius), 0.0, TAU, true);
        surface.stroke();
    }
}

fn surface_center(surface: &dyn DrawingSurface) -> Point {
    dvec2(surface.width(), surface.height()) / 2.0
}

fn stroke_ellipse(surface: &mut dyn DrawingSurface, path: &EllipsePath) {
    surface.begin_path();
    surface.move_to(path.start);
    for seg in &path.segments {
        surface.curve_to(seg.c1, seg.c2, seg.to);
    }
    surface.stroke();
}
