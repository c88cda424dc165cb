//! Core types for shape rendering

use std::fmt;
use std::str::FromStr;

use crate::catalog;
use crate::errors::ShapeError;
use crate::types::Point;

/// Regular polygons drawn from a single side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polygon {
    Square,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
}

impl Polygon {
    pub const ALL: [Polygon; 5] = [
        Polygon::Square,
        Polygon::Pentagon,
        Polygon::Hexagon,
        Polygon::Heptagon,
        Polygon::Octagon,
    ];

    pub fn sides(self) -> u32 {
        match self {
            Polygon::Square => 4,
            Polygon::Pentagon => 5,
            Polygon::Hexagon => 6,
            Polygon::Heptagon => 7,
            Polygon::Octagon => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Polygon::Square => "square",
            Polygon::Pentagon => "pentagon",
            Polygon::Hexagon => "hexagon",
            Polygon::Heptagon => "heptagon",
            Polygon::Octagon => "octagon",
        }
    }
}

/// Triangle variants, named by how many sides are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleVariant {
    Isosceles,
    Equilateral,
    Scalene,
}

impl TriangleVariant {
    pub const ALL: [TriangleVariant; 3] = [
        TriangleVariant::Isosceles,
        TriangleVariant::Equilateral,
        TriangleVariant::Scalene,
    ];

    /// Isosceles and equilateral share one apex-centred layout; the width and
    /// height are taken as given, so "equilateral" is only nominal.
    pub fn is_equal_sided(self) -> bool {
        matches!(self, TriangleVariant::Isosceles | TriangleVariant::Equilateral)
    }

    /// The variant tag, i.e. the shape name with "triangle" stripped.
    pub fn tag(self) -> &'static str {
        match self {
            TriangleVariant::Isosceles => "isosceles",
            TriangleVariant::Equilateral => "equilateral",
            TriangleVariant::Scalene => "scalene",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        TriangleVariant::ALL.into_iter().find(|v| v.tag() == tag)
    }
}

/// Every shape `draw` knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Polygon(Polygon),
    Triangle(TriangleVariant),
    Parallelogram,
    Circle,
    Oval,
}

impl ShapeKind {
    /// The catalog name for this shape.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Polygon(p) => p.name(),
            ShapeKind::Triangle(TriangleVariant::Isosceles) => "isosceles triangle",
            ShapeKind::Triangle(TriangleVariant::Equilateral) => "equilateral triangle",
            ShapeKind::Triangle(TriangleVariant::Scalene) => "scalene triangle",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Circle => "circle",
            ShapeKind::Oval => "oval",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Names outside the catalog are `UnsupportedShape`. A catalog name with
    /// no branch here would be `UnimplementedFeature`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if !catalog::is_supported(name) {
            return Err(ShapeError::UnsupportedShape {
                name: name.to_string(),
            });
        }

        if let Some(tag) = name.strip_suffix("triangle") {
            if let Some(variant) = TriangleVariant::from_tag(tag.trim_end()) {
                return Ok(ShapeKind::Triangle(variant));
            }
        }

        if let Some(polygon) = Polygon::ALL.into_iter().find(|p| p.name() == name) {
            return Ok(ShapeKind::Polygon(polygon));
        }

        match name {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "parallelogram" => Ok(ShapeKind::Parallelogram),
            "circle" => Ok(ShapeKind::Circle),
            "oval" => Ok(ShapeKind::Oval),
            _ => Err(ShapeError::UnimplementedFeature {
                name: name.to_string(),
            }),
        }
    }
}

/// One primitive call made against a drawing surface.
///
/// Path coordinates are in the frame set by the latest `SetTranslation`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Clear,
    SetTranslation { dx: f64, dy: f64 },
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
    StrokeRect { origin: Point, width: f64, height: f64 },
    Stroke,
    Text { text: String, at: Point },
}

impl RenderCommand {
    /// Whether this command contributes shape geometry.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            RenderCommand::MoveTo(_)
                | RenderCommand::LineTo(_)
                | RenderCommand::CurveTo { .. }
                | RenderCommand::Arc { .. }
                | RenderCommand::StrokeRect { .. }
                | RenderCommand::Stroke
        )
    }
}
