//! Measure validation: each shape family needs a particular set of measures,
//! all strictly positive.

use super::types::ShapeKind;
use crate::errors::ShapeError;
use crate::types::{MeasureKey, Measures};

/// The measures a shape needs, extracted once they are known to be valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimensions {
    Box { width: f64, height: f64 },
    Side(f64),
    Radius(f64),
}

/// The noun used for a shape in "You must specify ... of the {subject}!".
pub fn subject(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "rectangle",
        ShapeKind::Polygon(p) => p.name(),
        ShapeKind::Triangle(_) => "triangle",
        ShapeKind::Parallelogram => "parallelogram",
        ShapeKind::Circle => "circle",
        ShapeKind::Oval => "oval",
    }
}

/// Check `measures` against what `kind` requires.
pub fn validate(kind: ShapeKind, measures: &Measures) -> Result<Dimensions, ShapeError> {
    let missing = |requirement: &'static str| ShapeError::MissingMeasure {
        subject: subject(kind),
        requirement,
    };

    match kind {
        ShapeKind::Rectangle
        | ShapeKind::Triangle(_)
        | ShapeKind::Parallelogram
        | ShapeKind::Oval => {
            match (
                measures.positive(MeasureKey::Width),
                measures.positive(MeasureKey::Height),
            ) {
                (Some(width), Some(height)) => Ok(Dimensions::Box { width, height }),
                _ => Err(missing("width and height")),
            }
        }
        ShapeKind::Polygon(_) => measures
            .positive(MeasureKey::SideLength)
            .map(Dimensions::Side)
            .ok_or_else(|| missing("side length")),
        ShapeKind::Circle => measures
            .positive(MeasureKey::Radius)
            .map(Dimensions::Radius)
            .ok_or_else(|| missing("radius")),
    }
}
