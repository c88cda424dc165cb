//! Shape rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed colors, positions and the default shear angle
//! - `types`: `ShapeKind` and `RenderCommand`
//! - `validate`: Per-family measure requirements
//! - `geometry`: Pure vertex and control-point computations
//! - `path_builder`: Straight-edged outlines replayed onto a surface
//! - `shapes`: One renderer per shape family, dispatched by `ShapeRenderer`
//! - `surface`: The `DrawingSurface` trait and a recording surface
//! - `svg`: An SVG-producing surface

pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod shapes;
pub mod surface;
pub mod svg;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use shapes::{Shape, ShapeRenderer};
pub use surface::{CommandRecorder, DrawingSurface};
pub use self::svg::{SvgOptions, SvgSurface};
pub use types::*;

use glam::dvec2;

use crate::errors::ShapeError;
use crate::types::Measures;

/// What a `draw` call ended up showing.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    Drawn(ShapeKind),
    /// The error text is on the surface; no geometry was emitted.
    Failed(ShapeError),
}

impl DrawOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn(_))
    }

    pub fn into_result(self) -> Result<ShapeKind, ShapeError> {
        match self {
            DrawOutcome::Drawn(kind) => Ok(kind),
            DrawOutcome::Failed(err) => Err(err),
        }
    }
}

/// Draw the shape called `name`, centered on `surface`.
///
/// Never fails outright: on a bad name or missing measures the surface is
/// cleared and the error message is written on it instead.
pub fn draw(
    surface: &mut dyn DrawingSurface,
    name: &str,
    measures: &Measures,
    angle: Option<f64>,
) -> DrawOutcome {
    match try_draw(surface, name, measures, angle) {
        Ok(kind) => DrawOutcome::Drawn(kind),
        Err(err) => {
            crate::log::warn!(shape = name, error = %err, "draw failed");
            render_error(surface, &err);
            DrawOutcome::Failed(err)
        }
    }
}

/// The fallible core of [`draw`]: resolve, clear, validate, then emit.
///
/// On error the surface may have been cleared, but the message is not
/// written; [`draw`] does that.
pub fn try_draw(
    surface: &mut dyn DrawingSurface,
    name: &str,
    measures: &Measures,
    angle: Option<f64>,
) -> Result<ShapeKind, ShapeError> {
    let kind: ShapeKind = name.parse()?;
    surface.clear();

    let shape = ShapeRenderer::resolve(kind, measures, angle)?;
    let offset = shape.offset(dvec2(surface.width(), surface.height()));
    crate::log::debug!(
        shape = shape.kind().name(),
        dx = offset.x,
        dy = offset.y,
        "drawing shape"
    );

    surface.set_translation(offset.x, offset.y);
    shape.emit(surface);
    Ok(shape.kind())
}

/// Clear the surface and write `err` at the fixed error position.
pub fn render_error(surface: &mut dyn DrawingSurface, err: &ShapeError) {
    surface.clear();
    surface.render_text(
        &err.to_string(),
        dvec2(defaults::ERROR_TEXT_X, defaults::ERROR_TEXT_Y),
    );
}
