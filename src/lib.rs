//! Turn a shape name and a few measures into 2D drawing primitives, centered
//! on a drawing surface.
//!
//! ```
//! use shaper::{CommandRecorder, MeasureKey, Measures, draw};
//!
//! let measures = Measures::new().with(MeasureKey::SideLength, 100.0).unwrap();
//! let mut surface = CommandRecorder::new(640.0, 480.0);
//! assert!(draw(&mut surface, "square", &measures, None).is_drawn());
//! ```

use pest_derive::Parser;

pub mod ast;
pub mod catalog;
pub mod errors;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use ast::DrawCommand;
pub use catalog::{MEASURE_KEYS, SUPPORTED_SHAPES, list_catalog};
pub use errors::{DrawFailure, ParseError, ShapeError};
pub use render::{
    CommandRecorder, DrawOutcome, DrawingSurface, RenderCommand, ShapeKind, SvgOptions,
    SvgSurface, draw, try_draw,
};
pub use types::{MeasureKey, Measures, NumericError, Point};

#[derive(Parser)]
#[grammar = "shaper.pest"]
pub struct ShaperParser;

/// Parse a draw command into its shape name and measures.
pub fn parse_command(source: &str) -> Result<DrawCommand, miette::Report> {
    Ok(parse::parse(source)?)
}

/// Run a parsed command against `surface`.
pub fn draw_command(surface: &mut dyn DrawingSurface, command: &DrawCommand) -> DrawOutcome {
    draw(surface, &command.shape, &command.measures, command.angle)
}

/// Render a draw command to SVG on a default-size surface.
///
/// Returns the SVG string on success. A shape error comes back as a
/// [`DrawFailure`] diagnostic that still carries the SVG with the message
/// painted on it; parse errors have nothing to draw.
pub fn shaper(source: &str) -> Result<String, miette::Report> {
    let command = parse::parse(source)?;
    let mut surface = SvgSurface::default();
    if let DrawOutcome::Failed(error) = draw_command(&mut surface, &command) {
        return Err(DrawFailure {
            error,
            svg: surface.to_svg_string(),
        }
        .into());
    }
    Ok(surface.to_svg_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaper_renders_a_square() {
        let svg = shaper("Draw a square with side length 100").unwrap();
        assert!(svg.contains("<path"), "{svg}");
    }

    #[test]
    fn shaper_reports_unsupported_shape() {
        let err = shaper("draw hexagram with side length 10").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Unsupported Shape: hexagram");
    }

    #[test]
    fn shaper_reports_missing_measure() {
        let err = shaper("draw rectangle with width 10").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"You must specify the width and height of the rectangle!"
        );
    }

    #[test]
    fn shaper_failure_carries_the_painted_svg() {
        let err = shaper("draw an oval with width 0 and height 50").unwrap_err();
        let failure = err.downcast_ref::<DrawFailure>().expect("shape errors are draw failures");
        assert!(matches!(failure.error, ShapeError::MissingMeasure { .. }));
        assert!(failure.svg.contains("#f7fcff"), "{}", failure.svg);
        assert!(
            failure.svg.contains("You must specify the width and height of the oval!"),
            "{}",
            failure.svg
        );
        assert!(!failure.svg.contains("<path"), "{}", failure.svg);
    }

    #[test]
    fn shaper_reports_parse_error() {
        let err = shaper("draw circle with radius").unwrap_err();
        assert_eq!(err.to_string(), "syntax error");
    }

    #[test]
    fn draw_command_uses_parsed_angle() {
        let command =
            parse_command("draw parallelogram with width 100, height 50, angle 45").unwrap();
        let mut rec = CommandRecorder::default();
        assert!(draw_command(&mut rec, &command).is_drawn());
        let points = rec.path_points();
        // tan(45°) * 100
        assert!((points[1].x - points[2].x - 100.0).abs() < 1e-9);
    }
}
