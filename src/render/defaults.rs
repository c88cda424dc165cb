//! Fixed rendering defaults (surface pixels and degrees)

/// Background painted by every clear.
pub const BACKGROUND: &str = "#f7fcff";
/// Stroke and text color.
pub const INK: &str = "black";
/// Font used for error text.
pub const ERROR_FONT: &str = "12px Arial";
/// Where error text is drawn, in untranslated surface coordinates.
pub const ERROR_TEXT_X: f64 = 10.0;
pub const ERROR_TEXT_Y: f64 = 50.0;

/// Shear used for a parallelogram when no angle is given.
pub const DEFAULT_SHEAR_ANGLE: f64 = 30.0;

/// Cubic Bezier control-offset ratio for a quarter ellipse.
pub const KAPPA: f64 = 0.5522848;

pub const SURFACE_WIDTH: f64 = 640.0;
pub const SURFACE_HEIGHT: f64 = 480.0;
/// Stroke width of the SVG surface.
pub const STROKE_WIDTH: f64 = 1.0;
