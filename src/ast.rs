//! Parsed form of a draw command.

use crate::types::Measures;

/// A parsed draw command
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Shape words, lowercased and single-spaced. Not checked against the
    /// catalog; `draw` does that.
    pub shape: String,
    pub measures: Measures,
    /// Shear angle in degrees, if the command gave one.
    pub angle: Option<f64>,
}
