//! Error types with diagnostics using miette
//!
//! Shape errors are what `draw` renders onto the surface. Parse errors carry
//! source spans for command-language input.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// The command text being parsed, kept so every diagnostic can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    name: String,
    text: String,
}

impl SourceContext {
    /// `name` is what diagnostics show as the origin, e.g. a file path.
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_owned(),
            text: text.to_owned(),
        }
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised while resolving or validating a draw request.
///
/// The `Display` text is exactly what gets painted on the surface.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Unsupported Shape: {name}")]
    #[diagnostic(
        code(shaper::shape::unsupported),
        help("run `list_catalog()` to see the shapes that can be drawn")
    )]
    UnsupportedShape { name: String },

    #[error("You must specify the {requirement} of the {subject}!")]
    #[diagnostic(code(shaper::shape::missing_measure))]
    MissingMeasure {
        /// Noun for the shape family, e.g. "triangle" or "pentagon"
        subject: &'static str,
        /// The measures it needs, e.g. "width and height"
        requirement: &'static str,
    },

    #[error("Sorry, Feature isn't yet implemented! shape = {name}")]
    #[diagnostic(code(shaper::shape::unimplemented))]
    UnimplementedFeature { name: String },
}

/// A failed draw, with the SVG of the surface showing the painted message.
#[derive(Error, Diagnostic, Debug, Clone)]
#[error("{error}")]
#[diagnostic(forward(error))]
pub struct DrawFailure {
    pub error: ShapeError,
    pub svg: String,
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing a draw command
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("syntax error")]
    #[diagnostic(
        code(shaper::parse::syntax),
        help("commands look like `Draw a square with side length 100`")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{expected}")]
        span: SourceSpan,
        expected: String,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(shaper::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid number")]
        span: SourceSpan,
    },

    #[error("invalid measure value: {error}")]
    #[diagnostic(code(shaper::numeric::invalid_measure))]
    InvalidMeasure {
        error: crate::types::NumericError,
        #[source_code]
        src: NamedSource<String>,
        #[label("this value")]
        span: SourceSpan,
    },
}
