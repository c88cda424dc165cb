//! Supported shape names and command keywords, for populating UIs
//! (autocomplete, help text).

use crate::types::MeasureKey;

/// Every shape name `draw` accepts, exactly as it must be spelled.
pub const SUPPORTED_SHAPES: [&str; 12] = [
    "isosceles triangle",
    "square",
    "scalene triangle",
    "parallelogram",
    "equilateral triangle",
    "pentagon",
    "rectangle",
    "hexagon",
    "heptagon",
    "octagon",
    "circle",
    "oval",
];

/// Sentence keywords of the command language.
pub const COMMAND_KEYWORDS: [&str; 2] = ["Draw", "With"];

/// The measure keywords, in catalog order.
pub const MEASURE_KEYS: [&str; 4] = [
    MeasureKey::Radius.as_str(),
    MeasureKey::SideLength.as_str(),
    MeasureKey::Width.as_str(),
    MeasureKey::Height.as_str(),
];

/// Keywords followed by shape names.
pub fn list_catalog() -> Vec<&'static str> {
    COMMAND_KEYWORDS
        .iter()
        .chain(MEASURE_KEYS.iter())
        .chain(SUPPORTED_SHAPES.iter())
        .copied()
        .collect()
}

/// Whether `name` is one of [`SUPPORTED_SHAPES`].
pub fn is_supported(name: &str) -> bool {
    SUPPORTED_SHAPES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_keywords_then_shapes() {
        insta::assert_snapshot!(list_catalog().join("\n"), @r"
        Draw
        With
        radius
        side length
        width
        height
        isosceles triangle
        square
        scalene triangle
        parallelogram
        equilateral triangle
        pentagon
        rectangle
        hexagon
        heptagon
        octagon
        circle
        oval
        ");
    }

    #[test]
    fn support_is_exact_match() {
        assert!(is_supported("scalene triangle"));
        assert!(!is_supported("Scalene Triangle"));
        assert!(!is_supported("triangle"));
        assert!(!is_supported(""));
    }
}
