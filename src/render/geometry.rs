//! Geometry functions: vertex and control-point derivation for each shape
//! family. Everything here is pure; emission lives in `shapes`.

use std::f64::consts::PI;

use glam::dvec2;

use super::defaults;
use super::types::TriangleVariant;
use crate::types::Point;

/// Translation that centers a `size` box on a `surface`.
pub fn centered_offset(surface: Point, size: Point) -> Point {
    (surface - size) / 2.0
}

// ============================================================================
// Regular polygons
// ============================================================================

/// Side counts outside 4..=8 fall back to a square.
pub fn normalize_sides(sides: u32) -> u32 {
    if (4..=8).contains(&sides) { sides } else { 4 }
}

/// Exterior turn angle in radians: 180° minus the interior angle
/// `(n-2)·180/n`.
pub fn turn_angle(sides: u32) -> f64 {
    let n = f64::from(normalize_sides(sides));
    let interior = (n - 2.0) * 180.0 / n;
    (180.0 - interior).to_radians()
}

/// Walk `n` sides from the origin, turning by the exterior angle after each.
///
/// The first heading is one turn angle, not zero. Returns `n + 1` points; the
/// last lands back on the origin up to rounding.
pub fn polygon_vertices(sides: u32, side_length: f64) -> Vec<Point> {
    let n = normalize_sides(sides);
    let turn = turn_angle(n);

    let mut points = Vec::with_capacity(n as usize + 1);
    let mut current = Point::ZERO;
    let mut heading = turn;
    points.push(current);
    for _ in 0..n {
        current += side_length * dvec2(heading.cos(), heading.sin());
        points.push(current);
        heading += turn;
    }
    points
}

/// Span used to center a regular polygon: `s / (2·tan(π/(2n)))`.
pub fn polygon_span(sides: u32, side_length: f64) -> f64 {
    let n = f64::from(normalize_sides(sides));
    side_length / (2.0 * (PI / 2.0 / n).tan())
}

/// The polygon's start vertex sits at its top right, so the span is added
/// horizontally and subtracted vertically.
pub fn polygon_offset(surface: Point, sides: u32, side_length: f64) -> Point {
    let span = polygon_span(sides, side_length);
    dvec2((surface.x + span) / 2.0, (surface.y - span) / 2.0)
}

// ============================================================================
// Triangles
// ============================================================================

/// Apex first, then the two base corners.
pub fn triangle_vertices(variant: TriangleVariant, width: f64, height: f64) -> [Point; 3] {
    if variant.is_equal_sided() {
        [
            dvec2(width / 2.0, 0.0),
            dvec2(0.0, height),
            dvec2(width, height),
        ]
    } else {
        [dvec2(0.0, 0.0), dvec2(0.0, height), dvec2(width, height)]
    }
}

// ============================================================================
// Parallelograms
// ============================================================================

/// The shear angle actually used. `None` and zero both mean the default.
pub fn effective_shear_angle(angle: Option<f64>) -> f64 {
    angle
        .filter(|a| *a != 0.0)
        .unwrap_or(defaults::DEFAULT_SHEAR_ANGLE)
}

/// Horizontal displacement between the top and bottom edges.
pub fn shear_offset(angle_degrees: f64, width: f64) -> f64 {
    angle_degrees.to_radians().tan() * width
}

/// Closed outline: top edge left to right, then back along the sheared
/// bottom edge.
pub fn parallelogram_vertices(width: f64, height: f64, diff: f64) -> [Point; 5] {
    [
        dvec2(0.0, 0.0),
        dvec2(width, 0.0),
        dvec2(width - diff, height),
        dvec2(-diff, height),
        dvec2(0.0, 0.0),
    ]
}

/// Half the shear is added so the sheared footprint stays centered.
pub fn parallelogram_offset(surface: Point, width: f64, height: f64, diff: f64) -> Point {
    centered_offset(surface, dvec2(width, height)) + dvec2(diff / 2.0, 0.0)
}

// ============================================================================
// Ellipses
// ============================================================================

/// One cubic Bezier segment; the start is the previous segment's end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// A closed four-segment Bezier ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsePath {
    pub start: Point,
    pub segments: [CubicSegment; 4],
}

/// Ellipse inscribed in the box at `origin` with the given size.
///
/// Starts at the left-middle point and runs through top, right and bottom.
pub fn ellipse_curves(origin: Point, width: f64, height: f64) -> EllipsePath {
    let ox = (width / 2.0) * defaults::KAPPA;
    let oy = (height / 2.0) * defaults::KAPPA;
    let (x, y) = (origin.x, origin.y);
    let xe = x + width;
    let ye = y + height;
    let xm = x + width / 2.0;
    let ym = y + height / 2.0;

    EllipsePath {
        start: dvec2(x, ym),
        segments: [
            CubicSegment {
                c1: dvec2(x, ym - oy),
                c2: dvec2(xm - ox, y),
                to: dvec2(xm, y),
            },
            CubicSegment {
                c1: dvec2(xm + ox, y),
                c2: dvec2(xe, ym - oy),
                to: dvec2(xe, ym),
            },
            CubicSegment {
                c1: dvec2(xe, ym + oy),
                c2: dvec2(xm + ox, ye),
                to: dvec2(xm, ye),
            },
            CubicSegment {
                c1: dvec2(xm - ox, ye),
                c2: dvec2(x, ym + oy),
                to: dvec2(x, ym),
            },
        ],
    }
}

pub fn ellipse_by_center(center: Point, width: f64, height: f64) -> EllipsePath {
    ellipse_curves(center - dvec2(width, height) / 2.0, width, height)
}

/// The radius a circle is actually drawn with: half the requested one.
pub fn circle_draw_radius(radius: f64) -> f64 {
    radius / 2.0
}

/// Bezier form of a circle, using the same halved radius as the arc.
pub fn circle_curves(center: Point, radius: f64) -> EllipsePath {
    let r = circle_draw_radius(radius);
    ellipse_by_center(center, 2.0 * r, 2.0 * r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(actual: Point, expected: Point, epsilon: f64) {
        assert!(
            (actual - expected).abs().max_element() <= epsilon,
            "point mismatch: {actual} != {expected}"
        );
    }

    #[test]
    fn polygons_close_for_every_side_count() {
        for sides in 4..=8 {
            for side_length in [1.0, 37.5, 100.0, 12345.0] {
                let points = polygon_vertices(sides, side_length);
                assert_eq!(points.len(), sides as usize + 1);
                let first = points[0];
                let last = points[points.len() - 1];
                assert_point_eq(last, first, 1e-9 * side_length);
            }
        }
    }

    #[test]
    fn polygon_sides_all_have_requested_length() {
        let points = polygon_vertices(7, 20.0);
        for pair in points.windows(2) {
            assert!((pair[0].distance(pair[1]) - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn square_walks_down_then_left() {
        let points = polygon_vertices(4, 100.0);
        let expected = [
            dvec2(0.0, 0.0),
            dvec2(0.0, 100.0),
            dvec2(-100.0, 100.0),
            dvec2(-100.0, 0.0),
            dvec2(0.0, 0.0),
        ];
        for (p, e) in points.iter().zip(expected) {
            assert_point_eq(*p, e, 1e-9);
        }
    }

    #[test]
    fn out_of_range_sides_fall_back_to_square() {
        assert_eq!(polygon_vertices(3, 10.0), polygon_vertices(4, 10.0));
        assert_eq!(polygon_vertices(12, 10.0), polygon_vertices(4, 10.0));
        assert_eq!(polygon_span(0, 10.0), polygon_span(4, 10.0));
    }

    #[test]
    fn turn_angles() {
        assert!((turn_angle(4) - PI / 2.0).abs() < 1e-12);
        assert!((turn_angle(6) - PI / 3.0).abs() < 1e-12);
        assert!((turn_angle(8) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn polygon_offset_uses_span() {
        let span = polygon_span(4, 100.0);
        assert!((span - 100.0 / (2.0 * (PI / 8.0).tan())).abs() < 1e-12);
        let offset = polygon_offset(dvec2(640.0, 480.0), 4, 100.0);
        assert!((offset.x - (640.0 + span) / 2.0).abs() < 1e-12);
        assert!((offset.y - (480.0 - span) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn equal_sided_triangle_has_level_base() {
        for variant in [TriangleVariant::Isosceles, TriangleVariant::Equilateral] {
            let [apex, left, right] = triangle_vertices(variant, 80.0, 60.0);
            assert_eq!(apex, dvec2(40.0, 0.0));
            assert_eq!(left.y, right.y);
            assert_eq!(right.x - left.x, 80.0);
        }
    }

    #[test]
    fn scalene_triangle_is_right_angled() {
        let points = triangle_vertices(TriangleVariant::Scalene, 80.0, 60.0);
        assert_eq!(
            points,
            [dvec2(0.0, 0.0), dvec2(0.0, 60.0), dvec2(80.0, 60.0)]
        );
    }

    #[test]
    fn default_shear_angle_applies_to_none_and_zero() {
        assert_eq!(effective_shear_angle(None), 30.0);
        assert_eq!(effective_shear_angle(Some(0.0)), 30.0);
        assert_eq!(effective_shear_angle(Some(45.0)), 45.0);
    }

    #[test]
    fn parallelogram_edges_are_horizontal_and_equal() {
        let diff = shear_offset(30.0, 100.0);
        assert!((diff - 57.735_026_918_962_58).abs() < 1e-9);

        let v = parallelogram_vertices(100.0, 50.0, diff);
        assert_eq!(v[0], v[4]);
        // top edge
        assert_eq!(v[0].y, v[1].y);
        // bottom edge
        assert_eq!(v[2].y, v[3].y);
        assert!(((v[1].x - v[0].x) - 100.0).abs() < 1e-9);
        assert!(((v[2].x - v[3].x) - 100.0).abs() < 1e-9);
        assert!(((v[1].x - v[2].x) - diff).abs() < 1e-9);
        assert!(((v[0].x - v[3].x) - diff).abs() < 1e-9);
    }

    #[test]
    fn parallelogram_offset_compensates_for_shear() {
        let offset = parallelogram_offset(dvec2(640.0, 480.0), 100.0, 50.0, 20.0);
        assert_eq!(offset, dvec2(280.0, 215.0));
    }

    #[test]
    fn ellipse_is_a_closed_loop() {
        let path = ellipse_curves(dvec2(10.0, 20.0), 120.0, 60.0);
        assert_eq!(path.start, dvec2(10.0, 50.0));
        assert_eq!(path.segments[3].to, path.start);
        assert_eq!(path.segments[0].to, dvec2(70.0, 20.0));
        assert_eq!(path.segments[1].to, dvec2(130.0, 50.0));
        assert_eq!(path.segments[2].to, dvec2(70.0, 80.0));
    }

    #[test]
    fn round_ellipse_has_equal_control_offsets() {
        let path = ellipse_by_center(Point::ZERO, 50.0, 50.0);
        let ox = path.segments[0].to.x - path.segments[0].c2.x;
        let oy = path.start.y - path.segments[0].c1.y;
        assert!((ox - oy).abs() < 1e-12);
        assert!((ox - 25.0 * defaults::KAPPA).abs() < 1e-12);
    }

    #[test]
    fn circle_uses_half_the_radius() {
        assert_eq!(circle_draw_radius(50.0), 25.0);
        let path = circle_curves(dvec2(320.0, 240.0), 50.0);
        assert_eq!(path.start, dvec2(295.0, 240.0));
        assert_eq!(path.segments[1].to, dvec2(345.0, 240.0));
    }
}
