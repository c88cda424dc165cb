//! SVG surface: turns the primitive stream into an SVG document.
//!
//! Translation is applied as coordinates arrive, the way a canvas transform
//! applies at path-construction time, so the output needs no `transform`
//! attributes.

use std::f64::consts::{PI, TAU};

use ::svg::Document;
use ::svg::Node;
use ::svg::node::element::{Path, Rectangle, Text};
use glam::dvec2;

use super::defaults;
use super::surface::DrawingSurface;
use crate::types::Point;

/// Size and stroke of an [`SvgSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: defaults::SURFACE_WIDTH,
            height: defaults::SURFACE_HEIGHT,
            stroke_width: defaults::STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SvgSurface {
    options: SvgOptions,
    document: Document,
    translation: Point,
    /// `d` attribute of the path under construction.
    path: String,
    has_current_point: bool,
}

impl SvgSurface {
    pub fn new(options: SvgOptions) -> Self {
        Self {
            options,
            document: blank_document(&options),
            translation: Point::ZERO,
            path: String::new(),
            has_current_point: false,
        }
    }

    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    fn at(&self, p: Point) -> Point {
        p + self.translation
    }

    /// Translated point as an `x,y` path pair.
    fn coord(&self, p: Point) -> String {
        let q = self.at(p);
        format!("{},{}", fmt_num_hi(q.x), fmt_num_hi(q.y))
    }

    fn push_segment(&mut self, segment: String) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push_str(&segment);
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(SvgOptions::default())
    }
}

fn blank_document(options: &SvgOptions) -> Document {
    let width = fmt_num(options.width);
    let height = fmt_num(options.height);
    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width.clone())
        .set("height", height.clone())
        .set("fill", defaults::BACKGROUND);

    Document::new()
        .set("width", width.clone())
        .set("height", height.clone())
        .set("viewBox", format!("0 0 {width} {height}"))
        .add(background)
}

impl DrawingSurface for SvgSurface {
    fn width(&self) -> f64 {
        self.options.width
    }

    fn height(&self) -> f64 {
        self.options.height
    }

    fn clear(&mut self) {
        self.document = blank_document(&self.options);
        self.translation = Point::ZERO;
        self.begin_path();
    }

    fn set_translation(&mut self, dx: f64, dy: f64) {
        self.translation = dvec2(dx, dy);
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.has_current_point = false;
    }

    fn move_to(&mut self, p: Point) {
        let to = self.coord(p);
        self.push_segment(format!("M{to}"));
        self.has_current_point = true;
    }

    fn line_to(&mut self, p: Point) {
        if !self.has_current_point {
            self.move_to(p);
            return;
        }
        let to = self.coord(p);
        self.push_segment(format!("L{to}"));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        if !self.has_current_point {
            self.move_to(c1);
        }
        let segment = format!("C{} {} {}", self.coord(c1), self.coord(c2), self.coord(to));
        self.push_segment(segment);
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        let point_at = |angle: f64| center + radius * dvec2(angle.cos(), angle.sin());
        let start = point_at(start_angle);
        if self.has_current_point {
            self.line_to(start);
        } else {
            self.move_to(start);
        }

        let r = fmt_num_hi(radius);
        let sweep_flag = if counterclockwise { 0 } else { 1 };
        if (end_angle - start_angle).abs() >= TAU {
            // An SVG arc cannot start and end on the same point; split in two.
            let opposite = self.coord(2.0 * center - start);
            let back = self.coord(start);
            self.push_segment(format!("A{r} {r} 0 0 {sweep_flag} {opposite}"));
            self.push_segment(format!("A{r} {r} 0 0 {sweep_flag} {back}"));
            return;
        }

        let sweep = if counterclockwise {
            start_angle - end_angle
        } else {
            end_angle - start_angle
        }
        .rem_euclid(TAU);
        let large_arc = if sweep > PI { 1 } else { 0 };
        let end = self.coord(point_at(end_angle));
        self.push_segment(format!("A{r} {r} 0 {large_arc} {sweep_flag} {end}"));
    }

    fn stroke(&mut self) {
        if !self.has_current_point {
            return;
        }
        let path = Path::new()
            .set("fill", "none")
            .set("stroke", defaults::INK)
            .set("stroke-width", fmt_num(self.options.stroke_width))
            .set("d", self.path.clone());
        crate::log::trace!(d = %self.path, "svg: stroke path");
        self.document.append(path);
    }

    fn stroke_rect(&mut self, origin: Point, width: f64, height: f64) {
        let corner = self.at(origin);
        let rect = Rectangle::new()
            .set("x", fmt_num_hi(corner.x))
            .set("y", fmt_num_hi(corner.y))
            .set("width", fmt_num_hi(width))
            .set("height", fmt_num_hi(height))
            .set("fill", "none")
            .set("stroke", defaults::INK)
            .set("stroke-width", fmt_num(self.options.stroke_width));
        crate::log::trace!(x = corner.x, y = corner.y, width, height, "svg: stroke rect");
        self.document.append(rect);
    }

    fn render_text(&mut self, text: &str, at: Point) {
        let at = self.at(at);
        let text = Text::new(text)
            .set("x", fmt_num_hi(at.x))
            .set("y", fmt_num_hi(at.y))
            .set("fill", defaults::INK)
            .set("style", format!("font: {}", defaults::ERROR_FONT));
        self.document.append(text);
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
/// Used for surface size and stroke width.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// 10 significant figures, for geometry coordinates.
pub(crate) fn fmt_num_hi(value: f64) -> String {
    fmt_num_precision(value, 10)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MeasureKey, Measures};

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(640.0), "640");
        assert_eq!(fmt_num(57.735026918962575), "57.735");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_num(0.125), "0.125");
    }

    #[test]
    fn clear_paints_the_background() {
        let mut surface = SvgSurface::default();
        surface.clear();
        let svg = surface.to_svg_string();
        assert!(svg.contains("#f7fcff"), "{svg}");
        assert!(svg.contains(r#"viewBox="0 0 640 480""#), "{svg}");
        assert!(!svg.contains("<path"), "{svg}");
    }

    #[test]
    fn stroke_adds_one_path() {
        let mut surface = SvgSurface::default();
        surface.clear();
        surface.set_translation(10.0, 10.0);
        surface.begin_path();
        surface.move_to(Point::ZERO);
        surface.line_to(dvec2(5.0, 5.0));
        surface.stroke();
        let svg = surface.to_svg_string();
        assert_eq!(svg.matches("<path").count(), 1, "{svg}");
        assert!(svg.contains(r#"stroke="black""#), "{svg}");
    }

    #[test]
    fn stroke_without_path_is_a_no_op() {
        let mut surface = SvgSurface::default();
        surface.clear();
        surface.stroke();
        assert!(!surface.to_svg_string().contains("<path"));
    }

    #[test]
    fn translation_applies_to_rectangles() {
        let mut surface = SvgSurface::default();
        surface.clear();
        surface.set_translation(270.0, 215.0);
        surface.stroke_rect(Point::ZERO, 100.0, 50.0);
        let svg = surface.to_svg_string();
        assert!(svg.contains(r#"x="270""#), "{svg}");
        assert!(svg.contains(r#"y="215""#), "{svg}");
    }

    #[test]
    fn clear_resets_translation_and_content() {
        let mut surface = SvgSurface::default();
        surface.set_translation(50.0, 50.0);
        surface.stroke_rect(Point::ZERO, 10.0, 10.0);
        surface.clear();
        surface.render_text("oops", dvec2(10.0, 50.0));
        let svg = surface.to_svg_string();
        assert!(svg.contains("oops"), "{svg}");
        assert!(svg.contains(r#"x="10""#), "{svg}");
        assert!(!svg.contains(r#"x="60""#), "{svg}");
    }

    /// The `d` attribute of the only path in `svg`.
    fn path_data(svg: &str) -> &str {
        let start = svg.find(r#" d=""#).expect("svg has a path") + 4;
        let len = svg[start..].find('"').expect("closing quote");
        &svg[start..start + len]
    }

    /// Every `x,y` pair in path data, command letters stripped.
    fn pairs(d: &str) -> Vec<(f64, f64)> {
        d.split(' ')
            .filter_map(|token| {
                let (x, y) = token.trim_start_matches(char::is_alphabetic).split_once(',')?;
                Some((x.parse().unwrap(), y.parse().unwrap()))
            })
            .collect()
    }

    fn draw_square(side_length: f64) -> String {
        let measures = Measures::new()
            .with(MeasureKey::SideLength, side_length)
            .unwrap();
        let mut surface = SvgSurface::default();
        assert!(crate::render::draw(&mut surface, "square", &measures, None).is_drawn());
        surface.to_svg_string()
    }

    #[test]
    fn large_square_keeps_its_side_length() {
        let side = 123_456_789.0;
        let svg = draw_square(side);
        let points = pairs(path_data(&svg));
        assert_eq!(points.len(), 5, "{svg}");

        let xs = points.iter().map(|p| p.0);
        let width = xs.clone().fold(f64::MIN, f64::max) - xs.fold(f64::MAX, f64::min);
        assert!((width - side).abs() < 1.0, "width {width} in {svg}");
    }

    #[test]
    fn huge_square_stays_finite() {
        let svg = draw_square(1e39);
        let d = path_data(&svg);
        assert!(!d.contains("inf") && !d.contains("NaN"), "{d}");
        assert_eq!(pairs(d).len(), 5, "{d}");
    }

    #[test]
    fn full_circle_is_two_half_arcs() {
        let mut surface = SvgSurface::default();
        surface.begin_path();
        surface.arc(dvec2(100.0, 100.0), 10.0, 0.0, TAU, true);
        surface.stroke();
        let svg = surface.to_svg_string();
        assert_eq!(path_data(&svg), "M110,100 A10 10 0 0 0 90,100 A10 10 0 0 0 110,100");
    }

    #[test]
    fn half_circle_clockwise_is_a_small_arc() {
        let mut surface = SvgSurface::default();
        surface.begin_path();
        surface.arc(dvec2(100.0, 100.0), 10.0, 0.0, PI, false);
        surface.stroke();
        let svg = surface.to_svg_string();
        assert_eq!(path_data(&svg), "M110,100 A10 10 0 0 1 90,100");
    }

    #[test]
    fn quarter_turn_counterclockwise_takes_the_long_way() {
        let mut surface = SvgSurface::default();
        surface.begin_path();
        surface.arc(dvec2(100.0, 100.0), 10.0, 0.0, PI / 2.0, true);
        surface.stroke();
        let svg = surface.to_svg_string();
        assert_eq!(path_data(&svg), "M110,100 A10 10 0 1 0 100,110");
    }
}
