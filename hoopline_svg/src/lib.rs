// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hoopline_svg --heading-base-level=0

//! SVG export canvas for Hoopline court drawings.
//!
//! [`SvgCanvas`] implements [`Canvas`] by recording primitives, and
//! [`SvgCanvas::to_svg`] writes them out as a standalone SVG document. The
//! document's `viewBox` is the view rectangle in court units and the body is
//! wrapped in a y-flip, so the court reads with y pointing up as it does in
//! court coordinates.
//!
//! ```
//! use hoopline_court::{CourtGeometry, Orientation, Origin};
//! use hoopline_render::{Canvas, CourtStyle, render_court};
//! use hoopline_svg::SvgCanvas;
//!
//! let court = CourtGeometry::default();
//! let drawing = render_court(&court, Orientation::H, Origin::Center, &CourtStyle::default()).unwrap();
//! let mut canvas = SvgCanvas::default();
//! canvas.draw_court(&drawing);
//! let svg = canvas.to_svg(1040, 600);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("viewBox=\"-52 -30 104 60\""));
//! ```
//!
//! Output is meant for inspection and simple publishing: everything is
//! emitted as plain shapes with presentation attributes.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use hoopline_render::{Canvas, Polyline, Primitive, Shape, Style};
use kurbo::{BezPath, Cap, Join, PathEl, Rect};
use peniko::Color;

/// Flattening tolerance for arcs, in court units.
const ARC_TOLERANCE: f64 = 0.01;

/// A canvas that records primitives and exports them as SVG.
#[derive(Clone, Debug, Default)]
pub struct SvgCanvas {
    view: Option<Rect>,
    primitives: Vec<Primitive>,
}

impl SvgCanvas {
    /// Clears the recorded primitives and view.
    pub fn clear(&mut self) {
        self.view = None;
        self.primitives.clear();
    }

    /// Returns the recorded primitives.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The view set by [`Canvas::set_view`], if any.
    pub fn view(&self) -> Option<Rect> {
        self.view
    }

    /// Export the recorded primitives as an SVG document.
    ///
    /// `width`/`height` become the SVG `width`/`height` attributes. The
    /// `viewBox` is the view rectangle, or the union of the primitives'
    /// bounds if no view was set.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let view = self.view.unwrap_or_else(|| self.content_bounds());
        let mut body = String::new();
        for primitive in &self.primitives {
            write_primitive(&mut body, primitive);
        }

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{} {} {} {}\">",
            fmt_f64_to_f32(view.x0),
            fmt_f64_to_f32(view.y0),
            fmt_f64_to_f32(view.width()),
            fmt_f64_to_f32(view.height()),
        );
        // y' = y0 + y1 - y keeps the view's y range while flipping it.
        let _ = write!(
            svg,
            "<g transform=\"matrix(1 0 0 -1 0 {})\">",
            fmt_f64_to_f32(view.y0 + view.y1)
        );
        svg.push_str(&body);
        svg.push_str("</g></svg>");
        svg
    }

    fn content_bounds(&self) -> Rect {
        self.primitives
            .iter()
            .map(|p| p.shape.bounding_box())
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }
}

impl Canvas for SvgCanvas {
    fn set_view(&mut self, view: Rect) {
        self.view = Some(view.abs());
    }

    fn draw(&mut self, primitive: &Primitive) {
        self.primitives.push(primitive.clone());
    }
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    let style = &primitive.style;
    match &primitive.shape {
        Shape::Line(line) => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                fmt_f64_to_f32(line.p0.x),
                fmt_f64_to_f32(line.p0.y),
                fmt_f64_to_f32(line.p1.x),
                fmt_f64_to_f32(line.p1.y),
                paint_attrs(style, None, 1.0),
            );
        }
        Shape::Rect(rect) => {
            let rect = rect.abs();
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
                fmt_f64_to_f32(rect.x0),
                fmt_f64_to_f32(rect.y0),
                fmt_f64_to_f32(rect.width()),
                fmt_f64_to_f32(rect.height()),
                paint_attrs(style, None, 1.0),
            );
        }
        Shape::Circle(circle) => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                fmt_f64_to_f32(circle.center.x),
                fmt_f64_to_f32(circle.center.y),
                fmt_f64_to_f32(circle.radius),
                paint_attrs(style, None, 1.0),
            );
        }
        Shape::Arc(arc) => {
            let path = kurbo::Shape::to_path(arc, ARC_TOLERANCE);
            let _ = write!(
                out,
                "<path d=\"{}\"{}/>",
                bez_path_to_svg_d(&path),
                paint_attrs(style, None, 1.0),
            );
        }
        Shape::Polyline(polyline) => write_polyline(out, polyline, style),
        Shape::Path(path) => {
            let _ = write!(
                out,
                "<path d=\"{}\"{}/>",
                bez_path_to_svg_d(path),
                paint_attrs(style, None, 1.0),
            );
        }
    }
}

fn write_polyline(out: &mut String, polyline: &Polyline, style: &Style) {
    if polyline.is_uniform() {
        out.push_str("<polyline points=\"");
        for (i, p) in polyline.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", fmt_f64_to_f32(p.x), fmt_f64_to_f32(p.y));
        }
        out.push('"');
        // Open polylines are never filled.
        let unfilled = Style {
            fill: None,
            ..style.clone()
        };
        out.push_str(&paint_attrs(&unfilled, None, 1.0));
        out.push_str("/>");
        return;
    }

    // One element per segment so each can carry its own width and opacity.
    out.push_str("<g>");
    for (i, seg) in polyline.segments().enumerate() {
        let width = polyline.segment_widths.get(i).copied();
        let alpha = polyline.segment_alphas.get(i).copied().unwrap_or(1.0);
        let _ = write!(
            out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
            fmt_f64_to_f32(seg.p0.x),
            fmt_f64_to_f32(seg.p0.y),
            fmt_f64_to_f32(seg.p1.x),
            fmt_f64_to_f32(seg.p1.y),
            paint_attrs(style, width, alpha),
        );
    }
    out.push_str("</g>");
}

/// Fill and stroke attributes for `style`.
///
/// `width` overrides the stroke width and `alpha` scales the stroke opacity.
fn paint_attrs(style: &Style, width: Option<f64>, alpha: f32) -> String {
    let mut out = String::new();

    match style.fill {
        Some(color) => {
            let (rgb, a) = color_to_svg(color);
            let _ = write!(out, " fill=\"{rgb}\"");
            if a < 1.0 {
                let _ = write!(out, " fill-opacity=\"{}\"", fmt_f32(a));
            }
        }
        None => out.push_str(" fill=\"none\""),
    }

    let Some(stroke) = style.stroke.as_ref() else {
        out.push_str(" stroke=\"none\"");
        return out;
    };
    let (rgb, a) = color_to_svg(style.stroke_color);
    let a = a * alpha.clamp(0.0, 1.0);
    let _ = write!(out, " stroke=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(out, " stroke-opacity=\"{}\"", fmt_f32(a));
    }
    let _ = write!(
        out,
        " stroke-width=\"{}\"",
        fmt_f64_to_f32(width.unwrap_or(stroke.width))
    );
    // SVG has a single linecap, while kurbo can specify start/end caps.
    // Use the start cap when they differ.
    let _ = write!(
        out,
        " stroke-linecap=\"{}\"",
        stroke_cap_svg(stroke.start_cap)
    );
    let _ = write!(out, " stroke-linejoin=\"{}\"", stroke_join_svg(stroke.join));
    if stroke.join == Join::Miter && stroke.miter_limit.is_finite() {
        let _ = write!(
            out,
            " stroke-miterlimit=\"{}\"",
            fmt_f64_to_f32(stroke.miter_limit)
        );
    }
    if !stroke.dash_pattern.is_empty() {
        out.push_str(" stroke-dasharray=\"");
        for (i, v) in stroke.dash_pattern.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&fmt_f64_to_f32(*v));
        }
        out.push('"');
    }
    if stroke.dash_offset != 0.0 {
        let _ = write!(
            out,
            " stroke-dashoffset=\"{}\"",
            fmt_f64_to_f32(stroke.dash_offset)
        );
    }

    out
}

fn bez_path_to_svg_d(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_f64_to_f32(p.x), fmt_f64_to_f32(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_f64_to_f32(p.x), fmt_f64_to_f32(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_f64_to_f32(p1.x),
                    fmt_f64_to_f32(p1.y),
                    fmt_f64_to_f32(p2.x),
                    fmt_f64_to_f32(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_f64_to_f32(p1.x),
                    fmt_f64_to_f32(p1.y),
                    fmt_f64_to_f32(p2.x),
                    fmt_f64_to_f32(p2.y),
                    fmt_f64_to_f32(p3.x),
                    fmt_f64_to_f32(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

fn stroke_cap_svg(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn stroke_join_svg(join: Join) -> &'static str {
    match join {
        Join::Miter => "miter",
        Join::Round => "round",
        Join::Bevel => "bevel",
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "SVG uses f32-like scalar formatting"
)]
fn fmt_f64_to_f32(v: f64) -> String {
    fmt_f32(v as f32)
}

fn fmt_f32(v: f32) -> String {
    // Keep output readable and stable enough for diffing.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i32;
        let diff = (i as f32) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{:.3}", v);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use hoopline_court::{CourtGeometry, Orientation, Origin};
    use hoopline_render::{
        Canvas, CourtStyle, Element, Polyline, Primitive, Shape, Style, render_court,
    };
    use kurbo::{Circle, Line, Point, Rect};
    use peniko::Color;

    use super::{SvgCanvas, fmt_f32};

    fn line_primitive(style: Style) -> Primitive {
        Primitive::new(
            Shape::Line(Line::new((0.0, 0.0), (10.0, 0.0))),
            style,
            Element::CenterLine,
        )
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(fmt_f32(3.0), "3");
        assert_eq!(fmt_f32(-0.25), "-0.25");
        assert_eq!(fmt_f32(1.0 / 3.0), "0.333");
        assert_eq!(fmt_f32(-0.0001), "0");
    }

    #[test]
    fn view_becomes_view_box_and_flip() {
        let mut canvas = SvgCanvas::default();
        canvas.set_view(Rect::new(-52.0, -30.0, 52.0, 30.0));
        let svg = canvas.to_svg(520, 300);
        assert!(svg.contains("width=\"520\" height=\"300\" viewBox=\"-52 -30 104 60\""));
        assert!(svg.contains("<g transform=\"matrix(1 0 0 -1 0 0)\">"));
        assert!(svg.ends_with("</g></svg>"));

        canvas.set_view(Rect::new(0.0, 0.0, 94.0, 50.0));
        assert!(canvas.to_svg(94, 50).contains("matrix(1 0 0 -1 0 50)"));
    }

    #[test]
    fn view_defaults_to_content_bounds() {
        let mut canvas = SvgCanvas::default();
        canvas.draw(&line_primitive(Style::stroked(1.0, Color::BLACK)));
        canvas.draw(&Primitive::new(
            Shape::Circle(Circle::new((0.0, 0.0), 2.0)),
            Style::stroked(1.0, Color::BLACK),
            Element::CenterCircleInner,
        ));
        assert!(canvas.to_svg(10, 10).contains("viewBox=\"-2 -2 12 4\""));
    }

    #[test]
    fn writes_paint_attributes() {
        let mut canvas = SvgCanvas::default();
        let red = Color::from_rgba8(255, 0, 0, 128);
        canvas.draw(&line_primitive(
            Style::stroked(0.5, red).with_dashes(0.0, &[2.0, 1.0]),
        ));
        canvas.draw(&Primitive::new(
            Shape::Rect(Rect::new(0.0, 0.0, 4.0, 2.0)),
            Style::filled(Color::WHITE),
            Element::Boundary,
        ));
        let svg = canvas.to_svg(100, 100);
        assert!(svg.contains(
            "<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"0\" fill=\"none\" stroke=\"#ff0000\" stroke-opacity=\"0.502\" stroke-width=\"0.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-dasharray=\"2,1\"/>"
        ));
        assert!(svg.contains(
            "<rect x=\"0\" y=\"0\" width=\"4\" height=\"2\" fill=\"#ffffff\" stroke=\"none\"/>"
        ));
    }

    #[test]
    fn varying_polylines_split_into_segments() {
        let mut polyline = Polyline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        let style = Style::stroked(1.0, Color::BLACK);
        let mut canvas = SvgCanvas::default();
        canvas.draw(&Primitive::new(
            Shape::Polyline(polyline.clone()),
            style.clone(),
            Element::Overlay,
        ));
        polyline.segment_widths = vec![0.25, 1.0];
        polyline.segment_alphas = vec![0.5, 1.0];
        canvas.draw(&Primitive::new(
            Shape::Polyline(polyline),
            style,
            Element::Overlay,
        ));
        let svg = canvas.to_svg(10, 10);
        assert!(svg.contains(
            "<polyline points=\"0,0 1,0 2,0\" fill=\"none\" stroke=\"#000000\" stroke-width=\"1\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>"
        ));
        assert!(svg.contains("stroke-opacity=\"0.5\" stroke-width=\"0.25\""));
        assert_eq!(svg.matches("<line ").count(), 2);
    }

    #[test]
    fn full_court_exports_every_primitive() {
        let g = CourtGeometry::default();
        let drawing =
            render_court(&g, Orientation::HalfLeft, Origin::Center, &CourtStyle::default())
                .unwrap();
        let mut canvas = SvgCanvas::default();
        canvas.draw_court(&drawing);
        let svg = canvas.to_svg(600, 600);
        let shapes = ["<line ", "<rect ", "<circle ", "<path ", "<polyline "]
            .iter()
            .map(|tag| svg.matches(tag).count())
            .sum::<usize>();
        assert_eq!(shapes, drawing.primitives.len());
        for d in svg.split("<path d=\"").skip(1) {
            let d = d.split('"').next().unwrap_or_default();
            assert!(d.starts_with('M') && d.contains('C'), "arcs become cubic paths: {d}");
        }
        assert!(svg.contains("stroke-dasharray"));
    }
}
