// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Court outline generation.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};

use hoopline_court::{CourtGeometry, CourtZones, Error, Orientation, Origin, Side, Zone};
use kurbo::{Affine, Arc, Circle, Line, Point, Rect, Vec2};
use peniko::Color;

use crate::primitive::{Element, Primitive, Shape, Style};
use crate::style::CourtStyle;

/// Dash and gap lengths of the free-throw circle, in line widths.
const DASH_PATTERN: [f64; 2] = [3.7, 1.6];

/// A rendered court: primitives in drawing order plus the view bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct CourtDrawing {
    /// Primitives, back to front.
    pub primitives: Vec<Primitive>,
    /// Region a host should show: the court extent plus padding.
    pub bounds: Rect,
}

impl CourtDrawing {
    /// Primitives depicting `element`.
    pub fn elements(&self, element: Element) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(move |p| p.element == element)
    }
}

/// Produces the court outline of `geometry` in `orientation` with `origin`.
///
/// Elements are laid out on the horizontal, center-origin court and then
/// turned and shifted into place. Half-court framings only get the shown
/// basket's elements, plus halves of the boundary and center circles.
///
/// Outlines sit half a line width outside their measured edges, so that the
/// outer edge of each painted line lies on the regulation boundary.
///
/// Fails with [`Error::InvalidStyleValue`] if `style` is out of range.
///
/// ```
/// use hoopline_court::{CourtGeometry, Orientation, Origin};
/// use hoopline_render::{CourtStyle, Element, render_court};
///
/// let court = CourtGeometry::default();
/// let drawing = render_court(&court, Orientation::HalfLeft, Origin::Center, &CourtStyle::default())
///     .unwrap();
/// assert_eq!(drawing.elements(Element::Hoop).count(), 1);
/// assert_eq!(drawing.bounds.x0, -52.0);
/// ```
pub fn render_court(
    geometry: &CourtGeometry,
    orientation: Orientation,
    origin: Origin,
    style: &CourtStyle,
) -> Result<CourtDrawing, Error> {
    style.validate()?;
    let shown = orientation.shown_side();
    let lw = style.line_width_for(geometry);
    let pad = style.padding_for(geometry);

    let builder = Builder::new(geometry, style, lw);
    let canonical = builder.build(shown);

    let size = orientation.frame_size(geometry.length, geometry.width);
    let display = Affine::translate(origin.center_offset(size)) * orientation.display_affine();
    let primitives: Vec<Primitive> = canonical.iter().map(|p| p.transformed(display)).collect();

    let cf = lw / 2.0;
    let l2 = geometry.half_length();
    let w2 = geometry.half_width();
    let canonical_bounds = match shown {
        Side::Both => Rect::new(-l2 - pad, -w2 - pad, l2 + pad, w2 + pad),
        Side::Left => Rect::new(-l2 - pad, -w2 - pad, cf, w2 + pad),
        Side::Right => Rect::new(-cf, -w2 - pad, l2 + pad, w2 + pad),
    };
    let bounds = display.transform_rect_bbox(canonical_bounds);

    log::debug!(
        "rendered {} {} court ({}, {}): {} primitives",
        geometry.league,
        geometry.units,
        orientation,
        origin,
        primitives.len()
    );
    Ok(CourtDrawing { primitives, bounds })
}

/// Shades a shot zone on a court drawn in the same framing as `zones`.
///
/// Closed zones are filled with `color`. [`Zone::ThreePointArc`] is open and
/// is stroked with `color` at `line_width` instead.
///
/// ```
/// use hoopline_court::{CourtGeometry, CourtZones, Orientation, Origin, Side, Zone};
/// use hoopline_render::{Element, zone_primitive};
/// use peniko::Color;
///
/// let court = CourtGeometry::default();
/// let zones = CourtZones::new(&court, Orientation::V, Origin::Center);
/// let paint = zone_primitive(&zones, Zone::Paint, Side::Left, Color::from_rgba8(200, 0, 0, 90), 0.0);
/// assert_eq!(paint.element, Element::Overlay);
/// ```
#[must_use]
pub fn zone_primitive(
    zones: &CourtZones,
    zone: Zone,
    side: Side,
    color: Color,
    line_width: f64,
) -> Primitive {
    let style = match zone {
        Zone::ThreePointArc => Style::stroked(line_width, color),
        Zone::RestrictedArea | Zone::Paint | Zone::CornerThree => Style::filled(color),
    };
    Primitive::new(
        Shape::Path(zones.outline(zone, side)),
        style,
        Element::Overlay,
    )
}

struct Builder<'a> {
    g: &'a CourtGeometry,
    style: &'a CourtStyle,
    lw: f64,
    cf: f64,
    line: Color,
    hoop: Color,
    out: Vec<Primitive>,
}

impl<'a> Builder<'a> {
    fn new(g: &'a CourtGeometry, style: &'a CourtStyle, lw: f64) -> Self {
        Self {
            g,
            style,
            lw,
            cf: lw / 2.0,
            line: style.line_color.multiply_alpha(style.line_alpha),
            hoop: style.line_color.multiply_alpha(style.hoop_alpha),
            out: Vec::new(),
        }
    }

    fn push(&mut self, shape: Shape, style: Style, element: Element) {
        self.out.push(Primitive::new(shape, style, element));
    }

    fn line_style(&self) -> Style {
        Style::stroked(self.lw, self.line)
    }

    fn sides(shown: Side) -> impl Iterator<Item = Side> {
        [Side::Left, Side::Right]
            .into_iter()
            .filter(move |s| shown.covers(*s))
    }

    fn build(mut self, shown: Side) -> Vec<Primitive> {
        let g = self.g;
        let cf = self.cf;
        let l2 = g.half_length();
        let w2 = g.half_width();

        let boundary = match shown {
            Side::Both => Rect::new(-l2 - cf, -w2 - cf, l2 + cf, w2 + cf),
            Side::Left => Rect::new(-l2 - cf, -w2 - cf, 0.0, w2 + cf),
            Side::Right => Rect::new(0.0, -w2 - cf, l2 + cf, w2 + cf),
        };
        let style = self.line_style().with_fill(self.style.court_color);
        self.push(Shape::Rect(boundary), style, Element::Boundary);

        for side in Self::sides(shown) {
            self.paint(side);
        }
        for side in Self::sides(shown) {
            self.basket(side);
        }
        for side in Self::sides(shown) {
            self.arcs(side);
        }
        for side in Self::sides(shown) {
            self.sideline_marks(side);
        }

        let center = Line::new((0.0, -w2), (0.0, w2));
        let style = self.line_style();
        self.push(Shape::Line(center), style, Element::CenterLine);

        for (radius, element) in [
            (g.inner_circle_radius, Element::CenterCircleInner),
            (g.outer_circle_radius, Element::CenterCircleOuter),
        ] {
            let shape = match shown {
                Side::Both => Shape::Circle(Circle::new(Point::ZERO, radius)),
                Side::Left => arc(Point::ZERO, radius, FRAC_PI_2, PI),
                Side::Right => arc(Point::ZERO, radius, -FRAC_PI_2, PI),
            };
            let style = self.line_style().with_fill(self.style.paint_color);
            self.push(shape, style, element);
        }
        self.out
    }

    /// Outer and inner paint rectangles.
    fn paint(&mut self, side: Side) {
        let g = self.g;
        let cf = self.cf;
        for (length, width, fill, element) in [
            (
                g.outer_paint_length,
                g.outer_paint_width,
                self.style.paint_color,
                Element::OuterPaint,
            ),
            (
                g.inner_paint_length,
                g.inner_paint_width,
                None,
                Element::InnerPaint,
            ),
        ] {
            let left = Rect::new(
                -g.half_length() - cf,
                -width / 2.0 - cf,
                -g.half_length() + length + cf,
                width / 2.0 + cf,
            );
            let style = self.line_style().with_fill(fill);
            self.push(Shape::Rect(mirror_rect(left, side)), style, element);
        }
    }

    /// Rim and backboard.
    fn basket(&mut self, side: Side) {
        let g = self.g;
        let s = sign(side);
        let hoop = Point::new(s * (g.half_length() - g.hoop_distance_from_edge), 0.0);
        let style = Style::stroked(self.lw, self.hoop);
        self.push(
            Shape::Circle(Circle::new(hoop, g.hoop_radius)),
            style.clone(),
            Element::Hoop,
        );
        let x = s * (g.half_length() - g.backboard_distance_from_edge);
        let half = g.backboard_width / 2.0;
        self.push(
            Shape::Line(Line::new((x, -half), (x, half))),
            style,
            Element::Backboard,
        );
    }

    /// Restricted area, free-throw circle and three-point line.
    fn arcs(&mut self, side: Side) {
        let g = self.g;
        let cf = self.cf;
        let s = sign(side);
        // Angle pointing from the baseline toward center court.
        let facing = if side == Side::Left { 0.0 } else { PI };
        let hoop = Point::new(s * (g.half_length() - g.hoop_distance_from_edge), 0.0);

        let restricted = arc(
            hoop,
            g.charge_circle_radius + cf / 2.0,
            facing - FRAC_PI_2,
            PI,
        );
        let style = self.line_style();
        self.push(restricted, style, Element::RestrictedArc);

        let ft_center = Point::new(s * (g.half_length() - g.inner_paint_length - cf), 0.0);
        let ft_radius = g.inner_paint_width / 2.0 + cf;
        let style = self.line_style();
        self.push(
            arc(ft_center, ft_radius, facing - FRAC_PI_2, PI),
            style,
            Element::FreeThrowCircle,
        );
        let dashes = DASH_PATTERN.map(|d| d * self.lw);
        let style = self.line_style().with_dashes(0.0, &dashes);
        self.push(
            arc(ft_center, ft_radius, facing + FRAC_PI_2, PI),
            style,
            Element::FreeThrowCircleDashed,
        );

        let half_angle = g.three_point_arc_angle.to_radians();
        let style = self.line_style();
        // Three quarters of a line width inside the regulation radius.
        self.push(
            arc(
                hoop,
                g.three_point_radius() - self.lw / 4.0 - cf,
                facing - half_angle,
                2.0 * half_angle,
            ),
            style,
            Element::ThreePointArc,
        );

        let y = g.half_width() - g.three_point_side_width - cf;
        for y in [y, -y] {
            let left = Line::new(
                (-g.half_length(), y),
                (-g.half_length() + g.three_point_line_length, y),
            );
            let style = self.line_style();
            self.push(
                Shape::Line(mirror_line(left, side)),
                style,
                Element::CornerThree,
            );
        }
    }

    /// Inbound hash marks inside both sidelines and the substitution mark
    /// outside the lower sideline.
    fn sideline_marks(&mut self, side: Side) {
        let g = self.g;
        let w2 = g.half_width();
        let x = -g.half_length() + g.inbound_line_distance_from_edge;
        for (y0, y1) in [
            (w2, w2 - g.inbound_line_length),
            (-w2, -w2 + g.inbound_line_length),
        ] {
            let style = self.line_style();
            self.push(
                Shape::Line(mirror_line(Line::new((x, y0), (x, y1)), side)),
                style,
                Element::InboundHash,
            );
        }
        let x = -g.outbound_line_distance_from_center;
        let sub = Line::new((x, -w2), (x, -w2 - g.outbound_line_length));
        let style = self.line_style();
        self.push(
            Shape::Line(mirror_line(sub, side)),
            style,
            Element::SubstitutionLine,
        );
    }
}

fn sign(side: Side) -> f64 {
    if side == Side::Right { 1.0 } else { -1.0 }
}

fn arc(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> Shape {
    Shape::Arc(Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle,
        x_rotation: 0.0,
    })
}

/// Mirrors a left-basket rectangle onto `side`.
fn mirror_rect(r: Rect, side: Side) -> Rect {
    if side == Side::Right {
        Rect::new(-r.x1, r.y0, -r.x0, r.y1)
    } else {
        r
    }
}

/// Mirrors a left-basket line onto `side`, keeping the y coordinates.
fn mirror_line(l: Line, side: Side) -> Line {
    if side == Side::Right {
        Line::new((-l.p0.x, l.p0.y), (-l.p1.x, l.p1.y))
    } else {
        l
    }
}
