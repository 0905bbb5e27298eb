// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Affine, Arc, BezPath, Circle, Line, Point, Rect, Stroke, Vec2};
use peniko::Color;

/// Stroke style type used by primitives.
pub type StrokeStyle = Stroke;

/// A polyline whose segments may each carry their own width and opacity.
///
/// `segment_widths` and `segment_alphas` are either empty, meaning every
/// segment uses the primitive's [`Style`], or hold one entry per segment
/// (`points.len() - 1`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Per-segment stroke widths.
    pub segment_widths: Vec<f64>,
    /// Per-segment opacity multipliers in `[0, 1]`.
    pub segment_alphas: Vec<f32>,
}

impl Polyline {
    /// A polyline drawn entirely with the primitive's style.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            segment_widths: Vec::new(),
            segment_alphas: Vec::new(),
        }
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Iterates over the segments as lines.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    /// Returns `true` if every segment is drawn with the same width and opacity.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.segment_widths.is_empty() && self.segment_alphas.is_empty()
    }
}

/// Geometry of a drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A straight segment.
    Line(Line),
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A full circle.
    Circle(Circle),
    /// A circular arc; `radii.x == radii.y` and `x_rotation == 0`.
    Arc(Arc),
    /// An open polyline.
    Polyline(Polyline),
    /// A general path, such as a shot zone outline.
    Path(BezPath),
}

impl Shape {
    /// Axis-aligned bounds of the geometry, ignoring stroke width.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Line(line) => Rect::from_points(line.p0, line.p1),
            Self::Rect(rect) => rect.abs(),
            Self::Circle(circle) => Rect::from_center_size(
                circle.center,
                (circle.radius * 2.0, circle.radius * 2.0),
            ),
            Self::Arc(arc) => kurbo::Shape::bounding_box(arc),
            Self::Polyline(polyline) => polyline
                .points
                .iter()
                .fold(None, |acc: Option<Rect>, &p| {
                    Some(match acc {
                        Some(r) => r.union_pt(p),
                        None => Rect::from_points(p, p),
                    })
                })
                .unwrap_or(Rect::ZERO),
            Self::Path(path) => kurbo::Shape::bounding_box(path),
        }
    }

    /// Applies a rotation, uniform scale and translation.
    ///
    /// Rectangles are replaced by their transformed bounding box, which is
    /// exact for quarter turns.
    #[must_use]
    pub fn transformed(&self, affine: Affine) -> Self {
        let [a, b, ..] = affine.as_coeffs();
        let axis = Vec2::new(a, b);
        let scale = axis.hypot();
        match self {
            Self::Line(line) => Self::Line(Line::new(affine * line.p0, affine * line.p1)),
            Self::Rect(rect) => Self::Rect(affine.transform_rect_bbox(*rect)),
            Self::Circle(circle) => Self::Circle(Circle::new(
                affine * circle.center,
                circle.radius * scale,
            )),
            Self::Arc(arc) => Self::Arc(Arc {
                center: affine * arc.center,
                radii: arc.radii * scale,
                start_angle: arc.start_angle + axis.atan2(),
                sweep_angle: arc.sweep_angle,
                x_rotation: arc.x_rotation,
            }),
            Self::Polyline(polyline) => Self::Polyline(Polyline {
                points: polyline.points.iter().map(|&p| affine * p).collect(),
                segment_widths: polyline.segment_widths.iter().map(|w| w * scale).collect(),
                segment_alphas: polyline.segment_alphas.clone(),
            }),
            Self::Path(path) => Self::Path(affine * path.clone()),
        }
    }
}

/// Paint applied to a [`Shape`].
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Outline stroke, if the shape is outlined.
    pub stroke: Option<StrokeStyle>,
    /// Color of the outline.
    pub stroke_color: Color,
    /// Interior color, if the shape is filled.
    pub fill: Option<Color>,
}

impl Style {
    /// An outline of `width` in `color`.
    #[must_use]
    pub fn stroked(width: f64, color: Color) -> Self {
        Self {
            stroke: Some(Stroke::new(width)),
            stroke_color: color,
            fill: None,
        }
    }

    /// A filled shape with no outline.
    #[must_use]
    pub fn filled(color: Color) -> Self {
        Self {
            stroke: None,
            stroke_color: Color::TRANSPARENT,
            fill: Some(color),
        }
    }

    /// Adds an interior fill.
    #[must_use]
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    /// Dashes the outline.
    #[must_use]
    pub fn with_dashes(mut self, offset: f64, pattern: &[f64]) -> Self {
        if let Some(stroke) = self.stroke.take() {
            self.stroke = Some(stroke.with_dashes(offset, pattern.iter().copied()));
        }
        self
    }
}

/// Court feature a primitive depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// Sidelines and baselines.
    Boundary,
    /// The outer (wide) painted lane.
    OuterPaint,
    /// The inner (narrow) lane lines.
    InnerPaint,
    /// The rim.
    Hoop,
    /// The backboard seen from above.
    Backboard,
    /// The restricted-area arc under the basket.
    RestrictedArc,
    /// The solid, court-facing half of the free-throw circle.
    FreeThrowCircle,
    /// The dashed, baseline-facing half of the free-throw circle.
    FreeThrowCircleDashed,
    /// The three-point arc.
    ThreePointArc,
    /// A straight corner three-point line.
    CornerThree,
    /// Inbound hash mark on a sideline.
    InboundHash,
    /// Substitution mark outside a sideline.
    SubstitutionLine,
    /// The center line.
    CenterLine,
    /// The outer center circle.
    CenterCircleOuter,
    /// The inner center circle.
    CenterCircleInner,
    /// Data drawn over the court, such as heatmap cells or trajectories.
    Overlay,
}

/// A shape, its paint and the feature it depicts.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape,
    /// Paint.
    pub style: Style,
    /// What the primitive depicts.
    pub element: Element,
}

impl Primitive {
    /// Bundles a shape with its style.
    #[must_use]
    pub fn new(shape: Shape, style: Style, element: Element) -> Self {
        Self {
            shape,
            style,
            element,
        }
    }

    /// Applies a rotation, uniform scale and translation to the geometry.
    ///
    /// Stroke widths and dash lengths scale with the geometry.
    #[must_use]
    pub fn transformed(&self, affine: Affine) -> Self {
        let [a, b, ..] = affine.as_coeffs();
        let scale = Vec2::new(a, b).hypot();
        let stroke = self.style.stroke.as_ref().map(|s| {
            if scale == 1.0 {
                s.clone()
            } else {
                let dashes: Vec<f64> = s.dash_pattern.iter().map(|d| d * scale).collect();
                let mut scaled = s.clone().with_dashes(s.dash_offset * scale, dashes);
                scaled.width = s.width * scale;
                scaled
            }
        });
        Self {
            shape: self.shape.transformed(affine),
            style: Style {
                stroke,
                ..self.style.clone()
            },
            element: self.element,
        }
    }
}
