// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use hoopline_court::{CoordinateTransform, Error};
use hoopline_render::{Element, Polyline, Primitive, Shape, Style};
use kurbo::{Cap, Point};
use peniko::Color;

use crate::ramp::ColorRamp;

/// How a trajectory's width and opacity vary along its length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Constant width and opacity.
    #[default]
    Solid,
    /// Width grows from `width_start` to `width`.
    Comet,
    /// Opacity goes from `alpha_start` to `alpha_end`.
    Fade,
    /// Both [`LineStyle::Comet`] and [`LineStyle::Fade`].
    CometFade,
}

impl LineStyle {
    /// Every style.
    pub const ALL: [Self; 4] = [Self::Solid, Self::Comet, Self::Fade, Self::CometFade];

    /// The style's tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Comet => "comet",
            Self::Fade => "fade",
            Self::CometFade => "comet-fade",
        }
    }

    /// The style with the given effects switched on.
    #[must_use]
    pub const fn from_flags(comet: bool, fade: bool) -> Self {
        match (comet, fade) {
            (false, false) => Self::Solid,
            (true, false) => Self::Comet,
            (false, true) => Self::Fade,
            (true, true) => Self::CometFade,
        }
    }

    /// Whether the width varies.
    #[must_use]
    pub const fn is_comet(self) -> bool {
        matches!(self, Self::Comet | Self::CometFade)
    }

    /// Whether the opacity varies.
    #[must_use]
    pub const fn is_fade(self) -> bool {
        matches!(self, Self::Fade | Self::CometFade)
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedLineStyle(s.into()))
    }
}

/// Appearance of a trajectory built by [`build_line`].
///
/// Widths are in court units.
#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
    /// Stroke color.
    pub color: Color,
    /// Width at the end of the line, and everywhere for non-comet styles.
    pub width: f64,
    /// Width at the start of a comet line.
    pub width_start: f64,
    /// Opacity at the start of a fading line.
    pub alpha_start: f32,
    /// Opacity at the end of a fading line.
    pub alpha_end: f32,
    /// Pieces a two-point comet or fading line is split into.
    pub segments: usize,
    /// Width and opacity profile.
    pub style: LineStyle,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 0.5,
            width_start: 0.05,
            alpha_start: 0.1,
            alpha_end: 1.0,
            segments: 20,
            style: LineStyle::Solid,
        }
    }
}

impl LineOptions {
    /// Sets the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the (end) width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the starting width of comet lines.
    #[must_use]
    pub fn with_width_start(mut self, width: f64) -> Self {
        self.width_start = width;
        self
    }

    /// Sets the opacity range of fading lines.
    #[must_use]
    pub fn with_alphas(mut self, start: f32, end: f32) -> Self {
        self.alpha_start = start;
        self.alpha_end = end;
        self
    }

    /// Sets how many pieces two-point lines are split into.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks widths are non-negative, opacities in `[0, 1]` and that
    /// two-point lines can be split.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [("width", self.width), ("width_start", self.width_start)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidStyleValue { name, value });
            }
        }
        for (name, alpha) in [("alpha_start", self.alpha_start), ("alpha_end", self.alpha_end)] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(Error::InvalidStyleValue {
                    name,
                    value: f64::from(alpha),
                });
            }
        }
        if self.segments == 0 {
            return Err(Error::InvalidStyleValue {
                name: "segments",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Builds one trajectory through `waypoints`.
///
/// Comet and fading styles interpolate linearly by segment index, from the
/// start value on the first segment to the end value on the last. A
/// two-point input with either effect is first split into
/// [`LineOptions::segments`] equal pieces.
///
/// ```
/// use hoopline_overlay::{LineOptions, LineStyle, build_line};
/// use hoopline_render::Shape;
/// use kurbo::Point;
///
/// let options = LineOptions::default().with_style("comet".parse::<LineStyle>().unwrap());
/// let line = build_line(&[Point::new(0.0, 0.0), Point::new(20.0, 20.0)], &options).unwrap();
/// let Shape::Polyline(polyline) = &line.shape else { unreachable!() };
/// assert_eq!(polyline.segment_count(), 20);
/// assert_eq!(polyline.segment_widths[19], options.width);
/// ```
pub fn build_line(waypoints: &[Point], options: &LineOptions) -> Result<Primitive, Error> {
    options.validate()?;
    let style = options.style;
    let points = if waypoints.len() == 2 && style != LineStyle::Solid {
        subdivide(waypoints[0], waypoints[1], options.segments)
    } else {
        waypoints.to_vec()
    };

    let mut polyline = Polyline::new(points);
    let n = polyline.segment_count();
    if style.is_comet() {
        polyline.segment_widths = ramp_values(n, options.width_start, options.width);
    }
    if style.is_fade() {
        let (start, end) = (f64::from(options.alpha_start), f64::from(options.alpha_end));
        polyline.segment_alphas = ramp_values(n, start, end)
            .into_iter()
            .map(to_alpha)
            .collect();
    }

    let mut stroke_style = Style::stroked(options.width, options.color);
    if let Some(stroke) = stroke_style.stroke.take() {
        stroke_style.stroke = Some(stroke.with_caps(Cap::Round));
    }
    Ok(Primitive::new(
        Shape::Polyline(polyline),
        stroke_style,
        Element::Overlay,
    ))
}

/// Builds one straight trajectory per `starts[i] → ends[i]` pair.
///
/// With `transform`, endpoints are converted into its target framing first.
/// With `ramp`, line `i` of `n` takes the ramp color at `i / (n - 1)`
/// instead of [`LineOptions::color`].
pub fn build_lines(
    starts: &[Point],
    ends: &[Point],
    options: &LineOptions,
    transform: Option<&CoordinateTransform>,
    ramp: Option<&ColorRamp>,
) -> Result<Vec<Primitive>, Error> {
    Error::check_same_len("starts", starts.len(), "ends", ends.len())?;
    options.validate()?;
    let colors = ramp.map(|r| r.sample(starts.len()));
    starts
        .iter()
        .zip(ends)
        .enumerate()
        .map(|(i, (&a, &b))| {
            let (a, b) = match transform {
                Some(t) => (t.apply(a), t.apply(b)),
                None => (a, b),
            };
            let line_options = match &colors {
                Some(colors) => options.clone().with_color(colors[i]),
                None => options.clone(),
            };
            build_line(&[a, b], &line_options)
        })
        .collect()
}

fn subdivide(a: Point, b: Point, pieces: usize) -> Vec<Point> {
    (0..=pieces)
        .map(|i| a.lerp(b, i as f64 / pieces as f64))
        .collect()
}

fn ramp_values(n: usize, start: f64, end: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![end],
        _ => (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                start * (1.0 - t) + end * t
            })
            .collect(),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "opacities are within [0, 1]"
)]
fn to_alpha(v: f64) -> f32 {
    v as f32
}

#[cfg(test)]
mod tests {
    use hoopline_court::Error;
    use hoopline_render::{Polyline, Shape};
    use kurbo::Point;

    use super::{LineOptions, LineStyle, build_line};

    fn polyline(shape: &Shape) -> &Polyline {
        match shape {
            Shape::Polyline(p) => p,
            other => panic!("expected a polyline, got {other:?}"),
        }
    }

    #[test]
    fn parses_styles() {
        for style in LineStyle::ALL {
            assert_eq!(style.as_str().parse::<LineStyle>(), Ok(style));
        }
        assert_eq!("Comet-Fade".parse(), Ok(LineStyle::CometFade));
        assert_eq!(
            "dotted".parse::<LineStyle>(),
            Err(Error::UnsupportedLineStyle("dotted".into()))
        );
        assert_eq!(LineStyle::from_flags(true, true), LineStyle::CometFade);
        assert_eq!(LineStyle::from_flags(false, true), LineStyle::Fade);
    }

    #[test]
    fn solid_lines_keep_waypoints() {
        let points = [Point::new(0.0, 0.0), Point::new(20.0, 20.0)];
        let line = build_line(&points, &LineOptions::default()).unwrap();
        let p = polyline(&line.shape);
        assert_eq!(p.points, points);
        assert!(p.is_uniform());
    }

    #[test]
    fn multi_point_paths_are_not_split() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        let options = LineOptions::default().with_style(LineStyle::Comet);
        let line = build_line(&points, &options).unwrap();
        let p = polyline(&line.shape);
        assert_eq!(p.segment_count(), 2);
        assert_eq!(p.segment_widths, vec![options.width_start, options.width]);
    }

    #[test]
    fn rejects_bad_options() {
        let points = [Point::ZERO, Point::new(1.0, 1.0)];
        let bad = [
            LineOptions::default().with_width(-1.0),
            LineOptions::default().with_alphas(0.0, 1.5),
            LineOptions::default().with_segments(0),
        ];
        for options in bad {
            assert!(matches!(
                build_line(&points, &options),
                Err(Error::InvalidStyleValue { .. })
            ));
        }
    }

    #[test]
    fn single_segment_takes_end_values() {
        let options = LineOptions::default()
            .with_style(LineStyle::CometFade)
            .with_segments(1);
        let line = build_line(&[Point::ZERO, Point::new(3.0, 4.0)], &options).unwrap();
        let p = polyline(&line.shape);
        assert_eq!(p.segment_widths, vec![options.width]);
        assert_eq!(p.segment_alphas, vec![options.alpha_end]);
    }
}
