// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hoopline_court::{CourtGeometry, Error};
use peniko::Color;

/// Padding around the court, in feet, when none is configured.
pub const DEFAULT_PADDING_FEET: f64 = 5.0;

/// Appearance of a rendered court.
///
/// Lengths are in the units of the geometry being rendered. Unset lengths
/// fall back to the regulation line width and [`DEFAULT_PADDING_FEET`].
///
/// ```
/// use hoopline_render::CourtStyle;
/// use peniko::Color;
///
/// let style = CourtStyle::default()
///     .with_court_color(Some(Color::from_rgba8(0xdf, 0xbb, 0x85, 0xff)))
///     .with_line_alpha(0.8)
///     .with_padding(2.0);
/// assert!(style.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CourtStyle {
    /// Fill of the playing surface; `None` leaves it transparent.
    pub court_color: Option<Color>,
    /// Fill of the outer paint and center circles; `None` leaves them transparent.
    pub paint_color: Option<Color>,
    /// Color of every court line.
    pub line_color: Color,
    /// Opacity multiplier for court lines.
    pub line_alpha: f32,
    /// Line width; `None` uses [`CourtGeometry::default_line_width`].
    pub line_width: Option<f64>,
    /// Opacity multiplier for the hoops and backboards.
    pub hoop_alpha: f32,
    /// Space around the court in the view bounds; `None` uses 5 ft.
    pub padding: Option<f64>,
}

impl Default for CourtStyle {
    fn default() -> Self {
        Self {
            court_color: None,
            paint_color: None,
            line_color: Color::BLACK,
            line_alpha: 1.0,
            line_width: None,
            hoop_alpha: 1.0,
            padding: None,
        }
    }
}

impl CourtStyle {
    /// Sets the playing surface fill.
    #[must_use]
    pub fn with_court_color(mut self, color: Option<Color>) -> Self {
        self.court_color = color;
        self
    }

    /// Sets the paint fill.
    #[must_use]
    pub fn with_paint_color(mut self, color: Option<Color>) -> Self {
        self.paint_color = color;
        self
    }

    /// Sets the line color.
    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Sets the line opacity.
    #[must_use]
    pub fn with_line_alpha(mut self, alpha: f32) -> Self {
        self.line_alpha = alpha;
        self
    }

    /// Sets an explicit line width.
    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Sets the hoop and backboard opacity.
    #[must_use]
    pub fn with_hoop_alpha(mut self, alpha: f32) -> Self {
        self.hoop_alpha = alpha;
        self
    }

    /// Sets an explicit padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Checks opacities are in `[0, 1]` and lengths are non-negative.
    pub fn validate(&self) -> Result<(), Error> {
        check_alpha("line_alpha", self.line_alpha)?;
        check_alpha("hoop_alpha", self.hoop_alpha)?;
        if let Some(width) = self.line_width {
            check_length("line_width", width)?;
        }
        if let Some(padding) = self.padding {
            check_length("padding", padding)?;
        }
        Ok(())
    }

    /// Line width to use with `geometry`.
    #[must_use]
    pub fn line_width_for(&self, geometry: &CourtGeometry) -> f64 {
        self.line_width
            .unwrap_or_else(|| geometry.default_line_width())
    }

    /// Padding to use with `geometry`.
    #[must_use]
    pub fn padding_for(&self, geometry: &CourtGeometry) -> f64 {
        self.padding
            .unwrap_or_else(|| DEFAULT_PADDING_FEET * geometry.units.per_foot())
    }
}

pub(crate) fn check_alpha(name: &'static str, alpha: f32) -> Result<(), Error> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(Error::InvalidStyleValue {
            name,
            value: f64::from(alpha),
        })
    }
}

pub(crate) fn check_length(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidStyleValue { name, value })
    }
}
