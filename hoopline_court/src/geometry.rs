// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! League dimension tables.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect};

use crate::Error;

/// Meters per foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Basketball league whose court markings are used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum League {
    /// National Basketball Association.
    #[default]
    Nba,
    /// Women's National Basketball Association.
    Wnba,
    /// US college basketball.
    Ncaa,
    /// International rules.
    Fiba,
}

impl League {
    /// All supported leagues.
    pub const ALL: [Self; 4] = [Self::Nba, Self::Wnba, Self::Ncaa, Self::Fiba];

    /// Lowercase league name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nba => "nba",
            Self::Wnba => "wnba",
            Self::Ncaa => "ncaa",
            Self::Fiba => "fiba",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|league| league.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownCourtType(s.into()))
    }
}

/// Length unit of a [`CourtGeometry`] and of the data plotted on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Units {
    /// Feet (`ft`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ft"))]
    Feet,
    /// Meters (`m`).
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Meters,
}

impl Units {
    /// Short unit symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Meters => "m",
        }
    }

    /// Multiplier turning a length in feet into this unit.
    #[must_use]
    pub const fn per_foot(self) -> f64 {
        match self {
            Self::Feet => 1.0,
            Self::Meters => METERS_PER_FOOT,
        }
    }

    /// Multiplier turning a length in `self` into `to`.
    #[must_use]
    pub fn factor_to(self, to: Self) -> f64 {
        to.per_foot() / self.per_foot()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = [
            ("ft", Self::Feet),
            ("feet", Self::Feet),
            ("m", Self::Meters),
            ("meters", Self::Meters),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s));
        match found {
            Some((_, units)) => Ok(units),
            None => Err(Error::UnknownUnits(s.into())),
        }
    }
}

/// Court dimensions for one league in one unit system.
///
/// All lengths are in [`CourtGeometry::units`]. The three-point arc angle is
/// in degrees and is the same in every unit system.
///
/// Paint dimensions are given as (length along the court, width across it).
///
/// ```
/// use hoopline_court::{CourtGeometry, League, Units};
///
/// let ft = CourtGeometry::new(League::Nba, Units::Feet);
/// let m = CourtGeometry::new(League::Nba, Units::Meters);
/// assert_eq!(ft.length, 94.0);
/// assert!((m.length - 94.0 * 0.3048).abs() < 1e-12);
/// assert_eq!(m.three_point_arc_angle, ft.three_point_arc_angle);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourtGeometry {
    /// League the table belongs to.
    pub league: League,
    /// Unit of every length field.
    pub units: Units,
    /// Baseline to baseline.
    pub length: f64,
    /// Sideline to sideline.
    pub width: f64,
    /// Baseline to hoop center.
    pub hoop_distance_from_edge: f64,
    /// Radius of the rim.
    pub hoop_radius: f64,
    /// Baseline to backboard face.
    pub backboard_distance_from_edge: f64,
    /// Backboard width across the court.
    pub backboard_width: f64,
    /// Backboard height.
    pub backboard_height: f64,
    /// Radius of the restricted-area arc around the hoop.
    pub charge_circle_radius: f64,
    /// Straight part of the restricted area toward the baseline.
    pub charge_circle_side_length: f64,
    /// Baseline to the inbound hash marks.
    pub inbound_line_distance_from_edge: f64,
    /// Length of each inbound hash mark.
    pub inbound_line_length: f64,
    /// Center line to the substitution marks.
    pub outbound_line_distance_from_center: f64,
    /// Length of each substitution mark, drawn outside the sideline.
    pub outbound_line_length: f64,
    /// Outer paint extent along the court.
    pub outer_paint_length: f64,
    /// Outer paint extent across the court.
    pub outer_paint_width: f64,
    /// Inner paint extent along the court.
    pub inner_paint_length: f64,
    /// Inner paint extent across the court; also the free-throw circle diameter.
    pub inner_paint_width: f64,
    /// Outer center circle radius.
    pub outer_circle_radius: f64,
    /// Inner center circle radius.
    pub inner_circle_radius: f64,
    /// Half-angle of the three-point arc in degrees, measured from the court axis.
    pub three_point_arc_angle: f64,
    /// Diameter of the three-point arc.
    pub three_point_arc_diameter: f64,
    /// Length of the straight corner three-point lines from the baseline.
    pub three_point_line_length: f64,
    /// Sideline to the straight corner three-point lines.
    pub three_point_side_width: f64,
    /// Rim height.
    pub hoop_height: f64,
}

impl CourtGeometry {
    /// Dimension table for `league` in `units`.
    #[must_use]
    pub fn new(league: League, units: Units) -> Self {
        feet_table(league).convert(units)
    }

    /// Parses league and unit names, then builds the table.
    ///
    /// ```
    /// use hoopline_court::{CourtGeometry, Error};
    ///
    /// assert!(CourtGeometry::from_names("wnba", "m").is_ok());
    /// assert_eq!(
    ///     CourtGeometry::from_names("xyz", "ft"),
    ///     Err(Error::UnknownCourtType("xyz".into()))
    /// );
    /// ```
    pub fn from_names(league: &str, units: &str) -> Result<Self, Error> {
        Ok(Self::new(league.parse()?, units.parse()?))
    }

    /// Returns the same court expressed in `units`.
    ///
    /// Angles are left alone.
    #[must_use]
    pub fn convert(self, units: Units) -> Self {
        let k = self.units.factor_to(units);
        if k == 1.0 {
            return Self { units, ..self };
        }
        Self {
            league: self.league,
            units,
            length: self.length * k,
            width: self.width * k,
            hoop_distance_from_edge: self.hoop_distance_from_edge * k,
            hoop_radius: self.hoop_radius * k,
            backboard_distance_from_edge: self.backboard_distance_from_edge * k,
            backboard_width: self.backboard_width * k,
            backboard_height: self.backboard_height * k,
            charge_circle_radius: self.charge_circle_radius * k,
            charge_circle_side_length: self.charge_circle_side_length * k,
            inbound_line_distance_from_edge: self.inbound_line_distance_from_edge * k,
            inbound_line_length: self.inbound_line_length * k,
            outbound_line_distance_from_center: self.outbound_line_distance_from_center * k,
            outbound_line_length: self.outbound_line_length * k,
            outer_paint_length: self.outer_paint_length * k,
            outer_paint_width: self.outer_paint_width * k,
            inner_paint_length: self.inner_paint_length * k,
            inner_paint_width: self.inner_paint_width * k,
            outer_circle_radius: self.outer_circle_radius * k,
            inner_circle_radius: self.inner_circle_radius * k,
            three_point_arc_angle: self.three_point_arc_angle,
            three_point_arc_diameter: self.three_point_arc_diameter * k,
            three_point_line_length: self.three_point_line_length * k,
            three_point_side_width: self.three_point_side_width * k,
            hoop_height: self.hoop_height * k,
        }
    }

    /// Replaces the playing rectangle, keeping every marking.
    ///
    /// Useful for tracking systems whose court differs from the regulation
    /// size. Both values must be positive and finite.
    pub fn with_court_dims(self, length: f64, width: f64) -> Result<Self, Error> {
        check_positive("length", length)?;
        check_positive("width", width)?;
        Ok(Self {
            length,
            width,
            ..self
        })
    }

    /// Every length field by name, in declaration order.
    ///
    /// The arc angle is not a length and is not included.
    #[must_use]
    pub fn lengths(&self) -> [(&'static str, f64); 23] {
        [
            ("length", self.length),
            ("width", self.width),
            ("hoop_distance_from_edge", self.hoop_distance_from_edge),
            ("hoop_radius", self.hoop_radius),
            (
                "backboard_distance_from_edge",
                self.backboard_distance_from_edge,
            ),
            ("backboard_width", self.backboard_width),
            ("backboard_height", self.backboard_height),
            ("charge_circle_radius", self.charge_circle_radius),
            ("charge_circle_side_length", self.charge_circle_side_length),
            (
                "inbound_line_distance_from_edge",
                self.inbound_line_distance_from_edge,
            ),
            ("inbound_line_length", self.inbound_line_length),
            (
                "outbound_line_distance_from_center",
                self.outbound_line_distance_from_center,
            ),
            ("outbound_line_length", self.outbound_line_length),
            ("outer_paint_length", self.outer_paint_length),
            ("outer_paint_width", self.outer_paint_width),
            ("inner_paint_length", self.inner_paint_length),
            ("inner_paint_width", self.inner_paint_width),
            ("outer_circle_radius", self.outer_circle_radius),
            ("inner_circle_radius", self.inner_circle_radius),
            ("three_point_arc_diameter", self.three_point_arc_diameter),
            ("three_point_line_length", self.three_point_line_length),
            ("three_point_side_width", self.three_point_side_width),
            ("hoop_height", self.hoop_height),
        ]
    }

    /// Checks that every length is positive and finite.
    pub fn validate(&self) -> Result<(), Error> {
        self.lengths()
            .into_iter()
            .try_for_each(|(name, value)| check_positive(name, value))
    }

    /// Half the court length.
    #[must_use]
    pub fn half_length(&self) -> f64 {
        self.length / 2.0
    }

    /// Half the court width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Radius of the three-point arc.
    #[must_use]
    pub fn three_point_radius(&self) -> f64 {
        self.three_point_arc_diameter / 2.0
    }

    /// Left and right hoop centers in the horizontal, center-origin frame.
    #[must_use]
    pub fn hoop_centers(&self) -> [Point; 2] {
        let x = self.half_length() - self.hoop_distance_from_edge;
        [Point::new(-x, 0.0), Point::new(x, 0.0)]
    }

    /// Regulation line width (2 inches) in this geometry's units.
    #[must_use]
    pub fn default_line_width(&self) -> f64 {
        self.units.per_foot() / 6.0
    }

    /// The playing rectangle in the horizontal, center-origin frame.
    #[must_use]
    pub fn extent(&self) -> Rect {
        Rect::new(
            -self.half_length(),
            -self.half_width(),
            self.half_length(),
            self.half_width(),
        )
    }
}

impl Default for CourtGeometry {
    fn default() -> Self {
        Self::new(League::Nba, Units::Feet)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension { name, value })
    }
}

/// NBA markings in feet; the other leagues start from these.
const NBA_FEET: CourtGeometry = CourtGeometry {
    league: League::Nba,
    units: Units::Feet,
    length: 94.0,
    width: 50.0,
    hoop_distance_from_edge: 5.25,
    hoop_radius: 0.75,
    backboard_distance_from_edge: 4.0,
    backboard_width: 6.0,
    backboard_height: 3.5,
    charge_circle_radius: 4.0,
    charge_circle_side_length: 3.0,
    inbound_line_distance_from_edge: 28.0,
    inbound_line_length: 3.0,
    outbound_line_distance_from_center: 4.0 + 1.0 / 12.0,
    outbound_line_length: 4.0,
    outer_paint_length: 18.0 + 5.0 / 6.0,
    outer_paint_width: 16.0 - 1.0 / 3.0,
    inner_paint_length: 18.0 + 5.0 / 6.0,
    inner_paint_width: 12.0 - 1.0 / 3.0,
    outer_circle_radius: 6.0,
    inner_circle_radius: 2.0,
    three_point_arc_angle: 68.13,
    three_point_arc_diameter: 47.5,
    three_point_line_length: 14.0,
    three_point_side_width: 3.0,
    hoop_height: 10.0,
};

fn feet_table(league: League) -> CourtGeometry {
    match league {
        League::Nba => NBA_FEET,
        League::Wnba => CourtGeometry {
            league,
            three_point_arc_angle: 83.516_926_307_102_76,
            three_point_arc_diameter: 44.365,
            three_point_line_length: 7.75,
            ..NBA_FEET
        },
        League::Ncaa => CourtGeometry {
            league,
            outer_paint_width: 12.0 - 1.0 / 3.0,
            inner_circle_radius: 6.0,
            three_point_arc_angle: 78.95,
            three_point_arc_diameter: 44.218,
            three_point_line_length: 9.4,
            three_point_side_width: 3.343_75,
            ..NBA_FEET
        },
        League::Fiba => CourtGeometry {
            league,
            length: 91.8635,
            width: 49.2126,
            hoop_distance_from_edge: 5.167,
            backboard_distance_from_edge: 3.937,
            charge_circle_radius: 3.94,
            inbound_line_distance_from_edge: 27.32,
            outbound_line_distance_from_center: 3.9685 + 1.0 / 12.0,
            outer_paint_length: 18.0289 + 5.0 / 6.0,
            outer_paint_width: 16.08 - 1.0 / 3.0,
            inner_paint_length: 18.0289 + 5.0 / 6.0,
            outer_circle_radius: 5.905_51,
            inner_circle_radius: 5.905_51,
            three_point_arc_angle: 78.9,
            three_point_arc_diameter: 44.218,
            three_point_line_length: 9.4,
            three_point_side_width: 2.953,
            ..NBA_FEET
        },
    }
}
