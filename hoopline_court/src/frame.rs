// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use kurbo::{Affine, Point, Vec2};

use crate::Error;

/// Display layout of a court in a plot.
///
/// The two full-court framings show the whole court, with the baskets on the
/// left/right (`H`) or bottom/top (`V`). The four half-court framings show
/// one half only:
///
/// - [`Orientation::HalfLeft`] / [`Orientation::HalfRight`]: horizontal, the
///   left or right half.
/// - [`Orientation::HalfUp`] / [`Orientation::HalfDown`]: vertical, the upper
///   or lower half.
///
/// The vertical layout is a quarter turn of the horizontal one: the left
/// basket of `H` is the bottom basket of `V`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Horizontal full court (`h`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "h"))]
    H,
    /// Vertical full court (`v`).
    #[cfg_attr(feature = "serde", serde(rename = "v"))]
    V,
    /// Horizontal, left half (`hl`).
    #[cfg_attr(feature = "serde", serde(rename = "hl"))]
    HalfLeft,
    /// Horizontal, right half (`hr`).
    #[cfg_attr(feature = "serde", serde(rename = "hr"))]
    HalfRight,
    /// Vertical, upper half (`vu`).
    #[cfg_attr(feature = "serde", serde(rename = "vu"))]
    HalfUp,
    /// Vertical, lower half (`vd`).
    #[cfg_attr(feature = "serde", serde(rename = "vd"))]
    HalfDown,
}

impl Orientation {
    /// All six framings.
    pub const ALL: [Self; 6] = [
        Self::H,
        Self::V,
        Self::HalfLeft,
        Self::HalfRight,
        Self::HalfUp,
        Self::HalfDown,
    ];

    /// Short tag used by the string form (`h`, `v`, `hl`, `hr`, `vu`, `vd`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H => "h",
            Self::V => "v",
            Self::HalfLeft => "hl",
            Self::HalfRight => "hr",
            Self::HalfUp => "vu",
            Self::HalfDown => "vd",
        }
    }

    /// Returns `true` for `V`, `vu` and `vd`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::V | Self::HalfUp | Self::HalfDown)
    }

    /// Returns `true` for the four half-court framings.
    #[must_use]
    pub const fn is_half(self) -> bool {
        !matches!(self, Self::H | Self::V)
    }

    /// The half of the canonical horizontal court this framing shows.
    ///
    /// `vu` shows the right basket turned upward and `vd` the left basket
    /// turned downward.
    #[must_use]
    pub const fn shown_side(self) -> Side {
        match self {
            Self::H | Self::V => Side::Both,
            Self::HalfLeft | Self::HalfDown => Side::Left,
            Self::HalfRight | Self::HalfUp => Side::Right,
        }
    }

    /// Size of the framing rectangle for a court of `length` x `width`.
    ///
    /// Vertical framings swap the axes.
    #[must_use]
    pub fn frame_size(self, length: f64, width: f64) -> Vec2 {
        if self.is_vertical() {
            Vec2::new(width, length)
        } else {
            Vec2::new(length, width)
        }
    }

    /// Linear map from the canonical horizontal frame into this framing.
    ///
    /// This is the identity for horizontal framings and the quarter turn
    /// `(x, y) -> (-y, x)` for vertical ones. Half-court folding is not part
    /// of this map.
    #[must_use]
    pub fn display_affine(self) -> Affine {
        if self.is_vertical() {
            QUARTER_TURN
        } else {
            Affine::IDENTITY
        }
    }

    /// Maps a point of this framing (center origin) back to the canonical frame.
    #[must_use]
    pub fn to_canonical(self, p: Point) -> Point {
        if self.is_vertical() {
            Point::new(p.y, -p.x)
        } else {
            p
        }
    }

    /// Maps a canonical point (center origin) into this framing.
    ///
    /// Half-court framings fold points from the hidden half through center
    /// court. Points on the center line (`x == 0`) are never folded.
    #[must_use]
    pub fn from_canonical(self, p: Point) -> Point {
        let folded = match self.shown_side() {
            Side::Both => p,
            Side::Left => fold_onto(p, Side::Left),
            Side::Right => fold_onto(p, Side::Right),
        };
        if self.is_vertical() {
            Point::new(-folded.y, folded.x)
        } else {
            folded
        }
    }
}

/// `(x, y) -> (-y, x)`.
pub(crate) const QUARTER_TURN: Affine = Affine::new([0.0, 1.0, -1.0, 0.0, 0.0, 0.0]);

/// Reflects `p` through center court if it lies on the wrong side.
pub(crate) fn fold_onto(p: Point, side: Side) -> Point {
    let flip = match side {
        Side::Left => p.x > 0.0,
        Side::Right => p.x < 0.0,
        Side::Both => false,
    };
    if flip { Point::new(-p.x, -p.y) } else { p }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = [
            ("h", Self::H),
            ("horizontal", Self::H),
            ("v", Self::V),
            ("vertical", Self::V),
            ("hl", Self::HalfLeft),
            ("hr", Self::HalfRight),
            ("vu", Self::HalfUp),
            ("vd", Self::HalfDown),
        ]
        .into_iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(s));
        match found {
            Some((_, orientation)) => Ok(orientation),
            None => Err(Error::InvalidOrientation(s.into())),
        }
    }
}

/// Where `(0, 0)` sits relative to the framing rectangle.
///
/// Coordinates are right-handed with y pointing up, so with a top-left origin
/// the court lies in `x >= 0, y <= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Origin {
    /// Center court.
    #[default]
    Center,
    /// Top-left corner.
    TopLeft,
    /// Bottom-left corner.
    BottomLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-right corner.
    BottomRight,
}

impl Origin {
    /// All five conventions.
    pub const ALL: [Self; 5] = [
        Self::Center,
        Self::TopLeft,
        Self::BottomLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    /// Kebab-case name used by the string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::TopLeft => "top-left",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Position of the court center in this origin's coordinates, for a
    /// framing rectangle of the given size.
    #[must_use]
    pub fn center_offset(self, frame_size: Vec2) -> Vec2 {
        let hw = frame_size.x / 2.0;
        let hh = frame_size.y / 2.0;
        match self {
            Self::Center => Vec2::ZERO,
            Self::TopLeft => Vec2::new(hw, -hh),
            Self::BottomLeft => Vec2::new(hw, hh),
            Self::TopRight => Vec2::new(-hw, -hh),
            Self::BottomRight => Vec2::new(-hw, hh),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|origin| {
                let name = origin.as_str();
                name.len() == trimmed.len()
                    && name
                        .bytes()
                        .zip(trimmed.bytes())
                        .all(|(a, b)| a == b.to_ascii_lowercase() || (a == b'-' && b == b'_'))
            })
            .ok_or_else(|| Error::InvalidOrigin(trimmed.into()))
    }
}

/// Handedness of a coordinate system.
///
/// Some tracking providers report y growing toward the bottom of the court
/// (left-handed). Transforms mirror the y axis of left-handed data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Handedness {
    /// y points up.
    #[default]
    Right,
    /// y points down.
    Left,
}

impl Handedness {
    /// Converts a point between this convention and the right-handed one.
    ///
    /// The mapping is its own inverse.
    #[must_use]
    pub fn mirror(self, p: Point) -> Point {
        match self {
            Self::Right => p,
            Self::Left => Point::new(p.x, -p.y),
        }
    }
}

/// Units of positions at either end of a transform.
///
/// Some tracking providers report positions as percentages of the framing
/// rectangle instead of court units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Scale {
    /// Feet or meters, matching the court geometry.
    #[default]
    Court,
    /// `0..=100` across each side of the framing rectangle.
    Percent,
}

impl Scale {
    /// Converts a position in this scale to court units, for a framing
    /// rectangle of `frame_size`.
    #[must_use]
    pub fn to_court(self, p: Point, frame_size: Vec2) -> Point {
        match self {
            Self::Court => p,
            Self::Percent => Point::new(p.x / 100.0 * frame_size.x, p.y / 100.0 * frame_size.y),
        }
    }

    /// Converts a position in court units to this scale.
    #[must_use]
    pub fn from_court(self, p: Point, frame_size: Vec2) -> Point {
        match self {
            Self::Court => p,
            Self::Percent => Point::new(p.x / frame_size.x * 100.0, p.y / frame_size.y * 100.0),
        }
    }
}

/// Half of the canonical horizontal court.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Side {
    /// `x <= 0`.
    Left,
    /// `x >= 0`.
    Right,
    /// The whole court.
    #[default]
    Both,
}

impl Side {
    /// Returns `true` if `self` includes `other`.
    #[must_use]
    pub const fn covers(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Both, _) | (Self::Left, Self::Left) | (Self::Right, Self::Right)
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Handedness, Orientation, Origin, Scale, Side};
    use crate::Error;

    #[test]
    fn orientation_parses_tags_and_long_names() {
        for o in Orientation::ALL {
            assert_eq!(o.as_str().parse::<Orientation>(), Ok(o));
        }
        assert_eq!("Horizontal".parse::<Orientation>(), Ok(Orientation::H));
        assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::V));
        assert_eq!(
            "diagonal".parse::<Orientation>(),
            Err(Error::InvalidOrientation("diagonal".into()))
        );
    }

    #[test]
    fn origin_accepts_underscores() {
        assert_eq!("top_left".parse::<Origin>(), Ok(Origin::TopLeft));
        assert_eq!("Bottom-Right".parse::<Origin>(), Ok(Origin::BottomRight));
        assert!(matches!(
            "middle".parse::<Origin>(),
            Err(Error::InvalidOrigin(_))
        ));
    }

    #[test]
    fn vertical_is_a_quarter_turn() {
        let p = Point::new(10.0, 3.0);
        let v = Orientation::V.from_canonical(p);
        assert_eq!(v, Point::new(-3.0, 10.0));
        assert_eq!(Orientation::V.display_affine() * p, v);
        assert_eq!(Orientation::V.to_canonical(v), p);
    }

    #[test]
    fn half_framings_fold_through_center() {
        let right = Point::new(20.0, 5.0);
        assert_eq!(
            Orientation::HalfLeft.from_canonical(right),
            Point::new(-20.0, -5.0)
        );
        assert_eq!(Orientation::HalfRight.from_canonical(right), right);
        // vu shows the right basket turned up.
        assert_eq!(
            Orientation::HalfUp.from_canonical(right),
            Point::new(-5.0, 20.0)
        );
        // vd shows the left basket turned down.
        let vd = Orientation::HalfDown.from_canonical(right);
        assert!(vd.y < 0.0);
    }

    #[test]
    fn center_line_is_never_folded() {
        let p = Point::new(0.0, 7.0);
        assert_eq!(Orientation::HalfLeft.from_canonical(p), p);
        assert_eq!(Orientation::HalfRight.from_canonical(p), p);
    }

    #[test]
    fn origin_offsets() {
        let size = Vec2::new(94.0, 50.0);
        assert_eq!(Origin::Center.center_offset(size), Vec2::ZERO);
        assert_eq!(Origin::TopLeft.center_offset(size), Vec2::new(47.0, -25.0));
        assert_eq!(
            Origin::BottomRight.center_offset(size),
            Vec2::new(-47.0, 25.0)
        );
        assert_eq!(
            Orientation::V.frame_size(94.0, 50.0),
            Vec2::new(50.0, 94.0)
        );
    }

    #[test]
    fn handedness_mirror_is_involution() {
        let p = Point::new(1.0, 2.0);
        let m = Handedness::Left.mirror(p);
        assert_eq!(m, Point::new(1.0, -2.0));
        assert_eq!(Handedness::Left.mirror(m), p);
        assert_eq!(Handedness::Right.mirror(p), p);
    }

    #[test]
    fn side_coverage() {
        assert!(Side::Both.covers(Side::Left));
        assert!(Side::Left.covers(Side::Left));
        assert!(!Side::Left.covers(Side::Right));
        assert!(!Side::Right.covers(Side::Both));
    }

    #[test]
    fn percent_scale_spans_the_frame() {
        let frame = Vec2::new(94.0, 50.0);
        let p = Scale::Percent.to_court(Point::new(50.0, 100.0), frame);
        assert_eq!(p, Point::new(47.0, 50.0));
        assert_eq!(Scale::Percent.from_court(p, frame), Point::new(50.0, 100.0));
        assert_eq!(Scale::Court.to_court(p, frame), p);
    }
}
