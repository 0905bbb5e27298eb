// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shot zone membership and outlines.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Affine, Arc, BezPath, Point, Rect, Shape, Vec2};

use crate::frame::Side;
use crate::{CourtGeometry, Orientation, Origin};

/// Curve flattening tolerance for zone outlines, in court units.
const OUTLINE_TOLERANCE: f64 = 0.01;

/// A court region [`CourtZones::outline`] can trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Zone {
    /// Half disc under the basket, closed along the chord.
    RestrictedArea,
    /// Outer paint rectangle.
    Paint,
    /// The two corner bands outside the straight three-point lines.
    CornerThree,
    /// The three-point arc alone, as an open path.
    ThreePointArc,
}

impl Zone {
    /// All zones.
    pub const ALL: [Self; 4] = [
        Self::RestrictedArea,
        Self::Paint,
        Self::CornerThree,
        Self::ThreePointArc,
    ];
}

/// Zone tests for points expressed in one framing.
///
/// Each mask has one entry per input point. Zones are evaluated in the
/// canonical horizontal frame; `side` picks the left basket, the right basket
/// or both. For half-court framings the shown half is the left basket for
/// `hl`/`vd` and the right basket for `hr`/`vu`.
///
/// ```
/// use hoopline_court::{CourtGeometry, CourtZones, Orientation, Origin, Side};
/// use kurbo::Point;
///
/// let court = CourtGeometry::default();
/// let zones = CourtZones::new(&court, Orientation::H, Origin::Center);
/// let shots = [Point::new(-40.0, 0.0), Point::new(-46.0, 24.0)];
/// assert_eq!(zones.paint_mask(&shots, Side::Both), [true, false]);
/// assert_eq!(zones.corner_three_mask(&shots, Side::Left), [false, true]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CourtZones {
    geometry: CourtGeometry,
    orientation: Orientation,
    offset: Vec2,
}

impl CourtZones {
    /// Creates zone tests for data in `orientation` with `origin`.
    #[must_use]
    pub fn new(geometry: &CourtGeometry, orientation: Orientation, origin: Origin) -> Self {
        let size = orientation.frame_size(geometry.length, geometry.width);
        Self {
            geometry: *geometry,
            orientation,
            offset: origin.center_offset(size),
        }
    }

    fn canonical(&self, p: Point) -> Point {
        self.orientation.to_canonical(p - self.offset)
    }

    fn mask(&self, points: &[Point], side: Side, test: impl Fn(Point, Side) -> bool) -> Vec<bool> {
        points
            .iter()
            .map(|&p| {
                let p = self.canonical(p);
                [Side::Left, Side::Right]
                    .into_iter()
                    .any(|s| side.covers(s) && test(p, s))
            })
            .collect()
    }

    fn hoop(&self, side: Side) -> Point {
        let [left, right] = self.geometry.hoop_centers();
        if side == Side::Left { left } else { right }
    }

    /// Inside the restricted-area arc, on the half facing center court.
    #[must_use]
    pub fn restricted_area_mask(&self, points: &[Point], side: Side) -> Vec<bool> {
        let r = self.geometry.charge_circle_radius;
        self.mask(points, side, |p, s| {
            let hoop = self.hoop(s);
            let facing = if s == Side::Left {
                p.x >= hoop.x
            } else {
                p.x <= hoop.x
            };
            facing && (p - hoop).hypot2() <= r * r
        })
    }

    /// Inside the outer paint rectangle.
    #[must_use]
    pub fn paint_mask(&self, points: &[Point], side: Side) -> Vec<bool> {
        let g = &self.geometry;
        let half_paint = g.outer_paint_width / 2.0;
        self.mask(points, side, |p, s| {
            let from_baseline = baseline_distance(g, p, s);
            (0.0..=g.outer_paint_length).contains(&from_baseline) && p.y.abs() <= half_paint
        })
    }

    /// Inside the corner bands between the sideline and the straight
    /// three-point lines.
    #[must_use]
    pub fn corner_three_mask(&self, points: &[Point], side: Side) -> Vec<bool> {
        let g = &self.geometry;
        let inner = g.half_width() - g.three_point_side_width;
        self.mask(points, side, |p, s| {
            let from_baseline = baseline_distance(g, p, s);
            (0.0..=g.three_point_line_length).contains(&from_baseline)
                && (inner..=g.half_width()).contains(&p.y.abs())
        })
    }

    /// Outside the three-point arc and between the corner bands, on the
    /// basket's own half.
    #[must_use]
    pub fn above_break_three_mask(&self, points: &[Point], side: Side) -> Vec<bool> {
        let g = &self.geometry;
        let r = g.three_point_radius();
        let band = g.half_width() - g.three_point_side_width;
        self.mask(points, side, |p, s| {
            let own_half = if s == Side::Left {
                p.x <= 0.0
            } else {
                p.x >= 0.0
            };
            own_half && p.y.abs() <= band && (p - self.hoop(s)).hypot2() >= r * r
        })
    }
}

impl CourtZones {
    /// Traces `zone` in this framing's display coordinates.
    ///
    /// [`Side::Both`] puts both baskets' outlines in one path. Half-court
    /// framings are not folded, so the hidden basket's zone lies outside the
    /// shown extent.
    ///
    /// ```
    /// use hoopline_court::{CourtGeometry, CourtZones, Orientation, Origin, Side, Zone};
    /// use kurbo::{Rect, Shape};
    ///
    /// let court = CourtGeometry::default();
    /// let zones = CourtZones::new(&court, Orientation::H, Origin::Center);
    /// let paint = zones.outline(Zone::Paint, Side::Left);
    /// let half = court.outer_paint_width / 2.0;
    /// assert_eq!(
    ///     paint.bounding_box(),
    ///     Rect::new(-47.0, -half, -47.0 + court.outer_paint_length, half)
    /// );
    /// ```
    #[must_use]
    pub fn outline(&self, zone: Zone, side: Side) -> BezPath {
        let mut path = BezPath::new();
        for s in [Side::Left, Side::Right] {
            if side.covers(s) {
                self.trace(&mut path, zone, s);
            }
        }
        path.apply_affine(Affine::translate(self.offset) * self.orientation.display_affine());
        path
    }

    /// Appends one basket's zone in the canonical frame.
    fn trace(&self, path: &mut BezPath, zone: Zone, side: Side) {
        let g = &self.geometry;
        let hoop = self.hoop(side);
        let facing = if side == Side::Left { 0.0 } else { PI };
        // Baseline and the direction toward center court.
        let (baseline, inward) = if side == Side::Left {
            (-g.half_length(), 1.0)
        } else {
            (g.half_length(), -1.0)
        };
        match zone {
            Zone::RestrictedArea => {
                let r = g.charge_circle_radius;
                let arc = circular_arc(hoop, r, facing - FRAC_PI_2, PI);
                path.extend(arc.path_elements(OUTLINE_TOLERANCE));
                path.close_path();
            }
            Zone::Paint => {
                let half = g.outer_paint_width / 2.0;
                let rect = Rect::new(
                    baseline,
                    -half,
                    baseline + inward * g.outer_paint_length,
                    half,
                )
                .abs();
                path.extend(rect.path_elements(OUTLINE_TOLERANCE));
            }
            Zone::CornerThree => {
                let x1 = baseline + inward * g.three_point_line_length;
                let inner = g.half_width() - g.three_point_side_width;
                for (y0, y1) in [(inner, g.half_width()), (-g.half_width(), -inner)] {
                    let rect = Rect::new(baseline, y0, x1, y1).abs();
                    path.extend(rect.path_elements(OUTLINE_TOLERANCE));
                }
            }
            Zone::ThreePointArc => {
                let r = g.three_point_radius();
                let half_angle = g.three_point_arc_angle.to_radians();
                let arc = circular_arc(hoop, r, facing - half_angle, 2.0 * half_angle);
                path.extend(arc.path_elements(OUTLINE_TOLERANCE));
            }
        }
    }
}

fn circular_arc(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> Arc {
    Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle,
        x_rotation: 0.0,
    }
}

/// Distance from the baseline of `side`'s basket, positive toward center court.
fn baseline_distance(g: &CourtGeometry, p: Point, side: Side) -> f64 {
    if side == Side::Left {
        p.x + g.half_length()
    } else {
        g.half_length() - p.x
    }
}
