// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::frame::{Handedness, Orientation, Origin, Scale, Side, fold_onto};
use crate::{CourtGeometry, Error};

/// Remaps spatial data between court framings.
///
/// A `CoordinateTransform` converts points expressed in one framing, origin
/// convention and handedness into another. Every conversion goes through the
/// canonical frame: horizontal, origin at center court, y pointing up.
///
/// - Vertical framings are a quarter turn of the horizontal one.
/// - Half-court framings fold points from the hidden half through center
///   court, so converting into a half framing is not invertible for points
///   in the hidden half.
/// - Origins are corners or the center of the framing rectangle, which is
///   `(length, width)` for horizontal framings and `(width, length)` for
///   vertical ones.
/// - Left-handed input is mirrored first. Percentage input is then scaled
///   onto the framing rectangle, before the origin is moved.
///
/// ```
/// use hoopline_court::{CoordinateTransform, CourtGeometry, Orientation, Origin};
/// use kurbo::Point;
///
/// let court = CourtGeometry::default();
/// let t = CoordinateTransform::new(&court, Orientation::H, Orientation::V, Origin::Center);
/// assert_eq!(t.apply(Point::new(47.0, 25.0)), Point::new(-25.0, 47.0));
/// assert_eq!(t.inverse().apply(Point::new(-25.0, 47.0)), Point::new(47.0, 25.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    from: Orientation,
    to: Orientation,
    source_origin: Origin,
    target_origin: Origin,
    source_handedness: Handedness,
    target_handedness: Handedness,
    source_scale: Scale,
    target_scale: Scale,
    source_offset: Vec2,
    target_offset: Vec2,
    length: f64,
    width: f64,
}

impl CoordinateTransform {
    /// Creates a transform from `from` to `to`, both using `origin`.
    ///
    /// Source and target are right-handed until configured otherwise.
    #[must_use]
    pub fn new(
        geometry: &CourtGeometry,
        from: Orientation,
        to: Orientation,
        origin: Origin,
    ) -> Self {
        let length = geometry.length;
        let width = geometry.width;
        Self {
            from,
            to,
            source_origin: origin,
            target_origin: origin,
            source_handedness: Handedness::Right,
            target_handedness: Handedness::Right,
            source_scale: Scale::Court,
            target_scale: Scale::Court,
            source_offset: origin.center_offset(from.frame_size(length, width)),
            target_offset: origin.center_offset(to.frame_size(length, width)),
            length,
            width,
        }
    }

    /// Sets the handedness of incoming data.
    #[must_use]
    pub fn source_handedness(mut self, handedness: Handedness) -> Self {
        self.source_handedness = handedness;
        self
    }

    /// Sets the handedness of produced data.
    #[must_use]
    pub fn target_handedness(mut self, handedness: Handedness) -> Self {
        self.target_handedness = handedness;
        self
    }

    /// Sets the units of incoming data.
    #[must_use]
    pub fn source_scale(mut self, scale: Scale) -> Self {
        self.source_scale = scale;
        self
    }

    /// Sets the units of produced data.
    #[must_use]
    pub fn target_scale(mut self, scale: Scale) -> Self {
        self.target_scale = scale;
        self
    }

    /// Uses a different origin convention for the output than for the input.
    #[must_use]
    pub fn target_origin(mut self, origin: Origin) -> Self {
        self.target_origin = origin;
        self.target_offset = origin.center_offset(self.to.frame_size(self.length, self.width));
        self
    }

    /// Source framing.
    #[must_use]
    pub fn from(&self) -> Orientation {
        self.from
    }

    /// Target framing.
    #[must_use]
    pub fn to(&self) -> Orientation {
        self.to
    }

    /// Returns the transform going the other way.
    ///
    /// Composing a transform with its inverse is the identity for points in
    /// the half shown by every half-court framing involved.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            source_origin: self.target_origin,
            target_origin: self.source_origin,
            source_handedness: self.target_handedness,
            target_handedness: self.source_handedness,
            source_scale: self.target_scale,
            target_scale: self.source_scale,
            source_offset: self.target_offset,
            target_offset: self.source_offset,
            length: self.length,
            width: self.width,
        }
    }

    /// Maps a source point into the target framing.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        let p = self.source_handedness.mirror(p);
        let p = self.source_scale.to_court(p, self.from.frame_size(self.length, self.width))
            - self.source_offset;
        let canonical = self.from.to_canonical(p);
        let out = self.to.from_canonical(canonical) + self.target_offset;
        let out = self
            .target_scale
            .from_court(out, self.to.frame_size(self.length, self.width));
        self.target_handedness.mirror(out)
    }

    /// Maps a slice of points. Empty input gives empty output.
    #[must_use]
    pub fn apply_points(&self, points: &[Point]) -> Vec<Point> {
        log::trace!(
            "transform {} points {}/{} -> {}/{}",
            points.len(),
            self.from,
            self.source_origin,
            self.to,
            self.target_origin
        );
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// Maps parallel coordinate slices.
    ///
    /// Fails with [`Error::ShapeMismatch`] if the slices differ in length.
    pub fn apply_xy(&self, xs: &[f64], ys: &[f64]) -> Result<(Vec<f64>, Vec<f64>), Error> {
        Error::check_same_len("xs", xs.len(), "ys", ys.len())?;
        log::trace!(
            "transform {} coordinates {} -> {}",
            xs.len(),
            self.from,
            self.to
        );
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| {
                let p = self.apply(Point::new(x, y));
                (p.x, p.y)
            })
            .unzip())
    }
}

/// Converts `points` from one framing to another using the same origin.
///
/// ```
/// use hoopline_court::{CourtGeometry, Orientation, Origin, transform};
/// use kurbo::Point;
///
/// let court = CourtGeometry::default();
/// let out = transform(
///     &[Point::new(30.0, 10.0)],
///     Orientation::H,
///     Orientation::HalfLeft,
///     Origin::Center,
///     &court,
/// );
/// assert_eq!(out, [Point::new(-30.0, -10.0)]);
/// ```
#[must_use]
pub fn transform(
    points: &[Point],
    from: Orientation,
    to: Orientation,
    origin: Origin,
    geometry: &CourtGeometry,
) -> Vec<Point> {
    CoordinateTransform::new(geometry, from, to, origin).apply_points(points)
}

/// Converts parallel `xs`/`ys` slices from one framing to another.
///
/// Fails with [`Error::ShapeMismatch`] if the slices differ in length.
pub fn transform_xy(
    xs: &[f64],
    ys: &[f64],
    from: Orientation,
    to: Orientation,
    origin: Origin,
    geometry: &CourtGeometry,
) -> Result<(Vec<f64>, Vec<f64>), Error> {
    CoordinateTransform::new(geometry, from, to, origin).apply_xy(xs, ys)
}

/// Folds every point onto one half of the court through center court.
///
/// Points are in the horizontal, center-origin frame. [`Side::Both`] leaves
/// the data unchanged.
#[must_use]
pub fn normalize_side(points: &[Point], side: Side) -> Vec<Point> {
    points.iter().map(|&p| fold_onto(p, side)).collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::{CoordinateTransform, normalize_side, transform, transform_xy};
    use crate::{
        CourtGeometry, Error, Handedness, League, Orientation, Origin, Scale, Side, Units,
    };

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn top_left_horizontal_to_center() {
        let court = CourtGeometry::default();
        let t = CoordinateTransform::new(&court, Orientation::H, Orientation::H, Origin::TopLeft)
            .target_origin(Origin::Center);
        // Top-left origin puts the court in x >= 0, y <= 0.
        assert!(close(t.apply(Point::new(0.0, 0.0)), Point::new(-47.0, 25.0)));
        assert!(close(
            t.apply(Point::new(94.0, -50.0)),
            Point::new(47.0, -25.0)
        ));
        assert!(close(t.apply(Point::new(47.0, -25.0)), Point::ZERO));
    }

    #[test]
    fn vertical_origin_uses_swapped_frame() {
        let court = CourtGeometry::default();
        let t = CoordinateTransform::new(&court, Orientation::H, Orientation::V, Origin::BottomLeft);
        // Bottom-left corner of the horizontal court is the bottom-right corner
        // of the vertical one.
        assert!(close(t.apply(Point::ZERO), Point::new(50.0, 0.0)));
    }

    #[test]
    fn left_handed_source_is_mirrored() {
        let court = CourtGeometry::default();
        let t = CoordinateTransform::new(&court, Orientation::H, Orientation::H, Origin::Center)
            .source_handedness(Handedness::Left);
        assert_eq!(t.apply(Point::new(3.0, 4.0)), Point::new(3.0, -4.0));
        let back = t.inverse();
        assert_eq!(back.apply(Point::new(3.0, -4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn percent_tracking_lands_on_court_units() {
        let court = CourtGeometry::default();
        let t = CoordinateTransform::new(&court, Orientation::H, Orientation::H, Origin::TopLeft)
            .source_handedness(Handedness::Left)
            .source_scale(Scale::Percent)
            .target_origin(Origin::Center);
        // Provider convention: x / 100 * length - length / 2 and, after the
        // y flip, y / 100 * width + width / 2.
        for (x, y) in [(0.0, 0.0), (50.0, 50.0), (100.0, 100.0), (12.5, 80.0)] {
            let expected = Point::new(x / 100.0 * 94.0 - 47.0, -y / 100.0 * 50.0 + 25.0);
            assert!(close(t.apply(Point::new(x, y)), expected));
        }
        assert!(close(t.apply(Point::new(50.0, 50.0)), Point::ZERO));

        let back = t.inverse();
        let p = Point::new(12.5, 80.0);
        assert!(close(back.apply(t.apply(p)), p));
    }

    #[test]
    fn percent_output_uses_target_frame() {
        let court = CourtGeometry::default();
        let t = CoordinateTransform::new(&court, Orientation::H, Orientation::V, Origin::Center)
            .target_origin(Origin::BottomLeft)
            .target_scale(Scale::Percent);
        // Center court is the middle of the vertical frame.
        assert!(close(t.apply(Point::ZERO), Point::new(50.0, 50.0)));
    }

    #[test]
    fn half_framings_restrict_sign() {
        let court = CourtGeometry::default();
        let pts = vec![
            Point::new(-30.0, 4.0),
            Point::new(30.0, 4.0),
            Point::new(0.0, -2.0),
        ];
        let hl = transform(&pts, Orientation::H, Orientation::HalfLeft, Origin::Center, &court);
        assert!(hl.iter().all(|p| p.x <= 0.0));
        let hr = transform(&pts, Orientation::H, Orientation::HalfRight, Origin::Center, &court);
        assert!(hr.iter().all(|p| p.x >= 0.0));
        assert_eq!(hl[2], Point::new(0.0, -2.0));
        assert_eq!(hr[2], Point::new(0.0, -2.0));
    }

    #[test]
    fn vertical_halves() {
        let court = CourtGeometry::default();
        let pts = [Point::new(-30.0, 4.0), Point::new(30.0, 4.0)];
        let vu = transform(&pts, Orientation::H, Orientation::HalfUp, Origin::Center, &court);
        assert!(vu.iter().all(|p| p.y >= 0.0));
        let vd = transform(&pts, Orientation::H, Orientation::HalfDown, Origin::Center, &court);
        assert!(vd.iter().all(|p| p.y <= 0.0));
    }

    #[test]
    fn xy_slices_must_match() {
        let court = CourtGeometry::default();
        let err = transform_xy(
            &[1.0, 2.0],
            &[1.0],
            Orientation::H,
            Orientation::V,
            Origin::Center,
            &court,
        );
        assert_eq!(
            err,
            Err(Error::ShapeMismatch {
                left: "xs",
                left_len: 2,
                right: "ys",
                right_len: 1
            })
        );
        let (xs, ys) = transform_xy(
            &[],
            &[],
            Orientation::H,
            Orientation::V,
            Origin::Center,
            &court,
        )
        .unwrap();
        assert!(xs.is_empty() && ys.is_empty());
    }

    #[test]
    fn meters_scale_corner_origins() {
        let ft = CourtGeometry::new(League::Nba, Units::Feet);
        let m = CourtGeometry::new(League::Nba, Units::Meters);
        let p = Point::new(10.0, 5.0);
        let a = transform(&[p], Orientation::H, Orientation::V, Origin::TopRight, &ft)[0];
        let b = transform(
            &[(p.to_vec2() * 0.3048).to_point()],
            Orientation::H,
            Orientation::V,
            Origin::TopRight,
            &m,
        )[0];
        assert!(close((a.to_vec2() * 0.3048).to_point(), b));
    }

    #[test]
    fn normalize_folds_through_center() {
        let pts = [Point::new(10.0, 3.0), Point::new(-10.0, 3.0)];
        let left: Vec<Point> = normalize_side(&pts, Side::Left);
        assert_eq!(left, [Point::new(-10.0, -3.0), Point::new(-10.0, 3.0)]);
        let right = normalize_side(&pts, Side::Right);
        assert_eq!(right, [Point::new(10.0, 3.0), Point::new(10.0, -3.0)]);
        assert_eq!(normalize_side(&pts, Side::Both), pts);
    }
}
