// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::frame::Side;
use crate::{CourtGeometry, Orientation, Origin};

/// The court area shown by `orientation`, in that framing's coordinates.
///
/// Full-court framings cover the whole playing rectangle. Half-court framings
/// cover the shown half, ending at the center line. The origin offset is
/// taken from the full framing rectangle, so a half court keeps the
/// coordinates it has in the corresponding full court.
///
/// ```
/// use hoopline_court::{CourtGeometry, Orientation, Origin, extent};
/// use kurbo::Rect;
///
/// let court = CourtGeometry::default();
/// assert_eq!(
///     extent(&court, Orientation::HalfUp, Origin::Center),
///     Rect::new(-25.0, 0.0, 25.0, 47.0)
/// );
/// ```
#[must_use]
pub fn extent(geometry: &CourtGeometry, orientation: Orientation, origin: Origin) -> Rect {
    let full = geometry.extent();
    let canonical = match orientation.shown_side() {
        Side::Both => full,
        Side::Left => full.with_size((geometry.half_length(), geometry.width)),
        Side::Right => Rect::new(0.0, full.y0, full.x1, full.y1),
    };
    let size = orientation.frame_size(geometry.length, geometry.width);
    orientation
        .display_affine()
        .transform_rect_bbox(canonical)
        + origin.center_offset(size)
}

/// Flags which points fall inside [`extent`], edges included.
///
/// `true` means the point is on the shown court.
#[must_use]
pub fn mask_out_of_bounds(
    points: &[Point],
    geometry: &CourtGeometry,
    orientation: Orientation,
    origin: Origin,
) -> Vec<bool> {
    let area = extent(geometry, orientation, origin);
    points
        .iter()
        .map(|p| p.x >= area.x0 && p.x <= area.x1 && p.y >= area.y0 && p.y <= area.y1)
        .collect()
}
