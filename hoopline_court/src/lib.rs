// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hoopline_court --heading-base-level=0

//! Hoopline Court: basketball court dimensions and coordinate framings.
//!
//! This crate holds the court dimension tables of four leagues and converts
//! spatial tracking data between the ways a court can be laid out in a plot.
//! It focuses on:
//! - [`CourtGeometry`]: per-league markings in feet or meters.
//! - [`CoordinateTransform`]: pure remapping between framings
//!   ([`Orientation`]), origin conventions ([`Origin`]) and y-axis
//!   conventions ([`Handedness`]), with percentage input via [`Scale`].
//! - [`extent`] and [`CourtZones`]: framing-aware court areas and shot zones.
//!
//! It does **not** draw anything. `hoopline_render` turns a geometry into
//! drawing primitives and `hoopline_overlay` builds heatmaps and lines on top
//! of transformed data.
//!
//! ## Converting tracking data
//!
//! ```rust
//! use hoopline_court::{CoordinateTransform, CourtGeometry, Handedness, Orientation, Origin};
//! use kurbo::Point;
//!
//! let court: CourtGeometry = CourtGeometry::from_names("nba", "ft").unwrap();
//!
//! // A provider reporting from the top-left corner with y growing downward.
//! let to_plot = CoordinateTransform::new(&court, Orientation::H, Orientation::V, Origin::TopLeft)
//!     .source_handedness(Handedness::Left)
//!     .target_origin(Origin::Center);
//!
//! // Center court in the provider's frame.
//! let p = to_plot.apply(Point::new(47.0, 25.0));
//! assert!(p.to_vec2().hypot() < 1e-9);
//! ```
//!
//! ## Half courts
//!
//! Half-court framings fold data from the hidden half through center court,
//! so shots at either basket land on the shown one:
//!
//! ```rust
//! use hoopline_court::{CourtGeometry, Orientation, Origin, transform};
//! use kurbo::Point;
//!
//! let court = CourtGeometry::default();
//! let shots = [Point::new(-40.0, 3.0), Point::new(40.0, -3.0)];
//! let folded = transform(&shots, Orientation::H, Orientation::HalfLeft, Origin::Center, &court);
//! assert_eq!(folded[0], folded[1]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: builds without `std` using Kurbo's `libm` support.
//! - `serde`: derives `Serialize`/`Deserialize` for the selector enums and
//!   [`CourtGeometry`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod error;
mod extent;
mod frame;
mod geometry;
mod transform;
mod zones;

pub use error::Error;
pub use extent::{extent, mask_out_of_bounds};
pub use frame::{Handedness, Orientation, Origin, Scale, Side};
pub use geometry::{CourtGeometry, League, METERS_PER_FOOT, Units};
pub use transform::{CoordinateTransform, normalize_side, transform, transform_xy};
pub use zones::{CourtZones, Zone};
