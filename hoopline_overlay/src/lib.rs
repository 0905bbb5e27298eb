// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hoopline_overlay --heading-base-level=0

//! Hoopline Overlay: data drawn on top of a court.
//!
//! Everything here produces [`Primitive`]s tagged
//! [`Element::Overlay`](hoopline_render::Element::Overlay), ready for the
//! same [`Canvas`](hoopline_render::Canvas) the court was drawn on:
//!
//! - [`CourtGrid`] lays uniform bins over the court as shown in a framing
//!   and builds weighted or density [`Histogram`]s.
//! - [`build_heatmap`] bins shot locations, optionally Gaussian-smooths them
//!   and colors each cell with a [`ColorRamp`].
//! - [`build_line`] and [`build_lines`] turn passes and movements into
//!   polylines, with comet (growing width) and fade (growing opacity)
//!   profiles.
//!
//! Inputs are points already in the display frame; use
//! [`hoopline_court::CoordinateTransform`] to bring raw data there first.
//!
//! # Example
//!
//! ```
//! use hoopline_court::{CourtGeometry, Orientation, Origin};
//! use hoopline_overlay::{ColorRamp, HeatmapOptions, build_heatmap};
//! use kurbo::Point;
//!
//! let court = CourtGeometry::default();
//! let shots = [Point::new(-42.0, 1.0), Point::new(-30.0, -12.0)];
//! let options = HeatmapOptions::default()
//!     .with_bins(47, 50)
//!     .with_ramp(ColorRamp::named("doppler").unwrap());
//! let heatmap =
//!     build_heatmap(&shots, &court, Orientation::HalfLeft, Origin::Center, &options).unwrap();
//! assert_eq!(heatmap.primitives.len(), 47 * 50);
//! ```
//!
//! [`Primitive`]: hoopline_render::Primitive

mod grid;
mod heatmap;
mod lines;
mod ramp;

pub use grid::{CourtGrid, Histogram};
pub use heatmap::{Heatmap, HeatmapOptions, TRUNCATE_SIGMAS, build_heatmap, smooth};
pub use lines::{LineOptions, LineStyle, build_line, build_lines};
pub use ramp::ColorRamp;
