// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hoopline_render --heading-base-level=0

//! Hoopline Render: basketball court outlines as drawing primitives.
//!
//! This crate turns a [`CourtGeometry`] into a flat list of styled
//! primitives (lines, rectangles, circles, arcs, polylines and paths) and
//! hands them to a host drawing surface through the [`Canvas`] trait. It sits
//! between the court model and concrete output:
//!
//! - **Court model**: dimensions and framings live in `hoopline_court`.
//! - **Primitives (this crate)**: [`Primitive`] = [`Shape`] + [`Style`] +
//!   [`Element`], plus [`render_court`] which lays out every court marking
//!   for a framing.
//! - **Canvases**: hosts implement [`Canvas`]. `hoopline_svg` ships an SVG
//!   canvas and [`RecordingCanvas`] records calls for tests.
//!
//! Primitives are expressed in court units with y pointing up. Stroke widths
//! are in court units too, so lines keep their regulation width at any zoom.
//!
//! # Example
//!
//! ```
//! use hoopline_court::{CourtGeometry, Orientation, Origin};
//! use hoopline_render::{Canvas, CourtStyle, RecordingCanvas, render_court};
//! use peniko::Color;
//!
//! let court = CourtGeometry::default();
//! let style = CourtStyle::default().with_paint_color(Some(Color::from_rgba8(200, 60, 60, 255)));
//! let drawing = render_court(&court, Orientation::V, Origin::Center, &style).unwrap();
//!
//! let mut canvas = RecordingCanvas::default();
//! canvas.draw_court(&drawing);
//! assert_eq!(canvas.view(), Some(drawing.bounds));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod canvas;
mod court;
mod primitive;
mod style;

pub use canvas::{Canvas, CanvasEvent, RecordingCanvas};
pub use court::{CourtDrawing, render_court, zone_primitive};
pub use primitive::{Element, Polyline, Primitive, Shape, StrokeStyle, Style};
pub use style::{CourtStyle, DEFAULT_PADDING_FEET};

pub use hoopline_court::{CourtGeometry, Error};
