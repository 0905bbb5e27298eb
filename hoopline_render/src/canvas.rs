// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;

use crate::court::CourtDrawing;
use crate::primitive::Primitive;

/// A host drawing surface that consumes primitives.
///
/// Coordinates are court coordinates with y pointing up. Hosts map the view
/// rectangle onto their own surface.
pub trait Canvas {
    /// Sets the region of court coordinates the host should show.
    fn set_view(&mut self, view: Rect);

    /// Draws one primitive on top of everything drawn so far.
    fn draw(&mut self, primitive: &Primitive);

    /// Draws primitives in order.
    #[inline]
    fn draw_all<'a, I>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = &'a Primitive>,
        Self: Sized,
    {
        for primitive in primitives {
            self.draw(primitive);
        }
    }

    /// Sets the view to the drawing's bounds and draws its primitives.
    #[inline]
    fn draw_court(&mut self, drawing: &CourtDrawing)
    where
        Self: Sized,
    {
        self.set_view(drawing.bounds);
        self.draw_all(&drawing.primitives);
    }
}

/// Event recorded by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// The view was set.
    View(Rect),
    /// A primitive was drawn.
    Draw(Primitive),
}

/// A canvas that records every call, for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    events: Vec<CanvasEvent>,
}

impl RecordingCanvas {
    /// Returns all recorded events.
    pub fn events(&self) -> &[CanvasEvent] {
        &self.events
    }

    /// Iterates over the drawn primitives.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.events.iter().filter_map(|e| match e {
            CanvasEvent::Draw(p) => Some(p),
            CanvasEvent::View(_) => None,
        })
    }

    /// The most recently set view.
    pub fn view(&self) -> Option<Rect> {
        self.events.iter().rev().find_map(|e| match e {
            CanvasEvent::View(r) => Some(*r),
            CanvasEvent::Draw(_) => None,
        })
    }

    /// Clears recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn set_view(&mut self, view: Rect) {
        self.events.push(CanvasEvent::View(view));
    }

    fn draw(&mut self, primitive: &Primitive) {
        self.events.push(CanvasEvent::Draw(primitive.clone()));
    }
}
