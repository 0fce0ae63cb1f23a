// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated hosts shared by the Understory Scroll Snap demos.
//!
//! [`SimulatedStrip`] is a frame-stepped stand-in for a scrollable element:
//! smooth scroll requests move the visible region a fixed distance per
//! [`SimulatedStrip::tick`], which is enough to watch the controller ignore
//! transient children while an animation is in flight.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Vec2};
use understory_scroll_snap::{ScrollBehavior, SnapAxis, SnapContainer, SnapMount};

#[derive(Debug)]
struct Inner {
    axis: SnapAxis,
    viewport: Rect,
    labels: Vec<String>,
    // Child rects at scroll offset zero.
    rects: Vec<Rect>,
    offset: f64,
    destination: f64,
    speed: f64,
}

/// A scrollable strip of labelled slides with frame-stepped smooth scrolling.
#[derive(Clone, Debug)]
pub struct SimulatedStrip(Rc<RefCell<Inner>>);

impl SimulatedStrip {
    /// Lays out `slides` along `axis`, each `(label, extent)`, in a viewport
    /// `viewport` units long and 100 units across. Smooth scrolls advance by
    /// `speed` per tick.
    #[must_use]
    pub fn new(axis: SnapAxis, slides: &[(&str, f64)], viewport: f64, speed: f64) -> Self {
        let mut cursor = 0.0;
        let mut labels = Vec::with_capacity(slides.len());
        let mut rects = Vec::with_capacity(slides.len());
        for &(label, extent) in slides {
            let rect = match axis {
                SnapAxis::Horizontal => Rect::new(cursor, 0.0, cursor + extent, 100.0),
                SnapAxis::Vertical => Rect::new(0.0, cursor, 100.0, cursor + extent),
            };
            cursor += extent;
            labels.push(label.to_string());
            rects.push(rect);
        }
        let viewport = match axis {
            SnapAxis::Horizontal => Rect::new(0.0, 0.0, viewport, 100.0),
            SnapAxis::Vertical => Rect::new(0.0, 0.0, 100.0, viewport),
        };
        Self(Rc::new(RefCell::new(Inner {
            axis,
            viewport,
            labels,
            rects,
            offset: 0.0,
            destination: 0.0,
            speed: speed.max(f64::EPSILON),
        })))
    }

    /// Current scroll offset along the strip.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.0.borrow().offset
    }

    /// Whether a smooth scroll is still in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let inner = self.0.borrow();
        inner.offset != inner.destination
    }

    /// Advances an in-flight smooth scroll by one frame.
    ///
    /// Returns `true` if the strip moved, in which case the host should
    /// deliver a scroll event.
    pub fn tick(&self) -> bool {
        let mut inner = self.0.borrow_mut();
        let remaining = inner.destination - inner.offset;
        if remaining == 0.0 {
            return false;
        }
        let step = remaining.clamp(-inner.speed, inner.speed);
        inner.offset += step;
        true
    }

    /// Simulates the user dragging the strip to `offset`, cancelling any animation.
    pub fn drag_to(&self, offset: f64) {
        let mut inner = self.0.borrow_mut();
        inner.offset = offset;
        inner.destination = offset;
    }
}

impl SnapContainer for SimulatedStrip {
    type Child = String;

    fn bounds(&self) -> Rect {
        self.0.borrow().viewport
    }

    fn child_count(&self) -> usize {
        self.0.borrow().rects.len()
    }

    fn child(&self, index: usize) -> Option<String> {
        self.0.borrow().labels.get(index).cloned()
    }

    fn child_bounds(&self, index: usize) -> Option<Rect> {
        let inner = self.0.borrow();
        let shift = inner.axis.offset(inner.offset);
        inner.rects.get(index).map(|rect| *rect - shift)
    }

    fn snap_type(&self) -> Option<String> {
        let snap_type = match self.0.borrow().axis {
            SnapAxis::Horizontal => "x mandatory",
            SnapAxis::Vertical => "y mandatory",
        };
        Some(snap_type.to_string())
    }

    fn scroll_by(&mut self, delta: Vec2, behavior: ScrollBehavior) {
        let mut inner = self.0.borrow_mut();
        let distance = match inner.axis {
            SnapAxis::Horizontal => delta.x,
            SnapAxis::Vertical => delta.y,
        };
        match behavior {
            ScrollBehavior::Instant => {
                inner.offset += distance;
                inner.destination = inner.offset;
            }
            // Starts from the live position and replaces any animation in flight.
            ScrollBehavior::Smooth => inner.destination = inner.offset + distance,
        }
    }
}

/// A host element that may or may not contain a scroll container.
#[derive(Clone, Debug)]
pub struct SimulatedMount(pub Option<SimulatedStrip>);

impl SnapMount for SimulatedMount {
    type Container = SimulatedStrip;

    fn scroll_container(&self) -> Option<SimulatedStrip> {
        self.0.clone()
    }
}
