// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits a host implements to expose its scroll container to the controller.
//!
//! The controller never measures or scrolls anything itself. All layout reads
//! (bounding rectangles, computed style) and scroll writes go through these
//! traits, which keeps the controller testable against an in-memory strip and
//! lets the same logic drive a DOM element, a retained widget tree, or a
//! custom renderer.
//!
//! All rectangles must share one coordinate space, typically the viewport
//! space that `getBoundingClientRect` reports in a browser.

use alloc::string::String;

use kurbo::{Rect, Vec2};

/// How a scroll request should be applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Jump to the destination without animation.
    Instant,
    /// Animate towards the destination.
    #[default]
    Smooth,
}

/// A scrollable container whose direct children snap into view.
pub trait SnapContainer {
    /// Handle used to report a child as the target of a layout change.
    type Child: Clone;

    /// Visible region of the container.
    fn bounds(&self) -> Rect;

    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// Handle of the child at `index`, or `None` if out of range.
    fn child(&self, index: usize) -> Option<Self::Child>;

    /// Layout rectangle of the child at `index`, or `None` if out of range.
    fn child_bounds(&self, index: usize) -> Option<Rect>;

    /// Computed `scroll-snap-type` of the container, if the host has one.
    fn snap_type(&self) -> Option<String>;

    /// Scrolls the container by a relative `delta`.
    fn scroll_by(&mut self, delta: Vec2, behavior: ScrollBehavior);
}

/// The element the controller is attached to.
///
/// Its only job is to locate the scroll container, the descendant marked with
/// `name="scroll-container"` (see [`SCROLL_CONTAINER_NAME`](crate::SCROLL_CONTAINER_NAME)).
pub trait SnapMount {
    /// Container type produced by the lookup.
    type Container: SnapContainer;

    /// Finds the marked scroll container, or `None` if the markup lacks one.
    fn scroll_container(&self) -> Option<Self::Container>;
}
