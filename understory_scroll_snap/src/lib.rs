// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_snap --heading-base-level=0

//! Understory Scroll Snap: a headless controller for scroll-snap carousels.
//!
//! A scroll-snap carousel is a scrollable container whose direct children snap
//! into view one at a time. This crate tracks which child is currently snapped,
//! navigates between children, and reports changes. It does not lay anything
//! out or animate anything: the host owns the container, measures its children,
//! and performs scrolls, and exposes those services through two small traits.
//!
//! ## Overview
//!
//! - [`SnapMount`] / [`SnapContainer`]: the host side. A mount locates the scroll
//!   container (the descendant marked `name="scroll-container"`); the container
//!   reports its visible rectangle, its children's layout rectangles, its
//!   computed `scroll-snap-type`, and accepts relative scroll requests.
//! - [`ScrollSnap`]: the controller. It composes three responsibilities:
//!   - **Initializer** ([`ScrollSnap::attach`]): locates the container, resolves
//!     the [`SnapAxis`] once, jumps to [`SnapConfig::init_slide`] without
//!     animation, and activates.
//!   - **Observer** ([`ScrollSnap::handle_scroll`]): finds the first child fully
//!     contained in the visible region and emits a [`LayoutChangeEvent`] when
//!     it differs from the current index.
//!   - **Navigator** ([`ScrollSnap::change_layout_by_index`],
//!     [`ScrollSnap::previous_layout`], [`ScrollSnap::next_layout`]): sums the
//!     extents of the children between the current index and the (clamped)
//!     destination and issues one smooth, relative scroll.
//! - [`IntentTracker`]: serializes navigation against in-flight smooth scrolls
//!   so transient children passed over by an animation are not reported.
//!
//! ## Lifecycle
//!
//! A controller starts [`Lifecycle::Uninitialized`]. Navigation requested in
//! that state is queued (the latest request wins) and replayed on activation.
//! [`ScrollSnap::attach`] moves it to [`Lifecycle::Active`] exactly once; it
//! fails with [`SnapError::MissingScrollContainer`] or
//! [`SnapError::InitialIndexOutOfRange`] and leaves the controller untouched.
//! [`ScrollSnap::detach`] hands the container back for teardown.
//!
//! ## Minimal example
//!
//! Three 100px slides in a 100px wide horizontal strip:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Rect, Vec2};
//! use understory_scroll_snap::{
//!     Navigation, ScrollBehavior, ScrollSnap, SnapConfig, SnapContainer, SnapMount,
//! };
//!
//! #[derive(Clone)]
//! struct Strip {
//!     offset: Rc<Cell<f64>>,
//! }
//!
//! impl SnapContainer for Strip {
//!     type Child = usize;
//!
//!     fn bounds(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 100.0, 100.0)
//!     }
//!     fn child_count(&self) -> usize {
//!         3
//!     }
//!     fn child(&self, index: usize) -> Option<usize> {
//!         (index < 3).then_some(index)
//!     }
//!     fn child_bounds(&self, index: usize) -> Option<Rect> {
//!         let x = index as f64 * 100.0 - self.offset.get();
//!         (index < 3).then(|| Rect::new(x, 0.0, x + 100.0, 100.0))
//!     }
//!     fn snap_type(&self) -> Option<String> {
//!         Some("x mandatory".into())
//!     }
//!     fn scroll_by(&mut self, delta: Vec2, _behavior: ScrollBehavior) {
//!         self.offset.set(self.offset.get() + delta.x);
//!     }
//! }
//!
//! struct Host(Strip);
//!
//! impl SnapMount for Host {
//!     type Container = Strip;
//!     fn scroll_container(&self) -> Option<Strip> {
//!         Some(self.0.clone())
//!     }
//! }
//!
//! let strip = Strip { offset: Rc::new(Cell::new(0.0)) };
//! let mut snap = ScrollSnap::new(Host(strip.clone()), SnapConfig::default());
//! snap.attach().unwrap();
//!
//! let nav = snap.next_layout().unwrap();
//! assert_eq!(nav, Navigation::Scrolled { target: 1, delta: Vec2::new(100.0, 0.0) });
//!
//! // The host forwards the resulting scroll event.
//! let event = snap.handle_scroll().unwrap();
//! assert_eq!(event.index(), 1);
//! assert_eq!(snap.current_index(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `web`: enables the [`web`] module, a DOM adapter over `web-sys`.
//!
//! All rectangles handed to the controller must share one coordinate space.
//! Diagnostics go through the `log` facade: a warning when the snap axis cannot
//! be resolved, debug records for activation, navigation, and layout changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
mod containment;
mod distance;
mod error;
mod event;
mod host;
mod intent;
mod snap;

#[cfg(feature = "web")]
pub mod web;

pub use axis::SnapAxis;
pub use config::{INIT_SLIDE_ATTR, ON_LAYOUT_CHANGE_ATTR, SCROLL_CONTAINER_NAME, SnapConfig};
pub use containment::{contains, first_contained};
pub use distance::{clamp_index, travel_distance};
pub use error::{Result, SnapError};
pub use event::{
    EventInit, LAYOUT_CHANGE, LAYOUT_CHANGE_INIT, LayoutChange, LayoutChangeEvent,
    LayoutChangeHandler,
};
pub use host::{ScrollBehavior, SnapContainer, SnapMount};
pub use intent::{IntentTracker, ScrollIntent};
pub use snap::{ChildOf, Lifecycle, Navigation, ScrollSnap};
