// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout change notifications.
//!
//! A [`LayoutChangeEvent`] is produced whenever the contained child changes.
//! The controller runs the registered [`LayoutChangeHandler`] on it and then
//! hands it back to the caller, so hosts can re-dispatch it through their own
//! event system (for example as a DOM `CustomEvent`) using the flags in
//! [`EventInit`].
//!
//! ## Default prevention
//!
//! The event is cancelable, and handlers may call
//! [`LayoutChangeEvent::prevent_default`]. The controller has already updated
//! its current index by the time handlers run, so prevention does not undo the
//! change; it is only recorded on the event for the caller to inspect.

use alloc::boxed::Box;

/// Name of the layout change event.
pub const LAYOUT_CHANGE: &str = "layoutchange";

/// Propagation flags for an emitted event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EventInit {
    /// Whether the event propagates to ancestors.
    pub bubbles: bool,
    /// Whether handlers may prevent the default action.
    pub cancelable: bool,
    /// Whether the event crosses shadow-tree boundaries.
    pub composed: bool,
}

/// Flags used for every [`LAYOUT_CHANGE`] event.
pub const LAYOUT_CHANGE_INIT: EventInit = EventInit {
    bubbles: false,
    cancelable: true,
    composed: true,
};

/// Payload of a layout change: the newly contained child and its index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutChange<T> {
    /// Index of the child among the scroll container's direct children.
    pub index: usize,
    /// Host handle of that child.
    pub target: T,
}

/// A layout change together with its propagation flags and cancelation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutChangeEvent<T> {
    detail: LayoutChange<T>,
    init: EventInit,
    default_prevented: bool,
}

impl<T> LayoutChangeEvent<T> {
    /// Creates an event with [`LAYOUT_CHANGE_INIT`] flags.
    #[must_use]
    pub const fn new(index: usize, target: T) -> Self {
        Self {
            detail: LayoutChange { index, target },
            init: LAYOUT_CHANGE_INIT,
            default_prevented: false,
        }
    }

    /// Event name, always [`LAYOUT_CHANGE`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        LAYOUT_CHANGE
    }

    /// The change payload.
    #[must_use]
    pub const fn detail(&self) -> &LayoutChange<T> {
        &self.detail
    }

    /// Consumes the event, returning its payload.
    #[must_use]
    pub fn into_detail(self) -> LayoutChange<T> {
        self.detail
    }

    /// Index of the newly contained child.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.detail.index
    }

    /// Host handle of the newly contained child.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.detail.target
    }

    /// Propagation flags.
    #[must_use]
    pub const fn init(&self) -> EventInit {
        self.init
    }

    /// Marks the default action as prevented. Ignored for non-cancelable events.
    pub fn prevent_default(&mut self) {
        if self.init.cancelable {
            self.default_prevented = true;
        }
    }

    /// Whether a handler prevented the default action.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Callback invoked for every layout change.
pub type LayoutChangeHandler<T> = Box<dyn FnMut(&mut LayoutChangeEvent<T>)>;
