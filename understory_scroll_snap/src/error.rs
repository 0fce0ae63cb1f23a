// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for scroll snap configuration and lifecycle failures.

use alloc::string::String;

/// Errors raised by [`ScrollSnap`](crate::ScrollSnap) and [`SnapConfig`](crate::SnapConfig).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapError {
    /// The mount has no descendant marked as the scroll container.
    #[error("no scroll container found; mark one descendant with name=\"scroll-container\"")]
    MissingScrollContainer,
    /// The configured initial index does not name an existing child.
    #[error("initial index {index} is out of range for {len} children")]
    InitialIndexOutOfRange {
        /// Configured index.
        index: i64,
        /// Number of children in the scroll container.
        len: usize,
    },
    /// A configuration attribute could not be parsed.
    #[error("invalid value {value:?} for attribute `{name}`")]
    InvalidAttribute {
        /// Attribute name.
        name: &'static str,
        /// Raw attribute value.
        value: String,
    },
    /// The controller was detached and no longer drives its container.
    #[error("scroll snap controller is detached")]
    Detached,
    /// The controller was re-entered while it was already running, for example
    /// by navigating from inside a layout change handler through a shared handle.
    #[error("scroll snap controller is busy")]
    Reentrant,
}

/// Result alias for scroll snap operations.
pub type Result<T, E = SnapError> = core::result::Result<T, E>;
