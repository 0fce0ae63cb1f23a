// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap axis resolution and per-axis geometry helpers.

use kurbo::{Rect, Vec2};

/// Axis along which the scroll container snaps its children.
///
/// The axis is resolved once, when the controller activates, from the
/// container's computed `scroll-snap-type` and is never re-read afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SnapAxis {
    /// Children are laid out left to right; extents are widths.
    #[default]
    Horizontal,
    /// Children are laid out top to bottom; extents are heights.
    Vertical,
}

impl SnapAxis {
    /// Parses a computed `scroll-snap-type` value.
    ///
    /// Only the axis keyword, the first whitespace-separated token, is
    /// inspected: `x` is horizontal and `y` is vertical. The strictness keyword
    /// that may follow (`mandatory`, `proximity`) is ignored. Returns `None`
    /// for any other axis keyword (for example `none`, `both`, or `block`).
    ///
    /// ```
    /// use understory_scroll_snap::SnapAxis;
    ///
    /// assert_eq!(SnapAxis::from_snap_type("x mandatory"), Some(SnapAxis::Horizontal));
    /// assert_eq!(SnapAxis::from_snap_type("y proximity"), Some(SnapAxis::Vertical));
    /// assert_eq!(SnapAxis::from_snap_type("none"), None);
    /// ```
    #[must_use]
    pub fn from_snap_type(value: &str) -> Option<Self> {
        let keyword = value.split_whitespace().next()?;
        if keyword.eq_ignore_ascii_case("x") {
            Some(Self::Horizontal)
        } else if keyword.eq_ignore_ascii_case("y") {
            Some(Self::Vertical)
        } else {
            None
        }
    }

    /// Resolves the axis from an optional style value, falling back to
    /// [`SnapAxis::Horizontal`].
    ///
    /// The fallback is not an error; it is reported through `log::warn!`.
    #[must_use]
    pub fn resolve(snap_type: Option<&str>) -> Self {
        match snap_type.and_then(Self::from_snap_type) {
            Some(axis) => axis,
            None => {
                log::warn!(
                    "scroll container has no usable scroll-snap-type ({snap_type:?}); \
                     defaulting to horizontal snapping"
                );
                Self::Horizontal
            }
        }
    }

    /// Size of `rect` along this axis.
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Leading edge of `rect` along this axis.
    #[must_use]
    pub fn leading(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.min_x(),
            Self::Vertical => rect.min_y(),
        }
    }

    /// A scroll delta of `distance` along this axis only.
    #[must_use]
    pub const fn offset(self, distance: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(distance, 0.0),
            Self::Vertical => Vec2::new(0.0, distance),
        }
    }
}
