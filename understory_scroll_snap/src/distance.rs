// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index clamping and travel distance between snapped children.

/// Clamps a requested index into `0..len`.
///
/// Returns `None` when there are no children to snap to.
#[must_use]
pub fn clamp_index(requested: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    Some(usize::try_from(requested).map_or(0, |idx| idx.min(last)))
}

/// Signed distance to travel when moving the snap position from `from` to `to`.
///
/// Walks one child at a time and accumulates the extent of every child that is
/// passed over: children `from..to` when moving forward, `to..from` when moving
/// backward. The result is positive for forward travel, negative for backward
/// travel, and zero when `from == to`.
///
/// `extent_of` is called once per passed child and should return a
/// non-negative size along the active axis.
///
/// ```
/// use understory_scroll_snap::travel_distance;
///
/// let widths = [100.0, 120.0, 80.0];
/// assert_eq!(travel_distance(|i| widths[i], 0, 2), 220.0);
/// assert_eq!(travel_distance(|i| widths[i], 2, 1), -120.0);
/// assert_eq!(travel_distance(|i| widths[i], 1, 1), 0.0);
/// ```
pub fn travel_distance(mut extent_of: impl FnMut(usize) -> f64, from: usize, to: usize) -> f64 {
    let (start, end, sign) = if to >= from {
        (from, to, 1.0)
    } else {
        (to, from, -1.0)
    };
    let mut distance = 0.0;
    for idx in start..end {
        distance += extent_of(idx).max(0.0);
    }
    sign * distance
}
