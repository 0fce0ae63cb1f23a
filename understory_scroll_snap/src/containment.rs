// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment tests between a visible region and child layout rectangles.

use kurbo::{Point, Rect};

/// Returns `true` if `inner` lies entirely within `outer`.
///
/// Both corners are compared per axis and edges are inclusive, so a child that
/// exactly fills the visible region counts as contained.
#[must_use]
pub fn contains(outer: Rect, inner: Rect) -> bool {
    let (outer_min, outer_max) = corners(outer);
    let (inner_min, inner_max) = corners(inner);
    outer_min.x <= inner_min.x
        && outer_min.y <= inner_min.y
        && outer_max.x >= inner_max.x
        && outer_max.y >= inner_max.y
}

/// Index of the first rectangle, in iteration order, contained by `viewport`.
///
/// The scan stops at the first match, so when several children fit inside the
/// viewport (children smaller than the visible region) the lowest index wins.
pub fn first_contained<I>(viewport: Rect, children: I) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    children
        .into_iter()
        .position(|child| contains(viewport, child))
}

// Top-left and bottom-right corners. Layout rectangles are not guaranteed to be
// normalized, so take the extremes instead of `origin()` and `x1`/`y1`.
fn corners(rect: Rect) -> (Point, Point) {
    let rect = rect.abs();
    (Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1))
}
