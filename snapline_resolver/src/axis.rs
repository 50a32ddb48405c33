// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-axis projection of rectangles and the visibility primitives.

use kurbo::Rect;

/// The axis an items view scrolls along.
///
/// Every geometric question the resolver asks is one-dimensional: only the
/// coordinates along this axis are ever consulted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Items are laid out left-to-right and the view scrolls horizontally.
    Horizontal,
    /// Items are laid out top-to-bottom and the view scrolls vertically.
    Vertical,
}

impl Axis {
    /// Minimum coordinate of `rect` along this axis.
    #[must_use]
    pub fn line_start(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.min_x(),
            Self::Vertical => rect.min_y(),
        }
    }

    /// Maximum coordinate of `rect` along this axis.
    #[must_use]
    pub fn line_end(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.max_x(),
            Self::Vertical => rect.max_y(),
        }
    }

    /// Center coordinate of `rect` along this axis.
    #[must_use]
    pub fn midpoint(self, rect: Rect) -> f64 {
        (self.line_start(rect) + self.line_end(rect)) / 2.0
    }

    /// Extent of `rect` along this axis.
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }
}

/// Returns `true` if `item` is at least half visible within `container` along `axis`.
///
/// "Half visible" means the item's *center* lies within the container's span,
/// not that any pixel of it does. This is the single geometric primitive
/// behind both edge-alignment fallbacks in [`resolve_snap`](crate::resolve_snap).
#[must_use]
pub fn is_half_visible(axis: Axis, item: Rect, container: Rect) -> bool {
    let center = axis.midpoint(item);
    center >= axis.line_start(container) && center <= axis.line_end(container)
}

/// Returns `true` if `item` lies entirely within `container` along `axis`.
///
/// Only the scroll axis is consulted; cross-axis overflow does not count
/// against full visibility.
#[must_use]
pub fn is_fully_visible(axis: Axis, item: Rect, container: Rect) -> bool {
    axis.line_start(item) >= axis.line_start(container)
        && axis.line_end(item) <= axis.line_end(container)
}
