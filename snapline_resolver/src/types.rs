// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types exchanged between a host layout engine and the resolver.

use kurbo::Rect;

/// Which viewport edge or point a settled item aligns to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SnapAlignment {
    /// Align the item with the viewport's start edge (top/leading).
    Start,
    /// Align the item with the viewport's end edge (bottom/trailing).
    End,
    /// Center the item within the viewport.
    Center,
}

/// Layout attributes for one item whose frame intersects the viewport.
///
/// Hosts produce one of these per visible item, ordered ascending by layout
/// position along the scroll axis, and hand the batch to the resolver as a
/// per-gesture snapshot. Nothing is retained between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemFrame {
    /// The item's position in the host's data source.
    pub index: usize,
    /// The item's bounding box in content coordinates.
    pub frame: Rect,
}

impl ItemFrame {
    /// Creates the layout attributes for item `index` with bounding box `frame`.
    #[must_use]
    pub const fn new(index: usize, frame: Rect) -> Self {
        Self { index, frame }
    }
}

/// The outcome of a snap resolution: which item to scroll to, and how to align it.
///
/// The resolver itself performs no scrolling; the host translates this into a
/// platform scroll-to-item command. "No snap needed" is expressed as a `None`
/// from the resolving call, not as a variant here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SnapDecision {
    /// Index of the item to settle on.
    pub index: usize,
    /// The alignment the scroll should achieve.
    pub alignment: SnapAlignment,
}
