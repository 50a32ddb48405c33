// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition seam between a host layout engine and the resolver.

use kurbo::Rect;

use crate::{Axis, ItemFrame, SnapAlignment, SnapDecision, is_fully_visible, resolve_snap};

/// A snap policy a host layout engine composes with.
///
/// Rather than subclassing a layout type, hosts hold a strategy value and
/// consult it from their gesture-end callbacks. Implementations must be pure:
/// the same snapshot always produces the same decision, and `None` always
/// means "leave the view where the gesture put it".
pub trait SnapStrategy {
    /// Resolves a gesture-end snapshot to a snap decision, or `None` when no
    /// programmatic scroll should be issued.
    ///
    /// `items` carries the frames intersecting `viewport`, ordered ascending
    /// along the strategy's scroll axis.
    fn resolve(
        &self,
        viewport: Rect,
        content_extent: f64,
        items: &[ItemFrame],
    ) -> Option<SnapDecision>;
}

/// The standard policy: settle the edge (or center) item per a configured alignment.
///
/// This is [`resolve_snap`] with the alignment and axis bound at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlignedSnap {
    /// Which viewport edge or point the settled item aligns to.
    pub alignment: SnapAlignment,
    /// The scroll axis.
    pub axis: Axis,
}

impl AlignedSnap {
    /// Creates a policy settling items to `alignment` along `axis`.
    #[must_use]
    pub const fn new(alignment: SnapAlignment, axis: Axis) -> Self {
        Self { alignment, axis }
    }
}

impl SnapStrategy for AlignedSnap {
    fn resolve(
        &self,
        viewport: Rect,
        content_extent: f64,
        items: &[ItemFrame],
    ) -> Option<SnapDecision> {
        resolve_snap(viewport, content_extent, items, self.alignment, self.axis)
    }
}

/// A centered policy that stands down while an edge item is settled.
///
/// Recycler-style hosts prefer letting the list rest naturally at either end
/// of the content: when the first item (index `0`) or the last item (index
/// `item_count - 1`) is completely visible along the scroll axis, no snap is
/// issued. Anywhere in the interior this behaves like a centered
/// [`AlignedSnap`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EdgeSettledSnap {
    /// The scroll axis.
    pub axis: Axis,
    /// Total number of items in the view, used to recognize the last item.
    pub item_count: usize,
}

impl EdgeSettledSnap {
    /// Creates a centered policy over a view of `item_count` items along `axis`.
    #[must_use]
    pub const fn new(axis: Axis, item_count: usize) -> Self {
        Self { axis, item_count }
    }

    fn edge_item_settled(&self, viewport: Rect, items: &[ItemFrame]) -> bool {
        items.iter().any(|item| {
            let is_edge =
                item.index == 0 || (self.item_count > 0 && item.index == self.item_count - 1);
            is_edge && is_fully_visible(self.axis, item.frame, viewport)
        })
    }
}

impl SnapStrategy for EdgeSettledSnap {
    fn resolve(
        &self,
        viewport: Rect,
        content_extent: f64,
        items: &[ItemFrame],
    ) -> Option<SnapDecision> {
        if self.edge_item_settled(viewport, items) {
            return None;
        }
        resolve_snap(
            viewport,
            content_extent,
            items,
            SnapAlignment::Center,
            self.axis,
        )
    }
}
