// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-end triggers and the outbound scroll command.

use kurbo::Rect;
use snapline_resolver::{Axis, ItemFrame, SnapAlignment, resolve_snap};

use crate::SnapPointsType;

/// The platform anchor a scroll-to-item command aligns the target against.
///
/// This is the vocabulary native scroll views speak; it folds the resolved
/// alignment together with the scroll axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScrollPosition {
    /// Align the item with the top edge (vertical start).
    Top,
    /// Align the item with the bottom edge (vertical end).
    Bottom,
    /// Align the item with the left edge (horizontal start).
    Left,
    /// Align the item with the right edge (horizontal end).
    Right,
    /// Center the item vertically.
    CenteredVertically,
    /// Center the item horizontally.
    CenteredHorizontally,
}

impl ScrollPosition {
    /// Folds an alignment on a given axis into the platform anchor.
    #[must_use]
    pub const fn for_alignment(alignment: SnapAlignment, axis: Axis) -> Self {
        match (alignment, axis) {
            (SnapAlignment::Start, Axis::Vertical) => Self::Top,
            (SnapAlignment::Start, Axis::Horizontal) => Self::Left,
            (SnapAlignment::End, Axis::Vertical) => Self::Bottom,
            (SnapAlignment::End, Axis::Horizontal) => Self::Right,
            (SnapAlignment::Center, Axis::Vertical) => Self::CenteredVertically,
            (SnapAlignment::Center, Axis::Horizontal) => Self::CenteredHorizontally,
        }
    }
}

/// A programmatic scroll command for the host to execute.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ScrollToItem {
    /// Index of the item to scroll to.
    pub index: usize,
    /// The anchor the item should end up aligned against.
    pub position: ScrollPosition,
    /// Whether the scroll should animate. Snap corrections always do, so the
    /// nudge reads as a continuation of the gesture rather than a jump.
    pub animated: bool,
}

/// Snap configuration and trigger plumbing for one items view.
///
/// Hosts construct one of these from the items layout's properties and call
/// [`dragging_ended`](Self::dragging_ended) and
/// [`deceleration_ended`](Self::deceleration_ended) from the corresponding
/// scroll-view callbacks, executing whatever command comes back. The behavior
/// holds configuration only; every call takes a fresh snapshot of the view's
/// geometry, so there is no state to invalidate between gestures.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SnapBehavior {
    snap_points_type: SnapPointsType,
    alignment: SnapAlignment,
    axis: Axis,
}

impl SnapBehavior {
    /// Creates a behavior from the items layout's snap configuration.
    #[must_use]
    pub const fn new(
        snap_points_type: SnapPointsType,
        alignment: SnapAlignment,
        axis: Axis,
    ) -> Self {
        Self {
            snap_points_type,
            alignment,
            axis,
        }
    }

    /// Returns the configured snap-points type.
    #[must_use]
    pub const fn snap_points_type(&self) -> SnapPointsType {
        self.snap_points_type
    }

    /// Returns the configured alignment.
    #[must_use]
    pub const fn alignment(&self) -> SnapAlignment {
        self.alignment
    }

    /// Returns the scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Updates the snap-points type after a layout property change.
    pub fn set_snap_points_type(&mut self, snap_points_type: SnapPointsType) {
        self.snap_points_type = snap_points_type;
    }

    /// Updates the alignment after a layout property change.
    pub fn set_alignment(&mut self, alignment: SnapAlignment) {
        self.alignment = alignment;
    }

    /// Updates the scroll axis after a layout property change.
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    /// Trigger for the scroll view's drag-ended callback.
    ///
    /// When `will_decelerate` is true the gesture still has momentum and the
    /// deceleration-end trigger will follow; resolving here would fight the
    /// ongoing scroll, so nothing is issued yet.
    #[must_use]
    pub fn dragging_ended(
        &self,
        viewport: Rect,
        content_extent: f64,
        items: &[ItemFrame],
        will_decelerate: bool,
    ) -> Option<ScrollToItem> {
        if will_decelerate {
            return None;
        }
        self.resolve(viewport, content_extent, items)
    }

    /// Trigger for the scroll view's deceleration-ended callback.
    #[must_use]
    pub fn deceleration_ended(
        &self,
        viewport: Rect,
        content_extent: f64,
        items: &[ItemFrame],
    ) -> Option<ScrollToItem> {
        self.resolve(viewport, content_extent, items)
    }

    fn resolve(
        &self,
        viewport: Rect,
        content_extent: f64,
        items: &[ItemFrame],
    ) -> Option<ScrollToItem> {
        if !self.snap_points_type.is_mandatory() {
            return None;
        }
        let decision = resolve_snap(viewport, content_extent, items, self.alignment, self.axis)?;
        Some(ScrollToItem {
            index: decision.index,
            position: ScrollPosition::for_alignment(decision.alignment, self.axis),
            animated: true,
        })
    }
}
