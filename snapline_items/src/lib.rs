// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapline Items: snap-points configuration and gesture triggers for items views.
//!
//! This crate wraps the pure resolver from `snapline_resolver` in the shape a
//! platform items view actually consumes. A [`SnapBehavior`] owns the view's
//! snap configuration ([`SnapPointsType`], alignment, axis) and exposes the
//! two gesture-end entry points a scroll view raises: drag end and
//! deceleration end. When a snap is due, the result is a [`ScrollToItem`]
//! command naming the target index and the platform anchor
//! ([`ScrollPosition`]) to align it to; the host executes the scroll.
//!
//! ```rust
//! use kurbo::Rect;
//! use snapline_items::{ScrollPosition, SnapBehavior, SnapPointsType};
//! use snapline_resolver::{Axis, ItemFrame, SnapAlignment};
//!
//! let behavior = SnapBehavior::new(
//!     SnapPointsType::Mandatory,
//!     SnapAlignment::Start,
//!     Axis::Vertical,
//! );
//!
//! let viewport = Rect::new(0.0, 100.0, 100.0, 300.0);
//! let items = [
//!     ItemFrame::new(3, Rect::new(0.0, 80.0, 100.0, 180.0)),
//!     ItemFrame::new(4, Rect::new(0.0, 180.0, 100.0, 280.0)),
//! ];
//!
//! // The drag ended without momentum, so the snap resolves immediately.
//! let command = behavior
//!     .dragging_ended(viewport, 1000.0, &items, false)
//!     .expect("mandatory snap points with visible items");
//! assert_eq!(command.index, 3);
//! assert_eq!(command.position, ScrollPosition::Top);
//! assert!(command.animated);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod behavior;
mod config;

pub use behavior::{ScrollPosition, ScrollToItem, SnapBehavior};
pub use config::SnapPointsType;
