// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapline Resolver: snap-to-item scroll resolution for items views.
//!
//! When a drag or deceleration gesture ends, an items view with mandatory
//! snap points should not rest at an arbitrary offset: one item ought to sit
//! flush against a viewport edge, or centered within it. This crate decides
//! *which* item that is. It is a pure geometric core, decoupled from any
//! widget toolkit; the host layout engine supplies a snapshot of the current
//! viewport and the visible item frames, and executes the resulting scroll.
//!
//! The core concepts are:
//!
//! - [`Axis`]: the scroll direction, with helpers projecting a [`Rect`] onto
//!   that axis (`line_start`, `line_end`, `midpoint`).
//! - [`ItemFrame`]: one visible item's index and bounding box, as produced by
//!   the host's layout pass for everything intersecting the viewport.
//! - [`resolve_snap`]: the decision procedure mapping a viewport snapshot to
//!   an optional [`SnapDecision`].
//! - [`SnapStrategy`]: the narrow seam a host layout engine composes with,
//!   implemented by [`AlignedSnap`] (the standard edge/center policy) and
//!   [`EdgeSettledSnap`] (a centered policy that stands down while the first
//!   or last item is fully on screen).
//!
//! Host frameworks are responsible for:
//!
//! - Invoking the resolver only on its two trigger events: drag end without
//!   deceleration, and deceleration end. It is never consulted during a
//!   continuous scroll.
//! - Translating a [`SnapDecision`] into a platform scroll-to-item command.
//! - Doing nothing when the resolver returns `None`; the view is already
//!   settled (flush against a content edge, or nothing visible to align).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use snapline_resolver::{Axis, ItemFrame, SnapAlignment, resolve_snap};
//!
//! // A 200px-tall viewport scrolled 100px into 1000px of content.
//! let viewport = Rect::new(0.0, 100.0, 100.0, 300.0);
//! let items = [
//!     ItemFrame::new(3, Rect::new(0.0, 80.0, 100.0, 180.0)),
//!     ItemFrame::new(4, Rect::new(0.0, 180.0, 100.0, 280.0)),
//! ];
//!
//! // Item 3's center (130) is inside the viewport span, so it is still the
//! // one to align with the top edge.
//! let decision = resolve_snap(viewport, 1000.0, &items, SnapAlignment::Start, Axis::Vertical)
//!     .expect("interior viewport with visible items always snaps");
//! assert_eq!(decision.index, 3);
//! ```
//!
//! All coordinates live in the host's content coordinate space (typically
//! logical pixels) and are expected to be finite. Malformed geometry (negative
//! extents, inverted rectangles) is a caller contract violation and produces
//! unspecified (but non-panicking) output.
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod resolve;
mod strategy;
mod types;

pub use axis::{Axis, is_fully_visible, is_half_visible};
pub use resolve::resolve_snap;
pub use strategy::{AlignedSnap, EdgeSettledSnap, SnapStrategy};
pub use types::{ItemFrame, SnapAlignment, SnapDecision};
