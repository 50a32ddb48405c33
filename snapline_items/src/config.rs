// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-points configuration consumed from the items layout.

/// How aggressively an items view settles onto items after a gesture.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SnapPointsType {
    /// No snapping; content rests wherever the gesture leaves it.
    #[default]
    None,
    /// Content always settles with an item aligned per the configured alignment.
    Mandatory,
    /// Like [`Mandatory`](Self::Mandatory), with the platform additionally
    /// limiting each gesture to advancing a single item. The per-gesture
    /// limiting lives in the platform's paging flags; resolution-wise the two
    /// are identical.
    MandatorySingle,
}

impl SnapPointsType {
    /// Returns `true` if this configuration asks for snap resolution at all.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Mandatory | Self::MandatorySingle)
    }
}
