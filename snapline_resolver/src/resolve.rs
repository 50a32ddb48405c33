// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snap-resolution decision procedure.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;

use crate::{Axis, ItemFrame, SnapAlignment, SnapDecision, is_half_visible};

/// Decides which item, if any, the view should settle on after a gesture.
///
/// - `viewport` is the currently visible rectangle in content coordinates.
/// - `content_extent` is the scrollable content's total length along `axis`.
/// - `items` holds the frames intersecting `viewport`, ordered ascending
///   along `axis` (may be empty).
///
/// Returns `None` when no programmatic scroll should be issued:
///
/// - the viewport is already flush against a content edge
///   (`line_start <= 0` or `line_end >= content_extent`), where forcing a
///   snap would fight the natural deceleration, or
/// - there are no visible items to align.
///
/// Otherwise the decision picks the item nearest the configured alignment
/// target. For [`SnapAlignment::Start`] and [`SnapAlignment::End`] the edge
/// item is chosen, unless it is less than half visible and a neighbor exists
/// to fall back to; with a single visible item that fallback is impossible and
/// the edge item is returned regardless. For [`SnapAlignment::Center`] the
/// item whose center is closest to the viewport's midpoint wins, with ties
/// going to the earlier item.
///
/// This is a pure function of its inputs: no mutation, no allocation, and the
/// same snapshot always yields the same decision.
#[must_use]
pub fn resolve_snap(
    viewport: Rect,
    content_extent: f64,
    items: &[ItemFrame],
    alignment: SnapAlignment,
    axis: Axis,
) -> Option<SnapDecision> {
    let line_start = axis.line_start(viewport);
    let line_end = axis.line_end(viewport);

    // Checked before looking at items: a viewport resting on a content edge
    // stays where the gesture left it, even if an item is misaligned there.
    if line_start <= 0.0 || line_end >= content_extent {
        return None;
    }

    let target = match alignment {
        SnapAlignment::Start => {
            let first = *items.first()?;
            if !is_half_visible(axis, first.frame, viewport) && items.len() > 1 {
                items[1]
            } else {
                first
            }
        }
        SnapAlignment::End => {
            let last = *items.last()?;
            if !is_half_visible(axis, last.frame, viewport) && items.len() > 1 {
                items[items.len() - 2]
            } else {
                last
            }
        }
        SnapAlignment::Center => {
            let viewport_center = axis.midpoint(viewport);
            let mut target = *items.first()?;
            let mut min_distance = f64::INFINITY;
            for item in items {
                let distance = (viewport_center - axis.midpoint(item.frame)).abs();
                // Strict less-than, so on a tie the earlier item keeps the slot.
                if distance < min_distance {
                    target = *item;
                    min_distance = distance;
                }
            }
            target
        }
    };

    Some(SnapDecision {
        index: target.index,
        alignment,
    })
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::resolve_snap;
    use crate::{Axis, ItemFrame, SnapAlignment, SnapDecision};

    // A 200px viewport scrolled 100px into 1000px of vertical content.
    const VIEWPORT: Rect = Rect::new(0.0, 100.0, 100.0, 300.0);
    const CONTENT: f64 = 1000.0;

    fn item(index: usize, y: f64, height: f64) -> ItemFrame {
        ItemFrame::new(index, Rect::new(0.0, y, 100.0, y + height))
    }

    #[test]
    fn viewport_at_content_start_suppresses_snap() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 200.0);
        let items = [item(0, 0.0, 80.0), item(1, 80.0, 80.0)];

        for alignment in [
            SnapAlignment::Start,
            SnapAlignment::End,
            SnapAlignment::Center,
        ] {
            assert_eq!(
                resolve_snap(viewport, CONTENT, &items, alignment, Axis::Vertical),
                None,
                "no snap at the leading content edge for {alignment:?}"
            );
        }
    }

    #[test]
    fn viewport_at_content_end_suppresses_snap() {
        let viewport = Rect::new(0.0, 800.0, 100.0, 1000.0);
        let items = [item(11, 820.0, 80.0)];
        assert_eq!(
            resolve_snap(viewport, CONTENT, &items, SnapAlignment::Start, Axis::Vertical),
            None,
            "no snap when the viewport reaches the trailing content edge"
        );

        // Overscroll past the end suppresses too.
        let overscrolled = Rect::new(0.0, 850.0, 100.0, 1050.0);
        assert_eq!(
            resolve_snap(overscrolled, CONTENT, &items, SnapAlignment::Center, Axis::Vertical),
            None,
            "no snap while overscrolled past the content"
        );
    }

    #[test]
    fn boundary_check_runs_before_the_empty_guard() {
        // At an edge, the empty item list is never consulted.
        let viewport = Rect::new(0.0, 0.0, 100.0, 200.0);
        assert_eq!(
            resolve_snap(viewport, CONTENT, &[], SnapAlignment::Start, Axis::Vertical),
            None,
            "edge viewport with no items is a no-op"
        );
    }

    #[test]
    fn no_visible_items_is_a_no_op() {
        for alignment in [
            SnapAlignment::Start,
            SnapAlignment::End,
            SnapAlignment::Center,
        ] {
            assert_eq!(
                resolve_snap(VIEWPORT, CONTENT, &[], alignment, Axis::Vertical),
                None,
                "interior viewport with no items is a no-op for {alignment:?}"
            );
        }
    }

    #[test]
    fn start_keeps_the_first_item_when_half_visible() {
        // Item 0's center is 105, inside [100, 300].
        let items = [item(0, 80.0, 50.0), item(1, 130.0, 100.0)];
        assert_eq!(
            resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::Start, Axis::Vertical),
            Some(SnapDecision {
                index: 0,
                alignment: SnapAlignment::Start,
            })
        );
    }

    #[test]
    fn start_falls_back_when_the_first_item_is_mostly_hidden() {
        // Item 0's center is 70, above the viewport span.
        let items = [item(0, 50.0, 40.0), item(1, 130.0, 100.0)];
        assert_eq!(
            resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::Start, Axis::Vertical),
            Some(SnapDecision {
                index: 1,
                alignment: SnapAlignment::Start,
            })
        );
    }

    #[test]
    fn end_falls_back_when_the_last_item_is_mostly_hidden() {
        // Item 5's center is 310, below the viewport span.
        let items = [item(4, 180.0, 80.0), item(5, 280.0, 60.0)];
        assert_eq!(
            resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::End, Axis::Vertical),
            Some(SnapDecision {
                index: 4,
                alignment: SnapAlignment::End,
            })
        );
    }

    #[test]
    fn end_with_single_item_cannot_fall_back() {
        // The only visible item fails the half-visibility test (center 310),
        // but with nothing to fall back to it is still the one returned.
        let items = [item(4, 280.0, 60.0)];
        assert_eq!(
            resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::End, Axis::Vertical),
            Some(SnapDecision {
                index: 4,
                alignment: SnapAlignment::End,
            })
        );
    }

    #[test]
    fn center_picks_the_item_nearest_the_viewport_midpoint() {
        // Viewport midpoint is 200; centers are 130, 195, and 290.
        let items = [
            item(2, 105.0, 50.0),
            item(3, 170.0, 50.0),
            item(4, 265.0, 50.0),
        ];
        assert_eq!(
            resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::Center, Axis::Vertical),
            Some(SnapDecision {
                index: 3,
                alignment: SnapAlignment::Center,
            })
        );
    }

    #[test]
    fn center_tie_goes_to_the_earlier_item() {
        // Centers 190 and 210 are both 10 away from the midpoint at 200.
        let items = [item(2, 165.0, 50.0), item(3, 185.0, 50.0)];
        assert_eq!(
            resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::Center, Axis::Vertical),
            Some(SnapDecision {
                index: 2,
                alignment: SnapAlignment::Center,
            })
        );
    }

    #[test]
    fn horizontal_axis_consults_x_coordinates() {
        // Same shape as the vertical scenarios, rotated.
        let viewport = Rect::new(100.0, 0.0, 300.0, 100.0);
        let items = [
            ItemFrame::new(0, Rect::new(50.0, 0.0, 90.0, 100.0)),
            ItemFrame::new(1, Rect::new(130.0, 0.0, 230.0, 100.0)),
        ];
        assert_eq!(
            resolve_snap(viewport, CONTENT, &items, SnapAlignment::Start, Axis::Horizontal),
            Some(SnapDecision {
                index: 1,
                alignment: SnapAlignment::Start,
            })
        );
    }

    #[test]
    fn identical_inputs_yield_identical_decisions() {
        let items = [item(2, 105.0, 50.0), item(3, 170.0, 50.0)];
        let first = resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::Center, Axis::Vertical);
        let second = resolve_snap(VIEWPORT, CONTENT, &items, SnapAlignment::Center, Axis::Vertical);
        assert_eq!(first, second, "resolution is a pure function of its inputs");
    }
}
