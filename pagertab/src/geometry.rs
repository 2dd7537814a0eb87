//! Pure geometry helpers: edge policy, progress, interpolation and strip centering.
//!
//! Everything here is a function of its inputs; the coordinator re-reads frames from the host
//! before every call instead of caching results.

use crate::{DragBaseline, IndicatorGeometry, PageProgress, TabFrame, TabGeometry};

/// Below this magnitude a drag-relative delta is treated as "not moved yet".
const MIN_DRAG_PROGRESS: f32 = 0.001;

/// Widens a raw tab frame into its indicator region.
///
/// Interior tabs extend by half the spacing on each side. The first tab uses `outer_margin` on
/// its leading side, the last tab on its trailing side, so the region width stays continuous
/// when `spacing != outer_margin`.
pub fn tab_region(
    index: usize,
    count: usize,
    frame: TabFrame,
    spacing: f32,
    outer_margin: f32,
) -> TabGeometry {
    let half = spacing / 2.0;
    let lead_ext = if index == 0 { outer_margin } else { half };
    let trail_ext = if index + 1 >= count { outer_margin } else { half };
    TabGeometry {
        index,
        leading: frame.leading - lead_ext,
        width: (frame.width + lead_ext + trail_ext).max(0.0),
    }
}

/// Absolute progress for `offset` over pages of uniform `extent`.
///
/// Returns `None` when there is nothing to compute yet (no pages, non-positive extent or a
/// non-finite offset).
pub fn page_progress(offset: f32, extent: f32, count: usize) -> Option<PageProgress> {
    if count == 0 || !is_positive(extent) || !offset.is_finite() {
        return None;
    }
    let page_float = (offset / extent).max(0.0);
    // `page_float` is non-negative, so truncation is `floor`.
    let whole = page_float as usize;
    let last = count - 1;
    let from_index = whole.min(last);
    let to_index = (from_index + 1).min(last);
    if from_index == to_index {
        return Some(PageProgress::at(from_index));
    }
    let progress = (page_float - whole as f32).clamp(0.0, 1.0);
    Some(PageProgress {
        from_index,
        to_index,
        progress,
    })
}

/// Progress relative to the offset recorded when the drag began.
pub fn drag_relative_progress(
    offset: f32,
    baseline: DragBaseline,
    extent: f32,
    count: usize,
) -> Option<PageProgress> {
    if count == 0 || !is_positive(extent) || !offset.is_finite() {
        return None;
    }
    let from = baseline.index.min(count - 1);
    let raw = (offset - baseline.offset) / extent;
    let magnitude = if raw < 0.0 { -raw } else { raw };
    if magnitude < MIN_DRAG_PROGRESS {
        return Some(PageProgress::at(from));
    }
    let to = if raw > 0.0 {
        (from + 1).min(count - 1)
    } else {
        from.saturating_sub(1)
    };
    if to == from {
        return Some(PageProgress::at(from));
    }
    Some(PageProgress {
        from_index: from,
        to_index: to,
        progress: magnitude.clamp(0.0, 1.0),
    })
}

/// Interpolates leading and width between two tab regions.
pub fn interpolate(from: TabGeometry, to: TabGeometry, progress: f32) -> IndicatorGeometry {
    if from.index == to.index {
        return from.indicator();
    }
    from.indicator().lerp(to.indicator(), progress)
}

/// Page index the scroller comes to rest on for `offset`.
pub fn settled_page(offset: f32, extent: f32, count: usize) -> Option<usize> {
    if count == 0 || !is_positive(extent) || !offset.is_finite() {
        return None;
    }
    let page_float = (offset / extent).max(0.0);
    let nearest = (page_float + 0.5) as usize;
    Some(nearest.min(count - 1))
}

/// Strip offset that centers `midpoint` in the viewport, clamped to
/// `[0, content_extent - viewport_extent]`.
pub fn centered_strip_offset(
    midpoint: f32,
    viewport_extent: f32,
    content_extent: f32,
) -> Option<f32> {
    if !is_positive(viewport_extent) || !midpoint.is_finite() {
        return None;
    }
    let max_offset = (content_extent - viewport_extent).max(0.0);
    Some((midpoint - viewport_extent / 2.0).clamp(0.0, max_offset))
}

/// `true` for finite values greater than zero (zero/negative/NaN extents mean "not laid out").
pub fn is_positive(extent: f32) -> bool {
    extent.is_finite() && extent > 0.0
}
