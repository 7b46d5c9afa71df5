//! Windowed rendering: which rows of a long table to materialize for a scroll position.
//!
//! Everything here is arithmetic on counts and sizes; nothing scans the sequence, so a range
//! costs the same for ten rows or a million.

use crate::models::{StatsError, VirtualRow, VisibleRange, WindowState, DEFAULT_OVERSCAN};

fn valid_size(item_size: f64) -> bool {
    item_size.is_finite() && item_size > 0.0
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Rows to render for a viewport at `scroll_offset` over `item_count` rows of `item_size` each.
///
/// The visible part runs from the row under the top edge to the last row starting before the
/// bottom edge, then grows by `overscan` rows each way. Both ends are clamped to
/// `0..item_count`. An empty sequence, or a non-positive row size, gives an empty range.
pub fn compute_visible_range(
    scroll_offset: f64,
    viewport_extent: f64,
    item_count: usize,
    item_size: f64,
    overscan: usize,
) -> VisibleRange {
    if !valid_size(item_size) {
        return VisibleRange::empty(0.0);
    }
    if item_count == 0 {
        return VisibleRange::empty(item_size);
    }

    let offset = non_negative(scroll_offset);
    let extent = non_negative(viewport_extent);
    let last = item_count - 1;

    let visible_start = ((offset / item_size).floor() as usize).min(last);
    let visible_end = (((offset + extent) / item_size).ceil() as usize)
        .saturating_sub(1)
        .max(visible_start)
        .min(last);

    VisibleRange {
        start_index: visible_start.saturating_sub(overscan),
        end_index: visible_end.saturating_add(overscan).min(last),
        visible_start,
        visible_end,
        item_count,
        item_size,
        total_extent: item_count as f64 * item_size,
    }
}

impl WindowState {
    /// Empty window over rows of `item_size` pixels in a viewport `viewport_extent` tall.
    pub fn new(item_size: f64, viewport_extent: f64) -> Result<Self, StatsError> {
        if !valid_size(item_size) {
            return Err(StatsError::InvalidItemSize(item_size));
        }
        Ok(Self {
            item_count: 0,
            item_size,
            scroll_offset: 0.0,
            viewport_extent: non_negative(viewport_extent),
            overscan: DEFAULT_OVERSCAN,
        })
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.set_item_count(item_count);
        self
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_size(&self) -> f64 {
        self.item_size
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Height of the scroll container, as if every row were present.
    pub fn total_extent(&self) -> f64 {
        self.item_count as f64 * self.item_size
    }

    /// Furthest the viewport can scroll before running past the last row.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.total_extent() - self.viewport_extent).max(0.0)
    }

    /// Scroll event. Offsets outside the scrollable area are clamped.
    pub fn set_scroll_offset(&mut self, scroll_offset: f64) {
        self.scroll_offset = non_negative(scroll_offset).min(self.max_scroll_offset());
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Bring row `index` to the top of the viewport (or as close as the end of the list allows).
    pub fn scroll_to_index(&mut self, index: usize) {
        let index = index.min(self.item_count.saturating_sub(1));
        self.set_scroll_offset(index as f64 * self.item_size);
    }

    /// The underlying sequence changed length. The offset is re-clamped so the next range
    /// never points past the new end.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            log::debug!("Window item count {} -> {}", self.item_count, item_count);
        }
        self.item_count = item_count;
        self.set_scroll_offset(self.scroll_offset);
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: f64) {
        self.viewport_extent = non_negative(viewport_extent);
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Rows to materialize for the current state.
    pub fn range(&self) -> VisibleRange {
        compute_visible_range(
            self.scroll_offset,
            self.viewport_extent,
            self.item_count,
            self.item_size,
            self.overscan,
        )
    }
}

/// Pair each row of `range` with its item. Indices past the end of `items` are skipped, so a
/// range computed before the sequence shrank cannot index out of bounds.
pub fn materialize<'a, T>(
    items: &'a [T],
    range: &'a VisibleRange,
) -> impl Iterator<Item = (VirtualRow, &'a T)> + 'a {
    range
        .rows()
        .filter_map(move |row| items.get(row.index).map(|item| (row, item)))
}
