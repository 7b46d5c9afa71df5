//! Windowed (virtualized) table types: scroll state, the materialized index range, and row placement.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Rows rendered beyond each viewport edge unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 10;

/// Fixed row height of the record table, in pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 40.0;

/// One row to materialize: its index in the sequence and where it sits in the scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VirtualRow {
    pub index: usize,
    /// Absolute top edge (`index * item_size`).
    pub offset: f64,
    pub size: f64,
}

/// Contiguous slice of a sequence that must be rendered for the current scroll position.
///
/// `start_index..=end_index` is the overscanned range; `visible_start..=visible_end` is the part
/// that actually overlaps the viewport. All four are 0 when `item_count` is 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize,
    pub visible_start: usize,
    pub visible_end: usize,
    pub item_count: usize,
    pub item_size: f64,
    /// Height of the scroll container: `item_count * item_size`.
    pub total_extent: f64,
}

impl VisibleRange {
    /// Range for an empty sequence: nothing to render, zero extent.
    pub fn empty(item_size: f64) -> Self {
        Self {
            item_size,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of rows to materialize.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end_index - self.start_index + 1
        }
    }

    /// Half-open index range, for slicing the underlying sequence.
    pub fn indices(&self) -> Range<usize> {
        if self.is_empty() {
            0..0
        } else {
            self.start_index..self.end_index + 1
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    /// Placement of each row in the range.
    pub fn rows(&self) -> impl Iterator<Item = VirtualRow> + '_ {
        let size = self.item_size;
        self.indices().map(move |index| VirtualRow {
            index,
            offset: index as f64 * size,
            size,
        })
    }
}

/// Scroll state of one windowed table.
///
/// `scroll_offset` only changes through scroll events and re-clamping when the sequence or
/// viewport shrinks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub(crate) item_count: usize,
    pub(crate) item_size: f64,
    pub(crate) scroll_offset: f64,
    pub(crate) viewport_extent: f64,
    pub(crate) overscan: usize,
}
