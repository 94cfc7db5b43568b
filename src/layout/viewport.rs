//! Scroll offset to visible index ranges.

use serde::Serialize;

use super::extents::{AxisExtents, IndexRange};
use crate::types::BBox;

/// Visible row and column ranges of one pane; `None` means nothing visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PanelIndexes {
    pub rows: Option<IndexRange>,
    pub cols: Option<IndexRange>,
}

impl PanelIndexes {
    pub fn new(rows: Option<IndexRange>, cols: Option<IndexRange>) -> Self {
        Self { rows, cols }
    }

    /// True when either axis has no visible index.
    pub fn is_empty(&self) -> bool {
        self.rows.is_none() || self.cols.is_none()
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        match (self.rows, self.cols) {
            (Some(rows), Some(cols)) => rows.len() * cols.len(),
            _ => 0,
        }
    }

    /// `(row_index, col_index)` of every covered cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        self.rows
            .into_iter()
            .flat_map(|r| r.iter())
            .flat_map(move |row| cols.into_iter().flat_map(|c| c.iter()).map(move |col| (row, col)))
    }

    /// Whether `(row, col)` lies in this pane.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.is_some_and(|r| r.contains(row)) && self.cols.is_some_and(|c| c.contains(col))
    }
}

/// Rows and columns intersecting the panel after scrolling.
///
/// `corrected_scroll_x` is the part of the row header that has been scrolled
/// out of view; the panel gains that much width on the right.
/// Negative scroll offsets clamp to zero.
pub fn calculate_in_view_indexes(
    scroll_x: f32,
    scroll_y: f32,
    widths: &dyn AxisExtents,
    heights: &dyn AxisExtents,
    panel: BBox,
    corrected_scroll_x: f32,
) -> PanelIndexes {
    let scroll_x = scroll_x.max(0.0);
    let scroll_y = scroll_y.max(0.0);
    let visible_width = panel.width + corrected_scroll_x.max(0.0);

    let cols = widths.index_range(scroll_x, scroll_x + visible_width);
    let rows = heights.index_range(scroll_y, scroll_y + panel.height);
    log::trace!("in view at ({scroll_x}, {scroll_y}): rows {rows:?} cols {cols:?}");
    PanelIndexes { rows, cols }
}
