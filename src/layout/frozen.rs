//! Frozen pane partitioning.
//!
//! Leading frozen columns are counted from the first leaf, trailing ones
//! from the last. Frozen rows are counted from the first and last row of the
//! current cell range (the active page when paginated).

use std::collections::BTreeMap;

use serde::Serialize;

use super::extents::IndexRange;
use super::viewport::PanelIndexes;
use crate::error::{PivotviewError, Result};
use crate::types::{Axis, FrozenConfig};

/// One of the nine panes a data cell can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FrozenRegion {
    /// Scrollable center pane
    Center,
    FrozenRow,
    FrozenCol,
    FrozenTrailingRow,
    FrozenTrailingCol,
    /// Leading rows x leading cols
    TopLeftCorner,
    /// Leading rows x trailing cols
    TopRightCorner,
    /// Trailing rows x leading cols
    BottomLeftCorner,
    /// Trailing rows x trailing cols
    BottomRightCorner,
}

impl FrozenRegion {
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::FrozenRow,
        Self::FrozenCol,
        Self::FrozenTrailingRow,
        Self::FrozenTrailingCol,
        Self::TopLeftCorner,
        Self::TopRightCorner,
        Self::BottomLeftCorner,
        Self::BottomRightCorner,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeftCorner | Self::TopRightCorner | Self::BottomLeftCorner | Self::BottomRightCorner
        )
    }
}

pub fn is_frozen_col(col_index: usize, frozen_col_count: usize) -> bool {
    frozen_col_count > 0 && col_index < frozen_col_count
}

/// `col_len` is the total leaf count of the axis, not the visible range.
pub fn is_frozen_trailing_col(col_index: usize, frozen_trailing_col_count: usize, col_len: usize) -> bool {
    frozen_trailing_col_count > 0 && col_index >= col_len.saturating_sub(frozen_trailing_col_count)
}

pub fn is_frozen_row(row_index: usize, min_row_index: usize, frozen_row_count: usize) -> bool {
    frozen_row_count > 0 && row_index < min_row_index + frozen_row_count
}

/// `max_row_index` is the last row of the current cell range.
pub fn is_frozen_trailing_row(row_index: usize, max_row_index: usize, frozen_trailing_row_count: usize) -> bool {
    frozen_trailing_row_count > 0 && row_index + frozen_trailing_row_count > max_row_index
}

/// Reject leading and trailing counts that cannot both fit on their axis.
///
/// `col_total` and `row_total` are the full axis sizes: every configured
/// column (hidden ones included) and every row across all pages.
pub fn validate_frozen_config(frozen: &FrozenConfig, col_total: usize, row_total: usize) -> Result<()> {
    check_overlap(Axis::Col, frozen.frozen_col_count, frozen.frozen_trailing_col_count, col_total)?;
    check_overlap(Axis::Row, frozen.frozen_row_count, frozen.frozen_trailing_row_count, row_total)
}

/// Clamp frozen counts to the laid-out axis sizes.
///
/// Leading counts are capped at the axis length and trailing counts at what
/// the leading band leaves over, so the two bands never share an index.
pub fn effective_frozen_config(frozen: &FrozenConfig, col_len: usize, row_len: usize) -> FrozenConfig {
    let (frozen_col_count, frozen_trailing_col_count) =
        clamp_bands(frozen.frozen_col_count, frozen.frozen_trailing_col_count, col_len);
    let (frozen_row_count, frozen_trailing_row_count) =
        clamp_bands(frozen.frozen_row_count, frozen.frozen_trailing_row_count, row_len);
    FrozenConfig {
        frozen_row_count,
        frozen_col_count,
        frozen_trailing_row_count,
        frozen_trailing_col_count,
    }
}

fn clamp_bands(leading: usize, trailing: usize, len: usize) -> (usize, usize) {
    let leading = leading.min(len);
    (leading, trailing.min(len - leading))
}

fn check_overlap(axis: Axis, leading: usize, trailing: usize, total: usize) -> Result<()> {
    if leading > 0 && trailing > 0 && leading + trailing > total {
        log::warn!("rejecting frozen {axis} config: {leading} + {trailing} > {total}");
        return Err(PivotviewError::FrozenOverlap {
            axis,
            leading,
            trailing,
            total,
        });
    }
    Ok(())
}

/// Pane of the cell at `(row_index, col_index)`.
///
/// Leading bands win over trailing bands when an index satisfies both.
pub fn classify(
    row_index: usize,
    col_index: usize,
    frozen: &FrozenConfig,
    col_len: usize,
    cell_range: IndexRange,
) -> FrozenRegion {
    let lead_row = is_frozen_row(row_index, cell_range.start, frozen.frozen_row_count);
    let trail_row =
        !lead_row && is_frozen_trailing_row(row_index, cell_range.end, frozen.frozen_trailing_row_count);
    let lead_col = is_frozen_col(col_index, frozen.frozen_col_count);
    let trail_col =
        !lead_col && is_frozen_trailing_col(col_index, frozen.frozen_trailing_col_count, col_len);

    match (lead_row, trail_row, lead_col, trail_col) {
        (true, _, true, _) => FrozenRegion::TopLeftCorner,
        (true, _, _, true) => FrozenRegion::TopRightCorner,
        (_, true, true, _) => FrozenRegion::BottomLeftCorner,
        (_, true, _, true) => FrozenRegion::BottomRightCorner,
        (true, ..) => FrozenRegion::FrozenRow,
        (_, true, ..) => FrozenRegion::FrozenTrailingRow,
        (_, _, true, _) => FrozenRegion::FrozenCol,
        (_, _, _, true) => FrozenRegion::FrozenTrailingCol,
        _ => FrozenRegion::Center,
    }
}

/// Visible indexes of the center pane and the four frozen bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrozenPanelIndexes {
    pub center: PanelIndexes,
    pub frozen_row: PanelIndexes,
    pub frozen_col: PanelIndexes,
    pub frozen_trailing_row: PanelIndexes,
    pub frozen_trailing_col: PanelIndexes,
}

impl FrozenPanelIndexes {
    /// Indexes of a band; corners are not ranges and yield an empty pane.
    pub fn get(&self, region: FrozenRegion) -> PanelIndexes {
        match region {
            FrozenRegion::Center => self.center,
            FrozenRegion::FrozenRow => self.frozen_row,
            FrozenRegion::FrozenCol => self.frozen_col,
            FrozenRegion::FrozenTrailingRow => self.frozen_trailing_row,
            FrozenRegion::FrozenTrailingCol => self.frozen_trailing_col,
            _ => PanelIndexes::default(),
        }
    }
}

/// Cut the scroll-derived indexes out of the frozen bands and give every band
/// its always-visible range.
///
/// Frozen row bands follow the visible center columns and frozen column bands
/// follow the visible center rows.
pub fn split_in_view_indexes_with_frozen(
    indexes: PanelIndexes,
    frozen: &FrozenConfig,
    col_len: usize,
    cell_range: IndexRange,
) -> FrozenPanelIndexes {
    let fc = frozen.frozen_col_count;
    let tc = frozen.frozen_trailing_col_count;
    let fr = frozen.frozen_row_count;
    let tr = frozen.frozen_trailing_row_count;

    let center_cols = indexes.cols.and_then(|cols| {
        let start = cols.start.max(fc);
        let end = if tc > 0 {
            cols.end.min(col_len.checked_sub(tc + 1)?)
        } else {
            cols.end
        };
        IndexRange::new(start, end)
    });
    let center_rows = indexes.rows.and_then(|rows| {
        let start = rows.start.max(cell_range.start + fr);
        let end = if tr > 0 {
            rows.end.min(cell_range.end.checked_sub(tr)?)
        } else {
            rows.end
        };
        IndexRange::new(start, end)
    });

    let lead_rows = IndexRange::with_len(cell_range.start, fr);
    let trail_rows = (cell_range.end + 1)
        .checked_sub(tr)
        .and_then(|start| IndexRange::with_len(start, tr));
    let lead_cols = IndexRange::with_len(0, fc);
    let trail_cols = col_len
        .checked_sub(tc)
        .and_then(|start| IndexRange::with_len(start, tc));

    FrozenPanelIndexes {
        center: PanelIndexes::new(center_rows, center_cols),
        frozen_row: PanelIndexes::new(lead_rows, center_cols),
        frozen_col: PanelIndexes::new(center_rows, lead_cols),
        frozen_trailing_row: PanelIndexes::new(trail_rows, center_cols),
        frozen_trailing_col: PanelIndexes::new(center_rows, trail_cols),
    }
}

/// Cells of the four corner panes as `(col_index, row_index)` pairs.
///
/// Corners are rendered whatever the scroll position, so they are listed
/// explicitly rather than derived from the visible ranges.
pub fn calculate_frozen_corner_cells(
    frozen: &FrozenConfig,
    col_len: usize,
    cell_range: IndexRange,
) -> BTreeMap<FrozenRegion, Vec<(usize, usize)>> {
    let mut corners: BTreeMap<FrozenRegion, Vec<(usize, usize)>> = BTreeMap::new();
    let lead_rows: Vec<usize> = (0..frozen.frozen_row_count)
        .map(|j| cell_range.start + j)
        .filter(|&r| r <= cell_range.end)
        .collect();
    let trail_rows: Vec<usize> = (0..frozen.frozen_trailing_row_count)
        .filter_map(|j| cell_range.end.checked_sub(j))
        .filter(|&r| r >= cell_range.start)
        .collect();

    let lead_cols = (0..frozen.frozen_col_count).filter(|&c| c < col_len);
    let trail_cols = (0..frozen.frozen_trailing_col_count).filter_map(|i| col_len.checked_sub(i + 1));

    let mut fill = |cols: &mut dyn Iterator<Item = usize>, top: FrozenRegion, bottom: FrozenRegion| {
        for col in cols {
            for &row in &lead_rows {
                corners.entry(top).or_default().push((col, row));
            }
            for &row in &trail_rows {
                corners.entry(bottom).or_default().push((col, row));
            }
        }
    };
    fill(
        &mut lead_cols.into_iter(),
        FrozenRegion::TopLeftCorner,
        FrozenRegion::BottomLeftCorner,
    );
    fill(
        &mut trail_cols.into_iter(),
        FrozenRegion::TopRightCorner,
        FrozenRegion::BottomRightCorner,
    );
    corners
}
