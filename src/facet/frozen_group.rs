//! Placement of the frozen pane groups: translations, divider lines and clips.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Facet;
use crate::data_set::DataSet;
use crate::layout::{AxisExtents, FrozenRegion, IndexRange};
use crate::types::{Line, Rect};

/// Translation applied to a pane's group before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GroupOffset {
    pub x: f32,
    pub y: f32,
}

/// Pixel extents of the four frozen bands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct FrozenExtents {
    col_width: f32,
    row_height: f32,
    trailing_col_width: f32,
    trailing_row_height: f32,
}

impl<D: DataSet> Facet<D> {
    fn frozen_extents(&self) -> FrozenExtents {
        let col_len = self.col_widths.len();
        let page_len = self.row_heights.len();
        let frozen = &self.frozen;
        let trailing = |len: usize, count: usize| {
            len.checked_sub(count)
                .and_then(|start| IndexRange::with_len(start, count))
        };
        FrozenExtents {
            col_width: IndexRange::with_len(0, frozen.frozen_col_count)
                .map_or(0.0, |r| self.col_widths.range_extent(r)),
            row_height: IndexRange::with_len(0, frozen.frozen_row_count)
                .map_or(0.0, |r| self.row_heights.range_extent(r)),
            trailing_col_width: trailing(col_len, frozen.frozen_trailing_col_count)
                .map_or(0.0, |r| self.col_widths.range_extent(r)),
            trailing_row_height: trailing(page_len, frozen.frozen_trailing_row_count)
                .map_or(0.0, |r| self.row_heights.range_extent(r)),
        }
    }

    /// Translation of every pane group at a scroll position.
    ///
    /// Leading bands and the center are laid out in sheet coordinates and are
    /// shifted back by the page offset; trailing bands are panel-relative.
    pub fn frozen_group_offsets(&self, scroll_x: f32, scroll_y: f32) -> BTreeMap<FrozenRegion, GroupOffset> {
        let corner = self.corner_bbox;
        let page_y = self.pagination_scroll_y();
        let offset = |x: f32, y: f32| GroupOffset { x, y };
        FrozenRegion::ALL
            .into_iter()
            .map(|region| {
                let at = match region {
                    FrozenRegion::Center => offset(corner.width - scroll_x, corner.height - scroll_y - page_y),
                    FrozenRegion::FrozenRow => offset(corner.width - scroll_x, corner.height - page_y),
                    FrozenRegion::FrozenTrailingRow => offset(corner.width - scroll_x, corner.height),
                    FrozenRegion::FrozenCol | FrozenRegion::FrozenTrailingCol => {
                        offset(corner.width, corner.height - scroll_y - page_y)
                    }
                    FrozenRegion::TopLeftCorner | FrozenRegion::TopRightCorner => {
                        offset(corner.width, corner.height - page_y)
                    }
                    FrozenRegion::BottomLeftCorner | FrozenRegion::BottomRightCorner => {
                        offset(corner.width, corner.height)
                    }
                };
                (region, at)
            })
            .collect()
    }

    /// Divider lines between frozen bands and the scrollable center, in canvas coordinates.
    pub fn frozen_split_lines(&self) -> BTreeMap<FrozenRegion, Line> {
        let panel = self.panel_bbox;
        let extents = self.frozen_extents();
        let frozen = &self.frozen;
        let vertical = |x: f32| Line {
            x1: x,
            y1: panel.y,
            x2: x,
            y2: panel.max_y,
        };
        let horizontal = |y: f32| Line {
            x1: panel.x,
            y1: y,
            x2: panel.max_x,
            y2: y,
        };

        let mut lines = BTreeMap::new();
        if frozen.frozen_col_count > 0 {
            lines.insert(FrozenRegion::FrozenCol, vertical(panel.x + extents.col_width));
        }
        if frozen.frozen_row_count > 0 {
            lines.insert(FrozenRegion::FrozenRow, horizontal(panel.y + extents.row_height));
        }
        if frozen.frozen_trailing_col_count > 0 {
            lines.insert(
                FrozenRegion::FrozenTrailingCol,
                vertical(panel.max_x - extents.trailing_col_width),
            );
        }
        if frozen.frozen_trailing_row_count > 0 {
            lines.insert(
                FrozenRegion::FrozenTrailingRow,
                horizontal(panel.max_y - extents.trailing_row_height),
            );
        }
        lines
    }

    /// Clip rectangles of the center and the four bands, in each group's own
    /// coordinates, so translucent cells of different panes never overlap.
    pub fn clip_rects(&self, scroll_x: f32, scroll_y: f32) -> BTreeMap<FrozenRegion, Rect> {
        let panel = self.panel_bbox;
        let e = self.frozen_extents();
        let page_y = self.pagination_scroll_y();
        let scroll_width = panel.width - e.col_width - e.trailing_col_width;
        let scroll_height = panel.height - e.row_height - e.trailing_row_height;
        let top = scroll_y + page_y + e.row_height;

        BTreeMap::from([
            (
                FrozenRegion::Center,
                Rect::new(scroll_x + e.col_width, top, scroll_width, scroll_height),
            ),
            (
                FrozenRegion::FrozenRow,
                Rect::new(scroll_x + e.col_width, page_y, scroll_width, e.row_height),
            ),
            (
                FrozenRegion::FrozenTrailingRow,
                Rect::new(
                    scroll_x + e.col_width,
                    panel.height - e.trailing_row_height,
                    scroll_width,
                    e.trailing_row_height,
                ),
            ),
            (
                FrozenRegion::FrozenCol,
                Rect::new(0.0, top, e.col_width, scroll_height),
            ),
            (
                FrozenRegion::FrozenTrailingCol,
                Rect::new(
                    panel.width - e.trailing_col_width,
                    top,
                    e.trailing_col_width,
                    scroll_height,
                ),
            ),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::super::tests::table_config;
    use super::*;
    use crate::types::Pagination;

    fn frozen_facet() -> Facet {
        let mut config = table_config(50);
        config.options.frozen.frozen_col_count = 1;
        config.options.frozen.frozen_row_count = 2;
        config.options.frozen.frozen_trailing_col_count = 1;
        config.options.frozen.frozen_trailing_row_count = 1;
        Facet::from_config(config).unwrap()
    }

    #[test]
    fn test_split_lines() {
        let facet = frozen_facet();
        let panel = facet.panel_bbox();
        let h = facet.options().cell_height();
        let lines = facet.frozen_split_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[&FrozenRegion::FrozenCol].x1, 96.0);
        assert_eq!(lines[&FrozenRegion::FrozenRow].y1, panel.y + 2.0 * h);
        assert_eq!(lines[&FrozenRegion::FrozenTrailingCol].x1, panel.max_x - 96.0);
        assert_eq!(lines[&FrozenRegion::FrozenTrailingRow].y1, panel.max_y - h);
    }

    #[test]
    fn test_no_lines_without_frozen_panes() {
        let facet = Facet::from_config(table_config(50)).unwrap();
        assert!(facet.frozen_split_lines().is_empty());
    }

    #[test]
    fn test_clip_rects_leave_room_for_bands() {
        let facet = frozen_facet();
        let panel = facet.panel_bbox();
        let h = facet.options().cell_height();
        let clips = facet.clip_rects(10.0, 40.0);
        let center = clips[&FrozenRegion::Center];
        assert_eq!(center.x, 10.0 + 96.0);
        assert_eq!(center.y, 40.0 + 2.0 * h);
        assert_eq!(center.width, panel.width - 192.0);
        assert_eq!(center.height, panel.height - 3.0 * h);
        assert_eq!(clips[&FrozenRegion::FrozenCol].x, 0.0);
        assert_eq!(clips[&FrozenRegion::FrozenTrailingRow].height, h);
    }

    #[test]
    fn test_group_offsets_follow_scroll_and_page() {
        let mut config = table_config(50);
        config.options.pagination = Some(Pagination {
            page_size: 10,
            current: 2,
        });
        let facet = Facet::from_config(config).unwrap();
        let h = facet.options().cell_height();
        let offsets = facet.frozen_group_offsets(5.0, 7.0);
        let corner = facet.corner_bbox();
        assert_eq!(
            offsets[&FrozenRegion::Center],
            GroupOffset {
                x: -5.0,
                y: corner.height - 7.0 - 10.0 * h
            }
        );
        assert_eq!(offsets[&FrozenRegion::FrozenCol].x, 0.0);
        assert_eq!(offsets[&FrozenRegion::FrozenTrailingRow].y, corner.height);
    }
}
