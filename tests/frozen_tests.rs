//! Frozen pane tests
//!
//! Band ranges, corner cells, trailing anchoring and the invariant that
//! every visible cell is handed out in the pane it classifies into.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::collections::HashSet;

use common::table_config;
use pivotview::layout::{classify, FrozenRegion, IndexRange};
use pivotview::{Facet, FilterParam, FrozenConfig, Pagination, PivotviewError};
use test_case::test_case;

fn frozen_facet(lead_rows: usize, lead_cols: usize, trail_rows: usize, trail_cols: usize) -> Facet {
    let mut config = table_config(10, 5, 600.0, 300.0);
    config.options.frozen = FrozenConfig {
        frozen_row_count: lead_rows,
        frozen_col_count: lead_cols,
        frozen_trailing_row_count: trail_rows,
        frozen_trailing_col_count: trail_cols,
    };
    Facet::from_config(config).unwrap()
}

#[test_case(0, FrozenRegion::FrozenCol ; "first column")]
#[test_case(2, FrozenRegion::Center ; "middle column")]
#[test_case(4, FrozenRegion::FrozenTrailingCol ; "last column")]
fn test_classify_columns(col: usize, expected: FrozenRegion) {
    let frozen = FrozenConfig {
        frozen_col_count: 1,
        frozen_trailing_col_count: 1,
        ..FrozenConfig::default()
    };
    let range = IndexRange::new(0, 9).unwrap();
    assert_eq!(classify(5, col, &frozen, 5, range), expected);
}

#[test]
fn test_bands_at_origin() {
    let facet = frozen_facet(1, 1, 1, 1);
    let indexes = facet.calculate_xy_indexes(0.0, 0.0);
    assert_eq!(indexes.center.cols, IndexRange::new(1, 3));
    assert_eq!(indexes.center.rows, IndexRange::new(1, 7));
    assert_eq!(indexes.frozen_row.rows, IndexRange::new(0, 0));
    assert_eq!(indexes.frozen_row.cols, indexes.center.cols);
    assert_eq!(indexes.frozen_trailing_row.rows, IndexRange::new(9, 9));
    assert_eq!(indexes.frozen_col.cols, IndexRange::new(0, 0));
    assert_eq!(indexes.frozen_col.rows, indexes.center.rows);
    assert_eq!(indexes.frozen_trailing_col.cols, IndexRange::new(4, 4));
}

#[test]
fn test_visible_cells_land_in_their_own_pane() {
    let facet = frozen_facet(2, 1, 1, 1);
    let range = facet.cell_range().unwrap();
    let col_len = facet.layout_result().col_leaf_nodes.len();
    let h = facet.options().cell_height();
    for scroll_y in [0.0, h * 1.5, 1000.0] {
        let (x, y) = facet.clamp_scroll(0.0, scroll_y);
        let cells = facet.visible_cells(x, y);
        for (region, metas) in &cells {
            for meta in metas {
                assert_eq!(
                    classify(meta.row_index, meta.col_index, facet.frozen(), col_len, range),
                    *region,
                    "cell ({}, {}) at scroll {y}",
                    meta.row_index,
                    meta.col_index
                );
            }
        }
    }
}

#[test]
fn test_corner_cells_are_always_present() {
    let facet = frozen_facet(1, 1, 1, 1);
    let cells = facet.visible_cells(0.0, 0.0);
    let at = |region| {
        cells[&region]
            .iter()
            .map(|m| (m.row_index, m.col_index))
            .collect::<Vec<_>>()
    };
    assert_eq!(at(FrozenRegion::TopLeftCorner), vec![(0, 0)]);
    assert_eq!(at(FrozenRegion::TopRightCorner), vec![(0, 4)]);
    assert_eq!(at(FrozenRegion::BottomLeftCorner), vec![(9, 0)]);
    assert_eq!(at(FrozenRegion::BottomRightCorner), vec![(9, 4)]);
}

#[test]
fn test_trailing_cells_hug_panel_edges() {
    let facet = frozen_facet(0, 0, 1, 1);
    let panel = facet.panel_bbox();
    let h = facet.options().cell_height();
    let meta = facet.cell_meta(9, 4).unwrap();
    assert_eq!(meta.x, panel.width - 96.0);
    assert_eq!(meta.y, panel.height - h);

    let leaf = facet.layout_result().col_leaf(4).unwrap();
    assert_eq!(leaf.max_x(), 480.0);
}

#[test]
fn test_frozen_rows_follow_the_page() {
    let mut config = table_config(10, 5, 600.0, 300.0);
    config.options.frozen.frozen_row_count = 1;
    config.options.frozen.frozen_trailing_row_count = 1;
    config.options.pagination = Some(Pagination {
        page_size: 4,
        current: 2,
    });
    let facet = Facet::from_config(config).unwrap();
    let indexes = facet.calculate_xy_indexes(0.0, 0.0);
    assert_eq!(indexes.frozen_row.rows, IndexRange::new(4, 4));
    assert_eq!(indexes.frozen_trailing_row.rows, IndexRange::new(7, 7));
    assert_eq!(indexes.center.rows, IndexRange::new(5, 6));
}

#[test]
fn test_counts_larger_than_axis_are_clamped() {
    let facet = frozen_facet(0, 9, 0, 0);
    assert_eq!(facet.frozen().frozen_col_count, 5);
    assert!(facet.calculate_xy_indexes(0.0, 0.0).center.cols.is_none());
}

#[test]
fn test_overlapping_rows_are_rejected() {
    let mut config = table_config(3, 5, 600.0, 300.0);
    config.options.frozen.frozen_row_count = 2;
    config.options.frozen.frozen_trailing_row_count = 2;
    let err = Facet::from_config(config).err().unwrap();
    assert!(matches!(
        err,
        PivotviewError::FrozenOverlap {
            leading: 2,
            trailing: 2,
            total: 3,
            ..
        }
    ));
}

#[test]
fn test_rejected_update_keeps_previous_layout() {
    let mut facet = frozen_facet(0, 0, 0, 0);
    let before = facet.layout_result().clone();
    let mut options = facet.options().clone();
    options.frozen.frozen_col_count = 3;
    options.frozen.frozen_trailing_col_count = 3;
    assert!(facet.apply_options(options).is_err());
    assert_eq!(facet.layout_result(), &before);
    assert_eq!(facet.frozen(), &FrozenConfig::default());
}

#[test]
fn test_rejected_update_restores_options_and_events() {
    let mut facet = frozen_facet(0, 0, 0, 0);
    facet.drain_events();
    let before = facet.options().clone();
    let mut options = before.clone();
    options.pagination = Some(Pagination {
        page_size: 4,
        current: 3,
    });
    options.frozen.frozen_col_count = 3;
    options.frozen.frozen_trailing_col_count = 3;
    assert!(facet.apply_options(options).is_err());

    assert_eq!(facet.options(), &before);
    assert_eq!(facet.cell_range(), IndexRange::new(0, 9));
    assert!(facet.drain_events().is_empty());
}

#[test]
fn test_short_last_page_shrinks_trailing_rows() {
    let mut config = table_config(25, 5, 600.0, 300.0);
    config.options.frozen.frozen_row_count = 3;
    config.options.frozen.frozen_trailing_row_count = 3;
    config.options.pagination = Some(Pagination {
        page_size: 10,
        current: 1,
    });
    let mut facet = Facet::from_config(config).unwrap();

    facet
        .apply_pagination(Some(Pagination {
            page_size: 10,
            current: 3,
        }))
        .unwrap();
    assert_eq!(facet.cell_range(), IndexRange::new(20, 24));
    assert_eq!(facet.frozen().frozen_row_count, 3);
    assert_eq!(facet.frozen().frozen_trailing_row_count, 2);

    let indexes = facet.calculate_xy_indexes(0.0, 0.0);
    assert_eq!(indexes.frozen_row.rows, IndexRange::new(20, 22));
    assert_eq!(indexes.frozen_trailing_row.rows, IndexRange::new(23, 24));
    assert!(indexes.center.rows.is_none());
    assert_no_cell_in_two_panes(&facet);
}

#[test]
fn test_filtering_rows_away_shrinks_trailing_rows() {
    let mut facet = frozen_facet(3, 0, 3, 0);
    let removed = (0..6).map(|r| serde_json::json!(format!("r{r}c0"))).collect();
    facet
        .apply_filter(FilterParam {
            filter_key: "c0".into(),
            filtered_values: removed,
        })
        .unwrap();
    assert_eq!(facet.row_count(), 4);
    assert_eq!(facet.frozen().frozen_row_count, 3);
    assert_eq!(facet.frozen().frozen_trailing_row_count, 1);
    assert_no_cell_in_two_panes(&facet);
}

#[test]
fn test_hiding_columns_shrinks_trailing_columns() {
    let mut facet = frozen_facet(0, 2, 0, 2);
    assert!(facet.hide_columns(&["c2".to_string(), "c3".to_string()]).unwrap());
    assert_eq!(facet.layout_result().col_leaf_nodes.len(), 3);
    assert_eq!(facet.frozen().frozen_col_count, 2);
    assert_eq!(facet.frozen().frozen_trailing_col_count, 1);
    assert_eq!(facet.session().hidden_columns_detail().len(), 1);
    assert_no_cell_in_two_panes(&facet);

    assert!(facet.show_columns(&["c2".to_string(), "c3".to_string()]).unwrap());
    assert_eq!(facet.frozen().frozen_trailing_col_count, 2);
}

fn assert_no_cell_in_two_panes(facet: &Facet) {
    let mut seen = HashSet::new();
    for metas in facet.visible_cells(0.0, 0.0).values() {
        for meta in metas {
            assert!(
                seen.insert((meta.row_index, meta.col_index)),
                "cell ({}, {}) handed out twice",
                meta.row_index,
                meta.col_index
            );
        }
    }
}
