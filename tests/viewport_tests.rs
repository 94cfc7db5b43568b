//! Viewport index tests
//!
//! Visible row and column ranges for scroll positions, including exact
//! boundary hits and pagination.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::table_config;
use pivotview::layout::{calculate_in_view_indexes, IndexRange, PrefixExtents, UniformExtents};
use pivotview::{BBox, Facet, Pagination};
use test_case::test_case;

/// Columns at offsets [0, 100, 250, 400] in a 150px wide panel.
fn uneven_facet() -> Facet {
    let mut config = table_config(30, 3, 150.0, 300.0);
    let widths = &mut config.options.col_cfg.width_by_field_value;
    widths.insert("c0".into(), 100.0);
    widths.insert("c1".into(), 150.0);
    widths.insert("c2".into(), 150.0);
    Facet::from_config(config).unwrap()
}

#[test_case(0.0, 0, 1 ; "from the left edge")]
#[test_case(100.0, 1, 1 ; "start on a boundary")]
#[test_case(120.0, 1, 2 ; "straddling two columns")]
#[test_case(250.0, 2, 2 ; "scrolled to the end")]
fn test_visible_columns(scroll_x: f32, start: usize, end: usize) {
    let facet = uneven_facet();
    let indexes = facet.calculate_xy_indexes(scroll_x, 0.0);
    assert_eq!(indexes.center.cols, IndexRange::new(start, end));
}

#[test]
fn test_scroll_beyond_content_is_clamped() {
    let facet = uneven_facet();
    assert_eq!(facet.clamp_scroll(1000.0, 0.0).0, 250.0);
    let indexes = facet.calculate_xy_indexes(-40.0, -40.0);
    assert_eq!(indexes.center.cols, IndexRange::new(0, 1));
    assert_eq!(indexes.center.rows.unwrap().start, 0);
}

#[test]
fn test_rows_exact_fit_excludes_next_row() {
    let heights = UniformExtents::new(30.0, 100);
    let widths = PrefixExtents::from_extents([100.0]);
    let panel = BBox::new(0.0, 0.0, 100.0, 90.0);
    let indexes = calculate_in_view_indexes(0.0, 30.0, &widths, &heights, panel, 0.0);
    assert_eq!(indexes.rows, IndexRange::new(1, 3));
    let indexes = calculate_in_view_indexes(0.0, 45.0, &widths, &heights, panel, 0.0);
    assert_eq!(indexes.rows, IndexRange::new(1, 4));
}

#[test]
fn test_paged_rows_are_absolute() {
    let mut config = table_config(30, 3, 600.0, 300.0);
    config.options.pagination = Some(Pagination {
        page_size: 10,
        current: 3,
    });
    let facet = Facet::from_config(config).unwrap();
    let h = facet.options().cell_height();
    let indexes = facet.calculate_xy_indexes(0.0, h);
    let rows = indexes.center.rows.unwrap();
    // page-relative rows 1..=8 of the third page
    assert_eq!(rows.start, 21);
    assert_eq!(rows.end, 28);
}

#[test]
fn test_visible_cells_cover_the_panel() {
    let facet = uneven_facet();
    let h = facet.options().cell_height();
    let cells = facet.visible_cells(120.0, 0.0);
    let center = &cells[&pivotview::layout::FrozenRegion::Center];
    let rows = facet.calculate_xy_indexes(120.0, 0.0).center.rows.unwrap();
    assert_eq!(center.len(), rows.len() * 2);
    assert!(center.iter().all(|m| m.col_index == 1 || m.col_index == 2));
    assert!(center.iter().all(|m| m.height == h));
}
