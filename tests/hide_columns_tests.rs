//! Hidden column tests
//!
//! Hiding and restoring detail table columns against the snapshot of the
//! first full layout.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{table_config, table_facet};
use pivotview::layout::Node;
use pivotview::{Facet, FacetEvent, Fields};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn visible_fields(facet: &Facet) -> Vec<String> {
    facet
        .layout_result()
        .col_leaves()
        .map(|n| n.field.clone())
        .collect()
}

#[test]
fn test_hide_and_show_round_trip() {
    let mut facet = table_facet(5, 5);
    let before: Vec<Node> = facet.layout_result().col_leaves().cloned().collect();

    assert!(facet.hide_columns(&strings(&["c1", "c2"])).unwrap());
    assert_eq!(visible_fields(&facet), strings(&["c0", "c3", "c4"]));
    assert_eq!(facet.hidden_columns_thunk_group(), vec![strings(&["c1", "c2"])]);
    // remaining columns close the gap
    assert_eq!(facet.layout_result().col_leaf(1).unwrap().x, 96.0);

    assert!(facet.show_columns(&strings(&["c1", "c2"])).unwrap());
    let after: Vec<Node> = facet.layout_result().col_leaves().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_snapshot_keeps_hidden_columns() {
    let mut facet = table_facet(5, 4);
    facet.hide_columns(&strings(&["c3"])).unwrap();
    let snapshot = facet.session().initial_column_nodes();
    assert_eq!(snapshot.len(), 4);
    assert_eq!(snapshot[3].field, "c3");
    assert_eq!(snapshot[3].x, 3.0 * 96.0);
}

#[test]
fn test_columns_hidden_from_the_start_are_in_the_snapshot() {
    let mut config = table_config(5, 4, 600.0, 300.0);
    config.options.hidden_column_fields = strings(&["c0"]);
    let facet = Facet::from_config(config).unwrap();
    assert_eq!(visible_fields(&facet), strings(&["c1", "c2", "c3"]));
    assert_eq!(facet.session().initial_column_nodes().len(), 4);
    assert_eq!(
        facet
            .hidden_column_display_sibling(&strings(&["c0"]))
            .unwrap()
            .field,
        "c1"
    );
}

#[test]
fn test_hide_events_describe_the_group() {
    let mut facet = table_facet(5, 5);
    facet.drain_events();
    facet.hide_columns(&strings(&["c4"])).unwrap();
    let events = facet.drain_events();
    let Some(FacetEvent::ColumnsHidden { current, detail }) = events.first() else {
        panic!("expected ColumnsHidden first, got {events:?}");
    };
    assert_eq!(current.fields().collect::<Vec<_>>(), vec!["c4"]);
    assert_eq!(current.display_sibling_node.as_ref().unwrap().field, "c3");
    assert_eq!(detail.len(), 1);
    assert!(facet.is_last_column_after_hidden("c3"));
}

#[test]
fn test_separate_hides_accumulate() {
    let mut facet = table_facet(5, 6);
    facet.hide_columns(&strings(&["c1"])).unwrap();
    facet.hide_columns(&strings(&["c4"])).unwrap();
    assert_eq!(visible_fields(&facet), strings(&["c0", "c2", "c3", "c5"]));
    assert_eq!(
        facet.hidden_columns_thunk_group(),
        vec![strings(&["c1"]), strings(&["c4"])]
    );
    assert_eq!(facet.session().hidden_columns_detail().len(), 2);

    facet.show_columns(&strings(&["c1"])).unwrap();
    assert_eq!(facet.session().hidden_columns_detail().len(), 1);
    assert_eq!(facet.options().hidden_column_fields, strings(&["c4"]));
}

#[test]
fn test_field_change_retakes_snapshot() {
    let mut facet = table_facet(5, 3);
    assert_eq!(facet.session().initial_column_nodes().len(), 3);
    facet
        .apply_field_change(Fields {
            columns: strings(&["c0", "c1"]),
            ..Fields::default()
        })
        .unwrap();
    assert_eq!(facet.session().initial_column_nodes().len(), 2);
    assert_eq!(
        facet.session().last_applied_fields(),
        Some(strings(&["c0", "c1"]).as_slice())
    );
}
