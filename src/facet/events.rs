//! Notifications produced by the facet for the interaction layer.

use serde::Serialize;

use super::session::HiddenColumnsInfo;

/// Something the interaction layer may need to react to (reset selection,
/// redraw expand buttons, refresh totals).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FacetEvent {
    /// A layout pass finished.
    #[serde(rename_all = "camelCase")]
    LayoutUpdated {
        col_leaf_count: usize,
        row_count: usize,
    },
    /// Columns were hidden; `detail` lists every hidden group so far.
    #[serde(rename_all = "camelCase")]
    ColumnsHidden {
        current: HiddenColumnsInfo,
        detail: Vec<HiddenColumnsInfo>,
    },
    /// Hidden columns were restored.
    #[serde(rename_all = "camelCase")]
    ColumnsShown { fields: Vec<String> },
    #[serde(rename_all = "camelCase")]
    RangeSorted { display_rows: usize },
    #[serde(rename_all = "camelCase")]
    RangeFiltered { display_rows: usize },
}
