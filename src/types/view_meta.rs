use serde::Serialize;
use serde_json::Value;

use super::Record;

/// Separator between the row and column part of a data cell id.
pub const DATA_CELL_ID_SEPARATOR: &str = "-";

/// Geometry, identity and payload of one data cell.
///
/// Produced on demand by [`crate::facet::Facet::cell_meta`]; never cached.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewMeta {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub row_index: usize,
    pub col_index: usize,
    pub row_id: String,
    pub col_id: String,
    pub id: String,
    /// `{ value_field: field_value }`
    pub data: Record,
    pub field_value: Option<Value>,
    pub value_field: String,
    pub is_totals: bool,
}

/// Id of the data cell at the intersection of a row and a column node.
pub fn data_cell_id(row_id: &str, col_id: &str) -> String {
    format!("{row_id}{DATA_CELL_ID_SEPARATOR}{col_id}")
}
