//! Data cell geometry and payload.

use serde_json::Value;

use super::Facet;
use crate::data_set::{CellQuery, DataSet, DimensionQuery};
use crate::layout::frozen::{is_frozen_trailing_col, is_frozen_trailing_row};
use crate::layout::node::EXTRA_FIELD;
use crate::layout::{AxisExtents, IndexRange, Node};
use crate::types::{data_cell_id, Record, SheetMode, ViewMeta};

impl<D: DataSet> Facet<D> {
    /// Geometry and data of the cell at `(row_index, col_index)`.
    ///
    /// Out-of-range indexes give `None`. Cells of trailing frozen rows and
    /// columns are positioned relative to the panel's bottom and right edges.
    pub fn cell_meta(&self, row_index: usize, col_index: usize) -> Option<ViewMeta> {
        let col = self.layout.col_leaf(col_index)?;
        if row_index >= self.row_count() {
            return None;
        }
        let mut meta = match self.options.mode {
            SheetMode::Table => self.table_cell_meta(row_index, col_index, col),
            SheetMode::Pivot => self.pivot_cell_meta(row_index, col_index, col)?,
        };

        let col_len = self.layout.col_leaf_nodes.len();
        if is_frozen_trailing_col(col_index, self.frozen.frozen_trailing_col_count, col_len) {
            meta.x = self.panel_bbox.width - self.col_widths.range_extent(IndexRange {
                start: col_index,
                end: col_len.saturating_sub(1),
            });
        }
        if let Some(range) = self.cell_range() {
            if is_frozen_trailing_row(row_index, range.end, self.frozen.frozen_trailing_row_count) {
                // heights are indexed within the page
                let page_row = row_index.saturating_sub(range.start);
                meta.y = self.panel_bbox.height
                    - self.row_heights.range_extent(IndexRange {
                        start: page_row,
                        end: range.len().saturating_sub(1),
                    });
            }
        }
        Some(meta)
    }

    #[allow(clippy::cast_precision_loss)]
    fn table_cell_meta(&self, row_index: usize, col_index: usize, col: &Node) -> ViewMeta {
        let cell_height = self.options.cell_height();
        let field_value = if col.is_series_number() {
            Some(Value::from(row_index + 1))
        } else {
            self.data_set.cell_data(CellQuery::Table {
                col: &col.field,
                row_index,
            })
        };
        let row_id = row_index.to_string();
        ViewMeta {
            x: col.x,
            y: cell_height * row_index as f32,
            width: col.width,
            height: cell_height,
            row_index,
            col_index,
            id: data_cell_id(&row_id, &col.id),
            row_id,
            col_id: col.id.clone(),
            data: single_entry(&col.field, field_value.clone()),
            field_value,
            value_field: col.field.clone(),
            is_totals: false,
        }
    }

    fn pivot_cell_meta(&self, row_index: usize, col_index: usize, col: &Node) -> Option<ViewMeta> {
        let row = self.layout.row_leaf(row_index)?;
        let mut query: DimensionQuery = row.query.clone();
        query.extend(col.query.iter().map(|(k, v)| (k.clone(), v.clone())));

        let measure_leaf = if self.fields.value_in_cols { col } else { row };
        let value_field = if measure_leaf.field == EXTRA_FIELD {
            measure_leaf.value.clone()
        } else {
            self.fields.values.first().cloned().unwrap_or_default()
        };
        let field_value = self.data_set.cell_data(CellQuery::Pivot {
            query: &query,
            value_field: &value_field,
        });
        Some(ViewMeta {
            x: col.x,
            y: row.y,
            width: col.width,
            height: row.height,
            row_index,
            col_index,
            id: data_cell_id(&row.id, &col.id),
            row_id: row.id.clone(),
            col_id: col.id.clone(),
            data: single_entry(&value_field, field_value.clone()),
            field_value,
            value_field,
            is_totals: row.is_totals || col.is_totals,
        })
    }
}

fn single_entry(field: &str, value: Option<Value>) -> Record {
    let mut record = Record::new();
    record.insert(field.to_string(), value.unwrap_or(Value::Null));
    record
}
