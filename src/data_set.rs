//! Data-set capability consumed by the facet.
//!
//! The facet treats the data set as an opaque query interface: it asks for
//! display rows, distinct dimension values and single cell values, and never
//! looks at how they were produced. [`MemoryDataSet`] is an in-memory
//! implementation over JSON records that applies sort and filter params.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{
    value_to_label, DataCfg, FieldMeta, Fields, FilterParam, Record, SortMethod, SortParam,
};

/// Dimension path: field to value label.
pub type DimensionQuery = BTreeMap<String, String>;

/// Address of a single data cell.
#[derive(Debug, Clone, Copy)]
pub enum CellQuery<'a> {
    /// Detail table: a column field in a display row.
    Table { col: &'a str, row_index: usize },
    /// Pivot: a measure at a dimension path.
    Pivot {
        query: &'a DimensionQuery,
        value_field: &'a str,
    },
}

/// Query interface the facet needs from its data source.
pub trait DataSet {
    /// Records after filtering and sorting, in display order.
    fn display_data(&self) -> &[Record];

    /// Value of one cell, `None` when there is no such cell.
    fn cell_data(&self, query: CellQuery<'_>) -> Option<Value>;

    /// All display records whose dimensions match `query`.
    fn multi_data(&self, query: &DimensionQuery) -> Vec<&Record>;

    /// Distinct values of `field` among records matching `query`, in first-seen order.
    fn dimension_values(&self, field: &str, query: &DimensionQuery) -> Vec<String>;

    /// Display name of a field.
    fn field_name(&self, field: &str) -> String;

    /// Format a raw value of `field` for display.
    fn format_field(&self, _field: &str, value: &Value) -> String {
        value_to_label(value)
    }

    /// Replace the active sort and filter params.
    fn set_params(&mut self, sort_params: &[SortParam], filter_params: &[FilterParam]);

    /// Replace the field configuration.
    fn set_fields(&mut self, _fields: &Fields) {}
}

/// In-memory data set over JSON records.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataSet {
    fields: Fields,
    meta: Vec<FieldMeta>,
    data: Vec<Record>,
    total_data: Vec<Record>,
    display: Vec<Record>,
    sort_params: Vec<SortParam>,
    filter_params: Vec<FilterParam>,
}

impl MemoryDataSet {
    pub fn new(cfg: &DataCfg) -> Self {
        let mut data_set = Self {
            fields: cfg.fields.clone(),
            meta: cfg.meta.clone(),
            data: cfg.data.clone(),
            total_data: cfg.total_data.clone(),
            display: Vec::new(),
            sort_params: cfg.sort_params.clone(),
            filter_params: cfg.filter_params.clone(),
        };
        data_set.process();
        data_set
    }

    pub fn sort_params(&self) -> &[SortParam] {
        &self.sort_params
    }

    pub fn filter_params(&self) -> &[FilterParam] {
        &self.filter_params
    }

    fn process(&mut self) {
        let mut display: Vec<Record> = self
            .data
            .iter()
            .filter(|record| !is_filtered_out(record, &self.filter_params))
            .cloned()
            .collect();
        if !self.sort_params.is_empty() {
            let params = &self.sort_params;
            // stable: equal keys keep input order
            display.sort_by(|a, b| compare_records(a, b, params));
        }
        log::debug!(
            "data set processed: {} of {} records displayed",
            display.len(),
            self.data.len()
        );
        self.display = display;
    }

    fn is_dimension(&self, field: &str) -> bool {
        self.fields.rows.iter().any(|f| f == field) || self.fields.columns.iter().any(|f| f == field)
    }

    /// Pivot match: every queried dimension equal, every other dimension absent
    /// (so total rows only answer for the collapsed dimensions).
    fn matches_exactly(&self, record: &Record, query: &DimensionQuery) -> bool {
        if !matches_query(record, query) {
            return false;
        }
        record.iter().all(|(key, value)| {
            query.contains_key(key) || !self.is_dimension(key) || value.is_null()
        })
    }
}

impl DataSet for MemoryDataSet {
    fn display_data(&self) -> &[Record] {
        &self.display
    }

    fn cell_data(&self, query: CellQuery<'_>) -> Option<Value> {
        match query {
            CellQuery::Table { col, row_index } => {
                self.display.get(row_index).and_then(|r| r.get(col)).cloned()
            }
            CellQuery::Pivot { query, value_field } => self
                .display
                .iter()
                .chain(self.total_data.iter())
                .find(|r| self.matches_exactly(r, query))
                .and_then(|r| r.get(value_field))
                .cloned(),
        }
    }

    fn multi_data(&self, query: &DimensionQuery) -> Vec<&Record> {
        self.display
            .iter()
            .filter(|r| matches_query(r, query))
            .collect()
    }

    fn dimension_values(&self, field: &str, query: &DimensionQuery) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for record in self.display.iter().filter(|r| matches_query(r, query)) {
            let Some(value) = record.get(field) else {
                continue;
            };
            let label = value_to_label(value);
            if !values.contains(&label) {
                values.push(label);
            }
        }
        values
    }

    fn field_name(&self, field: &str) -> String {
        self.meta
            .iter()
            .find(|m| m.field == field)
            .and_then(|m| m.name.clone())
            .unwrap_or_else(|| field.to_string())
    }

    fn set_params(&mut self, sort_params: &[SortParam], filter_params: &[FilterParam]) {
        self.sort_params = sort_params.to_vec();
        self.filter_params = filter_params.to_vec();
        self.process();
    }

    fn set_fields(&mut self, fields: &Fields) {
        // dimension set drives which records answer total queries
        self.fields = fields.clone();
    }
}

fn matches_query(record: &Record, query: &DimensionQuery) -> bool {
    query
        .iter()
        .all(|(field, value)| record.get(field).is_some_and(|v| value_to_label(v) == *value))
}

fn is_filtered_out(record: &Record, filter_params: &[FilterParam]) -> bool {
    filter_params.iter().any(|param| {
        record
            .get(&param.filter_key)
            .is_some_and(|v| param.filtered_values.contains(v))
    })
}

fn compare_records(a: &Record, b: &Record, params: &[SortParam]) -> Ordering {
    for param in params {
        let left = a.get(&param.sort_field_id).unwrap_or(&Value::Null);
        let right = b.get(&param.sort_field_id).unwrap_or(&Value::Null);
        let ordering = match &param.sort_by {
            Some(order) => compare_by_list(&value_to_label(left), &value_to_label(right), order),
            None => {
                let ord = compare_values(left, right);
                match param.sort_method {
                    Some(SortMethod::Desc) => ord.reverse(),
                    _ => ord,
                }
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Position in an explicit order; unlisted values sort after listed ones.
pub(crate) fn compare_by_list(left: &str, right: &str, order: &[String]) -> Ordering {
    let rank = |v: &str| order.iter().position(|o| o == v).unwrap_or(order.len());
    rank(left).cmp(&rank(right))
}

/// Numbers numerically, everything else by label; nulls last.
pub(crate) fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(l), Value::Number(r)) => {
            let l = l.as_f64().unwrap_or(0.0);
            let r = r.as_f64().unwrap_or(0.0);
            l.partial_cmp(&r).unwrap_or(Ordering::Equal)
        }
        _ => value_to_label(left).cmp(&value_to_label(right)),
    }
}
