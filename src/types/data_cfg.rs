use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SheetOptions;
use crate::error::PivotviewError;

/// One data record: field name to raw value.
pub type Record = serde_json::Map<String, Value>;

/// Fields driving the two axes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Fields {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    /// Measure fields (pivot mode)
    pub values: Vec<String>,
    /// Place measures as the last column level rather than the last row level
    pub value_in_cols: bool,
}

impl Default for Fields {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            values: Vec::new(),
            value_in_cols: true,
        }
    }
}

/// Display name for a field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMeta {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortMethod {
    Asc,
    Desc,
}

impl FromStr for SortMethod {
    type Err = PivotviewError;

    /// Case-insensitive `"asc"` or `"desc"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(PivotviewError::InvalidConfig(format!("unknown sort method {s:?}"))),
        }
    }
}

/// Sort directive for one field.
///
/// `sort_by` gives an explicit value order; values not listed keep their
/// relative order after the listed ones.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SortParam {
    pub sort_field_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_method: Option<SortMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<Vec<String>>,
}

/// Filter directive: drop records whose `filter_key` value is listed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterParam {
    pub filter_key: String,
    #[serde(default)]
    pub filtered_values: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DataCfg {
    pub fields: Fields,
    pub meta: Vec<FieldMeta>,
    pub data: Vec<Record>,
    /// Pre-aggregated total rows (pivot mode); totals omit the collapsed dimensions
    pub total_data: Vec<Record>,
    pub sort_params: Vec<SortParam>,
    pub filter_params: Vec<FilterParam>,
}

/// Complete sheet configuration as loaded from JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetConfig {
    pub data_cfg: DataCfg,
    pub options: SheetOptions,
}

impl SheetConfig {
    /// Parse a sheet configuration from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or has the wrong shape.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a sheet configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Render a raw value as label text (strings unquoted, null as empty).
pub fn value_to_label(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sheet_config_from_json() {
        let config = SheetConfig::from_json(
            r#"{
                "dataCfg": {
                    "fields": { "columns": ["city", "price"] },
                    "data": [{ "city": "Hangzhou", "price": 12 }],
                    "sortParams": [{ "sortFieldId": "price", "sortMethod": "DESC" }]
                },
                "options": { "showSeriesNumber": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.data_cfg.fields.columns, vec!["city", "price"]);
        assert!(config.data_cfg.fields.value_in_cols);
        assert_eq!(config.data_cfg.data.len(), 1);
        assert_eq!(
            config.data_cfg.sort_params[0].sort_method,
            Some(SortMethod::Desc)
        );
        assert!(config.options.show_series_number);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(SheetConfig::from_json("{ \"dataCfg\": 3 }").is_err());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SheetConfig::from_path("/nonexistent/pivotview/sheet.json").unwrap_err();
        assert!(matches!(err, PivotviewError::Io(_)));
    }

    #[test]
    fn test_sort_method_from_str() {
        assert_eq!("asc".parse::<SortMethod>().unwrap(), SortMethod::Asc);
        assert_eq!("DESC".parse::<SortMethod>().unwrap(), SortMethod::Desc);
        let err = "sideways".parse::<SortMethod>().unwrap_err();
        assert!(matches!(err, PivotviewError::InvalidConfig(_)));
        assert_eq!(err.to_string(), "Invalid config: unknown sort method \"sideways\"");
    }

    #[test]
    fn test_value_to_label() {
        assert_eq!(value_to_label(&json!("a")), "a");
        assert_eq!(value_to_label(&json!(12)), "12");
        assert_eq!(value_to_label(&json!(null)), "");
        assert_eq!(value_to_label(&json!(true)), "true");
    }
}
