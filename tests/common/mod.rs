//! Shared sheet configs for integration tests

#![allow(dead_code, clippy::unwrap_used)]

use pivotview::{Facet, SheetConfig};
use serde_json::json;

/// Detail table with `cols` columns named `c0..` and `rows` records.
///
/// Cell values are `"r{row}c{col}"`; columns use the default fixed width.
pub fn table_config(rows: usize, cols: usize, width: f32, height: f32) -> SheetConfig {
    let columns: Vec<String> = (0..cols).map(|c| format!("c{c}")).collect();
    let data: Vec<serde_json::Value> = (0..rows)
        .map(|r| {
            let record: serde_json::Map<String, serde_json::Value> = columns
                .iter()
                .enumerate()
                .map(|(c, field)| (field.clone(), json!(format!("r{r}c{c}"))))
                .collect();
            serde_json::Value::Object(record)
        })
        .collect();
    serde_json::from_value(json!({
        "dataCfg": {
            "fields": { "columns": columns },
            "data": data
        },
        "options": { "width": width, "height": height }
    }))
    .unwrap()
}

pub fn table_facet(rows: usize, cols: usize) -> Facet {
    Facet::from_config(table_config(rows, cols, 600.0, 300.0)).unwrap()
}

/// Two-level row header (province / city), one column dimension and one measure.
pub fn pivot_config() -> SheetConfig {
    serde_json::from_value(json!({
        "dataCfg": {
            "fields": {
                "rows": ["province", "city"],
                "columns": ["type"],
                "values": ["price"]
            },
            "data": [
                { "province": "Zhejiang", "city": "Hangzhou", "type": "pen", "price": 1 },
                { "province": "Zhejiang", "city": "Ningbo", "type": "paper", "price": 2 },
                { "province": "Sichuan", "city": "Chengdu", "type": "pen", "price": 3 }
            ],
            "totalData": [
                { "province": "Zhejiang", "city": "Hangzhou", "price": 10 }
            ]
        },
        "options": { "mode": "pivot", "width": 600, "height": 480 }
    }))
    .unwrap()
}
