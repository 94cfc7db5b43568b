//! pivotview - layout engine for pivot and detail table sheets
//!
//! Turns a sheet configuration (fields, records, geometry options) into
//! positioned header hierarchies and answers viewport queries against them:
//! - Column and row header trees with adaptive, auto or fixed column widths
//! - Leading and trailing frozen rows and columns split into nine panes
//! - Pagination, sorting, filtering and hidden columns
//! - Per-cell geometry and data for whatever is on screen
//!
//! Drawing is left to the caller.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PivotView } from 'pivotview';
//! await init();
//! const view = new PivotView(JSON.stringify(config));
//! view.scrollBy(0, 120);
//! const cells = view.visibleCells();
//! ```

pub mod data_set;
pub mod error;
pub mod facet;
pub mod layout;
pub mod text;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use data_set::{DataSet, MemoryDataSet};
pub use error::{PivotviewError, Result};
pub use facet::{Facet, FacetEvent, LayoutResult};
pub use viewer::PivotView;

pub use types::*;

/// Lay out a sheet configuration and return the layout result as JSON.
///
/// # Errors
/// Returns an error if the configuration is invalid or serialization fails.
#[wasm_bindgen]
pub fn layout_sheet(config_json: &str) -> std::result::Result<String, JsValue> {
    let config = SheetConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let facet = Facet::from_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(facet.layout_result())
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
