//! `PivotView`: the WASM-exported entry point.
//!
//! This module wraps a [`Facet`] for JavaScript callers:
//! - Configuration arrives as a JSON sheet config
//! - Layout, visible cells and events leave as JSON (or JS objects on wasm32)
//! - Scroll position is kept here and clamped to the content
//!
//! Drawing stays on the JavaScript side; it asks for the visible cells of the
//! current scroll position and renders them into the pane groups.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlCanvasElement;

use crate::data_set::{DataSet, MemoryDataSet};
use crate::facet::Facet;
use crate::types::{FilterParam, Pagination, SheetConfig, SortMethod, SortParam};

#[cfg(target_arch = "wasm32")]
use crate::text::{CachedMeasurer, CanvasTextMeasurer};

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(format!("JSON serialization error: {e}")))
}

/// Interactive pivot/table sheet exported to JavaScript.
#[wasm_bindgen]
pub struct PivotView {
    facet: Facet<MemoryDataSet>,
    scroll_x: f32,
    scroll_y: f32,
    #[cfg(target_arch = "wasm32")]
    listener: Option<Function>,
}

#[wasm_bindgen]
impl PivotView {
    /// Create a view from a JSON sheet config (`{ dataCfg, options }`).
    ///
    /// # Errors
    /// Returns an error if the config is not valid JSON or its frozen counts overlap.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<PivotView, JsValue> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        let config = SheetConfig::from_json(config_json).map_err(js_error)?;
        let facet = Facet::from_config(config).map_err(js_error)?;
        Ok(Self::from_facet(facet))
    }

    /// Create a view that measures "auto" column widths with a canvas context.
    ///
    /// Without a canvas a detached one is created on the current document.
    ///
    /// # Errors
    /// Returns an error if no 2D context is available or the config is invalid.
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen(js_name = "newWithCanvas")]
    pub fn new_with_canvas(config_json: &str, canvas: Option<HtmlCanvasElement>) -> Result<PivotView, JsValue> {
        console_error_panic_hook::set_once();

        let config = SheetConfig::from_json(config_json)?;
        let inner = match canvas {
            Some(canvas) => CanvasTextMeasurer::new(&canvas)?,
            None => CanvasTextMeasurer::detached()?,
        };
        let measurer = CachedMeasurer::new(inner);
        let data_set = MemoryDataSet::new(&config.data_cfg);
        let facet = Facet::new(config, data_set, Box::new(measurer))?;
        Ok(Self::from_facet(facet))
    }

    /// Layout result (header nodes and hierarchies) as JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "layoutJson")]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        to_json(self.facet.layout_result())
    }

    /// Visible cells at the current scroll position, keyed by pane, as JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "visibleCellsJson")]
    pub fn visible_cells_json(&self) -> Result<String, JsValue> {
        to_json(&self.facet.visible_cells(self.scroll_x, self.scroll_y))
    }

    /// One data cell as JSON, `None` when out of range.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "cellMetaJson")]
    pub fn cell_meta_json(&self, row_index: usize, col_index: usize) -> Result<Option<String>, JsValue> {
        self.facet
            .cell_meta(row_index, col_index)
            .map(|meta| to_json(&meta))
            .transpose()
    }

    /// Pane translations, divider lines and clip rectangles at the current scroll position.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "frozenGeometryJson")]
    pub fn frozen_geometry_json(&self) -> Result<String, JsValue> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct FrozenGeometry {
            offsets: std::collections::BTreeMap<crate::layout::FrozenRegion, crate::facet::GroupOffset>,
            split_lines: std::collections::BTreeMap<crate::layout::FrozenRegion, crate::types::Line>,
            clip_rects: std::collections::BTreeMap<crate::layout::FrozenRegion, crate::types::Rect>,
        }
        to_json(&FrozenGeometry {
            offsets: self.facet.frozen_group_offsets(self.scroll_x, self.scroll_y),
            split_lines: self.facet.frozen_split_lines(),
            clip_rects: self.facet.clip_rects(self.scroll_x, self.scroll_y),
        })
    }

    /// Events queued since the last call, as a JSON array.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "takeEventsJson")]
    pub fn take_events_json(&mut self) -> Result<String, JsValue> {
        to_json(&self.facet.drain_events())
    }

    /// Scroll by a delta. Returns whether the position changed.
    #[wasm_bindgen(js_name = "scrollBy")]
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) -> bool {
        self.set_scroll(self.scroll_x + delta_x, self.scroll_y + delta_y)
    }

    /// Scroll to a position, clamped to the content. Returns whether the position changed.
    #[wasm_bindgen(js_name = "setScroll")]
    pub fn set_scroll(&mut self, scroll_x: f32, scroll_y: f32) -> bool {
        let (x, y) = self.facet.clamp_scroll(scroll_x, scroll_y);
        let changed = (x - self.scroll_x).abs() > f32::EPSILON || (y - self.scroll_y).abs() > f32::EPSILON;
        self.scroll_x = x;
        self.scroll_y = y;
        changed
    }

    #[wasm_bindgen(getter, js_name = "scrollX")]
    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    #[wasm_bindgen(getter, js_name = "scrollY")]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    #[wasm_bindgen(js_name = "rowCount")]
    pub fn row_count(&self) -> usize {
        self.facet.row_count()
    }

    #[wasm_bindgen(js_name = "displayRowCount")]
    pub fn display_row_count(&self) -> usize {
        self.facet.data_set().display_data().len()
    }

    /// Resize the canvas.
    ///
    /// # Errors
    /// Returns an error if the new layout is rejected.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.facet.apply_canvas_resize(width, height).map_err(js_error)?;
        self.after_layout();
        Ok(())
    }

    /// Set a dragged width for the columns with this value.
    ///
    /// # Errors
    /// Returns an error if the new layout is rejected.
    #[wasm_bindgen(js_name = "resizeColumn")]
    pub fn resize_column(&mut self, value: &str, width: f32) -> Result<(), JsValue> {
        self.facet.apply_col_resize(value, width).map_err(js_error)?;
        self.after_layout();
        Ok(())
    }

    /// Sort by one field; `method` is `"ASC"` or `"DESC"`.
    ///
    /// # Errors
    /// Returns an error on an unknown method or a rejected layout.
    pub fn sort(&mut self, field: &str, method: &str) -> Result<(), JsValue> {
        let sort_method: SortMethod = method.parse().map_err(js_error)?;
        self.facet
            .apply_sort(SortParam {
                sort_field_id: field.to_string(),
                sort_method: Some(sort_method),
                sort_by: None,
            })
            .map_err(js_error)?;
        self.after_layout();
        Ok(())
    }

    /// Filter out the JSON array of values from `key`; an empty array clears the filter.
    ///
    /// # Errors
    /// Returns an error if the values are not a JSON array or the layout is rejected.
    pub fn filter(&mut self, key: &str, values_json: &str) -> Result<(), JsValue> {
        let filtered_values: Vec<serde_json::Value> =
            serde_json::from_str(values_json).map_err(js_error)?;
        self.facet
            .apply_filter(FilterParam {
                filter_key: key.to_string(),
                filtered_values,
            })
            .map_err(js_error)?;
        self.after_layout();
        Ok(())
    }

    /// Hide the JSON array of column fields. Returns whether anything changed.
    ///
    /// # Errors
    /// Returns an error if the fields are not a JSON array or the layout is rejected.
    #[wasm_bindgen(js_name = "hideColumns")]
    pub fn hide_columns(&mut self, fields_json: &str) -> Result<bool, JsValue> {
        let fields: Vec<String> = serde_json::from_str(fields_json).map_err(js_error)?;
        let changed = self.facet.hide_columns(&fields).map_err(js_error)?;
        self.after_layout();
        Ok(changed)
    }

    /// Restore the JSON array of column fields. Returns whether anything changed.
    ///
    /// # Errors
    /// Returns an error if the fields are not a JSON array or the layout is rejected.
    #[wasm_bindgen(js_name = "showColumns")]
    pub fn show_columns(&mut self, fields_json: &str) -> Result<bool, JsValue> {
        let fields: Vec<String> = serde_json::from_str(fields_json).map_err(js_error)?;
        let changed = self.facet.show_columns(&fields).map_err(js_error)?;
        self.after_layout();
        Ok(changed)
    }

    /// Switch to a 1-based page; a page size of 0 turns pagination off.
    ///
    /// # Errors
    /// Returns an error if the layout is rejected.
    #[wasm_bindgen(js_name = "setPage")]
    pub fn set_page(&mut self, page_size: usize, current: usize) -> Result<(), JsValue> {
        let pagination = (page_size > 0).then_some(Pagination { page_size, current });
        self.facet.apply_pagination(pagination).map_err(js_error)?;
        self.scroll_y = 0.0;
        self.after_layout();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl PivotView {
    /// Layout result as a JS object.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.facet.layout_result())
            .map_err(|e| js_error(format!("Serialization error: {e}")))
    }

    /// Visible cells at the current scroll position as a JS object.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "visibleCells")]
    pub fn visible_cells(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.facet.visible_cells(self.scroll_x, self.scroll_y))
            .map_err(|e| js_error(format!("Serialization error: {e}")))
    }

    /// Call `listener(event)` for every facet event from now on.
    #[wasm_bindgen(js_name = "setEventListener")]
    pub fn set_event_listener(&mut self, listener: Option<Function>) {
        self.listener = listener;
    }
}

impl PivotView {
    fn from_facet(facet: Facet<MemoryDataSet>) -> Self {
        let mut view = Self {
            facet,
            scroll_x: 0.0,
            scroll_y: 0.0,
            #[cfg(target_arch = "wasm32")]
            listener: None,
        };
        view.after_layout();
        view
    }

    pub fn facet(&self) -> &Facet<MemoryDataSet> {
        &self.facet
    }

    /// Re-clamp the scroll position and hand queued events to the listener.
    fn after_layout(&mut self) {
        let (x, y) = self.facet.clamp_scroll(self.scroll_x, self.scroll_y);
        self.scroll_x = x;
        self.scroll_y = y;
        self.dispatch_events();
    }

    #[cfg(target_arch = "wasm32")]
    fn dispatch_events(&mut self) {
        let Some(listener) = self.listener.as_ref() else {
            return;
        };
        for event in self.facet.drain_events() {
            match serde_wasm_bindgen::to_value(&event) {
                Ok(value) => {
                    if let Err(e) = listener.call1(&JsValue::NULL, &value) {
                        log::warn!("event listener failed: {e:?}");
                    }
                }
                Err(e) => log::warn!("cannot serialize event: {e}"),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[allow(clippy::unused_self)]
    fn dispatch_events(&mut self) {}
}
