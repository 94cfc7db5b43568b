use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default data cell width in pixels.
pub const DEFAULT_CELL_WIDTH: f32 = 96.0;
/// Default data cell height in pixels (before padding).
pub const DEFAULT_CELL_HEIGHT: f32 = 30.0;
/// Default column header row height in pixels.
pub const DEFAULT_COL_HEIGHT: f32 = 30.0;
/// Default series number column width in pixels.
pub const DEFAULT_SERIES_NUMBER_WIDTH: f32 = 80.0;

/// Which facet drives the layout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SheetMode {
    /// Flat detail table: one column per field, one row per record.
    #[default]
    Table,
    /// Nested dimension values on both axes, measures in the data cells.
    Pivot,
}

/// Global column sizing policy.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ColSizing {
    /// Divide the canvas width evenly across leaf columns, floored at `cellCfg.width`.
    Adaptive,
    /// Measure the longest label in a sample of each column.
    Auto,
    /// Use `cellCfg.width` for every column.
    #[default]
    Fixed,
}

/// Frozen pane counts.
///
/// `frozen_row_count + frozen_trailing_row_count` must not exceed the row count,
/// and likewise for columns.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FrozenConfig {
    pub frozen_row_count: usize,
    pub frozen_col_count: usize,
    pub frozen_trailing_row_count: usize,
    pub frozen_trailing_col_count: usize,
}

impl FrozenConfig {
    /// True when no pane is frozen.
    pub fn is_empty(&self) -> bool {
        self.frozen_row_count == 0
            && self.frozen_col_count == 0
            && self.frozen_trailing_row_count == 0
            && self.frozen_trailing_col_count == 0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_size: usize,
    /// 1-based page number
    pub current: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CellCfg {
    /// Fixed width, and the floor for adaptive widths
    pub width: f32,
    pub height: f32,
}

impl Default for CellCfg {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_WIDTH,
            height: DEFAULT_CELL_HEIGHT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ColCfg {
    pub height: f32,
    /// User-drag widths keyed by leaf value
    pub width_by_field_value: BTreeMap<String, f32>,
    /// User-drag heights keyed by field
    pub height_by_field: BTreeMap<String, f32>,
}

impl Default for ColCfg {
    fn default() -> Self {
        Self {
            height: DEFAULT_COL_HEIGHT,
            width_by_field_value: BTreeMap::new(),
            height_by_field: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RowCfg {
    /// Width of each row header level
    pub width: f32,
    pub width_by_field: BTreeMap<String, f32>,
    /// Row heights keyed by row node id
    pub height_by_field: BTreeMap<String, f32>,
}

impl Default for RowCfg {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_WIDTH,
            width_by_field: BTreeMap::new(),
            height_by_field: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 4.0,
            right: 8.0,
            bottom: 4.0,
            left: 8.0,
        }
    }
}

/// Font description handed to the text measurer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_family: String,
    pub font_weight: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_family: "sans-serif".to_string(),
            font_weight: "normal".to_string(),
        }
    }
}

impl TextStyle {
    /// CSS font shorthand, e.g. `bold 12px sans-serif`.
    pub fn css_font(&self) -> String {
        format!("{} {}px {}", self.font_weight, self.font_size, self.font_family)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CellStyle {
    pub padding: Padding,
    pub icon_size: f32,
    pub text: TextStyle,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            icon_size: 10.0,
            text: TextStyle::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    pub col_cell: CellStyle,
    pub data_cell: CellStyle,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisTotals {
    pub show_grand_totals: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Totals {
    pub row: AxisTotals,
    pub col: AxisTotals,
}

/// Options controlling sheet geometry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetOptions {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    pub mode: SheetMode,
    pub show_series_number: bool,
    pub series_number_width: f32,
    #[serde(flatten)]
    pub frozen: FrozenConfig,
    pub hidden_column_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Whether the row header scrolls horizontally with the panel
    pub scroll_contains_row_header: bool,
    pub cell_cfg: CellCfg,
    pub col_cfg: ColCfg,
    pub row_cfg: RowCfg,
    pub style: Style,
    pub col_sizing: ColSizing,
    pub totals: Totals,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 480.0,
            mode: SheetMode::default(),
            show_series_number: false,
            series_number_width: DEFAULT_SERIES_NUMBER_WIDTH,
            frozen: FrozenConfig::default(),
            hidden_column_fields: Vec::new(),
            pagination: None,
            scroll_contains_row_header: false,
            cell_cfg: CellCfg::default(),
            col_cfg: ColCfg::default(),
            row_cfg: RowCfg::default(),
            style: Style::default(),
            col_sizing: ColSizing::default(),
            totals: Totals::default(),
        }
    }
}

impl SheetOptions {
    /// Width reserved for the series number column, 0 when disabled.
    pub fn series_number_width(&self) -> f32 {
        if self.show_series_number {
            self.series_number_width
        } else {
            0.0
        }
    }

    /// Data row height including vertical padding.
    pub fn cell_height(&self) -> f32 {
        let padding = self.style.col_cell.padding;
        self.cell_cfg.height + padding.top + padding.bottom
    }
}
