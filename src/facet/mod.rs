//! The facet: owner of the layout pipeline for one sheet.
//!
//! A layout pass builds both header hierarchies, assigns coordinates and
//! derives the corner and panel boxes. Viewport queries are served against
//! the last completed pass. Every `apply_*` method mutates configuration and
//! runs a fresh pass before returning, so the two phases never interleave. A
//! rejected pass rolls the configuration back to what it was before the call.

mod cell_meta;
mod events;
mod frozen_group;
mod hide;
mod session;

use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use serde::Serialize;

pub use events::FacetEvent;
pub use frozen_group::GroupOffset;
pub use session::{FacetSession, HiddenColumnsInfo};

use crate::data_set::{DataSet, MemoryDataSet};
use crate::error::Result;
use crate::layout::frozen::{
    calculate_frozen_corner_cells, effective_frozen_config, validate_frozen_config,
};
use crate::layout::{
    build_header_hierarchy, calculate_in_view_indexes, layout_col_hierarchy, layout_row_hierarchy,
    split_in_view_indexes_with_frozen, AxisExtents, CoordinateContext, CoordinateHook,
    FrozenPanelIndexes, FrozenRegion, HeaderBuildParams, Hierarchy, IndexRange, Node, NodeId,
    PanelIndexes, PrefixExtents, UniformExtents,
};
use crate::text::{CachedMeasurer, EstimatingMeasurer, TextMeasurer};
use crate::types::{
    Axis, BBox, Fields, FilterParam, FrozenConfig, Pagination, SheetConfig, SheetMode, SheetOptions,
    SortParam, ViewMeta,
};

/// Output of one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub cols_hierarchy: Hierarchy,
    pub rows_hierarchy: Hierarchy,
    pub col_leaf_nodes: Vec<NodeId>,
    pub row_leaf_nodes: Vec<NodeId>,
}

impl LayoutResult {
    pub fn col_nodes(&self) -> &[Node] {
        self.cols_hierarchy.nodes()
    }

    pub fn row_nodes(&self) -> &[Node] {
        self.rows_hierarchy.nodes()
    }

    pub fn col_leaf(&self, col_index: usize) -> Option<&Node> {
        self.col_leaf_nodes
            .get(col_index)
            .and_then(|&id| self.cols_hierarchy.node(id))
    }

    pub fn row_leaf(&self, row_index: usize) -> Option<&Node> {
        self.row_leaf_nodes
            .get(row_index)
            .and_then(|&id| self.rows_hierarchy.node(id))
    }

    pub fn col_leaves(&self) -> impl Iterator<Item = &Node> {
        self.col_leaf_nodes
            .iter()
            .filter_map(|&id| self.cols_hierarchy.node(id))
    }

    pub fn row_leaves(&self) -> impl Iterator<Item = &Node> {
        self.row_leaf_nodes
            .iter()
            .filter_map(|&id| self.rows_hierarchy.node(id))
    }
}

/// Row extents of the active page.
#[derive(Debug, Clone, PartialEq)]
enum RowExtents {
    /// Detail table: every row has the cell height
    Uniform(UniformExtents),
    /// Pivot: row leaves may be resized individually
    Prefix(PrefixExtents),
}

impl Default for RowExtents {
    fn default() -> Self {
        Self::Uniform(UniformExtents::new(0.0, 0))
    }
}

impl AxisExtents for RowExtents {
    fn len(&self) -> usize {
        match self {
            Self::Uniform(e) => e.len(),
            Self::Prefix(e) => e.len(),
        }
    }

    fn offset(&self, index: usize) -> f32 {
        match self {
            Self::Uniform(e) => e.offset(index),
            Self::Prefix(e) => e.offset(index),
        }
    }

    fn index_range(&self, min: f32, max: f32) -> Option<IndexRange> {
        match self {
            Self::Uniform(e) => e.index_range(min, max),
            Self::Prefix(e) => e.index_range(min, max),
        }
    }
}

/// Visible data cells of every pane.
pub type VisibleCells = BTreeMap<FrozenRegion, Vec<ViewMeta>>;

/// State a rejected re-layout rolls back to.
struct Checkpoint {
    options: SheetOptions,
    fields: Fields,
    sort_params: Vec<SortParam>,
    filter_params: Vec<FilterParam>,
    hook: Option<Rc<CoordinateHook>>,
    session: FacetSession,
    event_count: usize,
}

/// Layout orchestrator for one sheet.
pub struct Facet<D: DataSet = MemoryDataSet> {
    options: SheetOptions,
    fields: Fields,
    sort_params: Vec<SortParam>,
    filter_params: Vec<FilterParam>,
    data_set: D,
    measurer: Box<dyn TextMeasurer>,
    hook: Option<Rc<CoordinateHook>>,
    session: FacetSession,
    layout: LayoutResult,
    /// Frozen counts clamped to the current layout
    frozen: FrozenConfig,
    /// Configured frozen counts that passed the overlap check
    validated_frozen: Option<FrozenConfig>,
    corner_bbox: BBox,
    panel_bbox: BBox,
    col_widths: PrefixExtents,
    row_heights: RowExtents,
    events: VecDeque<FacetEvent>,
}

impl Facet<MemoryDataSet> {
    /// Facet over an in-memory data set with estimated text widths.
    pub fn from_config(config: SheetConfig) -> Result<Self> {
        let data_set = MemoryDataSet::new(&config.data_cfg);
        Self::new(config, data_set, Box::new(CachedMeasurer::new(EstimatingMeasurer)))
    }
}

impl<D: DataSet> Facet<D> {
    /// Create a facet and run the first layout pass.
    pub fn new(config: SheetConfig, data_set: D, measurer: Box<dyn TextMeasurer>) -> Result<Self> {
        let SheetConfig { data_cfg, options } = config;
        let mut facet = Self {
            options,
            fields: data_cfg.fields,
            sort_params: data_cfg.sort_params,
            filter_params: data_cfg.filter_params,
            data_set,
            measurer,
            hook: None,
            session: FacetSession::new(),
            layout: LayoutResult::default(),
            frozen: FrozenConfig::default(),
            validated_frozen: None,
            corner_bbox: BBox::default(),
            panel_bbox: BBox::default(),
            col_widths: PrefixExtents::default(),
            row_heights: RowExtents::default(),
            events: VecDeque::new(),
        };
        facet.data_set.set_fields(&facet.fields);
        facet.do_layout()?;
        Ok(facet)
    }

    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn data_set(&self) -> &D {
        &self.data_set
    }

    pub fn session(&self) -> &FacetSession {
        &self.session
    }

    pub fn layout_result(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn corner_bbox(&self) -> BBox {
        self.corner_bbox
    }

    pub fn panel_bbox(&self) -> BBox {
        self.panel_bbox
    }

    /// Frozen counts in effect for the current layout.
    pub fn frozen(&self) -> &FrozenConfig {
        &self.frozen
    }

    /// Run the full layout pipeline.
    ///
    /// Overlapping frozen counts are checked against the full axis sizes
    /// whenever the configured counts change. Within a page, or with columns
    /// hidden, the bands are clamped instead. On error the previous layout
    /// stays in place.
    pub fn do_layout(&mut self) -> Result<&LayoutResult> {
        let params = HeaderBuildParams {
            fields: &self.fields,
            options: &self.options,
            sort_params: &self.sort_params,
            data_set: &self.data_set,
        };
        let mut ctx = CoordinateContext {
            options: &self.options,
            data_set: &self.data_set,
            measurer: self.measurer.as_ref(),
            viewport_width: self.options.width,
            hook: self.hook.as_deref(),
        };

        let rows = build_header_hierarchy(Axis::Row, params);
        let mut rows_hierarchy = rows.hierarchy;
        layout_row_hierarchy(&ctx, &mut rows_hierarchy, &rows.leaf_nodes);

        let corner_width = match self.options.mode {
            SheetMode::Table => 0.0,
            SheetMode::Pivot => rows_hierarchy.width + self.options.series_number_width(),
        };
        ctx.viewport_width = (self.options.width - corner_width).max(0.0);

        let cols = build_header_hierarchy(Axis::Col, params);
        let mut cols_hierarchy = cols.hierarchy;
        layout_col_hierarchy(&ctx, &mut cols_hierarchy, &cols.leaf_nodes);

        let snapshot = self.session.needs_snapshot(&self.fields.columns).then(|| {
            if self.options.hidden_column_fields.is_empty() {
                leaf_clones(&cols_hierarchy, &cols.leaf_nodes)
            } else {
                // snapshot covers every column, hidden ones included
                let all_columns = SheetOptions {
                    hidden_column_fields: Vec::new(),
                    ..self.options.clone()
                };
                let full = build_header_hierarchy(
                    Axis::Col,
                    HeaderBuildParams {
                        options: &all_columns,
                        ..params
                    },
                );
                let mut hierarchy = full.hierarchy;
                layout_col_hierarchy(
                    &CoordinateContext {
                        options: &all_columns,
                        ..ctx
                    },
                    &mut hierarchy,
                    &full.leaf_nodes,
                );
                leaf_clones(&hierarchy, &full.leaf_nodes)
            }
        });

        let layout = LayoutResult {
            cols_hierarchy,
            rows_hierarchy,
            col_leaf_nodes: cols.leaf_nodes,
            row_leaf_nodes: rows.leaf_nodes,
        };
        let row_count = self.row_count_for(&layout);
        let cell_range = cell_range_for(self.options.pagination.as_ref(), row_count);
        let page_len = cell_range.map_or(0, |r| r.len());
        if self.validated_frozen != Some(self.options.frozen) {
            validate_frozen_config(&self.options.frozen, self.col_total_for(&layout), row_count)?;
        }
        let frozen = effective_frozen_config(&self.options.frozen, layout.col_leaf_nodes.len(), page_len);

        let row_heights = match self.options.mode {
            SheetMode::Table => RowExtents::Uniform(UniformExtents::new(self.options.cell_height(), page_len)),
            SheetMode::Pivot => RowExtents::Prefix(PrefixExtents::from_extents(
                cell_range
                    .into_iter()
                    .flat_map(|r| r.iter())
                    .filter_map(|i| layout.row_leaf(i))
                    .map(|n| n.height),
            )),
        };
        let col_widths = PrefixExtents::from_extents(layout.col_leaves().map(|n| n.width));

        let corner_height = layout.cols_hierarchy.height.floor();
        let corner_bbox = BBox::new(0.0, 0.0, corner_width, corner_height);
        let panel_bbox = BBox::new(
            corner_bbox.width,
            corner_bbox.height,
            (self.options.width - corner_bbox.width).min(col_widths.total()),
            (self.options.height - corner_bbox.height).min(row_heights.total()),
        );

        if let Some(nodes) = snapshot {
            self.session.save_initial_column_nodes(&self.fields.columns, nodes);
        }
        log::debug!(
            "layout: {} col leaves, {row_count} rows, corner {corner_bbox:?}, panel {panel_bbox:?}",
            layout.col_leaf_nodes.len()
        );
        self.events.push_back(FacetEvent::LayoutUpdated {
            col_leaf_count: layout.col_leaf_nodes.len(),
            row_count,
        });
        self.layout = layout;
        self.frozen = frozen;
        self.validated_frozen = Some(self.options.frozen);
        self.corner_bbox = corner_bbox;
        self.panel_bbox = panel_bbox;
        self.col_widths = col_widths;
        self.row_heights = row_heights;
        Ok(&self.layout)
    }

    fn row_count_for(&self, layout: &LayoutResult) -> usize {
        match self.options.mode {
            SheetMode::Table => self.data_set.display_data().len(),
            SheetMode::Pivot => layout.row_leaf_nodes.len(),
        }
    }

    /// Column leaves plus the table columns hidden from them.
    fn col_total_for(&self, layout: &LayoutResult) -> usize {
        let hidden = match self.options.mode {
            SheetMode::Table => self
                .fields
                .columns
                .iter()
                .filter(|f| self.options.hidden_column_fields.contains(f))
                .count(),
            SheetMode::Pivot => 0,
        };
        layout.col_leaf_nodes.len() + hidden
    }

    /// Total number of data rows (all pages).
    pub fn row_count(&self) -> usize {
        self.row_count_for(&self.layout)
    }

    /// Inclusive row range of the active page, `None` when it holds no rows.
    pub fn cell_range(&self) -> Option<IndexRange> {
        cell_range_for(self.options.pagination.as_ref(), self.row_count())
    }

    /// Vertical offset of the first row of the active page.
    #[allow(clippy::cast_precision_loss)]
    pub fn pagination_scroll_y(&self) -> f32 {
        let Some(range) = self.cell_range() else {
            return 0.0;
        };
        match self.options.mode {
            SheetMode::Table => self.options.cell_height() * range.start as f32,
            SheetMode::Pivot => self.layout.row_leaf(range.start).map_or(0.0, |n| n.y),
        }
    }

    /// Horizontal room gained when the row header scrolls with the panel.
    fn corrected_scroll_x(&self) -> f32 {
        if self.options.scroll_contains_row_header {
            self.corner_bbox.width
        } else {
            0.0
        }
    }

    /// Visible indexes at a scroll position, split across the frozen panes.
    ///
    /// `scroll_y` is relative to the top of the active page. Row indexes in
    /// the result are absolute.
    pub fn calculate_xy_indexes(&self, scroll_x: f32, scroll_y: f32) -> FrozenPanelIndexes {
        let Some(cell_range) = self.cell_range() else {
            return FrozenPanelIndexes::default();
        };
        let indexes = calculate_in_view_indexes(
            scroll_x,
            scroll_y,
            &self.col_widths,
            &self.row_heights,
            self.panel_bbox,
            self.corrected_scroll_x(),
        );
        let rows = indexes
            .rows
            .and_then(|r| IndexRange::new(r.start + cell_range.start, r.end + cell_range.start));
        split_in_view_indexes_with_frozen(
            PanelIndexes::new(rows, indexes.cols),
            &self.frozen,
            self.layout.col_leaf_nodes.len(),
            cell_range,
        )
    }

    /// View metas of every visible cell, keyed by pane, corners included.
    pub fn visible_cells(&self, scroll_x: f32, scroll_y: f32) -> VisibleCells {
        let mut cells = VisibleCells::new();
        let Some(cell_range) = self.cell_range() else {
            return cells;
        };
        let indexes = self.calculate_xy_indexes(scroll_x, scroll_y);
        for region in FrozenRegion::ALL.into_iter().filter(|r| !r.is_corner()) {
            let metas: Vec<ViewMeta> = indexes
                .get(region)
                .cells()
                .filter_map(|(row, col)| self.cell_meta(row, col))
                .collect();
            if !metas.is_empty() {
                cells.insert(region, metas);
            }
        }
        let corners =
            calculate_frozen_corner_cells(&self.frozen, self.layout.col_leaf_nodes.len(), cell_range);
        for (region, pairs) in corners {
            let metas: Vec<ViewMeta> = pairs
                .into_iter()
                .filter_map(|(col, row)| self.cell_meta(row, col))
                .collect();
            if !metas.is_empty() {
                cells.insert(region, metas);
            }
        }
        log::trace!(
            "visible cells at ({scroll_x}, {scroll_y}): {}",
            cells.values().map(Vec::len).sum::<usize>()
        );
        cells
    }

    /// Bound scroll offsets to the scrollable content.
    pub fn clamp_scroll(&self, scroll_x: f32, scroll_y: f32) -> (f32, f32) {
        let max_x = (self.col_widths.total() - self.panel_bbox.width).max(0.0);
        let max_y = (self.row_heights.total() - self.panel_bbox.height).max(0.0);
        (scroll_x.clamp(0.0, max_x), scroll_y.clamp(0.0, max_y))
    }

    /// Take every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<FacetEvent> {
        self.events.drain(..).collect()
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            options: self.options.clone(),
            fields: self.fields.clone(),
            sort_params: self.sort_params.clone(),
            filter_params: self.filter_params.clone(),
            hook: self.hook.clone(),
            session: self.session.clone(),
            event_count: self.events.len(),
        }
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        let Checkpoint {
            options,
            fields,
            sort_params,
            filter_params,
            hook,
            session,
            event_count,
        } = checkpoint;
        self.options = options;
        self.fields = fields;
        self.sort_params = sort_params;
        self.filter_params = filter_params;
        self.hook = hook;
        self.session = session;
        self.events.truncate(event_count);
        self.data_set.set_fields(&self.fields);
        self.data_set.set_params(&self.sort_params, &self.filter_params);
    }

    /// Apply `change` and lay out again. When the layout is rejected the
    /// facet is left exactly as it was before `change`.
    fn relayout_with(&mut self, change: impl FnOnce(&mut Self)) -> Result<&LayoutResult> {
        let checkpoint = self.checkpoint();
        change(self);
        let outcome = self.do_layout().map(|_| ());
        if let Err(err) = outcome {
            log::warn!("layout rejected, rolling back: {err}");
            self.rollback(checkpoint);
            return Err(err);
        }
        Ok(&self.layout)
    }

    /// Install a transform run on every header node after positioning.
    pub fn set_coordinate_hook(&mut self, hook: Option<Rc<CoordinateHook>>) -> Result<&LayoutResult> {
        self.relayout_with(|facet| facet.hook = hook)
    }

    /// Replace the field configuration; the column snapshot is retaken when
    /// the column fields differ from the ones it was taken for.
    pub fn apply_field_change(&mut self, fields: Fields) -> Result<&LayoutResult> {
        self.relayout_with(|facet| {
            facet.fields = fields;
            facet.data_set.set_fields(&facet.fields);
        })
    }

    /// Replace all options.
    pub fn apply_options(&mut self, options: SheetOptions) -> Result<&LayoutResult> {
        self.relayout_with(|facet| facet.options = options)
    }

    /// Sort by a single directive, replacing any previous sort.
    pub fn apply_sort(&mut self, param: SortParam) -> Result<&LayoutResult> {
        self.relayout_with(|facet| {
            facet.sort_params = vec![param];
            facet.data_set.set_params(&facet.sort_params, &facet.filter_params);
            let display_rows = facet.data_set.display_data().len();
            facet.events.push_back(FacetEvent::RangeSorted { display_rows });
        })
    }

    /// Add or replace the filter of `param.filter_key`; no filtered values
    /// removes it.
    pub fn apply_filter(&mut self, param: FilterParam) -> Result<&LayoutResult> {
        self.relayout_with(|facet| {
            let existing = facet
                .filter_params
                .iter()
                .position(|p| p.filter_key == param.filter_key);
            match (existing, param.filtered_values.is_empty()) {
                (Some(index), true) => {
                    facet.filter_params.remove(index);
                }
                (Some(index), false) => {
                    if let Some(slot) = facet.filter_params.get_mut(index) {
                        *slot = param;
                    }
                }
                (None, false) => facet.filter_params.push(param),
                (None, true) => {}
            }
            facet.data_set.set_params(&facet.sort_params, &facet.filter_params);
            let display_rows = facet.data_set.display_data().len();
            facet.events.push_back(FacetEvent::RangeFiltered { display_rows });
        })
    }

    pub fn sort_params(&self) -> &[SortParam] {
        &self.sort_params
    }

    pub fn filter_params(&self) -> &[FilterParam] {
        &self.filter_params
    }

    /// Record a user-dragged width for every column leaf with this value.
    pub fn apply_col_resize(&mut self, value: &str, width: f32) -> Result<&LayoutResult> {
        self.relayout_with(|facet| {
            facet
                .options
                .col_cfg
                .width_by_field_value
                .insert(value.to_string(), width.max(0.0));
        })
    }

    pub fn apply_canvas_resize(&mut self, width: f32, height: f32) -> Result<&LayoutResult> {
        self.relayout_with(|facet| {
            facet.options.width = width.max(0.0);
            facet.options.height = height.max(0.0);
        })
    }

    pub fn apply_pagination(&mut self, pagination: Option<Pagination>) -> Result<&LayoutResult> {
        self.relayout_with(|facet| facet.options.pagination = pagination)
    }
}

fn leaf_clones(hierarchy: &Hierarchy, leaves: &[NodeId]) -> Vec<Node> {
    leaves
        .iter()
        .filter_map(|&id| hierarchy.node(id))
        .cloned()
        .collect()
}

/// Active page of `row_count` rows; the whole range without pagination.
fn cell_range_for(pagination: Option<&Pagination>, row_count: usize) -> Option<IndexRange> {
    match pagination {
        Some(page) if page.page_size > 0 => {
            let start = page.current.max(1).saturating_sub(1).saturating_mul(page.page_size);
            let end = start.saturating_add(page.page_size).min(row_count);
            IndexRange::new(start, end.checked_sub(1)?)
        }
        _ => IndexRange::with_len(0, row_count),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::DataCfg;
    use serde_json::json;

    pub(super) fn table_config(rows: usize) -> SheetConfig {
        let data: Vec<serde_json::Value> = (0..rows)
            .map(|i| json!({ "name": format!("item {i}"), "price": i, "qty": i * 2 }))
            .collect();
        SheetConfig {
            data_cfg: DataCfg {
                fields: Fields {
                    columns: vec!["name".into(), "price".into(), "qty".into()],
                    ..Fields::default()
                },
                data: serde_json::from_value(json!(data)).unwrap(),
                ..DataCfg::default()
            },
            options: SheetOptions {
                width: 300.0,
                height: 200.0,
                ..SheetOptions::default()
            },
        }
    }

    #[test]
    fn test_cell_range_pages() {
        let page = |current| Pagination {
            page_size: 10,
            current,
        };
        assert_eq!(cell_range_for(Some(&page(1)), 25), IndexRange::new(0, 9));
        assert_eq!(cell_range_for(Some(&page(3)), 25), IndexRange::new(20, 24));
        assert_eq!(cell_range_for(Some(&page(4)), 25), None);
        assert_eq!(cell_range_for(None, 25), IndexRange::new(0, 24));
        assert_eq!(cell_range_for(None, 0), None);
    }

    #[test]
    fn test_table_bboxes() {
        let facet = Facet::from_config(table_config(100)).unwrap();
        assert_eq!(facet.corner_bbox(), BBox::new(0.0, 0.0, 0.0, 30.0));
        let panel = facet.panel_bbox();
        assert_eq!(panel.y, 30.0);
        // 3 columns of 96 fit in 300
        assert_eq!(panel.width, 288.0);
        assert_eq!(panel.height, 170.0);
    }

    #[test]
    fn test_pagination_offsets_rows() {
        let mut config = table_config(100);
        config.options.pagination = Some(Pagination {
            page_size: 20,
            current: 2,
        });
        let facet = Facet::from_config(config).unwrap();
        assert_eq!(facet.cell_range(), IndexRange::new(20, 39));
        let cell_height = facet.options().cell_height();
        assert_eq!(facet.pagination_scroll_y(), 20.0 * cell_height);
        let indexes = facet.calculate_xy_indexes(0.0, 0.0);
        assert_eq!(indexes.center.rows.unwrap().start, 20);
    }

    #[test]
    fn test_clamp_scroll() {
        let facet = Facet::from_config(table_config(100)).unwrap();
        assert_eq!(facet.clamp_scroll(-5.0, -5.0), (0.0, 0.0));
        let (x, y) = facet.clamp_scroll(1e9, 1e9);
        assert_eq!(x, 0.0);
        assert_eq!(y, 100.0 * facet.options().cell_height() - facet.panel_bbox().height);
    }

    #[test]
    fn test_filter_replace_and_remove() {
        let mut facet = Facet::from_config(table_config(5)).unwrap();
        facet
            .apply_filter(FilterParam {
                filter_key: "price".into(),
                filtered_values: vec![json!(0), json!(1)],
            })
            .unwrap();
        assert_eq!(facet.row_count(), 3);
        facet
            .apply_filter(FilterParam {
                filter_key: "price".into(),
                filtered_values: vec![json!(4)],
            })
            .unwrap();
        assert_eq!(facet.filter_params().len(), 1);
        assert_eq!(facet.row_count(), 4);
        facet
            .apply_filter(FilterParam {
                filter_key: "price".into(),
                filtered_values: vec![],
            })
            .unwrap();
        assert!(facet.filter_params().is_empty());
        assert_eq!(facet.row_count(), 5);
        let events = facet.drain_events();
        assert!(events.contains(&FacetEvent::RangeFiltered { display_rows: 5 }));
        assert!(facet.drain_events().is_empty());
    }

    #[test]
    fn test_overlapping_frozen_columns_rejected() {
        let mut config = table_config(5);
        config.options.frozen.frozen_col_count = 2;
        config.options.frozen.frozen_trailing_col_count = 2;
        assert!(Facet::from_config(config).is_err());
    }
}
