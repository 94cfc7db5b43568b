//! Coordinate assignment for header hierarchies.
//!
//! Column leaves tile the x axis left to right and parents span exactly
//! their children. Every column level gets one height, taken from the
//! level's sample node. Row leaves tile the y axis and every row level gets
//! one width.

use std::collections::HashSet;

use super::frozen::effective_frozen_config;
use super::hierarchy::Hierarchy;
use super::node::{Node, NodeId, EXTRA_FIELD};
use crate::data_set::DataSet;
use crate::text::{measure_or_zero, TextMeasurer};
use crate::types::{value_to_label, Axis, ColSizing, SheetMode, SheetOptions};

/// Number of data rows sampled when measuring "auto" column widths.
pub const AUTO_WIDTH_SAMPLE_ROWS: usize = 50;

/// Transform applied to every node after it is positioned (e.g. pagination offsets).
pub type CoordinateHook = dyn Fn(Axis, &mut Node);

/// Everything the coordinate pass reads besides the hierarchy itself.
#[derive(Clone, Copy)]
pub struct CoordinateContext<'a> {
    pub options: &'a SheetOptions,
    pub data_set: &'a dyn DataSet,
    pub measurer: &'a dyn TextMeasurer,
    /// Horizontal space for the column header (canvas width minus the corner)
    pub viewport_width: f32,
    pub hook: Option<&'a CoordinateHook>,
}

impl CoordinateContext<'_> {
    fn apply_hook(&self, axis: Axis, node: &mut Node) {
        if let Some(hook) = self.hook {
            hook(axis, node);
        }
    }
}

/// Even split of the available width, never below `cellCfg.width`.
pub fn adaptive_col_width(options: &SheetOptions, viewport_width: f32, leaf_count: usize) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let count = leaf_count.max(1) as f32;
    options.cell_cfg.width.max(viewport_width / count)
}

/// Width of one column leaf, by priority: user drag, adaptive, auto, fixed.
pub fn col_leaf_width(ctx: &CoordinateContext<'_>, node: &Node, adaptive_width: f32) -> f32 {
    let options = ctx.options;
    if let Some(&dragged) = options.col_cfg.width_by_field_value.get(&node.value) {
        return dragged.max(0.0);
    }
    match options.col_sizing {
        ColSizing::Adaptive => adaptive_width,
        ColSizing::Auto => {
            if node.is_series_number() {
                return options.series_number_width;
            }
            auto_col_width(ctx, node)
        }
        ColSizing::Fixed => options.cell_cfg.width,
    }
}

/// Measured width of the widest label among the header and a sample of cell values.
fn auto_col_width(ctx: &CoordinateContext<'_>, node: &Node) -> f32 {
    let style = &ctx.options.style.col_cell;
    let mut labels = sample_labels(ctx, node);
    labels.push(node.label.clone());

    let max_label = labels
        .iter()
        .map(|label| (ctx.measurer.measure_text_width_roughly(label, &style.text), label))
        .fold(None::<(f32, &String)>, |best, (width, label)| match best {
            Some((best_width, _)) if best_width >= width => best,
            _ => Some((width, label)),
        })
        .map(|(_, label)| label.as_str())
        .unwrap_or_default();
    log::trace!("max label in col {}: {max_label:?}", node.field);

    measure_or_zero(ctx.measurer, max_label, &style.text)
        + style.padding.left
        + style.padding.right
        + style.icon_size
}

fn sample_labels(ctx: &CoordinateContext<'_>, node: &Node) -> Vec<String> {
    match ctx.options.mode {
        SheetMode::Table => ctx
            .data_set
            .display_data()
            .iter()
            .take(AUTO_WIDTH_SAMPLE_ROWS)
            .map(|record| record.get(&node.field).map(value_to_label).unwrap_or_default())
            .collect(),
        SheetMode::Pivot if node.field == EXTRA_FIELD => ctx
            .data_set
            .multi_data(&node.query)
            .into_iter()
            .take(AUTO_WIDTH_SAMPLE_ROWS)
            .filter_map(|record| record.get(&node.value))
            .map(|v| ctx.data_set.format_field(&node.value, v))
            .collect(),
        SheetMode::Pivot => Vec::new(),
    }
}

/// Height of a column header level.
fn col_level_height(options: &SheetOptions, sample: &Node) -> f32 {
    let by_field = &options.col_cfg.height_by_field;
    let dragged = match options.mode {
        // detail table: one drag height applies to the whole header row
        SheetMode::Table => by_field.values().next(),
        SheetMode::Pivot => by_field.get(&sample.field),
    };
    dragged.copied().unwrap_or(options.col_cfg.height).max(0.0)
}

/// Assign x, y, width and height to every column node.
pub fn layout_col_hierarchy(ctx: &CoordinateContext<'_>, hierarchy: &mut Hierarchy, leaves: &[NodeId]) {
    hierarchy.width = 0.0;
    hierarchy.height = 0.0;

    let mut level_heights: Vec<f32> = Vec::new();
    for sample in hierarchy.sample_nodes_for_all_levels() {
        let height = hierarchy
            .node(sample)
            .map_or(0.0, |n| col_level_height(ctx.options, n));
        if let Some(node) = hierarchy.node_mut(sample) {
            node.height = height;
        }
        level_heights.push(height);
        hierarchy.height += height;
    }
    let level_y = |level: usize| -> f32 { level_heights.iter().take(level).sum() };
    let total_height = hierarchy.height;

    let adaptive_width = adaptive_col_width(ctx.options, ctx.viewport_width, leaves.len());
    let trailing = effective_frozen_config(&ctx.options.frozen, leaves.len(), 0).frozen_trailing_col_count;

    let mut x = 0.0;
    for (col_index, &id) in leaves.iter().enumerate() {
        let width = match hierarchy.node(id) {
            Some(node) => col_leaf_width(ctx, node, adaptive_width),
            None => continue,
        };
        if let Some(node) = hierarchy.node_mut(id) {
            node.col_index = Some(col_index);
            node.x = x;
            node.width = width;
            node.y = level_y(node.level);
            // shallow leaves stretch down to the bottom of the header
            node.height = total_height - node.y;
            x += width;
        }
    }
    hierarchy.width = x;

    span_parents(hierarchy, Axis::Col, |parent, first, children_extent| {
        parent.x = first.x;
        parent.width = children_extent;
        parent.col_index = None;
    });
    for id in hierarchy.node_ids().collect::<Vec<_>>() {
        if let Some(node) = hierarchy.node_mut(id) {
            if !node.is_leaf {
                node.y = level_y(node.level);
                node.height = level_heights.get(node.level).copied().unwrap_or(0.0);
            }
        }
    }

    if trailing == 0 {
        for id in hierarchy.node_ids().collect::<Vec<_>>() {
            if let Some(node) = hierarchy.node_mut(id) {
                ctx.apply_hook(Axis::Col, node);
            }
        }
    } else {
        anchor_trailing_cols(ctx, hierarchy, leaves, trailing);
    }

    log::debug!(
        "col coordinates: {} leaves, {}x{}",
        leaves.len(),
        hierarchy.width,
        hierarchy.height
    );
}

/// Re-anchor the last `trailing` leaves (and ancestors wholly inside them)
/// against the right edge of the visible header.
fn anchor_trailing_cols(
    ctx: &CoordinateContext<'_>,
    hierarchy: &mut Hierarchy,
    leaves: &[NodeId],
    trailing: usize,
) {
    let right_edge = ctx.viewport_width.min(hierarchy.width);
    let trailing_ids: HashSet<NodeId> = leaves.iter().rev().take(trailing).copied().collect();

    let mut prev_x = right_edge;
    for &id in leaves.iter().rev().take(trailing) {
        if let Some(node) = hierarchy.node_mut(id) {
            node.x = prev_x - node.width;
            prev_x = node.x;
        }
    }

    for id in hierarchy.post_order() {
        let is_parent = hierarchy.node(id).is_some_and(|n| !n.is_leaf);
        if !is_parent {
            continue;
        }
        let under = hierarchy.leaves_under(id);
        if !under.iter().all(|leaf| trailing_ids.contains(leaf)) {
            continue;
        }
        let first_x = hierarchy
            .children(id)
            .first()
            .and_then(|&c| hierarchy.node(c))
            .map(|c| c.x);
        if let (Some(first_x), Some(node)) = (first_x, hierarchy.node_mut(id)) {
            node.x = first_x;
        }
    }

    for id in hierarchy.node_ids().collect::<Vec<_>>() {
        if let Some(node) = hierarchy.node_mut(id) {
            ctx.apply_hook(Axis::Col, node);
        }
    }
}

/// Assign x, y, width and height to every row node (pivot row header).
pub fn layout_row_hierarchy(ctx: &CoordinateContext<'_>, hierarchy: &mut Hierarchy, leaves: &[NodeId]) {
    hierarchy.width = 0.0;
    hierarchy.height = 0.0;
    let options = ctx.options;

    let mut level_widths: Vec<f32> = Vec::new();
    for sample in hierarchy.sample_nodes_for_all_levels() {
        let width = hierarchy.node(sample).map_or(0.0, |n| {
            options
                .row_cfg
                .width_by_field
                .get(&n.field)
                .copied()
                .unwrap_or(options.row_cfg.width)
                .max(0.0)
        });
        level_widths.push(width);
        hierarchy.width += width;
    }
    let level_x = |level: usize| -> f32 { level_widths.iter().take(level).sum() };
    let total_width = hierarchy.width;
    let cell_height = options.cell_height();

    let mut y = 0.0;
    for (row_index, &id) in leaves.iter().enumerate() {
        if let Some(node) = hierarchy.node_mut(id) {
            let height = options
                .row_cfg
                .height_by_field
                .get(&node.id)
                .copied()
                .unwrap_or(cell_height)
                .max(0.0);
            node.row_index = Some(row_index);
            node.y = y;
            node.height = height;
            node.x = level_x(node.level);
            // shallow leaves stretch to the right edge of the row header
            node.width = total_width - node.x;
            y += height;
        }
    }
    hierarchy.height = y;

    span_parents(hierarchy, Axis::Row, |parent, first, children_extent| {
        parent.y = first.y;
        parent.height = children_extent;
        parent.row_index = None;
    });
    for id in hierarchy.node_ids().collect::<Vec<_>>() {
        if let Some(node) = hierarchy.node_mut(id) {
            if !node.is_leaf {
                node.x = level_x(node.level);
                node.width = level_widths.get(node.level).copied().unwrap_or(0.0);
            }
            ctx.apply_hook(Axis::Row, node);
        }
    }

    log::debug!(
        "row coordinates: {} leaves, {}x{}",
        leaves.len(),
        hierarchy.width,
        hierarchy.height
    );
}

/// Visit parents bottom-up with their first child and the summed child extent
/// along the tiled axis (width for columns, height for rows).
fn span_parents(hierarchy: &mut Hierarchy, axis: Axis, mut apply: impl FnMut(&mut Node, &Node, f32)) {
    for id in hierarchy.post_order() {
        let children = hierarchy.children(id);
        let Some(first) = children.first().and_then(|&c| hierarchy.node(c)).cloned() else {
            continue;
        };
        let extent: f32 = children
            .iter()
            .filter_map(|&c| hierarchy.node(c))
            .map(|c| match axis {
                Axis::Col => c.width,
                Axis::Row => c.height,
            })
            .sum();
        if let Some(parent) = hierarchy.node_mut(id) {
            apply(parent, &first, extent);
        }
    }
}
