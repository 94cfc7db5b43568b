//! Header hierarchy construction.
//!
//! Table mode produces one flat column per field (plus the series number
//! column). Pivot mode nests the distinct values of each dimension field,
//! depth-first, with measures as the innermost level of the value axis.

use std::cmp::Ordering;

use super::hierarchy::Hierarchy;
use super::node::{
    child_id, grand_total_id, Node, NodeId, EXTRA_FIELD, GRAND_TOTAL_LABEL, SERIES_NUMBER_FIELD,
};
use crate::data_set::{compare_by_list, DataSet, DimensionQuery};
use crate::types::{Axis, Fields, SheetMode, SheetOptions, SortMethod, SortParam};

/// Header label of the series number column.
pub const SERIES_NUMBER_LABEL: &str = "No.";

/// Inputs of a header build.
#[derive(Clone, Copy)]
pub struct HeaderBuildParams<'a> {
    pub fields: &'a Fields,
    pub options: &'a SheetOptions,
    pub sort_params: &'a [SortParam],
    pub data_set: &'a dyn DataSet,
}

/// A populated hierarchy and its leaves, left to right.
#[derive(Debug, Clone, Default)]
pub struct HeaderBuildResult {
    pub hierarchy: Hierarchy,
    pub leaf_nodes: Vec<NodeId>,
}

/// Build the header hierarchy of one axis.
pub fn build_header_hierarchy(axis: Axis, params: HeaderBuildParams<'_>) -> HeaderBuildResult {
    let hierarchy = match (params.options.mode, axis) {
        (SheetMode::Table, Axis::Col) => build_table_columns(params),
        // detail table rows are data rows, not header nodes
        (SheetMode::Table, Axis::Row) => Hierarchy::new(),
        (SheetMode::Pivot, axis) => build_pivot_axis(axis, params),
    };
    let leaf_nodes = hierarchy.leaves();
    log::debug!(
        "built {axis} hierarchy: {} nodes, {} leaves",
        hierarchy.len(),
        leaf_nodes.len()
    );
    HeaderBuildResult {
        hierarchy,
        leaf_nodes,
    }
}

fn build_table_columns(params: HeaderBuildParams<'_>) -> Hierarchy {
    let mut hierarchy = Hierarchy::new();
    if params.options.show_series_number {
        let node = Node::new(
            child_id(None, SERIES_NUMBER_FIELD),
            SERIES_NUMBER_FIELD,
            SERIES_NUMBER_FIELD,
            SERIES_NUMBER_LABEL,
            0,
        );
        hierarchy.push_node(node, None);
    }
    let hidden = &params.options.hidden_column_fields;
    for field in params
        .fields
        .columns
        .iter()
        .filter(|f| !hidden.contains(f))
    {
        let node = Node::new(
            child_id(None, field),
            field.as_str(),
            field.as_str(),
            params.data_set.field_name(field),
            0,
        );
        hierarchy.push_node(node, None);
    }
    hierarchy
}

/// Header tree before it is flattened into the arena.
struct PlannedNode {
    node: Node,
    children: Vec<PlannedNode>,
}

fn build_pivot_axis(axis: Axis, params: HeaderBuildParams<'_>) -> Hierarchy {
    let fields = params.fields;
    let dimensions = match axis {
        Axis::Row => &fields.rows,
        Axis::Col => &fields.columns,
    };
    let measures_here = !fields.values.is_empty() && (axis == Axis::Col) == fields.value_in_cols;
    let show_grand_totals = match axis {
        Axis::Row => params.options.totals.row.show_grand_totals,
        Axis::Col => params.options.totals.col.show_grand_totals,
    };

    let mut planned = plan_level(params, dimensions, measures_here, 0, None, &DimensionQuery::new());

    let needs_total = (show_grand_totals && !dimensions.is_empty())
        || (dimensions.is_empty() && !measures_here);
    if needs_total {
        let id = grand_total_id();
        let field = dimensions.first().map_or(EXTRA_FIELD, String::as_str);
        let node = Node::new(id.as_str(), field, GRAND_TOTAL_LABEL, GRAND_TOTAL_LABEL, 0)
            .with_totals(true);
        let children = if measures_here && !dimensions.is_empty() {
            measure_nodes(params, &id, &DimensionQuery::new(), true)
        } else {
            Vec::new()
        };
        planned.push(PlannedNode { node, children });
    }

    let mut hierarchy = Hierarchy::new();
    for planned_node in planned {
        flatten(&mut hierarchy, planned_node, None);
    }
    hierarchy
}

/// Nodes of level `depth` under `parent_id`; branches without leaves are dropped.
fn plan_level(
    params: HeaderBuildParams<'_>,
    dimensions: &[String],
    measures_here: bool,
    depth: usize,
    parent_id: Option<&str>,
    query: &DimensionQuery,
) -> Vec<PlannedNode> {
    let Some(field) = dimensions.get(depth) else {
        return if measures_here {
            measure_nodes(params, parent_id.unwrap_or_default(), query, false)
        } else {
            Vec::new()
        };
    };

    let mut values = params.data_set.dimension_values(field, query);
    sort_dimension_values(&mut values, field, params.sort_params);

    let is_last_level = depth + 1 == dimensions.len();
    let mut planned = Vec::with_capacity(values.len());
    for value in values {
        let id = child_id(parent_id, &value);
        let mut child_query = query.clone();
        child_query.insert(field.clone(), value.clone());
        let children = plan_level(
            params,
            dimensions,
            measures_here,
            depth + 1,
            Some(&id),
            &child_query,
        );
        if children.is_empty() && !(is_last_level && !measures_here) {
            continue;
        }
        let label = params
            .data_set
            .format_field(field, &serde_json::Value::String(value.clone()));
        let node = Node::new(id, field.as_str(), value, label, depth).with_query(child_query);
        planned.push(PlannedNode { node, children });
    }
    planned
}

fn measure_nodes(
    params: HeaderBuildParams<'_>,
    parent_id: &str,
    query: &DimensionQuery,
    is_totals: bool,
) -> Vec<PlannedNode> {
    params
        .fields
        .values
        .iter()
        .map(|value_field| {
            let id = if parent_id.is_empty() {
                child_id(None, value_field)
            } else {
                child_id(Some(parent_id), value_field)
            };
            let node = Node::new(
                id,
                EXTRA_FIELD,
                value_field.as_str(),
                params.data_set.field_name(value_field),
                0,
            )
            .with_totals(is_totals)
            .with_query(query.clone());
            PlannedNode {
                node,
                children: Vec::new(),
            }
        })
        .collect()
}

fn flatten(hierarchy: &mut Hierarchy, planned: PlannedNode, parent: Option<NodeId>) {
    let id = hierarchy.push_node(planned.node, parent);
    for child in planned.children {
        flatten(hierarchy, child, Some(id));
    }
}

/// Reorder distinct values of `field` by its sort directive, if any.
///
/// Without a directive the first-seen order is kept.
pub fn sort_dimension_values(values: &mut [String], field: &str, sort_params: &[SortParam]) {
    let Some(param) = sort_params.iter().find(|p| p.sort_field_id == field) else {
        return;
    };
    if let Some(order) = &param.sort_by {
        values.sort_by(|a, b| compare_by_list(a, b, order));
        return;
    }
    match param.sort_method {
        Some(SortMethod::Asc) => values.sort_by(|a, b| compare_labels(a, b)),
        Some(SortMethod::Desc) => values.sort_by(|a, b| compare_labels(b, a)),
        None => {}
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
