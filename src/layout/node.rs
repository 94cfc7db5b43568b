//! Header node: one vertex of a row or column hierarchy.

use serde::Serialize;
use std::collections::BTreeMap;

/// Separator between path segments of a node id.
pub const ID_SEPARATOR: &str = "[&]";
/// Id prefix shared by all top-level nodes built from data values.
pub const ROOT_ID: &str = "root";
/// Id prefix of grand total nodes. Data value ids always start with
/// [`ROOT_ID`], so totals cannot collide with a value named like them.
pub const TOTALS_ROOT_ID: &str = "totals";
/// Pseudo field of the injected series number column.
pub const SERIES_NUMBER_FIELD: &str = "$$series_number$$";
/// Pseudo field of the measure level in pivot mode.
pub const EXTRA_FIELD: &str = "$$extra$$";
/// Label of grand total nodes.
pub const GRAND_TOTAL_LABEL: &str = "Total";

/// Stable handle of a node inside its [`super::Hierarchy`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A header vertex with geometry and tree links.
///
/// `parent` is a plain handle into the owning arena, never an owning pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Path-encoded id, ancestors joined by [`ID_SEPARATOR`]
    pub id: String,
    pub field: String,
    pub value: String,
    pub label: String,
    /// Depth, top level = 0
    pub level: usize,
    pub row_index: Option<usize>,
    pub col_index: Option<usize>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_totals: bool,
    pub is_leaf: bool,
    /// Dimension values on the path from the top level to this node
    pub query: BTreeMap<String, String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create an unpositioned leaf.
    pub fn new(
        id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
        level: usize,
    ) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            value: value.into(),
            label: label.into(),
            level,
            row_index: None,
            col_index: None,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            is_totals: false,
            is_leaf: true,
            query: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_totals(mut self, is_totals: bool) -> Self {
        self.is_totals = is_totals;
        self
    }

    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_series_number(&self) -> bool {
        self.field == SERIES_NUMBER_FIELD
    }
}

/// Id of a child node whose parent has id `parent_id`.
pub fn child_id(parent_id: Option<&str>, value: &str) -> String {
    format!("{}{ID_SEPARATOR}{value}", parent_id.unwrap_or(ROOT_ID))
}

/// Id of the top-level grand total node.
pub fn grand_total_id() -> String {
    child_id(Some(TOTALS_ROOT_ID), GRAND_TOTAL_LABEL)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_child_id_encodes_path() {
        let top = child_id(None, "Zhejiang");
        assert_eq!(top, "root[&]Zhejiang");
        assert_eq!(child_id(Some(&top), "Hangzhou"), "root[&]Zhejiang[&]Hangzhou");
    }

    #[test]
    fn test_grand_total_id_differs_from_value_named_total() {
        assert_eq!(grand_total_id(), "totals[&]Total");
        assert_ne!(grand_total_id(), child_id(None, GRAND_TOTAL_LABEL));
    }

    #[test]
    fn test_new_node_is_an_unpositioned_leaf() {
        let node = Node::new("root[&]a", "f", "a", "A", 0).with_totals(true);
        assert_eq!(node.max_x(), 0.0);
        assert_eq!(node.max_y(), 0.0);
        assert!(node.is_leaf);
        assert!(node.is_totals);
    }
}
