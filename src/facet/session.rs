//! Per-facet interaction state that survives re-layout.

use serde::Serialize;

use crate::layout::Node;

/// One hide operation: the nodes it hid and the visible neighbour that
/// carries the expand button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenColumnsInfo {
    pub hide_column_nodes: Vec<Node>,
    pub display_sibling_node: Option<Node>,
}

impl HiddenColumnsInfo {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.hide_column_nodes.iter().map(|n| n.field.as_str())
    }
}

/// State owned by one facet for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct FacetSession {
    /// Column leaves of the first layout with every column shown
    initial_column_nodes: Vec<Node>,
    hidden_columns_detail: Vec<HiddenColumnsInfo>,
    /// Column fields the snapshot was taken for
    last_applied_fields: Option<Vec<String>>,
}

impl FacetSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new snapshot is due for these column fields.
    pub fn needs_snapshot(&self, columns: &[String]) -> bool {
        self.last_applied_fields
            .as_deref()
            .map_or(true, |fields| fields != columns)
    }

    /// Store the initial column leaves, taken when [`Self::needs_snapshot`] holds.
    pub fn save_initial_column_nodes(&mut self, columns: &[String], nodes: Vec<Node>) {
        log::debug!("saved {} initial column nodes", nodes.len());
        self.initial_column_nodes = nodes;
        self.last_applied_fields = Some(columns.to_vec());
    }

    pub fn initial_column_nodes(&self) -> &[Node] {
        &self.initial_column_nodes
    }

    pub fn last_applied_fields(&self) -> Option<&[String]> {
        self.last_applied_fields.as_deref()
    }

    pub fn hidden_columns_detail(&self) -> &[HiddenColumnsInfo] {
        &self.hidden_columns_detail
    }

    pub fn push_hidden_columns(&mut self, info: HiddenColumnsInfo) {
        self.hidden_columns_detail.push(info);
    }

    /// Forget restored fields; groups left without hidden nodes are dropped.
    pub fn restore_columns(&mut self, restored: &[String]) {
        for info in &mut self.hidden_columns_detail {
            info.hide_column_nodes.retain(|n| !restored.contains(&n.field));
        }
        self.hidden_columns_detail
            .retain(|info| !info.hide_column_nodes.is_empty());
    }
}
