//! Arena-backed header tree for one axis.

use serde::Serialize;

use super::node::{Node, NodeId};

/// Ordered tree of [`Node`]s for one axis.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Children are
/// owned lists of ids, parents are back-handles, so the tree has no
/// reference cycles and can be cloned cheaply for snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hierarchy {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    /// Sum of top-level widths (columns) or level widths (rows)
    pub width: f32,
    /// Sum of level heights (columns) or top-level heights (rows)
    pub height: f32,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` as the last child of `parent` (or as a new top-level node).
    ///
    /// The node's `level` and `parent` are overwritten to match its position.
    pub fn push_node(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent.filter(|p| p.0 < self.nodes.len());
        node.children.clear();
        node.is_leaf = true;
        match node.parent.and_then(|p| self.nodes.get_mut(p.0)) {
            Some(parent_node) => {
                node.level = parent_node.level + 1;
                parent_node.children.push(id);
                parent_node.is_leaf = false;
            }
            None => {
                node.level = 0;
                self.roots.push(id);
            }
        }
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Handles of all nodes, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest level present, `None` when empty.
    pub fn max_level(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.level).max()
    }

    /// Nodes with no children, left to right.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        for &root in &self.roots {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    /// Leaves under `id` (itself when it is a leaf), left to right.
    pub fn leaves_under(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        self.collect_leaves(id, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        // explicit stack keeps deep trees off the call stack
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let children = self.children(current);
            if children.is_empty() {
                if self.node(current).is_some() {
                    out.push(current);
                }
            } else {
                stack.extend(children.iter().rev().copied());
            }
        }
    }

    /// The first node of every level, ordered by level.
    pub fn sample_nodes_for_all_levels(&self) -> Vec<NodeId> {
        let Some(max_level) = self.max_level() else {
            return Vec::new();
        };
        (0..=max_level)
            .filter_map(|level| {
                self.nodes
                    .iter()
                    .position(|n| n.level == level)
                    .map(NodeId)
            })
            .collect()
    }

    /// Look a node up by its path-encoded id.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.id == id).map(NodeId)
    }

    /// Post-order traversal (children before parents).
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(NodeId, bool)> = self.roots.iter().rev().map(|&r| (r, false)).collect();
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            stack.push((id, true));
            stack.extend(self.children(id).iter().rev().map(|&c| (c, false)));
        }
        order
    }
}
