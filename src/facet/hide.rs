//! Hiding and restoring detail table columns.
//!
//! Hidden columns are dropped from the header build. The session keeps the
//! column leaves of the first full layout, so hidden nodes, their visible
//! neighbours and their initial geometry stay available for restoring.

use super::{Facet, FacetEvent, HiddenColumnsInfo};
use crate::data_set::DataSet;
use crate::error::Result;
use crate::layout::Node;

impl<D: DataSet> Facet<D> {
    /// Snapshot nodes of the given fields, in field order; unknown fields are skipped.
    pub fn hidden_column_nodes(&self, fields: &[String]) -> Vec<Node> {
        let initial = self.session.initial_column_nodes();
        fields
            .iter()
            .filter_map(|field| initial.iter().find(|n| n.field == *field))
            .cloned()
            .collect()
    }

    /// Visible neighbour of a group of hidden columns: the first visible
    /// column after the group, else the last visible one before it.
    pub fn hidden_column_display_sibling(&self, fields: &[String]) -> Option<Node> {
        let indexes: Vec<usize> = self
            .hidden_column_nodes(fields)
            .iter()
            .filter_map(|n| n.col_index)
            .collect();
        let first = indexes.iter().min().copied()?;
        let last = indexes.iter().max().copied()?;
        let hidden = &self.options.hidden_column_fields;
        let visible = |n: &&Node| !hidden.contains(&n.field) && !fields.contains(&n.field);

        let initial = self.session.initial_column_nodes();
        let next = initial
            .iter()
            .filter(visible)
            .find(|n| n.col_index.is_some_and(|i| i > last));
        let prev = || {
            initial
                .iter()
                .filter(visible)
                .filter(|n| n.col_index.is_some_and(|i| i < first))
                .last()
        };
        next.or_else(prev).cloned()
    }

    /// Groups of consecutive hidden column fields, e.g. hiding b, c and e of
    /// a..f gives `[[b, c], [e]]`.
    pub fn hidden_columns_thunk_group(&self) -> Vec<Vec<String>> {
        hidden_columns_thunk_group(&self.fields.columns, &self.options.hidden_column_fields)
    }

    /// Hide the given column fields (merged with those already hidden).
    ///
    /// Returns `false` when the selection equals the current hidden list.
    pub fn hide_columns(&mut self, selected: &[String]) -> Result<bool> {
        if selected == self.options.hidden_column_fields.as_slice() {
            return Ok(false);
        }
        let mut hidden: Vec<String> = Vec::new();
        for field in selected.iter().chain(&self.options.hidden_column_fields) {
            if !hidden.contains(field) {
                hidden.push(field.clone());
            }
        }

        let current = HiddenColumnsInfo {
            hide_column_nodes: self.hidden_column_nodes(selected),
            display_sibling_node: self.hidden_column_display_sibling(selected),
        };
        log::debug!(
            "hiding columns {selected:?}, sibling {:?}",
            current.display_sibling_node.as_ref().map(|n| &n.field)
        );
        self.relayout_with(|facet| {
            facet.options.hidden_column_fields = hidden;
            facet.session.push_hidden_columns(current.clone());
            facet.events.push_back(FacetEvent::ColumnsHidden {
                current,
                detail: facet.session.hidden_columns_detail().to_vec(),
            });
        })?;
        Ok(true)
    }

    /// Restore hidden column fields. Returns `false` when none of them was hidden.
    pub fn show_columns(&mut self, fields: &[String]) -> Result<bool> {
        let restored: Vec<String> = self
            .options
            .hidden_column_fields
            .iter()
            .filter(|f| fields.contains(f))
            .cloned()
            .collect();
        if restored.is_empty() {
            return Ok(false);
        }
        self.relayout_with(|facet| {
            facet
                .options
                .hidden_column_fields
                .retain(|f| !restored.contains(f));
            facet.session.restore_columns(&restored);
            facet
                .events
                .push_back(FacetEvent::ColumnsShown { fields: restored });
        })?;
        Ok(true)
    }

    /// Whether `field` is the last visible column only because the columns
    /// after it are hidden.
    pub fn is_last_column_after_hidden(&self, field: &str) -> bool {
        let last_visible = self.layout.col_leaves().last().map(|n| n.field.as_str());
        let last_initial = self
            .session
            .initial_column_nodes()
            .last()
            .map(|n| n.field.as_str());
        last_visible == Some(field) && last_initial != Some(field)
    }
}

/// Split `hidden` into runs that are adjacent in `columns`.
pub fn hidden_columns_thunk_group(columns: &[String], hidden: &[String]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut prev_index: Option<usize> = None;
    for (index, field) in columns.iter().enumerate() {
        if !hidden.contains(field) {
            continue;
        }
        let adjacent = prev_index.is_some_and(|p| p + 1 == index);
        match groups.last_mut() {
            Some(group) if adjacent => group.push(field.clone()),
            _ => groups.push(vec![field.clone()]),
        }
        prev_index = Some(index);
    }
    groups
}
