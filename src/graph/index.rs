// src/graph/index.rs
//! Bidirectional identifier map.

use std::collections::HashMap;

use super::NodeId;

/// Maps page identifiers to dense node indices and back.
///
/// Indices are handed out in first-seen order and never reassigned.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    ids: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl NodeIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for `name`, assigning the next one if unseen.
    pub(crate) fn get_or_insert(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(index, identifier)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.names.iter().enumerate().map(|(i, n)| (i, n.as_str()))
    }
}
