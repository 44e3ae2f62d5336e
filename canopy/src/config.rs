//! Tree configuration and the on-disk tree document.
//!
//! A document is a JSON object carrying the selection flags next to the
//! forest:
//!
//! ```json
//! {
//!   "selectable": true,
//!   "multi_select": false,
//!   "nodes": [
//!     { "id": "a", "label": "A", "expanded": true, "children": [
//!       { "id": "b", "label": "B" }
//!     ] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::node::TreeNode;
use crate::selection::SelectionMode;
use crate::tree::TreeEngine;

/// Host-facing flags that decide the selection mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Whether clicks select nodes at all.
    #[serde(default)]
    pub selectable: bool,
    /// Whether more than one node may be selected.
    #[serde(default)]
    pub multi_select: bool,
}

impl TreeConfig {
    /// Config for the given mode.
    pub fn for_mode(mode: SelectionMode) -> Self {
        Self {
            selectable: mode.is_selectable(),
            multi_select: mode == SelectionMode::Multi,
        }
    }

    /// The selection mode these flags describe.
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_flags(self.selectable, self.multi_select)
    }
}

/// A forest plus its configuration, as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDocument {
    /// Selection flags.
    #[serde(flatten)]
    pub config: TreeConfig,
    /// Root nodes.
    #[serde(default)]
    pub nodes: Vec<TreeNode>,
}

impl TreeDocument {
    /// Parse and validate a JSON document.
    pub fn from_json(input: &str) -> Result<Self, TreeError> {
        let document: TreeDocument = serde_json::from_str(input)?;
        document.validate()?;
        Ok(document)
    }

    /// Read, parse and validate a JSON document.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TreeError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::from_json(&input)
    }

    /// Check ids are non-empty and unique across the forest.
    pub fn validate(&self) -> Result<(), TreeError> {
        validate_forest(&self.nodes)
    }

    /// Total number of nodes in the forest.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(TreeNode::subtree_len).sum()
    }

    /// Build an engine from this document.
    pub fn into_engine(self) -> TreeEngine {
        let mode = self.config.selection_mode();
        TreeEngine::with_items(self.nodes, mode)
    }
}

/// Check that every id in the forest is non-empty and unique.
pub fn validate_forest(roots: &[TreeNode]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    validate_items(roots, &mut seen)
}

fn validate_items<'a>(items: &'a [TreeNode], seen: &mut HashSet<&'a str>) -> Result<(), TreeError> {
    for item in items {
        if item.id.is_empty() {
            return Err(TreeError::EmptyId {
                label: item.label.clone(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(TreeError::DuplicateId {
                id: item.id.clone(),
            });
        }
        validate_items(&item.children, seen)?;
    }
    Ok(())
}
