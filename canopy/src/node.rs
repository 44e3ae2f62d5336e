//! Tree node data model.

use serde::{Deserialize, Serialize};

/// A node in a tree forest.
///
/// Nodes own their children. The engine never creates or removes nodes; it
/// only flips `selected` and tracks expansion separately by id.
///
/// # Example
///
/// ```
/// use canopy::TreeNode;
///
/// let root = TreeNode::new("src", "src/")
///     .with_child(TreeNode::new("lib", "lib.rs"))
///     .with_child(TreeNode::new("main", "main.rs").disabled(true));
///
/// assert!(root.has_children());
/// assert_eq!(root.children.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Key that is unique within the owning tree.
    pub id: String,
    /// Display text. Opaque to the engine.
    #[serde(default)]
    pub label: String,
    /// Ordered child nodes. Empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Disabled nodes ignore clicks and user-driven expansion.
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    /// Initial expansion. Only read when the engine is initialized.
    #[serde(default, skip_serializing_if = "is_false")]
    pub expanded: bool,
    /// Selection flag, maintained by the engine after initialization.
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TreeNode {
    /// Create a leaf node.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Append a child and return self.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the children and return self.
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Set the initial expansion flag.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the selected flag.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Append a child in place.
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Whether this node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_len).sum::<usize>()
    }

    /// Set `selected = false` on every strict descendant.
    ///
    /// Returns the number of descendants that were selected.
    pub(crate) fn deselect_descendants(&mut self) -> usize {
        let mut cleared = 0;
        for child in &mut self.children {
            if child.selected {
                child.selected = false;
                cleared += 1;
            }
            cleared += child.deselect_descendants();
        }
        cleared
    }
}
