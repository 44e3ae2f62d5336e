//! Tree engine state.

use std::collections::HashSet;

use log::{debug, trace};

use crate::events::{NoopEventSink, TreeEvent, TreeEventSink};
use crate::node::TreeNode;
use crate::selection::SelectionMode;

/// A visible node in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    /// Node id.
    pub id: String,
    /// Node label.
    pub label: String,
    /// Depth in tree (0 = root).
    pub depth: u16,
    /// Whether this node has children.
    pub has_children: bool,
    /// Whether this node is currently expanded.
    pub is_expanded: bool,
    /// Whether this node is selected.
    pub selected: bool,
    /// Whether this node is disabled.
    pub disabled: bool,
}

/// Expansion and selection engine for a forest of [`TreeNode`]s.
///
/// The engine owns the forest handed to it by the host and keeps:
/// - the set of expanded node ids (authoritative after initialization)
/// - the selection mode, fixed until the next [`initialize`](Self::initialize)
/// - a dirty flag the host clears after re-rendering
///
/// Every change is reported to the installed [`TreeEventSink`]. Operations on
/// unknown ids or disabled nodes do nothing.
///
/// # Example
///
/// ```
/// use canopy::{EventLog, SelectionMode, TreeEngine, TreeEvent, TreeNode};
///
/// let log = EventLog::new();
/// let mut tree = TreeEngine::new().with_sink(log.clone());
/// tree.initialize(
///     vec![TreeNode::new("docs", "Docs").with_child(TreeNode::new("readme", "README"))],
///     SelectionMode::Single,
/// );
///
/// tree.handle_click("docs");
/// assert!(tree.is_expanded("docs"));
/// assert!(tree.is_selected("docs"));
/// assert_eq!(
///     log.events().last(),
///     Some(&TreeEvent::NodeActivated { node_id: "docs".into() })
/// );
/// ```
pub struct TreeEngine {
    /// Root nodes.
    roots: Vec<TreeNode>,
    /// Set of expanded node IDs.
    expanded: HashSet<String>,
    /// Selection mode.
    selection_mode: SelectionMode,
    /// Dirty flag for re-render.
    dirty: bool,
    /// Notification target.
    sink: Box<dyn TreeEventSink>,
}

impl std::fmt::Debug for TreeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeEngine")
            .field("roots", &self.roots)
            .field("expanded", &self.expanded)
            .field("selection_mode", &self.selection_mode)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl Default for TreeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeEngine {
    /// Create an empty engine with selection disabled.
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            expanded: HashSet::new(),
            selection_mode: SelectionMode::None,
            dirty: false,
            sink: Box::new(NoopEventSink),
        }
    }

    /// Create an engine and initialize it with a forest.
    pub fn with_items(roots: Vec<TreeNode>, selection_mode: SelectionMode) -> Self {
        let mut engine = Self::new();
        engine.initialize(roots, selection_mode);
        engine
    }

    /// Install the notification sink and return self.
    pub fn with_sink(mut self, sink: impl TreeEventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the notification sink.
    pub fn set_sink(&mut self, sink: impl TreeEventSink + 'static) {
        self.sink = Box::new(sink);
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Take a new forest and reset all runtime state.
    ///
    /// The expanded set is rebuilt from each node's static `expanded` flag;
    /// leaves are skipped. `selected` flags are taken as given.
    pub fn initialize(&mut self, roots: Vec<TreeNode>, selection_mode: SelectionMode) {
        self.roots = roots;
        self.selection_mode = selection_mode;
        self.expanded.clear();
        Self::collect_initial_expanded(&self.roots, &mut self.expanded);
        self.dirty = true;
        debug!(
            "Tree initialized: {} roots, mode {}, {} expanded",
            self.roots.len(),
            self.selection_mode,
            self.expanded.len()
        );
    }

    /// Replace the forest, keeping the current selection mode.
    pub fn set_roots(&mut self, roots: Vec<TreeNode>) {
        let mode = self.selection_mode;
        self.initialize(roots, mode);
    }

    fn collect_initial_expanded(items: &[TreeNode], expanded: &mut HashSet<String>) {
        for item in items {
            if item.expanded && item.has_children() {
                expanded.insert(item.id.clone());
            }
            Self::collect_initial_expanded(&item.children, expanded);
        }
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Get the root nodes.
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Check if the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Whether a node has at least one child.
    pub fn has_children(&self, node: &TreeNode) -> bool {
        node.has_children()
    }

    /// Find a node by ID anywhere in the forest (including collapsed).
    ///
    /// Depth-first, pre-order; the first match wins.
    pub fn find_node_by_id(&self, id: &str) -> Option<&TreeNode> {
        Self::find_in_items(&self.roots, id)
    }

    fn find_in_items<'a>(items: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
        for item in items {
            if item.id == id {
                return Some(item);
            }
            if let Some(found) = Self::find_in_items(&item.children, id) {
                return Some(found);
            }
        }
        None
    }

    /// Index path from the forest to the first node with this id.
    fn path_to(&self, id: &str) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        Self::find_path(&self.roots, id, &mut path).then_some(path)
    }

    fn find_path(items: &[TreeNode], id: &str, path: &mut Vec<usize>) -> bool {
        for (i, item) in items.iter().enumerate() {
            path.push(i);
            if item.id == id || Self::find_path(&item.children, id, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    fn node_at_path_mut<'a>(roots: &'a mut [TreeNode], path: &[usize]) -> Option<&'a mut TreeNode> {
        let (first, rest) = path.split_first()?;
        let mut node = roots.get_mut(*first)?;
        for &index in rest {
            node = node.children.get_mut(index)?;
        }
        Some(node)
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Check if a node is expanded.
    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    /// Number of expanded nodes.
    pub fn expanded_len(&self) -> usize {
        self.expanded.len()
    }

    /// Flip expansion of a node as a user action.
    ///
    /// Unknown ids, leaves and disabled nodes are ignored.
    pub fn toggle_expand(&mut self, node_id: &str) {
        let Some(node) = self.find_node_by_id(node_id) else {
            trace!("toggle_expand: unknown node '{}'", node_id);
            return;
        };
        if node.disabled {
            trace!("toggle_expand: node '{}' is disabled", node_id);
            return;
        }
        if !node.has_children() {
            trace!("toggle_expand: node '{}' is a leaf", node_id);
            return;
        }

        let expanded = if self.expanded.remove(node_id) {
            false
        } else {
            self.expanded.insert(node_id.to_string());
            true
        };
        self.dirty = true;
        debug!("Node '{}' expanded: {}", node_id, expanded);
        self.emit(TreeEvent::ExpandChanged {
            node_id: node_id.to_string(),
            expanded,
        });
    }

    /// Expand a node programmatically.
    ///
    /// Works on disabled nodes. Leaves and unknown ids are ignored.
    pub fn expand(&mut self, node_id: &str) {
        let expandable = self
            .find_node_by_id(node_id)
            .is_some_and(TreeNode::has_children);
        if expandable && self.expanded.insert(node_id.to_string()) {
            self.dirty = true;
            debug!("Node '{}' expanded: true", node_id);
            self.emit(TreeEvent::ExpandChanged {
                node_id: node_id.to_string(),
                expanded: true,
            });
        }
    }

    /// Collapse a node programmatically.
    pub fn collapse(&mut self, node_id: &str) {
        if self.expanded.remove(node_id) {
            self.dirty = true;
            debug!("Node '{}' expanded: false", node_id);
            self.emit(TreeEvent::ExpandChanged {
                node_id: node_id.to_string(),
                expanded: false,
            });
        }
    }

    /// Expand all expandable nodes.
    pub fn expand_all(&mut self) {
        let mut ids = Vec::new();
        Self::collect_expandable_ids(&self.roots, &mut ids);
        for id in ids {
            if self.expanded.insert(id.clone()) {
                self.dirty = true;
                self.emit(TreeEvent::ExpandChanged {
                    node_id: id,
                    expanded: true,
                });
            }
        }
        debug!("Expanded all: {} nodes expanded", self.expanded.len());
    }

    /// Collapse all nodes.
    pub fn collapse_all(&mut self) {
        let mut ids = Vec::new();
        Self::collect_expandable_ids(&self.roots, &mut ids);
        for id in ids {
            if self.expanded.remove(&id) {
                self.dirty = true;
                self.emit(TreeEvent::ExpandChanged {
                    node_id: id,
                    expanded: false,
                });
            }
        }
        self.expanded.clear();
        debug!("Collapsed all");
    }

    /// Recursively collect IDs of all expandable nodes in pre-order.
    fn collect_expandable_ids(items: &[TreeNode], out: &mut Vec<String>) {
        for item in items {
            if item.has_children() {
                out.push(item.id.clone());
                Self::collect_expandable_ids(&item.children, out);
            }
        }
    }

    /// The flattened list of nodes the host should draw, in pre-order.
    pub fn visible_nodes(&self) -> Vec<FlatNode> {
        let mut out = Vec::new();
        Self::collect_visible(&self.roots, &self.expanded, 0, &mut out);
        out
    }

    fn collect_visible(
        items: &[TreeNode],
        expanded: &HashSet<String>,
        depth: u16,
        out: &mut Vec<FlatNode>,
    ) {
        for item in items {
            let has_children = item.has_children();
            let is_expanded = expanded.contains(&item.id);

            out.push(FlatNode {
                id: item.id.clone(),
                label: item.label.clone(),
                depth,
                has_children,
                is_expanded,
                selected: item.selected,
                disabled: item.disabled,
            });

            if is_expanded && has_children {
                Self::collect_visible(&item.children, expanded, depth + 1, out);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Click
    // -------------------------------------------------------------------------

    /// Activate a node as the user would by clicking it.
    ///
    /// Applies the selection rule for the current mode, toggles expansion when
    /// the node has children, then reports activation. Disabled nodes and
    /// unknown ids are ignored without notifications.
    pub fn handle_click(&mut self, node_id: &str) {
        let Some(path) = self.path_to(node_id) else {
            trace!("handle_click: unknown node '{}'", node_id);
            return;
        };
        let Some(node) = Self::node_at_path_mut(&mut self.roots, &path) else {
            return;
        };
        if node.disabled {
            trace!("handle_click: node '{}' is disabled", node_id);
            return;
        }
        let has_children = node.has_children();

        let selected = match self.selection_mode {
            SelectionMode::None => None,
            SelectionMode::Single => Some(self.select_single(&path)),
            SelectionMode::Multi => Some(self.toggle_multi(&path)),
        };
        if let Some(selected) = selected {
            self.dirty = true;
            debug!("Node '{}' selected: {}", node_id, selected);
            self.emit(TreeEvent::SelectionChanged {
                node_id: node_id.to_string(),
                selected,
            });
        }

        if has_children {
            self.toggle_expand(node_id);
        }

        self.emit(TreeEvent::NodeActivated {
            node_id: node_id.to_string(),
        });
    }

    /// Clear every selection in the forest, then select the node at `path`.
    fn select_single(&mut self, path: &[usize]) -> bool {
        for root in &mut self.roots {
            root.selected = false;
            root.deselect_descendants();
        }
        match Self::node_at_path_mut(&mut self.roots, path) {
            Some(node) => {
                node.selected = true;
                true
            }
            None => false,
        }
    }

    /// Toggle the node at `path`, clearing its ancestors and descendants
    /// when it becomes selected. Returns the new flag.
    fn toggle_multi(&mut self, path: &[usize]) -> bool {
        let was_selected = Self::node_at_path_mut(&mut self.roots, path)
            .map(|node| node.selected)
            .unwrap_or(false);

        if !was_selected {
            for depth in 1..path.len() {
                if let Some(ancestor) = Self::node_at_path_mut(&mut self.roots, &path[..depth]) {
                    ancestor.selected = false;
                }
            }
        }

        match Self::node_at_path_mut(&mut self.roots, path) {
            Some(node) => {
                if !was_selected {
                    node.deselect_descendants();
                }
                node.selected = !was_selected;
                node.selected
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check if a node is selected by ID.
    pub fn is_selected(&self, id: &str) -> bool {
        self.find_node_by_id(id).is_some_and(|node| node.selected)
    }

    /// IDs of all selected nodes, in pre-order.
    pub fn selected_ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        Self::collect_selected(&self.roots, &mut out);
        out
    }

    fn collect_selected(items: &[TreeNode], out: &mut Vec<String>) {
        for item in items {
            if item.selected {
                out.push(item.id.clone());
            }
            Self::collect_selected(&item.children, out);
        }
    }

    /// Deselect every node.
    ///
    /// Reports one `SelectionChanged` per node that was selected.
    pub fn clear_selection(&mut self) {
        let mut cleared = Vec::new();
        Self::clear_in_items(&mut self.roots, &mut cleared);
        if cleared.is_empty() {
            return;
        }
        self.dirty = true;
        debug!("Cleared selection on {} nodes", cleared.len());
        for node_id in cleared {
            self.emit(TreeEvent::SelectionChanged {
                node_id,
                selected: false,
            });
        }
    }

    fn clear_in_items(items: &mut [TreeNode], cleared: &mut Vec<String>) {
        for item in items {
            if item.selected {
                item.selected = false;
                cleared.push(item.id.clone());
            }
            Self::clear_in_items(&mut item.children, cleared);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the tree has changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub(super) fn emit(&mut self, event: TreeEvent) {
        self.sink.on_event(&event);
    }
}
