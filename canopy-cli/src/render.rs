//! Plain-text rendering of the visible tree.

use canopy::{FlatNode, TreeEngine};

mod icons {
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const DISABLED: &str = "✕";
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
}

mod icons_ascii {
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const DISABLED: &str = "[-]";
    pub const EXPANDED: &str = "[v]";
    pub const COLLAPSED: &str = "[>]";
}

/// Render a single visible node to a line.
pub fn render_node(node: &FlatNode, supports_unicode: bool) -> String {
    let indent = "  ".repeat(node.depth as usize);

    let (expanded, collapsed, selected, unselected, disabled) = if supports_unicode {
        (
            icons::EXPANDED,
            icons::COLLAPSED,
            icons::SELECTED,
            icons::UNSELECTED,
            icons::DISABLED,
        )
    } else {
        (
            icons_ascii::EXPANDED,
            icons_ascii::COLLAPSED,
            icons_ascii::SELECTED,
            icons_ascii::UNSELECTED,
            icons_ascii::DISABLED,
        )
    };

    let expand_icon = match (node.has_children, node.is_expanded) {
        (true, true) => format!("{} ", expanded),
        (true, false) => format!("{} ", collapsed),
        (false, _) => " ".repeat(expanded.chars().count() + 1),
    };

    let state_icon = if node.disabled {
        disabled
    } else if node.selected {
        selected
    } else {
        unselected
    };

    format!("{}{}{} {}", indent, expand_icon, state_icon, node.label)
}

/// Render every visible node, one per line.
pub fn render_tree(tree: &TreeEngine, supports_unicode: bool) -> String {
    let mut out = String::new();
    for node in tree.visible_nodes() {
        out.push_str(&render_node(&node, supports_unicode));
        out.push('\n');
    }
    out
}
