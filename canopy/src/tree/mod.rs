//! Tree selection and expansion engine.
//!
//! The engine holds a forest of [`TreeNode`](crate::TreeNode)s together with
//! the runtime state a tree view needs: which nodes are expanded, which are
//! selected, and whether anything changed since the host last rendered.
//!
//! # Example
//!
//! ```
//! use canopy::{Key, SelectionMode, TreeEngine, TreeNode};
//!
//! let mut tree = TreeEngine::with_items(
//!     vec![
//!         TreeNode::new("a", "A")
//!             .with_child(TreeNode::new("b", "B"))
//!             .with_child(TreeNode::new("c", "C").with_child(TreeNode::new("d", "D"))),
//!     ],
//!     SelectionMode::Multi,
//! );
//!
//! tree.on_key("a", Key::Right);
//! tree.handle_click("c");
//! tree.handle_click("d");
//!
//! // Selecting a child clears its selected parent.
//! assert_eq!(tree.selected_ids(), vec!["d".to_string()]);
//! assert_eq!(tree.visible_nodes().len(), 4);
//! ```

mod events;
mod state;

pub use state::{FlatNode, TreeEngine};
