//! Canopy - selection and expansion state for tree views.
//!
//! The crate holds the logic behind a tree-view widget without any rendering:
//! a host hands over a forest of [`TreeNode`]s, forwards clicks and key
//! presses to a [`TreeEngine`], and redraws when it receives [`TreeEvent`]s.

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod node;
pub mod selection;
pub mod tree;

pub use config::{TreeConfig, TreeDocument, validate_forest};
pub use error::{KeyParseError, TreeError};
pub use events::{EventLog, EventResult, JsonEventSink, NoopEventSink, TreeEvent, TreeEventSink};
pub use keys::Key;
pub use node::TreeNode;
pub use selection::SelectionMode;
pub use tree::{FlatNode, TreeEngine};

pub mod prelude {
    pub use crate::config::{TreeConfig, TreeDocument};
    pub use crate::events::{EventLog, EventResult, TreeEvent, TreeEventSink};
    pub use crate::keys::Key;
    pub use crate::node::TreeNode;
    pub use crate::selection::SelectionMode;
    pub use crate::tree::{FlatNode, TreeEngine};
}
