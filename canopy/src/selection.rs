//! Selection mode for tree instances.

use serde::{Deserialize, Serialize};

/// How many nodes may be selected at once.
///
/// Fixed for the lifetime of an initialized tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Clicks never change selection
    #[default]
    None,
    /// At most one node in the whole forest is selected
    Single,
    /// Many nodes may be selected, but never a node together with one of its
    /// ancestors or descendants
    Multi,
}

impl SelectionMode {
    /// Derive the mode from the `selectable` and `multi_select` host flags.
    ///
    /// `multi_select` has no effect when `selectable` is false.
    pub fn from_flags(selectable: bool, multi_select: bool) -> Self {
        match (selectable, multi_select) {
            (false, _) => Self::None,
            (true, false) => Self::Single,
            (true, true) => Self::Multi,
        }
    }

    /// Whether clicks change selection in this mode.
    pub fn is_selectable(self) -> bool {
        self != Self::None
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Multi => "multi",
        };
        f.write_str(name)
    }
}
