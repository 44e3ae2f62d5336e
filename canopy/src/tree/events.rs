//! Keyboard dispatch for the tree engine.

use crate::events::EventResult;
use crate::keys::Key;

use super::state::TreeEngine;

impl TreeEngine {
    /// Dispatch a key pressed while `node_id` has focus.
    ///
    /// - `Enter` / `Space` activate the node (see [`handle_click`](Self::handle_click))
    /// - `Right` expands a collapsed node with children
    /// - `Left` collapses an expanded node
    ///
    /// Every other key is left to the host (focus movement and the like).
    pub fn on_key(&mut self, node_id: &str, key: Key) -> EventResult {
        let Some(node) = self.find_node_by_id(node_id) else {
            return EventResult::Ignored;
        };
        if node.disabled {
            return EventResult::Ignored;
        }
        let has_children = node.has_children();
        let is_expanded = self.is_expanded(node_id);

        match key {
            key if key.is_activate() => {
                self.handle_click(node_id);
                EventResult::Consumed
            }
            Key::Right if has_children && !is_expanded => {
                self.toggle_expand(node_id);
                EventResult::Consumed
            }
            Key::Left if has_children && is_expanded => {
                self.toggle_expand(node_id);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
