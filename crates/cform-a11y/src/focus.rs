//! Focus Management

use cform_dom::NodeId;

use crate::NavDirection;

/// Focus manager
///
/// Tracks the single focused node of a page (`document.activeElement`).
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<NodeId>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus element
    pub fn focus(&mut self, id: NodeId) {
        tracing::trace!("focus -> {:?}", id);
        self.focused = Some(id);
    }

    /// Get focused element
    pub fn get_focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move focus one step through `members`, wrapping at both ends.
    ///
    /// Starts from `current`; if `current` is not a member the step starts
    /// from the first (`Next`) or last (`Prev`) member. Returns the newly
    /// focused member, or `None` when `members` is empty.
    pub fn focus_step(&mut self, members: &[NodeId], current: NodeId, direction: NavDirection) -> Option<NodeId> {
        let len = members.len();
        if len == 0 {
            return None;
        }

        let target = match (members.iter().position(|&id| id == current), direction) {
            (Some(p), NavDirection::Next) => (p + 1) % len,
            (Some(p), NavDirection::Prev) => (p + len - 1) % len,
            (None, NavDirection::Next) => 0,
            (None, NavDirection::Prev) => len - 1,
        };

        let next = members[target];
        self.focus(next);
        Some(next)
    }
}
