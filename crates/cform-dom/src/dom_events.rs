//! DOM Events
//!
//! User-interaction events delivered to form controllers.

use crate::NodeId;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEventType {
    /// Value edited in a text-like control
    Input,
    /// Committed change (radio/checkbox toggled)
    Change,
    /// Form submission requested
    Submit,
    /// Key pressed while `target` has focus
    KeyDown,
}

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    /// `KeyboardEvent.key` for key events
    pub key: Option<String>,
    pub cancelable: bool,
    default_prevented: bool,
}

impl DomEvent {
    fn new(event_type: DomEventType, target: NodeId, cancelable: bool) -> Self {
        Self {
            event_type,
            target,
            key: None,
            cancelable,
            default_prevented: false,
        }
    }

    /// Create input event
    pub fn input(target: NodeId) -> Self {
        Self::new(DomEventType::Input, target, false)
    }

    /// Create change event
    pub fn change(target: NodeId) -> Self {
        Self::new(DomEventType::Change, target, false)
    }

    /// Create submit event (target is the form)
    pub fn submit(form: NodeId) -> Self {
        Self::new(DomEventType::Submit, form, true)
    }

    /// Create keydown event
    pub fn key_down(target: NodeId, key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::new(DomEventType::KeyDown, target, true)
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Event dispatcher trait
pub trait EventDispatcher {
    type Error;

    /// Run handlers for `event`; returns `false` if the default action was
    /// prevented, like `EventTarget.dispatchEvent`.
    fn dispatch_event(&mut self, event: DomEvent) -> Result<bool, Self::Error>;
}
