//! Arrow-key navigation

/// Direction of a roving-focus step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Prev,
}

impl NavDirection {
    /// Map a `KeyboardEvent.key` value; `None` for keys we don't handle
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(Self::Next),
            "ArrowUp" | "ArrowLeft" => Some(Self::Prev),
            _ => None,
        }
    }
}
