//! Constraint validity flags

/// Validity state for form controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    /// The element's value is missing (required but empty/unchecked)
    pub value_missing: bool,
    /// The element's value doesn't match its type (e.g. malformed email)
    pub type_mismatch: bool,
}

impl ValidityState {
    /// Check if the element is valid
    pub fn is_valid(&self) -> bool {
        !self.value_missing && !self.type_mismatch
    }
}
