//! Error catalog: field name to user-facing message(s)

use std::collections::HashMap;

use serde::Deserialize;

const REQUIRED: &str = "This field is required";

/// Messages for one field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum ErrorMessage {
    /// One message for every failure
    Single(String),
    /// Separate messages for an empty and a malformed value
    Pair { required: String, invalid: String },
}

impl ErrorMessage {
    pub fn single(message: &str) -> Self {
        Self::Single(message.to_string())
    }

    pub fn pair(required: &str, invalid: &str) -> Self {
        Self::Pair {
            required: required.to_string(),
            invalid: invalid.to_string(),
        }
    }

    /// Message shown when the value is missing
    pub fn required(&self) -> &str {
        match self {
            Self::Single(message) => message,
            Self::Pair { required, .. } => required,
        }
    }

    /// Message shown when the value is malformed; only pairs carry one
    pub fn invalid(&self) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::Pair { invalid, .. } => Some(invalid),
        }
    }
}

/// Immutable field → message mapping
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ErrorCatalog(HashMap<String, ErrorMessage>);

impl ErrorCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, field: &str, message: ErrorMessage) -> Self {
        self.0.insert(field.to_string(), message);
        self
    }

    pub fn get(&self, field: &str) -> Option<&ErrorMessage> {
        self.0.get(field)
    }

    pub fn required_message(&self, field: &str) -> Option<&str> {
        self.get(field).map(ErrorMessage::required)
    }

    pub fn invalid_message(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(ErrorMessage::invalid)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ErrorCatalog {
    /// Messages of the contact form
    fn default() -> Self {
        Self::new()
            .with("firstName", ErrorMessage::single(REQUIRED))
            .with("lastName", ErrorMessage::single(REQUIRED))
            .with("email", ErrorMessage::pair(REQUIRED, "Please enter a valid email address"))
            .with("queryType", ErrorMessage::single("Please select a query type"))
            .with("message", ErrorMessage::single(REQUIRED))
            .with(
                "consent",
                ErrorMessage::single("To submit this form, please consent to being contacted"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = ErrorCatalog::default();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.required_message("lastName"), Some("This field is required"));
        assert_eq!(catalog.required_message("email"), Some("This field is required"));
        assert_eq!(catalog.invalid_message("email"), Some("Please enter a valid email address"));
        assert_eq!(catalog.invalid_message("firstName"), None);
        assert_eq!(catalog.required_message("phone"), None);
    }
}
