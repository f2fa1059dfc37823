//! Controller configuration
//!
//! Everything the controller needs to know about the page it is wired to.
//! `Default` describes the contact form; a RON document can override any
//! subset of keys.

use std::time::Duration;

use cform_a11y::LiveRegionMode;
use serde::Deserialize;

use crate::{ErrorCatalog, FormError};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// `id` of the `<form>` element
    pub form_id: String,
    /// `id` of the success toast
    pub notification_id: String,
    /// Error display of field `x` is `#x{error_id_suffix}`
    pub error_id_suffix: String,
    /// Tried in order with `closest` from the error display
    pub container_selectors: Vec<String>,
    /// Class put on a container while its field is in error
    pub error_class: String,
    /// Class put on the toast while it is visible
    pub visible_class: String,
    /// Field whose value must also look like an email address
    pub email_field: String,
    /// Radio groups checked on submit
    pub required_groups: Vec<String>,
    /// `id`s of checkboxes checked on submit
    pub consent_checkboxes: Vec<String>,
    pub notification_duration_ms: u64,
    /// Politeness used when announcing error text
    pub live_region: LiveRegionMode,
    /// Replaces the default catalog as a whole when given
    pub catalog: ErrorCatalog,
}

impl FormConfig {
    /// Parse a RON configuration; missing keys keep their defaults
    pub fn from_ron(source: &str) -> Result<Self, FormError> {
        Ok(ron::from_str(source)?)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// `id` of the error display for `field`
    pub fn error_display_id(&self, field: &str) -> String {
        format!("{field}{}", self.error_id_suffix)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            notification_id: "successToast".to_string(),
            error_id_suffix: "-error".to_string(),
            container_selectors: vec![".form-group".to_string(), "fieldset".to_string()],
            error_class: "error".to_string(),
            visible_class: "show".to_string(),
            email_field: "email".to_string(),
            required_groups: vec!["queryType".to_string()],
            consent_checkboxes: vec!["consent".to_string()],
            notification_duration_ms: 5000,
            live_region: LiveRegionMode::Polite,
            catalog: ErrorCatalog::default(),
        }
    }
}
