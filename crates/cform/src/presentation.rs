//! Error presentation
//!
//! Writes messages into error displays, flags containers, and keeps the
//! live-region marking in step with the message.

use cform_a11y::aria;

use crate::{ErrorBinding, FormController, FormError};

impl FormController {
    fn error_binding(&self, name: &str) -> Result<ErrorBinding, FormError> {
        self.bindings
            .error(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Show `message` for `name`, replacing any previous one
    pub fn show_error(&mut self, name: &str, message: &str) -> Result<(), FormError> {
        let ErrorBinding { display, container } = self.error_binding(name)?;
        self.document.set_text_content(display, message)?;
        self.document.add_class(container, &self.config.error_class)?;
        aria::announce(&mut self.document, display, self.config.live_region)?;
        Ok(())
    }

    /// Remove any message for `name`
    pub fn clear_error(&mut self, name: &str) -> Result<(), FormError> {
        let ErrorBinding { display, container } = self.error_binding(name)?;
        self.document.set_text_content(display, "")?;
        self.document.remove_class(container, &self.config.error_class)?;
        aria::silence(&mut self.document, display)?;
        Ok(())
    }

    /// Message currently shown for `name` (empty when clear)
    pub fn error_text(&self, name: &str) -> Result<String, FormError> {
        Ok(self.document.text_content(self.error_binding(name)?.display))
    }

    /// Whether `name`'s container is flagged as errored
    pub fn has_error(&self, name: &str) -> bool {
        self.bindings
            .error(name)
            .is_some_and(|b| self.document.has_class(b.container, &self.config.error_class))
    }
}
