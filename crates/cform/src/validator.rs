//! Field, radio-group and checkbox validators

use std::sync::LazyLock;

use cform_dom::forms::ValidityState;
use cform_dom::NodeId;
use regex::Regex;

use crate::{FormController, FormError};

/// Deliberately permissive: `local@domain.tld` with no whitespace or `@`
/// inside the parts. The excluded class is the same set `is_form_whitespace`
/// accepts; regex `\s` differs from it on U+0085 and U+FEFF.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = r"[^@\t\n\x0B\f\r\p{Zs}\x{2028}\x{2029}\x{FEFF}]+";
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

/// Whitespace and line terminators stripped from field values.
///
/// Space separators (Zs), the C0 blanks, the line/paragraph separators
/// and the byte-order mark. U+0085 (NEL) is not whitespace here.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r'
            | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
            | '\u{2028}' | '\u{2029}' | '\u{FEFF}'
    )
}

/// Check a (trimmed) value against the email pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

impl FormController {
    fn bound_name(&self, id: NodeId) -> Result<String, FormError> {
        self.bindings
            .name_of(id)
            .map(str::to_string)
            .ok_or(FormError::NotAField(id))
    }

    fn required_message(&self, name: &str) -> Result<String, FormError> {
        self.config
            .catalog
            .required_message(name)
            .map(str::to_string)
            .ok_or_else(|| FormError::MissingMessage {
                field: name.to_string(),
                variant: "required",
            })
    }

    /// Validate a text, email or multiline field and render the outcome
    pub fn validate_field(&mut self, field: NodeId) -> Result<bool, FormError> {
        if !self.bindings.is_text_field(field) {
            return Err(FormError::NotAField(field));
        }
        let name = self.bound_name(field)?;
        let value = self.document.value(field)?.trim_matches(is_form_whitespace);

        let validity = ValidityState {
            value_missing: self.document.is_required(field) && value.is_empty(),
            type_mismatch: name == self.config.email_field && !value.is_empty() && !is_valid_email(value),
        };

        self.clear_error(&name)?;
        if validity.value_missing {
            let message = self.required_message(&name)?;
            self.show_error(&name, &message)?;
        } else if validity.type_mismatch {
            let message = self
                .config
                .catalog
                .invalid_message(&name)
                .map(str::to_string)
                .ok_or_else(|| FormError::MissingMessage {
                    field: name.clone(),
                    variant: "invalid",
                })?;
            self.show_error(&name, &message)?;
        }

        if !validity.is_valid() {
            tracing::debug!("Field `{}` failed validation: {:?}", name, validity);
        }
        Ok(validity.is_valid())
    }

    /// Validate that one radio named `name` is checked
    pub fn validate_group(&mut self, name: &str) -> Result<bool, FormError> {
        let group = self
            .bindings
            .group(name)
            .ok_or_else(|| FormError::UnknownGroup(name.to_string()))?;

        let mut any_checked = false;
        for &radio in &group.members {
            any_checked |= self.document.checked(radio)?;
        }

        self.clear_error(name)?;
        if !any_checked {
            let message = self.required_message(name)?;
            self.show_error(name, &message)?;
            tracing::debug!("Radio group `{}` has no selection", name);
        }
        Ok(any_checked)
    }

    /// Validate a required consent checkbox
    pub fn validate_consent(&mut self, checkbox: NodeId) -> Result<bool, FormError> {
        if !self.bindings.is_checkbox(checkbox) {
            return Err(FormError::NotAField(checkbox));
        }
        let name = self.bound_name(checkbox)?;
        let validity = ValidityState {
            value_missing: self.document.is_required(checkbox) && !self.document.checked(checkbox)?,
            ..Default::default()
        };

        self.clear_error(&name)?;
        if validity.value_missing {
            let message = self.required_message(&name)?;
            self.show_error(&name, &message)?;
            tracing::debug!("Checkbox `{}` left unchecked", name);
        }
        Ok(validity.is_valid())
    }
}
