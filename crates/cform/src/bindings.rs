//! Page relations resolved once at attach time
//!
//! Field → error display, error display → group container, group name →
//! radios, and the document order of every bound control. Handlers read
//! these instead of searching the tree again.

use std::collections::HashMap;

use cform_dom::forms::ControlKind;
use cform_dom::{Document, NodeId};

use crate::{FormConfig, FormError};

/// Where a field's validation message is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBinding {
    /// Element receiving the message text
    pub display: NodeId,
    /// Element carrying the error class
    pub container: NodeId,
}

/// Radios sharing one name inside the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    pub name: String,
    /// Members in document order
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct FormBindings {
    form: NodeId,
    notification: NodeId,
    text_fields: Vec<NodeId>,
    groups: Vec<RadioGroup>,
    checkboxes: Vec<NodeId>,
    controls: Vec<NodeId>,
    names: HashMap<NodeId, String>,
    errors: HashMap<String, ErrorBinding>,
    required_groups: Vec<String>,
    consent: Vec<NodeId>,
}

impl FormBindings {
    /// Resolve every relation the controller needs, failing on the first
    /// contract violation between `doc` and `config`.
    pub fn resolve(doc: &Document, config: &FormConfig) -> Result<Self, FormError> {
        let form = by_id(doc, &config.form_id)?;
        let notification = by_id(doc, &config.notification_id)?;

        let mut bindings = Self {
            form,
            notification,
            text_fields: Vec::new(),
            groups: Vec::new(),
            checkboxes: Vec::new(),
            controls: Vec::new(),
            names: HashMap::new(),
            errors: HashMap::new(),
            required_groups: Vec::new(),
            consent: Vec::new(),
        };

        for id in doc.tree().descendants(form) {
            let Some(kind) = doc.control_kind(id) else { continue };
            // Without a name there is no error display to address
            let Some(name) = doc.get_attribute(id, "name").filter(|n| !n.is_empty()) else {
                continue;
            };

            match kind {
                k if k.is_text_like() => bindings.text_fields.push(id),
                ControlKind::Radio => match bindings.groups.iter_mut().find(|g| g.name == name) {
                    Some(group) => group.members.push(id),
                    None => bindings.groups.push(RadioGroup {
                        name: name.to_string(),
                        members: vec![id],
                    }),
                },
                ControlKind::Checkbox => bindings.checkboxes.push(id),
                _ => continue,
            }

            bindings.controls.push(id);
            bindings.names.insert(id, name.to_string());
            if !bindings.errors.contains_key(name) {
                let binding = resolve_error_binding(doc, config, name)?;
                bindings.errors.insert(name.to_string(), binding);
            }
        }

        bindings.check_catalog(doc, config)?;

        for group in &config.required_groups {
            if bindings.group(group).is_none() {
                return Err(FormError::UnknownGroup(group.clone()));
            }
            bindings.required_groups.push(group.clone());
        }
        for id in &config.consent_checkboxes {
            let checkbox = by_id(doc, id)?;
            if !bindings.checkboxes.contains(&checkbox) {
                return Err(FormError::NotAField(checkbox));
            }
            bindings.consent.push(checkbox);
        }

        tracing::debug!(
            "Bound {} text fields, {} radio groups, {} checkboxes",
            bindings.text_fields.len(),
            bindings.groups.len(),
            bindings.checkboxes.len()
        );
        Ok(bindings)
    }

    /// Every message a validator may need has to exist up front
    fn check_catalog(&self, doc: &Document, config: &FormConfig) -> Result<(), FormError> {
        let catalog = &config.catalog;
        let missing = |field: &str, variant| FormError::MissingMessage {
            field: field.to_string(),
            variant,
        };

        for &id in self.text_fields.iter().chain(&self.checkboxes) {
            let name = self.name_of(id).unwrap_or_default();
            if doc.is_required(id) && catalog.required_message(name).is_none() {
                return Err(missing(name, "required"));
            }
            if name == config.email_field && catalog.invalid_message(name).is_none() {
                return Err(missing(name, "invalid"));
            }
        }
        for group in &self.groups {
            if catalog.required_message(&group.name).is_none() {
                return Err(missing(&group.name, "required"));
            }
        }
        Ok(())
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn notification(&self) -> NodeId {
        self.notification
    }

    /// Text, email and multiline fields in document order
    pub fn text_fields(&self) -> &[NodeId] {
        &self.text_fields
    }

    /// Every bound control in document order
    pub fn controls(&self) -> &[NodeId] {
        &self.controls
    }

    pub fn groups(&self) -> &[RadioGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&RadioGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Groups validated on submit
    pub fn required_groups(&self) -> &[String] {
        &self.required_groups
    }

    /// Checkboxes validated on submit
    pub fn consent_checkboxes(&self) -> &[NodeId] {
        &self.consent
    }

    pub fn is_text_field(&self, id: NodeId) -> bool {
        self.text_fields.contains(&id)
    }

    pub fn is_checkbox(&self, id: NodeId) -> bool {
        self.checkboxes.contains(&id)
    }

    pub fn is_radio(&self, id: NodeId) -> bool {
        self.groups.iter().any(|g| g.members.contains(&id))
    }

    /// `name` of a bound control
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// First bound control named `name`
    pub fn control_named(&self, name: &str) -> Option<NodeId> {
        self.controls.iter().copied().find(|&id| self.name_of(id) == Some(name))
    }

    pub fn error(&self, name: &str) -> Option<ErrorBinding> {
        self.errors.get(name).copied()
    }
}

fn by_id(doc: &Document, id: &str) -> Result<NodeId, FormError> {
    doc.get_element_by_id(id).ok_or_else(|| FormError::MissingElement(id.to_string()))
}

fn resolve_error_binding(doc: &Document, config: &FormConfig, name: &str) -> Result<ErrorBinding, FormError> {
    let display = doc
        .get_element_by_id(&config.error_display_id(name))
        .ok_or_else(|| FormError::MissingErrorDisplay(name.to_string()))?;

    for selector in &config.container_selectors {
        if let Some(container) = doc.closest(display, selector)? {
            return Ok(ErrorBinding { display, container });
        }
    }
    Err(FormError::MissingContainer(name.to_string()))
}
