//! Form control state and the document-level operations on it.

use crate::{Document, DomError, DomResult, NodeId};

/// Kinds of controls the form layer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// `<input type="text">` or an input with no/unknown-to-us type
    Text,
    /// `<input type="email">`
    Email,
    /// `<textarea>`
    Textarea,
    /// `<input type="radio">`
    Radio,
    /// `<input type="checkbox">`
    Checkbox,
    /// Any other value-carrying input (tel, password, number, ...)
    Other,
}

impl ControlKind {
    /// Classify an element; `None` for non-controls and button-like inputs
    pub fn classify(tag_name: &str, input_type: Option<&str>) -> Option<Self> {
        match tag_name {
            "textarea" => Some(Self::Textarea),
            "input" => {
                let ty = input_type.map(|t| t.trim().to_ascii_lowercase());
                match ty.as_deref() {
                    None | Some("") | Some("text") => Some(Self::Text),
                    Some("email") => Some(Self::Email),
                    Some("radio") => Some(Self::Radio),
                    Some("checkbox") => Some(Self::Checkbox),
                    Some("submit" | "reset" | "button" | "image") => None,
                    Some(_) => Some(Self::Other),
                }
            }
            _ => None,
        }
    }

    /// Text, email and multiline fields
    pub fn is_text_like(self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Textarea)
    }

    /// Radios and checkboxes
    pub fn is_checkable(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

/// Live state of a form control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    pub value: String,
    pub default_value: String,
    pub checked: bool,
    pub default_checked: bool,
}

impl ControlState {
    pub fn new(default_value: String, default_checked: bool) -> Self {
        Self {
            value: default_value.clone(),
            default_value,
            checked: default_checked,
            default_checked,
        }
    }

    /// Restore markup defaults
    pub fn reset(&mut self) {
        self.value.clone_from(&self.default_value);
        self.checked = self.default_checked;
    }
}

impl Document {
    fn control(&self, id: NodeId) -> DomResult<&ControlState> {
        self.tree.element(id)?.control.as_ref().ok_or(DomError::NotAControl(id))
    }

    fn control_mut(&mut self, id: NodeId) -> DomResult<&mut ControlState> {
        self.tree.element_mut(id)?.control.as_mut().ok_or(DomError::NotAControl(id))
    }

    /// Control kind of an element
    pub fn control_kind(&self, id: NodeId) -> Option<ControlKind> {
        self.tree.element(id).ok()?.control_kind()
    }

    /// Current value of a control
    pub fn value(&self, id: NodeId) -> DomResult<&str> {
        Ok(&self.control(id)?.value)
    }

    /// Set the current value of a control
    pub fn set_value(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        self.control_mut(id)?.value = value.to_string();
        Ok(())
    }

    /// Current checkedness of a control
    pub fn checked(&self, id: NodeId) -> DomResult<bool> {
        Ok(self.control(id)?.checked)
    }

    /// Set checkedness; checking a radio unchecks the rest of its group
    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> DomResult<()> {
        if checked && self.control_kind(id) == Some(ControlKind::Radio) {
            for other in self.radio_group(id)? {
                if other != id {
                    self.control_mut(other)?.checked = false;
                }
            }
        }
        self.control_mut(id)?.checked = checked;
        Ok(())
    }

    /// Whether the control carries the `required` attribute
    pub fn is_required(&self, id: NodeId) -> bool {
        self.has_attribute(id, "required")
    }

    /// Nearest ancestor `<form>`
    pub fn form_owner(&self, id: NodeId) -> Option<NodeId> {
        self.tree.ancestors(id).find(|&a| self.tree.element(a).is_ok_and(|e| e.tag_name == "form"))
    }

    /// Radios sharing `radio`'s name and form owner, in document order
    pub fn radio_group(&self, radio: NodeId) -> DomResult<Vec<NodeId>> {
        let name = self.tree.element(radio)?.name().unwrap_or_default();
        let owner = self.form_owner(radio);
        let scope = owner.unwrap_or(NodeId::ROOT);
        Ok(self
            .tree
            .descendants(scope)
            .filter(|&id| {
                self.tree.element(id).is_ok_and(|e| {
                    e.control_kind() == Some(ControlKind::Radio) && e.name().unwrap_or_default() == name
                }) && self.form_owner(id) == owner
            })
            .collect())
    }

    /// Restore every control under `form` to its markup default.
    ///
    /// Returns the number of controls reset.
    pub fn reset_form(&mut self, form: NodeId) -> DomResult<usize> {
        self.tree.element(form)?;
        let controls: Vec<NodeId> = self
            .tree
            .descendants(form)
            .filter(|&id| self.tree.element(id).is_ok_and(|e| e.control.is_some()))
            .collect();
        for &id in &controls {
            self.control_mut(id)?.reset();
        }
        tracing::debug!("Reset {} controls", controls.len());
        Ok(controls.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(doc: &mut Document, parent: NodeId, ty: &str, name: &str) -> NodeId {
        let id = doc.tree_mut().create_element("input");
        doc.tree_mut().append_child(parent, id).unwrap();
        doc.set_attribute(id, "type", ty).unwrap();
        doc.set_attribute(id, "name", name).unwrap();
        id
    }

    #[test]
    fn test_classify() {
        assert_eq!(ControlKind::classify("input", None), Some(ControlKind::Text));
        assert_eq!(ControlKind::classify("input", Some("EMAIL")), Some(ControlKind::Email));
        assert_eq!(ControlKind::classify("input", Some("tel")), Some(ControlKind::Other));
        assert_eq!(ControlKind::classify("input", Some("submit")), None);
        assert_eq!(ControlKind::classify("textarea", None), Some(ControlKind::Textarea));
        assert_eq!(ControlKind::classify("button", None), None);
        assert!(ControlKind::Textarea.is_text_like());
        assert!(!ControlKind::Radio.is_text_like());
    }

    #[test]
    fn test_radio_exclusivity_is_scoped_to_form() {
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        let form = doc.tree_mut().create_element("form");
        doc.tree_mut().append_child(body, form).unwrap();
        let a = input(&mut doc, form, "radio", "queryType");
        let b = input(&mut doc, form, "radio", "queryType");
        let outside = input(&mut doc, body, "radio", "queryType");
        doc.finalize();

        assert_eq!(doc.radio_group(a).unwrap(), vec![a, b]);

        doc.set_checked(outside, true).unwrap();
        doc.set_checked(a, true).unwrap();
        doc.set_checked(b, true).unwrap();
        assert!(!doc.checked(a).unwrap());
        assert!(doc.checked(b).unwrap());
        assert!(doc.checked(outside).unwrap());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        let form = doc.tree_mut().create_element("form");
        doc.tree_mut().append_child(body, form).unwrap();
        let name = input(&mut doc, form, "text", "firstName");
        let consent = input(&mut doc, form, "checkbox", "consent");
        doc.finalize();

        doc.set_value(name, "Ada").unwrap();
        doc.set_checked(consent, true).unwrap();
        assert_eq!(doc.reset_form(form).unwrap(), 2);
        assert_eq!(doc.value(name).unwrap(), "");
        assert!(!doc.checked(consent).unwrap());
    }

    #[test]
    fn test_non_control_errors() {
        let doc = Document::new("about:blank");
        let body = doc.body();
        assert_eq!(doc.value(body).unwrap_err(), DomError::NotAControl(body));
    }
}
