//! FormController - wires validators, presentation, keyboard navigation and
//! the success toast to one form.

use std::time::Duration;

use cform_a11y::{FocusManager, NavDirection};
use cform_dom::forms::ControlKind;
use cform_dom::{Document, DomEvent, DomEventType, EventDispatcher, NodeId};

use crate::{FormBindings, FormConfig, FormError, SuccessNotification, TimerManager, TimerTask};

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every check passed; the form was reset and the toast shown
    Accepted,
    /// At least one check failed; `focused` is the first errored control
    Rejected { focused: Option<NodeId> },
}

/// Controller for one form on one page, built once per session
pub struct FormController {
    pub(crate) document: Document,
    pub(crate) config: FormConfig,
    pub(crate) bindings: FormBindings,
    focus: FocusManager,
    timers: TimerManager,
    notification: SuccessNotification,
}

impl FormController {
    /// Take ownership of `document` and bind `config` to it.
    ///
    /// All structural lookups happen here; a page that does not match the
    /// configuration is rejected instead of failing later in a handler.
    pub fn attach(document: Document, config: FormConfig) -> Result<Self, FormError> {
        let bindings = FormBindings::resolve(&document, &config)?;
        let notification = SuccessNotification::new(
            bindings.notification(),
            &config.visible_class,
            config.notification_duration(),
        );
        tracing::debug!("Attached controller to #{} on {}", config.form_id, document.url());

        Ok(Self {
            document,
            config,
            bindings,
            focus: FocusManager::new(),
            timers: TimerManager::new(),
            notification,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Give the page back, e.g. when navigating away
    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn bindings(&self) -> &FormBindings {
        &self.bindings
    }

    /// First bound control named `name`
    pub fn control(&self, name: &str) -> Option<NodeId> {
        self.bindings.control_named(name)
    }

    /// Currently focused node
    pub fn focused(&self) -> Option<NodeId> {
        self.focus.get_focused()
    }

    pub fn focus(&mut self, id: NodeId) {
        self.focus.focus(id);
    }

    pub fn notification(&self) -> &SuccessNotification {
        &self.notification
    }

    pub fn is_notification_visible(&self) -> bool {
        self.notification.is_visible(&self.document)
    }

    /// Timers waiting to fire
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Validate everything, then either reset and celebrate or point the
    /// user at the first problem.
    ///
    /// Every check runs even after a failure so all messages appear at once.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let mut valid = true;

        let text_fields = self.bindings.text_fields().to_vec();
        for field in text_fields {
            valid &= self.validate_field(field)?;
        }
        let groups = self.bindings.required_groups().to_vec();
        for group in &groups {
            valid &= self.validate_group(group)?;
        }
        let consent = self.bindings.consent_checkboxes().to_vec();
        for checkbox in consent {
            valid &= self.validate_consent(checkbox)?;
        }

        if valid {
            self.document.reset_form(self.bindings.form())?;
            self.notification.show(&mut self.document, &mut self.focus, &mut self.timers)?;
            tracing::info!("Form #{} submitted", self.config.form_id);
            return Ok(SubmitOutcome::Accepted);
        }

        let focused = self.first_errored_control();
        if let Some(id) = focused {
            self.focus.focus(id);
        }
        tracing::debug!("Submission rejected, focusing {:?}", focused);
        Ok(SubmitOutcome::Rejected { focused })
    }

    fn first_errored_control(&self) -> Option<NodeId> {
        self.bindings
            .controls()
            .iter()
            .copied()
            .find(|&id| self.bindings.name_of(id).is_some_and(|name| self.has_error(name)))
    }

    /// Move the virtual clock and run every timer that came due.
    ///
    /// Returns how many timers fired.
    pub fn advance_time(&mut self, by: Duration) -> Result<usize, FormError> {
        let fired = self.timers.advance(by);
        for timer in &fired {
            match timer.task {
                TimerTask::HideNotification => self.notification.hide(&mut self.document)?,
            }
        }
        Ok(fired.len())
    }

    fn on_input(&mut self, target: NodeId) -> Result<(), FormError> {
        if self.bindings.is_text_field(target) {
            self.validate_field(target)?;
        }
        Ok(())
    }

    fn on_change(&mut self, target: NodeId) -> Result<(), FormError> {
        if self.bindings.is_radio(target) {
            if let Some(name) = self.bindings.name_of(target).map(str::to_string) {
                self.validate_group(&name)?;
            }
        } else if self.bindings.is_checkbox(target) {
            self.validate_consent(target)?;
        }
        Ok(())
    }

    fn on_key_down(&mut self, event: &mut DomEvent) -> Result<(), FormError> {
        let target = event.target;
        if !self.bindings.is_radio(target) {
            return Ok(());
        }
        let Some(direction) = event.key.as_deref().and_then(NavDirection::from_key) else {
            return Ok(());
        };
        let Some(name) = self.bindings.name_of(target).map(str::to_string) else {
            return Ok(());
        };
        let members = match self.bindings.group(&name) {
            Some(group) => group.members.clone(),
            None => return Err(FormError::UnknownGroup(name)),
        };

        event.prevent_default();
        if let Some(next) = self.focus.focus_step(&members, target, direction) {
            self.document.set_checked(next, true)?;
            tracing::trace!("Arrow navigation in `{}` -> {:?}", name, next);
        }
        self.validate_group(&name)?;
        Ok(())
    }

    /// Type `value` into a field, replacing its content, then fire `input`
    pub fn fill(&mut self, field: NodeId, value: &str) -> Result<bool, FormError> {
        self.focus.focus(field);
        self.document.set_value(field, value)?;
        self.dispatch_event(DomEvent::input(field))
    }

    /// Click a radio (select it) or checkbox (toggle it), then fire `change`
    pub fn click(&mut self, control: NodeId) -> Result<bool, FormError> {
        self.focus.focus(control);
        match self.document.control_kind(control) {
            Some(ControlKind::Radio) => self.document.set_checked(control, true)?,
            Some(ControlKind::Checkbox) => {
                let checked = self.document.checked(control)?;
                self.document.set_checked(control, !checked)?;
            }
            _ => return Err(FormError::NotAField(control)),
        }
        self.dispatch_event(DomEvent::change(control))
    }

    /// Press `key` while `target` has focus
    pub fn press_key(&mut self, target: NodeId, key: &str) -> Result<bool, FormError> {
        self.focus.focus(target);
        self.dispatch_event(DomEvent::key_down(target, key))
    }
}

impl EventDispatcher for FormController {
    type Error = FormError;

    fn dispatch_event(&mut self, mut event: DomEvent) -> Result<bool, FormError> {
        tracing::trace!("dispatch {:?} -> {:?}", event.event_type, event.target);
        match event.event_type {
            DomEventType::Input => self.on_input(event.target)?,
            DomEventType::Change => self.on_change(event.target)?,
            DomEventType::Submit => {
                if event.target == self.bindings.form() {
                    // No endpoint exists; the controller owns submission
                    event.prevent_default();
                    self.submit()?;
                }
            }
            DomEventType::KeyDown => self.on_key_down(&mut event)?,
        }
        Ok(!event.is_default_prevented())
    }
}
