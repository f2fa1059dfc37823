//! End-to-end behavior of the contact form controller

use std::time::Duration;

use cform::{FormConfig, FormController, SubmitOutcome};
use cform_a11y::{live_region_mode, LiveRegionMode};
use cform_dom::{DomEvent, EventDispatcher, NodeId};

const CONTACT: &str = include_str!("../demos/contact.html");

const REQUIRED: &str = "This field is required";
const BAD_EMAIL: &str = "Please enter a valid email address";
const NO_QUERY: &str = "Please select a query type";
const NO_CONSENT: &str = "To submit this form, please consent to being contacted";

const FIELDS: [&str; 6] = ["firstName", "lastName", "email", "queryType", "message", "consent"];

fn page() -> FormController {
    let doc = cform_html::parse(CONTACT).unwrap();
    FormController::attach(doc, FormConfig::default()).unwrap()
}

fn control(form: &FormController, name: &str) -> NodeId {
    form.control(name).unwrap_or_else(|| panic!("no control named {name}"))
}

fn by_id(form: &FormController, id: &str) -> NodeId {
    form.document().get_element_by_id(id).unwrap()
}

fn fill_valid(form: &mut FormController) {
    form.fill(control(form, "firstName"), "Ada").unwrap();
    form.fill(control(form, "lastName"), "Lovelace").unwrap();
    form.fill(control(form, "email"), "ada@example.com").unwrap();
    form.click(by_id(form, "general")).unwrap();
    form.fill(control(form, "message"), "Hello there").unwrap();
    form.click(control(form, "consent")).unwrap();
}

fn live_attr(form: &FormController, name: &str) -> Option<LiveRegionMode> {
    let display = by_id(form, &format!("{name}-error"));
    live_region_mode(form.document(), display)
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[test]
fn test_empty_submit_shows_every_message() {
    let mut form = page();

    let outcome = form.submit().unwrap();
    assert_eq!(outcome, SubmitOutcome::Rejected { focused: Some(control(&form, "firstName")) });
    assert_eq!(form.focused(), Some(control(&form, "firstName")));

    let expected = [REQUIRED, REQUIRED, REQUIRED, NO_QUERY, REQUIRED, NO_CONSENT];
    for (name, message) in FIELDS.iter().zip(expected) {
        assert_eq!(form.error_text(name).unwrap(), message, "message for {name}");
        assert!(form.has_error(name), "{name} container flagged");
        assert_eq!(live_attr(&form, name), Some(LiveRegionMode::Polite), "{name} announced");
    }
    assert!(!form.is_notification_visible());
}

#[test]
fn test_valid_submit_resets_and_shows_toast() {
    let mut form = page();
    fill_valid(&mut form);

    assert_eq!(form.submit().unwrap(), SubmitOutcome::Accepted);

    let doc = form.document();
    for name in ["firstName", "lastName", "email", "message"] {
        assert_eq!(doc.value(control(&form, name)).unwrap(), "", "{name} cleared");
    }
    assert!(!doc.checked(by_id(&form, "general")).unwrap());
    assert!(!doc.checked(control(&form, "consent")).unwrap());
    for name in FIELDS {
        assert_eq!(form.error_text(name).unwrap(), "");
        assert_eq!(live_attr(&form, name), None);
    }

    let toast = by_id(&form, "successToast");
    assert!(form.is_notification_visible());
    assert_eq!(form.document().get_attribute(toast, "class"), Some("toast show"));
    assert_eq!(form.focused(), Some(toast));
}

#[test]
fn test_toast_hides_after_delay_not_before() {
    let mut form = page();
    fill_valid(&mut form);
    form.submit().unwrap();

    assert_eq!(form.advance_time(Duration::from_millis(4999)).unwrap(), 0);
    assert!(form.is_notification_visible());

    assert_eq!(form.advance_time(Duration::from_millis(1)).unwrap(), 1);
    assert!(!form.is_notification_visible());
    assert_eq!(form.pending_timers(), 0);
}

#[test]
fn test_repeated_success_schedules_independent_hides() {
    let mut form = page();
    fill_valid(&mut form);
    form.submit().unwrap();
    form.advance_time(Duration::from_secs(3)).unwrap();

    fill_valid(&mut form);
    form.submit().unwrap();
    assert_eq!(form.pending_timers(), 2);

    // The first hide is not cancelled by the second show
    assert_eq!(form.advance_time(Duration::from_secs(2)).unwrap(), 1);
    assert!(!form.is_notification_visible());

    assert_eq!(form.advance_time(Duration::from_secs(3)).unwrap(), 1);
    assert!(!form.is_notification_visible());
}

#[test]
fn test_single_invalid_field_is_focused_alone() {
    let mut form = page();
    fill_valid(&mut form);
    form.fill(control(&form, "lastName"), "").unwrap();

    let last_name = control(&form, "lastName");
    assert_eq!(form.submit().unwrap(), SubmitOutcome::Rejected { focused: Some(last_name) });
    assert_eq!(form.focused(), Some(last_name));

    for name in FIELDS {
        if name == "lastName" {
            assert_eq!(form.error_text(name).unwrap(), REQUIRED);
        } else {
            assert_eq!(form.error_text(name).unwrap(), "", "{name} should stay clear");
            assert!(!form.has_error(name));
        }
    }
    // Nothing was reset
    assert_eq!(form.document().value(control(&form, "firstName")).unwrap(), "Ada");
}

#[test]
fn test_invalid_textarea_is_focused() {
    let mut form = page();
    fill_valid(&mut form);
    form.fill(control(&form, "message"), "  \n ").unwrap();

    let message = control(&form, "message");
    assert_eq!(form.submit().unwrap(), SubmitOutcome::Rejected { focused: Some(message) });
}

#[test]
fn test_errored_radio_group_focuses_first_member() {
    let mut form = page();
    form.fill(control(&form, "firstName"), "Ada").unwrap();
    form.fill(control(&form, "lastName"), "Lovelace").unwrap();
    form.fill(control(&form, "email"), "ada@example.com").unwrap();
    form.fill(control(&form, "message"), "Hi").unwrap();
    form.click(control(&form, "consent")).unwrap();

    let general = by_id(&form, "general");
    assert_eq!(form.submit().unwrap(), SubmitOutcome::Rejected { focused: Some(general) });
    assert_eq!(form.error_text("queryType").unwrap(), NO_QUERY);
}

#[test]
fn test_submit_event_default_is_prevented() {
    let mut form = page();
    let form_node = by_id(&form, "contactForm");

    assert!(!form.dispatch_event(DomEvent::submit(form_node)).unwrap());
    assert!(form.has_error("firstName"));
}

// ============================================================================
// REAL-TIME FEEDBACK
// ============================================================================

#[test]
fn test_email_feedback_while_typing() {
    let mut form = page();
    let email = control(&form, "email");

    form.fill(email, "not-an-email").unwrap();
    assert_eq!(form.error_text("email").unwrap(), BAD_EMAIL);
    assert!(form.has_error("email"));

    form.fill(email, "user@example.com").unwrap();
    assert_eq!(form.error_text("email").unwrap(), "");
    assert!(!form.has_error("email"));
    assert_eq!(live_attr(&form, "email"), None);

    form.fill(email, "").unwrap();
    assert_eq!(form.error_text("email").unwrap(), REQUIRED);

    // Other fields are untouched by typing in one
    assert_eq!(form.error_text("firstName").unwrap(), "");
}

#[test]
fn test_whitespace_counts_as_empty() {
    let mut form = page();
    let first = control(&form, "firstName");
    assert!(!form.validate_field(first).unwrap());
    form.fill(first, "   ").unwrap();
    assert_eq!(form.error_text("firstName").unwrap(), REQUIRED);

    form.fill(first, " Ada ").unwrap();
    assert!(form.validate_field(first).unwrap());
    assert_eq!(form.error_text("firstName").unwrap(), "");
}

#[test]
fn test_byte_order_mark_counts_as_empty() {
    let mut form = page();
    let first = control(&form, "firstName");
    form.fill(first, "\u{FEFF}").unwrap();
    assert_eq!(form.error_text("firstName").unwrap(), REQUIRED);

    form.fill(first, "\u{A0}\u{2028}\u{3000}").unwrap();
    assert_eq!(form.error_text("firstName").unwrap(), REQUIRED);
}

#[test]
fn test_next_line_is_not_whitespace() {
    let mut form = page();
    let first = control(&form, "firstName");
    form.fill(first, "\u{85}").unwrap();
    assert_eq!(form.error_text("firstName").unwrap(), "");
    assert!(form.validate_field(first).unwrap());
}

#[test]
fn test_email_whitespace_handling() {
    let mut form = page();
    let email = control(&form, "email");

    form.fill(email, "a\u{FEFF}b@example.com").unwrap();
    assert_eq!(form.error_text("email").unwrap(), BAD_EMAIL);

    form.fill(email, "a\u{85}b@example.com").unwrap();
    assert_eq!(form.error_text("email").unwrap(), "");

    form.fill(email, "\u{FEFF}user@example.com\u{2029}").unwrap();
    assert!(form.validate_field(email).unwrap());
}

#[test]
fn test_email_is_trimmed_before_matching() {
    let mut form = page();
    let email = control(&form, "email");
    form.fill(email, "  user@example.com  ").unwrap();
    assert!(form.validate_field(email).unwrap());
}

#[test]
fn test_radio_group_validation() {
    let mut form = page();
    assert!(!form.validate_group("queryType").unwrap());
    assert_eq!(form.error_text("queryType").unwrap(), NO_QUERY);

    form.click(by_id(&form, "support")).unwrap();
    assert!(form.validate_group("queryType").unwrap());
    assert_eq!(form.error_text("queryType").unwrap(), "");
    assert!(!form.has_error("queryType"));
}

#[test]
fn test_consent_toggle_feedback() {
    let mut form = page();
    let consent = control(&form, "consent");

    form.click(consent).unwrap();
    assert!(form.document().checked(consent).unwrap());
    assert_eq!(form.error_text("consent").unwrap(), "");

    form.click(consent).unwrap();
    assert!(!form.document().checked(consent).unwrap());
    assert_eq!(form.error_text("consent").unwrap(), NO_CONSENT);
    assert!(!form.validate_consent(consent).unwrap());
}

#[test]
fn test_events_on_unbound_nodes_are_ignored() {
    let mut form = page();
    let toast = by_id(&form, "successToast");

    assert!(form.dispatch_event(DomEvent::input(toast)).unwrap());
    assert!(form.dispatch_event(DomEvent::change(toast)).unwrap());
    assert!(form.dispatch_event(DomEvent::key_down(toast, "ArrowDown")).unwrap());
    for name in FIELDS {
        assert_eq!(form.error_text(name).unwrap(), "");
    }
}

// ============================================================================
// ERROR PRESENTATION
// ============================================================================

#[test]
fn test_show_and_clear_are_idempotent() {
    let mut form = page();
    let display = by_id(&form, "email-error");
    let group = form.bindings().error("email").unwrap().container;

    form.show_error("email", "first").unwrap();
    form.show_error("email", "second").unwrap();
    assert_eq!(form.error_text("email").unwrap(), "second");
    assert_eq!(form.document().get_attribute(group, "class"), Some("form-group error"));
    assert_eq!(form.document().tree().children(display).count(), 1);

    form.clear_error("email").unwrap();
    form.clear_error("email").unwrap();
    assert_eq!(form.error_text("email").unwrap(), "");
    assert_eq!(form.document().get_attribute(group, "class"), Some("form-group"));
    assert_eq!(live_attr(&form, "email"), None);
}

#[test]
fn test_group_error_flags_fieldset() {
    let mut form = page();
    form.validate_group("queryType").unwrap();

    let fieldset = form.bindings().error("queryType").unwrap().container;
    assert!(form.document().matches(fieldset, "fieldset.error").unwrap());
}

#[test]
fn test_unknown_names_are_reported() {
    let mut form = page();
    assert!(matches!(form.show_error("phone", "x"), Err(cform::FormError::UnknownField(_))));
    assert!(matches!(form.validate_group("phone"), Err(cform::FormError::UnknownGroup(_))));

    let consent = control(&form, "consent");
    assert!(matches!(form.validate_field(consent), Err(cform::FormError::NotAField(_))));
}
