//! Parsing form markup into live controls

use cform_dom::forms::ControlKind;
use cform_html::HtmlParser;

const FORM: &str = r#"
    <!DOCTYPE html>
    <html>
        <head><title> Contact us </title></head>
        <body>
            <form id="contactForm" novalidate>
                <div class="form-group">
                    <label for="firstName">First Name</label>
                    <input type="text" id="firstName" name="firstName" value="Ada" required>
                    <span class="error-message" id="firstName-error"></span>
                </div>
                <fieldset class="form-group radio-group">
                    <legend>Query Type</legend>
                    <input type="radio" id="general" name="queryType" value="general">
                    <input type="radio" id="support" name="queryType" value="support" checked>
                </fieldset>
                <textarea id="message" name="message" required>Hello there</textarea>
                <!-- consent -->
                <input type="checkbox" id="consent" name="consent" required>
                <button type="submit">Submit</button>
            </form>
        </body>
    </html>
"#;

#[test]
fn test_title_and_structure() {
    let doc = HtmlParser::new().parse_with_url(FORM, "file:///contact.html").unwrap();
    assert_eq!(doc.url(), "file:///contact.html");
    assert_eq!(doc.title(), "Contact us");
    assert!(doc.get_element_by_id("contactForm").is_some());
}

#[test]
fn test_controls_seeded_from_markup() {
    let doc = cform_html::parse(FORM).unwrap();

    let first = doc.get_element_by_id("firstName").unwrap();
    assert_eq!(doc.control_kind(first), Some(ControlKind::Text));
    assert_eq!(doc.value(first).unwrap(), "Ada");
    assert!(doc.is_required(first));

    let message = doc.get_element_by_id("message").unwrap();
    assert_eq!(doc.value(message).unwrap(), "Hello there");

    let support = doc.get_element_by_id("support").unwrap();
    let general = doc.get_element_by_id("general").unwrap();
    assert!(doc.checked(support).unwrap());
    assert!(!doc.checked(general).unwrap());

    let consent = doc.get_element_by_id("consent").unwrap();
    assert_eq!(doc.control_kind(consent), Some(ControlKind::Checkbox));
    assert!(!doc.checked(consent).unwrap());
}

#[test]
fn test_queries_over_parsed_form() {
    let doc = cform_html::parse(FORM).unwrap();
    let form = doc.get_element_by_id("contactForm").unwrap();

    let radios = doc.query_selector_all(form, r#"input[name="queryType"]"#).unwrap();
    assert_eq!(radios.len(), 2);

    let error = doc.get_element_by_id("firstName-error").unwrap();
    let group = doc.closest(error, ".form-group").unwrap().unwrap();
    assert!(doc.matches(group, "div").unwrap());

    let general = doc.get_element_by_id("general").unwrap();
    let fieldset = doc.closest(general, ".form-group, fieldset").unwrap().unwrap();
    assert!(doc.has_class(fieldset, "radio-group"));
}

#[test]
fn test_form_reset_after_edits() {
    let mut doc = cform_html::parse(FORM).unwrap();
    let form = doc.get_element_by_id("contactForm").unwrap();
    let first = doc.get_element_by_id("firstName").unwrap();
    let general = doc.get_element_by_id("general").unwrap();
    let support = doc.get_element_by_id("support").unwrap();

    doc.set_value(first, "Grace").unwrap();
    doc.set_checked(general, true).unwrap();
    assert!(!doc.checked(support).unwrap());

    // firstName, two radios, textarea, checkbox
    assert_eq!(doc.reset_form(form).unwrap(), 5);
    assert_eq!(doc.value(first).unwrap(), "Ada");
    assert!(doc.checked(support).unwrap());
    assert!(!doc.checked(general).unwrap());
}
