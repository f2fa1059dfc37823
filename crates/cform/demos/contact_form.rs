//! Demo: replay a short session against the contact page
//!
//! Run with `RUST_LOG=debug cargo run -p cform --example contact_form`.

use std::time::Duration;

use anyhow::Context;
use cform::{FormConfig, FormController, SubmitOutcome};
use tracing_subscriber::EnvFilter;

const PAGE: &str = include_str!("contact.html");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let doc = cform_html::HtmlParser::new().parse_with_url(PAGE, "file:///contact.html")?;
    let mut form = FormController::attach(doc, FormConfig::default())?;
    println!("cform v{} attached to \"{}\"", cform::VERSION, form.document().title());

    // Submitting straight away flags every field
    let outcome = form.submit()?;
    report(&form, outcome);

    let field = |form: &FormController, name: &str| form.control(name).with_context(|| format!("no field {name}"));
    form.fill(field(&form, "firstName")?, "Ada")?;
    form.fill(field(&form, "lastName")?, "Lovelace")?;
    form.fill(field(&form, "email")?, "ada@analytical")?;
    println!("email: {:?}", form.error_text("email")?);
    form.fill(field(&form, "email")?, "ada@analytical.engine")?;

    let first_radio = field(&form, "queryType")?;
    form.press_key(first_radio, "ArrowDown")?;
    form.fill(field(&form, "message")?, "Could the engine weave algebraic patterns?")?;
    form.click(field(&form, "consent")?)?;

    let outcome = form.submit()?;
    report(&form, outcome);
    println!("toast visible: {}", form.is_notification_visible());
    form.advance_time(Duration::from_millis(form.config().notification_duration_ms))?;
    println!("toast visible after timeout: {}", form.is_notification_visible());

    Ok(())
}

fn report(form: &FormController, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted => println!("submitted"),
        SubmitOutcome::Rejected { focused } => {
            let focused = focused
                .and_then(|id| form.bindings().name_of(id))
                .unwrap_or("nothing");
            println!("rejected, focus on {focused}");
            for group in ["firstName", "lastName", "email", "queryType", "message", "consent"] {
                if form.has_error(group) {
                    println!("  {group}: {}", form.error_text(group).unwrap_or_default());
                }
            }
        }
    }
}
