//! cform
//!
//! Client-side contact-form controller over a headless DOM.
//!
//! A [`FormController`] is attached once to a parsed page. It validates
//! fields as the user types, renders accessible inline errors, moves
//! selection through radio groups with the arrow keys, and on a valid
//! submission resets the form and shows a transient success toast.
//!
//! # Example
//! ```
//! use cform::{FormConfig, FormController, SubmitOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/contact.html"))?;
//! let doc = cform_html::parse(&page)?;
//! let mut form = FormController::attach(doc, FormConfig::default())?;
//! let outcome = form.submit()?;
//! assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
//! # Ok(())
//! # }
//! ```

mod bindings;
mod catalog;
mod config;
mod controller;
mod error;
mod notification;
mod presentation;
mod timers;
mod validator;

pub use bindings::{ErrorBinding, FormBindings, RadioGroup};
pub use catalog::{ErrorCatalog, ErrorMessage};
pub use config::FormConfig;
pub use controller::{FormController, SubmitOutcome};
pub use error::FormError;
pub use notification::SuccessNotification;
pub use timers::{Timer, TimerId, TimerManager, TimerTask};
pub use validator::{is_form_whitespace, is_valid_email};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
