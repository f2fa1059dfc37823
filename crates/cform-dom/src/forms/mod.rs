//! Form Controls
//!
//! Control classification, live value/checkedness state, radio-group
//! exclusivity, form reset and constraint validity flags.

mod control;
mod validation;

pub use control::{ControlKind, ControlState};
pub use validation::ValidityState;
