//! Controller errors
//!
//! These are contract faults between the page and the configuration.
//! User input failing validation is never an error.

use cform_dom::{DomError, NodeId};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("field `{0}` has no error display element")]
    MissingErrorDisplay(String),

    #[error("error display of `{0}` has no group container")]
    MissingContainer(String),

    #[error("catalog has no {variant} message for `{field}`")]
    MissingMessage { field: String, variant: &'static str },

    #[error("`{0}` is not a bound field")]
    UnknownField(String),

    #[error("node {0:?} is not a bound control")]
    NotAField(NodeId),

    #[error("no radio group named `{0}`")]
    UnknownGroup(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error(transparent)]
    Dom(#[from] DomError),
}
