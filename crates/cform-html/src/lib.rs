//! cform HTML Parser
//!
//! HTML5 parsing built on html5ever, converted into a `cform_dom::Document`.

mod parser;

pub use parser::HtmlParser;
pub use cform_dom::Document;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dom(#[from] cform_dom::DomError),
}
