//! ARIA live regions
//!
//! Marks error text so assistive technology reads content changes aloud.

use cform_dom::{Document, DomResult, NodeId};
use serde::Deserialize;

/// Attribute carrying the live-region politeness
pub const ARIA_LIVE: &str = "aria-live";

/// Live region mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveRegionMode {
    Off,
    #[default]
    Polite,
    Assertive,
}

impl LiveRegionMode {
    /// Parse an `aria-live` value; unknown values mean `off`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "polite" => Self::Polite,
            "assertive" => Self::Assertive,
            _ => Self::Off,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// Mark `node` as a live region
pub fn announce(doc: &mut Document, node: NodeId, mode: LiveRegionMode) -> DomResult<()> {
    doc.set_attribute(node, ARIA_LIVE, mode.as_str())
}

/// Drop the live-region marking from `node`
pub fn silence(doc: &mut Document, node: NodeId) -> DomResult<()> {
    doc.remove_attribute(node, ARIA_LIVE)
}

/// Current live-region mode, `None` when unmarked
pub fn live_region_mode(doc: &Document, node: NodeId) -> Option<LiveRegionMode> {
    doc.get_attribute(node, ARIA_LIVE).map(LiveRegionMode::parse)
}
