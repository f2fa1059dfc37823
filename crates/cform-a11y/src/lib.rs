//! cform Accessibility
//!
//! Features:
//! - ARIA live regions for announced error text
//! - Focus management with roving focus inside a group
//! - Arrow-key navigation mapping

pub mod aria;
pub mod focus;
pub mod keyboard;

pub use aria::{announce, live_region_mode, silence, LiveRegionMode, ARIA_LIVE};
pub use focus::FocusManager;
pub use keyboard::NavDirection;
